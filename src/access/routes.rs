use std::fmt;

use crate::access::roles::{ADMIN, NEW_USER, RoleHierarchy, USER};
use crate::common::ConfigError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum RouteId {
    Home,
    Login,
    Register,
    Admin,
    NewUser,
    Book,
    Author,
    Category,
    Tag,
    Profile,
    Favorites,
    NotFound,
}

impl RouteId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Admin => "Admin",
            Self::NewUser => "NewUser",
            Self::Book => "Book",
            Self::Author => "Author",
            Self::Category => "Category",
            Self::Tag => "Tag",
            Self::Profile => "Profile",
            Self::Favorites => "Favorites",
            Self::NotFound => "NotFound",
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Segment {
    Literal(String),
    Param(String),
    CatchAll,
}

/// A route path such as `/book/:id` or `/*`.
///
/// `:name` captures one segment; a trailing `*` matches the rest of the path,
/// including nothing at all.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        if !raw.starts_with('/') {
            return Err(ConfigError::MalformedPattern {
                pattern: raw.to_string(),
                reason: "must start with '/'",
            });
        }

        let parts: Vec<&str> = split_path(raw).collect();
        let mut segments = Vec::with_capacity(parts.len());

        for (i, part) in parts.iter().enumerate() {
            let segment = if *part == "*" {
                if i + 1 != parts.len() {
                    return Err(ConfigError::MalformedPattern {
                        pattern: raw.to_string(),
                        reason: "'*' is only allowed as the last segment",
                    });
                }
                Segment::CatchAll
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(ConfigError::MalformedPattern {
                        pattern: raw.to_string(),
                        reason: "parameter name is empty",
                    });
                }
                Segment::Param(name.to_string())
            } else {
                Segment::Literal(part.to_string())
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::CatchAll))
    }

    /// Returns the captured parameters when `path` matches.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = split_path(path).collect();
        let mut params = Params::default();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::CatchAll => return Some(params),
                Segment::Literal(lit) => {
                    if parts.get(i) != Some(&lit.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.get(i)?;
                    params.0.push((name.clone(), value.to_string()));
                }
            }
        }

        (parts.len() == self.segments.len()).then_some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Strips query, fragment and trailing slashes: `/login/?next=x` -> `/login`.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let joined = split_path(&path[..end]).collect::<Vec<_>>().join("/");
    format!("/{joined}")
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Minimum role a route requires, resolved against the hierarchy at startup.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MinRole {
    pub label: String,
    pub rank: i32,
}

/// Unresolved route entry, as written in the route table source.
#[derive(Debug, Clone)]
pub struct RouteDef {
    pub id: RouteId,
    pub pattern: String,
    pub min_role: Option<String>,
}

impl RouteDef {
    pub fn new(id: RouteId, pattern: impl Into<String>) -> Self {
        Self {
            id,
            pattern: pattern.into(),
            min_role: None,
        }
    }

    pub fn min_role(mut self, role: impl Into<String>) -> Self {
        self.min_role = Some(role.into());
        self
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RouteDescriptor {
    pub id: RouteId,
    pub pattern: PathPattern,
    pub min_role: Option<MinRole>,
}

/// A navigation target: the normalized path and the route it resolved to.
#[derive(Debug, Clone)]
pub struct Target<'a> {
    pub path: String,
    pub route: &'a RouteDescriptor,
    pub params: Params,
}

impl Target<'_> {
    pub fn min_role(&self) -> Option<&MinRole> {
        self.route.min_role.as_ref()
    }
}

/// Ordered, validated route table. Resolution is first match wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn build<I>(defs: I, hierarchy: &RoleHierarchy) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = RouteDef>,
    {
        let mut routes: Vec<RouteDescriptor> = Vec::new();

        for def in defs {
            if routes.iter().any(|r| r.id == def.id) {
                return Err(ConfigError::DuplicateRoute(def.id));
            }
            if let Some(prev) = routes.iter().find(|r| r.pattern.is_catch_all()) {
                return Err(ConfigError::UnreachableRoute {
                    route: def.id,
                    shadowed_by: prev.id,
                });
            }

            let pattern = PathPattern::parse(&def.pattern)?;

            let min_role = match def.min_role {
                Some(label) => {
                    let rank = hierarchy.rank(&label).ok_or_else(|| {
                        ConfigError::UnknownMinRole {
                            route: def.id,
                            role: label.clone(),
                        }
                    })?;
                    Some(MinRole { label, rank })
                }
                None => None,
            };

            routes.push(RouteDescriptor {
                id: def.id,
                pattern,
                min_role,
            });
        }

        log::debug!("route table built with {} routes", routes.len());

        Ok(Self { routes })
    }

    pub fn standard(hierarchy: &RoleHierarchy) -> Result<Self, ConfigError> {
        Self::build(standard_routes(), hierarchy)
    }

    pub fn resolve(&self, path: &str) -> Option<Target<'_>> {
        let path = normalize_path(path);
        self.routes.iter().find_map(|route| {
            route.pattern.matches(&path).map(|params| Target {
                path: path.clone(),
                route,
                params,
            })
        })
    }

    pub fn get(&self, id: RouteId) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

pub fn standard_routes() -> Vec<RouteDef> {
    vec![
        RouteDef::new(RouteId::Home, "/"),
        RouteDef::new(RouteId::Login, "/login"),
        RouteDef::new(RouteId::Register, "/register"),
        RouteDef::new(RouteId::Admin, "/adminbackdoor").min_role(ADMIN),
        RouteDef::new(RouteId::NewUser, "/new-user").min_role(NEW_USER),
        RouteDef::new(RouteId::Book, "/book/:id"),
        RouteDef::new(RouteId::Author, "/author/:id"),
        RouteDef::new(RouteId::Category, "/category/:slug"),
        RouteDef::new(RouteId::Tag, "/tag/:id"),
        RouteDef::new(RouteId::Profile, "/profile/:id"),
        RouteDef::new(RouteId::Favorites, "/favorites").min_role(USER),
        RouteDef::new(RouteId::NotFound, "/*"),
    ]
}

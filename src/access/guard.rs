//! Pre-navigation access control.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//!
//! 1. no token and the path is not public: go to login
//! 2. role is the quarantine role and the path is not the quarantine page:
//!    go to the quarantine page
//! 3. the route has a minimum role: go to login if token or role is missing,
//!    go home if the role ranks below it
//! 4. otherwise proceed
//!
//! Rule 2 fires before rule 3, so a quarantined user is sent to the
//! quarantine page even from routes that declare no minimum role.

use std::fmt;
use std::sync::Arc;

use crate::access::roles::{NEW_USER, RoleHierarchy};
use crate::access::routes::Target;
use crate::access::session::SessionContext;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DenyReason {
    Unauthenticated,
    Quarantined,
    MissingSession,
    InsufficientRole,
}

impl DenyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Quarantined => "quarantined",
            Self::MissingSession => "missing session",
            Self::InsufficientRole => "insufficient role",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Decision {
    Proceed,
    Redirect { to: String, reason: DenyReason },
}

impl Decision {
    pub fn redirect_path(&self) -> Option<&str> {
        match self {
            Self::Proceed => None,
            Self::Redirect { to, .. } => Some(to),
        }
    }

    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Paths and labels the guard redirects between.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GuardConfig {
    pub public_paths: Vec<String>,
    pub login_path: String,
    pub home_path: String,
    pub quarantine_path: String,
    pub quarantine_role: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            public_paths: vec!["/login".into(), "/register".into()],
            login_path: "/login".into(),
            home_path: "/".into(),
            quarantine_path: "/new-user".into(),
            quarantine_role: NEW_USER.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    hierarchy: Arc<RoleHierarchy>,
    config: GuardConfig,
}

impl RouteGuard {
    pub fn new(hierarchy: Arc<RoleHierarchy>, config: GuardConfig) -> Self {
        Self { hierarchy, config }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn hierarchy(&self) -> &RoleHierarchy {
        &self.hierarchy
    }

    fn is_public(&self, path: &str) -> bool {
        self.config.public_paths.iter().any(|p| p == path)
    }

    fn redirect(&self, to: &str, reason: DenyReason) -> Decision {
        Decision::Redirect {
            to: to.to_string(),
            reason,
        }
    }

    pub fn decide(&self, session: &SessionContext, to: &Target<'_>) -> Decision {
        let path = to.path.as_str();

        if !session.is_authenticated() && !self.is_public(path) {
            return self.redirect(&self.config.login_path, DenyReason::Unauthenticated);
        }

        if session.role() == Some(self.config.quarantine_role.as_str())
            && path != self.config.quarantine_path
        {
            return self.redirect(&self.config.quarantine_path, DenyReason::Quarantined);
        }

        if let Some(required) = to.min_role() {
            let (Some(_), Some(role)) = (session.token(), session.role()) else {
                return self.redirect(&self.config.login_path, DenyReason::MissingSession);
            };

            if self.hierarchy.level(Some(role)) < required.rank {
                return self.redirect(&self.config.home_path, DenyReason::InsufficientRole);
            }
        }

        Decision::Proceed
    }

    /// Router hook. `next` receives `None` to proceed or the redirect path.
    pub fn before_each<F>(
        &self,
        session: &SessionContext,
        to: &Target<'_>,
        from: Option<&Target<'_>>,
        next: F,
    ) where
        F: FnOnce(Option<&str>),
    {
        let decision = self.decide(session, to);

        match &decision {
            Decision::Proceed => {
                log::debug!(
                    "navigation {} -> {} allowed",
                    from.map(|f| f.path.as_str()).unwrap_or("<start>"),
                    to.path
                );
            }
            Decision::Redirect { to: dest, reason } => {
                log::debug!(
                    "navigation to {} ({}) redirected to {}: {}",
                    to.path,
                    to.route.id,
                    dest,
                    reason
                );
            }
        }

        next(decision.redirect_path());
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(Arc::new(RoleHierarchy::standard()), GuardConfig::default())
    }
}

use std::fmt;

use crate::common::ConfigError;

pub const NEW_USER: &str = "new-user";
pub const USER: &str = "user";
pub const ADMIN: &str = "admin";
pub const SUPERADMIN: &str = "superadmin";

/// Rank assigned to any label the hierarchy does not know.
pub const UNRANKED: i32 = -1;

/// Ordered role table. A label's rank is its position in the table, so ranks
/// strictly increase in the order the labels were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleHierarchy {
    labels: Vec<String>,
}

impl RoleHierarchy {
    /// Builds a hierarchy from labels listed lowest rank first.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();

        for label in labels {
            let label = label.into();
            if label.trim().is_empty() {
                return Err(ConfigError::EmptyRole);
            }
            if out.contains(&label) {
                return Err(ConfigError::DuplicateRole(label));
            }
            out.push(label);
        }

        Ok(Self { labels: out })
    }

    /// `new-user < user < admin < superadmin`
    pub fn standard() -> Self {
        Self {
            labels: [NEW_USER, USER, ADMIN, SUPERADMIN]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn rank(&self, label: &str) -> Option<i32> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| i as i32)
    }

    /// Rank of a possibly missing or unknown role, falling back to [`UNRANKED`].
    pub fn level(&self, role: Option<&str>) -> i32 {
        role.and_then(|r| self.rank(r)).unwrap_or(UNRANKED)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.rank(label).is_some()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for RoleHierarchy {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for RoleHierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join(" < "))
    }
}

pub fn is_admin(role: Option<&str>) -> bool {
    matches!(role, Some(ADMIN) | Some(SUPERADMIN))
}

pub fn is_superadmin(role: Option<&str>) -> bool {
    role == Some(SUPERADMIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_ranks_increase_in_order() {
        let h = RoleHierarchy::standard();
        assert_eq!(h.rank(NEW_USER), Some(0));
        assert_eq!(h.rank(USER), Some(1));
        assert_eq!(h.rank(ADMIN), Some(2));
        assert_eq!(h.rank(SUPERADMIN), Some(3));
    }

    #[test]
    fn unknown_and_missing_roles_are_unranked() {
        let h = RoleHierarchy::standard();
        assert_eq!(h.level(Some("librarian")), UNRANKED);
        assert_eq!(h.level(None), UNRANKED);
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let err = RoleHierarchy::from_labels(["user", "admin", "user"]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateRole(ref r) if r == "user"));
    }

    #[test]
    fn blank_label_is_rejected() {
        assert!(matches!(
            RoleHierarchy::from_labels(["user", " "]),
            Err(ConfigError::EmptyRole)
        ));
    }

    #[test]
    fn admin_helpers() {
        assert!(is_admin(Some(ADMIN)));
        assert!(is_admin(Some(SUPERADMIN)));
        assert!(!is_admin(Some(USER)));
        assert!(!is_admin(None));
        assert!(is_superadmin(Some(SUPERADMIN)));
        assert!(!is_superadmin(Some(ADMIN)));
    }
}

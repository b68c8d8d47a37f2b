//! Route access control: role hierarchy, route table, session and guard.

pub mod guard;
pub mod roles;
pub mod routes;
pub mod session;

pub use guard::{Decision, DenyReason, GuardConfig, RouteGuard};
pub use roles::RoleHierarchy;
pub use routes::{MinRole, Params, PathPattern, RouteDef, RouteDescriptor, RouteId, RouteTable, Target};
pub use session::{MemoryStore, SessionContext, SessionStore};

#[cfg(feature = "csr")]
pub use session::LocalStorage;

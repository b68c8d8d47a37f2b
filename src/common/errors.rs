use thiserror::Error;

use crate::access::RouteId;

/// Startup configuration problems. These are fatal: the route table and role
/// hierarchy are never built from invalid input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Role label must not be empty")]
    EmptyRole,

    #[error("Role {0:?} is listed more than once")]
    DuplicateRole(String),

    #[error("Route {route} requires unknown role {role:?}")]
    UnknownMinRole { route: RouteId, role: String },

    #[error("Route pattern {pattern:?} is malformed: {reason}")]
    MalformedPattern {
        pattern: String,
        reason: &'static str,
    },

    #[error("Route {0} is declared more than once")]
    DuplicateRoute(RouteId),

    #[error("Route {route} can never match, {shadowed_by} catches everything before it")]
    UnreachableRoute { route: RouteId, shadowed_by: RouteId },

    #[error("Invalid API base URL {0:?}")]
    InvalidBaseUrl(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Session expired, please sign in again")]
    Unauthorized,

    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

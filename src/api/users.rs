use crate::api::Endpoint;
use crate::common::ApiError;
use crate::models::{UserCreate, UserUpdate};

pub fn get_user_profile(id: i64) -> Endpoint {
    Endpoint::get(["users".to_string(), id.to_string()])
}

/// Admin only.
pub fn get_users() -> Endpoint {
    Endpoint::get(["users"])
}

/// Admin only. The server defaults the role to `new-user`.
pub fn create_user(user: &UserCreate) -> Result<Endpoint, ApiError> {
    Endpoint::post(["users"]).with_json(user)
}

pub fn update_user(id: i64, updates: &UserUpdate) -> Result<Endpoint, ApiError> {
    if updates.is_empty() {
        return Err(ApiError::InvalidRequest("nothing to update".into()));
    }
    Endpoint::put(["users".to_string(), id.to_string()]).with_json(updates)
}

pub fn soft_delete_user(id: i64) -> Endpoint {
    Endpoint::post(["users".to_string(), id.to_string(), "delete".to_string()])
}

/// Superadmin only.
pub fn hard_delete_user(id: i64) -> Endpoint {
    Endpoint::post(["users".to_string(), id.to_string(), "harddelete".to_string()])
}

pub fn get_user_books(user_id: i64) -> Endpoint {
    Endpoint::get(["books".to_string(), "author".to_string(), user_id.to_string()])
}

/// Favorites of the signed-in user.
pub fn get_user_favorite_books() -> Endpoint {
    Endpoint::get(["books", "favorites"])
}

pub fn get_user_comments(user_id: i64) -> Endpoint {
    Endpoint::get(["comments".to_string(), "user".to_string(), user_id.to_string()])
}

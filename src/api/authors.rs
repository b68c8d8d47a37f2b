use crate::api::Endpoint;
use crate::common::ApiError;
use crate::models::AuthorInput;

pub fn list_authors() -> Endpoint {
    Endpoint::get(["authors"])
}

pub fn get_author(id: i64) -> Endpoint {
    Endpoint::get(["authors".to_string(), id.to_string()])
}

pub fn create_author(author: &AuthorInput) -> Result<Endpoint, ApiError> {
    Endpoint::post(["authors"]).with_json(author)
}

pub fn update_author(id: i64, author: &AuthorInput) -> Result<Endpoint, ApiError> {
    Endpoint::post(["authors".to_string(), id.to_string()]).with_json(author)
}

/// Admin only.
pub fn delete_author(id: i64) -> Endpoint {
    Endpoint::post(["authors".to_string(), id.to_string(), "delete".to_string()])
}

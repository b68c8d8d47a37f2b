use crate::api::Endpoint;
use crate::common::ApiError;
use crate::models::{CommentCreate, CommentStatusUpdate, CommentUpdate, Page};

pub fn create_comment(comment: &CommentCreate) -> Result<Endpoint, ApiError> {
    if comment.text.trim().is_empty() {
        return Err(ApiError::InvalidRequest("comment text is empty".into()));
    }
    Endpoint::post(["comments"]).with_json(comment)
}

pub fn update_comment(id: i64, update: &CommentUpdate) -> Result<Endpoint, ApiError> {
    Endpoint::post(["comments".to_string(), id.to_string()]).with_json(update)
}

/// Soft delete.
pub fn delete_comment(id: i64) -> Endpoint {
    Endpoint::post(["comments".to_string(), id.to_string(), "delete".to_string()])
}

pub fn get_comments_by_book(book_id: i64, page: Page) -> Endpoint {
    Endpoint::get(["comments".to_string(), "book".to_string(), book_id.to_string()])
        .with_query(page.to_query())
}

pub fn get_comments_by_user(user_id: i64) -> Endpoint {
    Endpoint::get(["comments".to_string(), "user".to_string(), user_id.to_string()])
}

pub fn get_last_comments() -> Endpoint {
    Endpoint::get(["comments", "last"])
}

pub fn set_comment_status(id: i64, status: &CommentStatusUpdate) -> Result<Endpoint, ApiError> {
    Endpoint::post(["comments".to_string(), id.to_string(), "status".to_string()])
        .with_json(status)
}

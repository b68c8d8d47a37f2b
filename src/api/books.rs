//! `/books` operations.

use crate::api::Endpoint;
use crate::common::ApiError;
use crate::models::{BookCreate, BookSearch, BookStatusUpdate, BookUpdate};

pub fn get_book(id: i64) -> Endpoint {
    Endpoint::get(["books".to_string(), id.to_string()])
}

/// Favorites flag and comments; fetched separately and never cached.
pub fn get_book_extras(id: i64) -> Endpoint {
    Endpoint::get(["books".to_string(), id.to_string(), "extras".to_string()])
}

pub fn search_books(search: &BookSearch) -> Endpoint {
    Endpoint::get(["books"]).with_query(search.to_query())
}

pub fn get_books_by_author(author_id: i64) -> Endpoint {
    Endpoint::get(["books".to_string(), "author".to_string(), author_id.to_string()])
}

pub fn get_books_by_tag(tag_id: i64) -> Endpoint {
    Endpoint::get(["books".to_string(), "tag".to_string(), tag_id.to_string()])
}

pub fn get_duplicate_books(title: &str) -> Endpoint {
    Endpoint::get(["books", "duplicates", title])
}

pub fn get_my_books() -> Endpoint {
    Endpoint::get(["books", "mine"])
}

pub fn get_new_releases() -> Endpoint {
    Endpoint::get(["books", "new-releases"])
}

pub fn get_favorite_books() -> Endpoint {
    Endpoint::get(["books", "favorites"])
}

pub fn add_to_favorites(book_id: i64) -> Endpoint {
    Endpoint::post([
        "books".to_string(),
        book_id.to_string(),
        "favorite".to_string(),
        "add".to_string(),
    ])
}

pub fn remove_from_favorites(book_id: i64) -> Endpoint {
    Endpoint::post([
        "books".to_string(),
        book_id.to_string(),
        "favorite".to_string(),
        "remove".to_string(),
    ])
}

pub fn create_book(book: &BookCreate) -> Result<Endpoint, ApiError> {
    if book.title.trim().is_empty() {
        return Err(ApiError::InvalidRequest("book title is required".into()));
    }
    Endpoint::post(["books"]).with_json(book)
}

pub fn update_book(book_id: i64, updates: &BookUpdate) -> Result<Endpoint, ApiError> {
    Endpoint::post(["books".to_string(), book_id.to_string()]).with_json(updates)
}

pub fn delete_book(book_id: i64) -> Endpoint {
    Endpoint::post(["books".to_string(), book_id.to_string(), "delete".to_string()])
}

pub fn update_book_status(book_id: i64, status: &BookStatusUpdate) -> Result<Endpoint, ApiError> {
    Endpoint::post(["books".to_string(), book_id.to_string(), "status".to_string()])
        .with_json(status)
}

/// Replaces every author of the book.
pub fn set_book_authors(book_id: i64, author_ids: &[i64]) -> Result<Endpoint, ApiError> {
    Endpoint::post(["books".to_string(), book_id.to_string(), "authors".to_string()])
        .with_json(&serde_json::json!({ "author_ids": author_ids }))
}

pub fn add_book_author(book_id: i64, author_id: i64) -> Endpoint {
    Endpoint::post([
        "books".to_string(),
        book_id.to_string(),
        "authors".to_string(),
        author_id.to_string(),
    ])
}

pub fn remove_book_author(book_id: i64, author_id: i64) -> Endpoint {
    Endpoint::post([
        "books".to_string(),
        book_id.to_string(),
        "authors".to_string(),
        author_id.to_string(),
        "remove".to_string(),
    ])
}

/// Replaces every tag of the book.
pub fn set_book_tags(book_id: i64, tag_ids: &[i64]) -> Result<Endpoint, ApiError> {
    Endpoint::post(["books".to_string(), book_id.to_string(), "tags".to_string()])
        .with_json(&serde_json::json!({ "tag_ids": tag_ids }))
}

pub fn add_book_tag(book_id: i64, tag_id: i64) -> Endpoint {
    Endpoint::post([
        "books".to_string(),
        book_id.to_string(),
        "tags".to_string(),
        tag_id.to_string(),
    ])
}

pub fn remove_book_tag(book_id: i64, tag_id: i64) -> Endpoint {
    Endpoint::post([
        "books".to_string(),
        book_id.to_string(),
        "tags".to_string(),
        tag_id.to_string(),
        "remove".to_string(),
    ])
}

use crate::api::Endpoint;
use crate::common::ApiError;
use crate::models::{BookTagLink, TagInput};

pub fn search_tags(query: &str) -> Endpoint {
    let query = query.trim();
    let endpoint = Endpoint::get(["tags"]);
    if query.is_empty() {
        return endpoint;
    }
    endpoint.with_query(vec![("query".to_string(), query.to_string())])
}

pub fn get_tag(id: i64) -> Endpoint {
    Endpoint::get(["tags".to_string(), id.to_string()])
}

pub fn get_tags_by_book(book_id: i64) -> Endpoint {
    Endpoint::get(["tags".to_string(), "book".to_string(), book_id.to_string()])
}

pub fn create_tag(tag: &TagInput) -> Result<Endpoint, ApiError> {
    Endpoint::post(["tags"]).with_json(tag)
}

pub fn update_tag(id: i64, tag: &TagInput) -> Result<Endpoint, ApiError> {
    Endpoint::put(["tags".to_string(), id.to_string()]).with_json(tag)
}

pub fn delete_tag(id: i64) -> Endpoint {
    Endpoint::post(["tags".to_string(), id.to_string(), "delete".to_string()])
}

pub fn assign_tag(link: BookTagLink) -> Result<Endpoint, ApiError> {
    Endpoint::post(["tags", "assign"]).with_json(&link)
}

pub fn remove_tag(link: BookTagLink) -> Endpoint {
    Endpoint::post(["tags", "remove"]).with_query(vec![
        ("book_id".to_string(), link.book_id.to_string()),
        ("tag_id".to_string(), link.tag_id.to_string()),
    ])
}

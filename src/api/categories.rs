use crate::api::Endpoint;
use crate::common::ApiError;
use crate::models::CategoryInput;

/// Whole category tree.
pub fn get_all_categories() -> Endpoint {
    Endpoint::get(["categories"])
}

pub fn get_root_categories() -> Endpoint {
    Endpoint::get(["categories", "root"])
}

pub fn get_category(id: i64) -> Endpoint {
    Endpoint::get(["categories".to_string(), id.to_string()])
}

pub fn get_category_children(id: i64) -> Endpoint {
    Endpoint::get(["categories".to_string(), id.to_string(), "children".to_string()])
}

pub fn get_category_books(id: i64) -> Endpoint {
    Endpoint::get(["categories".to_string(), id.to_string(), "books".to_string()])
}

pub fn create_category(category: &CategoryInput) -> Result<Endpoint, ApiError> {
    Endpoint::post(["categories"]).with_json(category)
}

pub fn update_category(id: i64, category: &CategoryInput) -> Result<Endpoint, ApiError> {
    Endpoint::post(["categories".to_string(), id.to_string()]).with_json(category)
}

pub fn delete_category(id: i64) -> Endpoint {
    Endpoint::post(["categories".to_string(), id.to_string(), "delete".to_string()])
}

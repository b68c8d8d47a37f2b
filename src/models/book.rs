use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Author, BookComment, BookStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub tags: Vec<BookTag>,
    #[serde(default)]
    pub files: Vec<BookFile>,
    #[serde(default)]
    pub images: Vec<BookImage>,
}

/// Card-sized listing entry returned by search and collection endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPreview {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub publish_year: Option<i32>,
}

/// Per-viewer data loaded after the book itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookExtras {
    pub in_favorites: bool,
    #[serde(default)]
    pub comments: Vec<BookComment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookTag {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub weight: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookFile {
    pub id: i64,
    pub format: String,
    pub url: String,
    pub file_size: i64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookImage {
    pub id: i64,
    pub url: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

/// Partial update; absent fields are left untouched by the server.
pub type BookUpdate = BookCreate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BookStatusUpdate {
    pub status: BookStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookSearch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub tag: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl BookSearch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.tag.is_none()
            && self.category.is_none()
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let fields = [
            ("title", self.title.clone()),
            ("author", self.author.clone()),
            ("tag", self.tag.clone()),
            ("category", self.category.clone()),
            ("limit", self.limit.map(|v| v.to_string())),
            ("offset", self.offset.map(|v| v.to_string())),
        ];

        fields
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k.to_string(), v)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRelease {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

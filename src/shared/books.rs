//! Book Types
//!
//! Wire and row types for books. JSON uses camelCase field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::{require_text, require_text_if_present, SharedError};
use crate::shared::pagination::{filter_text, Page};

/// A book as stored and returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub published_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Body of `POST /books`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub published_date: Option<DateTime<Utc>>,
    pub image: Option<String>,
}

impl CreateBookRequest {
    /// Check required fields, returning the publication date
    pub fn validate(&self) -> Result<DateTime<Utc>, SharedError> {
        require_text("title", &self.title)?;
        require_text("author", &self.author)?;
        self.published_date
            .ok_or_else(|| SharedError::validation("publishedDate", "publishedDate is required"))
    }
}

/// Body of `PUT /books/{id}`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_date: Option<DateTime<Utc>>,
}

impl UpdateBookRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_text_if_present("title", self.title.as_deref())?;
        require_text_if_present("author", self.author.as_deref())
    }
}

/// Query string of `GET /books`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBooksQuery {
    pub page: Option<i64>,
    pub records_per_page: Option<i64>,
    pub title_contains: Option<String>,
    pub author_contains: Option<String>,
}

/// Validated form of [`ListBooksQuery`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub page: Page,
    pub title_contains: Option<String>,
    pub author_contains: Option<String>,
}

impl TryFrom<ListBooksQuery> for BookFilter {
    type Error = SharedError;

    fn try_from(query: ListBooksQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            page: Page::new(query.page, query.records_per_page)?,
            title_contains: filter_text(query.title_contains),
            author_contains: filter_text(query.author_contains),
        })
    }
}

//! Quote Types
//!
//! Wire and row types for quotes and the favorite toggle.

use serde::{Deserialize, Serialize};

use crate::shared::error::{require_text, require_text_if_present, SharedError};
use crate::shared::pagination::{filter_text, Page};

/// A quote as stored and returned by the API
///
/// `is_favorite` lives on the quote row itself, so every user linked to the
/// quote observes the same flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: i64,
    pub description: String,
    pub author: String,
    pub is_favorite: bool,
}

/// Body of `POST /quotes`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
}

impl CreateQuoteRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_text("description", &self.description)?;
        require_text("author", &self.author)
    }
}

/// Body of `PUT /quotes/{id}`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuoteRequest {
    pub description: Option<String>,
    pub author: Option<String>,
    pub is_favorite: Option<bool>,
}

impl UpdateQuoteRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_text_if_present("description", self.description.as_deref())?;
        require_text_if_present("author", self.author.as_deref())
    }
}

/// Body of `PATCH /quotes/{id}/favorite`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub is_favorite: bool,
}

/// Result of a favorite toggle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteState {
    pub id: i64,
    pub is_favorite: bool,
}

/// Query string of `GET /quotes`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuotesQuery {
    pub page: Option<i64>,
    pub records_per_page: Option<i64>,
    pub description_contains: Option<String>,
    pub author_contains: Option<String>,
}

/// Validated form of [`ListQuotesQuery`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteFilter {
    pub page: Page,
    pub description_contains: Option<String>,
    pub author_contains: Option<String>,
}

impl TryFrom<ListQuotesQuery> for QuoteFilter {
    type Error = SharedError;

    fn try_from(query: ListQuotesQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            page: Page::new(query.page, query.records_per_page)?,
            description_contains: filter_text(query.description_contains),
            author_contains: filter_text(query.author_contains),
        })
    }
}

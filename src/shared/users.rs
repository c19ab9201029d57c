//! User Types
//!
//! Request and response types for the user endpoints. None of these carry a
//! password hash.

use serde::{Deserialize, Serialize};

use crate::shared::books::Book;
use crate::shared::error::{require_text, require_text_if_present, SharedError};
use crate::shared::pagination::{filter_text, Page};
use crate::shared::quotes::Quote;

/// Public view of a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
}

/// A user together with the quotes and books linked to them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserWithCollections {
    pub id: i64,
    pub username: String,
    pub quotes: Vec<Quote>,
    pub books: Vec<Book>,
}

/// Credentials used by `POST /register`, `POST /login`, and `POST /users`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_text("username", &self.username)?;
        require_text("password", &self.password)
    }
}

/// Body of `PUT /users/{id}`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_text_if_present("username", self.username.as_deref())?;
        require_text_if_present("password", self.password.as_deref())
    }
}

/// Query string of `GET /users` and `GET /users/favoriteQuotes`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    pub page: Option<i64>,
    pub records_per_page: Option<i64>,
    pub username_contains: Option<String>,
}

/// Validated form of [`ListUsersQuery`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub page: Page,
    pub username_contains: Option<String>,
}

impl TryFrom<ListUsersQuery> for UserFilter {
    type Error = SharedError;

    fn try_from(query: ListUsersQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            page: Page::new(query.page, query.records_per_page)?,
            username_contains: filter_text(query.username_contains),
        })
    }
}

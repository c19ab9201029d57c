//! Pagination and substring filters shared by the list endpoints.

use crate::shared::error::SharedError;

/// Page used when the client does not send one
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the client does not send one
pub const DEFAULT_RECORDS_PER_PAGE: i64 = 100;

/// A resolved `LIMIT`/`OFFSET` window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    /// Resolve 1-based `page` and `records_per_page` query values.
    pub fn new(page: Option<i64>, records_per_page: Option<i64>) -> Result<Self, SharedError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = records_per_page.unwrap_or(DEFAULT_RECORDS_PER_PAGE);

        if page < 1 {
            return Err(SharedError::validation("page", "page must be at least 1"));
        }
        if limit < 1 {
            return Err(SharedError::validation(
                "recordsPerPage",
                "recordsPerPage must be at least 1",
            ));
        }

        let offset = (page - 1)
            .checked_mul(limit)
            .ok_or_else(|| SharedError::validation("page", "page is out of range"))?;

        Ok(Self { limit, offset })
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RECORDS_PER_PAGE,
            offset: 0,
        }
    }
}

/// Drop blank substring filters so they match everything
pub fn filter_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

use base64::{engine::general_purpose::STANDARD, Engine};
use clap::Args;
use core_types::pagination::{PageRequest, QUERY_DEFAULT_LIMIT};
use thiserror::Error;

use crate::flags::{FLAG_COUNT_TOTAL, FLAG_LIMIT, FLAG_OFFSET, FLAG_PAGE, FLAG_PAGE_KEY, FLAG_REVERSE};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaginationError {
    #[error("invalid request: page and offset cannot be used together")]
    PageAndOffset,

    #[error("invalid request: invalid page key {key}: {reason}")]
    InvalidPageKey { key: String, reason: String },

    #[error("invalid request: page {page} with limit {limit} overflows the offset")]
    OffsetOverflow { page: u64, limit: u64 },
}

/// Pagination flags of list queries.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PaginationArgs {
    /// Pagination page-key, base64 encoded as returned in `next_key`
    #[arg(long = FLAG_PAGE_KEY)]
    pub page_key: Option<String>,

    /// Pagination offset. Set --page instead for page based navigation
    #[arg(long = FLAG_OFFSET, default_value_t = 0)]
    pub offset: u64,

    /// Pagination limit
    #[arg(long = FLAG_LIMIT, default_value_t = QUERY_DEFAULT_LIMIT)]
    pub limit: u64,

    /// Count total number of records
    #[arg(long = FLAG_COUNT_TOTAL)]
    pub count_total: bool,

    /// Pagination page. Sets offset to (page - 1) * limit
    #[arg(long = FLAG_PAGE, default_value_t = 1)]
    pub page: u64,

    /// Results are sorted in descending order
    #[arg(long = FLAG_REVERSE)]
    pub reverse: bool,
}

impl Default for PaginationArgs {
    fn default() -> Self {
        Self {
            page_key: None,
            offset: 0,
            limit: QUERY_DEFAULT_LIMIT,
            count_total: false,
            page: 1,
            reverse: false,
        }
    }
}

pub fn read_page_request(args: &PaginationArgs) -> Result<PageRequest, PaginationError> {
    let PaginationArgs {
        page_key,
        mut offset,
        limit,
        count_total,
        page,
        reverse,
    } = args.clone();

    if page > 1 && offset > 0 {
        return Err(PaginationError::PageAndOffset);
    }

    if page > 1 {
        offset = (page - 1)
            .checked_mul(limit)
            .ok_or(PaginationError::OffsetOverflow { page, limit })?;
    }

    let key = match page_key.as_deref().filter(|key| !key.is_empty()) {
        Some(key) => STANDARD
            .decode(key)
            .map_err(|err| PaginationError::InvalidPageKey {
                key: key.to_owned(),
                reason: err.to_string(),
            })?,
        None => Vec::new(),
    };

    Ok(PageRequest {
        key,
        offset,
        limit,
        count_total,
        reverse,
    })
}

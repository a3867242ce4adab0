//! Page cursors
//!
//! The server hands out `pages.next` / `pages.previous` links as encoded
//! query strings carrying `offset` and `limit`. A [`Cursor`] is the decoded
//! form of such a link; an absent link is `Option::<Cursor>::None`.

use crate::error::{Error, Result};
use crate::http::QueryParams;
use crate::types::MAX_BATCH_SIZE;
use std::fmt;

/// Query parameter carrying the page offset
pub const OFFSET_PARAM: &str = "offset";

/// Query parameter carrying the page size
pub const LIMIT_PARAM: &str = "limit";

/// Position of a page: skip `offset` records, return up to `limit`
///
/// `limit` is always in `1..=MAX_BATCH_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    offset: u64,
    limit: u32,
}

impl Cursor {
    /// Create a cursor, clamping `limit` into `1..=MAX_BATCH_SIZE`
    pub fn new(offset: u64, limit: u32) -> Self {
        Self {
            offset,
            limit: limit.clamp(1, MAX_BATCH_SIZE),
        }
    }

    /// Cursor for the first page of the given size
    pub fn first(limit: u32) -> Self {
        Self::new(0, limit)
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Query parameters for this cursor; a zero offset is omitted
    pub fn query_pairs(&self) -> QueryParams {
        let mut params = Vec::with_capacity(2);
        if self.offset > 0 {
            params.push((OFFSET_PARAM.to_string(), self.offset.to_string()));
        }
        params.push((LIMIT_PARAM.to_string(), self.limit.to_string()));
        params
    }

    /// Encode as a query string, e.g. `offset=100&limit=50`
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }

    /// Decode a server-provided link
    ///
    /// Accepts a bare query string, one with a leading `?`, or a full URL.
    /// Parameters other than `offset` and `limit` are ignored. A missing
    /// `offset` means zero; `limit` is required and positive, and values
    /// above the cap are clamped.
    pub fn parse(link: &str) -> Result<Self> {
        let query = match link.split_once('?') {
            Some((_, query)) => query,
            None => link,
        };

        let mut offset = None;
        let mut limit = None;
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                OFFSET_PARAM => {
                    let parsed = value.trim().parse::<u64>().map_err(|e| {
                        Error::invalid_cursor(link, format!("offset '{value}': {e}"))
                    })?;
                    offset = Some(parsed);
                }
                LIMIT_PARAM => {
                    let parsed = value.trim().parse::<u64>().map_err(|e| {
                        Error::invalid_cursor(link, format!("limit '{value}': {e}"))
                    })?;
                    limit = Some(parsed);
                }
                _ => {}
            }
        }

        let limit = limit.ok_or_else(|| Error::invalid_cursor(link, "missing limit"))?;
        if limit == 0 {
            return Err(Error::invalid_cursor(link, "limit must be positive"));
        }
        let limit = u32::try_from(limit).unwrap_or(MAX_BATCH_SIZE);

        Ok(Self::new(offset.unwrap_or(0), limit))
    }

    /// Decode an optional link; absent or blank links mean "no page"
    pub fn parse_link(link: Option<&str>) -> Result<Option<Self>> {
        match link.map(str::trim) {
            None | Some("") => Ok(None),
            Some(link) => Self::parse(link).map(Some),
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset={} limit={}", self.offset, self.limit)
    }
}

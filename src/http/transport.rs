//! The transport seam
//!
//! The pagination core only needs one capability: send an authenticated
//! GET with query parameters and get the raw body back. Anything that can
//! do that implements [`Transport`].

use crate::error::Result;
use async_trait::async_trait;

/// Ordered query parameters for one request
pub type QueryParams = Vec<(String, String)>;

/// Sends authenticated GET requests and returns raw response bodies
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` (relative to the API base) with `query` and return the body
    ///
    /// Network failures, timeouts and non-success statuses are errors.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<String>;
}

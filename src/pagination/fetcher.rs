//! Page fetching: filters + cursor → request → decoded page

use super::cursor::Cursor;
use super::page::PageResult;
use crate::decode::decode_envelope;
use crate::error::Result;
use crate::http::{QueryParams, Transport};
use crate::transactions::QuerySpec;
use crate::types::TransactionRecord;
use std::sync::Arc;
use tracing::debug;

/// Path of the transaction listing, relative to the API base
pub const TRANSACTIONS_PATH: &str = "transactions/";

/// Fetches single pages of a transaction listing
#[derive(Clone)]
pub struct PageFetcher {
    transport: Arc<dyn Transport>,
    path: String,
}

impl PageFetcher {
    /// Fetcher for the transaction listing
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_path(transport, TRANSACTIONS_PATH)
    }

    /// Fetcher for a listing at a different path
    pub fn with_path(transport: Arc<dyn Transport>, path: impl Into<String>) -> Self {
        Self {
            transport,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Filter parameters followed by cursor parameters
    pub fn encode_query(spec: &QuerySpec, cursor: &Cursor) -> QueryParams {
        let mut params = spec.query_pairs();
        params.extend(cursor.query_pairs());
        params
    }

    /// Fetch the page at `cursor`, or the first page of `batch_size` records
    ///
    /// Transport failures are returned unchanged; a body that does not
    /// decode is an [`Error::Decode`](crate::Error::Decode). Application
    /// errors in the body are part of the returned page.
    pub async fn fetch(
        &self,
        spec: &QuerySpec,
        cursor: Option<Cursor>,
        batch_size: u32,
    ) -> Result<PageResult> {
        let cursor = cursor.unwrap_or_else(|| Cursor::first(batch_size));
        let query = Self::encode_query(spec, &cursor);

        debug!("Fetching {} at {}", self.path, cursor);
        let body = self.transport.get(&self.path, &query).await?;
        let page = PageResult::from_envelope(decode_envelope::<TransactionRecord>(&body)?)?;

        debug!(
            "Fetched {} records, {} errors (next: {}, previous: {})",
            page.records().len(),
            page.errors().len(),
            page.has_next(),
            page.has_previous()
        );
        Ok(page)
    }
}

impl std::fmt::Debug for PageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFetcher")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

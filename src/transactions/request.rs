//! Transaction listing requests

use super::query::QuerySpec;
use crate::error::{ErrorList, Result};
use crate::http::Transport;
use crate::pagination::{PageFetcher, TransactionsIterator};
use crate::types::{TransactionRecord, TransactionStatus};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

/// Builder for a transaction listing, obtained from
/// [`Client::transactions`](crate::Client::transactions)
pub struct TransactionsRequest {
    spec: QuerySpec,
    batch_size: Option<u32>,
    transport: Arc<dyn Transport>,
}

impl TransactionsRequest {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            spec: QuerySpec::new(),
            batch_size: None,
            transport,
        }
    }

    /// Restrict to one checking account
    #[must_use]
    pub fn account_id(mut self, id: impl Into<String>) -> Self {
        self.spec = self.spec.with_account_id(id);
        self
    }

    /// Restrict to one status
    #[must_use]
    pub fn status(mut self, status: TransactionStatus) -> Self {
        self.spec = self.spec.with_status(status);
        self
    }

    /// Include transactions on or after `date`
    #[must_use]
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.spec = self.spec.with_start_date(date);
        self
    }

    /// Include transactions before `date`
    #[must_use]
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.spec = self.spec.with_end_date(date);
        self
    }

    /// Replace all filters at once
    #[must_use]
    pub fn spec(mut self, spec: QuerySpec) -> Self {
        self.spec = spec;
        self
    }

    /// Size of the first page; see [`TransactionsIterator::set_batch_size`]
    #[must_use]
    pub fn batch_size(mut self, n: u32) -> Self {
        self.batch_size = Some(n);
        self
    }

    /// The filters configured so far
    pub fn query(&self) -> &QuerySpec {
        &self.spec
    }

    /// Turn the request into an iterator; the filters are fixed from here on
    pub fn iterator(self) -> TransactionsIterator {
        let fetcher = PageFetcher::new(self.transport);
        let mut iter = TransactionsIterator::new(self.spec, fetcher);
        if let Some(n) = self.batch_size {
            iter.set_batch_size(n);
        }
        iter
    }

    /// Walk forward through every page
    ///
    /// Returns all records in server order together with the application
    /// errors of every page. Stops at the first fatal error.
    pub async fn fetch_all(self) -> Result<(Vec<TransactionRecord>, ErrorList)> {
        let mut iter = self.iterator();
        let mut records = Vec::new();
        let mut errors = ErrorList::new();
        let mut pages = 0usize;

        while iter.has_next() {
            let (page_records, page_errors) = iter.next().await?;
            records.extend_from_slice(page_records);
            errors.extend(page_errors.clone());
            pages += 1;
        }

        debug!(
            "Fetched {} transactions across {} pages ({} errors)",
            records.len(),
            pages,
            errors.len()
        );
        Ok((records, errors))
    }
}

impl std::fmt::Debug for TransactionsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionsRequest")
            .field("spec", &self.spec)
            .field("batch_size", &self.batch_size)
            .finish_non_exhaustive()
    }
}

//! Transaction filters

use crate::http::QueryParams;
use crate::types::{TransactionStatus, DATE_FORMAT};
use chrono::NaiveDate;

/// Filter for a transaction listing
///
/// Built by the caller, then moved into an iterator which only ever hands
/// out shared references to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySpec {
    account_id: Option<String>,
    status: Option<TransactionStatus>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl QuerySpec {
    /// An unfiltered query
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one checking account
    #[must_use]
    pub fn with_account_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.account_id = (!id.is_empty()).then_some(id);
        self
    }

    /// Restrict to one status
    #[must_use]
    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// First date to include (inclusive)
    #[must_use]
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// First date to exclude (exclusive)
    #[must_use]
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    pub fn status(&self) -> Option<TransactionStatus> {
        self.status
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Filter query parameters; unset filters are omitted
    pub fn query_pairs(&self) -> QueryParams {
        let mut params = Vec::with_capacity(4);
        if let Some(id) = &self.account_id {
            params.push(("checking_account_id".to_string(), id.clone()));
        }
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(start) = self.start_date {
            params.push(("start_date".to_string(), start.format(DATE_FORMAT).to_string()));
        }
        if let Some(end) = self.end_date {
            params.push(("end_date".to_string(), end.format(DATE_FORMAT).to_string()));
        }
        params
    }
}

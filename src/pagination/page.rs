//! One decoded page of transactions

use super::cursor::Cursor;
use crate::decode::Envelope;
use crate::error::{ErrorList, Result};
use crate::types::TransactionRecord;

/// Records, application-level errors and neighbour cursors of one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageResult {
    records: Vec<TransactionRecord>,
    errors: ErrorList,
    next: Option<Cursor>,
    previous: Option<Cursor>,
}

impl PageResult {
    pub fn new(
        records: Vec<TransactionRecord>,
        errors: ErrorList,
        next: Option<Cursor>,
        previous: Option<Cursor>,
    ) -> Self {
        Self {
            records,
            errors,
            next,
            previous,
        }
    }

    /// A page with no records and no neighbours
    pub fn empty() -> Self {
        Self::default()
    }

    /// Convert a decoded envelope, parsing its `pages` links into cursors
    pub fn from_envelope(envelope: Envelope<TransactionRecord>) -> Result<Self> {
        let next = Cursor::parse_link(envelope.pages.next.as_deref())?;
        let previous = Cursor::parse_link(envelope.pages.previous.as_deref())?;
        Ok(Self::new(envelope.results, envelope.errors, next, previous))
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn errors(&self) -> &ErrorList {
        &self.errors
    }

    pub fn next_cursor(&self) -> Option<Cursor> {
        self.next
    }

    pub fn previous_cursor(&self) -> Option<Cursor> {
        self.previous
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Split into owned records and errors
    pub fn into_parts(self) -> (Vec<TransactionRecord>, ErrorList) {
        (self.records, self.errors)
    }
}

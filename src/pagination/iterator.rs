//! Bidirectional traversal of a transaction listing
//!
//! [`TransactionsIterator`] holds one fixed [`QuerySpec`] and at most one
//! page. It starts unloaded; the first `next()` or `previous()` fetches the
//! first page, and every later call follows the cursor the server attached
//! to the page currently held.
//!
//! A failed fetch leaves the iterator exactly as it was, so the caller can
//! retry the same call. Application-level errors do not fail the call;
//! they are returned with the records.

use super::fetcher::PageFetcher;
use super::page::PageResult;
use crate::error::{ErrorList, Result};
use crate::transactions::QuerySpec;
use crate::types::{TransactionRecord, MAX_BATCH_SIZE};
use std::fmt;
use tracing::{debug, warn};

static NO_ERRORS: ErrorList = ErrorList::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str("next"),
            Self::Previous => f.write_str("previous"),
        }
    }
}

/// Stateful pager over a filtered transaction listing
#[derive(Debug)]
pub struct TransactionsIterator {
    spec: QuerySpec,
    fetcher: PageFetcher,
    /// `None` until the first successful fetch
    current: Option<PageResult>,
    batch_size: u32,
}

impl TransactionsIterator {
    /// Create an unloaded iterator with the maximum batch size
    pub fn new(spec: QuerySpec, fetcher: PageFetcher) -> Self {
        Self {
            spec,
            fetcher,
            current: None,
            batch_size: MAX_BATCH_SIZE,
        }
    }

    /// Builder form of [`set_batch_size`](Self::set_batch_size)
    #[must_use]
    pub fn with_batch_size(mut self, n: u32) -> Self {
        self.set_batch_size(n);
        self
    }

    /// Set the size of the first page
    ///
    /// Only `1..MAX_BATCH_SIZE` is accepted; anything else leaves the
    /// current value in place. Later pages use the server's cursors.
    pub fn set_batch_size(&mut self, n: u32) {
        if n > 0 && n < MAX_BATCH_SIZE {
            self.batch_size = n;
        } else {
            warn!(
                "Ignoring batch size {} (accepted: 1..{}), keeping {}",
                n, MAX_BATCH_SIZE, self.batch_size
            );
        }
    }

    pub fn batch_size(&self) -> u32 {
        self.batch_size
    }

    /// The filter this iterator was built with
    pub fn spec(&self) -> &QuerySpec {
        &self.spec
    }

    /// True once a page has been fetched successfully
    pub fn has_fetched(&self) -> bool {
        self.current.is_some()
    }

    /// True before the first fetch, then while the held page links forward
    pub fn has_next(&self) -> bool {
        self.current.as_ref().map_or(true, PageResult::has_next)
    }

    /// True while the held page links backward
    pub fn has_previous(&self) -> bool {
        self.current.as_ref().is_some_and(PageResult::has_previous)
    }

    pub fn current_page(&self) -> Option<&PageResult> {
        self.current.as_ref()
    }

    /// Records of the held page, empty before the first fetch
    pub fn records(&self) -> &[TransactionRecord] {
        match &self.current {
            Some(page) => page.records(),
            None => &[],
        }
    }

    /// Application errors of the held page, empty before the first fetch
    pub fn errors(&self) -> &ErrorList {
        match &self.current {
            Some(page) => page.errors(),
            None => &NO_ERRORS,
        }
    }

    /// Move forward one page
    ///
    /// If the held page has no `next` link, no request is made and the
    /// iterator moves to an empty page with no links in either direction.
    #[allow(clippy::should_implement_trait)]
    pub async fn next(&mut self) -> Result<(&[TransactionRecord], &ErrorList)> {
        self.advance(Direction::Next).await
    }

    /// Move back one page
    ///
    /// Before any fetch this loads the first page, exactly like
    /// [`next`](Self::next).
    pub async fn previous(&mut self) -> Result<(&[TransactionRecord], &ErrorList)> {
        self.advance(Direction::Previous).await
    }

    async fn advance(&mut self, direction: Direction) -> Result<(&[TransactionRecord], &ErrorList)> {
        let page = match &self.current {
            None => {
                self.fetcher
                    .fetch(&self.spec, None, self.batch_size)
                    .await?
            }
            Some(current) => {
                let cursor = match direction {
                    Direction::Next => current.next_cursor(),
                    Direction::Previous => current.previous_cursor(),
                };
                match cursor {
                    Some(cursor) => {
                        self.fetcher
                            .fetch(&self.spec, Some(cursor), self.batch_size)
                            .await?
                    }
                    None => {
                        debug!("No {} page, returning an empty page", direction);
                        PageResult::empty()
                    }
                }
            }
        };

        if !page.errors().is_empty() {
            warn!(
                "{} page carried {} application error(s): {}",
                direction,
                page.errors().len(),
                page.errors()
            );
        }

        let page = self.current.insert(page);
        Ok((page.records(), page.errors()))
    }
}

//! Pagination module
//!
//! Offset/limit pagination driven by server-provided links.
//!
//! # Overview
//!
//! - [`Cursor`] - decoded `offset`/`limit` position of a page
//! - [`PageResult`] - one page of records, errors and neighbour cursors
//! - [`PageFetcher`] - encodes filters + cursor and decodes the response
//! - [`TransactionsIterator`] - forward/backward traversal over pages

mod cursor;
mod fetcher;
mod iterator;
mod page;

pub use cursor::{Cursor, LIMIT_PARAM, OFFSET_PARAM};
pub use fetcher::{PageFetcher, TRANSACTIONS_PATH};
pub use iterator::TransactionsIterator;
pub use page::PageResult;

//! Transaction listings
//!
//! [`QuerySpec`] describes which transactions to list; a
//! [`TransactionsRequest`] binds it to a transport and produces either a
//! [`TransactionsIterator`](crate::pagination::TransactionsIterator) or the
//! full listing.

mod query;
mod request;

pub use query::QuerySpec;
pub use request::TransactionsRequest;

// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Seed Client
//!
//! A read-only Rust client for the Seed banking API: account balances and
//! filtered, paginated transaction listings.
//!
//! ## Features
//!
//! - **Bidirectional Pagination**: Walk transaction pages forward and backward
//!   using the server's `next`/`previous` links
//! - **Application Errors**: Per-page field errors are returned next to the
//!   records instead of failing the call
//! - **Explicit Configuration**: Token, client version and base URL travel in a
//!   [`ClientConfig`] value, never in global state
//! - **Pluggable Transport**: Anything implementing [`Transport`](http::Transport)
//!   can stand in for HTTP
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use seed_client::{Client, ClientConfig, Result, TransactionStatus};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new(ClientConfig::new("sk_live_..."))?;
//!
//!     let balance = client.balance().get().await?;
//!     println!("available: {}", balance.total_available);
//!
//!     let mut pages = client
//!         .transactions()
//!         .status(TransactionStatus::Settled)
//!         .batch_size(100)
//!         .iterator();
//!
//!     while pages.has_next() {
//!         let (records, errors) = pages.next().await?;
//!         for error in errors {
//!             eprintln!("server flagged {error}");
//!         }
//!         for record in records {
//!             println!("{} {} {}", record.date, record.amount, record.description);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                     Client (façade)                        │
//! │        balance() → BalanceRequest                          │
//! │   transactions() → TransactionsRequest → Iterator          │
//! └───────────────────────────────────────────────────────────┘
//!                │
//! ┌──────────────┬───────────────┬──────────────┬─────────────┐
//! │  Pagination  │    Decode     │  Transport   │   Config    │
//! ├──────────────┼───────────────┼──────────────┼─────────────┤
//! │ Iterator     │ Envelope      │ HttpClient   │ YAML / env  │
//! │ PageFetcher  │ ErrorList     │ Bearer auth  │ Builder     │
//! │ Cursor       │ Records       │ Rate limit   │             │
//! └──────────────┴───────────────┴──────────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types and application-level error lists
pub mod error;

/// Records and shared constants
pub mod types;

/// Client configuration
pub mod config;

/// Transport seam and HTTP implementation
pub mod http;

/// Response envelope decoding
pub mod decode;

/// Cursors, pages and the transaction iterator
pub mod pagination;

/// Transaction filters and requests
pub mod transactions;

/// Balance requests
pub mod balance;

/// Client façade
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorEntry, ErrorList, Result};
pub use types::*;

// Re-export commonly used types
pub use client::Client;
pub use config::{load_config, load_config_from_str, ClientConfig};
pub use pagination::{Cursor, PageResult, TransactionsIterator};
pub use transactions::{QuerySpec, TransactionsRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

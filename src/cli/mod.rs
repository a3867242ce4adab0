//! CLI module
//!
//! Command-line interface for the Seed API.
//!
//! # Commands
//!
//! - `balance` - Show the balance of a checking account
//! - `transactions` - Page through transactions

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

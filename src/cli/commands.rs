//! CLI commands and argument parsing

use crate::types::TransactionStatus;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Read-only client for the Seed banking API
#[derive(Parser, Debug)]
#[command(name = "seed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Access token (overrides the config file and SEED_ACCESS_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Value for the Client-Version header
    #[arg(long, global = true)]
    pub client_version: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the balance of a checking account
    Balance {
        /// Checking account ID
        #[arg(long)]
        account: Option<String>,
    },

    /// List transactions page by page
    Transactions {
        /// Checking account ID
        #[arg(long)]
        account: Option<String>,

        /// Only transactions with this status (pending, settled)
        #[arg(long, value_parser = parse_status)]
        status: Option<TransactionStatus>,

        /// First date to include (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,

        /// First date to exclude (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        to: Option<NaiveDate>,

        /// Records per page (1-999; larger values use the API maximum)
        #[arg(long)]
        batch_size: Option<u32>,

        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<usize>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one object per line)
    Json,
    /// Human-readable output
    Pretty,
}

fn parse_status(s: &str) -> Result<TransactionStatus, String> {
    s.parse()
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, crate::types::DATE_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transactions_command() {
        let cli = Cli::try_parse_from([
            "seed",
            "--token",
            "abc",
            "transactions",
            "--status",
            "pending",
            "--from",
            "2024-01-01",
            "--batch-size",
            "50",
        ])
        .unwrap();

        assert_eq!(cli.token.as_deref(), Some("abc"));
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Transactions {
                status,
                from,
                to,
                batch_size,
                ..
            } => {
                assert_eq!(status, Some(TransactionStatus::Pending));
                assert_eq!(from, NaiveDate::from_ymd_opt(2024, 1, 1));
                assert!(to.is_none());
                assert_eq!(batch_size, Some(50));
            }
            other => panic!("Expected Transactions, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let result = Cli::try_parse_from(["seed", "transactions", "--from", "01/02/2024"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_balance_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["seed", "balance", "--account", "acc-1", "-f", "pretty"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(matches!(cli.command, Commands::Balance { account: Some(ref a) } if a == "acc-1"));
    }
}

//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::Client;
use crate::config::{load_config, ClientConfig};
use crate::error::Result;
use crate::transactions::QuerySpec;
use crate::types::{Balance, TransactionRecord};
use serde_json::{json, Value};
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = Client::new(self.build_config()?)?;

        match &self.cli.command {
            Commands::Balance { account } => self.balance(&client, account.as_deref()).await,
            Commands::Transactions {
                account,
                status,
                from,
                to,
                batch_size,
                max_pages,
            } => {
                let mut spec = QuerySpec::new();
                if let Some(account) = account {
                    spec = spec.with_account_id(account.as_str());
                }
                if let Some(status) = status {
                    spec = spec.with_status(*status);
                }
                if let Some(from) = from {
                    spec = spec.with_start_date(*from);
                }
                if let Some(to) = to {
                    spec = spec.with_end_date(*to);
                }
                self.transactions(&client, spec, *batch_size, *max_pages)
                    .await
            }
        }
    }

    /// Merge the config file, environment and command-line overrides
    fn build_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => ClientConfig::default(),
        };

        if let Some(token) = &self.cli.token {
            config.access_token.clone_from(token);
        }
        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(version) = &self.cli.client_version {
            config.client_version = Some(version.clone());
        }

        let config = config.with_env_token();
        if self.cli.verbose {
            info!("Using {:?}", config);
        }
        Ok(config)
    }

    /// Show a balance
    async fn balance(&self, client: &Client, account: Option<&str>) -> Result<()> {
        let mut request = client.balance();
        if let Some(account) = account {
            request = request.account_id(account);
        }
        let balance = request.get().await?;

        match self.cli.format {
            OutputFormat::Json => self.output_message(&json!(balance)),
            OutputFormat::Pretty => println!("{}", format_balance(&balance)),
        }
        Ok(())
    }

    /// Walk forward through transaction pages
    async fn transactions(
        &self,
        client: &Client,
        spec: QuerySpec,
        batch_size: Option<u32>,
        max_pages: Option<usize>,
    ) -> Result<()> {
        let mut request = client.transactions().spec(spec);
        if let Some(n) = batch_size {
            request = request.batch_size(n);
        }
        let mut iter = request.iterator();

        let mut pages = 0usize;
        let mut total = 0usize;
        while iter.has_next() && max_pages.map_or(true, |max| pages < max) {
            let (records, errors) = iter.next().await?;
            pages += 1;
            total += records.len();

            for entry in errors {
                warn!("Page {}: {}", pages, entry);
            }
            for record in records {
                match self.cli.format {
                    OutputFormat::Json => self.output_message(&json!(record)),
                    OutputFormat::Pretty => println!("{}", format_record(record)),
                }
            }
        }

        info!("Read {} transactions from {} pages", total, pages);
        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        println!("{}", serde_json::to_string(msg).unwrap_or_default());
    }
}

/// Format minor units as a decimal amount, e.g. `-1234` → `-12.34`
fn format_amount(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

fn format_record(record: &TransactionRecord) -> String {
    let mut line = format!(
        "{}  {:<8} {:>12}  {}",
        record.date,
        record.status,
        format_amount(record.amount),
        record.description
    );
    if !record.category.is_empty() {
        line.push_str(&format!(" [{}]", record.category));
    }
    if let Some(error) = &record.error {
        line.push_str(&format!(" (error: {error})"));
    }
    line
}

fn format_balance(balance: &Balance) -> String {
    format!(
        "Account:          {}\n\
         Total available:  {}\n\
         Accessible:       {}\n\
         Settled:          {}\n\
         Pending credits:  {}\n\
         Pending debits:   {}\n\
         Scheduled debits: {}\n\
         Lockbox:          {}",
        balance.checking_account_id,
        format_amount(balance.total_available),
        format_amount(balance.accessible),
        format_amount(balance.settled),
        format_amount(balance.pending_credits as i64),
        format_amount(balance.pending_debits as i64),
        format_amount(balance.scheduled_debits as i64),
        format_amount(balance.lockbox as i64),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionStatus;
    use chrono::NaiveDate;
    use clap::Parser;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0.00");
        assert_eq!(format_amount(5), "0.05");
        assert_eq!(format_amount(-1234), "-12.34");
        assert_eq!(format_amount(250_000), "2500.00");
        assert_eq!(format_amount(i64::MIN), "-92233720368547758.08");
    }

    #[test]
    fn test_format_record() {
        let record = TransactionRecord {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            description: "Coffee".to_string(),
            amount: -450,
            status: TransactionStatus::Settled,
            category: "food".to_string(),
            error: Some("duplicate".to_string()),
        };
        let line = format_record(&record);
        assert!(line.starts_with("2024-05-01  settled"));
        assert!(line.contains("-4.50"));
        assert!(line.ends_with("Coffee [food] (error: duplicate)"));
    }

    #[test]
    fn test_build_config_applies_overrides() {
        let cli = Cli::try_parse_from([
            "seed",
            "--token",
            "cli-token",
            "--base-url",
            "http://localhost:9999",
            "--client-version",
            "v3",
            "balance",
        ])
        .unwrap();

        let config = Runner::new(cli).build_config().unwrap();
        assert_eq!(config.access_token, "cli-token");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.client_version.as_deref(), Some("v3"));
    }

    #[test]
    fn test_build_config_missing_file() {
        let cli = Cli::try_parse_from(["seed", "-C", "/nonexistent/seed.yaml", "balance"]).unwrap();
        assert!(Runner::new(cli).build_config().is_err());
    }
}

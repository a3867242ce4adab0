//! Common types used throughout the Seed client
//!
//! This module contains the records returned by the API and the
//! constants shared by the request and pagination layers.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Constants
// ============================================================================

/// Largest page the API will serve
pub const MAX_BATCH_SIZE: u32 = 1000;

/// Calendar date format used on the wire (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default API base URL
pub const API_BASE: &str = "https://api.seed.co/v1/public";

// ============================================================================
// Transaction Status
// ============================================================================

/// Settlement status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Authorized but not yet settled
    Pending,
    /// Settled
    Settled,
}

impl TransactionStatus {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Settled => "settled",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "settled" => Ok(Self::Settled),
            other => Err(format!(
                "unknown transaction status '{other}' (expected 'pending' or 'settled')"
            )),
        }
    }
}

// ============================================================================
// Transaction Record
// ============================================================================

/// A single transaction as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Calendar date of the transaction
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Signed amount in minor currency units (cents)
    pub amount: i64,
    /// Settlement status
    pub status: TransactionStatus,
    /// Spending category
    #[serde(default)]
    pub category: String,
    /// Per-record error reported by the server, if any
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp and keeps the calendar date
fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

/// Parse a wire date in either of the forms the API emits
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.date_naive())
        .map_err(|e| format!("invalid date '{raw}': {e}"))
}

fn deserialize_optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

// ============================================================================
// Balance
// ============================================================================

/// Balance amounts for a checking account, in minor currency units
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Checking account this balance belongs to
    pub checking_account_id: String,
    /// Safely usable: accessible minus pending and scheduled debits
    #[serde(default)]
    pub total_available: i64,
    /// Total of settled transactions
    #[serde(default)]
    pub settled: i64,
    #[serde(default)]
    pub pending_credits: u64,
    #[serde(default)]
    pub pending_debits: u64,
    #[serde(default)]
    pub scheduled_debits: u64,
    /// Usable balance
    #[serde(default)]
    pub accessible: i64,
    /// Amount held in the virtual lockbox
    #[serde(default)]
    pub lockbox: u64,
}

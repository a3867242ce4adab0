//! Error types for the Seed client
//!
//! Two disjoint classes of failure live here:
//!
//! - [`Error`] is fatal. It aborts the request in progress and is returned
//!   through `Result<T, Error>` from every public API.
//! - [`ErrorList`] carries application-level errors. The server answered
//!   successfully but flagged problems with specific fields or records;
//!   these travel alongside the data instead of replacing it.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// The main error type for the Seed client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Invalid page cursor '{query}': {message}")]
    InvalidCursor { query: String, message: String },

    // ============================================================================
    // API Errors
    // ============================================================================
    #[error("API returned no results: {0}")]
    Api(ErrorList),

    #[error("No balance found")]
    NoBalance,

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an invalid cursor error
    pub fn invalid_cursor(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidCursor {
            query: query.into(),
            message: message.into(),
        }
    }

    /// True for failures of the network or HTTP layer
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::HttpStatus { .. } | Error::Timeout { .. } | Error::InvalidUrl(_)
        )
    }

    /// True when the server answered but the payload could not be decoded
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. } | Error::InvalidCursor { .. })
    }
}

/// Result type alias for the Seed client
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Application-level errors
// ============================================================================

/// A problem the server reported with a specific field or record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// Field the error refers to
    #[serde(default)]
    pub field: String,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

impl ErrorEntry {
    /// Create a new error entry
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Application-level errors returned alongside the data of one response
///
/// Decodes from a JSON array; `null` or a missing key decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorList(Vec<ErrorEntry>);

impl ErrorList {
    /// Create an empty list
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// True when the server reported no errors
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of reported errors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the entries
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorEntry> {
        self.0.iter()
    }

    /// Borrow the entries as a slice
    pub fn entries(&self) -> &[ErrorEntry] {
        &self.0
    }

    /// Append an entry
    pub fn push(&mut self, entry: ErrorEntry) {
        self.0.push(entry);
    }

    /// Append every entry of another list
    pub fn extend(&mut self, other: ErrorList) {
        self.0.extend(other.0);
    }

    /// `Ok(())` when empty, otherwise the list itself as an error
    pub fn into_result(self) -> std::result::Result<(), ErrorList> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<ErrorEntry>> for ErrorList {
    fn from(entries: Vec<ErrorEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<ErrorEntry> for ErrorList {
    fn from_iter<I: IntoIterator<Item = ErrorEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ErrorList {
    type Item = ErrorEntry;
    type IntoIter = std::vec::IntoIter<ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a ErrorEntry;
    type IntoIter = std::slice::Iter<'a, ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for ErrorList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = Option::<Vec<ErrorEntry>>::deserialize(deserializer)?;
        Ok(Self(entries.unwrap_or_default()))
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {}

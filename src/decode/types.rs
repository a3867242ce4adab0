//! Wire types shared by every API response
//!
//! Every endpoint answers with the same envelope:
//!
//! ```json
//! { "errors": [...], "results": [...], "pages": { "next": "...", "previous": "..." } }
//! ```

use crate::error::ErrorList;
use serde::de::Deserializer;
use serde::Deserialize;

/// Decoded response envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Application-level errors; absent or `null` means none
    #[serde(default)]
    pub errors: ErrorList,

    /// Result records; the key is required, `null` means none
    #[serde(deserialize_with = "nullable_vec")]
    pub results: Vec<T>,

    /// Pagination links, present on list endpoints
    #[serde(default, deserialize_with = "nullable_default")]
    pub pages: PageLinks,
}

/// Raw `pages` object: encoded query strings, not yet cursors
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

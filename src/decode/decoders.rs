//! JSON decoding of response bodies

use super::types::Envelope;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

/// Longest body excerpt quoted in a decode error
const EXCERPT_LEN: usize = 200;

/// Decode a raw response body into an [`Envelope`]
///
/// Any failure (invalid JSON, a missing `results` key, a record with a
/// missing or unparsable field) is a fatal [`Error::Decode`].
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<Envelope<T>> {
    serde_json::from_str(body).map_err(|e| {
        Error::decode(format!(
            "{e} (body starts with: {:?})",
            excerpt(body, EXCERPT_LEN)
        ))
    })
}

fn excerpt(body: &str, max: usize) -> &str {
    match body.char_indices().nth(max) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

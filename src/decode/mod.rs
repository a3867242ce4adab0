//! Response decoder module
//!
//! Turns raw response bodies into typed envelopes. Decoding problems are
//! reported as [`Error::Decode`](crate::Error::Decode), kept separate from
//! transport failures.

mod decoders;
mod types;

pub use decoders::decode_envelope;
pub use types::{Envelope, PageLinks};

#[cfg(test)]
mod tests;

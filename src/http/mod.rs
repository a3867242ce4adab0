//! HTTP transport module
//!
//! Provides the [`Transport`] seam used by the request layer and the
//! production [`HttpClient`] that implements it.
//!
//! # Features
//!
//! - **Authentication**: Bearer token on every request, optional client version header
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **No Retries**: Failures surface unchanged to the caller

mod client;
mod rate_limit;
mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{HttpClient, CLIENT_VERSION_HEADER};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::{QueryParams, Transport};

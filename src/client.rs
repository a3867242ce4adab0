//! The client façade

use crate::balance::BalanceRequest;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, Transport};
use crate::transactions::TransactionsRequest;
use std::sync::Arc;

/// Entry point for all API calls
///
/// Cheap to clone; clones share the transport (and its rate limiter).
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client that talks HTTP using `config`
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpClient::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// The transport requests are sent through
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Start a balance request
    pub fn balance(&self) -> BalanceRequest {
        BalanceRequest::new(Arc::clone(&self.transport))
    }

    /// Start a transaction listing
    pub fn transactions(&self) -> TransactionsRequest {
        TransactionsRequest::new(Arc::clone(&self.transport))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

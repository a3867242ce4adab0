//! Account balance lookup

use crate::decode::decode_envelope;
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::Balance;
use std::sync::Arc;
use tracing::{debug, warn};

/// Path of the balance endpoint, relative to the API base
pub const BALANCE_PATH: &str = "balance";

/// Balance request, obtained from [`Client::balance`](crate::Client::balance)
pub struct BalanceRequest {
    checking_account_id: Option<String>,
    transport: Arc<dyn Transport>,
}

impl BalanceRequest {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            checking_account_id: None,
            transport,
        }
    }

    /// Ask for the balance of a specific checking account
    #[must_use]
    pub fn account_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.checking_account_id = (!id.is_empty()).then_some(id);
        self
    }

    /// Fetch the balance
    ///
    /// The endpoint answers with a list that is expected to hold exactly one
    /// balance; the first one is returned.
    pub async fn get(&self) -> Result<Balance> {
        let mut query = Vec::new();
        if let Some(id) = &self.checking_account_id {
            query.push(("checking_account_id".to_string(), id.clone()));
        }

        let body = self.transport.get(BALANCE_PATH, &query).await?;
        let envelope = decode_envelope::<Balance>(&body)?;

        let Some(balance) = envelope.results.into_iter().next() else {
            if envelope.errors.is_empty() {
                return Err(Error::NoBalance);
            }
            return Err(Error::Api(envelope.errors));
        };

        if !envelope.errors.is_empty() {
            warn!("Balance response carried errors: {}", envelope.errors);
        }
        debug!("Fetched balance for {}", balance.checking_account_id);
        Ok(balance)
    }
}

impl std::fmt::Debug for BalanceRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BalanceRequest")
            .field("checking_account_id", &self.checking_account_id)
            .finish_non_exhaustive()
    }
}

use anyhow::Result;
use async_trait::async_trait;
use hourbridge_api::prelude::Envelope;
use hourbridge_api::PublicKey;
use serde::Deserialize;

/// Outcome of an accepted transaction.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SubmitResponse {
    pub hash: String,
    #[serde(default)]
    pub ledger: u32,
}

/// The network endpoint every step talks to. Implemented by
/// [`crate::HorizonClient`]; tests substitute an in-memory ledger.
#[async_trait]
pub trait Network: Send + Sync {
    /// Current sequence number of an existing account.
    async fn load_sequence(&self, account: &PublicKey) -> Result<i64>;

    /// Submits an envelope and waits until it is applied or rejected.
    async fn submit(&self, envelope: &Envelope) -> Result<SubmitResponse>;

    /// Creates and funds an account with native balance.
    async fn fund(&self, account: &PublicKey) -> Result<()>;
}

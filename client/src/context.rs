use anyhow::{Context as _, Result};
use hourbridge_api::prelude::*;
use hourbridge_api::PublicKey;
use tracing::info;

use crate::network::{Network, SubmitResponse};

/// Everything a step needs besides its own inputs: the network, the
/// passphrase signatures are bound to and the sponsor paying reserves and
/// fees. Built once per run and only read afterwards.
pub struct Context<N> {
    network: N,
    passphrase: NetworkPassphrase,
    sponsor: Keypair,
}

impl<N: Network> Context<N> {
    pub fn new(network: N, passphrase: NetworkPassphrase, sponsor: Keypair) -> Self {
        Self { network, passphrase, sponsor }
    }

    pub fn network(&self) -> &N {
        &self.network
    }

    pub fn passphrase(&self) -> &NetworkPassphrase {
        &self.passphrase
    }

    pub fn sponsor(&self) -> &Keypair {
        &self.sponsor
    }

    pub async fn sequence_of(&self, account: &PublicKey) -> Result<i64> {
        self.network
            .load_sequence(account)
            .await
            .with_context(|| format!("Failed to load account {}", account))
    }

    /// Submits and logs the resulting hash. `step` names the action in
    /// errors and logs.
    pub async fn submit(&self, envelope: Envelope, step: &str) -> Result<SubmitResponse> {
        let response = self
            .network
            .submit(&envelope)
            .await
            .with_context(|| format!("Failed to {}", step))?;
        info!(hash = %response.hash, ledger = response.ledger, "{}", step);
        Ok(response)
    }
}

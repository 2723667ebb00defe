use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use hourbridge_api::prelude::Envelope;
use hourbridge_api::PublicKey;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::consts::HTTP_TIMEOUT_SECS;
use crate::error::HorizonError;
use crate::network::{Network, SubmitResponse};

#[derive(Debug, Deserialize)]
struct AccountResponse {
    sequence: String,
}

/// Horizon REST client with optional friendbot funding.
pub struct HorizonClient {
    client: Client,
    horizon_url: String,
    friendbot_url: Option<String>,
}

impl HorizonClient {
    pub fn new(horizon_url: &str, friendbot_url: Option<&str>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(HorizonError::from)?;

        Ok(Self {
            client,
            horizon_url: horizon_url.trim_end_matches('/').to_string(),
            friendbot_url: friendbot_url.map(|u| u.trim_end_matches('/').to_string()),
        })
    }

    pub fn horizon_url(&self) -> &str {
        &self.horizon_url
    }
}

#[async_trait]
impl Network for HorizonClient {
    async fn load_sequence(&self, account: &PublicKey) -> Result<i64> {
        let address = account.to_string();
        let url = format!("{}/accounts/{}", self.horizon_url, address);

        let response = self.client.get(&url).send().await.map_err(HorizonError::from)?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(HorizonError::AccountNotFound(address).into());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HorizonError::from_reply(status.as_u16(), body).into());
        }

        let account: AccountResponse = response.json().await.map_err(HorizonError::from)?;
        let sequence = account
            .sequence
            .parse::<i64>()
            .map_err(|_| HorizonError::InvalidSequence(account.sequence.clone()))?;
        Ok(sequence)
    }

    async fn submit(&self, envelope: &Envelope) -> Result<SubmitResponse> {
        let tx = envelope.to_base64()?;
        debug!(envelope = %tx, "submitting transaction");

        let url = format!("{}/transactions", self.horizon_url);
        let response = self
            .client
            .post(&url)
            .form(&[("tx", tx.as_str())])
            .send()
            .await
            .map_err(HorizonError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HorizonError::from_reply(status.as_u16(), body).into());
        }

        let submitted: SubmitResponse = response.json().await.map_err(HorizonError::from)?;
        Ok(submitted)
    }

    async fn fund(&self, account: &PublicKey) -> Result<()> {
        let friendbot = self.friendbot_url.as_ref().ok_or(HorizonError::NoFriendbot)?;
        let address = account.to_string();

        let response = self
            .client
            .get(friendbot)
            .query(&[("addr", address.as_str())])
            .send()
            .await
            .map_err(HorizonError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HorizonError::Friendbot { account: address, status: status.as_u16(), body }.into());
        }
        Ok(())
    }
}

//! Wallet provider adapter over the PayPal billing REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use billing_types::{UpstreamError, WalletProvider};

use crate::path::segment;
use crate::response::{FailureMessage, handle_response, transport};

/// Sandbox API base URL.
pub const PAYPAL_SANDBOX_URL: &str = "https://api.sandbox.paypal.com";

/// PayPal API client authenticated with a pre-issued bearer token.
#[derive(Clone)]
pub struct PaypalClient {
    base_url: String,
    token: String,
    http: Client,
}

impl PaypalClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            http: Client::new(),
        }
    }

    async fn get(&self, path: &str) -> Result<Value, UpstreamError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(transport)?;
        handle_response(resp, FailureMessage::StatusLine).await
    }
}

#[async_trait]
impl WalletProvider for PaypalClient {
    #[tracing::instrument(skip(self))]
    async fn get_subscription(&self, id: &str) -> Result<Value, UpstreamError> {
        let path = format!("/v1/billing/subscriptions/{}", segment(id)?);
        self.get(&path).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_plans(&self) -> Result<Value, UpstreamError> {
        self.get("/v1/billing/plans").await
    }
}

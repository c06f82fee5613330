//! Wallet payment provider port.

use serde_json::Value;

use crate::error::UpstreamError;

/// Port trait for the wallet-based payment provider.
///
/// Responses are returned verbatim; the gateway does not model them.
#[async_trait::async_trait]
pub trait WalletProvider: Send + Sync + 'static {
    /// Fetches one billing subscription by identifier.
    async fn get_subscription(&self, id: &str) -> Result<Value, UpstreamError>;

    /// Lists billing plans. Returns the whole response body.
    async fn list_plans(&self) -> Result<Value, UpstreamError>;
}

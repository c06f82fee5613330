//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Price, Product};

// ─────────────────────────────────────────────────────────────────────────────
// Catalogue DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// A plan enriched with its product, amount in major units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LineItem {
    /// Price identifier
    #[schema(example = "price_1PxYz")]
    pub id: String,
    /// Product name
    #[schema(example = "Plus Monthly")]
    pub name: String,
    pub description: Option<String>,
    /// Amount in major currency units (minor units / 100)
    #[schema(example = 9.99)]
    pub amount: f64,
    #[schema(example = "usd")]
    pub currency: String,
}

impl LineItem {
    /// Combines a price with the product it points at.
    pub fn from_price(price: &Price, product: Product) -> Self {
        Self {
            id: price.id.clone(),
            name: product.name,
            description: product.description,
            amount: minor_to_major(price.unit_amount.unwrap_or(0)),
            currency: price.currency.clone(),
        }
    }
}

/// Converts an amount in minor units (cents) into major units.
pub fn minor_to_major(minor: i64) -> f64 {
    minor as f64 / 100.0
}

// ─────────────────────────────────────────────────────────────────────────────
// Checkout & Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request carrying the plan to check out or pay for.
///
/// Absent fields deserialize as empty strings and are forwarded upstream,
/// which rejects them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PriceRequest {
    #[schema(example = "price_1PxYz")]
    pub price_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSessionResponse {
    pub checkout_session_client_secret: String,
}

/// Request to start an incomplete subscription for a new customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "price_1PxYz")]
    pub price_id: String,
}

/// Client secret the caller uses to confirm a payment client-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientSecretResponse {
    pub client_secret: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Subscription management DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SubscriptionIdRequest {
    #[schema(example = "sub_1PxYz")]
    pub subscription_id: String,
}

/// `?email=` query parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// `?subscription_id=` query parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct HistoryQuery {
    pub subscription_id: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Wallet provider DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WalletSubscriptionResponse {
    /// Subscription as returned by the wallet provider
    #[schema(value_type = Object)]
    pub subscription: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WalletPlansResponse {
    /// Billing plans as returned by the wallet provider, omitted when absent
    #[schema(value_type = Object)]
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub plans: serde_json::Value,
}

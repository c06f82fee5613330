//! Billing provider port.
//!
//! The card/subscription billing provider owns prices, products, customers,
//! subscriptions, payment intents, payment methods and events. The gateway
//! only ever reads or forwards them.

use serde_json::Value;

use crate::domain::{
    CheckoutSession, CreatedSubscription, Customer, List, PaymentIntent, Price, Product,
};
use crate::error::UpstreamError;

/// Parameters for a hosted checkout session with a single line item.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSessionParams {
    pub ui_mode: String,
    pub payment_method_types: Vec<String>,
    pub price: String,
    pub quantity: u32,
    pub mode: String,
    pub return_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub email: String,
    /// Payment method attached to the customer on creation.
    pub payment_method: Option<String>,
    /// `invoice_settings.default_payment_method`
    pub default_payment_method: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSubscription {
    pub customer: String,
    pub price: String,
    pub payment_behavior: String,
    /// Dotted paths the provider should expand in the response.
    pub expand: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPaymentIntent {
    /// Amount in minor units.
    pub amount: i64,
    pub currency: String,
    pub description: String,
    pub metadata: Vec<(String, String)>,
}

/// Port trait for the billing provider.
#[async_trait::async_trait]
pub trait BillingProvider: Send + Sync + 'static {
    // ─────────────────────────────────────────────────────────────────────────
    // Catalogue
    // ─────────────────────────────────────────────────────────────────────────

    /// Lists prices (first page, provider default page size).
    async fn list_prices(&self) -> Result<List<Price>, UpstreamError>;

    async fn retrieve_price(&self, id: &str) -> Result<Price, UpstreamError>;

    async fn retrieve_product(&self, id: &str) -> Result<Product, UpstreamError>;

    // ─────────────────────────────────────────────────────────────────────────
    // Checkout & Payments
    // ─────────────────────────────────────────────────────────────────────────

    async fn create_checkout_session(
        &self,
        params: CheckoutSessionParams,
    ) -> Result<CheckoutSession, UpstreamError>;

    async fn create_payment_intent(
        &self,
        params: NewPaymentIntent,
    ) -> Result<PaymentIntent, UpstreamError>;

    // ─────────────────────────────────────────────────────────────────────────
    // Customers & Subscriptions
    // ─────────────────────────────────────────────────────────────────────────

    async fn create_customer(&self, params: NewCustomer) -> Result<Customer, UpstreamError>;

    /// Lists customers, optionally filtered by exact email.
    async fn list_customers(
        &self,
        email: Option<&str>,
        limit: u32,
    ) -> Result<List<Customer>, UpstreamError>;

    async fn create_subscription(
        &self,
        params: NewSubscription,
    ) -> Result<CreatedSubscription, UpstreamError>;

    /// Lists a customer's subscriptions in the given status (`all` for any).
    async fn list_subscriptions(
        &self,
        customer: &str,
        status: &str,
    ) -> Result<List<Value>, UpstreamError>;

    /// Sets `cancel_at_period_end` and returns the updated subscription.
    async fn update_subscription(
        &self,
        id: &str,
        cancel_at_period_end: bool,
    ) -> Result<Value, UpstreamError>;

    /// Lists a customer's payment methods of one type (e.g. `card`).
    async fn list_payment_methods(
        &self,
        customer: &str,
        kind: &str,
    ) -> Result<List<Value>, UpstreamError>;

    /// Lists the most recent events, newest first.
    async fn list_events(&self, limit: u32) -> Result<List<Value>, UpstreamError>;
}

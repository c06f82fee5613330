//! Gateway Application Service
//!
//! Orchestrates calls to the upstream provider ports and reshapes their
//! results. Contains NO transport logic - handlers and adapters live elsewhere.

use futures::future::try_join_all;
use serde_json::Value;
use url::Url;

use billing_types::{
    AppError, BillingProvider, CheckoutSessionParams, LineItem, NewCustomer, NewPaymentIntent,
    NewSubscription, UpstreamError, WalletProvider,
};

/// Payment method attached to every customer created through `/api/subscriptions`.
///
/// Demo artifact: a real integration collects the method client-side.
pub const PLACEHOLDER_PAYMENT_METHOD: &str = "pm_card_visa";

/// Wallet subscription served by `/api/subscription`.
///
/// Demo artifact, not parameterized. Slated for removal.
pub const DEMO_WALLET_SUBSCRIPTION_ID: &str = "I-LC5CSKKFNP2E";

/// Description stamped on one-off payment intents.
pub const PAYMENT_INTENT_DESCRIPTION: &str = "IGN Plus";

/// Query flag appended to the caller's origin to build the checkout return URL.
pub const RETURN_URL_FLAG: &str = "plusSubscribed";

/// Upper bound on events returned by the history lookup.
pub const HISTORY_EVENT_LIMIT: u32 = 50;

/// Application service for the gateway.
///
/// Generic over both provider ports - the adapters are injected at compile
/// time, so tests can substitute in-memory doubles.
pub struct GatewayService<B: BillingProvider, W: WalletProvider> {
    billing: B,
    wallet: W,
}

impl<B: BillingProvider, W: WalletProvider> GatewayService<B, W> {
    pub fn new(billing: B, wallet: W) -> Self {
        Self { billing, wallet }
    }

    pub fn billing(&self) -> &B {
        &self.billing
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Catalogue
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists every price, each enriched with its product.
    pub async fn line_items(&self) -> Result<Vec<LineItem>, AppError> {
        let prices = self.billing.list_prices().await?;

        let items = try_join_all(prices.data.iter().map(|price| async move {
            let product = self.billing.retrieve_product(&price.product).await?;
            Ok::<_, UpstreamError>(LineItem::from_price(price, product))
        }))
        .await?;

        Ok(items)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Checkout & Payments
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a hosted subscription checkout, returning its client secret.
    pub async fn create_checkout_session(
        &self,
        price_id: String,
        origin: Option<&str>,
    ) -> Result<String, AppError> {
        let return_url = return_url(origin)?;

        let session = self
            .billing
            .create_checkout_session(CheckoutSessionParams {
                ui_mode: "custom".into(),
                payment_method_types: vec!["card".into(), "paypal".into()],
                price: price_id,
                quantity: 1,
                mode: "subscription".into(),
                return_url: return_url.to_string(),
            })
            .await?;

        session
            .client_secret
            .ok_or_else(|| UpstreamError::MissingField("client_secret").into())
    }

    /// Creates a customer and an incomplete subscription for it, returning the
    /// first invoice's confirmation secret.
    pub async fn create_subscription(
        &self,
        email: String,
        price_id: String,
    ) -> Result<String, AppError> {
        let customer = self
            .billing
            .create_customer(NewCustomer {
                email,
                payment_method: Some(PLACEHOLDER_PAYMENT_METHOD.into()),
                default_payment_method: Some(PLACEHOLDER_PAYMENT_METHOD.into()),
            })
            .await?;

        let subscription = self
            .billing
            .create_subscription(NewSubscription {
                customer: customer.id,
                price: price_id,
                payment_behavior: "default_incomplete".into(),
                expand: vec!["latest_invoice.confirmation_secret".into()],
            })
            .await?;

        subscription
            .confirmation_client_secret()
            .map(String::from)
            .ok_or_else(|| {
                UpstreamError::MissingField("latest_invoice.confirmation_secret.client_secret")
                    .into()
            })
    }

    /// Creates a one-off payment intent for a price's amount.
    pub async fn create_payment_intent(&self, price_id: String) -> Result<String, AppError> {
        let price = self.billing.retrieve_price(&price_id).await?;

        let intent = self
            .billing
            .create_payment_intent(NewPaymentIntent {
                amount: price.unit_amount.unwrap_or(0),
                currency: price.currency,
                description: PAYMENT_INTENT_DESCRIPTION.into(),
                metadata: vec![("priceId".into(), price_id)],
            })
            .await?;

        intent
            .client_secret
            .ok_or_else(|| UpstreamError::MissingField("client_secret").into())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Subscription management
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists subscriptions in any status for the first customer with `email`.
    pub async fn customer_subscriptions(
        &self,
        email: Option<&str>,
    ) -> Result<Vec<Value>, AppError> {
        let customer_id = self.first_customer_id(email).await?;

        let subscriptions = self
            .billing
            .list_subscriptions(&customer_id, "all")
            .await?;

        Ok(subscriptions.data)
    }

    /// Marks a subscription to cancel at the end of its current period.
    pub async fn cancel_subscription(&self, subscription_id: &str) -> Result<Value, AppError> {
        Ok(self
            .billing
            .update_subscription(subscription_id, true)
            .await?)
    }

    /// Clears a pending cancel-at-period-end.
    pub async fn resume_subscription(&self, subscription_id: &str) -> Result<Value, AppError> {
        Ok(self
            .billing
            .update_subscription(subscription_id, false)
            .await?)
    }

    /// Lists card payment methods of the first customer with `email`.
    pub async fn user_payment_methods(&self, email: Option<&str>) -> Result<Vec<Value>, AppError> {
        let email = required(email, "Email is required")?;
        let customer_id = self.first_customer_id(Some(email)).await?;

        let methods = self
            .billing
            .list_payment_methods(&customer_id, "card")
            .await?;

        Ok(methods.data)
    }

    /// Recent events that concern the given subscription.
    pub async fn subscription_history(
        &self,
        subscription_id: Option<&str>,
    ) -> Result<Vec<Value>, AppError> {
        let subscription_id = required(subscription_id, "subscription_id is required")?;

        let events = self.billing.list_events(HISTORY_EVENT_LIMIT).await?;

        Ok(events
            .data
            .into_iter()
            .filter(|event| concerns_subscription(event, subscription_id))
            .collect())
    }

    async fn first_customer_id(&self, email: Option<&str>) -> Result<String, AppError> {
        let customers = self.billing.list_customers(email, 1).await?;

        customers
            .data
            .into_iter()
            .next()
            .map(|c| c.id)
            .ok_or_else(|| AppError::NotFound("Customer not found".into()))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Wallet provider
    // ─────────────────────────────────────────────────────────────────────────────

    /// Fetches the demo wallet subscription.
    pub async fn wallet_subscription(&self) -> Result<Value, AppError> {
        Ok(self
            .wallet
            .get_subscription(DEMO_WALLET_SUBSCRIPTION_ID)
            .await?)
    }

    /// Lists wallet billing plans.
    pub async fn wallet_plans(&self) -> Result<Value, AppError> {
        let body = self.wallet.list_plans().await.map_err(|e| {
            AppError::Internal(format!("Error fetching subscription data: {}", e))
        })?;

        Ok(body.get("plans").cloned().unwrap_or(Value::Null))
    }
}

/// The caller's origin with the subscribed flag appended.
fn return_url(origin: Option<&str>) -> Result<Url, AppError> {
    let mut url = origin
        .and_then(|o| Url::parse(o).ok())
        .ok_or_else(|| AppError::Internal("Invalid URL".into()))?;
    url.query_pairs_mut().append_pair(RETURN_URL_FLAG, "true");
    Ok(url)
}

fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(message.into()))
}

/// An event concerns a subscription when its object is the subscription or
/// references it (invoices, payment intents carry a `subscription` field).
fn concerns_subscription(event: &Value, subscription_id: &str) -> bool {
    let Some(object) = event.pointer("/data/object") else {
        return false;
    };

    object.get("id").and_then(Value::as_str) == Some(subscription_id)
        || object.get("subscription").and_then(Value::as_str) == Some(subscription_id)
}

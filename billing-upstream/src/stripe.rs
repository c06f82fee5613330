//! Billing provider adapter over the Stripe REST API.
//!
//! Requests are form-encoded with bracket notation for nested parameters
//! (`line_items[0][price]`), authenticated with the secret key as a bearer
//! token.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use billing_types::{
    BillingProvider, CheckoutSession, CheckoutSessionParams, CreatedSubscription, Customer, List,
    NewCustomer, NewPaymentIntent, NewSubscription, PaymentIntent, Price, Product, UpstreamError,
};

use crate::path::segment;
use crate::response::{FailureMessage, handle_response, transport};

/// Production API base URL.
pub const STRIPE_API_URL: &str = "https://api.stripe.com";

type Form = Vec<(String, String)>;

/// Stripe API client.
#[derive(Clone)]
pub struct StripeClient {
    base_url: String,
    secret_key: String,
    http: Client,
}

impl StripeClient {
    /// Creates a new client against the given base URL.
    pub fn new(base_url: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            secret_key: secret_key.into(),
            http: Client::new(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &Form) -> Result<T, UpstreamError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.secret_key)
            .query(query)
            .send()
            .await
            .map_err(transport)?;
        handle_response(resp, FailureMessage::Envelope).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, form: &Form) -> Result<T, UpstreamError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.secret_key)
            .form(form)
            .send()
            .await
            .map_err(transport)?;
        handle_response(resp, FailureMessage::Envelope).await
    }
}

fn pair(key: impl Into<String>, value: impl ToString) -> (String, String) {
    (key.into(), value.to_string())
}

fn checkout_form(params: &CheckoutSessionParams) -> Form {
    let mut form = vec![pair("ui_mode", &params.ui_mode)];
    for (i, kind) in params.payment_method_types.iter().enumerate() {
        form.push(pair(format!("payment_method_types[{}]", i), kind));
    }
    form.push(pair("line_items[0][price]", &params.price));
    form.push(pair("line_items[0][quantity]", params.quantity));
    form.push(pair("mode", &params.mode));
    form.push(pair("return_url", &params.return_url));
    form
}

fn customer_form(params: &NewCustomer) -> Form {
    let mut form = vec![pair("email", &params.email)];
    if let Some(pm) = &params.payment_method {
        form.push(pair("payment_method", pm));
    }
    if let Some(pm) = &params.default_payment_method {
        form.push(pair("invoice_settings[default_payment_method]", pm));
    }
    form
}

fn subscription_form(params: &NewSubscription) -> Form {
    let mut form = vec![
        pair("customer", &params.customer),
        pair("items[0][price]", &params.price),
        pair("payment_behavior", &params.payment_behavior),
    ];
    for (i, path) in params.expand.iter().enumerate() {
        form.push(pair(format!("expand[{}]", i), path));
    }
    form
}

fn payment_intent_form(params: &NewPaymentIntent) -> Form {
    let mut form = vec![
        pair("amount", params.amount),
        pair("currency", &params.currency),
        pair("description", &params.description),
    ];
    for (key, value) in &params.metadata {
        form.push(pair(format!("metadata[{}]", key), value));
    }
    form
}

#[async_trait]
impl BillingProvider for StripeClient {
    #[tracing::instrument(skip(self))]
    async fn list_prices(&self) -> Result<List<Price>, UpstreamError> {
        self.get("/v1/prices", &Form::new()).await
    }

    #[tracing::instrument(skip(self))]
    async fn retrieve_price(&self, id: &str) -> Result<Price, UpstreamError> {
        let path = format!("/v1/prices/{}", segment(id)?);
        self.get(&path, &Form::new()).await
    }

    #[tracing::instrument(skip(self))]
    async fn retrieve_product(&self, id: &str) -> Result<Product, UpstreamError> {
        let path = format!("/v1/products/{}", segment(id)?);
        self.get(&path, &Form::new()).await
    }

    #[tracing::instrument(skip(self, params), fields(price = %params.price))]
    async fn create_checkout_session(
        &self,
        params: CheckoutSessionParams,
    ) -> Result<CheckoutSession, UpstreamError> {
        self.post("/v1/checkout/sessions", &checkout_form(&params))
            .await
    }

    #[tracing::instrument(skip(self, params), fields(amount = params.amount))]
    async fn create_payment_intent(
        &self,
        params: NewPaymentIntent,
    ) -> Result<PaymentIntent, UpstreamError> {
        self.post("/v1/payment_intents", &payment_intent_form(&params))
            .await
    }

    #[tracing::instrument(skip(self, params))]
    async fn create_customer(&self, params: NewCustomer) -> Result<Customer, UpstreamError> {
        self.post("/v1/customers", &customer_form(&params)).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_customers(
        &self,
        email: Option<&str>,
        limit: u32,
    ) -> Result<List<Customer>, UpstreamError> {
        let mut query = vec![pair("limit", limit)];
        if let Some(email) = email {
            query.push(pair("email", email));
        }
        self.get("/v1/customers", &query).await
    }

    #[tracing::instrument(skip(self, params), fields(customer = %params.customer))]
    async fn create_subscription(
        &self,
        params: NewSubscription,
    ) -> Result<CreatedSubscription, UpstreamError> {
        self.post("/v1/subscriptions", &subscription_form(&params))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn list_subscriptions(
        &self,
        customer: &str,
        status: &str,
    ) -> Result<List<Value>, UpstreamError> {
        let query = vec![pair("customer", customer), pair("status", status)];
        self.get("/v1/subscriptions", &query).await
    }

    #[tracing::instrument(skip(self))]
    async fn update_subscription(
        &self,
        id: &str,
        cancel_at_period_end: bool,
    ) -> Result<Value, UpstreamError> {
        let path = format!("/v1/subscriptions/{}", segment(id)?);
        let form = vec![pair("cancel_at_period_end", cancel_at_period_end)];
        self.post(&path, &form).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_payment_methods(
        &self,
        customer: &str,
        kind: &str,
    ) -> Result<List<Value>, UpstreamError> {
        let query = vec![pair("customer", customer), pair("type", kind)];
        self.get("/v1/payment_methods", &query).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_events(&self, limit: u32) -> Result<List<Value>, UpstreamError> {
        self.get("/v1/events", &vec![pair("limit", limit)]).await
    }
}

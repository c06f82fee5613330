//! Provider doubles and request helpers for router tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};

use billing_hex::{GatewayService, inbound::HttpServer};
use billing_types::{
    BillingProvider, CheckoutSession, CheckoutSessionParams, ConfirmationSecret,
    CreatedSubscription, Customer, Invoice, List, NewCustomer, NewPaymentIntent, NewSubscription,
    PaymentIntent, Price, Product, UpstreamError, WalletProvider,
};

/// Billing provider double with a fixed catalogue and one customer,
/// `jane@example.com`, owning `sub_1`.
#[derive(Default)]
pub struct StubBilling {
    /// When set, every call fails with this message.
    pub outage: Option<String>,
    pub calls: AtomicUsize,
    pub cancel_at_period_end: Mutex<bool>,
}

impl StubBilling {
    pub fn down(message: &str) -> Self {
        Self {
            outage: Some(message.into()),
            ..Self::default()
        }
    }

    fn enter(&self) -> Result<(), UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outage {
            Some(message) => Err(UpstreamError::Api {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn subscription(&self) -> Value {
        json!({
            "id": "sub_1",
            "object": "subscription",
            "customer": "cus_1",
            "cancel_at_period_end": *self.cancel_at_period_end.lock().unwrap()
        })
    }
}

#[async_trait]
impl BillingProvider for StubBilling {
    async fn list_prices(&self) -> Result<List<Price>, UpstreamError> {
        self.enter()?;
        Ok(List::new(vec![
            Price {
                id: "price_monthly".into(),
                product: "prod_plus".into(),
                unit_amount: Some(499),
                currency: "usd".into(),
            },
            Price {
                id: "price_yearly".into(),
                product: "prod_plus".into(),
                unit_amount: Some(4800),
                currency: "usd".into(),
            },
        ]))
    }

    async fn retrieve_price(&self, id: &str) -> Result<Price, UpstreamError> {
        self.enter()?;
        Ok(Price {
            id: id.into(),
            product: "prod_plus".into(),
            unit_amount: Some(499),
            currency: "usd".into(),
        })
    }

    async fn retrieve_product(&self, id: &str) -> Result<Product, UpstreamError> {
        self.enter()?;
        Ok(Product {
            id: id.into(),
            name: "Plus".into(),
            description: None,
        })
    }

    async fn create_checkout_session(
        &self,
        params: CheckoutSessionParams,
    ) -> Result<CheckoutSession, UpstreamError> {
        self.enter()?;
        Ok(CheckoutSession {
            id: "cs_1".into(),
            client_secret: Some(format!("secret_for:{}", params.return_url)),
        })
    }

    async fn create_payment_intent(
        &self,
        _params: NewPaymentIntent,
    ) -> Result<PaymentIntent, UpstreamError> {
        self.enter()?;
        Ok(PaymentIntent {
            id: "pi_1".into(),
            client_secret: Some("pi_1_secret".into()),
        })
    }

    async fn create_customer(&self, params: NewCustomer) -> Result<Customer, UpstreamError> {
        self.enter()?;
        Ok(Customer {
            id: "cus_new".into(),
            email: Some(params.email),
        })
    }

    async fn list_customers(
        &self,
        email: Option<&str>,
        _limit: u32,
    ) -> Result<List<Customer>, UpstreamError> {
        self.enter()?;
        let data = match email {
            Some("jane@example.com") | None => vec![Customer {
                id: "cus_1".into(),
                email: Some("jane@example.com".into()),
            }],
            Some(_) => vec![],
        };
        Ok(List::new(data))
    }

    async fn create_subscription(
        &self,
        _params: NewSubscription,
    ) -> Result<CreatedSubscription, UpstreamError> {
        self.enter()?;
        Ok(CreatedSubscription {
            id: "sub_new".into(),
            latest_invoice: Some(Invoice {
                confirmation_secret: Some(ConfirmationSecret {
                    client_secret: Some("in_secret".into()),
                }),
            }),
        })
    }

    async fn list_subscriptions(
        &self,
        _customer: &str,
        _status: &str,
    ) -> Result<List<Value>, UpstreamError> {
        self.enter()?;
        Ok(List::new(vec![self.subscription()]))
    }

    async fn update_subscription(
        &self,
        _id: &str,
        cancel_at_period_end: bool,
    ) -> Result<Value, UpstreamError> {
        self.enter()?;
        *self.cancel_at_period_end.lock().unwrap() = cancel_at_period_end;
        Ok(self.subscription())
    }

    async fn list_payment_methods(
        &self,
        customer: &str,
        kind: &str,
    ) -> Result<List<Value>, UpstreamError> {
        self.enter()?;
        Ok(List::new(vec![
            json!({ "id": "pm_1", "type": kind, "customer": customer }),
        ]))
    }

    async fn list_events(&self, _limit: u32) -> Result<List<Value>, UpstreamError> {
        self.enter()?;
        Ok(List::new(vec![json!({
            "id": "evt_1",
            "type": "customer.subscription.updated",
            "data": { "object": { "id": "sub_1" } }
        })]))
    }
}

#[derive(Default)]
pub struct StubWallet {
    pub outage: bool,
}

#[async_trait]
impl WalletProvider for StubWallet {
    async fn get_subscription(&self, id: &str) -> Result<Value, UpstreamError> {
        if self.outage {
            return Err(UpstreamError::Api {
                status: 401,
                message: "Request failed with status code 401".into(),
            });
        }
        Ok(json!({ "id": id, "status": "ACTIVE" }))
    }

    async fn list_plans(&self) -> Result<Value, UpstreamError> {
        if self.outage {
            return Err(UpstreamError::Api {
                status: 401,
                message: "Request failed with status code 401".into(),
            });
        }
        Ok(json!({ "plans": [{ "id": "P-1", "name": "Plus" }], "total_items": 1 }))
    }
}

pub fn app(billing: StubBilling, wallet: StubWallet) -> Router {
    HttpServer::new(GatewayService::new(billing, wallet)).router()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

//! Upstream billing objects.
//!
//! Only the fields the gateway reads are modelled; everything else the
//! provider returns is ignored on deserialization. Objects that are passed
//! through to callers untouched are carried as `serde_json::Value` instead.

use serde::{Deserialize, Serialize};

/// Envelope the billing provider wraps around every list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
}

impl<T> List<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            has_more: false,
        }
    }
}

/// A billable plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Price {
    pub id: String,
    /// Identifier of the product this price belongs to.
    pub product: String,
    /// Amount in the currency's minor unit. Absent for custom-amount prices.
    pub unit_amount: Option<i64>,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub client_secret: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub email: Option<String>,
}

/// A freshly created subscription with `latest_invoice.confirmation_secret` expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedSubscription {
    pub id: String,
    pub latest_invoice: Option<Invoice>,
}

impl CreatedSubscription {
    /// Client secret of the first invoice, if the provider expanded it.
    pub fn confirmation_client_secret(&self) -> Option<&str> {
        self.latest_invoice
            .as_ref()?
            .confirmation_secret
            .as_ref()?
            .client_secret
            .as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub confirmation_secret: Option<ConfirmationSecret>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationSecret {
    pub client_secret: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: Option<String>,
}

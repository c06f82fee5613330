//! # Billing Upstream
//!
//! Outbound adapters implementing the gateway's provider ports over HTTP:
//!
//! - [`StripeClient`] - card/subscription billing provider (`BillingProvider`)
//! - [`PaypalClient`] - wallet payment provider (`WalletProvider`)
//!
//! Both take their base URL at construction so they can be pointed at a
//! sandbox or a local mock server.

mod path;
mod paypal;
mod response;
mod stripe;

pub use paypal::{PAYPAL_SANDBOX_URL, PaypalClient};
pub use stripe::{STRIPE_API_URL, StripeClient};

//! Configuration loading from environment.

use std::env;

use billing_upstream::{PAYPAL_SANDBOX_URL, STRIPE_API_URL};

const DEFAULT_PORT: u16 = 8000;

/// Application configuration.
///
/// Provider credentials are not validated here: a missing key only surfaces
/// when an upstream call is made.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub stripe_secret: String,
    pub stripe_api_base: String,
    pub paypal_token: String,
    pub paypal_api_base: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT {:?}: {}", port, e))?,
            None => DEFAULT_PORT,
        };

        if lookup("STRIPE_SECRET").is_none() {
            tracing::warn!("STRIPE_SECRET is not set; billing calls will fail");
        }
        if lookup("PAYPAL_TOKEN").is_none() {
            tracing::warn!("PAYPAL_TOKEN is not set; wallet calls will fail");
        }

        Ok(Self {
            port,
            stripe_secret: lookup("STRIPE_SECRET").unwrap_or_default(),
            stripe_api_base: lookup("STRIPE_API_BASE").unwrap_or_else(|| STRIPE_API_URL.into()),
            paypal_token: lookup("PAYPAL_TOKEN").unwrap_or_default(),
            paypal_api_base: lookup("PAYPAL_API_BASE")
                .unwrap_or_else(|| PAYPAL_SANDBOX_URL.into()),
        })
    }
}

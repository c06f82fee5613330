//! # Billing Types
//!
//! Shared types and port traits for the billing gateway.
//! This crate performs no IO - only data structures, error types
//! and the trait definitions the upstream adapters implement.
//!
//! ## Architecture
//!
//! - `domain/` - The subset of upstream provider objects the gateway reshapes
//! - `ports/` - Trait definitions that upstream adapters must implement
//! - `dto/` - Request and response bodies of the HTTP surface
//! - `error/` - Upstream and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CheckoutSession, ConfirmationSecret, CreatedSubscription, Customer, Invoice, List,
    PaymentIntent, Price, Product,
};
pub use dto::*;
pub use error::{AppError, UpstreamError};
pub use ports::{
    BillingProvider, CheckoutSessionParams, NewCustomer, NewPaymentIntent, NewSubscription,
    WalletProvider,
};

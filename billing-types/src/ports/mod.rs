//! Port traits (interfaces for adapters).
//!
//! These are the contracts that upstream adapters must implement.
//! The gateway service depends on these traits, not on concrete clients.

mod billing;
mod wallet;

pub use billing::{
    BillingProvider, CheckoutSessionParams, NewCustomer, NewPaymentIntent, NewSubscription,
};
pub use wallet::WalletProvider;

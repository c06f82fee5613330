//! # Billing Hex
//!
//! Application service layer and HTTP adapter for the billing gateway.
//!
//! ## Architecture
//!
//! - `service/` - Gateway service (orchestrates upstream provider calls)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served at `/api-docs/openapi.json`
//!
//! The service is generic over `B: BillingProvider` and `W: WalletProvider`,
//! allowing different upstream clients to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::GatewayService;

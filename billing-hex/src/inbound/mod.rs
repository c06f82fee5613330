//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the gateway service.

mod handlers;
mod server;

pub use handlers::{ApiError, AppState, ErrorBody};
pub use server::HttpServer;

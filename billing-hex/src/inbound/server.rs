//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use billing_types::{BillingProvider, WalletProvider};

use super::handlers::{self, AppState};
use crate::GatewayService;
use crate::openapi::ApiDoc;

/// HTTP Server for the billing gateway.
pub struct HttpServer<B: BillingProvider, W: WalletProvider> {
    state: Arc<AppState<B, W>>,
}

impl<B: BillingProvider, W: WalletProvider> HttpServer<B, W> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: GatewayService<B, W>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/ping", get(handlers::ping))
            .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
            .route("/api/line-items", get(handlers::line_items::<B, W>))
            .route(
                "/api/create-checkout-session",
                post(handlers::create_checkout_session::<B, W>),
            )
            .route(
                "/api/create-payment-intent",
                post(handlers::create_payment_intent::<B, W>),
            )
            .route(
                "/api/subscriptions",
                post(handlers::create_subscription::<B, W>),
            )
            .route(
                "/api/subscriptions/cancel",
                post(handlers::cancel_subscription::<B, W>),
            )
            .route(
                "/api/subscriptions/resume",
                post(handlers::resume_subscription::<B, W>),
            )
            .route(
                "/api/customer-subscriptions",
                get(handlers::customer_subscriptions::<B, W>),
            )
            .route("/api/user-payment", get(handlers::user_payment::<B, W>))
            .route("/api/history", get(handlers::history::<B, W>))
            .route(
                "/api/subscription",
                get(handlers::wallet_subscription::<B, W>),
            )
            .route(
                "/api/paypal/subscription",
                get(handlers::wallet_plans::<B, W>),
            )
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Billing gateway listening on http://{}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "gateway cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "gateway cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Billing gateway draining in-flight upstream calls before exit");
}

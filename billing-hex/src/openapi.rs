//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use billing_types::dto::{
    CheckoutSessionResponse, ClientSecretResponse, CreateSubscriptionRequest, LineItem,
    PriceRequest, SubscriptionIdRequest, WalletPlansResponse, WalletSubscriptionResponse,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/ping",
    tag = "health",
    responses(
        (status = 200, description = "Gateway is up", body = String, example = "Pong!")
    )
)]
async fn ping() {}

/// List plans with product details
#[utoipa::path(
    get,
    path = "/api/line-items",
    tag = "billing",
    responses(
        (status = 200, description = "Plans with amounts in major units", body = Vec<LineItem>),
        (status = 500, description = "Upstream failure, message as plain text", body = String)
    )
)]
async fn line_items() {}

/// Create a hosted checkout session
///
/// The return URL is the request's `Origin` header with `plusSubscribed=true` appended.
#[utoipa::path(
    post,
    path = "/api/create-checkout-session",
    tag = "billing",
    request_body = PriceRequest,
    params(
        ("Origin" = String, Header, description = "Absolute URL to return to after checkout")
    ),
    responses(
        (status = 200, description = "Checkout session created", body = CheckoutSessionResponse),
        (status = 500, description = "Upstream failure or invalid origin", body = inline(serde_json::Value), example = json!({"error": "Invalid URL"}))
    )
)]
async fn create_checkout_session() {}

/// Create a customer and an incomplete subscription
#[utoipa::path(
    post,
    path = "/api/subscriptions",
    tag = "billing",
    request_body = CreateSubscriptionRequest,
    responses(
        (status = 200, description = "Invoice confirmation secret", body = ClientSecretResponse),
        (status = 500, description = "Upstream failure, message as plain text", body = String)
    )
)]
async fn create_subscription() {}

/// Create a one-off payment intent for a price
#[utoipa::path(
    post,
    path = "/api/create-payment-intent",
    tag = "billing",
    request_body = PriceRequest,
    responses(
        (status = 200, description = "Payment intent client secret", body = ClientSecretResponse),
        (status = 500, description = "Upstream failure, message as plain text", body = String)
    )
)]
async fn create_payment_intent() {}

/// List every subscription of a customer
#[utoipa::path(
    get,
    path = "/api/customer-subscriptions",
    tag = "subscriptions",
    params(
        ("email" = Option<String>, Query, description = "Customer email")
    ),
    responses(
        (status = 200, description = "Subscriptions in any status", body = inline(serde_json::Value)),
        (status = 404, description = "No customer with that email", body = String),
        (status = 500, description = "Upstream failure", body = String)
    )
)]
async fn customer_subscriptions() {}

/// Cancel a subscription at the end of its period
#[utoipa::path(
    post,
    path = "/api/subscriptions/cancel",
    tag = "subscriptions",
    request_body = SubscriptionIdRequest,
    responses(
        (status = 200, description = "Updated subscription", body = inline(serde_json::Value)),
        (status = 500, description = "Upstream failure", body = String)
    )
)]
async fn cancel_subscription() {}

/// Undo a pending cancellation
#[utoipa::path(
    post,
    path = "/api/subscriptions/resume",
    tag = "subscriptions",
    request_body = SubscriptionIdRequest,
    responses(
        (status = 200, description = "Updated subscription", body = inline(serde_json::Value)),
        (status = 500, description = "Upstream failure", body = String)
    )
)]
async fn resume_subscription() {}

/// List a customer's card payment methods
#[utoipa::path(
    get,
    path = "/api/user-payment",
    tag = "subscriptions",
    params(
        ("email" = String, Query, description = "Customer email")
    ),
    responses(
        (status = 200, description = "Card payment methods", body = inline(serde_json::Value)),
        (status = 400, description = "Missing email", body = String),
        (status = 404, description = "No customer with that email", body = String),
        (status = 500, description = "Upstream failure", body = String)
    )
)]
async fn user_payment() {}

/// Recent events concerning a subscription
#[utoipa::path(
    get,
    path = "/api/history",
    tag = "subscriptions",
    params(
        ("subscription_id" = String, Query, description = "Subscription identifier")
    ),
    responses(
        (status = 200, description = "Up to 50 events", body = inline(serde_json::Value)),
        (status = 400, description = "Missing subscription_id", body = String),
        (status = 500, description = "Upstream failure", body = String)
    )
)]
async fn history() {}

/// Fetch the demo wallet subscription
#[utoipa::path(
    get,
    path = "/api/subscription",
    tag = "wallet",
    responses(
        (status = 200, description = "Wallet subscription", body = WalletSubscriptionResponse),
        (status = 500, description = "Upstream failure", body = String)
    )
)]
async fn wallet_subscription() {}

/// List wallet billing plans
#[utoipa::path(
    get,
    path = "/api/paypal/subscription",
    tag = "wallet",
    responses(
        (status = 200, description = "Wallet billing plans", body = WalletPlansResponse),
        (status = 500, description = "Upstream failure", body = String)
    )
)]
async fn wallet_plans() {}

/// OpenAPI documentation for the billing gateway.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Billing Gateway API",
        version = "1.0.0",
        description = "Thin HTTP gateway over a card/subscription billing provider and a wallet payment provider.\n\nNo endpoint is authenticated. Upstream failures are returned as HTTP 500 with the provider's message.",
        license(name = "MIT"),
    ),
    paths(
        ping,
        line_items,
        create_checkout_session,
        create_subscription,
        create_payment_intent,
        customer_subscriptions,
        cancel_subscription,
        resume_subscription,
        user_payment,
        history,
        wallet_subscription,
        wallet_plans,
    ),
    components(
        schemas(
            LineItem,
            PriceRequest,
            CheckoutSessionResponse,
            CreateSubscriptionRequest,
            ClientSecretResponse,
            SubscriptionIdRequest,
            WalletSubscriptionResponse,
            WalletPlansResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "billing", description = "Catalogue, checkout and payment operations"),
        (name = "subscriptions", description = "Subscription management"),
        (name = "wallet", description = "Wallet payment provider passthrough"),
    )
)]
pub struct ApiDoc;

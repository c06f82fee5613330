//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use billing_types::{
    AppError, BillingProvider, CheckoutSessionResponse, ClientSecretResponse,
    CreateSubscriptionRequest, EmailQuery, HistoryQuery, PriceRequest, SubscriptionIdRequest,
    WalletPlansResponse, WalletProvider, WalletSubscriptionResponse,
};

use crate::GatewayService;

/// Application state shared across handlers.
pub struct AppState<B: BillingProvider, W: WalletProvider> {
    pub service: GatewayService<B, W>,
}

/// Shape of an error response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorBody {
    /// The bare message as `text/plain`.
    Text,
    /// `{ "error": message }`
    Json,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError {
    pub error: AppError,
    pub body: ErrorBody,
}

impl ApiError {
    /// Renders the error as a JSON object instead of plain text.
    pub fn json(error: AppError) -> Self {
        Self {
            error,
            body: ErrorBody::Json,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self {
            error,
            body: ErrorBody::Text,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.error {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "upstream request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = self.error.message().to_string();
        match self.body {
            ErrorBody::Text => (status, message).into_response(),
            ErrorBody::Json => {
                (status, Json(serde_json::json!({ "error": message }))).into_response()
            }
        }
    }
}

type AppResult<T> = Result<T, ApiError>;

type JsonBody<T> = Result<Json<T>, JsonRejection>;

/// Unwraps a JSON request body.
///
/// A body sent without a JSON content type is read as empty, so its fields
/// take their defaults and the upstream call decides. Any other rejection is
/// an internal error carrying axum's message.
fn read_body<T: Default>(payload: JsonBody<T>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(AppError::Internal(rejection.body_text())),
    }
}

/// Health check endpoint.
pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, "Pong!")
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalogue & Checkout
// ─────────────────────────────────────────────────────────────────────────────

/// List prices enriched with product details.
#[tracing::instrument(skip(state))]
pub async fn line_items<B: BillingProvider, W: WalletProvider>(
    State(state): State<Arc<AppState<B, W>>>,
) -> AppResult<impl IntoResponse> {
    let items = state.service.line_items().await?;
    Ok(Json(items))
}

/// Create a hosted checkout session returning to the caller's origin.
#[tracing::instrument(skip_all, fields(price_id = tracing::field::Empty))]
pub async fn create_checkout_session<B: BillingProvider, W: WalletProvider>(
    State(state): State<Arc<AppState<B, W>>>,
    headers: HeaderMap,
    payload: JsonBody<PriceRequest>,
) -> AppResult<impl IntoResponse> {
    let req = read_body(payload).map_err(ApiError::json)?;
    tracing::Span::current().record("price_id", req.price_id.as_str());

    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok());

    let secret = state
        .service
        .create_checkout_session(req.price_id, origin)
        .await
        .map_err(ApiError::json)?;

    Ok(Json(CheckoutSessionResponse {
        checkout_session_client_secret: secret,
    }))
}

/// Create a customer and an incomplete subscription.
#[tracing::instrument(skip_all, fields(price_id = tracing::field::Empty))]
pub async fn create_subscription<B: BillingProvider, W: WalletProvider>(
    State(state): State<Arc<AppState<B, W>>>,
    payload: JsonBody<CreateSubscriptionRequest>,
) -> AppResult<impl IntoResponse> {
    let req = read_body(payload)?;
    tracing::Span::current().record("price_id", req.price_id.as_str());

    let client_secret = state
        .service
        .create_subscription(req.email, req.price_id)
        .await?;
    Ok(Json(ClientSecretResponse { client_secret }))
}

/// Create a one-off payment intent for a price.
#[tracing::instrument(skip_all, fields(price_id = tracing::field::Empty))]
pub async fn create_payment_intent<B: BillingProvider, W: WalletProvider>(
    State(state): State<Arc<AppState<B, W>>>,
    payload: JsonBody<PriceRequest>,
) -> AppResult<impl IntoResponse> {
    let req = read_body(payload)?;
    tracing::Span::current().record("price_id", req.price_id.as_str());

    let client_secret = state.service.create_payment_intent(req.price_id).await?;
    Ok(Json(ClientSecretResponse { client_secret }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Subscription management
// ─────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip(state, query))]
pub async fn customer_subscriptions<B: BillingProvider, W: WalletProvider>(
    State(state): State<Arc<AppState<B, W>>>,
    Query(query): Query<EmailQuery>,
) -> AppResult<impl IntoResponse> {
    let subscriptions = state
        .service
        .customer_subscriptions(query.email.as_deref())
        .await?;
    Ok(Json(subscriptions))
}

#[tracing::instrument(skip_all, fields(subscription_id = tracing::field::Empty))]
pub async fn cancel_subscription<B: BillingProvider, W: WalletProvider>(
    State(state): State<Arc<AppState<B, W>>>,
    payload: JsonBody<SubscriptionIdRequest>,
) -> AppResult<impl IntoResponse> {
    let req = read_body(payload)?;
    tracing::Span::current().record("subscription_id", req.subscription_id.as_str());

    let subscription = state
        .service
        .cancel_subscription(&req.subscription_id)
        .await?;
    Ok(Json(subscription))
}

#[tracing::instrument(skip_all, fields(subscription_id = tracing::field::Empty))]
pub async fn resume_subscription<B: BillingProvider, W: WalletProvider>(
    State(state): State<Arc<AppState<B, W>>>,
    payload: JsonBody<SubscriptionIdRequest>,
) -> AppResult<impl IntoResponse> {
    let req = read_body(payload)?;
    tracing::Span::current().record("subscription_id", req.subscription_id.as_str());

    let subscription = state
        .service
        .resume_subscription(&req.subscription_id)
        .await?;
    Ok(Json(subscription))
}

#[tracing::instrument(skip(state, query))]
pub async fn user_payment<B: BillingProvider, W: WalletProvider>(
    State(state): State<Arc<AppState<B, W>>>,
    Query(query): Query<EmailQuery>,
) -> AppResult<impl IntoResponse> {
    let methods = state
        .service
        .user_payment_methods(query.email.as_deref())
        .await?;
    Ok(Json(methods))
}

#[tracing::instrument(skip(state))]
pub async fn history<B: BillingProvider, W: WalletProvider>(
    State(state): State<Arc<AppState<B, W>>>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<impl IntoResponse> {
    let events = state
        .service
        .subscription_history(query.subscription_id.as_deref())
        .await?;
    Ok(Json(events))
}

// ─────────────────────────────────────────────────────────────────────────────
// Wallet provider
// ─────────────────────────────────────────────────────────────────────────────

// TODO: drop once the storefront stops calling it; the identifier is fixed.
#[tracing::instrument(skip(state))]
pub async fn wallet_subscription<B: BillingProvider, W: WalletProvider>(
    State(state): State<Arc<AppState<B, W>>>,
) -> AppResult<impl IntoResponse> {
    let subscription = state.service.wallet_subscription().await?;
    Ok(Json(WalletSubscriptionResponse { subscription }))
}

#[tracing::instrument(skip(state))]
pub async fn wallet_plans<B: BillingProvider, W: WalletProvider>(
    State(state): State<Arc<AppState<B, W>>>,
) -> AppResult<impl IntoResponse> {
    let plans = state.service.wallet_plans().await?;
    Ok(Json(WalletPlansResponse { plans }))
}

//! # Billing Gateway
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Construct the upstream provider clients
//! - Create the gateway service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use billing_hex::{GatewayService, inbound::HttpServer};
use billing_upstream::{PaypalClient, StripeClient};

const DEFAULT_FILTER: &str = "info,billing_app=debug,billing_hex=debug";

#[cfg(feature = "otel")]
fn init_tracer() -> anyhow::Result<(
    opentelemetry_sdk::trace::Tracer,
    opentelemetry_sdk::trace::SdkTracerProvider,
)> {
    use opentelemetry::global;
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};

    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    Ok((provider.tracer("billing-gateway"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    #[cfg(feature = "otel")]
    let (otel_tracer, otel_provider) = init_tracer()?;

    #[cfg(feature = "otel")]
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_opentelemetry::layer().with_tracer(otel_tracer))
        .init();

    #[cfg(not(feature = "otel"))]
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting billing gateway on port {}", config.port);
    tracing::info!(
        stripe = %config.stripe_api_base,
        paypal = %config.paypal_api_base,
        "Using upstream providers"
    );

    let billing = StripeClient::new(config.stripe_api_base, config.stripe_secret);
    let wallet = PaypalClient::new(config.paypal_api_base, config.paypal_token);

    let server = HttpServer::new(GatewayService::new(billing, wallet));
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    #[cfg(feature = "otel")]
    let _ = otel_provider.shutdown();

    Ok(())
}

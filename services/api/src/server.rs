use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryLeadNotifier, InMemoryQuoteRepository};
use crate::routes::with_quote_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use swissclean::config::AppConfig;
use swissclean::error::AppError;
use swissclean::telemetry;
use swissclean::workflows::quotes::{PriceTexts, PricingConfig, QuoteService};
use tracing::info;

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let quote_service = Arc::new(QuoteService::new(
        Arc::new(InMemoryQuoteRepository::default()),
        Arc::new(InMemoryLeadNotifier::default()),
        PricingConfig::standard(),
        PriceTexts::for_locale(&config.quotes.locale),
    ));

    let (metric_layer, metric_handle) = PrometheusMetricLayer::pair();
    let ready = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: ready.clone(),
        metrics: Arc::new(metric_handle),
    };

    let app = with_quote_routes(quote_service)
        .layer(Extension(state))
        .layer(metric_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    ready.store(true, Ordering::Release);

    info!(?config.environment, %addr, locale = %config.quotes.locale, "quote service listening");

    axum::serve(listener, app).await?;
    Ok(())
}

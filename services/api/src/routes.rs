use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use swissclean::workflows::quotes::{quote_router, LeadNotifier, QuoteRepository, QuoteService};

/// Domain routes plus the operational endpoints every deployment expects.
pub(crate) fn with_quote_routes<R, N>(service: Arc<QuoteService<R, N>>) -> axum::Router
where
    R: QuoteRepository + 'static,
    N: LeadNotifier + 'static,
{
    quote_router(service)
        .route("/health", get(health))
        .route("/ready", get(readiness))
        .route("/metrics", get(metrics))
}

pub(crate) async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.readiness.load(Ordering::Acquire) {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "status": "starting" })))
    }
}

pub(crate) async fn metrics(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;

    fn state(ready: bool) -> AppState {
        // Build a handle without installing a global recorder; `pair()` would
        // install one on every call and panic the second time around.
        let handle = PrometheusBuilder::new().build_recorder().handle();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(handle),
        }
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(body) = health().await;
        assert_eq!(body.get("status").and_then(|s| s.as_str()), Some("ok"));
    }

    #[tokio::test]
    async fn readiness_tracks_the_flag() {
        let starting = readiness(Extension(state(false))).await.into_response();
        assert_eq!(starting.status(), StatusCode::SERVICE_UNAVAILABLE);

        let ready = readiness(Extension(state(true))).await.into_response();
        assert_eq!(ready.status(), StatusCode::OK);
    }
}

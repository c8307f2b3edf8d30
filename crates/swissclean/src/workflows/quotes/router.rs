use std::collections::BTreeSet;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{
    AddOnId, EstimationInput, QuoteId, QuoteRequest, QuoteStatus, ServiceCategory, ServiceType,
};
use super::repository::{LeadNotifier, QuoteRepository, RepositoryError};
use super::selection::QuoteSelection;
use super::service::{QuoteService, QuoteServiceError};

const EXPORT_LIMIT: usize = 500;

/// Router builder exposing HTTP endpoints for the calculator and lead intake.
pub fn quote_router<R, N>(service: Arc<QuoteService<R, N>>) -> Router
where
    R: QuoteRepository + 'static,
    N: LeadNotifier + 'static,
{
    Router::new()
        .route("/api/v1/quotes/estimate", post(estimate_handler::<R, N>))
        .route("/api/v1/quotes", post(submit_handler::<R, N>))
        .route("/api/v1/quotes/export.csv", get(export_handler::<R, N>))
        .route("/api/v1/quotes/:quote_id", get(status_handler::<R, N>))
        .route(
            "/api/v1/quotes/:quote_id/status",
            post(update_status_handler::<R, N>),
        )
        .route("/api/v1/pricing/catalog", get(catalog_handler::<R, N>))
        .with_state(service)
}

/// Calculator payload: selections only, no contact details.
#[derive(Debug, Deserialize)]
pub(crate) struct EstimateRequest {
    pub(crate) category: ServiceCategory,
    pub(crate) service: ServiceType,
    #[serde(default)]
    pub(crate) input: EstimationInput,
    #[serde(default)]
    pub(crate) add_ons: BTreeSet<AddOnId>,
}

pub(crate) async fn estimate_handler<R, N>(
    State(service): State<Arc<QuoteService<R, N>>>,
    axum::Json(request): axum::Json<EstimateRequest>,
) -> Response
where
    R: QuoteRepository + 'static,
    N: LeadNotifier + 'static,
{
    let selection = match QuoteSelection::with_service(request.category, request.service) {
        Ok(mut selection) => {
            selection.set_input(request.input);
            selection.select_add_ons(request.add_ons);
            selection
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    let estimate = service.estimate(&selection);
    (StatusCode::OK, axum::Json(estimate)).into_response()
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<QuoteService<R, N>>>,
    axum::Json(request): axum::Json<QuoteRequest>,
) -> Response
where
    R: QuoteRepository + 'static,
    N: LeadNotifier + 'static,
{
    match service.submit(request) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(QuoteServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(QuoteServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "quote already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, N>(
    State(service): State<Arc<QuoteService<R, N>>>,
    Path(quote_id): Path<String>,
) -> Response
where
    R: QuoteRepository + 'static,
    N: LeadNotifier + 'static,
{
    let id = QuoteId(quote_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(QuoteServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "quote_id": id.0,
                "error": "quote not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

/// Back-office status change payload.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusUpdateRequest {
    pub(crate) status: QuoteStatus,
}

pub(crate) async fn update_status_handler<R, N>(
    State(service): State<Arc<QuoteService<R, N>>>,
    Path(quote_id): Path<String>,
    axum::Json(request): axum::Json<StatusUpdateRequest>,
) -> Response
where
    R: QuoteRepository + 'static,
    N: LeadNotifier + 'static,
{
    let id = QuoteId(quote_id);
    match service.update_status(&id, request.status) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(QuoteServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "quote_id": id.0,
                "error": "quote not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn export_handler<R, N>(
    State(service): State<Arc<QuoteService<R, N>>>,
) -> Response
where
    R: QuoteRepository + 'static,
    N: LeadNotifier + 'static,
{
    match service.export_csv(EXPORT_LIMIT) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn catalog_handler<R, N>(
    State(service): State<Arc<QuoteService<R, N>>>,
) -> Response
where
    R: QuoteRepository + 'static,
    N: LeadNotifier + 'static,
{
    let catalog = service.estimator().catalog();
    (StatusCode::OK, axum::Json(catalog)).into_response()
}

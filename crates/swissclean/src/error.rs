use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::quotes::QuoteServiceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Quote(QuoteServiceError),
}

impl AppError {
    /// Intake violations are the caller's fault; everything else that bubbles
    /// up to this level is an operational failure.
    fn status(&self) -> StatusCode {
        match self {
            AppError::Quote(QuoteServiceError::Intake(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "config: {err}"),
            AppError::Telemetry(err) => write!(f, "telemetry: {err}"),
            AppError::Io(err) => write!(f, "i/o failure: {err}"),
            AppError::Server(err) => write!(f, "http server: {err}"),
            AppError::Quote(err) => write!(f, "quote workflow: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Quote(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<TelemetryError> for AppError {
    fn from(err: TelemetryError) -> Self {
        AppError::Telemetry(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<axum::Error> for AppError {
    fn from(err: axum::Error) -> Self {
        AppError::Server(err)
    }
}

impl From<QuoteServiceError> for AppError {
    fn from(err: QuoteServiceError) -> Self {
        AppError::Quote(err)
    }
}

#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::mailer::MailError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The response body keeps the `{ "success": false, "error": ... }` envelope
/// the form portal already parses; only the status codes distinguish the
/// error kinds (validation 400, delivery 502, everything else 500).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not configured")]
    Configuration(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Delivery(#[from] MailError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Configuration(what) => {
                tracing::error!("Configuration error: {what} not configured");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Validation(msg) => {
                tracing::warn!("Validation error: {msg}");
                StatusCode::BAD_REQUEST
            }
            AppError::Delivery(e) => {
                match e {
                    MailError::Api { status, .. } => {
                        tracing::error!("Delivery error (provider status {status}): {e}")
                    }
                    MailError::Http(_) => tracing::error!("Delivery error: {e}"),
                }
                StatusCode::BAD_GATEWAY
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

//! Axum route handlers for the Workbook API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::errors::AppError;
use crate::mailer::OutboundEmail;
use crate::state::AppState;
use crate::workbook::fields::FormData;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Inbound submission from the form portal. Field names mirror the portal's
/// JSON contract, so everything is camelCase on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbookRequest {
    #[serde(default)]
    pub attorney_email: String,
    #[serde(default)]
    pub owner_email: String,
    /// Raw field map; converted to typed `FormData` after validation so a
    /// malformed value produces our envelope, not a framework rejection.
    #[serde(default)]
    pub form_data: Map<String, Value>,
    /// Client-rendered HTML. Accepted for wire compatibility, never used —
    /// the server renders its own copy.
    #[serde(default)]
    pub html_content: Option<String>,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct SendWorkbookResponse {
    pub success: bool,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/workbook/send
///
/// Validates the submission, renders the workbook document, and dispatches
/// it to the attorney and the owner with an attached copy.
pub async fn handle_send_workbook(
    State(state): State<AppState>,
    Json(request): Json<WorkbookRequest>,
) -> Result<Json<SendWorkbookResponse>, AppError> {
    if request.attorney_email.trim().is_empty() || request.owner_email.trim().is_empty() {
        return Err(AppError::Validation("Missing email addresses".to_string()));
    }

    let timestamp = DateTime::parse_from_rfc3339(&request.timestamp)
        .map_err(|_| {
            AppError::Validation(format!("Invalid timestamp: '{}'", request.timestamp))
        })?
        .with_timezone(&Utc);

    let form = FormData::from_json_map(&request.form_data)?;
    if form.is_empty() {
        tracing::warn!("formData is empty; dispatching workbook with blank sections");
    }

    let html = state.renderer.render(&form);

    let email = OutboundEmail {
        to: vec![request.attorney_email.clone(), request.owner_email.clone()],
        subject: format!(
            "Attorney Workbook - Pre-Meeting Prep ({})",
            timestamp.format("%-m/%-d/%Y")
        ),
        html_body: html,
        attachment_filename: format!(
            "Attorney_Workbook_{}.html",
            timestamp.format("%Y-%m-%d")
        ),
    };

    state.mailer.send(&email).await?;

    info!(
        "Workbook dispatched to {} and {}",
        request.attorney_email, request.owner_email
    );

    Ok(Json(SendWorkbookResponse {
        success: true,
        message: "Email sent successfully".to_string(),
    }))
}

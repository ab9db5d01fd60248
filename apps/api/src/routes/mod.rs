pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::workbook::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/workbook/send",
            post(handlers::handle_send_workbook),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailer::{MailError, MailSender, OutboundEmail};
    use crate::workbook::renderer::WorkbookRenderer;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;
    use tower_http::cors::CorsLayer;

    struct NullMailer;

    #[async_trait]
    impl MailSender for NullMailer {
        async fn send(&self, _email: &OutboundEmail) -> Result<(), MailError> {
            Ok(())
        }
    }

    fn test_app() -> Router {
        let state = AppState {
            mailer: Arc::new(NullMailer),
            renderer: Arc::new(WorkbookRenderer::new("Keller", "")),
        };
        build_router(state).layer(CorsLayer::permissive())
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_missing_emails_produce_error_envelope() {
        let payload = json!({
            "attorneyEmail": "attorney@example.com",
            "formData": {},
            "timestamp": "2024-06-01T12:00:00Z"
        });

        let response = test_app()
            .oneshot(
                Request::post("/api/v1/workbook/send")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Missing email addresses");
    }

    #[tokio::test]
    async fn test_successful_send_returns_success_envelope() {
        let payload = json!({
            "attorneyEmail": "attorney@example.com",
            "ownerEmail": "owner@example.com",
            "formData": { "meeting_date": "2024-06-05" },
            "timestamp": "2024-06-01T12:00:00Z"
        });

        let response = test_app()
            .oneshot(
                Request::post("/api/v1/workbook/send")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Email sent successfully");
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/v1/workbook/send")
                    .header(header::ORIGIN, "https://portal.example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}

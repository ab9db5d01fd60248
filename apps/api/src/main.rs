mod config;
mod errors;
mod mailer;
mod routes;
mod state;
mod workbook;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::mailer::SendGridMailer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::workbook::renderer::WorkbookRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (errors on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Workbook API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the delivery adapter with the credential injected up front.
    // The SendGrid key is never read from the environment after this point.
    let mailer = Arc::new(SendGridMailer::new(
        config.sendgrid_api_key.clone(),
        config.sender_email.clone(),
        config.sender_name.clone(),
    ));
    info!("SendGrid mailer initialized (sender: {})", config.sender_email);

    // Section titles and field keys embed the configured party name.
    let renderer = Arc::new(WorkbookRenderer::new(
        &config.party_name,
        &config.case_caption,
    ));
    info!("Renderer initialized (party: {})", config.party_name);

    // Build app state
    let state = AppState { mailer, renderer };

    // Build router. The form portal is an internal tool served from another
    // origin, so CORS stays permissive.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

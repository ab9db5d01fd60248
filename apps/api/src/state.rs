use std::sync::Arc;

use crate::mailer::MailSender;
use crate::workbook::renderer::WorkbookRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Delivery adapter behind a trait so handler tests can substitute an
    /// in-memory double.
    pub mailer: Arc<dyn MailSender>,
    /// Renderer built once at startup from the configured party name and
    /// case caption; stateless and safe to share across requests.
    pub renderer: Arc<WorkbookRenderer>,
}

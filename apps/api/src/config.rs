use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Errors at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub sendgrid_api_key: String,
    pub sender_email: String,
    pub sender_name: String,
    /// Party name embedded in the impeachment-strategy section title and in
    /// the field keys the form generates for that section.
    pub party_name: String,
    /// Case caption shown in the document header, e.g. "US v. Doe | 24-376".
    /// May be left unset; the header then shows only the render time.
    pub case_caption: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            sendgrid_api_key: require_env("SENDGRID_API_KEY")?,
            sender_email: require_env("SENDER_EMAIL")?,
            sender_name: std::env::var("SENDER_NAME")
                .unwrap_or_else(|_| "Attorney Workbook".to_string()),
            party_name: std::env::var("WORKBOOK_PARTY_NAME")
                .unwrap_or_else(|_| "Witness".to_string()),
            case_caption: std::env::var("WORKBOOK_CASE_CAPTION").unwrap_or_default(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

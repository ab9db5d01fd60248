//! Delivery adapter — the single point of entry for outbound email.
//!
//! ARCHITECTURAL RULE: no other module may call the SendGrid API directly.
//! Handlers depend on the `MailSender` trait, so tests substitute an
//! in-memory double and never touch the network.
//!
//! Delivery is fire-and-forget by design: no retries, no queuing. A failed
//! send surfaces the provider's response body verbatim to the caller.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

const SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("SendGrid API error: {body}")]
    Api { status: u16, body: String },
}

/// A fully-assembled outbound email: recipients, subject, HTML body, and one
/// HTML attachment carrying the same document.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: Vec<String>,
    pub subject: String,
    pub html_body: String,
    pub attachment_filename: String,
}

/// Abstraction over the transactional-email provider.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

// ────────────────────────────────────────────────────────────────────────────
// SendGrid v3 wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct SendGridRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: EmailAddress<'a>,
    content: Vec<Content<'a>>,
    attachments: Vec<Attachment<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<EmailAddress<'a>>,
    subject: &'a str,
}

#[derive(Debug, Serialize)]
struct EmailAddress<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct Attachment<'a> {
    /// Base64-encoded file content, per the SendGrid attachment contract.
    content: String,
    filename: &'a str,
    #[serde(rename = "type")]
    content_type: &'a str,
    disposition: &'a str,
}

// ────────────────────────────────────────────────────────────────────────────
// SendGrid client
// ────────────────────────────────────────────────────────────────────────────

/// The production `MailSender`: one POST per email to the SendGrid v3 API.
pub struct SendGridMailer {
    client: Client,
    api_key: String,
    sender_email: String,
    sender_name: String,
}

impl SendGridMailer {
    pub fn new(api_key: String, sender_email: String, sender_name: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            sender_email,
            sender_name,
        }
    }

    fn build_request<'a>(&'a self, email: &'a OutboundEmail) -> SendGridRequest<'a> {
        SendGridRequest {
            personalizations: vec![Personalization {
                to: email
                    .to
                    .iter()
                    .map(|addr| EmailAddress {
                        email: addr,
                        name: None,
                    })
                    .collect(),
                subject: &email.subject,
            }],
            from: EmailAddress {
                email: &self.sender_email,
                name: Some(&self.sender_name),
            },
            content: vec![Content {
                content_type: "text/html",
                value: &email.html_body,
            }],
            attachments: vec![Attachment {
                content: BASE64.encode(&email.html_body),
                filename: &email.attachment_filename,
                content_type: "text/html",
                disposition: "attachment",
            }],
        }
    }
}

#[async_trait]
impl MailSender for SendGridMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let request_body = self.build_request(email);

        let response = self
            .client
            .post(SENDGRID_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("SendGrid API returned {}: {}", status, body);
            return Err(MailError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!(
            "SendGrid accepted message '{}' for {} recipient(s)",
            email.subject,
            email.to.len()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_email() -> OutboundEmail {
        OutboundEmail {
            to: vec![
                "attorney@example.com".to_string(),
                "owner@example.com".to_string(),
            ],
            subject: "Attorney Workbook - Pre-Meeting Prep (6/1/2024)".to_string(),
            html_body: "<html><body>doc</body></html>".to_string(),
            attachment_filename: "Attorney_Workbook_2024-06-01.html".to_string(),
        }
    }

    #[test]
    fn test_request_matches_sendgrid_wire_shape() {
        let mailer = SendGridMailer::new(
            "sg-key".to_string(),
            "workbook@example.com".to_string(),
            "Attorney Workbook".to_string(),
        );
        let email = sample_email();
        let value = serde_json::to_value(mailer.build_request(&email)).unwrap();

        let to = &value["personalizations"][0]["to"];
        assert_eq!(to.as_array().unwrap().len(), 2);
        assert_eq!(to[0]["email"], "attorney@example.com");
        assert_eq!(to[1]["email"], "owner@example.com");
        assert_eq!(
            value["personalizations"][0]["subject"],
            "Attorney Workbook - Pre-Meeting Prep (6/1/2024)"
        );

        assert_eq!(value["from"]["email"], "workbook@example.com");
        assert_eq!(value["from"]["name"], "Attorney Workbook");

        assert_eq!(value["content"][0]["type"], "text/html");
        assert_eq!(value["content"][0]["value"], "<html><body>doc</body></html>");
    }

    #[test]
    fn test_attachment_is_base64_of_body() {
        let mailer = SendGridMailer::new(
            "sg-key".to_string(),
            "workbook@example.com".to_string(),
            "Attorney Workbook".to_string(),
        );
        let email = sample_email();
        let value = serde_json::to_value(mailer.build_request(&email)).unwrap();

        let attachment = &value["attachments"][0];
        assert_eq!(
            attachment["content"],
            BASE64.encode("<html><body>doc</body></html>")
        );
        assert_eq!(attachment["filename"], "Attorney_Workbook_2024-06-01.html");
        assert_eq!(attachment["type"], "text/html");
        assert_eq!(attachment["disposition"], "attachment");
    }

    #[test]
    fn test_recipient_addresses_have_no_display_name() {
        let mailer = SendGridMailer::new(
            "sg-key".to_string(),
            "workbook@example.com".to_string(),
            "Attorney Workbook".to_string(),
        );
        let email = sample_email();
        let value = serde_json::to_value(mailer.build_request(&email)).unwrap();

        // `name` must be skipped entirely for recipients, not serialized null.
        assert!(value["personalizations"][0]["to"][0].get("name").is_none());
    }

    #[test]
    fn test_api_error_surfaces_body_verbatim() {
        let err = MailError::Api {
            status: 403,
            body: r#"{"errors":[{"message":"forbidden"}]}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"SendGrid API error: {"errors":[{"message":"forbidden"}]}"#
        );
    }
}

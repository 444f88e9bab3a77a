//! Email Service
//!
//! Forwards contact-form submissions to the Resend delivery API. When no API
//! key is configured the service reports itself unavailable instead of
//! failing at startup, so development environments run without credentials.

use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::ContactRequest;

/// Delivery endpoint of the email provider
const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Sender identity; the domain must be verified with the provider
const CONTACT_FROM: &str = "Mini Groups <contato@minigroups.com>";

// == Email Payload ==
/// Request body for the provider's send endpoint.
#[derive(Debug, Serialize)]
struct EmailPayload {
    from: String,
    to: String,
    reply_to: String,
    subject: String,
    html: String,
}

// == Email Service ==
/// Thin client for the email-delivery provider.
pub struct EmailService {
    http: reqwest::Client,
    api_key: Option<String>,
    contact_email: String,
}

impl EmailService {
    // == Constructor ==
    /// Creates a new EmailService from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|e| ApiError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: config.resend_api_key.clone(),
            contact_email: config.contact_email.clone(),
        })
    }

    // == Is Configured ==
    /// Whether an API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    // == Send Contact ==
    /// Renders and delivers a contact submission.
    ///
    /// The sender's address becomes the reply-to, so answering the
    /// notification reaches the sender directly.
    pub async fn send_contact(&self, form: &ContactRequest) -> Result<()> {
        let api_key = self.api_key.as_ref().ok_or(ApiError::EmailNotConfigured)?;

        let payload = EmailPayload {
            from: CONTACT_FROM.to_string(),
            to: self.contact_email.clone(),
            reply_to: form.email.clone(),
            subject: format!("🎮 Novo Contato: {}", form.name),
            html: render_contact_html(form),
        };

        self.http
            .post(RESEND_API_URL)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ApiError::EmailDelivery(e.to_string()))?
            .error_for_status()
            .map_err(|e| ApiError::EmailDelivery(e.to_string()))?;

        info!("Contact email delivered for {}", form.email);
        Ok(())
    }
}

/// Renders the notification body.
fn render_contact_html(form: &ContactRequest) -> String {
    let mut fields = format!(
        "<div class=\"field\"><div class=\"label\">Nome:</div><div class=\"value\">{}</div></div>\
         <div class=\"field\"><div class=\"label\">Email:</div><div class=\"value\">{}</div></div>",
        form.name, form.email
    );

    if let Some(link) = form.game_link.as_deref().filter(|link| !link.trim().is_empty()) {
        fields.push_str(&format!(
            "<div class=\"field\"><div class=\"label\">Link do Jogo:</div>\
             <div class=\"value\"><a href=\"{link}\">{link}</a></div></div>"
        ));
    }

    fields.push_str(&format!(
        "<div class=\"field\"><div class=\"label\">Mensagem:</div><div class=\"value\">{}</div></div>",
        form.message.replace('\n', "<br>")
    ));

    format!(
        "<!DOCTYPE html><html><body><div class=\"container\">\
         <div class=\"header\"><h1>🎮 Novo Contato - Mini Groups</h1></div>\
         <div class=\"content\">{fields}\
         <div class=\"footer\"><p>Mini Groups Studio - Sistema de Contato Automático</p></div>\
         </div></div></body></html>"
    )
}

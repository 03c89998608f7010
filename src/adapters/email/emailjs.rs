use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::{
    app_error::{AppError, AppResult},
    email_templates::WelcomeEmail,
    infra::{config::EmailJsCredentials, http_client},
    use_cases::waitlist::{EmailReceipt, WelcomeEmailSender},
};

/// Sends the welcome template through the EmailJS REST API.
#[derive(Clone)]
pub struct EmailJsSender {
    client: Client,
    credentials: EmailJsCredentials,
}

impl EmailJsSender {
    pub fn new(credentials: EmailJsCredentials) -> AppResult<Self> {
        let client = http_client::try_build_client()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            credentials,
        })
    }
}

#[derive(Serialize)]
struct EmailJsReq<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a WelcomeEmail,
}

#[async_trait]
impl WelcomeEmailSender for EmailJsSender {
    async fn send(&self, email: &WelcomeEmail) -> AppResult<EmailReceipt> {
        let creds = &self.credentials;
        let body = EmailJsReq {
            service_id: &creds.service_id,
            template_id: &creds.template_id,
            user_id: &creds.public_key,
            access_token: creds.private_key.as_ref().map(|k| k.expose_secret()),
            template_params: email,
        };

        let response = self
            .client
            .post(&creds.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to send email: {e}")))?;

        let status = response.status();
        // EmailJS puts the reason in a plain-text body, both on success ("OK") and on failure.
        let text = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(AppError::Internal(format!(
                "Email API error: {} {}",
                status.as_u16(),
                text
            )));
        }

        Ok(EmailReceipt::Delivered {
            status: status.as_u16(),
            text,
        })
    }
}

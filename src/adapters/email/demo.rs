use std::time::Duration;

use async_trait::async_trait;

use crate::{
    app_error::AppResult,
    email_templates::WelcomeEmail,
    use_cases::waitlist::{EmailReceipt, WelcomeEmailSender},
};

/// Stand-in used when no email credentials are configured. Nothing leaves the
/// process; the would-be email is logged after a short fake latency.
#[derive(Clone)]
pub struct DemoEmailSender {
    delay: Duration,
}

impl DemoEmailSender {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl WelcomeEmailSender for DemoEmailSender {
    async fn send(&self, email: &WelcomeEmail) -> AppResult<EmailReceipt> {
        tokio::time::sleep(self.delay).await;

        tracing::info!(
            to = %email.to_email,
            name = %email.to_name,
            subject = %email.subject,
            "[DEMO MODE] Welcome email not sent, set EMAILJS_* to enable delivery"
        );
        Ok(EmailReceipt::Simulated)
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    email_templates::WelcomeEmail,
    validators::validate_signup,
};

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Exact, case-sensitive match on `email`.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>>;

    /// Fails with `AppError::Duplicate` when the email is already stored.
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry>;
}

/// What the email provider reported for a send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailReceipt {
    Delivered { status: u16, text: String },
    Simulated,
}

#[async_trait]
pub trait WelcomeEmailSender: Send + Sync {
    async fn send(&self, email: &WelcomeEmail) -> AppResult<EmailReceipt>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailDelivery {
    Sent,
    Demo,
    Failed,
}

/// Result of a submission that got past validation and the store.
///
/// Rejections travel as `Err(AppError)` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted { email_delivery: EmailDelivery },
    AlreadyExists,
}

impl SubmissionOutcome {
    pub fn toast(&self) -> &'static str {
        match self {
            SubmissionOutcome::Accepted {
                email_delivery: EmailDelivery::Sent,
            } => "Welcome! Check your email inbox 📧",
            SubmissionOutcome::Accepted {
                email_delivery: EmailDelivery::Demo,
            } => "Added to waitlist! (Email in demo mode)",
            SubmissionOutcome::Accepted {
                email_delivery: EmailDelivery::Failed,
            } => "Added to waitlist! (Email failed to send)",
            SubmissionOutcome::AlreadyExists => "You're already on the waitlist!",
        }
    }
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    email: Arc<dyn WelcomeEmailSender>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, email: Arc<dyn WelcomeEmailSender>) -> Self {
        Self { repo, email }
    }

    /// Validate the form, add it to the waitlist and send the welcome email.
    ///
    /// The pre-check is advisory. Two submissions racing between the lookup
    /// and the insert are settled by the unique constraint, and the loser
    /// gets `AlreadyExists` just like a pre-check hit.
    #[instrument(skip(self, name, email))]
    pub async fn submit(
        &self,
        name: &str,
        email: &str,
        source: &str,
    ) -> AppResult<SubmissionOutcome> {
        let entry = validate_signup(name, email, source)?;

        if self.repo.find_by_email(&entry.email).await?.is_some() {
            tracing::info!("Email already on the waitlist");
            return Ok(SubmissionOutcome::AlreadyExists);
        }

        let saved = match self.repo.insert(&entry).await {
            Ok(saved) => saved,
            Err(AppError::Duplicate) => {
                tracing::info!("Email registered concurrently, treating as existing");
                return Ok(SubmissionOutcome::AlreadyExists);
            }
            Err(err) => return Err(err),
        };

        tracing::info!(entry_id = %saved.id, source = %saved.source, "Added to waitlist");

        let email_delivery = self.send_welcome(&saved).await;
        Ok(SubmissionOutcome::Accepted { email_delivery })
    }

    async fn send_welcome(&self, entry: &WaitlistEntry) -> EmailDelivery {
        let mail = WelcomeEmail::new(&entry.email, &entry.name);
        match self.email.send(&mail).await {
            Ok(EmailReceipt::Delivered { status, text }) => {
                tracing::info!(entry_id = %entry.id, status, text = %text, "Welcome email sent");
                EmailDelivery::Sent
            }
            Ok(EmailReceipt::Simulated) => EmailDelivery::Demo,
            Err(err) => {
                // Signup already succeeded; the email is best-effort.
                tracing::warn!(entry_id = %entry.id, error = %err, "Welcome email failed");
                EmailDelivery::Failed
            }
        }
    }
}

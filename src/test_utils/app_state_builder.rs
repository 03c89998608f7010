//! Test app state builder for HTTP-level testing.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;

use crate::{
    adapters::{email::demo::DemoEmailSender, http::app_state::AppState},
    application::use_cases::waitlist::{WaitlistRepo, WaitlistUseCases, WelcomeEmailSender},
    infra::config::{AppConfig, EMAILJS_SEND_URL, EmailConfig, EmailJsCredentials},
    test_utils::InMemoryWaitlistRepo,
};

/// Builds an `AppState` over in-memory mocks.
///
/// Defaults: empty store, demo-mode email with no delay.
///
/// ```ignore
/// let repo = Arc::new(InMemoryWaitlistRepo::new());
/// let app_state = TestAppStateBuilder::new()
///     .with_repo(repo.clone())
///     .with_email_sender(Arc::new(RecordingEmailSender::new()))
///     .build();
/// ```
pub struct TestAppStateBuilder {
    repo: Arc<dyn WaitlistRepo>,
    email_sender: Arc<dyn WelcomeEmailSender>,
    email_config: EmailConfig,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryWaitlistRepo::new()),
            email_sender: Arc::new(DemoEmailSender::new(Duration::ZERO)),
            email_config: EmailConfig::Demo {
                delay: Duration::ZERO,
            },
        }
    }

    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = repo;
        self
    }

    pub fn with_email_sender(mut self, sender: Arc<dyn WelcomeEmailSender>) -> Self {
        self.email_sender = sender;
        self
    }

    /// Marks the config as live. The sender is left as-is so no request
    /// reaches a real provider.
    pub fn with_live_email(mut self) -> Self {
        self.email_config = EmailConfig::Live(EmailJsCredentials {
            public_key: "pk_test".to_string(),
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            private_key: None,
            api_url: EMAILJS_SEND_URL.to_string(),
        });
        self
    }

    pub fn build(self) -> AppState {
        let config = AppConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            database_url: "postgres://localhost/unused".to_string(),
            run_migrations: false,
            email: self.email_config,
        };

        AppState {
            config: Arc::new(config),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(self.repo, self.email_sender)),
        }
    }
}

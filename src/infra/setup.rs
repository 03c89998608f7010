use crate::{
    adapters::{
        email::{demo::DemoEmailSender, emailjs::EmailJsSender},
        http::app_state::AppState,
    },
    infra::{
        config::{AppConfig, EmailConfig},
        db::run_migrations,
        postgres_persistence,
    },
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases, WelcomeEmailSender},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let postgres = postgres_persistence(&config.database_url).await?;
    if config.run_migrations {
        run_migrations(postgres.pool()).await?;
    }
    let repo = Arc::new(postgres) as Arc<dyn WaitlistRepo>;

    let email = welcome_email_sender(&config.email)?;

    let waitlist_use_cases = WaitlistUseCases::new(repo, email);

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

/// Picks the real provider or the demo stand-in from the resolved config.
pub fn welcome_email_sender(config: &EmailConfig) -> anyhow::Result<Arc<dyn WelcomeEmailSender>> {
    match config {
        EmailConfig::Live(credentials) => {
            tracing::info!(service_id = %credentials.service_id, "Welcome emails enabled");
            Ok(Arc::new(EmailJsSender::new(credentials.clone())?))
        }
        EmailConfig::Demo { delay } => {
            tracing::warn!("EmailJS not configured - welcome emails run in demo mode");
            Ok(Arc::new(DemoEmailSender::new(*delay)))
        }
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "aromaiq_waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs); skipped if the file can't be created
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}

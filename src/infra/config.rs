use std::net::SocketAddr;
use std::time::Duration;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Values shipped in `.env.example`; treated the same as unset.
const PLACEHOLDERS: [&str; 3] = [
    "YOUR_PUBLIC_KEY_HERE",
    "YOUR_SERVICE_ID_HERE",
    "YOUR_TEMPLATE_ID_HERE",
];

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub database_url: String,
    /// Apply the embedded migrations on startup.
    pub run_migrations: bool,
    pub email: EmailConfig,
}

#[derive(Clone, Debug)]
pub struct EmailJsCredentials {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
    /// Optional access token for accounts that require it on API calls.
    pub private_key: Option<SecretString>,
    pub api_url: String,
}

/// Whether welcome emails are really delivered. Decided once at startup.
#[derive(Clone, Debug)]
pub enum EmailConfig {
    Live(EmailJsCredentials),
    /// Sends are logged and simulated after `delay`.
    Demo { delay: Duration },
}

impl EmailConfig {
    /// Live only when all three ids are present, non-empty and not placeholders.
    pub fn resolve(
        public_key: Option<String>,
        service_id: Option<String>,
        template_id: Option<String>,
        private_key: Option<String>,
        api_url: String,
        demo_delay: Duration,
    ) -> Self {
        let usable = |v: Option<String>| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty() && !PLACEHOLDERS.contains(&s.as_str()))
        };

        match (usable(public_key), usable(service_id), usable(template_id)) {
            (Some(public_key), Some(service_id), Some(template_id)) => {
                EmailConfig::Live(EmailJsCredentials {
                    public_key,
                    service_id,
                    template_id,
                    private_key: private_key
                        .filter(|k| !k.trim().is_empty())
                        .map(|k| SecretString::new(k.into())),
                    api_url,
                })
            }
            _ => EmailConfig::Demo { delay: demo_delay },
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, EmailConfig::Live(_))
    }

    pub fn mode(&self) -> &'static str {
        match self {
            EmailConfig::Live(_) => "live",
            EmailConfig::Demo { .. } => "demo",
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let database_url: String = get_env("DATABASE_URL");
        let run_migrations: bool = get_env_default("RUN_MIGRATIONS", true);

        let demo_delay_ms: u64 = get_env_default("DEMO_EMAIL_DELAY_MS", 800);
        let api_url: String = get_env_default("EMAILJS_API_URL", EMAILJS_SEND_URL.to_string());
        let email = EmailConfig::resolve(
            std::env::var("EMAILJS_PUBLIC_KEY").ok(),
            std::env::var("EMAILJS_SERVICE_ID").ok(),
            std::env::var("EMAILJS_TEMPLATE_ID").ok(),
            std::env::var("EMAILJS_PRIVATE_KEY").ok(),
            api_url,
            Duration::from_millis(demo_delay_ms),
        );

        Self {
            bind_addr,
            cors_origin,
            database_url,
            run_migrations,
            email,
        }
    }
}

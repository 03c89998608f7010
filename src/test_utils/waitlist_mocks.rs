//! In-memory stand-ins for the waitlist store and the email provider.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{EmailReceipt, WaitlistRepo, WelcomeEmailSender},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    email_templates::WelcomeEmail,
};

// ============================================================================
// InMemoryWaitlistRepo
// ============================================================================

/// In-memory `waitlist` table keyed by exact email, so the unique index
/// behaves like the real one.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<HashMap<String, WaitlistEntry>>,
    find_calls: AtomicUsize,
    insert_calls: AtomicUsize,
    blind_precheck: bool,
    fail_find: bool,
    fail_insert: bool,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        let map: HashMap<String, WaitlistEntry> =
            entries.into_iter().map(|e| (e.email.clone(), e)).collect();
        Self {
            entries: Mutex::new(map),
            ..Self::default()
        }
    }

    /// Lookups always miss, as if another request inserted the row right after
    /// the pre-check ran.
    pub fn blind_precheck(mut self) -> Self {
        self.blind_precheck = true;
        self
    }

    pub fn failing_find(mut self) -> Self {
        self.fail_find = true;
        self
    }

    pub fn failing_insert(mut self) -> Self {
        self.fail_insert = true;
        self
    }

    pub fn get(&self, email: &str) -> Option<WaitlistEntry> {
        self.entries.lock().unwrap().get(email).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_find {
            return Err(AppError::Database("connection refused".into()));
        }
        if self.blind_precheck {
            return Ok(None);
        }
        Ok(self.get(email))
    }

    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_insert {
            return Err(AppError::Database("connection reset".into()));
        }

        let mut entries = self.entries.lock().unwrap();
        if entries.contains_key(&entry.email) {
            return Err(AppError::Duplicate);
        }

        let row = WaitlistEntry {
            id: Uuid::new_v4(),
            name: entry.name.clone(),
            email: entry.email.clone(),
            source: entry.source,
            auth_provider: entry.auth_provider,
            created_at: chrono::Utc::now(),
        };
        entries.insert(row.email.clone(), row.clone());
        Ok(row)
    }
}

// ============================================================================
// Email senders
// ============================================================================

/// Accepts every send and keeps a copy of it.
#[derive(Default)]
pub struct RecordingEmailSender {
    pub sent: Mutex<Vec<WelcomeEmail>>,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<WelcomeEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl WelcomeEmailSender for RecordingEmailSender {
    async fn send(&self, email: &WelcomeEmail) -> AppResult<EmailReceipt> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(EmailReceipt::Delivered {
            status: 200,
            text: "OK".to_string(),
        })
    }
}

/// Provider that rejects every send.
#[derive(Default)]
pub struct FailingEmailSender;

#[async_trait]
impl WelcomeEmailSender for FailingEmailSender {
    async fn send(&self, _email: &WelcomeEmail) -> AppResult<EmailReceipt> {
        Err(AppError::Internal(
            "Email API error: 400 The template ID is invalid".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::waitlist_entry::{AuthProvider, Source};

    fn new_entry(email: &str) -> NewWaitlistEntry {
        NewWaitlistEntry {
            name: "Ada".into(),
            email: email.into(),
            source: Source::Other,
            auth_provider: AuthProvider::Waitlist,
        }
    }

    #[tokio::test]
    async fn insert_enforces_unique_email() {
        let repo = InMemoryWaitlistRepo::new();
        repo.insert(&new_entry("a@b.co")).await.unwrap();
        let err = repo.insert(&new_entry("a@b.co")).await.unwrap_err();
        assert!(matches!(err, AppError::Duplicate));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn blind_precheck_hides_existing_rows() {
        let repo = InMemoryWaitlistRepo::new().blind_precheck();
        repo.insert(&new_entry("a@b.co")).await.unwrap();
        assert!(repo.find_by_email("a@b.co").await.unwrap().is_none());
        assert!(repo.get("a@b.co").is_some());
    }
}

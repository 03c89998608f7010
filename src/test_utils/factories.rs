use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::waitlist_entry::{AuthProvider, Source, WaitlistEntry};

/// Fixed timestamp so fixtures compare equal across runs.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 14, 9, 30, 0).unwrap()
}

/// Creates a stored waitlist entry with sensible defaults; `f` overrides fields.
pub fn create_test_entry(f: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        source: Source::Google,
        auth_provider: AuthProvider::Waitlist,
        created_at: test_datetime(),
    };
    f(&mut entry);
    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_entry_with_defaults() {
        let entry = create_test_entry(|_| {});
        assert_eq!(entry.email, "test@example.com");
        assert_eq!(entry.auth_provider, AuthProvider::Waitlist);
        assert_eq!(entry.created_at, test_datetime());
    }

    #[test]
    fn test_create_entry_with_overrides() {
        let entry = create_test_entry(|e| {
            e.email = "custom@example.com".to_string();
            e.source = Source::FriendFamily;
        });
        assert_eq!(entry.email, "custom@example.com");
        assert_eq!(entry.source, Source::FriendFamily);
    }
}

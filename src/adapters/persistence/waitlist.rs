use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::{AuthProvider, NewWaitlistEntry, Source, WaitlistEntry},
    use_cases::waitlist::WaitlistRepo,
};

// Waitlist row as stored in the db.
#[derive(sqlx::FromRow, Debug)]
pub struct WaitlistEntryDb {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub source: String,
    pub auth_provider: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<WaitlistEntryDb> for WaitlistEntry {
    type Error = AppError;

    fn try_from(row: WaitlistEntryDb) -> Result<Self, Self::Error> {
        let source = Source::from_str(&row.source).map_err(|_| {
            AppError::Internal(format!("Unknown waitlist source '{}'", row.source))
        })?;
        let auth_provider = AuthProvider::from_str(&row.auth_provider).map_err(|_| {
            AppError::Internal(format!("Unknown auth provider '{}'", row.auth_provider))
        })?;

        Ok(WaitlistEntry {
            id: row.id,
            name: row.name,
            email: row.email,
            source,
            auth_provider,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        let rec = sqlx::query_as::<_, WaitlistEntryDb>(
            r#"
                SELECT id, name, email, source, auth_provider, created_at
                FROM waitlist
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;

        rec.map(WaitlistEntry::try_from).transpose()
    }

    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let rec = sqlx::query_as::<_, WaitlistEntryDb>(
            r#"
                INSERT INTO waitlist (id, name, email, source, auth_provider)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, name, email, source, auth_provider, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&entry.name)
        .bind(&entry.email)
        .bind(entry.source.as_str())
        .bind(entry.auth_provider.as_str())
        .fetch_one(self.pool())
        .await
        .map_err(AppError::from)?;

        WaitlistEntry::try_from(rec)
    }
}

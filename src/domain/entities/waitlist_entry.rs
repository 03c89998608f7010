use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantArray};
use uuid::Uuid;

/// Referral channel the signer picked in the signup form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    IntoStaticStr,
    EnumString,
    VariantArray,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Source {
    Instagram,
    Google,
    Linkedin,
    FriendFamily,
    Other,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// How the entry reached the table. This service only ever writes `Waitlist`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuthProvider {
    Email,
    Google,
    Waitlist,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl Default for AuthProvider {
    fn default() -> Self {
        AuthProvider::Waitlist
    }
}

/// A validated signup, ready to be written.
///
/// Only constructed by `validators::validate_signup`, so holding one means the
/// form passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub name: String,
    pub email: String,
    pub source: Source,
    pub auth_provider: AuthProvider,
}

/// A row of the `waitlist` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub source: Source,
    pub auth_provider: AuthProvider,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

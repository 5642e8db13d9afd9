use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One-time numeric login code tied to an email address.
///
/// Codes are append-only: requesting a new code never deletes older ones,
/// and verification only ever consults the most recently issued code.
#[derive(Debug, Clone)]
pub struct AuthCode {
    pub id: Uuid,
    /// Lowercased owner email.
    pub email: String,
    /// 6-digit numeric string.
    pub code: String,
    pub issued_at: DateTime<Utc>,
}

impl AuthCode {
    /// Expiry is lazy: nothing deletes old codes, they just stop matching.
    pub fn is_expired(&self) -> bool {
        Utc::now() - self.issued_at > Duration::seconds(CODE_TTL_SECS)
    }
}

/// Authenticated login represented by an opaque bearer token.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub email: String,
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        Utc::now() - self.issued_at > Duration::seconds(SESSION_TTL_SECS)
    }
}

/// Portal user a session's email resolves to for role checks.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// Outbox event for async delivery (e.g. login-code email).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxEvent {
    pub id: Uuid,
    pub kind: String,
    pub payload: serde_json::Value,
    pub idempotency_key: String,
}

/// Auth code time-to-live in seconds (10 minutes).
pub const CODE_TTL_SECS: i64 = 600;

/// Session time-to-live in seconds (24 hours).
pub const SESSION_TTL_SECS: i64 = 86_400;

/// Role string that unlocks admin-gated operations.
pub const ROLE_ADMIN: &str = "admin";

#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{AuthCode, OutboxEvent, Session, User};
use crate::error::AuthServiceError;

/// Repository for one-time login codes. Codes are never updated or deleted;
/// the store only needs append and latest-per-email retrieval.
pub trait AuthCodeRepository: Send + Sync {
    /// Insert a new auth code and its delivery outbox event atomically
    /// (same transaction).
    async fn create_with_outbox(
        &self,
        code: &AuthCode,
        event: &OutboxEvent,
    ) -> Result<(), AuthServiceError>;

    /// Most recently issued code for an email (by `issued_at` descending),
    /// expired or not; expiry is the caller's check.
    async fn find_latest_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AuthCode>, AuthServiceError>;
}

/// Repository for bearer-token sessions.
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &Session) -> Result<(), AuthServiceError>;

    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, AuthServiceError>;
}

/// Repository for portal users (the principal store role checks resolve
/// against).
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, AuthServiceError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError>;

    async fn update_role(&self, id: Uuid, role: &str) -> Result<(), AuthServiceError>;

    /// Delete a user. Returns `true` if deleted, `false` if not found.
    async fn delete(&self, id: Uuid) -> Result<bool, AuthServiceError>;

    /// Number of users holding the given role.
    async fn count_by_role(&self, role: &str) -> Result<u64, AuthServiceError>;
}

use chrono::Utc;
use rand::RngExt;
use uuid::Uuid;

use crate::domain::repository::{AuthCodeRepository, SessionRepository, UserRepository};
use crate::domain::types::Session;
use crate::error::AuthServiceError;

/// Raw entropy per bearer token; rendered as 64 lowercase hex chars.
const TOKEN_BYTES: usize = 32;

/// Generate an opaque bearer token from the OS-seeded CSPRNG.
pub fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; TOKEN_BYTES] = rng.random();
    hex::encode(bytes)
}

/// Shared token-to-session resolution: blank check, lookup, lazy expiry.
pub(crate) async fn lookup_session<S>(
    sessions: &S,
    token: &str,
) -> Result<Session, AuthServiceError>
where
    S: SessionRepository,
{
    if token.trim().is_empty() {
        return Err(AuthServiceError::MissingInput);
    }
    let session = sessions
        .find_by_token(token)
        .await?
        .ok_or(AuthServiceError::SessionNotFound)?;
    if session.is_expired() {
        return Err(AuthServiceError::SessionExpired);
    }
    Ok(session)
}

/// Resolve the session, then assert the resolved user holds the admin role.
pub(crate) async fn authorize_admin<S, U>(
    sessions: &S,
    users: &U,
    token: &str,
) -> Result<Session, AuthServiceError>
where
    S: SessionRepository,
    U: UserRepository,
{
    let session = lookup_session(sessions, token).await?;
    let user = users
        .find_by_email(&session.email)
        .await?
        .ok_or(AuthServiceError::UserNotFound)?;
    if !user.is_admin() {
        return Err(AuthServiceError::InsufficientRole);
    }
    Ok(session)
}

// ── VerifyCode (login) ───────────────────────────────────────────────────────

pub struct VerifyCodeInput {
    pub email: String,
    pub code: String,
}

#[derive(Debug)]
pub struct VerifyCodeOutput {
    pub token: String,
    pub email: String,
}

pub struct VerifyCodeUseCase<A, S>
where
    A: AuthCodeRepository,
    S: SessionRepository,
{
    pub auth_codes: A,
    pub sessions: S,
}

impl<A, S> VerifyCodeUseCase<A, S>
where
    A: AuthCodeRepository,
    S: SessionRepository,
{
    pub async fn execute(
        &self,
        input: VerifyCodeInput,
    ) -> Result<VerifyCodeOutput, AuthServiceError> {
        if input.email.trim().is_empty() || input.code.trim().is_empty() {
            return Err(AuthServiceError::MissingInput);
        }
        let email = input.email.to_lowercase();

        // Only the most recently issued code counts; older ones are dead
        // the moment a newer one exists.
        let latest = self
            .auth_codes
            .find_latest_by_email(&email)
            .await?
            .ok_or(AuthServiceError::CodeNotFound)?;

        if latest.code != input.code {
            return Err(AuthServiceError::InvalidCode);
        }
        if latest.is_expired() {
            return Err(AuthServiceError::CodeExpired);
        }

        // The code is not consumed here: it stays matchable until its TTL
        // elapses. See DESIGN.md on the replay window.
        let session = Session {
            id: Uuid::new_v4(),
            email: email.clone(),
            token: generate_token(),
            issued_at: Utc::now(),
        };
        self.sessions.create(&session).await?;

        Ok(VerifyCodeOutput {
            token: session.token,
            email,
        })
    }
}

// ── RequireSession ───────────────────────────────────────────────────────────

pub struct RequireSessionUseCase<S>
where
    S: SessionRepository,
{
    pub sessions: S,
}

impl<S> RequireSessionUseCase<S>
where
    S: SessionRepository,
{
    pub async fn execute(&self, token: &str) -> Result<Session, AuthServiceError> {
        lookup_session(&self.sessions, token).await
    }
}

// ── RequireAdmin ─────────────────────────────────────────────────────────────

pub struct RequireAdminUseCase<S, U>
where
    S: SessionRepository,
    U: UserRepository,
{
    pub sessions: S,
    pub users: U,
}

impl<S, U> RequireAdminUseCase<S, U>
where
    S: SessionRepository,
    U: UserRepository,
{
    pub async fn execute(&self, token: &str) -> Result<Session, AuthServiceError> {
        authorize_admin(&self.sessions, &self.users, token).await
    }
}

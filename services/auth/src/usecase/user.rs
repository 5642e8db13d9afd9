use uuid::Uuid;

use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::types::{ROLE_ADMIN, User};
use crate::error::AuthServiceError;
use crate::usecase::session::authorize_admin;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> ListUsersUseCase<U> {
    pub async fn execute(&self) -> Result<Vec<User>, AuthServiceError> {
        self.users.list().await
    }
}

// ── GetUserByEmail ───────────────────────────────────────────────────────────

pub struct GetUserByEmailUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetUserByEmailUseCase<U> {
    pub async fn execute(&self, email: &str) -> Result<User, AuthServiceError> {
        self.users
            .find_by_email(&email.to_lowercase())
            .await?
            .ok_or(AuthServiceError::UserNotFound)
    }
}

// ── UpdateUserRole ───────────────────────────────────────────────────────────

pub struct UpdateUserRoleInput {
    pub email: String,
    pub role: String,
}

pub struct UpdateUserRoleUseCase<S, U>
where
    S: SessionRepository,
    U: UserRepository,
{
    pub sessions: S,
    pub users: U,
}

impl<S, U> UpdateUserRoleUseCase<S, U>
where
    S: SessionRepository,
    U: UserRepository,
{
    pub async fn execute(
        &self,
        token: &str,
        input: UpdateUserRoleInput,
    ) -> Result<(), AuthServiceError> {
        authorize_admin(&self.sessions, &self.users, token).await?;

        if input.email.trim().is_empty() || input.role.trim().is_empty() {
            return Err(AuthServiceError::MissingInput);
        }
        let target = self
            .users
            .find_by_email(&input.email.to_lowercase())
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        self.users.update_role(target.id, &input.role).await
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<S, U>
where
    S: SessionRepository,
    U: UserRepository,
{
    pub sessions: S,
    pub users: U,
}

impl<S, U> DeleteUserUseCase<S, U>
where
    S: SessionRepository,
    U: UserRepository,
{
    pub async fn execute(&self, token: &str, user_id: Uuid) -> Result<(), AuthServiceError> {
        authorize_admin(&self.sessions, &self.users, token).await?;

        let target = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        // The portal must always keep at least one admin account.
        if target.is_admin() && self.users.count_by_role(ROLE_ADMIN).await? <= 1 {
            return Err(AuthServiceError::LastAdmin);
        }

        if !self.users.delete(user_id).await? {
            return Err(AuthServiceError::UserNotFound);
        }
        Ok(())
    }
}

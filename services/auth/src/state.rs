use sea_orm::DatabaseConnection;

use crate::infra::db::{DbAuthCodeRepository, DbSessionRepository, DbUserRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Dev flag: echo issued login codes in `POST /auth/code` responses.
    pub expose_codes: bool,
}

impl AppState {
    pub fn auth_code_repo(&self) -> DbAuthCodeRepository {
        DbAuthCodeRepository {
            db: self.db.clone(),
        }
    }

    pub fn session_repo(&self) -> DbSessionRepository {
        DbSessionRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }
}

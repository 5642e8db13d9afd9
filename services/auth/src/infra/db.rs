use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use atrium_auth_schema::{auth_codes, outbox_events, sessions, users};

use crate::domain::repository::{AuthCodeRepository, SessionRepository, UserRepository};
use crate::domain::types::{AuthCode, OutboxEvent, Session, User};
use crate::error::AuthServiceError;

// ── AuthCode repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAuthCodeRepository {
    pub db: DatabaseConnection,
}

impl AuthCodeRepository for DbAuthCodeRepository {
    async fn create_with_outbox(
        &self,
        code: &AuthCode,
        event: &OutboxEvent,
    ) -> Result<(), AuthServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let code = code.clone();
                let event = event.clone();
                Box::pin(async move {
                    insert_auth_code(txn, &code).await?;
                    insert_outbox_event(txn, &event).await?;
                    Ok(())
                })
            })
            .await
            .context("create auth code with outbox")?;
        Ok(())
    }

    async fn find_latest_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AuthCode>, AuthServiceError> {
        let model = auth_codes::Entity::find()
            .filter(auth_codes::Column::Email.eq(email))
            .order_by_desc(auth_codes::Column::IssuedAt)
            .one(&self.db)
            .await
            .context("find latest auth code by email")?;
        Ok(model.map(authcode_from_model))
    }
}

async fn insert_auth_code(
    txn: &DatabaseTransaction,
    code: &AuthCode,
) -> Result<(), sea_orm::DbErr> {
    auth_codes::ActiveModel {
        id: Set(code.id),
        email: Set(code.email.clone()),
        code: Set(code.code.clone()),
        issued_at: Set(code.issued_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn insert_outbox_event(
    txn: &DatabaseTransaction,
    event: &OutboxEvent,
) -> Result<(), sea_orm::DbErr> {
    let now = Utc::now();
    outbox_events::ActiveModel {
        id: Set(event.id),
        kind: Set(event.kind.clone()),
        payload: Set(event.payload.clone()),
        idempotency_key: Set(event.idempotency_key.clone()),
        attempts: Set(0),
        last_error: Set(None),
        created_at: Set(now),
        next_attempt_at: Set(now),
        processed_at: Set(None),
        failed_at: Set(None),
    }
    .insert(txn)
    .await?;
    Ok(())
}

fn authcode_from_model(model: auth_codes::Model) -> AuthCode {
    AuthCode {
        id: model.id,
        email: model.email,
        code: model.code,
        issued_at: model.issued_at,
    }
}

// ── Session repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSessionRepository {
    pub db: DatabaseConnection,
}

impl SessionRepository for DbSessionRepository {
    async fn create(&self, session: &Session) -> Result<(), AuthServiceError> {
        sessions::ActiveModel {
            id: Set(session.id),
            email: Set(session.email.clone()),
            token: Set(session.token.clone()),
            issued_at: Set(session.issued_at),
        }
        .insert(&self.db)
        .await
        .context("create session")?;
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, AuthServiceError> {
        let model = sessions::Entity::find()
            .filter(sessions::Column::Token.eq(token))
            .one(&self.db)
            .await
            .context("find session by token")?;
        Ok(model.map(session_from_model))
    }
}

fn session_from_model(model: sessions::Model) -> Session {
    Session {
        id: model.id,
        email: model.email,
        token: model.token,
        issued_at: model.issued_at,
    }
}

// ── User repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, AuthServiceError> {
        let models = users::Entity::find()
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn update_role(&self, id: Uuid, role: &str) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(id),
            role: Set(role.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update user role")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AuthServiceError> {
        let result = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }

    async fn count_by_role(&self, role: &str) -> Result<u64, AuthServiceError> {
        let count = users::Entity::find()
            .filter(users::Column::Role.eq(role))
            .count(&self.db)
            .await
            .context("count users by role")?;
        Ok(count)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        name: model.name,
        role: model.role,
        created_at: model.created_at,
    }
}

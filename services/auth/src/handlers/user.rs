use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::User;
use crate::error::AuthServiceError;
use crate::handlers::bearer_token;
use crate::state::AppState;
use crate::usecase::user::{
    DeleteUserUseCase, GetUserByEmailUseCase, ListUsersUseCase, UpdateUserRoleInput,
    UpdateUserRoleUseCase,
};

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    #[serde(serialize_with = "atrium_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

// ── GET /users ────────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AuthServiceError> {
    let usecase = ListUsersUseCase {
        users: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── GET /users/by-email/{email} ───────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserResponse>, AuthServiceError> {
    let usecase = GetUserByEmailUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(&email).await?;
    Ok(Json(user.into()))
}

// ── PATCH /users/role ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateRoleRequest {
    pub email: String,
    pub role: String,
}

pub async fn update_user_role(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    Json(body): Json<UpdateRoleRequest>,
) -> Result<StatusCode, AuthServiceError> {
    let token = bearer_token(&bearer);
    let usecase = UpdateUserRoleUseCase {
        sessions: state.session_repo(),
        users: state.user_repo(),
    };
    usecase
        .execute(
            &token,
            UpdateUserRoleInput {
                email: body.email,
                role: body.role,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /users/{id} ────────────────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AuthServiceError> {
    let token = bearer_token(&bearer);
    let usecase = DeleteUserUseCase {
        sessions: state.session_repo(),
        users: state.user_repo(),
    };
    usecase.execute(&token, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use serde::{Deserialize, Serialize};

use crate::error::AuthServiceError;
use crate::handlers::bearer_token;
use crate::state::AppState;
use crate::usecase::session::{RequireSessionUseCase, VerifyCodeInput, VerifyCodeUseCase};

// ── POST /auth/session ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    pub email: String,
    pub code: String,
}

#[derive(Serialize)]
pub struct CreateSessionResponse {
    pub token: String,
    pub email: String,
}

pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let usecase = VerifyCodeUseCase {
        auth_codes: state.auth_code_repo(),
        sessions: state.session_repo(),
    };
    let out = usecase
        .execute(VerifyCodeInput {
            email: body.email,
            code: body.code,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            token: out.token,
            email: out.email,
        }),
    ))
}

// ── GET /auth/session ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SessionResponse {
    pub email: String,
    #[serde(serialize_with = "atrium_core::serde::to_rfc3339_ms")]
    pub issued_at: chrono::DateTime<chrono::Utc>,
}

pub async fn get_session(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
) -> Result<Json<SessionResponse>, AuthServiceError> {
    let token = bearer_token(&bearer);
    let usecase = RequireSessionUseCase {
        sessions: state.session_repo(),
    };
    let session = usecase.execute(&token).await?;
    Ok(Json(SessionResponse {
        email: session.email,
        issued_at: session.issued_at,
    }))
}

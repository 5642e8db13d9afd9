use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::authcode::{RequestCodeInput, RequestCodeUseCase};

#[derive(Deserialize)]
pub struct RequestCodeRequest {
    pub email: String,
}

#[derive(Serialize)]
pub struct RequestCodeResponse {
    pub code: String,
}

pub async fn request_code(
    State(state): State<AppState>,
    Json(body): Json<RequestCodeRequest>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let usecase = RequestCodeUseCase {
        auth_codes: state.auth_code_repo(),
    };
    let out = usecase
        .execute(RequestCodeInput { email: body.email })
        .await?;

    // Dev shortcut: echo the code instead of waiting for the outbox mailer.
    // Off by default; the production response carries no code.
    if state.expose_codes {
        Ok((StatusCode::CREATED, Json(RequestCodeResponse { code: out.code })).into_response())
    } else {
        Ok(StatusCode::CREATED.into_response())
    }
}

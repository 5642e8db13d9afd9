use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Auth service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("missing input")]
    MissingInput,
    #[error("code not found, request a new one")]
    CodeNotFound,
    #[error("invalid code")]
    InvalidCode,
    #[error("code expired, request a new one")]
    CodeExpired,
    #[error("session not found")]
    SessionNotFound,
    #[error("session expired, sign in again")]
    SessionExpired,
    #[error("user not found")]
    UserNotFound,
    #[error("insufficient role")]
    InsufficientRole,
    #[error("cannot delete the last admin")]
    LastAdmin,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingInput => "MISSING_INPUT",
            Self::CodeNotFound => "CODE_NOT_FOUND",
            Self::InvalidCode => "INVALID_CODE",
            Self::CodeExpired => "CODE_EXPIRED",
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InsufficientRole => "INSUFFICIENT_ROLE",
            Self::LastAdmin => "LAST_ADMIN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingInput => StatusCode::BAD_REQUEST,
            Self::CodeNotFound | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::InvalidCode
            | Self::CodeExpired
            | Self::SessionNotFound
            | Self::SessionExpired => StatusCode::UNAUTHORIZED,
            Self::InsufficientRole => StatusCode::FORBIDDEN,
            Self::LastAdmin => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

pub mod auth_code;
pub mod session;
pub mod user;

use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};

/// Bearer token from the `Authorization` header, or empty when absent;
/// the usecases turn blank tokens into `MissingInput`.
pub(crate) fn bearer_token(header: &Option<TypedHeader<Authorization<Bearer>>>) -> String {
    header
        .as_ref()
        .map(|TypedHeader(Authorization(bearer))| bearer.token().to_owned())
        .unwrap_or_default()
}

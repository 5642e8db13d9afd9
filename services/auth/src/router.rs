use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use atrium_core::health::{healthz, readyz};
use atrium_core::middleware::request_id_layer;

use crate::handlers::{
    auth_code::request_code,
    session::{create_session, get_session},
    user::{delete_user, get_user, list_users, update_user_role},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Login codes
        .route("/auth/code", post(request_code))
        // Sessions
        .route("/auth/session", post(create_session))
        .route("/auth/session", get(get_session))
        // Users
        .route("/users", get(list_users))
        .route("/users/by-email/{email}", get(get_user))
        .route("/users/role", patch(update_user_role))
        .route("/users/{id}", delete(delete_user))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}

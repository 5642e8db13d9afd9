use sea_orm::Database;
use tracing::info;

use atrium_auth::config::AuthConfig;
use atrium_auth::router::build_router;
use atrium_auth::state::AppState;
use atrium_core::config::Config as _;

#[tokio::main]
async fn main() {
    atrium_core::tracing::init_tracing();

    let config = AuthConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        expose_codes: config.auth_expose_codes,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}

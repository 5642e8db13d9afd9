use serde::Deserialize;

use atrium_core::config::Config;

fn default_auth_port() -> u16 {
    3114
}

/// Auth service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port to listen on (default 3114). Env var: `AUTH_PORT`.
    #[serde(default = "default_auth_port")]
    pub auth_port: u16,
    /// When true, `POST /auth/code` echoes the issued code in the response
    /// body instead of leaving delivery to the outbox mailer. Dev only;
    /// never enable in production. Env var: `AUTH_EXPOSE_CODES`.
    #[serde(default)]
    pub auth_expose_codes: bool,
}

impl Config for AuthConfig {}

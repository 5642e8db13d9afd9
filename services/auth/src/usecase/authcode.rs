use chrono::Utc;
use rand::RngExt;
use serde_json::json;
use uuid::Uuid;

use crate::domain::repository::AuthCodeRepository;
use crate::domain::types::{AuthCode, OutboxEvent};
use crate::error::AuthServiceError;

/// Inclusive range for generated login codes, always 6 digits.
const CODE_MIN: u32 = 100_000;
const CODE_MAX: u32 = 999_999;

fn generate_code() -> String {
    let mut rng = rand::rng();
    rng.random_range(CODE_MIN..=CODE_MAX).to_string()
}

pub struct RequestCodeInput {
    pub email: String,
}

#[derive(Debug)]
pub struct RequestCodeOutput {
    /// Lowercased email the code was keyed under.
    pub email: String,
    /// The issued code. Handlers decide whether to expose it (dev) or
    /// leave delivery to the outbox mailer (production).
    pub code: String,
}

pub struct RequestCodeUseCase<A>
where
    A: AuthCodeRepository,
{
    pub auth_codes: A,
}

impl<A> RequestCodeUseCase<A>
where
    A: AuthCodeRepository,
{
    pub async fn execute(
        &self,
        input: RequestCodeInput,
    ) -> Result<RequestCodeOutput, AuthServiceError> {
        // No shape validation beyond non-blank, and no user-existence check:
        // any inbox may request a code.
        if input.email.trim().is_empty() {
            return Err(AuthServiceError::MissingInput);
        }
        let email = input.email.to_lowercase();

        let code_str = generate_code();
        let code = AuthCode {
            id: Uuid::new_v4(),
            email: email.clone(),
            code: code_str.clone(),
            issued_at: Utc::now(),
        };

        // Write the code + delivery event in the same transaction.
        let event = OutboxEvent {
            id: Uuid::new_v4(),
            kind: "authcode_issued".to_owned(),
            payload: json!({ "email": email, "code": code_str }),
            idempotency_key: format!("authcode_issued:{}", code.id),
        };
        self.auth_codes.create_with_outbox(&code, &event).await?;

        Ok(RequestCodeOutput {
            email,
            code: code_str,
        })
    }
}

use atrium_auth::domain::types::{CODE_TTL_SECS, SESSION_TTL_SECS};
use atrium_auth::error::AuthServiceError;
use atrium_auth::usecase::session::{
    RequireAdminUseCase, RequireSessionUseCase, VerifyCodeInput, VerifyCodeUseCase,
};

use crate::helpers::{
    MockAuthCodeRepo, MockSessionRepo, MockUserRepo, admin_user, auth_code_aged, employee_user,
    session_aged,
};

// ── VerifyCodeUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_session_with_valid_code() {
    let code = auth_code_aged("user@co.com", "482913", 30);

    let sessions = MockSessionRepo::empty();
    let sessions_handle = sessions.sessions_handle();

    let uc = VerifyCodeUseCase {
        auth_codes: MockAuthCodeRepo::new(vec![code]),
        sessions,
    };

    // Mixed-case submission must hit the lowercased key.
    let out = uc
        .execute(VerifyCodeInput {
            email: "User@Co.com".to_owned(),
            code: "482913".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(out.email, "user@co.com");
    assert_eq!(out.token.len(), 64);
    assert!(out.token.chars().all(|c| c.is_ascii_hexdigit()));

    let stored = sessions_handle.lock().unwrap();
    assert_eq!(stored.len(), 1, "expected exactly one session");
    assert_eq!(stored[0].token, out.token);
    assert_eq!(stored[0].email, "user@co.com");
}

#[tokio::test]
async fn should_reject_when_no_code_exists() {
    let uc = VerifyCodeUseCase {
        auth_codes: MockAuthCodeRepo::empty(),
        sessions: MockSessionRepo::empty(),
    };

    let result = uc
        .execute(VerifyCodeInput {
            email: "nobody@co.com".to_owned(),
            code: "123456".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::CodeNotFound)),
        "expected CodeNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_wrong_code() {
    let code = auth_code_aged("user@co.com", "482913", 30);

    let uc = VerifyCodeUseCase {
        auth_codes: MockAuthCodeRepo::new(vec![code]),
        sessions: MockSessionRepo::empty(),
    };

    let result = uc
        .execute(VerifyCodeInput {
            email: "user@co.com".to_owned(),
            code: "000000".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidCode)),
        "expected InvalidCode, got {result:?}"
    );
}

#[tokio::test]
async fn newest_code_wins_over_older_ones() {
    // Two codes for the same email; only the newest is accepted.
    let older = auth_code_aged("user@co.com", "111111", 120);
    let newer = auth_code_aged("user@co.com", "222222", 10);

    let uc = VerifyCodeUseCase {
        auth_codes: MockAuthCodeRepo::new(vec![older, newer]),
        sessions: MockSessionRepo::empty(),
    };

    let stale = uc
        .execute(VerifyCodeInput {
            email: "user@co.com".to_owned(),
            code: "111111".to_owned(),
        })
        .await;
    assert!(
        matches!(stale, Err(AuthServiceError::InvalidCode)),
        "superseded code should fail, got {stale:?}"
    );

    uc.execute(VerifyCodeInput {
        email: "user@co.com".to_owned(),
        code: "222222".to_owned(),
    })
    .await
    .expect("newest code should verify");
}

#[tokio::test]
async fn should_reject_expired_code() {
    let code = auth_code_aged("user@co.com", "482913", CODE_TTL_SECS + 60);

    let uc = VerifyCodeUseCase {
        auth_codes: MockAuthCodeRepo::new(vec![code]),
        sessions: MockSessionRepo::empty(),
    };

    let result = uc
        .execute(VerifyCodeInput {
            email: "user@co.com".to_owned(),
            code: "482913".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::CodeExpired)),
        "expected CodeExpired, got {result:?}"
    );
}

#[tokio::test]
async fn should_accept_code_just_inside_ttl() {
    let code = auth_code_aged("user@co.com", "482913", CODE_TTL_SECS - 10);

    let uc = VerifyCodeUseCase {
        auth_codes: MockAuthCodeRepo::new(vec![code]),
        sessions: MockSessionRepo::empty(),
    };

    uc.execute(VerifyCodeInput {
        email: "user@co.com".to_owned(),
        code: "482913".to_owned(),
    })
    .await
    .expect("code just inside the TTL should verify");
}

#[tokio::test]
async fn unexpired_code_replays_until_ttl() {
    // The code is not consumed on success; a second verification within the
    // TTL mints a second session.
    let code = auth_code_aged("user@co.com", "482913", 30);

    let sessions = MockSessionRepo::empty();
    let sessions_handle = sessions.sessions_handle();

    let uc = VerifyCodeUseCase {
        auth_codes: MockAuthCodeRepo::new(vec![code]),
        sessions,
    };

    for _ in 0..2 {
        uc.execute(VerifyCodeInput {
            email: "user@co.com".to_owned(),
            code: "482913".to_owned(),
        })
        .await
        .unwrap();
    }

    let stored = sessions_handle.lock().unwrap();
    assert_eq!(stored.len(), 2);
    assert_ne!(stored[0].token, stored[1].token);
}

#[tokio::test]
async fn should_reject_blank_verify_inputs() {
    let uc = VerifyCodeUseCase {
        auth_codes: MockAuthCodeRepo::empty(),
        sessions: MockSessionRepo::empty(),
    };

    let result = uc
        .execute(VerifyCodeInput {
            email: "user@co.com".to_owned(),
            code: "".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::MissingInput)),
        "expected MissingInput, got {result:?}"
    );
}

// ── RequireSessionUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_resolve_live_session() {
    let session = session_aged("user@co.com", 3600);
    let token = session.token.clone();

    let uc = RequireSessionUseCase {
        sessions: MockSessionRepo::new(vec![session]),
    };

    let resolved = uc.execute(&token).await.unwrap();
    assert_eq!(resolved.email, "user@co.com");
    assert_eq!(resolved.token, token);
}

#[tokio::test]
async fn should_reject_blank_token() {
    let uc = RequireSessionUseCase {
        sessions: MockSessionRepo::empty(),
    };

    let result = uc.execute("").await;
    assert!(
        matches!(result, Err(AuthServiceError::MissingInput)),
        "expected MissingInput, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_unknown_token() {
    let uc = RequireSessionUseCase {
        sessions: MockSessionRepo::empty(),
    };

    let result = uc.execute("deadbeef").await;
    assert!(
        matches!(result, Err(AuthServiceError::SessionNotFound)),
        "expected SessionNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_session_older_than_ttl() {
    // 25 hours old.
    let session = session_aged("user@co.com", SESSION_TTL_SECS + 3600);
    let token = session.token.clone();

    let uc = RequireSessionUseCase {
        sessions: MockSessionRepo::new(vec![session]),
    };

    let result = uc.execute(&token).await;
    assert!(
        matches!(result, Err(AuthServiceError::SessionExpired)),
        "expected SessionExpired, got {result:?}"
    );
}

// ── RequireAdminUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_pass_admin_gate_for_admin_role() {
    let session = session_aged("boss@co.com", 60);
    let token = session.token.clone();

    let uc = RequireAdminUseCase {
        sessions: MockSessionRepo::new(vec![session]),
        users: MockUserRepo::new(vec![admin_user("boss@co.com")]),
    };

    let resolved = uc.execute(&token).await.unwrap();
    assert_eq!(resolved.email, "boss@co.com");
}

#[tokio::test]
async fn should_reject_admin_gate_for_employee_role() {
    let session = session_aged("worker@co.com", 60);
    let token = session.token.clone();

    let uc = RequireAdminUseCase {
        sessions: MockSessionRepo::new(vec![session]),
        users: MockUserRepo::new(vec![employee_user("worker@co.com")]),
    };

    let result = uc.execute(&token).await;
    assert!(
        matches!(result, Err(AuthServiceError::InsufficientRole)),
        "expected InsufficientRole, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_admin_gate_when_user_record_missing() {
    let session = session_aged("ghost@co.com", 60);
    let token = session.token.clone();

    let uc = RequireAdminUseCase {
        sessions: MockSessionRepo::new(vec![session]),
        users: MockUserRepo::empty(),
    };

    let result = uc.execute(&token).await;
    assert!(
        matches!(result, Err(AuthServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

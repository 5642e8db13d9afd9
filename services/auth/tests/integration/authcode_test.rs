use atrium_auth::error::AuthServiceError;
use atrium_auth::usecase::authcode::{RequestCodeInput, RequestCodeUseCase};

use crate::helpers::MockAuthCodeRepo;

#[tokio::test]
async fn should_issue_code_for_any_email() {
    let mock_repo = MockAuthCodeRepo::empty();
    let codes_handle = mock_repo.codes_handle();
    let events_handle = mock_repo.events_handle();

    let uc = RequestCodeUseCase {
        auth_codes: mock_repo,
    };

    let out = uc
        .execute(RequestCodeInput {
            email: "Someone@Portal.io".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(out.email, "someone@portal.io");

    let codes = codes_handle.lock().unwrap();
    assert_eq!(codes.len(), 1, "expected exactly one code to be stored");

    let stored = &codes[0];
    assert_eq!(stored.email, "someone@portal.io", "email should be lowercased");
    assert_eq!(stored.code, out.code);
    assert_eq!(stored.code.len(), 6, "code should be 6 digits");
    let n: u32 = stored.code.parse().expect("code should be numeric");
    assert!((100_000..=999_999).contains(&n));

    // Delivery event recorded alongside the code.
    let events = events_handle.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, "authcode_issued");
    assert_eq!(events[0].payload["email"], "someone@portal.io");
    assert_eq!(events[0].payload["code"], stored.code);
}

#[tokio::test]
async fn should_reject_blank_email() {
    let uc = RequestCodeUseCase {
        auth_codes: MockAuthCodeRepo::empty(),
    };

    let result = uc
        .execute(RequestCodeInput {
            email: "   ".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::MissingInput)),
        "expected MissingInput, got {result:?}"
    );
}

#[tokio::test]
async fn repeated_requests_append_codes() {
    let mock_repo = MockAuthCodeRepo::empty();
    let codes_handle = mock_repo.codes_handle();

    let uc = RequestCodeUseCase {
        auth_codes: mock_repo,
    };

    for _ in 0..3 {
        uc.execute(RequestCodeInput {
            email: "a@b.com".to_owned(),
        })
        .await
        .unwrap();
    }

    // History is append-only: earlier codes stay in the store.
    let codes = codes_handle.lock().unwrap();
    assert_eq!(codes.len(), 3);
    assert!(codes.iter().all(|c| c.email == "a@b.com"));
}

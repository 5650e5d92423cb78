//! Integration tests for registration and the verification-code flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_issues_one_six_digit_code() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");

    let response = app.register(&email, "donor").await;
    assert_eq!(response.status, StatusCode::OK);

    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM otp_codes \
         WHERE account_id = (SELECT id FROM accounts WHERE email = $1)",
    )
    .bind(&email)
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert_eq!(count, 1);

    let code = app.latest_otp(&email).await;
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_register_code_expires_in_configured_window() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");
    app.register(&email, "donor").await;

    // expires_at - created_at must equal the configured 10 minutes.
    let seconds: f64 = sqlx::query_scalar(
        "SELECT EXTRACT(EPOCH FROM (expires_at - created_at))::float8 FROM otp_codes \
         WHERE account_id = (SELECT id FROM accounts WHERE email = $1)",
    )
    .bind(&email)
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert_eq!(seconds as i64, 600);
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");

    assert_eq!(app.register(&email, "donor").await.status, StatusCode::OK);

    let response = app.register(&email, "donor").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "CONFLICT");
}

#[tokio::test]
async fn test_admin_role_not_registrable() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("admin");

    let response = app.register(&email, "admin").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wrong_code_then_correct_code() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");
    app.register(&email, "donor").await;

    let code = app.latest_otp(&email).await;
    let wrong = if code == "000000" { "000001" } else { "000000" };

    let response = app
        .request(
            "POST",
            "/api/auth/verify-otp",
            Some(serde_json::json!({ "email": email, "code": wrong })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_OTP");

    // A failed attempt does not consume the real code.
    let response = app
        .request(
            "POST",
            "/api/auth/verify-otp",
            Some(serde_json::json!({ "email": email, "code": code })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_code_replay_is_rejected() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");
    app.register(&email, "donor").await;

    let code = app.latest_otp(&email).await;
    let body = serde_json::json!({ "email": email, "code": code });

    let first = app
        .request("POST", "/api/auth/verify-otp", Some(body.clone()), None)
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let replay = app
        .request("POST", "/api/auth/verify-otp", Some(body), None)
        .await;
    assert_eq!(replay.status, StatusCode::BAD_REQUEST);
    assert_eq!(replay.error_code(), "INVALID_OTP");
}

#[tokio::test]
async fn test_expired_code_is_rejected_with_distinct_error() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");
    app.register(&email, "donor").await;

    let code = app.latest_otp(&email).await;
    app.expire_otps(&email).await;

    let response = app
        .request(
            "POST",
            "/api/auth/verify-otp",
            Some(serde_json::json!({ "email": email, "code": code })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "OTP_EXPIRED");
}

#[tokio::test]
async fn test_resend_keeps_earlier_code_valid() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");
    app.register(&email, "donor").await;

    let first_code = app.latest_otp(&email).await;

    let response = app
        .request(
            "POST",
            "/api/auth/resend-otp",
            Some(serde_json::json!({ "email": email })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Issuing a second code does not invalidate the first.
    let response = app
        .request(
            "POST",
            "/api/auth/verify-otp",
            Some(serde_json::json!({ "email": email, "code": first_code })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_failing_mailer_does_not_fail_registration() {
    let app = TestApp::with_failing_mailer().await;
    let email = TestApp::unique_email("donor");

    let response = app.register(&email, "donor").await;
    assert_eq!(response.status, StatusCode::OK);

    // The code was still persisted and is usable.
    let code = app.latest_otp(&email).await;
    assert_eq!(code.len(), 6);
}

#[tokio::test]
async fn test_registration_sends_code_by_email() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");
    app.register(&email, "donor").await;

    let code = app.latest_otp(&email).await;
    let sent = app.mailer.sent_to(&email);
    assert_eq!(sent.len(), 1);
    assert!(sent[0].body.contains(&code));
}

#[tokio::test]
async fn test_login_requires_verification() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");
    app.register(&email, "donor").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": email, "password": "sunflower42" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_full_register_verify_login_flow() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");

    let token = app.register_and_login(&email, "donor").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("email").unwrap().as_str().unwrap(),
        email
    );
    assert_eq!(
        response.data().get("is_verified").unwrap().as_bool(),
        Some(true)
    );
}

#[tokio::test]
async fn test_refresh_returns_new_pair() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");
    app.register_and_login(&email, "donor").await;

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": email, "password": "sunflower42" })),
            None,
        )
        .await;
    let refresh_token = login
        .data()
        .get("refresh_token")
        .and_then(|v| v.as_str())
        .unwrap()
        .to_string();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data().get("access_token").is_some());
    assert!(response.data().get("refresh_token").is_some());
}

#[tokio::test]
async fn test_access_token_rejected_as_refresh_token() {
    let app = TestApp::new().await;
    let email = TestApp::unique_email("donor");
    let access = app.register_and_login(&email, "donor").await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": access })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

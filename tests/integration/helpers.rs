//! Shared test helpers for integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use carebridge_api::{AppState, build_router};
use carebridge_core::config::AppConfig;
use carebridge_core::error::AppError;
use carebridge_core::result::AppResult;
use carebridge_core::traits::Mailer;

/// One message captured by the stub transport.
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// In-memory mail transport that records messages, optionally failing
/// every send to exercise the best-effort dispatch boundary.
#[derive(Debug, Clone)]
pub struct StubMailer {
    sent: Arc<Mutex<Vec<SentMail>>>,
    fail: bool,
}

impl StubMailer {
    pub fn new(fail: bool) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail,
        }
    }

    /// All captured messages addressed to `to`.
    pub fn sent_to(&self, to: &str) -> Vec<SentMail> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.to == to)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Mailer for StubMailer {
    fn transport(&self) -> &str {
        "stub"
    }

    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        if self.fail {
            return Err(AppError::external_service("stub transport failure"));
        }
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database pool for direct queries.
    pub db_pool: PgPool,
    /// The stub mail transport injected into the app.
    pub mailer: Arc<StubMailer>,
}

impl TestApp {
    /// Create a new test application with a recording mailer.
    pub async fn new() -> Self {
        Self::build(false).await
    }

    /// Create a test application whose mailer fails every send.
    pub async fn with_failing_mailer() -> Self {
        Self::build(true).await
    }

    async fn build(failing_mailer: bool) -> Self {
        let config = AppConfig::load_file("tests/fixtures/test_config.toml")
            .expect("Failed to load test config");

        let db_pool = carebridge_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        carebridge_database::connection::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let mailer = Arc::new(StubMailer::new(failing_mailer));

        let state = AppState::build(config, db_pool.clone(), mailer.clone());
        let router = build_router(state);

        Self {
            router,
            db_pool,
            mailer,
        }
    }

    /// A unique email so parallel tests never collide.
    pub fn unique_email(prefix: &str) -> String {
        format!("{prefix}-{}@test.com", Uuid::new_v4().simple())
    }

    /// Latest issued verification code for an account, straight from the DB.
    pub async fn latest_otp(&self, email: &str) -> String {
        sqlx::query_scalar::<_, String>(
            "SELECT o.code FROM otp_codes o \
             JOIN accounts a ON a.id = o.account_id \
             WHERE a.email = $1 \
             ORDER BY o.created_at DESC LIMIT 1",
        )
        .bind(email)
        .fetch_one(&self.db_pool)
        .await
        .expect("No OTP issued for account")
    }

    /// Force-expire every outstanding code for an account.
    pub async fn expire_otps(&self, email: &str) {
        sqlx::query(
            "UPDATE otp_codes SET expires_at = NOW() - INTERVAL '1 minute' \
             WHERE account_id = (SELECT id FROM accounts WHERE email = $1)",
        )
        .bind(email)
        .execute(&self.db_pool)
        .await
        .expect("Failed to expire OTP codes");
    }

    /// Register an account through the API.
    pub async fn register(&self, email: &str, role: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": email,
                "password": "sunflower42",
                "role": role,
            })),
            None,
        )
        .await
    }

    /// Register, verify via the issued code, log in, and return the token.
    pub async fn register_and_login(&self, email: &str, role: &str) -> String {
        let response = self.register(email, role).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Registration failed: {:?}",
            response.body
        );

        let code = self.latest_otp(email).await;
        let response = self
            .request(
                "POST",
                "/api/auth/verify-otp",
                Some(serde_json::json!({ "email": email, "code": code })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Verification failed: {:?}",
            response.body
        );

        self.login(email).await
    }

    /// Log in and return the JWT access token.
    pub async fn login(&self, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": "sunflower42",
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .data()
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// Create a donor profile for the given token; returns the profile ID.
    pub async fn create_donor_profile(&self, token: &str, email: &str) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/donors",
                Some(serde_json::json!({
                    "full_name": "Test Donor",
                    "contact_number": "9876543210",
                    "email": email,
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Donor profile creation failed: {:?}",
            response.body
        );

        Self::id_of(&response)
    }

    /// Create an orphanage profile for the given token; returns the
    /// profile ID.
    pub async fn create_orphanage_profile(&self, token: &str, email: &str) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/orphanages",
                Some(serde_json::json!({
                    "name": "Sunrise Home",
                    "address": "12 Lake Road",
                    "city": "Pune",
                    "state": "Maharashtra",
                    "pincode": "411001",
                    "phone_number": "020-1234567",
                    "email": email,
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Orphanage profile creation failed: {:?}",
            response.body
        );

        Self::id_of(&response)
    }

    /// Extract `data.id` from a response.
    pub fn id_of(response: &TestResponse) -> Uuid {
        response
            .data()
            .get("id")
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse().ok())
            .expect("No id in response data")
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}

impl TestResponse {
    /// The `data` payload of a success envelope (Null for errors).
    pub fn data(&self) -> &Value {
        self.body.get("data").unwrap_or(&Value::Null)
    }

    /// The machine-readable error code of an error body.
    pub fn error_code(&self) -> &str {
        self.body
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}

//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use taskhub_api::{AppState, build_state};
use taskhub_core::config::AppConfig;
use taskhub_entity::user::UserRole;
use taskhub_entity::user::model::CreateUser;

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// The application state for direct setup.
    pub state: AppState,
}

/// A simplified response: status plus parsed JSON body.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Create a new test application on an in-memory database.
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        // Generous route limits so rate limiting does not mask the
        // behavior under test.
        config.rate_limit.api_max_requests = 1000;
        config.rate_limit.login_max_requests = 100;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        taskhub_database::migration::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let state = build_state(config, pool);
        let router = taskhub_api::app::build_app(state.clone());

        Self { router, state }
    }

    /// Insert a user directly through the repository.
    pub async fn create_test_user(&self, email: &str, password: &str, role: &str) -> i64 {
        let password_hash = self
            .state
            .password_hasher
            .hash_password(password)
            .expect("Failed to hash password");
        let role: UserRole = role.parse().expect("Invalid test role");

        self.state
            .user_repo
            .create(&CreateUser {
                email: email.to_string(),
                password_hash,
                role,
            })
            .await
            .expect("Failed to create test user")
            .id
    }

    /// Issue a request against the router and parse the JSON body.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Log in and return the issued token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["token"].as_str().unwrap().to_string()
    }
}

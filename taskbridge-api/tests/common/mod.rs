/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test database setup (migrations run on first connect)
/// - Test user creation with JWT tokens
/// - Request helpers

use axum::body::Body;
use axum::http::{Request, Response};
use taskbridge_api::app::{build_router, AppState};
use taskbridge_api::config::Config;
use taskbridge_shared::auth::jwt::{create_token, Claims, TokenType};
use taskbridge_shared::auth::password::hash_password;
use taskbridge_shared::models::user::{CreateUser, User, UserRole};
use sqlx::PgPool;
use tower::Service as _;
use uuid::Uuid;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    pub config: Config,
}

impl TestContext {
    /// Creates a new test context against the configured database
    ///
    /// Requires `DATABASE_URL` and `JWT_SECRET` in the environment (or a
    /// `.env` file).
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        let db = PgPool::connect(&config.database.url).await?;

        // Path relative to this crate's Cargo.toml
        sqlx::migrate!("../migrations").run(&db).await?;

        let state = AppState::new(db.clone(), config.clone());
        let app = build_router(state);

        Ok(TestContext { db, app, config })
    }

    /// Creates a user directly in the database and returns it with a
    /// valid access token
    pub async fn create_user(&self, role: UserRole) -> anyhow::Result<(User, String)> {
        let user = User::create(
            &self.db,
            CreateUser {
                email: format!("test-{}@example.com", Uuid::new_v4()),
                role,
                password_hash: hash_password("Test-password-123")?,
            },
        )
        .await?;

        let claims = Claims::new(user.id, user.role, TokenType::Access);
        let token = create_token(&claims, &self.config.jwt.secret)?;

        Ok((user, token))
    }

    /// Removes rows created by this test run
    ///
    /// Test users all carry a `test-*@example.com` address; deleting them
    /// cascades to their tasks and payments. Test projects are matched by
    /// their title prefix.
    pub async fn cleanup(&self) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM projects WHERE title LIKE 'test-%'")
            .execute(&self.db)
            .await?;
        sqlx::query("DELETE FROM users WHERE email LIKE 'test-%@example.com'")
            .execute(&self.db)
            .await?;
        Ok(())
    }

    /// Sends a request through the router
    pub async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.app
            .clone()
            .call(request)
            .await
            .expect("Router call should not fail")
    }
}

/// Builds an authenticated JSON POST request
pub fn post_json(uri: &str, token: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Request should build")
}

/// Builds an authenticated GET request
pub fn get_authed(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .expect("Request should build")
}

/// Reads a JSON response body
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Body should read");
    serde_json::from_slice(&body).expect("Body should be JSON")
}

/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskbridge_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = taskbridge_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use taskbridge_shared::auth::middleware::{create_jwt_middleware, AuthContext};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /                        # Welcome message (public)
/// ├── GET  /health                  # Health check (public)
/// ├── /uploads/*                    # Static files (public)
/// └── /v1/                          # API v1 (versioned)
///     ├── /auth/                    # Authentication (public)
///     │   ├── POST /register
///     │   ├── POST /login
///     │   └── POST /refresh
///     ├── /users/                   # Users (authenticated)
///     │   ├── GET /me
///     │   └── GET /:id
///     ├── /projects/                # Projects (authenticated)
///     │   ├── POST /
///     │   ├── GET  /
///     │   ├── GET  /:id
///     │   └── GET  /:id/tasks
///     ├── /tasks/                   # Tasks (authenticated)
///     │   ├── POST /
///     │   └── GET  /:id
///     ├── /payments/                # Payments (authenticated)
///     │   ├── POST /
///     │   └── GET  /:id
///     └── /admin/                   # Admin (admin role required)
///         ├── GET /users
///         └── GET /stats
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Authentication (per-group JWT layer, plus admin guard)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Public routes (no auth)
    let public_routes = Router::new()
        .route("/", get(routes::root::read_root))
        .route("/health", get(routes::health::health_check));

    // Auth routes (public, no auth required)
    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route("/refresh", post(routes::auth::refresh));

    // User routes (require JWT authentication)
    let user_routes = Router::new()
        .route("/me", get(routes::users::get_me))
        .route("/:id", get(routes::users::get_user));

    // Project routes (require JWT authentication)
    let project_routes = Router::new()
        .route("/", post(routes::projects::create_project))
        .route("/", get(routes::projects::list_projects))
        .route("/:id", get(routes::projects::get_project))
        .route("/:id/tasks", get(routes::projects::list_project_tasks));

    // Task routes (require JWT authentication)
    let task_routes = Router::new()
        .route("/", post(routes::tasks::create_task))
        .route("/:id", get(routes::tasks::get_task));

    // Payment routes (require JWT authentication)
    let payment_routes = Router::new()
        .route("/", post(routes::payments::create_payment))
        .route("/:id", get(routes::payments::get_payment));

    // Admin routes (require JWT authentication + admin role)
    let admin_routes = Router::new()
        .route("/users", get(routes::admin::list_users))
        .route("/stats", get(routes::admin::platform_stats))
        .layer(axum::middleware::from_fn(admin_guard));

    // Build complete v1 API; the JWT layer covers everything but /auth
    let v1_routes = Router::new()
        .nest("/users", user_routes)
        .nest("/projects", project_routes)
        .nest("/tasks", task_routes)
        .nest("/payments", payment_routes)
        .nest("/admin", admin_routes)
        .layer(axum::middleware::from_fn(create_jwt_middleware(
            state.jwt_secret().to_string(),
        )))
        .nest("/auth", auth_routes);

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(public_routes)
        .nest("/v1", v1_routes)
        .nest_service(
            "/uploads",
            ServeDir::new(&state.config.api.uploads_dir),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Admin guard middleware
///
/// Must be layered inside the JWT layer: rejects any request whose
/// [`AuthContext`] does not carry the admin role.
async fn admin_guard(req: Request, next: Next) -> Result<Response, crate::error::ApiError> {
    let auth = req
        .extensions()
        .get::<AuthContext>()
        .ok_or_else(|| crate::error::ApiError::Unauthorized("Not authenticated".to_string()))?;

    if !auth.is_admin() {
        return Err(crate::error::ApiError::Forbidden(
            "Admin role required".to_string(),
        ));
    }

    Ok(next.run(req).await)
}

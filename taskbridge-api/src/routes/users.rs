/// User lookup endpoints
///
/// # Endpoints
///
/// - `GET /v1/users/me` - Current authenticated user
/// - `GET /v1/users/:id` - Fetch a user by ID

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;
use taskbridge_shared::{
    auth::middleware::AuthContext,
    models::user::{User, UserRole},
};
use uuid::Uuid;

/// User representation returned by the API
///
/// The password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// User ID
    pub id: Uuid,

    /// Email address
    pub email: String,

    /// Platform role
    pub role: UserRole,

    /// When the account was created
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Returns the currently authenticated user
///
/// # Errors
///
/// - `404 Not Found`: Token refers to a user that no longer exists
pub async fn get_me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<UserResponse>> {
    let user = User::find_by_id(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}

/// Fetches a user by ID
///
/// # Errors
///
/// - `404 Not Found`: No user with that ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<UserResponse>> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}

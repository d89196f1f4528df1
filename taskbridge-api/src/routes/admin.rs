/// Admin endpoints
///
/// All endpoints in this module sit behind the admin guard layer and are
/// only reachable with an admin-role token.
///
/// # Endpoints
///
/// - `GET /v1/admin/users` - List users (paginated)
/// - `GET /v1/admin/stats` - Platform entity counts

use crate::{
    app::AppState,
    error::ApiResult,
    routes::{projects::Pagination, users::UserResponse},
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use taskbridge_shared::models::{payment::Payment, project::Project, task::Task, user::User};

/// Paginated user list response
#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    /// Users on this page
    pub users: Vec<UserResponse>,

    /// Total number of users
    pub total: i64,
}

/// Platform entity counts
#[derive(Debug, Serialize)]
pub struct PlatformStatsResponse {
    /// Total registered users
    pub users: i64,

    /// Total projects
    pub projects: i64,

    /// Total tasks
    pub tasks: i64,

    /// Total payments
    pub payments: i64,
}

/// Lists users with pagination
pub async fn list_users(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> ApiResult<Json<ListUsersResponse>> {
    let users = User::list(&state.db, pagination.limit(), pagination.offset()).await?;
    let total = User::count(&state.db).await?;

    Ok(Json(ListUsersResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
        total,
    }))
}

/// Returns platform-wide entity counts
pub async fn platform_stats(
    State(state): State<AppState>,
) -> ApiResult<Json<PlatformStatsResponse>> {
    let users = User::count(&state.db).await?;
    let projects = Project::count(&state.db).await?;
    let tasks = Task::count(&state.db).await?;
    let payments = Payment::count(&state.db).await?;

    Ok(Json(PlatformStatsResponse {
        users,
        projects,
        tasks,
        payments,
    }))
}

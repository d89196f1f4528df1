/// Project endpoints
///
/// # Endpoints
///
/// - `POST /v1/projects` - Create project
/// - `GET /v1/projects` - List projects (paginated)
/// - `GET /v1/projects/:id` - Fetch a project by ID
/// - `GET /v1/projects/:id/tasks` - List the tasks of a project

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use taskbridge_shared::models::{
    project::{CreateProject, Project},
    task::Task,
};
use uuid::Uuid;
use validator::Validate;

/// Create project request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    /// Project title
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Project description
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    /// Optional owning buyer
    pub buyer_id: Option<Uuid>,
}

/// Pagination query parameters
#[derive(Debug, Deserialize)]
pub struct Pagination {
    /// Maximum number of items to return (default 20, capped at 100)
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Number of items to skip
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}

impl Pagination {
    /// Clamps the limit to a sane range
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, 100)
    }

    /// Clamps the offset to be non-negative
    ///
    /// Postgres rejects a negative OFFSET outright, so a stray
    /// `?offset=-1` must not reach the query.
    pub fn offset(&self) -> i64 {
        self.offset.max(0)
    }
}

/// Paginated project list response
#[derive(Debug, Serialize)]
pub struct ListProjectsResponse {
    /// Projects on this page
    pub projects: Vec<Project>,

    /// Total number of projects
    pub total: i64,
}

/// Project task list response
#[derive(Debug, Serialize)]
pub struct ProjectTasksResponse {
    /// Tasks belonging to the project
    pub tasks: Vec<Task>,
}

/// Creates a project
///
/// # Errors
///
/// - `409 Conflict`: `buyer_id` references a missing user
/// - `422 Unprocessable Entity`: Validation failed
pub async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<Json<Project>> {
    req.validate().map_err(ApiError::from_validation)?;

    let project = Project::create(
        &state.db,
        CreateProject {
            title: req.title,
            description: req.description,
            buyer_id: req.buyer_id,
        },
    )
    .await?;

    Ok(Json(project))
}

/// Lists projects with pagination
pub async fn list_projects(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> ApiResult<Json<ListProjectsResponse>> {
    let projects = Project::list(&state.db, pagination.limit(), pagination.offset()).await?;
    let total = Project::count(&state.db).await?;

    Ok(Json(ListProjectsResponse { projects, total }))
}

/// Fetches a project by ID
///
/// # Errors
///
/// - `404 Not Found`: No project with that ID
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Project>> {
    let project = Project::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

    Ok(Json(project))
}

/// Lists the tasks of a project
///
/// # Errors
///
/// - `404 Not Found`: No project with that ID
pub async fn list_project_tasks(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ProjectTasksResponse>> {
    // 404 for a missing project rather than an empty list
    Project::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

    let tasks = Task::list_by_project(&state.db, id).await?;

    Ok(Json(ProjectTasksResponse { tasks }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_limit_clamped() {
        let pagination = Pagination {
            limit: 10_000,
            offset: 0,
        };
        assert_eq!(pagination.limit(), 100);

        let pagination = Pagination {
            limit: 0,
            offset: 0,
        };
        assert_eq!(pagination.limit(), 1);
    }

    #[test]
    fn test_pagination_offset_clamped() {
        let pagination = Pagination {
            limit: 20,
            offset: -1,
        };
        assert_eq!(pagination.offset(), 0);

        let pagination = Pagination {
            limit: 20,
            offset: 40,
        };
        assert_eq!(pagination.offset(), 40);
    }
}

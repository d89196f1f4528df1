/// Task endpoints
///
/// # Endpoints
///
/// - `POST /v1/tasks` - Create task (always starts in `todo`)
/// - `GET /v1/tasks/:id` - Fetch a task by ID

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use taskbridge_shared::models::task::{CreateTask, Task};
use uuid::Uuid;
use validator::Validate;

/// Create task request
///
/// There is no status field: every task starts in `todo` no matter what
/// the client sends.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Project the task belongs to
    pub project_id: Uuid,

    /// Developer assigned to the task
    pub developer_id: Uuid,

    /// Task title
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Task description
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    /// Hourly rate agreed for the task
    #[validate(range(min = 0, message = "Hourly rate must not be negative"))]
    pub hourly_rate: i32,
}

/// Creates a task in the `todo` status
///
/// # Errors
///
/// - `409 Conflict`: `project_id` or `developer_id` references a missing row
/// - `422 Unprocessable Entity`: Validation failed
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<Json<Task>> {
    req.validate().map_err(ApiError::from_validation)?;

    let task = Task::create(
        &state.db,
        CreateTask {
            project_id: req.project_id,
            developer_id: req.developer_id,
            title: req.title,
            description: req.description,
            hourly_rate: req.hourly_rate,
        },
    )
    .await?;

    Ok(Json(task))
}

/// Fetches a task by ID
///
/// # Errors
///
/// - `404 Not Found`: No task with that ID
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Task>> {
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

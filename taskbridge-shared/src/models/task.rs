/// Task model and database operations
///
/// Tasks belong to a project and are assigned to a developer at an hourly
/// rate. A task is always created in the `todo` status; the create
/// operation does not accept a status from the caller.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE task_status AS ENUM ('todo', 'in_progress', 'done');
///
/// CREATE TABLE tasks (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     project_id UUID NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
///     developer_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     title VARCHAR(255) NOT NULL,
///     description TEXT NOT NULL,
///     hourly_rate INTEGER NOT NULL,
///     status task_status NOT NULL DEFAULT 'todo',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskbridge_shared::models::task::{CreateTask, Task, TaskStatus};
/// use taskbridge_shared::db::pool::{create_pool, DatabaseConfig};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(&pool, CreateTask {
///     project_id: Uuid::new_v4(),
///     developer_id: Uuid::new_v4(),
///     title: "Implement checkout".to_string(),
///     description: "Cart to order flow".to_string(),
///     hourly_rate: 75,
/// }).await?;
///
/// assert_eq!(task.status, TaskStatus::Todo);
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Task status
///
/// New tasks always start in `Todo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but not started
    Todo,

    /// A developer is working on the task
    InProgress,

    /// Task is finished
    Done,
}

impl TaskStatus {
    /// Converts status to string for logging and display
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }
}

/// Task model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID
    pub id: Uuid,

    /// Project this task belongs to
    pub project_id: Uuid,

    /// Developer assigned to the task
    pub developer_id: Uuid,

    /// Task title
    pub title: String,

    /// Task description
    pub description: String,

    /// Hourly rate agreed for the task
    pub hourly_rate: i32,

    /// Current status (always `Todo` right after creation)
    pub status: TaskStatus,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task
///
/// There is intentionally no status field here: every task starts in
/// `todo` regardless of what the client sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Project the task belongs to
    pub project_id: Uuid,

    /// Developer assigned to the task
    pub developer_id: Uuid,

    /// Task title
    pub title: String,

    /// Task description
    pub description: String,

    /// Hourly rate agreed for the task
    pub hourly_rate: i32,
}

impl Task {
    /// Creates a new task in the `todo` status
    ///
    /// # Errors
    ///
    /// Returns an error if `project_id` or `developer_id` references a
    /// missing row, or the database connection fails.
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (project_id, developer_id, title, description, hourly_rate, status)
            VALUES ($1, $2, $3, $4, $5, 'todo')
            RETURNING id, project_id, developer_id, title, description, hourly_rate,
                      status, created_at, updated_at
            "#,
        )
        .bind(data.project_id)
        .bind(data.developer_id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.hourly_rate)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, project_id, developer_id, title, description, hourly_rate,
                   status, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists the tasks of a project, oldest first
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, project_id, developer_id, title, description, hourly_rate,
                   status, created_at, updated_at
            FROM tasks
            WHERE project_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(project_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Counts total number of tasks
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

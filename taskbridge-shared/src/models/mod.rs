/// Database models for TaskBridge
///
/// This module contains all database models and their CRUD operations.
/// Every operation is a direct mapping from an input struct to a database
/// insert/select and back.
///
/// # Models
///
/// - `user`: User accounts (buyers, developers, admins)
/// - `project`: Projects posted by buyers
/// - `task`: Tasks within a project, assigned to a developer
/// - `payment`: Payments recorded against a task
///
/// # Example
///
/// ```no_run
/// use taskbridge_shared::models::user::{CreateUser, User, UserRole};
/// use taskbridge_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     CreateUser {
///         email: "buyer@example.com".to_string(),
///         role: UserRole::Buyer,
///         password_hash: "$argon2id$...".to_string(),
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod payment;
pub mod project;
pub mod task;
pub mod user;

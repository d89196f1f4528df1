/// Payment model and database operations
///
/// A payment is an append-only record against a task. Create and fetch
/// only; there is no update or delete.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE payments (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     task_id UUID NOT NULL REFERENCES tasks(id) ON DELETE CASCADE,
///     payer_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     amount_cents BIGINT NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Payment model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Payment {
    /// Unique payment ID
    pub id: Uuid,

    /// Task the payment is for
    pub task_id: Uuid,

    /// User who paid
    pub payer_id: Uuid,

    /// Amount in cents
    pub amount_cents: i64,

    /// When the payment was recorded
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePayment {
    /// Task the payment is for
    pub task_id: Uuid,

    /// User who paid
    pub payer_id: Uuid,

    /// Amount in cents
    pub amount_cents: i64,
}

impl Payment {
    /// Records a new payment
    ///
    /// # Errors
    ///
    /// Returns an error if `task_id` or `payer_id` references a missing
    /// row, or the database connection fails.
    pub async fn create(pool: &PgPool, data: CreatePayment) -> Result<Self, sqlx::Error> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (task_id, payer_id, amount_cents)
            VALUES ($1, $2, $3)
            RETURNING id, task_id, payer_id, amount_cents, created_at
            "#,
        )
        .bind(data.task_id)
        .bind(data.payer_id)
        .bind(data.amount_cents)
        .fetch_one(pool)
        .await?;

        Ok(payment)
    }

    /// Finds a payment by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, task_id, payer_id, amount_cents, created_at
            FROM payments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(payment)
    }

    /// Counts total number of payments
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM payments")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

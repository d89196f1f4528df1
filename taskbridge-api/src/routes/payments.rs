/// Payment endpoints
///
/// # Endpoints
///
/// - `POST /v1/payments` - Record payment
/// - `GET /v1/payments/:id` - Fetch a payment by ID

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use taskbridge_shared::models::payment::{CreatePayment, Payment};
use uuid::Uuid;
use validator::Validate;

/// Create payment request
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentRequest {
    /// Task the payment is for
    pub task_id: Uuid,

    /// User who paid
    pub payer_id: Uuid,

    /// Amount in cents
    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount_cents: i64,
}

/// Records a payment
///
/// # Errors
///
/// - `409 Conflict`: `task_id` or `payer_id` references a missing row
/// - `422 Unprocessable Entity`: Validation failed
pub async fn create_payment(
    State(state): State<AppState>,
    Json(req): Json<CreatePaymentRequest>,
) -> ApiResult<Json<Payment>> {
    req.validate().map_err(ApiError::from_validation)?;

    let payment = Payment::create(
        &state.db,
        CreatePayment {
            task_id: req.task_id,
            payer_id: req.payer_id,
            amount_cents: req.amount_cents,
        },
    )
    .await?;

    Ok(Json(payment))
}

/// Fetches a payment by ID
///
/// # Errors
///
/// - `404 Not Found`: No payment with that ID
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Payment>> {
    let payment = Payment::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Payment not found".to_string()))?;

    Ok(Json(payment))
}

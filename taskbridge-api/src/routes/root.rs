/// Root welcome endpoint
///
/// # Endpoint
///
/// ```text
/// GET /
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "Welcome to the TaskBridge API"
/// }
/// ```

use axum::Json;
use serde::{Deserialize, Serialize};

/// Welcome response
#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    /// Welcome message
    pub message: String,
}

/// Root handler
pub async fn read_root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the TaskBridge API".to_string(),
    })
}

use axum::Json;
use serde_json::Value;

/// Handler for GET /
///
/// Root status message used by clients as a reachability probe.
pub async fn root_status() -> Json<Value> {
    Json(serde_json::json!({
        "message": "Loan API is running",
        "status": "success"
    }))
}

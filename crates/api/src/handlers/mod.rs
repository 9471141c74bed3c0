pub mod check;
pub mod grants;
pub mod history;
pub mod notifications;
pub mod sites;
pub mod stats;

use axum::Json;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "focusgate" }))
}

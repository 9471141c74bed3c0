use serde::{Deserialize, Serialize};

/// A transient user-visible message. The core only records these; rendering
/// belongs to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub created_at_ms: i64,
}

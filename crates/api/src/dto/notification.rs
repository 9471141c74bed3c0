use focusgate_domain::Notification;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub title: String,
    pub message: String,
    pub created_at_ms: i64,
}

impl NotificationResponse {
    pub fn from_domain(n: Notification) -> Self {
        Self {
            id: n.id,
            title: n.title,
            message: n.message,
            created_at_ms: n.created_at_ms,
        }
    }
}

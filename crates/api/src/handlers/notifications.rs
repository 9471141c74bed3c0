use axum::{extract::State, response::Json, routing::get, Router};

use crate::{dto::NotificationResponse, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/notifications", get(get_notifications))
}

async fn get_notifications(State(state): State<AppState>) -> Json<Vec<NotificationResponse>> {
    Json(
        state
            .notifier
            .active()
            .into_iter()
            .map(NotificationResponse::from_domain)
            .collect(),
    )
}

use axum::{extract::State, response::Json, routing::get, Router};

use crate::{dto::HistoryEntryResponse, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/history", get(get_history))
}

async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistoryEntryResponse>>, ApiError> {
    let entries = state.get_history.execute().await?;
    Ok(Json(
        entries
            .into_iter()
            .map(HistoryEntryResponse::from_domain)
            .collect(),
    ))
}

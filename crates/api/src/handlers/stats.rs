use axum::{extract::State, response::Json, routing::get, Router};

use crate::{dto::StatsResponse, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.get_stats.execute().await?;
    Ok(Json(StatsResponse::from_domain(stats)))
}

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::{
    dto::{CheckQuery, CheckResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/check", get(check_url))
}

async fn check_url(
    State(state): State<AppState>,
    Query(params): Query<CheckQuery>,
) -> Result<Json<CheckResponse>, ApiError> {
    let blocked = state.check_url.execute(&params.url).await?;
    Ok(Json(CheckResponse {
        url: params.url,
        blocked,
    }))
}

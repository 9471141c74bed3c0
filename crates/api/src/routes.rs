use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::sites::routes())
        .merge(handlers::grants::routes())
        .merge(handlers::check::routes())
        .merge(handlers::history::routes())
        .merge(handlers::stats::routes())
        .merge(handlers::notifications::routes())
        .with_state(state)
}

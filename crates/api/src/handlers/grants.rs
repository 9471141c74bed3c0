use axum::{
    extract::{Path, State},
    response::Json,
    routing::post,
    Router,
};

use crate::{
    dto::{ExtendResponse, GrantResponse, UnblockSiteRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sites/{domain}/unblock", post(unblock_site))
        .route("/sites/{domain}/extend", post(extend_grant))
}

async fn unblock_site(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Json(req): Json<UnblockSiteRequest>,
) -> Result<Json<GrantResponse>, ApiError> {
    let grant = state.unblock_site.execute(&domain, &req.reason).await?;
    Ok(Json(GrantResponse::from_domain(grant)))
}

async fn extend_grant(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<ExtendResponse>, ApiError> {
    let grant = state.extend_grant.execute(&domain).await?;
    Ok(Json(ExtendResponse {
        extended: grant.is_some(),
        grant: grant.map(GrantResponse::from_domain),
    }))
}

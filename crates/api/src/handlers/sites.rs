use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use tracing::debug;

use crate::{
    dto::{AddSiteRequest, SiteResponse, ToggleSiteRequest, UpdateDurationRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sites", get(get_all_sites))
        .route("/sites", post(add_site))
        .route("/sites/blocked", get(get_blocked_sites))
        .route("/sites/{domain}", get(get_site))
        .route("/sites/{domain}", delete(remove_site))
        .route("/sites/{domain}/toggle", post(toggle_site))
        .route("/sites/{domain}/duration", put(update_duration))
}

async fn get_all_sites(State(state): State<AppState>) -> Result<Json<Vec<SiteResponse>>, ApiError> {
    let sites = state.get_sites.all().await?;
    debug!(count = sites.len(), "Sites retrieved");
    Ok(Json(sites.into_iter().map(SiteResponse::from_domain).collect()))
}

async fn get_blocked_sites(
    State(state): State<AppState>,
) -> Result<Json<Vec<SiteResponse>>, ApiError> {
    let sites = state.get_sites.blocked().await?;
    Ok(Json(sites.into_iter().map(SiteResponse::from_domain).collect()))
}

async fn get_site(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<SiteResponse>, ApiError> {
    let site = state
        .get_sites
        .by_domain(&domain)
        .await?
        .ok_or(focusgate_domain::DomainError::SiteNotFound(domain))?;
    Ok(Json(SiteResponse::from_domain(site)))
}

async fn add_site(
    State(state): State<AppState>,
    Json(req): Json<AddSiteRequest>,
) -> Result<(StatusCode, Json<SiteResponse>), ApiError> {
    let site = state.add_site.execute(&req.url, req.duration_minutes).await?;
    Ok((StatusCode::CREATED, Json(SiteResponse::from_domain(site))))
}

async fn remove_site(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.remove_site.execute(&domain).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn toggle_site(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Json(req): Json<ToggleSiteRequest>,
) -> Result<StatusCode, ApiError> {
    state.toggle_site.execute(&domain, req.blocked).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn update_duration(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Json(req): Json<UpdateDurationRequest>,
) -> Result<StatusCode, ApiError> {
    state.update_duration.execute(&domain, req.minutes).await?;
    Ok(StatusCode::NO_CONTENT)
}

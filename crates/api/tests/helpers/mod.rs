#![allow(dead_code)]

use axum::{body::Body, http::Request, Router};
use focusgate_api::{create_api_routes, AppState};
use focusgate_application::services::{GrantScheduler, ReblockService};
use focusgate_application::use_cases::*;
use focusgate_domain::DomainMatcher;
use focusgate_infrastructure::alarms::TokioAlarmService;
use focusgate_infrastructure::notifications::NotificationCenter;
use focusgate_infrastructure::repositories::{SqliteHistoryRepository, SqliteSiteRepository};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

pub async fn create_test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(
        "CREATE TABLE sites (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            domain TEXT NOT NULL UNIQUE,
            is_blocked INTEGER NOT NULL DEFAULT 1,
            grant_duration_minutes INTEGER NOT NULL DEFAULT 10,
            unblock_until INTEGER,
            date_added TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        "CREATE TABLE unblock_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            domain TEXT NOT NULL,
            reason TEXT NOT NULL,
            timestamp_ms INTEGER NOT NULL,
            grant_duration_minutes INTEGER NOT NULL DEFAULT 10,
            was_auto_reblocked INTEGER,
            reblocked_at INTEGER
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    let sites = Arc::new(SqliteSiteRepository::new(pool.clone()));
    let history = Arc::new(SqliteHistoryRepository::new(pool));
    let (alarms, rx) = TokioAlarmService::new();
    // Fired alarms are irrelevant to handler tests; keep the channel alive.
    std::mem::forget(rx);
    let notifier = Arc::new(NotificationCenter::new(alarms.clone()));
    let scheduler = Arc::new(GrantScheduler::new(alarms, notifier.clone(), 60));
    let reblock = Arc::new(ReblockService::new(
        sites.clone(),
        history.clone(),
        scheduler.clone(),
        notifier.clone(),
    ));
    let matcher = DomainMatcher::new(vec![("twitter.com".to_string(), "x.com".to_string())]);

    let state = AppState {
        add_site: Arc::new(AddSiteUseCase::new(sites.clone(), 10)),
        remove_site: Arc::new(RemoveSiteUseCase::new(sites.clone(), scheduler.clone())),
        toggle_site: Arc::new(ToggleSiteUseCase::new(
            sites.clone(),
            scheduler.clone(),
            reblock.clone(),
        )),
        update_duration: Arc::new(UpdateDurationUseCase::new(sites.clone())),
        get_sites: Arc::new(GetSitesUseCase::new(sites.clone())),
        unblock_site: Arc::new(UnblockSiteUseCase::new(
            sites.clone(),
            history.clone(),
            reblock,
        )),
        extend_grant: Arc::new(ExtendGrantUseCase::new(
            sites.clone(),
            scheduler,
            notifier.clone(),
        )),
        check_url: Arc::new(CheckUrlUseCase::new(sites, matcher)),
        get_history: Arc::new(GetHistoryUseCase::new(history.clone())),
        get_stats: Arc::new(GetStatsUseCase::new(history)),
        notifier,
    };

    create_api_routes(state)
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

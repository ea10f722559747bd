mod dashboard;

use std::collections::BTreeMap;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::config::AppConfig;
use crate::core::feed::NewsService;
use crate::core::AppServices;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub news: NewsService,
    pub services: AppServices,
}

impl AppState {
    pub fn new(config: AppConfig, news: NewsService) -> Self {
        Self {
            config,
            news,
            services: AppServices::default(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/api/health", get(app_health))
        .with_state(state)
}

async fn app_health(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    Json(state.services.health_report())
}

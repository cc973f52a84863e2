pub mod deals;
pub mod health;
pub mod simulate;

use crate::orchestration::Orchestrator;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self { orchestrator }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/simulate", post(simulate::post_simulate))
        .route("/v1/scenario", post(simulate::post_scenario))
        .route("/v1/defaults", get(simulate::get_defaults))
        .route("/v1/market-stats", post(simulate::post_market_stats))
        .route("/v1/deals", get(deals::list_deals).post(deals::save_deal))
        .route(
            "/v1/deals/:id",
            get(deals::get_deal).delete(deals::delete_deal),
        )
        .route("/v1/deals/:id/projection", get(deals::get_projection))
        .route("/v1/deals/:id/report.csv", get(deals::get_report_csv))
        .layer(cors)
        .with_state(state)
}

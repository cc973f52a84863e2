use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::domain::{DealParameters, MarketComparable, MarketStats, MonthlyResult, Projection};
use crate::engine::{build_projection, compute};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRequest {
    #[serde(default)]
    pub params: DealParameters,
    pub months: u32,
    pub bid_override: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStatsResponse {
    pub stats: Option<MarketStats>,
}

/// Recompute timeline and bid table for unsaved parameters.
pub async fn post_simulate(Json(params): Json<DealParameters>) -> Json<Projection> {
    Json(build_projection(&params))
}

/// Single scenario for an arbitrary holding period and bid.
pub async fn post_scenario(
    Json(request): Json<ScenarioRequest>,
) -> Result<Json<MonthlyResult>, AppError> {
    if request.months == 0 {
        return Err(AppError::BadRequest("months must be at least 1".to_string()));
    }
    if let Some(bid) = request.bid_override {
        if !bid.is_finite() {
            return Err(AppError::BadRequest("Invalid bidOverride".to_string()));
        }
    }

    Ok(Json(compute(
        &request.params,
        request.months,
        request.bid_override,
    )))
}

/// Parameters a new deal form starts from.
pub async fn get_defaults(State(state): State<AppState>) -> Json<DealParameters> {
    Json(state.orchestrator.draft().params)
}

pub async fn post_market_stats(
    Json(items): Json<Vec<MarketComparable>>,
) -> Json<MarketStatsResponse> {
    Json(MarketStatsResponse {
        stats: MarketStats::from_comparables(&items),
    })
}

use axum::extract::State;
use axum::Json;

use crate::api::AppState;
use crate::error::AppError;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Ready once the deal store answers a query.
pub async fn ready(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let deals = state.orchestrator.deal_count().await?;
    Ok(Json(serde_json::json!({"status": "ready", "deals": deals})))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryDealStore;
    use crate::orchestration::Orchestrator;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_returns_ok() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "ok");
        assert!(body["version"].is_string());
    }

    #[tokio::test]
    async fn test_ready_reports_deal_count() {
        let orchestrator = Orchestrator::new(Arc::new(InMemoryDealStore::new()));
        let state = AppState::new(Arc::new(orchestrator));
        let Json(body) = ready(State(state)).await.unwrap();
        assert_eq!(body["status"], "ready");
        assert_eq!(body["deals"], 0);
    }
}

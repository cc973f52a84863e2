use crate::db::{DealStore, StoreError};
use crate::domain::{Deal, DealId, MarketStats, ProfitBand, Projection, TimeMs};
use crate::engine::{build_projection, compute};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Holding period used for the one-line summary of each saved deal.
pub const SUMMARY_MONTH: u32 = 6;

/// A saved deal together with a fresh recompute.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealView {
    pub deal: Deal,
    pub projection: Projection,
    pub market_stats: Option<MarketStats>,
    /// Profit band of each timeline entry, in timeline order.
    pub bands: Vec<ProfitBand>,
}

/// List entry for a saved deal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealSummary {
    pub id: DealId,
    pub city: String,
    pub address: String,
    pub last_modified_ms: TimeMs,
    pub bid_value: f64,
    pub market_value: f64,
    pub month: u32,
    pub net_profit: f64,
    pub roi_percent: f64,
    pub band: ProfitBand,
}

impl DealSummary {
    fn of(deal: &Deal) -> Self {
        let result = compute(&deal.params, SUMMARY_MONTH, None);
        Self {
            id: deal.id.clone(),
            city: deal.city.clone(),
            address: deal.address.clone(),
            last_modified_ms: deal.last_modified_ms,
            bid_value: deal.params.bid_value,
            market_value: deal.params.market_value,
            month: SUMMARY_MONTH,
            net_profit: result.net_profit,
            roi_percent: result.roi_percent,
            band: ProfitBand::classify(result.roi_percent, deal.params.min_profit_percent),
        }
    }
}

/// Coordinates the deal store and the engine.
///
/// Edits are committed with [`Orchestrator::save_deal`], which recomputes the
/// projection right after the write. Nothing recomputes implicitly.
#[derive(Clone)]
pub struct Orchestrator {
    store: Arc<dyn DealStore>,
    min_profit_percent: Option<f64>,
}

impl Orchestrator {
    pub fn new(store: Arc<dyn DealStore>) -> Self {
        Self {
            store,
            min_profit_percent: None,
        }
    }

    /// Override the minimum profit that new drafts start with.
    pub fn with_default_min_profit(mut self, percent: Option<f64>) -> Self {
        self.min_profit_percent = percent;
        self
    }

    /// A blank deal ready for editing.
    pub fn draft(&self) -> Deal {
        let mut deal = Deal::new_draft();
        if let Some(percent) = self.min_profit_percent {
            deal.params.min_profit_percent = percent;
        }
        deal
    }

    /// Recompute the projection for a deal without touching the store.
    pub fn recompute(&self, deal: &Deal) -> DealView {
        let projection = build_projection(&deal.params);
        let bands = projection
            .timeline
            .iter()
            .map(|r| ProfitBand::classify(r.roi_percent, deal.params.min_profit_percent))
            .collect();

        DealView {
            market_stats: MarketStats::from_comparables(&deal.market_research),
            deal: deal.clone(),
            projection,
            bands,
        }
    }

    /// Persist a deal, assigning an id if it has none, and recompute it.
    ///
    /// Surrounding whitespace is stripped from a supplied id so it matches
    /// the path lookups.
    pub async fn save_deal(&self, mut deal: Deal) -> Result<DealView, OrchestrationError> {
        deal.id = DealId::new(deal.id.as_str().trim());
        if deal.id.is_blank() {
            deal.id = DealId::generate();
        }
        deal.last_modified_ms = TimeMs::now();

        self.store.upsert_deal(&deal).await?;
        info!(deal_id = %deal.id, city = %deal.city, "Deal saved");

        Ok(self.recompute(&deal))
    }

    pub async fn get_deal(&self, id: &DealId) -> Result<Deal, OrchestrationError> {
        self.store
            .get_deal(id)
            .await?
            .ok_or_else(|| OrchestrationError::NotFound(id.clone()))
    }

    /// Load a deal and recompute it.
    pub async fn project_deal(&self, id: &DealId) -> Result<DealView, OrchestrationError> {
        let deal = self.get_deal(id).await?;
        debug!(deal_id = %id, "Recomputing deal projection");
        Ok(self.recompute(&deal))
    }

    pub async fn delete_deal(&self, id: &DealId) -> Result<(), OrchestrationError> {
        if !self.store.delete_deal(id).await? {
            return Err(OrchestrationError::NotFound(id.clone()));
        }
        info!(deal_id = %id, "Deal deleted");
        Ok(())
    }

    pub async fn deal_count(&self) -> Result<i64, OrchestrationError> {
        Ok(self.store.count_deals().await?)
    }

    /// Summaries of every saved deal, most recently modified first.
    pub async fn summaries(&self) -> Result<Vec<DealSummary>, OrchestrationError> {
        let deals = self.store.list_deals().await?;
        Ok(deals.iter().map(DealSummary::of).collect())
    }
}

#[derive(Debug, Error)]
pub enum OrchestrationError {
    #[error("deal not found: {0}")]
    NotFound(DealId),
    #[error(transparent)]
    Store(#[from] StoreError),
}

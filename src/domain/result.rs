//! Value objects produced by the simulation engine.

use serde::{Deserialize, Serialize};

/// Full breakdown of one deal held for `month` months.
///
/// Money fields are in the deal's currency; `roi_percent` and `monthly_roi`
/// are percentages (already multiplied by 100).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyResult {
    pub month: u32,
    pub sale_value: f64,
    pub total_revenue: f64,

    pub auctioneer_fee: f64,
    pub itbi: f64,
    pub reforms: f64,
    pub vacation: f64,
    pub debts: f64,
    pub advisory: f64,
    pub deed: f64,
    pub registry: f64,
    pub condo_total: f64,
    pub iptu_total: f64,
    /// Placeholder, always zero.
    pub opportunity_cost: f64,
    /// Placeholder, always zero. Financing is not amortized.
    pub financing_interest: f64,
    pub income_tax: f64,
    pub broker_fee: f64,

    /// Cash needed up front.
    pub initial_outlay: f64,
    pub total_cost: f64,
    pub net_profit: f64,
    pub roi_percent: f64,
    /// Compounded monthly rate reproducing `roi_percent` over `month` months.
    pub monthly_roi: f64,
}

impl MonthlyResult {
    /// Rent accrued over the holding period.
    pub fn rent_revenue(&self) -> f64 {
        self.total_revenue - self.sale_value
    }
}

/// Outcome of one bid at one holding period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidMonthOutcome {
    pub month: u32,
    pub profit: f64,
    pub roi: f64,
}

/// One row of the bid-sensitivity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidTableRow {
    pub bid_value: f64,
    pub results_by_month: Vec<BidMonthOutcome>,
}

/// Everything one recompute produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub timeline: Vec<MonthlyResult>,
    pub bid_table: Vec<BidTableRow>,
}

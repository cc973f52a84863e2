use crate::domain::{BidMonthOutcome, BidTableRow, DealParameters, MonthlyResult, Projection};

use super::scenario::compute;

/// Holding periods, in months, shown on every timeline and bid table.
pub const SIMULATION_MONTHS: [u32; 8] = [1, 3, 4, 6, 7, 9, 10, 12];

/// Number of rows in the bid-sensitivity table.
pub const BID_TABLE_ROWS: usize = 10;

/// Step used when the deal has no bid increment configured.
pub const DEFAULT_BID_INCREMENT: f64 = 1_000.0;

/// One result per holding period, each computed independently.
pub fn build_timeline(params: &DealParameters) -> Vec<MonthlyResult> {
    SIMULATION_MONTHS
        .iter()
        .map(|&month| compute(params, month, None))
        .collect()
}

/// The bid step actually used by the sensitivity table.
pub fn effective_increment(params: &DealParameters) -> f64 {
    if params.bid_increment == 0.0 || params.bid_increment.is_nan() {
        DEFAULT_BID_INCREMENT
    } else {
        params.bid_increment
    }
}

/// Outcomes for [`BID_TABLE_ROWS`] bids, starting at the base bid.
pub fn build_bid_table(params: &DealParameters) -> Vec<BidTableRow> {
    let increment = effective_increment(params);

    (0..BID_TABLE_ROWS)
        .map(|i| {
            let bid_value = params.bid_value + increment * i as f64;
            let results_by_month = SIMULATION_MONTHS
                .iter()
                .map(|&month| {
                    let result = compute(params, month, Some(bid_value));
                    BidMonthOutcome {
                        month,
                        profit: result.net_profit,
                        roi: result.roi_percent,
                    }
                })
                .collect();

            BidTableRow {
                bid_value,
                results_by_month,
            }
        })
        .collect()
}

/// Recompute the timeline and the bid table for `params`.
pub fn build_projection(params: &DealParameters) -> Projection {
    Projection {
        timeline: build_timeline(params),
        bid_table: build_bid_table(params),
    }
}

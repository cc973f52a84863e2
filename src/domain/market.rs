//! Market research comparables and their summary statistics.

use serde::{Deserialize, Serialize};

/// A comparable listing used to estimate resale value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketComparable {
    pub id: u32,
    pub price: f64,
    pub link: String,
    pub description: String,
}

impl MarketComparable {
    /// Whether the comparable carries anything worth printing.
    pub fn is_filled(&self) -> bool {
        self.price > 0.0 || !self.link.is_empty() || !self.description.is_empty()
    }
}

/// Summary of the priced comparables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStats {
    pub average: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl MarketStats {
    /// Compute stats over comparables with a positive price.
    ///
    /// Returns `None` when no comparable is priced.
    pub fn from_comparables(items: &[MarketComparable]) -> Option<Self> {
        let mut prices: Vec<f64> = items
            .iter()
            .map(|item| item.price)
            .filter(|price| *price > 0.0)
            .collect();

        if prices.is_empty() {
            return None;
        }

        prices.sort_by(f64::total_cmp);

        let count = prices.len();
        let average = prices.iter().sum::<f64>() / count as f64;
        let mid = count / 2;
        let median = if count % 2 != 0 {
            prices[mid]
        } else {
            (prices[mid - 1] + prices[mid]) / 2.0
        };

        Some(MarketStats {
            average,
            median,
            min: prices[0],
            max: prices[count - 1],
            count,
        })
    }
}

//! Profit band classification of an ROI against the deal's minimum target.

use serde::{Deserialize, Serialize};

/// Where an ROI lands relative to the minimum acceptable profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitBand {
    /// ROI at or above the minimum.
    Target,
    /// Profitable, but below the minimum.
    Positive,
    /// Zero or negative ROI.
    Loss,
}

impl ProfitBand {
    /// Classify `roi_percent` against `min_profit_percent` (both in percent).
    pub fn classify(roi_percent: f64, min_profit_percent: f64) -> Self {
        if roi_percent >= min_profit_percent {
            ProfitBand::Target
        } else if roi_percent > 0.0 {
            ProfitBand::Positive
        } else {
            ProfitBand::Loss
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(ProfitBand::classify(41.0, 30.0), ProfitBand::Target);
        assert_eq!(ProfitBand::classify(30.0, 30.0), ProfitBand::Target);
        assert_eq!(ProfitBand::classify(12.5, 30.0), ProfitBand::Positive);
        assert_eq!(ProfitBand::classify(0.0, 30.0), ProfitBand::Loss);
        assert_eq!(ProfitBand::classify(-4.0, 30.0), ProfitBand::Loss);
    }

    #[test]
    fn test_zero_minimum_still_targets_break_even() {
        assert_eq!(ProfitBand::classify(0.0, 0.0), ProfitBand::Target);
    }
}

//! Domain types for the auction deal simulator.
//!
//! This module provides:
//! - Deal parameters and the persisted deal record
//! - Engine result value objects (monthly results, bid table, projection)
//! - Market research comparables and statistics
//! - Profit band classification

pub mod band;
pub mod deal;
pub mod market;
pub mod primitives;
pub mod result;

pub use band::ProfitBand;
pub use deal::{AuctionType, Deal, DealParameters, PaymentMethod, TaxMode};
pub use market::{MarketComparable, MarketStats};
pub use primitives::{DealId, TimeMs};
pub use result::{BidMonthOutcome, BidTableRow, MonthlyResult, Projection};

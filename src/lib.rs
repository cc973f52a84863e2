pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;
pub mod report;

pub use config::Config;
pub use db::{init_db, DealStore, InMemoryDealStore, Repository};
pub use domain::{
    BidMonthOutcome, BidTableRow, Deal, DealId, DealParameters, MonthlyResult, PaymentMethod,
    ProfitBand, Projection, TaxMode,
};
pub use engine::{build_bid_table, build_projection, build_timeline, compute};
pub use error::AppError;

//! Pure computation engine for deal viability.
//!
//! `scenario` computes one holding period for one bid; `projection` maps it
//! across the fixed month-set and the bid ladder. Nothing here does I/O or
//! holds state, so identical inputs always give identical outputs.

pub mod projection;
pub mod scenario;

pub use projection::{
    build_bid_table, build_projection, build_timeline, effective_increment, BID_TABLE_ROWS,
    DEFAULT_BID_INCREMENT, SIMULATION_MONTHS,
};
pub use scenario::{compute, INCOME_TAX_RATE};

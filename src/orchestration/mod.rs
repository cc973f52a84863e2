pub mod orchestrator;

pub use orchestrator::{DealSummary, DealView, Orchestrator, OrchestrationError, SUMMARY_MONTH};

//! Presentation helpers: pt-BR formatting and CSV export.

pub mod csv_export;
pub mod format;

pub use csv_export::{export_csv, ReportError};
pub use format::{format_currency, format_percent};

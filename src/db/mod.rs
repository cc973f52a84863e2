//! Deal persistence.
//!
//! This module provides:
//! - The `DealStore` trait the rest of the crate depends on
//! - A SQLite `Repository` with its migrations
//! - An in-memory store for tests

pub mod memory;
pub mod migrations;
pub mod repo;
pub mod store;

pub use memory::InMemoryDealStore;
pub use migrations::{init_db, init_memory_db};
pub use repo::Repository;
pub use store::{DealStore, StoreError};

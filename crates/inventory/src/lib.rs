//! Inventory store.
//!
//! An owned mapping of item names to strictly positive quantities, with
//! validated mutations, a low-stock scan and whole-file JSON snapshots.
//! Single-threaded and synchronous: wrap the store in a mutex if several
//! callers need it.

pub mod change;
pub mod config;
mod input;
pub mod report;
pub mod snapshot;
pub mod store;

#[cfg(test)]
mod test_support;

pub use change::StockChange;
pub use config::{
    DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_SNAPSHOT_PATH, InventoryConfig, QuantityPolicy,
};
pub use report::InventoryReport;
pub use snapshot::LoadOutcome;
pub use store::Inventory;

pub use stockkeep_core::{
    InventoryError, InventoryResult, ItemName, PersistenceError, PersistenceResult,
};

//! `stockkeep-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging sinks).

pub mod error;
pub mod item;
pub mod value_object;

pub use error::{InventoryError, InventoryResult, PersistenceError, PersistenceResult};
pub use item::ItemName;
pub use value_object::ValueObject;

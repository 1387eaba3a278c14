use std::collections::BTreeMap;

use serde_json::Value as JsonValue;

use stockkeep_core::{InventoryError, InventoryResult, ItemName};

use crate::change::StockChange;
use crate::config::InventoryConfig;
use crate::input::{item_from_value, quantity_from_value};
use crate::report::InventoryReport;

/// In-memory inventory: item name -> quantity.
///
/// Every key maps to a strictly positive quantity. A mutation that drives an
/// item to zero or below deletes it.
///
/// Failed mutations are logged at `error` and returned; the mapping is never
/// touched on the error path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub(crate) items: BTreeMap<String, i64>,
    pub(crate) config: InventoryConfig,
}

impl Inventory {
    /// Empty store with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store with the given configuration.
    pub fn with_config(config: InventoryConfig) -> Self {
        Self {
            items: BTreeMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Add `quantity` units of `item` (negative amounts subtract under the
    /// permissive policy).
    pub fn add(&mut self, item: &str, quantity: i64) -> InventoryResult<StockChange> {
        let result = ItemName::new(item).and_then(|name| self.apply_add(name, quantity));
        if let Err(err) = &result {
            tracing::error!(item, quantity, error = %err, "item not added");
        }
        result
    }

    /// `add` for loosely typed input. Non-text items and non-integer
    /// quantities are rejected without touching the store.
    pub fn add_value(
        &mut self,
        item: &JsonValue,
        quantity: &JsonValue,
    ) -> InventoryResult<StockChange> {
        let result = item_from_value(item).and_then(|name| {
            let quantity = quantity_from_value(quantity)?;
            self.apply_add(name, quantity)
        });
        if let Err(err) = &result {
            tracing::error!(item = %item, quantity = %quantity, error = %err, "item not added");
        }
        result
    }

    /// Subtract `quantity` units of `item`, deleting it when nothing is left.
    pub fn remove(&mut self, item: &str, quantity: i64) -> InventoryResult<StockChange> {
        let result = self.apply_remove(item, quantity);
        if let Err(err) = &result {
            log_remove_failure(err, &JsonValue::from(item), &JsonValue::from(quantity));
        }
        result
    }

    /// `remove` for loosely typed input.
    pub fn remove_value(
        &mut self,
        item: &JsonValue,
        quantity: &JsonValue,
    ) -> InventoryResult<StockChange> {
        let result = item_from_value(item).and_then(|name| {
            let quantity = quantity_from_value(quantity)?;
            self.apply_remove(name.as_str(), quantity)
        });
        if let Err(err) = &result {
            log_remove_failure(err, item, quantity);
        }
        result
    }

    /// Current quantity of `item`, 0 when absent.
    pub fn get_quantity(&self, item: &str) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Items whose quantity is strictly below `threshold`.
    ///
    /// Callers must not depend on the order of the result.
    pub fn scan_below_threshold(&self, threshold: i64) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// `scan_below_threshold` with the configured low-stock threshold.
    pub fn low_stock(&self) -> Vec<String> {
        self.scan_below_threshold(self.config.low_stock_threshold)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate `(item, quantity)` pairs in item order.
    pub fn items(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.items.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    /// Borrow the whole mapping (useful for before/after comparisons).
    pub fn snapshot(&self) -> &BTreeMap<String, i64> {
        &self.items
    }

    pub fn clear(&mut self) {
        let dropped = self.items.len();
        self.items.clear();
        tracing::info!(dropped, "inventory cleared");
    }

    pub fn report(&self) -> InventoryReport {
        InventoryReport::new(self.items())
    }

    fn apply_add(&mut self, item: ItemName, quantity: i64) -> InventoryResult<StockChange> {
        self.config.policy.check(quantity)?;

        let previous = self.get_quantity(item.as_str());
        let total = previous.checked_add(quantity).ok_or_else(|| {
            InventoryError::validation(format!(
                "quantity overflow for {item}: {previous} + {quantity}"
            ))
        })?;

        let change = self.commit(item, quantity, previous, total);
        if change.is_removal() && previous == 0 {
            tracing::info!(
                item = %change.item,
                delta = quantity,
                occurred_at = %change.occurred_at,
                "added {quantity} of absent {}; nothing to store",
                change.item
            );
        } else if change.is_removal() {
            tracing::info!(
                item = %change.item,
                delta = quantity,
                occurred_at = %change.occurred_at,
                "added {quantity} of {}; nothing left, item deleted",
                change.item
            );
        } else {
            tracing::info!(
                item = %change.item,
                delta = quantity,
                total,
                occurred_at = %change.occurred_at,
                "added {quantity} of {}",
                change.item
            );
        }
        Ok(change)
    }

    fn apply_remove(&mut self, item: &str, quantity: i64) -> InventoryResult<StockChange> {
        let Some(previous) = self.items.get(item).copied() else {
            return Err(InventoryError::not_found(item));
        };
        self.config.policy.check(quantity)?;

        let total = previous.checked_sub(quantity).ok_or_else(|| {
            InventoryError::validation(format!(
                "quantity overflow for {item}: {previous} - {quantity}"
            ))
        })?;

        let change = self.commit(ItemName::new(item)?, -quantity, previous, total);
        if change.is_removal() {
            tracing::info!(
                item = %change.item,
                delta = change.delta,
                occurred_at = %change.occurred_at,
                "removed all of {}; item deleted",
                change.item
            );
        } else {
            tracing::info!(
                item = %change.item,
                delta = change.delta,
                total,
                occurred_at = %change.occurred_at,
                "removed {quantity} of {}; new total {total}",
                change.item
            );
        }
        Ok(change)
    }

    /// Write `total` for `item`, or delete it when `total <= 0`.
    fn commit(&mut self, item: ItemName, delta: i64, previous: i64, total: i64) -> StockChange {
        if total > 0 {
            self.items.insert(item.as_str().to_owned(), total);
        } else {
            self.items.remove(item.as_str());
        }
        StockChange::new(item, delta, previous, total)
    }
}

fn log_remove_failure(err: &InventoryError, item: &JsonValue, quantity: &JsonValue) {
    match err {
        InventoryError::NotFound(_) => tracing::error!(
            item = %item,
            quantity = %quantity,
            "attempted to remove an item that does not exist"
        ),
        InventoryError::Validation(msg) => tracing::error!(
            item = %item,
            quantity = %quantity,
            error = %msg,
            "remove rejected"
        ),
    }
}

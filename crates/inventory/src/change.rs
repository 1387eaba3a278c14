use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockkeep_core::ItemName;

/// Outcome of a successful `add` or `remove`.
///
/// `current` is the quantity left in the store, which is 0 when the entry was
/// deleted (the store never keeps zero or negative quantities).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockChange {
    pub item: ItemName,
    /// Signed amount applied to the previous quantity.
    pub delta: i64,
    pub previous: i64,
    pub current: i64,
    pub occurred_at: DateTime<Utc>,
}

impl StockChange {
    pub(crate) fn new(item: ItemName, delta: i64, previous: i64, total: i64) -> Self {
        Self {
            item,
            delta,
            previous,
            current: total.max(0),
            occurred_at: Utc::now(),
        }
    }

    /// True when the item is no longer in the store after this change.
    pub fn is_removal(&self) -> bool {
        self.current == 0
    }
}

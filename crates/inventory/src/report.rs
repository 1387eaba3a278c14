use core::fmt;

use serde::Serialize;

/// Deterministic listing of the store, sorted by item name.
///
/// Rendered with `Display`:
///
/// ```text
/// --- Items Report ---
/// apple -> 7
/// orange -> 5
/// --------------------
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryReport {
    entries: Vec<(String, i64)>,
}

impl InventoryReport {
    pub(crate) fn new<'a>(items: impl IntoIterator<Item = (&'a str, i64)>) -> Self {
        let mut entries: Vec<(String, i64)> = items
            .into_iter()
            .map(|(item, qty)| (item.to_owned(), qty))
            .collect();
        entries.sort();
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, i64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all quantities in the report.
    pub fn total_units(&self) -> i64 {
        self.entries.iter().map(|(_, qty)| qty).sum()
    }
}

impl fmt::Display for InventoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Items Report ---")?;
        if self.entries.is_empty() {
            writeln!(f, "Inventory is empty.")?;
        }
        for (item, qty) in &self.entries {
            writeln!(f, "{item} -> {qty}")?;
        }
        write!(f, "--------------------")
    }
}

#[cfg(test)]
mod tests {
    use crate::Inventory;

    #[test]
    fn renders_sorted_lines() {
        let mut inv = Inventory::new();
        inv.add("orange", 5).unwrap();
        inv.add("apple", 7).unwrap();

        let report = inv.report();

        assert_eq!(
            report.to_string(),
            "--- Items Report ---\napple -> 7\norange -> 5\n--------------------"
        );
        assert_eq!(report.total_units(), 12);
    }

    #[test]
    fn empty_store_says_so() {
        let report = Inventory::new().report();

        assert!(report.is_empty());
        assert_eq!(
            report.to_string(),
            "--- Items Report ---\nInventory is empty.\n--------------------"
        );
    }

    #[test]
    fn report_is_a_copy() {
        let mut inv = Inventory::new();
        inv.add("apple", 1).unwrap();
        let report = inv.report();

        inv.add("apple", 1).unwrap();

        assert_eq!(report.entries(), &[("apple".to_string(), 1)]);
    }
}

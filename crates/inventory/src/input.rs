//! Validation of loosely typed mutation input.
//!
//! Values are checked, never coerced: `"2"`, `2.0` and `true` are all rejected
//! as quantities.

use serde_json::Value as JsonValue;

use stockkeep_core::{InventoryError, InventoryResult, ItemName};

pub(crate) fn item_from_value(value: &JsonValue) -> InventoryResult<ItemName> {
    match value {
        JsonValue::String(name) => ItemName::new(name.as_str()),
        other => Err(InventoryError::validation(format!(
            "item must be text, got {}",
            kind(other)
        ))),
    }
}

pub(crate) fn quantity_from_value(value: &JsonValue) -> InventoryResult<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64().ok_or_else(|| {
            InventoryError::validation(format!("quantity must be a 64-bit integer, got {n}"))
        }),
        other => Err(InventoryError::validation(format!(
            "quantity must be an integer, got {}",
            kind(other)
        ))),
    }
}

fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

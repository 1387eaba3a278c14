//! Store configuration.
//!
//! Defaults can be overridden per process through environment variables:
//!
//! - `STOCKKEEP_SNAPSHOT_PATH`: snapshot file used by `load_default`/`save_default`
//! - `STOCKKEEP_LOW_STOCK_THRESHOLD`: cutoff used by `Inventory::low_stock`
//! - `STOCKKEEP_QUANTITY_POLICY`: `permissive` or `non-negative`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use stockkeep_core::{InventoryError, InventoryResult};

pub const DEFAULT_SNAPSHOT_PATH: &str = "inventory.json";
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

pub const SNAPSHOT_PATH_ENV: &str = "STOCKKEEP_SNAPSHOT_PATH";
pub const LOW_STOCK_THRESHOLD_ENV: &str = "STOCKKEEP_LOW_STOCK_THRESHOLD";
pub const QUANTITY_POLICY_ENV: &str = "STOCKKEEP_QUANTITY_POLICY";

/// Which signs of quantity `add`/`remove` accept.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuantityPolicy {
    /// Any integer amount; a negative `add` subtracts and a negative `remove` adds.
    #[default]
    Permissive,
    /// Negative amounts are rejected as validation errors.
    NonNegative,
}

impl QuantityPolicy {
    pub fn check(self, quantity: i64) -> InventoryResult<()> {
        match self {
            QuantityPolicy::NonNegative if quantity < 0 => Err(InventoryError::validation(
                format!("negative quantity {quantity} rejected by non-negative policy"),
            )),
            _ => Ok(()),
        }
    }
}

impl core::str::FromStr for QuantityPolicy {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(QuantityPolicy::Permissive),
            "non-negative" | "non_negative" | "strict" => Ok(QuantityPolicy::NonNegative),
            other => Err(InventoryError::validation(format!(
                "unknown quantity policy: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    pub snapshot_path: PathBuf,
    pub low_stock_threshold: i64,
    pub policy: QuantityPolicy,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            policy: QuantityPolicy::default(),
        }
    }
}

impl InventoryConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// Unparseable values keep the default and emit a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(SNAPSHOT_PATH_ENV).filter(|p| !p.trim().is_empty()) {
            config.snapshot_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_ENV) {
            match raw.trim().parse::<i64>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(_) => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_LOW_STOCK_THRESHOLD,
                    "{LOW_STOCK_THRESHOLD_ENV} is not an integer; using default"
                ),
            }
        }

        if let Some(raw) = lookup(QUANTITY_POLICY_ENV) {
            match raw.parse::<QuantityPolicy>() {
                Ok(policy) => config.policy = policy,
                Err(_) => tracing::warn!(
                    value = %raw,
                    "{QUANTITY_POLICY_ENV} is not a known policy; using permissive"
                ),
            }
        }

        config
    }

    pub fn with_snapshot_path(mut self, path: impl AsRef<Path>) -> Self {
        self.snapshot_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn with_policy(mut self, policy: QuantityPolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = InventoryConfig::default();
        assert_eq!(config.snapshot_path, PathBuf::from("inventory.json"));
        assert_eq!(config.low_stock_threshold, 5);
        assert_eq!(config.policy, QuantityPolicy::Permissive);
    }

    #[test]
    fn lookup_overrides_every_field() {
        let config = InventoryConfig::from_lookup(lookup_from(&[
            (SNAPSHOT_PATH_ENV, "/var/lib/stock.json"),
            (LOW_STOCK_THRESHOLD_ENV, " 12 "),
            (QUANTITY_POLICY_ENV, "non-negative"),
        ]));

        assert_eq!(config.snapshot_path, PathBuf::from("/var/lib/stock.json"));
        assert_eq!(config.low_stock_threshold, 12);
        assert_eq!(config.policy, QuantityPolicy::NonNegative);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = InventoryConfig::from_lookup(lookup_from(&[
            (SNAPSHOT_PATH_ENV, "  "),
            (LOW_STOCK_THRESHOLD_ENV, "five"),
            (QUANTITY_POLICY_ENV, "lenient"),
        ]));

        assert_eq!(config, InventoryConfig::default());
    }

    #[test]
    fn non_negative_policy_rejects_only_negatives() {
        let policy = QuantityPolicy::NonNegative;
        assert!(policy.check(0).is_ok());
        assert!(policy.check(3).is_ok());
        assert!(matches!(policy.check(-1), Err(InventoryError::Validation(_))));

        assert!(QuantityPolicy::Permissive.check(-1).is_ok());
    }

    #[test]
    fn policy_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&QuantityPolicy::NonNegative).unwrap(),
            "\"non-negative\""
        );
    }
}

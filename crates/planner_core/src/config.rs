//! Runtime knobs for the planner stores.
//!
//! # Responsibility
//! - Name the storage keys each store persists under.
//! - Carry the progress and write-failure policies.
//!
//! # Invariants
//! - `PlannerConfig::default()` reproduces the stock application behavior
//!   apart from the progress clamp, which defaults to on.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_KEY: &str = "yearly-planner-data";
pub const DEFAULT_SUBSCRIPTION_KEY: &str = "planner-subscription";
pub const DEFAULT_THEME_KEY: &str = "planner-theme";
pub const DEFAULT_FREE_TARGET_LIMIT: usize = 6;

/// How `progress` values are treated on add/update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressPolicy {
    /// Clamp into `[0, 100]` before storing.
    #[default]
    Clamp,
    /// Store what the caller supplied; display code clamps.
    Permissive,
}

/// What a failed storage write does to the mutation that caused it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteFailurePolicy {
    /// Log and report success; the in-memory change stands.
    #[default]
    Ignore,
    /// Return the storage error; the in-memory change still stands.
    Surface,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub data_key: String,
    pub subscription_key: String,
    pub theme_key: String,
    pub progress_policy: ProgressPolicy,
    pub write_failure_policy: WriteFailurePolicy,
    /// Targets a free-plan user may hold before creation is blocked.
    pub free_target_limit: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            data_key: DEFAULT_DATA_KEY.to_string(),
            subscription_key: DEFAULT_SUBSCRIPTION_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            progress_policy: ProgressPolicy::default(),
            write_failure_policy: WriteFailurePolicy::default(),
            free_target_limit: DEFAULT_FREE_TARGET_LIMIT,
        }
    }
}

impl PlannerConfig {
    /// Parses a JSON config; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::{PlannerConfig, ProgressPolicy, WriteFailurePolicy, DEFAULT_DATA_KEY};

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            PlannerConfig::from_json(r#"{"write_failure_policy":"surface"}"#).unwrap();
        assert_eq!(config.write_failure_policy, WriteFailurePolicy::Surface);
        assert_eq!(config.progress_policy, ProgressPolicy::Clamp);
        assert_eq!(config.data_key, DEFAULT_DATA_KEY);
        assert_eq!(config.free_target_limit, 6);
    }
}

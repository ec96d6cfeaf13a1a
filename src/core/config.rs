/*!
 * Simulator Configuration
 *
 * Runtime configuration for quantum and idle-advancement selection
 */

use super::errors::SchedulerError;
use super::limits::{DEFAULT_QUANTUM, ENV_IDLE_STRATEGY, ENV_QUANTUM, ENV_TRACE_JSON};
use super::types::SchedulerResult;
use crate::scheduler::IdleStrategy;
use serde::{Deserialize, Serialize};

/// Simulator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SimConfig {
    /// Round-robin quantum; ignored by the other policies
    pub quantum: i64,
    /// How simulated time advances while the CPU is idle
    pub idle_strategy: IdleStrategy,
    /// Emit JSON logs instead of compact text
    pub trace_json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            idle_strategy: IdleStrategy::Tick,
            trace_json: false,
        }
    }
}

impl SimConfig {
    /// Configuration that skips idle gaps in one step
    pub const fn fast_idle() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            idle_strategy: IdleStrategy::JumpToNextArrival,
            trace_json: false,
        }
    }

    /// Defaults overridden by `SCHEDSIM_*` environment variables
    pub fn from_env() -> SchedulerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SimConfig::from_env`] with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> SchedulerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_QUANTUM) {
            config.quantum = raw.trim().parse().map_err(|_| {
                SchedulerError::configuration(format!("{ENV_QUANTUM}='{raw}' is not an integer"))
            })?;
        }

        if let Some(raw) = lookup(ENV_IDLE_STRATEGY) {
            config.idle_strategy =
                IdleStrategy::from_str(&raw).map_err(SchedulerError::configuration)?;
        }

        if let Some(raw) = lookup(ENV_TRACE_JSON) {
            config.trace_json = matches!(raw.trim(), "1" | "true");
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config document; missing fields take their defaults
    pub fn from_json(json: &str) -> SchedulerResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SchedulerError::configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SchedulerResult<()> {
        if self.quantum <= 0 {
            return Err(SchedulerError::configuration(format!(
                "quantum must be positive, got {}",
                self.quantum
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.quantum, 4);
        assert_eq!(config.idle_strategy, IdleStrategy::Tick);
        assert!(!config.trace_json);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = SimConfig::from_lookup(lookup_from(&[
            ("SCHEDSIM_QUANTUM", "2"),
            ("SCHEDSIM_IDLE", "jump"),
            ("SCHEDSIM_TRACE_JSON", "true"),
        ]))
        .unwrap();
        assert_eq!(config.quantum, 2);
        assert_eq!(config.idle_strategy, IdleStrategy::JumpToNextArrival);
        assert!(config.trace_json);
    }

    #[test]
    fn test_lookup_rejects_bad_values() {
        assert!(SimConfig::from_lookup(lookup_from(&[("SCHEDSIM_QUANTUM", "four")])).is_err());
        assert!(SimConfig::from_lookup(lookup_from(&[("SCHEDSIM_QUANTUM", "0")])).is_err());
        assert!(SimConfig::from_lookup(lookup_from(&[("SCHEDSIM_IDLE", "sleep")])).is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let config = SimConfig::from_json(r#"{"quantum": 3}"#).unwrap();
        assert_eq!(config.quantum, 3);
        assert_eq!(config.idle_strategy, IdleStrategy::Tick);

        let config = SimConfig::from_json(r#"{"idle_strategy": "jump_to_next_arrival"}"#).unwrap();
        assert_eq!(config.idle_strategy, IdleStrategy::JumpToNextArrival);

        assert!(SimConfig::from_json(r#"{"quantum": -1}"#).is_err());
    }
}

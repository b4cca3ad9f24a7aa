//! Skirmish runner configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use tactics_core::GridMetric;

/// Configuration required to load and play a scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkirmishConfig {
    pub data_dir: PathBuf,
    pub scenario: String,
    /// Overrides both the config file and the scenario's metric.
    pub metric: Option<GridMetric>,
    /// Write logs to a file in this directory instead of stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for SkirmishConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            scenario: String::from("border_skirmish"),
            metric: None,
            log_dir: None,
        }
    }
}

impl SkirmishConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TACTICS_DATA_DIR` - Content directory (default: `data`)
    /// - `TACTICS_SCENARIO` - Scenario name under `scenarios/` (default: `border_skirmish`)
    /// - `TACTICS_METRIC` - `manhattan` or `chebyshev` (default: from content)
    /// - `TACTICS_LOG_DIR` - Directory for a log file (default: log to stderr)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("TACTICS_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(scenario) = lookup("TACTICS_SCENARIO").filter(|name| !name.is_empty()) {
            config.scenario = scenario;
        }

        config.metric = read_var(&lookup, "TACTICS_METRIC");
        config.log_dir = lookup("TACTICS_LOG_DIR").map(PathBuf::from);

        config
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = lookup(key)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!(key, value = %value, "ignoring unparsable environment variable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> SkirmishConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SkirmishConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config_from(&[]), SkirmishConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("TACTICS_DATA_DIR", "/srv/content"),
            ("TACTICS_SCENARIO", "duel"),
            ("TACTICS_METRIC", "Chebyshev"),
            ("TACTICS_LOG_DIR", "/tmp/logs"),
        ]);
        assert_eq!(config.data_dir, PathBuf::from("/srv/content"));
        assert_eq!(config.scenario, "duel");
        assert_eq!(config.metric, Some(GridMetric::Chebyshev));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
    }

    #[test]
    fn bad_metric_is_ignored() {
        let config = config_from(&[("TACTICS_METRIC", "euclid"), ("TACTICS_SCENARIO", "")]);
        assert_eq!(config.metric, None);
        assert_eq!(config.scenario, "border_skirmish");
    }
}

//! Content factory for building skirmishes from data files.

use std::path::{Path, PathBuf};

use tactics_core::CombatConfig;

use crate::loaders::{ConfigLoader, LoadResult, Scenario, ScenarioLoader, ScenarioSpec};

/// Content factory that loads all skirmish content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── scenarios/
///     ├── duel.ron
///     └── border_skirmish.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a scenario description from `scenarios/{name}.ron`.
    pub fn load_scenario_spec(&self, name: &str) -> LoadResult<ScenarioSpec> {
        let path = self.scenario_path(name);
        ScenarioLoader::load(&path)
    }

    /// Load and build a scenario with the directory's combat configuration.
    pub fn load_scenario(&self, name: &str) -> LoadResult<(CombatConfig, Scenario)> {
        let config = self.load_config()?;
        let scenario = self.load_scenario_spec(name)?.build(&config)?;
        Ok((config, scenario))
    }

    pub fn scenario_path(&self, name: &str) -> PathBuf {
        self.data_dir
            .join("scenarios")
            .join(format!("{}.ron", name))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

//! Data-driven content definitions and loaders.
//!
//! This crate reads the files a skirmish is built from:
//! - Combat configuration (data-driven via TOML)
//! - Scenarios: teams, units, loadouts, and scripted orders (data-driven via RON)
//!
//! Kind names in data files are plain strings and go through the core factory
//! parsers, so an unknown kind surfaces as `FactoryError::UnsupportedKind`.

pub mod loaders;

pub use loaders::{
    ConfigLoader, ContentFactory, ItemSpec, Order, Roster, Scenario, ScenarioLoader, ScenarioSpec,
    TeamSpec, UnitSpec,
};

//! Deterministic combat rules shared by the runtime and offline tools.
//!
//! `tactics-core` defines the canonical rules of a grid tactics skirmish: item
//! kinds and their effectiveness table, units and their inventories, the unit
//! table ([`Battlefield`]), and the [`CombatResolver`] that turns an attack
//! request into hit point changes. Nothing here logs or performs I/O; removal
//! of dead units and notification belong to the runtime.
pub mod battlefield;
pub mod catalog;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod factory;
pub mod item;
pub mod state;
pub mod unit;

pub use battlefield::{Battlefield, PlacementError};
pub use catalog::{Effectiveness, ItemCategory, ItemKind, effectiveness_of};
pub use combat::{
    AttackError, CombatOutcome, CombatResolver, ExchangeKind, Participant, ResolutionPhase,
};
pub use config::CombatConfig;
pub use env::{DistanceOracle, GridMetric};
pub use error::{ErrorSeverity, GameError};
pub use factory::{FactoryError, UnitFactory, parse_item_kind, parse_unit_kind};
pub use item::{CombatItem, ItemFactory};
pub use state::{ItemId, Position, TeamId, UnitId};
pub use unit::{
    CapacityError, CombatProfile, EquipError, EquipMask, InventoryError, MoveError, Unit,
    UnitKind, UnitRank, UnitStats,
};

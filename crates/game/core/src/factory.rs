//! Unit construction.
//!
//! Units are built here before a match starts: the factory allocates ids and
//! loads starting inventories. Item ids come from [`ItemFactory`](crate::item::ItemFactory).

use crate::catalog::ItemKind;
use crate::error::{ErrorSeverity, GameError};
use crate::item::CombatItem;
use crate::state::{TeamId, UnitId};
use crate::unit::{Unit, UnitKind, UnitStats};

/// Errors from building units and items out of external descriptions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FactoryError {
    /// A unit or item kind name did not match any known kind.
    #[error("unsupported kind '{0}'")]
    UnsupportedKind(String),

    #[error("{kind} starts with {given} items but carries at most {capacity}")]
    InventoryFull {
        kind: UnitKind,
        given: usize,
        capacity: usize,
    },
}

impl GameError for FactoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedKind(_) => "FACTORY_UNSUPPORTED_KIND",
            Self::InventoryFull { .. } => "FACTORY_INVENTORY_FULL",
        }
    }
}

pub fn parse_unit_kind(name: &str) -> Result<UnitKind, FactoryError> {
    name.parse()
        .map_err(|_| FactoryError::UnsupportedKind(name.to_owned()))
}

pub fn parse_item_kind(name: &str) -> Result<ItemKind, FactoryError> {
    name.parse()
        .map_err(|_| FactoryError::UnsupportedKind(name.to_owned()))
}

/// Sequential unit id allocator.
#[derive(Clone, Debug, Default)]
pub struct UnitFactory {
    next_id: u32,
}

impl UnitFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(next_id: u32) -> Self {
        Self { next_id }
    }

    /// Builds a unit carrying `items` in the given order. Nothing is equipped.
    ///
    /// # Errors
    ///
    /// [`FactoryError::InventoryFull`] if more items are given than the stats
    /// allow; no id is consumed in that case.
    pub fn create_unit(
        &mut self,
        kind: UnitKind,
        team: TeamId,
        stats: UnitStats,
        items: Vec<CombatItem>,
    ) -> Result<Unit, FactoryError> {
        if items.len() > stats.capacity {
            return Err(FactoryError::InventoryFull {
                kind,
                given: items.len(),
                capacity: stats.capacity,
            });
        }

        let id = UnitId(self.next_id);
        self.next_id += 1;
        let mut unit = Unit::new(id, kind, team, stats);
        for item in items {
            unit.add_item(item).map_err(|err| FactoryError::InventoryFull {
                kind,
                given: err.capacity + 1,
                capacity: err.capacity,
            })?;
        }
        Ok(unit)
    }
}

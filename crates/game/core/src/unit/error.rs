//! Errors raised by equip, inventory, and movement operations.
//!
//! Every check runs before any mutation, so a failed request leaves both
//! units exactly as they were.

use crate::catalog::ItemKind;
use crate::error::{ErrorSeverity, GameError};
use crate::item::CombatItem;
use crate::state::{ItemId, Position, UnitId};

use super::UnitKind;

/// Errors from equipping an item.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EquipError {
    #[error("unit {0} not found")]
    UnitNotFound(UnitId),

    #[error("unit {unit} does not carry {item}")]
    ItemNotOwned { unit: UnitId, item: ItemId },

    #[error("{archetype} {unit} cannot equip a {kind}")]
    KindRejected {
        unit: UnitId,
        archetype: UnitKind,
        kind: ItemKind,
    },
}

impl GameError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnitNotFound(_) => "EQUIP_UNIT_NOT_FOUND",
            Self::ItemNotOwned { .. } => "EQUIP_ITEM_NOT_OWNED",
            Self::KindRejected { .. } => "EQUIP_KIND_REJECTED",
        }
    }
}

/// Errors from moving items between units.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("unit {0} not found")]
    UnitNotFound(UnitId),

    #[error("unit {0} cannot trade with itself")]
    SameUnit(UnitId),

    #[error("unit {unit} cannot carry more than {capacity} items")]
    InventoryFull { unit: UnitId, capacity: usize },

    #[error("unit {unit} does not carry {item}")]
    ItemNotOwned { unit: UnitId, item: ItemId },

    #[error("units {from} and {to} are {distance} cells apart, trading needs adjacency")]
    NotAdjacent {
        from: UnitId,
        to: UnitId,
        distance: u32,
    },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InventoryFull { .. } | Self::NotAdjacent { .. } => ErrorSeverity::Recoverable,
            Self::UnitNotFound(_) | Self::SameUnit(_) | Self::ItemNotOwned { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnitNotFound(_) => "INVENTORY_UNIT_NOT_FOUND",
            Self::SameUnit(_) => "INVENTORY_SAME_UNIT",
            Self::InventoryFull { .. } => "INVENTORY_FULL",
            Self::ItemNotOwned { .. } => "INVENTORY_ITEM_NOT_OWNED",
            Self::NotAdjacent { .. } => "INVENTORY_NOT_ADJACENT",
        }
    }
}

/// Returned by [`Unit::add_item`](super::Unit::add_item) when every slot is
/// taken. The rejected item is handed back to the caller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unit {unit} cannot carry more than {capacity} items")]
pub struct CapacityError {
    pub unit: UnitId,
    pub capacity: usize,
    pub item: CombatItem,
}

impl CapacityError {
    pub fn into_item(self) -> CombatItem {
        self.item
    }
}

impl From<CapacityError> for InventoryError {
    fn from(err: CapacityError) -> Self {
        InventoryError::InventoryFull {
            unit: err.unit,
            capacity: err.capacity,
        }
    }
}

/// Errors from moving a unit across the board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("unit {0} not found")]
    UnitNotFound(UnitId),

    #[error("unit {unit} moves {movement} cells, destination is {distance} away")]
    OutOfMovement {
        unit: UnitId,
        distance: u32,
        movement: u32,
    },

    #[error("position {0} is occupied")]
    Occupied(Position),
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnitNotFound(_) => ErrorSeverity::Validation,
            Self::OutOfMovement { .. } | Self::Occupied(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnitNotFound(_) => "MOVE_UNIT_NOT_FOUND",
            Self::OutOfMovement { .. } => "MOVE_OUT_OF_MOVEMENT",
            Self::Occupied(_) => "MOVE_OCCUPIED",
        }
    }
}

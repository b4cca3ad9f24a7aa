//! Unit table for a match.
//!
//! The battlefield owns every unit in play and the distance collaborator used
//! to measure them. Items refer to units by [`UnitId`]; this table is where
//! those handles are resolved. Units are kept sorted by id so lookups are a
//! binary search and two distinct units can be borrowed mutably at once.

use std::fmt;

use crate::env::{DistanceOracle, GridMetric};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{ItemId, Position, UnitId};
use crate::unit::{EquipError, InventoryError, MoveError, Unit};

/// Errors from placing a unit on the battlefield.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("unit {0} is already on the battlefield")]
    DuplicateUnit(UnitId),

    #[error("position {0} is occupied")]
    Occupied(Position),
}

impl GameError for PlacementError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateUnit(_) => "PLACEMENT_DUPLICATE_UNIT",
            Self::Occupied(_) => "PLACEMENT_OCCUPIED",
        }
    }
}

pub struct Battlefield {
    units: Vec<Unit>,
    map: Box<dyn DistanceOracle>,
}

impl Battlefield {
    pub fn new(metric: GridMetric) -> Self {
        Self::with_oracle(metric)
    }

    pub fn with_oracle(map: impl DistanceOracle + 'static) -> Self {
        Self {
            units: Vec::new(),
            map: Box::new(map),
        }
    }

    pub fn map(&self) -> &dyn DistanceOracle {
        self.map.as_ref()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.index_of(id).map(|index| &self.units[index])
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.index_of(id).map(|index| &mut self.units[index])
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.location() == position)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.unit_at(position).is_some()
    }

    pub fn distance(&self, a: UnitId, b: UnitId) -> Option<u32> {
        let a = self.unit(a)?;
        let b = self.unit(b)?;
        Some(a.distance_to(b, self.map()))
    }

    /// Places a unit on its current location.
    pub fn insert(&mut self, unit: Unit) -> Result<(), PlacementError> {
        let index = match self.units.binary_search_by_key(&unit.id(), Unit::id) {
            Ok(_) => return Err(PlacementError::DuplicateUnit(unit.id())),
            Err(index) => index,
        };
        if self.is_occupied(unit.location()) {
            return Err(PlacementError::Occupied(unit.location()));
        }
        self.units.insert(index, unit);
        Ok(())
    }

    /// Takes a unit out of play, freeing its cell.
    pub fn remove(&mut self, id: UnitId) -> Option<Unit> {
        self.index_of(id).map(|index| self.units.remove(index))
    }

    /// Borrows two distinct units mutably.
    ///
    /// Returns `None` if either id is unknown or both ids are the same. The
    /// split always happens at the higher index, so the borrow order does not
    /// depend on argument order.
    pub fn pair_mut(&mut self, a: UnitId, b: UnitId) -> Option<(&mut Unit, &mut Unit)> {
        self.pair_with_map_mut(a, b)
            .map(|(_, first, second)| (first, second))
    }

    /// Splits the table into the map and two distinct units.
    pub(crate) fn pair_with_map_mut(
        &mut self,
        a: UnitId,
        b: UnitId,
    ) -> Option<(&dyn DistanceOracle, &mut Unit, &mut Unit)> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        if i == j {
            return None;
        }
        let map = self.map.as_ref();
        let (first, second) = if i < j {
            let (head, tail) = self.units.split_at_mut(j);
            (&mut head[i], &mut tail[0])
        } else {
            let (head, tail) = self.units.split_at_mut(i);
            (&mut tail[0], &mut head[j])
        };
        Some((map, first, second))
    }

    fn index_of(&self, id: UnitId) -> Option<usize> {
        self.units.binary_search_by_key(&id, Unit::id).ok()
    }

    // ===== non-combat operations =====

    pub fn equip(&mut self, unit: UnitId, item: ItemId) -> Result<(), EquipError> {
        self.unit_mut(unit)
            .ok_or(EquipError::UnitNotFound(unit))?
            .equip(item)
    }

    /// Hands an item from `giver` to an adjacent `receiver`.
    ///
    /// # Errors
    ///
    /// - [`InventoryError::SameUnit`] when both ids match
    /// - [`InventoryError::ItemNotOwned`] when the giver does not carry the item
    /// - [`InventoryError::InventoryFull`] when the receiver has no free slot
    /// - [`InventoryError::NotAdjacent`] unless the units are one cell apart
    pub fn give_item(
        &mut self,
        giver: UnitId,
        receiver: UnitId,
        item: ItemId,
    ) -> Result<(), InventoryError> {
        let (map, from, to) = self.trading_pair(giver, receiver)?;
        if !from.has_item(item) {
            return Err(InventoryError::ItemNotOwned { unit: giver, item });
        }
        if to.is_inventory_full() {
            return Err(InventoryError::InventoryFull {
                unit: receiver,
                capacity: to.capacity(),
            });
        }
        ensure_adjacent(map, from, to)?;

        let taken = from.remove_item(item)?;
        if let Err(rejected) = to.add_item(taken) {
            let err = InventoryError::InventoryFull {
                unit: rejected.unit,
                capacity: rejected.capacity,
            };
            // Capacity was checked above; never drop the item.
            let _ = from.add_item(rejected.into_item());
            return Err(err);
        }
        Ok(())
    }

    /// Swaps one item of each unit; each incoming item takes the outgoing
    /// item's slot. Exchanged items arrive unequipped.
    pub fn exchange_items(
        &mut self,
        first: UnitId,
        first_item: ItemId,
        second: UnitId,
        second_item: ItemId,
    ) -> Result<(), InventoryError> {
        let (map, a, b) = self.trading_pair(first, second)?;
        let outgoing = a.item(first_item).cloned().ok_or(InventoryError::ItemNotOwned {
            unit: first,
            item: first_item,
        })?;
        let incoming = b.item(second_item).cloned().ok_or(InventoryError::ItemNotOwned {
            unit: second,
            item: second_item,
        })?;
        ensure_adjacent(map, a, b)?;

        a.swap_item(first_item, incoming)?;
        b.swap_item(second_item, outgoing)?;
        Ok(())
    }

    /// Moves a unit to a free cell within its movement range.
    pub fn move_unit(&mut self, id: UnitId, target: Position) -> Result<(), MoveError> {
        let occupied = self.is_occupied(target);
        let index = self.index_of(id).ok_or(MoveError::UnitNotFound(id))?;
        let map = self.map.as_ref();
        self.units[index].move_to(target, map, occupied)
    }

    fn trading_pair(
        &mut self,
        a: UnitId,
        b: UnitId,
    ) -> Result<(&dyn DistanceOracle, &mut Unit, &mut Unit), InventoryError> {
        if a == b {
            return Err(InventoryError::SameUnit(a));
        }
        if !self.contains(a) {
            return Err(InventoryError::UnitNotFound(a));
        }
        if !self.contains(b) {
            return Err(InventoryError::UnitNotFound(b));
        }
        self.pair_with_map_mut(a, b)
            .ok_or(InventoryError::UnitNotFound(b))
    }
}

fn ensure_adjacent(map: &dyn DistanceOracle, a: &Unit, b: &Unit) -> Result<(), InventoryError> {
    if map.is_adjacent(a.location(), b.location()) {
        Ok(())
    } else {
        Err(InventoryError::NotAdjacent {
            from: a.id(),
            to: b.id(),
            distance: a.distance_to(b, map),
        })
    }
}

impl Default for Battlefield {
    fn default() -> Self {
        Self::new(GridMetric::default())
    }
}

impl fmt::Debug for Battlefield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Battlefield")
            .field("units", &self.units)
            .finish_non_exhaustive()
    }
}

//! Units: hit points, inventory, equipped item, and board location.
//!
//! # Invariants
//!
//! - `equipped`, if set, names an item in `inventory`
//! - `inventory.len() <= capacity`
//! - an equipped item's owner handle is this unit; every other carried item
//!   has no owner
mod error;
mod profile;

pub use error::{CapacityError, EquipError, InventoryError, MoveError};
pub use profile::{CombatProfile, EquipMask, UnitKind, UnitRank};

use crate::catalog::ItemKind;
use crate::env::DistanceOracle;
use crate::item::CombatItem;
use crate::state::{ItemId, Position, TeamId, UnitId};

/// Starting statistics for a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitStats {
    pub hit_points: i32,
    pub movement: u32,
    pub location: Position,
    pub capacity: usize,
}

impl UnitStats {
    /// Classic carrying limit for most archetypes.
    pub const DEFAULT_CAPACITY: usize = 3;

    pub fn new(hit_points: i32, movement: u32, location: Position) -> Self {
        Self {
            hit_points,
            movement,
            location,
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    id: UnitId,
    kind: UnitKind,
    team: TeamId,
    current_hit_points: i32,
    max_hit_points: i32,
    movement: u32,
    location: Position,
    capacity: usize,
    inventory: Vec<CombatItem>,
    equipped: Option<ItemId>,
}

impl Unit {
    /// Creates a unit at full health with an empty inventory.
    pub fn new(id: UnitId, kind: UnitKind, team: TeamId, stats: UnitStats) -> Self {
        Self {
            id,
            kind,
            team,
            current_hit_points: stats.hit_points,
            max_hit_points: stats.hit_points,
            movement: stats.movement,
            location: stats.location,
            capacity: stats.capacity,
            inventory: Vec::with_capacity(stats.capacity),
            equipped: None,
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn team(&self) -> TeamId {
        self.team
    }

    pub fn profile(&self) -> CombatProfile {
        self.kind.profile()
    }

    pub fn rank(&self) -> UnitRank {
        self.profile().rank
    }

    pub fn hit_points(&self) -> i32 {
        self.current_hit_points
    }

    pub fn max_hit_points(&self) -> i32 {
        self.max_hit_points
    }

    pub fn movement(&self) -> u32 {
        self.movement
    }

    pub fn location(&self) -> Position {
        self.location
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_alive(&self) -> bool {
        self.current_hit_points > 0
    }

    pub fn is_ally_of(&self, other: &Unit) -> bool {
        self.team == other.team
    }

    // ===== hit points =====

    /// Subtracts `amount` from current hit points.
    ///
    /// Never clamps: hit points may go negative (death is checked by the
    /// caller) and a negative amount raises them, possibly past the maximum.
    pub fn receive_damage(&mut self, amount: i32) {
        self.current_hit_points = self.current_hit_points.saturating_sub(amount);
    }

    /// Adds `amount` to current hit points, capped at the maximum.
    pub fn receive_recovery(&mut self, amount: i32) {
        if self.current_hit_points >= self.max_hit_points {
            return;
        }
        self.current_hit_points = self
            .current_hit_points
            .saturating_add(amount)
            .min(self.max_hit_points);
    }

    // ===== range =====

    pub fn distance_to<D>(&self, other: &Unit, map: &D) -> u32
    where
        D: DistanceOracle + ?Sized,
    {
        map.distance(self.location, other.location)
    }

    /// True iff the equipped item reaches `other`. No equipped item never reaches.
    pub fn is_in_range<D>(&self, other: &Unit, map: &D) -> bool
    where
        D: DistanceOracle + ?Sized,
    {
        self.equipped_item()
            .is_some_and(|item| item.reaches(self.distance_to(other, map)))
    }

    // ===== inventory =====

    pub fn items(&self) -> &[CombatItem] {
        &self.inventory
    }

    pub fn item(&self, id: ItemId) -> Option<&CombatItem> {
        self.inventory.iter().find(|item| item.id() == id)
    }

    pub fn has_item(&self, id: ItemId) -> bool {
        self.item(id).is_some()
    }

    pub fn is_inventory_full(&self) -> bool {
        self.inventory.len() >= self.capacity
    }

    /// Appends an item to the end of the inventory.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`], carrying the item back, if no slot is free.
    pub fn add_item(&mut self, mut item: CombatItem) -> Result<(), CapacityError> {
        if self.is_inventory_full() {
            return Err(CapacityError {
                unit: self.id,
                capacity: self.capacity,
                item,
            });
        }
        item.set_owner(None);
        self.inventory.push(item);
        Ok(())
    }

    /// Takes an item out of the inventory, unequipping it first if needed.
    ///
    /// Remaining items keep their relative order.
    pub fn remove_item(&mut self, id: ItemId) -> Result<CombatItem, InventoryError> {
        let index = self.item_index(id).ok_or(InventoryError::ItemNotOwned {
            unit: self.id,
            item: id,
        })?;
        if self.equipped == Some(id) {
            self.equipped = None;
        }
        let mut item = self.inventory.remove(index);
        item.set_owner(None);
        Ok(item)
    }

    /// Puts `item` in the slot of `replaced`, returning the replaced item.
    pub(crate) fn swap_item(
        &mut self,
        replaced: ItemId,
        mut item: CombatItem,
    ) -> Result<CombatItem, InventoryError> {
        let index = self.item_index(replaced).ok_or(InventoryError::ItemNotOwned {
            unit: self.id,
            item: replaced,
        })?;
        if self.equipped == Some(replaced) {
            self.equipped = None;
        }
        item.set_owner(None);
        let mut old = std::mem::replace(&mut self.inventory[index], item);
        old.set_owner(None);
        Ok(old)
    }

    fn item_index(&self, id: ItemId) -> Option<usize> {
        self.inventory.iter().position(|item| item.id() == id)
    }

    // ===== equipment =====

    pub fn equipped_item(&self) -> Option<&CombatItem> {
        self.equipped.and_then(|id| self.item(id))
    }

    pub fn equipped_id(&self) -> Option<ItemId> {
        self.equipped
    }

    pub fn can_equip(&self, kind: ItemKind) -> bool {
        self.profile().equips.accepts(kind)
    }

    /// Equips a carried item, replacing any previously equipped one.
    ///
    /// # Errors
    ///
    /// - [`EquipError::ItemNotOwned`] if the item is not in this inventory
    /// - [`EquipError::KindRejected`] if the archetype cannot wield its kind
    pub fn equip(&mut self, id: ItemId) -> Result<(), EquipError> {
        let kind = self
            .item(id)
            .map(CombatItem::kind)
            .ok_or(EquipError::ItemNotOwned {
                unit: self.id,
                item: id,
            })?;
        if !self.can_equip(kind) {
            return Err(EquipError::KindRejected {
                unit: self.id,
                archetype: self.kind,
                kind,
            });
        }

        self.unequip();
        let owner = self.id;
        if let Some(index) = self.item_index(id) {
            self.inventory[index].set_owner(Some(owner));
        }
        self.equipped = Some(id);
        Ok(())
    }

    /// Unequips the current item, returning its id if one was equipped.
    pub fn unequip(&mut self) -> Option<ItemId> {
        let id = self.equipped.take()?;
        if let Some(index) = self.item_index(id) {
            self.inventory[index].set_owner(None);
        }
        Some(id)
    }

    // ===== movement =====

    /// Moves to `target` if it lies within movement range and is free.
    pub fn move_to<D>(&mut self, target: Position, map: &D, occupied: bool) -> Result<(), MoveError>
    where
        D: DistanceOracle + ?Sized,
    {
        let distance = map.distance(self.location, target);
        if distance > self.movement {
            return Err(MoveError::OutOfMovement {
                unit: self.id,
                distance,
                movement: self.movement,
            });
        }
        if occupied {
            return Err(MoveError::Occupied(target));
        }
        self.location = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::GridMetric;
    use crate::item::ItemFactory;

    fn unit(kind: UnitKind, hp: i32, at: Position) -> Unit {
        Unit::new(UnitId(1), kind, TeamId(0), UnitStats::new(hp, 3, at))
    }

    #[test]
    fn damage_is_not_clamped() {
        let mut target = unit(UnitKind::Fighter, 50, Position::ORIGIN);
        target.receive_damage(60);
        assert_eq!(target.hit_points(), -10);
        assert!(!target.is_alive());

        let mut healed = unit(UnitKind::Fighter, 50, Position::ORIGIN);
        healed.receive_damage(-10);
        assert_eq!(healed.hit_points(), 60);
    }

    #[test]
    fn recovery_caps_at_maximum() {
        let mut target = unit(UnitKind::Fighter, 50, Position::ORIGIN);
        target.receive_damage(5);
        target.receive_recovery(15);
        assert_eq!(target.hit_points(), 50);

        target.receive_damage(20);
        target.receive_recovery(15);
        assert_eq!(target.hit_points(), 45);
    }

    #[test]
    fn recovery_never_lowers_overhealed_units() {
        let mut target = unit(UnitKind::Fighter, 50, Position::ORIGIN);
        target.receive_damage(-10);
        target.receive_recovery(5);
        assert_eq!(target.hit_points(), 60);
    }

    #[test]
    fn zero_hit_points_is_dead() {
        let mut target = unit(UnitKind::Fighter, 10, Position::ORIGIN);
        target.receive_damage(10);
        assert_eq!(target.hit_points(), 0);
        assert!(!target.is_alive());
    }

    #[test]
    fn range_follows_equipped_item() {
        let mut items = ItemFactory::new();
        let mut archer = unit(UnitKind::Archer, 40, Position::ORIGIN);
        let bow = items.create_item(ItemKind::Bow, "Bow", 8, 2, 3);
        let bow_id = bow.id();
        archer.add_item(bow).unwrap();

        let near = unit(UnitKind::Fighter, 40, Position::new(1, 0));
        let mid = unit(UnitKind::Fighter, 40, Position::new(1, 1));
        let far = unit(UnitKind::Fighter, 40, Position::new(2, 2));
        let metric = GridMetric::Manhattan;

        // Nothing equipped yet
        assert!(!archer.is_in_range(&mid, &metric));

        archer.equip(bow_id).unwrap();
        assert!(!archer.is_in_range(&near, &metric));
        assert!(archer.is_in_range(&mid, &metric));
        assert!(!archer.is_in_range(&far, &metric));
        assert!(archer.is_in_range(&far, &GridMetric::Chebyshev));
    }

    #[test]
    fn equip_sets_owner_handle() {
        let mut items = ItemFactory::new();
        let mut fighter = unit(UnitKind::Fighter, 40, Position::ORIGIN);
        let axe = items.create_item(ItemKind::Axe, "Axe", 10, 1, 1);
        let axe_id = axe.id();
        fighter.add_item(axe).unwrap();

        fighter.equip(axe_id).unwrap();
        assert_eq!(fighter.equipped_id(), Some(axe_id));
        assert_eq!(fighter.equipped_item().unwrap().owner(), Some(UnitId(1)));

        assert_eq!(fighter.unequip(), Some(axe_id));
        assert_eq!(fighter.item(axe_id).unwrap().owner(), None);
        assert_eq!(fighter.unequip(), None);
    }

    #[test]
    fn equip_replaces_previous_item() {
        let mut items = ItemFactory::new();
        let mut sorcerer = unit(UnitKind::Sorcerer, 40, Position::ORIGIN);
        let light = items.create_item(ItemKind::Light, "Light", 10, 1, 2);
        let soul = items.create_item(ItemKind::Soul, "Soul", 10, 1, 2);
        let (light_id, soul_id) = (light.id(), soul.id());
        sorcerer.add_item(light).unwrap();
        sorcerer.add_item(soul).unwrap();

        sorcerer.equip(light_id).unwrap();
        sorcerer.equip(soul_id).unwrap();
        assert_eq!(sorcerer.equipped_id(), Some(soul_id));
        assert_eq!(sorcerer.item(light_id).unwrap().owner(), None);
        assert_eq!(sorcerer.item(soul_id).unwrap().owner(), Some(UnitId(1)));
    }

    #[test]
    fn failed_equip_changes_nothing() {
        let mut items = ItemFactory::new();
        let mut sorcerer = unit(UnitKind::Sorcerer, 40, Position::ORIGIN);
        let dark = items.create_item(ItemKind::Darkness, "Dark", 10, 1, 2);
        let bow = items.create_item(ItemKind::Bow, "Bow", 10, 2, 3);
        let (dark_id, bow_id) = (dark.id(), bow.id());
        sorcerer.add_item(dark).unwrap();
        sorcerer.add_item(bow).unwrap();
        sorcerer.equip(dark_id).unwrap();
        let before = sorcerer.clone();

        let rejected = sorcerer.equip(bow_id);
        assert!(matches!(
            rejected,
            Err(EquipError::KindRejected {
                kind: ItemKind::Bow,
                archetype: UnitKind::Sorcerer,
                ..
            })
        ));
        assert_eq!(sorcerer, before);

        let missing = sorcerer.equip(ItemId(99));
        assert!(matches!(missing, Err(EquipError::ItemNotOwned { .. })));
        assert_eq!(sorcerer, before);
    }

    #[test]
    fn capacity_is_enforced_and_item_returned() {
        let mut items = ItemFactory::new();
        let mut fighter = Unit::new(
            UnitId(3),
            UnitKind::Fighter,
            TeamId(0),
            UnitStats::new(40, 3, Position::ORIGIN).with_capacity(1),
        );
        fighter
            .add_item(items.create_item(ItemKind::Axe, "Axe", 10, 1, 1))
            .unwrap();
        assert!(fighter.is_inventory_full());

        let spare = items.create_item(ItemKind::Axe, "Spare", 7, 1, 1);
        let err = fighter.add_item(spare).unwrap_err();
        assert_eq!(err.capacity, 1);
        assert_eq!(err.into_item().name(), "Spare");
        assert_eq!(fighter.items().len(), 1);
    }

    #[test]
    fn removing_equipped_item_clears_equipment() {
        let mut items = ItemFactory::new();
        let mut fighter = unit(UnitKind::Fighter, 40, Position::ORIGIN);
        let first = items.create_item(ItemKind::Axe, "First", 10, 1, 1);
        let second = items.create_item(ItemKind::Axe, "Second", 10, 1, 1);
        let third = items.create_item(ItemKind::Axe, "Third", 10, 1, 1);
        let (first_id, second_id) = (first.id(), second.id());
        for item in [first, second, third] {
            fighter.add_item(item).unwrap();
        }
        fighter.equip(second_id).unwrap();

        let removed = fighter.remove_item(second_id).unwrap();
        assert_eq!(removed.owner(), None);
        assert_eq!(fighter.equipped_id(), None);
        let names: Vec<_> = fighter.items().iter().map(CombatItem::name).collect();
        assert_eq!(names, ["First", "Third"]);

        fighter.equip(first_id).unwrap();
        assert!(matches!(
            fighter.remove_item(second_id),
            Err(InventoryError::ItemNotOwned { .. })
        ));
        assert_eq!(fighter.equipped_id(), Some(first_id));
    }

    #[test]
    fn movement_respects_range_and_occupancy() {
        let metric = GridMetric::Manhattan;
        let mut fighter = unit(UnitKind::Fighter, 40, Position::ORIGIN);

        assert!(matches!(
            fighter.move_to(Position::new(2, 2), &metric, false),
            Err(MoveError::OutOfMovement { distance: 4, movement: 3, .. })
        ));
        assert_eq!(
            fighter.move_to(Position::new(1, 1), &metric, true),
            Err(MoveError::Occupied(Position::new(1, 1)))
        );
        assert_eq!(fighter.location(), Position::ORIGIN);

        fighter.move_to(Position::new(1, 2), &metric, false).unwrap();
        assert_eq!(fighter.location(), Position::new(1, 2));
    }
}

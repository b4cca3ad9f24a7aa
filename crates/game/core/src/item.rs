//! Equippable items.

use crate::catalog::{Effectiveness, ItemKind, effectiveness_of};
use crate::config::CombatConfig;
use crate::state::{ItemId, UnitId};

/// An item a unit can carry and equip.
///
/// Power and ranges never change after construction. The owner is a handle to
/// the unit that currently has the item equipped; it is informational only and
/// never keeps the unit alive.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatItem {
    id: ItemId,
    kind: ItemKind,
    name: String,
    power: u32,
    min_range: u32,
    max_range: u32,
    owner: Option<UnitId>,
}

impl CombatItem {
    /// Creates an item, normalising ranges so that `1 <= min_range <= max_range`.
    pub fn new(
        id: ItemId,
        kind: ItemKind,
        name: impl Into<String>,
        power: u32,
        min_range: u32,
        max_range: u32,
    ) -> Self {
        let min_range = min_range.max(1);
        Self {
            id,
            kind,
            name: name.into(),
            power,
            min_range,
            max_range: max_range.max(min_range),
            owner: None,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn min_range(&self) -> u32 {
        self.min_range
    }

    pub fn max_range(&self) -> u32 {
        self.max_range
    }

    pub fn owner(&self) -> Option<UnitId> {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: Option<UnitId>) {
        self.owner = owner;
    }

    /// Returns true when `distance` lies within `min_range..=max_range`.
    pub fn reaches(&self, distance: u32) -> bool {
        (self.min_range..=self.max_range).contains(&distance)
    }

    /// Classifies this item striking at `other`.
    pub fn effectiveness_against(&self, other: &CombatItem) -> Effectiveness {
        effectiveness_of(self.kind, other.kind)
    }

    /// Damage this item deals for the given classification.
    ///
    /// # Formula
    ///
    /// ```text
    /// Normal    => power
    /// Weak      => floor(power * weak_numerator / weak_denominator)
    /// Resistant => power - resistant_penalty   (may be negative)
    /// ```
    pub fn strike_damage(&self, effectiveness: Effectiveness, config: &CombatConfig) -> i32 {
        let power = saturate(u64::from(self.power));
        match effectiveness {
            Effectiveness::Normal => power,
            Effectiveness::Weak => {
                let scaled = u64::from(self.power) * u64::from(config.weak_numerator)
                    / u64::from(config.weak_denominator.max(1));
                saturate(scaled)
            }
            Effectiveness::Resistant => {
                let reduced = power.saturating_sub(config.resistant_penalty);
                if config.clamp_negative_damage {
                    reduced.max(0)
                } else {
                    reduced
                }
            }
        }
    }

    /// Hit points restored when this item is used for recovery.
    pub fn recovery_amount(&self) -> i32 {
        saturate(u64::from(self.power))
    }
}

fn saturate(value: u64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Sequential item id allocator.
///
/// Ids are never reused within a match.
#[derive(Clone, Debug, Default)]
pub struct ItemFactory {
    next_id: u32,
}

impl ItemFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts allocating at `next_id`, for callers that load pre-numbered content.
    pub fn starting_at(next_id: u32) -> Self {
        Self { next_id }
    }

    pub fn create_item(
        &mut self,
        kind: ItemKind,
        name: impl Into<String>,
        power: u32,
        min_range: u32,
        max_range: u32,
    ) -> CombatItem {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        CombatItem::new(id, kind, name, power, min_range, max_range)
    }
}

//! Unit archetypes and the combat profile each one carries.
//!
//! A unit's archetype decides which item kinds it may equip and whether losing
//! it ends its tactician's match. The profile is a plain value chosen at
//! construction; there is no per-archetype behaviour beyond it.

use bitflags::bitflags;

use crate::catalog::ItemKind;

bitflags! {
    /// Set of item kinds a unit is able to wield.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EquipMask: u8 {
        const SWORD    = 1 << 0;
        const AXE      = 1 << 1;
        const SPEAR    = 1 << 2;
        const BOW      = 1 << 3;
        const LIGHT    = 1 << 4;
        const DARKNESS = 1 << 5;
        const SOUL     = 1 << 6;
        const STAFF    = 1 << 7;

        const MAGIC = Self::LIGHT.bits() | Self::DARKNESS.bits() | Self::SOUL.bits();
    }
}

impl EquipMask {
    pub const fn of(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Sword => Self::SWORD,
            ItemKind::Axe => Self::AXE,
            ItemKind::Spear => Self::SPEAR,
            ItemKind::Bow => Self::BOW,
            ItemKind::Light => Self::LIGHT,
            ItemKind::Darkness => Self::DARKNESS,
            ItemKind::Soul => Self::SOUL,
            ItemKind::Staff => Self::STAFF,
        }
    }

    pub fn accepts(self, kind: ItemKind) -> bool {
        self.contains(Self::of(kind))
    }
}

/// Whether losing the unit defeats its tactician.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitRank {
    #[default]
    Normal,
    Special,
}

/// Combat capabilities attached to a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CombatProfile {
    pub equips: EquipMask,
    pub rank: UnitRank,
}

/// Unit archetypes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UnitKind {
    /// Pack animal: carries items, never equips them.
    Alpaca,
    Archer,
    Cleric,
    Fighter,
    /// Leader unit; its death defeats the owning tactician.
    Hero,
    Sorcerer,
    SwordMaster,
}

impl UnitKind {
    pub const fn profile(self) -> CombatProfile {
        let (equips, rank) = match self {
            UnitKind::Alpaca => (EquipMask::empty(), UnitRank::Normal),
            UnitKind::Archer => (EquipMask::BOW, UnitRank::Normal),
            UnitKind::Cleric => (EquipMask::STAFF, UnitRank::Normal),
            UnitKind::Fighter => (EquipMask::AXE, UnitRank::Normal),
            UnitKind::Hero => (EquipMask::SPEAR, UnitRank::Special),
            UnitKind::Sorcerer => (EquipMask::MAGIC, UnitRank::Normal),
            UnitKind::SwordMaster => (EquipMask::SWORD, UnitRank::Normal),
        };
        CombatProfile { equips, rank }
    }
}

//! Events emitted while resolving combat.

use tactics_core::{Position, TeamId, Unit, UnitId, UnitKind, UnitRank};

/// High-level occurrences produced by a resolved request, in the order they
/// happened: the attacker's hit, the counter, then removals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombatEvent {
    /// A strike landed. A negative amount raised the unit's hit points.
    UnitDamaged {
        unit: UnitId,
        amount: i32,
        hp_after: i32,
        threshold: HealthThreshold,
    },

    /// A staff restored hit points.
    UnitHealed {
        unit: UnitId,
        amount: i32,
        hp_after: i32,
    },

    /// A unit with no hit points left was taken off the battlefield.
    UnitRemoved {
        unit: UnitId,
        team: TeamId,
        kind: UnitKind,
        rank: UnitRank,
        position: Position,
    },
}

impl CombatEvent {
    pub(crate) fn damaged(unit: &Unit, amount: i32) -> Self {
        Self::UnitDamaged {
            unit: unit.id(),
            amount,
            hp_after: unit.hit_points(),
            threshold: HealthThreshold::from_hp(unit.hit_points(), unit.max_hit_points()),
        }
    }

    pub(crate) fn healed(unit: &Unit, amount: i32) -> Self {
        Self::UnitHealed {
            unit: unit.id(),
            amount,
            hp_after: unit.hit_points(),
        }
    }

    pub(crate) fn removed(unit: &Unit) -> Self {
        Self::UnitRemoved {
            unit: unit.id(),
            team: unit.team(),
            kind: unit.kind(),
            rank: unit.rank(),
            position: unit.location(),
        }
    }

    pub fn unit(&self) -> UnitId {
        match self {
            Self::UnitDamaged { unit, .. }
            | Self::UnitHealed { unit, .. }
            | Self::UnitRemoved { unit, .. } => *unit,
        }
    }
}

/// Health bands used when reporting damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum HealthThreshold {
    /// At or above maximum HP
    Full,
    /// 75-99% HP
    Healthy,
    /// 25-74% HP
    Wounded,
    /// 1-24% HP
    Critical,
    /// No HP left
    Dead,
}

impl HealthThreshold {
    /// Calculate health threshold from current and max HP.
    pub fn from_hp(current: i32, max: i32) -> Self {
        if current <= 0 {
            Self::Dead
        } else if max <= 0 || current >= max {
            Self::Full
        } else {
            let percent = i64::from(current) * 100 / i64::from(max);
            match percent {
                75..=99 => Self::Healthy,
                25..=74 => Self::Wounded,
                _ => Self::Critical,
            }
        }
    }
}

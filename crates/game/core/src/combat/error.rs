//! Attack rejection reasons.

use crate::error::{ErrorSeverity, GameError};
use crate::state::UnitId;

/// Stages an attack request passes through.
///
/// ```text
/// Idle → RangeChecked → EffectivenessResolved → DamageApplied → CounterEvaluated → Done
///   ↘            ↘
///    Rejected     Rejected
/// ```
///
/// A rejected request reports where it stopped through
/// [`AttackError::rejected_in`]; a resolved one always reaches `Done`. A
/// recovery passes the same stages with a neutral classification and no
/// counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ResolutionPhase {
    Idle,
    RangeChecked,
    EffectivenessResolved,
    DamageApplied,
    CounterEvaluated,
    Done,
}

impl ResolutionPhase {
    /// The stage that follows this one on the success path.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::RangeChecked),
            Self::RangeChecked => Some(Self::EffectivenessResolved),
            Self::EffectivenessResolved => Some(Self::DamageApplied),
            Self::DamageApplied => Some(Self::CounterEvaluated),
            Self::CounterEvaluated => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Rejection is only possible before any hit points change.
    pub const fn can_reject(self) -> bool {
        matches!(self, Self::Idle | Self::RangeChecked)
    }
}

/// Side of an exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Participant {
    Attacker,
    Defender,
}

/// Reasons an attack or recovery request is rejected.
///
/// Rejection always happens before any hit points change.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackError {
    #[error("unit {0} not found")]
    UnitNotFound(UnitId),

    #[error("unit {unit} has no hit points left")]
    TargetDead { unit: UnitId },

    #[error("{role} {unit} has no item equipped")]
    NoWeapon { unit: UnitId, role: Participant },

    #[error("unit {target} is {distance} cells from {attacker}, outside the equipped item's range")]
    OutOfRange {
        attacker: UnitId,
        target: UnitId,
        distance: u32,
    },

    #[error("unit {attacker} cannot target {target} with its equipped item")]
    InvalidTarget { attacker: UnitId, target: UnitId },
}

impl AttackError {
    /// The stage the request was rejected from.
    pub const fn rejected_in(&self) -> ResolutionPhase {
        match self {
            Self::NoWeapon {
                role: Participant::Defender,
                ..
            } => ResolutionPhase::RangeChecked,
            _ => ResolutionPhase::Idle,
        }
    }
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfRange { .. } | Self::NoWeapon { .. } => ErrorSeverity::Recoverable,
            Self::UnitNotFound(_) | Self::TargetDead { .. } | Self::InvalidTarget { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnitNotFound(_) => "ATTACK_UNIT_NOT_FOUND",
            Self::TargetDead { .. } => "ATTACK_TARGET_DEAD",
            Self::NoWeapon { .. } => "ATTACK_NO_WEAPON",
            Self::OutOfRange { .. } => "ATTACK_OUT_OF_RANGE",
            Self::InvalidTarget { .. } => "ATTACK_INVALID_TARGET",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_path_visits_every_stage_once() {
        let mut stages = vec![ResolutionPhase::Idle];
        while let Some(next) = stages.last().and_then(|stage| stage.next()) {
            stages.push(next);
        }
        assert_eq!(
            stages,
            [
                ResolutionPhase::Idle,
                ResolutionPhase::RangeChecked,
                ResolutionPhase::EffectivenessResolved,
                ResolutionPhase::DamageApplied,
                ResolutionPhase::CounterEvaluated,
                ResolutionPhase::Done,
            ]
        );
    }

    #[test]
    fn rejections_happen_before_damage() {
        let errors = [
            AttackError::UnitNotFound(UnitId(1)),
            AttackError::TargetDead { unit: UnitId(1) },
            AttackError::NoWeapon {
                unit: UnitId(1),
                role: Participant::Attacker,
            },
            AttackError::NoWeapon {
                unit: UnitId(2),
                role: Participant::Defender,
            },
            AttackError::OutOfRange {
                attacker: UnitId(1),
                target: UnitId(2),
                distance: 4,
            },
            AttackError::InvalidTarget {
                attacker: UnitId(1),
                target: UnitId(2),
            },
        ];
        for err in errors {
            assert!(err.rejected_in().can_reject(), "{err}");
        }
        assert!(!ResolutionPhase::DamageApplied.can_reject());
        assert!(!ResolutionPhase::Done.can_reject());
    }
}

//! Combat outcome values.

use crate::catalog::Effectiveness;
use crate::state::UnitId;

use super::error::ResolutionPhase;

/// What the initiating unit did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExchangeKind {
    /// Damage exchange, possibly followed by a counterattack.
    Strike,
    /// Staff recovery on the unit itself or an ally.
    Recovery,
}

/// Result of one resolved request.
///
/// Damage figures are what each side's item dealt; a negative value means
/// the strike restored hit points instead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatOutcome {
    pub attacker: UnitId,
    pub defender: UnitId,
    pub kind: ExchangeKind,

    /// Damage dealt by the attacker's strike (0 for recovery).
    pub attacker_damage_dealt: i32,

    /// Damage dealt by the counterattack (0 if none happened).
    pub defender_damage_dealt: i32,

    /// Classification of the attacker's item against the defender's.
    pub attacker_effectiveness: Effectiveness,

    /// Classification of the counterattack, if one happened.
    pub defender_effectiveness: Option<Effectiveness>,

    pub counter_occurred: bool,

    /// Hit points actually restored by a recovery.
    pub recovered: i32,
}

impl CombatOutcome {
    pub(crate) fn strike(
        attacker: UnitId,
        defender: UnitId,
        damage: i32,
        effectiveness: Effectiveness,
    ) -> Self {
        Self {
            attacker,
            defender,
            kind: ExchangeKind::Strike,
            attacker_damage_dealt: damage,
            defender_damage_dealt: 0,
            attacker_effectiveness: effectiveness,
            defender_effectiveness: None,
            counter_occurred: false,
            recovered: 0,
        }
    }

    pub(crate) fn recovery(healer: UnitId, target: UnitId, recovered: i32) -> Self {
        Self {
            attacker: healer,
            defender: target,
            kind: ExchangeKind::Recovery,
            attacker_damage_dealt: 0,
            defender_damage_dealt: 0,
            attacker_effectiveness: Effectiveness::Normal,
            defender_effectiveness: None,
            counter_occurred: false,
            recovered,
        }
    }

    pub(crate) fn with_counter(mut self, damage: i32, effectiveness: Effectiveness) -> Self {
        self.counter_occurred = true;
        self.defender_damage_dealt = damage;
        self.defender_effectiveness = Some(effectiveness);
        self
    }

    pub fn is_recovery(&self) -> bool {
        self.kind == ExchangeKind::Recovery
    }

    /// Outcomes only exist for requests that ran to completion.
    pub fn phase(&self) -> ResolutionPhase {
        ResolutionPhase::Done
    }
}

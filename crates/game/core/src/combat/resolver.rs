//! Attack and recovery resolution.
//!
//! The resolver validates a request, classifies the item pair, applies damage
//! or recovery, and decides whether a counterattack happens. It mutates hit
//! points only; removing dead units is the caller's job.

use crate::battlefield::Battlefield;
use crate::catalog::Effectiveness;
use crate::config::CombatConfig;
use crate::env::DistanceOracle;
use crate::item::CombatItem;
use crate::state::UnitId;
use crate::unit::Unit;

use super::error::{AttackError, Participant};
use super::result::CombatOutcome;

/// Stateless apart from its configuration; safe to share between matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombatResolver {
    config: CombatConfig,
}

impl CombatResolver {
    pub fn new(config: CombatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Resolves `attacker` acting on `defender`.
    ///
    /// A staff in the attacker's hands selects the recovery path; every other
    /// item selects a strike. Validation runs before any hit points change:
    ///
    /// 1. both participants alive, else [`AttackError::TargetDead`]
    /// 2. attacker armed, else [`AttackError::NoWeapon`]
    /// 3. recovery targets an ally, else [`AttackError::InvalidTarget`]
    /// 4. defender within the item's range, else [`AttackError::OutOfRange`]
    /// 5. for a strike, defender armed, else [`AttackError::NoWeapon`]
    pub fn resolve<D>(
        &self,
        attacker: &mut Unit,
        defender: &mut Unit,
        map: &D,
    ) -> Result<CombatOutcome, AttackError>
    where
        D: DistanceOracle + ?Sized,
    {
        ensure_alive(attacker)?;
        ensure_alive(defender)?;
        let weapon = require_item(attacker, Participant::Attacker)?;

        if weapon.kind().is_recovery() {
            if !attacker.is_ally_of(defender) {
                return Err(AttackError::InvalidTarget {
                    attacker: attacker.id(),
                    target: defender.id(),
                });
            }
            ensure_in_range(attacker, defender, map)?;
            let amount = weapon.recovery_amount();
            return Ok(recover(attacker.id(), defender, amount));
        }

        ensure_in_range(attacker, defender, map)?;
        let guard = require_item(defender, Participant::Defender)?;

        let effectiveness = weapon.effectiveness_against(&guard);
        let damage = weapon.strike_damage(effectiveness, &self.config);
        let mut outcome = CombatOutcome::strike(attacker.id(), defender.id(), damage, effectiveness);
        let counter = self.counter_strike(&guard, &weapon, defender, attacker, map);

        defender.receive_damage(damage);

        if attacker.is_alive() && defender.is_alive() {
            if let Some((damage, effectiveness)) = counter {
                attacker.receive_damage(damage);
                outcome = outcome.with_counter(damage, effectiveness);
            }
        }
        Ok(outcome)
    }

    /// Uses the unit's own staff on itself. No range check applies.
    pub fn resolve_self_recovery(&self, unit: &mut Unit) -> Result<CombatOutcome, AttackError> {
        ensure_alive(unit)?;
        let item = require_item(unit, Participant::Attacker)?;
        if !item.kind().is_recovery() {
            return Err(AttackError::InvalidTarget {
                attacker: unit.id(),
                target: unit.id(),
            });
        }
        let amount = item.recovery_amount();
        Ok(recover(unit.id(), unit, amount))
    }

    /// Resolves a request between two units on the battlefield.
    ///
    /// Both units are borrowed from the table for the duration of the call.
    /// Acting on oneself is only legal as a recovery.
    pub fn resolve_on(
        &self,
        field: &mut Battlefield,
        attacker: UnitId,
        target: UnitId,
    ) -> Result<CombatOutcome, AttackError> {
        if attacker == target {
            let unit = field
                .unit_mut(attacker)
                .ok_or(AttackError::UnitNotFound(attacker))?;
            return self.resolve_self_recovery(unit);
        }
        for id in [attacker, target] {
            if !field.contains(id) {
                return Err(AttackError::UnitNotFound(id));
            }
        }
        let (map, first, second) = field
            .pair_with_map_mut(attacker, target)
            .ok_or(AttackError::UnitNotFound(target))?;
        self.resolve(first, second, map)
    }

    /// Counterattack the defender would deliver, computed before any damage
    /// lands so it sees the pre-strike item pair. `None` means no counter is
    /// possible regardless of who survives.
    fn counter_strike<D>(
        &self,
        guard: &CombatItem,
        weapon: &CombatItem,
        defender: &Unit,
        attacker: &Unit,
        map: &D,
    ) -> Option<(i32, Effectiveness)>
    where
        D: DistanceOracle + ?Sized,
    {
        if guard.kind().is_recovery() {
            return None;
        }
        if self.config.counter_requires_range && !guard.reaches(defender.distance_to(attacker, map))
        {
            return None;
        }
        let effectiveness = guard.effectiveness_against(weapon);
        Some((guard.strike_damage(effectiveness, &self.config), effectiveness))
    }
}

fn ensure_alive(unit: &Unit) -> Result<(), AttackError> {
    if unit.is_alive() {
        Ok(())
    } else {
        Err(AttackError::TargetDead { unit: unit.id() })
    }
}

fn require_item(unit: &Unit, role: Participant) -> Result<CombatItem, AttackError> {
    unit.equipped_item()
        .cloned()
        .ok_or(AttackError::NoWeapon {
            unit: unit.id(),
            role,
        })
}

fn ensure_in_range<D>(attacker: &Unit, defender: &Unit, map: &D) -> Result<(), AttackError>
where
    D: DistanceOracle + ?Sized,
{
    if attacker.is_in_range(defender, map) {
        Ok(())
    } else {
        Err(AttackError::OutOfRange {
            attacker: attacker.id(),
            target: defender.id(),
            distance: attacker.distance_to(defender, map),
        })
    }
}

fn recover(healer: UnitId, target: &mut Unit, amount: i32) -> CombatOutcome {
    let before = target.hit_points();
    target.receive_recovery(amount);
    CombatOutcome::recovery(healer, target.id(), target.hit_points() - before)
}

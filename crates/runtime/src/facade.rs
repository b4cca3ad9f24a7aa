//! External entry point for turn requests.
//!
//! [`TurnFacade`] wraps the core resolver and the battlefield's non-combat
//! operations. After a resolved attack it reports damage, heals, and removals
//! to the caller's observer and takes dead units off the battlefield; the
//! roster bookkeeping itself belongs to the observer.

use tactics_core::{
    AttackError, Battlefield, CombatConfig, CombatOutcome, CombatResolver, EquipError,
    ExchangeKind, GameError, InventoryError, ItemId, MoveError, Position, Unit, UnitId,
};

use crate::events::{CombatEvent, CombatObserver};

/// Everything a resolved attack produced.
#[derive(Clone, Debug)]
pub struct AttackReport {
    pub outcome: CombatOutcome,

    /// Damage and heal events in application order, followed by removals.
    pub events: Vec<CombatEvent>,

    /// Units taken off the battlefield, defender first.
    pub removed: Vec<Unit>,
}

impl AttackReport {
    pub fn was_removed(&self, id: UnitId) -> bool {
        self.removed.iter().any(|unit| unit.id() == id)
    }
}

#[derive(Clone, Debug, Default)]
pub struct TurnFacade {
    resolver: CombatResolver,
}

impl TurnFacade {
    pub fn new(config: CombatConfig) -> Self {
        Self::with_resolver(CombatResolver::new(config))
    }

    pub fn with_resolver(resolver: CombatResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &CombatResolver {
        &self.resolver
    }

    /// Resolves an attack (or a staff recovery) and removes whoever died.
    ///
    /// On rejection nothing changes and the observer hears nothing.
    pub fn perform_attack<O>(
        &self,
        field: &mut Battlefield,
        attacker: UnitId,
        defender: UnitId,
        observer: &mut O,
    ) -> Result<AttackReport, AttackError>
    where
        O: CombatObserver + ?Sized,
    {
        tracing::debug!(%attacker, %defender, "attack requested");
        let outcome = self
            .resolver
            .resolve_on(field, attacker, defender)
            .inspect_err(|err| {
                tracing::warn!(
                    %attacker,
                    %defender,
                    code = err.error_code(),
                    phase = %err.rejected_in(),
                    "attack rejected: {err}"
                );
            })?;

        let mut events = Vec::new();
        match outcome.kind {
            ExchangeKind::Recovery => {
                if let Some(unit) = field.unit(outcome.defender) {
                    observer.on_unit_healed(unit, outcome.recovered);
                    events.push(CombatEvent::healed(unit, outcome.recovered));
                }
            }
            ExchangeKind::Strike => {
                if let Some(unit) = field.unit(outcome.defender) {
                    observer.on_unit_damaged(unit, outcome.attacker_damage_dealt);
                    events.push(CombatEvent::damaged(unit, outcome.attacker_damage_dealt));
                }
                if outcome.counter_occurred {
                    if let Some(unit) = field.unit(outcome.attacker) {
                        observer.on_unit_damaged(unit, outcome.defender_damage_dealt);
                        events.push(CombatEvent::damaged(unit, outcome.defender_damage_dealt));
                    }
                }
            }
        }

        let mut removed = Vec::new();
        for id in [outcome.defender, outcome.attacker] {
            let dead = field.unit(id).is_some_and(|unit| !unit.is_alive());
            if !dead {
                continue;
            }
            if let Some(unit) = field.remove(id) {
                tracing::info!(
                    unit = %id,
                    team = %unit.team(),
                    kind = %unit.kind(),
                    hp = unit.hit_points(),
                    "unit removed"
                );
                observer.on_unit_removed(&unit);
                events.push(CombatEvent::removed(&unit));
                removed.push(unit);
            }
        }

        tracing::info!(
            %attacker,
            %defender,
            kind = %outcome.kind,
            dealt = outcome.attacker_damage_dealt,
            effectiveness = %outcome.attacker_effectiveness,
            countered = outcome.counter_occurred,
            counter = outcome.defender_damage_dealt,
            recovered = outcome.recovered,
            removed = removed.len(),
            "attack resolved"
        );
        Ok(AttackReport {
            outcome,
            events,
            removed,
        })
    }

    pub fn perform_give(
        &self,
        field: &mut Battlefield,
        giver: UnitId,
        receiver: UnitId,
        item: ItemId,
    ) -> Result<(), InventoryError> {
        field
            .give_item(giver, receiver, item)
            .inspect(|_| tracing::info!(%giver, %receiver, %item, "item given"))
            .inspect_err(|err| log_rejection("give", err))
    }

    pub fn perform_exchange(
        &self,
        field: &mut Battlefield,
        first: UnitId,
        first_item: ItemId,
        second: UnitId,
        second_item: ItemId,
    ) -> Result<(), InventoryError> {
        field
            .exchange_items(first, first_item, second, second_item)
            .inspect(|_| {
                tracing::info!(%first, %first_item, %second, %second_item, "items exchanged")
            })
            .inspect_err(|err| log_rejection("exchange", err))
    }

    pub fn perform_equip(
        &self,
        field: &mut Battlefield,
        unit: UnitId,
        item: ItemId,
    ) -> Result<(), EquipError> {
        field
            .equip(unit, item)
            .inspect(|_| tracing::info!(%unit, %item, "item equipped"))
            .inspect_err(|err| log_rejection("equip", err))
    }

    pub fn perform_move(
        &self,
        field: &mut Battlefield,
        unit: UnitId,
        target: Position,
    ) -> Result<(), MoveError> {
        field
            .move_unit(unit, target)
            .inspect(|_| tracing::info!(%unit, %target, "unit moved"))
            .inspect_err(|err| log_rejection("move", err))
    }
}

fn log_rejection<E: GameError>(request: &str, err: &E) {
    tracing::warn!(
        request,
        code = err.error_code(),
        severity = err.severity().as_str(),
        "request rejected: {err}"
    );
}

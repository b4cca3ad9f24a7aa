//! Scripted skirmish playback.
//!
//! A [`Skirmish`] owns a built scenario, the facade, and the match rosters,
//! and plays the scenario's orders one at a time. A rejected order is logged
//! and skipped; it never aborts the script.

use tactics_content::{Order, Scenario};
use tactics_core::{Battlefield, CombatConfig, GameError, ItemId, TeamId, UnitId};

use crate::api::{Result, RuntimeError};
use crate::events::EventLog;
use crate::facade::{AttackReport, TurnFacade};
use crate::roster::{Match, Tactician};

/// What a successfully played order did.
#[derive(Clone, Debug)]
pub enum OrderOutcome {
    Attack(AttackReport),
    Given { item: ItemId },
    Exchanged,
    Equipped { item: ItemId },
    Moved,
    Retired,
}

/// Counts from a full script run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkirmishSummary {
    pub played: usize,
    pub rejected: usize,
    /// Orders left unplayed because the match was already decided.
    pub skipped: usize,
    pub removed: Vec<UnitId>,
}

pub struct Skirmish {
    scenario: Scenario,
    facade: TurnFacade,
    game: Match,
    log: EventLog,
}

impl Skirmish {
    pub fn new(config: CombatConfig, scenario: Scenario) -> Self {
        let game = Match::from_rosters(&scenario.rosters);
        Self {
            scenario,
            facade: TurnFacade::new(config),
            game,
            log: EventLog::new(),
        }
    }

    pub fn battlefield(&self) -> &Battlefield {
        &self.scenario.battlefield
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Every combat event observed so far.
    pub fn events(&self) -> &EventLog {
        &self.log
    }

    pub fn winner(&self) -> Option<&Tactician> {
        self.game.winner()
    }

    /// Plays every scripted order until the match is decided.
    pub fn play_all(&mut self) -> SkirmishSummary {
        let orders = self.scenario.orders.clone();
        let mut summary = SkirmishSummary::default();

        for (index, order) in orders.iter().enumerate() {
            if self.game.is_over() {
                summary.skipped = orders.len() - index;
                tracing::info!(remaining = summary.skipped, "match decided, skipping orders");
                break;
            }
            match self.play_order(order) {
                Ok(OrderOutcome::Attack(report)) => {
                    summary.played += 1;
                    summary
                        .removed
                        .extend(report.removed.iter().map(|unit| unit.id()));
                }
                Ok(_) => summary.played += 1,
                Err(err) => {
                    summary.rejected += 1;
                    tracing::warn!(
                        order = index,
                        code = err.error_code(),
                        "order rejected: {err}"
                    );
                }
            }
        }

        match self.game.winner() {
            Some(winner) if self.game.is_over() => {
                tracing::info!(team = %winner.team(), name = winner.name(), "match won")
            }
            _ => tracing::info!(
                active = self.game.active().count(),
                "script finished without a winner"
            ),
        }
        summary
    }

    /// Plays one order on behalf of the tactician owning the acting unit.
    pub fn play_order(&mut self, order: &Order) -> Result<OrderOutcome> {
        tracing::debug!(?order, "playing order");
        match order {
            Order::Attack { attacker, target } => {
                let attacker = self.acting_unit(attacker)?;
                let target = self.unit(target)?;
                let report = self.facade.perform_attack(
                    &mut self.scenario.battlefield,
                    attacker,
                    target,
                    &mut (&mut self.game, &mut self.log),
                )?;
                Ok(OrderOutcome::Attack(report))
            }
            Order::Give {
                giver,
                receiver,
                item,
            } => {
                let giver = self.acting_unit(giver)?;
                let receiver = self.unit(receiver)?;
                let item = self.item(giver, item)?;
                self.facade
                    .perform_give(&mut self.scenario.battlefield, giver, receiver, item)?;
                Ok(OrderOutcome::Given { item })
            }
            Order::Exchange {
                first,
                first_item,
                second,
                second_item,
            } => {
                let first = self.acting_unit(first)?;
                let second = self.unit(second)?;
                let first_item = self.item(first, first_item)?;
                let second_item = self.item(second, second_item)?;
                self.facade.perform_exchange(
                    &mut self.scenario.battlefield,
                    first,
                    first_item,
                    second,
                    second_item,
                )?;
                Ok(OrderOutcome::Exchanged)
            }
            Order::Equip { unit, item } => {
                let unit = self.acting_unit(unit)?;
                let item = self.item(unit, item)?;
                self.facade
                    .perform_equip(&mut self.scenario.battlefield, unit, item)?;
                Ok(OrderOutcome::Equipped { item })
            }
            Order::Move { unit, to } => {
                let unit = self.acting_unit(unit)?;
                self.facade
                    .perform_move(&mut self.scenario.battlefield, unit, *to)?;
                Ok(OrderOutcome::Moved)
            }
            Order::Retire { team } => {
                self.game.retire(TeamId(*team))?;
                Ok(OrderOutcome::Retired)
            }
        }
    }

    fn unit(&self, label: &str) -> Result<UnitId> {
        self.scenario
            .unit_id(label)
            .ok_or_else(|| RuntimeError::UnknownLabel(label.to_owned()))
    }

    /// Resolves a label and checks that its tactician may still act.
    fn acting_unit(&self, label: &str) -> Result<UnitId> {
        let id = self.unit(label)?;
        if let Some(unit) = self.scenario.battlefield.unit(id) {
            let tactician = self
                .game
                .tactician(unit.team())
                .ok_or(RuntimeError::UnknownTeam(unit.team()))?;
            tactician.ensure_active()?;
        }
        Ok(id)
    }

    /// Finds a carried item by name.
    fn item(&self, unit: UnitId, name: &str) -> Result<ItemId> {
        self.scenario
            .battlefield
            .unit(unit)
            .ok_or(RuntimeError::UnitGone(unit))?
            .items()
            .iter()
            .find(|item| item.name() == name)
            .map(|item| item.id())
            .ok_or_else(|| RuntimeError::UnknownItem {
                unit,
                name: name.to_owned(),
            })
    }
}

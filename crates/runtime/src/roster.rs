//! Player rosters.
//!
//! A [`Tactician`] owns the ids of its team's units and a status. The
//! [`Match`] observer routes removals reported by the facade to the tactician
//! owning the unit; losing a special unit, or the last unit, defeats it.

use tactics_content::Roster;
use tactics_core::{TeamId, Unit, UnitId, UnitRank};

use crate::api::{Result, RuntimeError};
use crate::events::CombatObserver;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TacticianStatus {
    #[default]
    Active,
    Defeated,
    Retired,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tactician {
    name: String,
    team: TeamId,
    units: Vec<UnitId>,
    selected: Option<UnitId>,
    status: TacticianStatus,
}

impl Tactician {
    pub fn new(name: impl Into<String>, team: TeamId) -> Self {
        Self {
            name: name.into(),
            team,
            units: Vec::new(),
            selected: None,
            status: TacticianStatus::Active,
        }
    }

    pub fn from_roster(roster: &Roster) -> Self {
        let mut tactician = Self::new(roster.name.as_str(), roster.team);
        tactician.units = roster.units.clone();
        tactician
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team(&self) -> TeamId {
        self.team
    }

    pub fn units(&self) -> &[UnitId] {
        &self.units
    }

    pub fn owns(&self, unit: UnitId) -> bool {
        self.units.contains(&unit)
    }

    pub fn status(&self) -> TacticianStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == TacticianStatus::Active
    }

    pub fn add_unit(&mut self, unit: UnitId) {
        if !self.owns(unit) {
            self.units.push(unit);
        }
    }

    pub fn selected_unit(&self) -> Option<UnitId> {
        self.selected
    }

    pub fn select_unit(&mut self, unit: UnitId) -> Result<()> {
        if !self.owns(unit) {
            return Err(RuntimeError::NotInRoster {
                unit,
                team: self.team,
            });
        }
        self.selected = Some(unit);
        Ok(())
    }

    /// Gives up the match. Only an active tactician can retire.
    pub fn retire(&mut self) -> Result<()> {
        self.ensure_active()?;
        self.status = TacticianStatus::Retired;
        self.selected = None;
        Ok(())
    }

    pub fn ensure_active(&self) -> Result<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(RuntimeError::TacticianInactive {
                team: self.team,
                status: self.status,
            })
        }
    }

    /// Drops a removed unit from the roster. Returns true if it was ours.
    fn lose_unit(&mut self, unit: &Unit) -> bool {
        let Some(index) = self.units.iter().position(|id| *id == unit.id()) else {
            return false;
        };
        self.units.remove(index);
        if self.selected == Some(unit.id()) {
            self.selected = None;
        }
        if self.is_active() && (unit.rank() == UnitRank::Special || self.units.is_empty()) {
            self.status = TacticianStatus::Defeated;
        }
        true
    }
}

/// All tacticians of one skirmish.
#[derive(Clone, Debug, Default)]
pub struct Match {
    tacticians: Vec<Tactician>,
}

impl Match {
    pub fn new(tacticians: Vec<Tactician>) -> Self {
        Self { tacticians }
    }

    pub fn from_rosters(rosters: &[Roster]) -> Self {
        Self::new(rosters.iter().map(Tactician::from_roster).collect())
    }

    pub fn tacticians(&self) -> &[Tactician] {
        &self.tacticians
    }

    pub fn tactician(&self, team: TeamId) -> Option<&Tactician> {
        self.tacticians.iter().find(|t| t.team() == team)
    }

    pub fn tactician_mut(&mut self, team: TeamId) -> Option<&mut Tactician> {
        self.tacticians.iter_mut().find(|t| t.team() == team)
    }

    pub fn owner_of(&self, unit: UnitId) -> Option<&Tactician> {
        self.tacticians.iter().find(|t| t.owns(unit))
    }

    pub fn active(&self) -> impl Iterator<Item = &Tactician> {
        self.tacticians.iter().filter(|t| t.is_active())
    }

    /// The match is decided once at most one tactician is still active.
    pub fn is_over(&self) -> bool {
        self.active().count() <= 1
    }

    /// The last active tactician, once everyone else is out.
    pub fn winner(&self) -> Option<&Tactician> {
        let mut active = self.active();
        let winner = active.next()?;
        if active.next().is_some() {
            return None;
        }
        Some(winner)
    }

    pub fn retire(&mut self, team: TeamId) -> Result<()> {
        let tactician = self
            .tactician_mut(team)
            .ok_or(RuntimeError::UnknownTeam(team))?;
        tactician.retire()?;
        tracing::info!(%team, name = tactician.name(), "tactician retired");
        Ok(())
    }
}

impl CombatObserver for Match {
    fn on_unit_damaged(&mut self, unit: &Unit, amount: i32) {
        tracing::debug!(unit = %unit.id(), amount, hp = unit.hit_points(), "unit damaged");
    }

    fn on_unit_healed(&mut self, unit: &Unit, amount: i32) {
        tracing::debug!(unit = %unit.id(), amount, hp = unit.hit_points(), "unit healed");
    }

    fn on_unit_removed(&mut self, unit: &Unit) {
        let Some(tactician) = self.tactician_mut(unit.team()) else {
            tracing::warn!(unit = %unit.id(), team = %unit.team(), "removed unit has no tactician");
            return;
        };
        if !tactician.lose_unit(unit) {
            tracing::warn!(unit = %unit.id(), team = %unit.team(), "removed unit not in roster");
            return;
        }
        if tactician.status() == TacticianStatus::Defeated {
            tracing::info!(
                team = %tactician.team(),
                name = tactician.name(),
                last_unit = %unit.id(),
                "tactician defeated"
            );
        }
    }
}

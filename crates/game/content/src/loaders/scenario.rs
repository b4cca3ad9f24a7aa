//! Scenario loader.
//!
//! A scenario declares the teams, every unit with its starting loadout, and
//! an optional script of orders. Units are referred to by label inside the
//! file; ids are allocated when the scenario is built.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, anyhow, bail};
use serde::{Deserialize, Serialize};
use tactics_core::{
    Battlefield, CombatConfig, CombatItem, FactoryError, GridMetric, ItemFactory, Position,
    TeamId, UnitFactory, UnitId, UnitStats, parse_item_kind, parse_unit_kind,
};

use crate::loaders::{LoadResult, read_file};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub name: String,

    /// Overrides the configured grid metric for this scenario.
    #[serde(default)]
    pub metric: Option<GridMetric>,

    pub teams: Vec<TeamSpec>,
    pub units: Vec<UnitSpec>,

    #[serde(default)]
    pub orders: Vec<Order>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSpec {
    pub id: u16,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSpec {
    pub label: String,
    pub kind: String,
    pub team: u16,
    pub hit_points: i32,
    pub movement: u32,
    pub position: Position,

    #[serde(default)]
    pub capacity: Option<usize>,

    #[serde(default)]
    pub items: Vec<ItemSpec>,

    /// Slot in `items` to equip at the start.
    #[serde(default)]
    pub equipped: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub kind: String,
    pub name: String,
    pub power: u32,
    pub min_range: u32,
    pub max_range: u32,
}

/// Scripted request, referring to units by label and items by name.
///
/// Items are looked up by name in the acting unit's inventory when the order
/// is played, since earlier orders may have moved them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    Attack {
        attacker: String,
        target: String,
    },
    Give {
        giver: String,
        receiver: String,
        item: String,
    },
    Exchange {
        first: String,
        first_item: String,
        second: String,
        second_item: String,
    },
    Equip {
        unit: String,
        item: String,
    },
    Move {
        unit: String,
        to: Position,
    },
    Retire {
        team: u16,
    },
}

impl Order {
    /// Unit labels this order refers to.
    pub fn unit_labels(&self) -> Vec<&str> {
        match self {
            Order::Attack { attacker, target } => vec![attacker.as_str(), target.as_str()],
            Order::Give {
                giver, receiver, ..
            } => vec![giver.as_str(), receiver.as_str()],
            Order::Exchange { first, second, .. } => vec![first.as_str(), second.as_str()],
            Order::Equip { unit, .. } | Order::Move { unit, .. } => vec![unit.as_str()],
            Order::Retire { .. } => Vec::new(),
        }
    }
}

/// Units of one team, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    pub team: TeamId,
    pub name: String,
    pub units: Vec<UnitId>,
}

/// A scenario ready to play.
#[derive(Debug)]
pub struct Scenario {
    pub name: String,
    pub battlefield: Battlefield,
    pub rosters: Vec<Roster>,
    pub orders: Vec<Order>,
    labels: BTreeMap<String, UnitId>,
}

impl Scenario {
    pub fn unit_id(&self, label: &str) -> Option<UnitId> {
        self.labels.get(label).copied()
    }

    /// Label a unit was declared with.
    pub fn label_of(&self, id: UnitId) -> Option<&str> {
        self.labels
            .iter()
            .find(|(_, unit)| **unit == id)
            .map(|(label, _)| label.as_str())
    }
}

impl ScenarioSpec {
    /// Builds the battlefield, rosters, and label table.
    ///
    /// Unit and item ids are allocated from 1 in declaration order.
    pub fn build(&self, config: &CombatConfig) -> LoadResult<Scenario> {
        let metric = self.metric.unwrap_or(config.metric);
        let mut battlefield = Battlefield::new(metric);
        let mut unit_factory = UnitFactory::starting_at(1);
        let mut item_factory = ItemFactory::starting_at(1);
        let mut labels = BTreeMap::new();

        let mut rosters: Vec<Roster> = Vec::with_capacity(self.teams.len());
        for team in &self.teams {
            if rosters.iter().any(|roster| roster.team == TeamId(team.id)) {
                bail!("team {} is declared twice", team.id);
            }
            rosters.push(Roster {
                team: TeamId(team.id),
                name: team.name.clone(),
                units: Vec::new(),
            });
        }

        for spec in &self.units {
            if labels.contains_key(&spec.label) {
                bail!("unit label '{}' is used twice", spec.label);
            }
            let roster = rosters
                .iter_mut()
                .find(|roster| roster.team == TeamId(spec.team))
                .ok_or_else(|| {
                    anyhow!("unit '{}' belongs to undeclared team {}", spec.label, spec.team)
                })?;

            let kind = parse_unit_kind(&spec.kind)
                .with_context(|| format!("unit '{}'", spec.label))?;
            let loadout = spec
                .items
                .iter()
                .map(|item| {
                    let kind = parse_item_kind(&item.kind)?;
                    Ok(item_factory.create_item(
                        kind,
                        item.name.as_str(),
                        item.power,
                        item.min_range,
                        item.max_range,
                    ))
                })
                .collect::<Result<Vec<_>, FactoryError>>()
                .with_context(|| format!("loadout of unit '{}'", spec.label))?;

            let mut stats = UnitStats::new(spec.hit_points, spec.movement, spec.position);
            if let Some(capacity) = spec.capacity {
                stats = stats.with_capacity(capacity);
            }
            let mut unit = unit_factory
                .create_unit(kind, TeamId(spec.team), stats, loadout)
                .with_context(|| format!("unit '{}'", spec.label))?;

            if let Some(slot) = spec.equipped {
                let item = unit
                    .items()
                    .get(slot)
                    .map(CombatItem::id)
                    .ok_or_else(|| {
                        anyhow!("unit '{}' has no item in slot {}", spec.label, slot)
                    })?;
                unit.equip(item)
                    .with_context(|| format!("unit '{}'", spec.label))?;
            }

            let id = unit.id();
            battlefield
                .insert(unit)
                .with_context(|| format!("placing unit '{}'", spec.label))?;
            roster.units.push(id);
            labels.insert(spec.label.clone(), id);
            tracing::debug!(label = %spec.label, unit = %id, %kind, "unit placed");
        }

        for (index, order) in self.orders.iter().enumerate() {
            for label in order.unit_labels() {
                if !labels.contains_key(label) {
                    bail!("order {} refers to unknown unit '{}'", index, label);
                }
            }
            if let Order::Retire { team } = order {
                if !rosters.iter().any(|roster| roster.team == TeamId(*team)) {
                    bail!("order {} retires undeclared team {}", index, team);
                }
            }
        }

        tracing::info!(
            scenario = %self.name,
            units = battlefield.len(),
            orders = self.orders.len(),
            "scenario built"
        );

        Ok(Scenario {
            name: self.name.clone(),
            battlefield,
            rosters,
            orders: self.orders.clone(),
            labels,
        })
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<ScenarioSpec> {
        ron::from_str(content).map_err(|e| anyhow!("Failed to parse scenario RON: {}", e))
    }
}

//! Unified error types surfaced by the runtime API.
//!
//! Wraps the per-operation core errors so a scripted skirmish can bubble any
//! rejected order up with a single type.
use tactics_core::{
    AttackError, EquipError, ErrorSeverity, GameError, InventoryError, MoveError, TeamId, UnitId,
};
use thiserror::Error;

use crate::roster::TacticianStatus;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Attack(#[from] AttackError),

    #[error(transparent)]
    Equip(#[from] EquipError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("no unit is labelled '{0}'")]
    UnknownLabel(String),

    #[error("unit {0} is no longer on the battlefield")]
    UnitGone(UnitId),

    #[error("unit {unit} carries no item named '{name}'")]
    UnknownItem { unit: UnitId, name: String },

    #[error("{0} has no tactician")]
    UnknownTeam(TeamId),

    #[error("tactician of {team} is {status}")]
    TacticianInactive {
        team: TeamId,
        status: TacticianStatus,
    },

    #[error("unit {unit} is not in the roster of {team}")]
    NotInRoster { unit: UnitId, team: TeamId },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Attack(err) => err.severity(),
            Self::Equip(err) => err.severity(),
            Self::Inventory(err) => err.severity(),
            Self::Move(err) => err.severity(),
            Self::UnknownLabel(_)
            | Self::UnitGone(_)
            | Self::UnknownItem { .. }
            | Self::UnknownTeam(_)
            | Self::TacticianInactive { .. }
            | Self::NotInRoster { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Attack(err) => err.error_code(),
            Self::Equip(err) => err.error_code(),
            Self::Inventory(err) => err.error_code(),
            Self::Move(err) => err.error_code(),
            Self::UnknownLabel(_) => "RUNTIME_UNKNOWN_LABEL",
            Self::UnitGone(_) => "RUNTIME_UNIT_GONE",
            Self::UnknownItem { .. } => "RUNTIME_UNKNOWN_ITEM",
            Self::UnknownTeam(_) => "RUNTIME_UNKNOWN_TEAM",
            Self::TacticianInactive { .. } => "RUNTIME_TACTICIAN_INACTIVE",
            Self::NotInRoster { .. } => "RUNTIME_NOT_IN_ROSTER",
        }
    }
}

//! Identifiers and coordinates shared by every other module.
mod common;

pub use common::{ItemId, Position, TeamId, UnitId};

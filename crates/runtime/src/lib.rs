//! Runtime orchestration for turn-based skirmishes.
//!
//! This crate wraps the deterministic rules of `tactics-core` with the parts
//! that have side effects: removing dead units, notifying observers, tracking
//! tactician rosters, and logging through `tracing`.
//!
//! Modules are organized by responsibility:
//! - [`facade`] hosts [`TurnFacade`], the entry point for every request
//! - [`events`] defines combat events and the observer seam
//! - [`roster`] keeps tacticians and the match they play
//! - [`skirmish`] plays a scenario's scripted orders
//! - [`api`] exposes the error types downstream clients handle
pub mod api;
pub mod events;
pub mod facade;
pub mod roster;
pub mod skirmish;

pub use api::{Result, RuntimeError};
pub use events::{CombatEvent, CombatObserver, EventLog, HealthThreshold};
pub use facade::{AttackReport, TurnFacade};
pub use roster::{Match, Tactician, TacticianStatus};
pub use skirmish::{OrderOutcome, Skirmish, SkirmishSummary};

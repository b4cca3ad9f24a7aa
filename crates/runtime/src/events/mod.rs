//! Combat notifications.
//!
//! The facade reports what happened in two ways: as [`CombatEvent`] values in
//! the returned report, and as callbacks on a [`CombatObserver`] supplied by
//! the caller. Rosters react to removals through the observer.

mod combat_event;
mod observer;

pub use combat_event::{CombatEvent, HealthThreshold};
pub use observer::{CombatObserver, EventLog};

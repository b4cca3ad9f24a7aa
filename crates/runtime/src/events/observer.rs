//! Observer seam between the facade and whoever tracks the match.

use tactics_core::Unit;

use super::CombatEvent;

/// Receives notifications as the facade applies a resolved request.
///
/// Every method defaults to a no-op, so an observer only implements what it
/// cares about. Notifications are fire-and-forget; an observer cannot veto
/// or fail a resolution.
pub trait CombatObserver {
    fn on_unit_damaged(&mut self, _unit: &Unit, _amount: i32) {}

    fn on_unit_healed(&mut self, _unit: &Unit, _amount: i32) {}

    /// Called after the unit has left the battlefield.
    fn on_unit_removed(&mut self, _unit: &Unit) {}
}

/// Ignores everything.
impl CombatObserver for () {}

impl<O: CombatObserver + ?Sized> CombatObserver for &mut O {
    fn on_unit_damaged(&mut self, unit: &Unit, amount: i32) {
        (**self).on_unit_damaged(unit, amount);
    }

    fn on_unit_healed(&mut self, unit: &Unit, amount: i32) {
        (**self).on_unit_healed(unit, amount);
    }

    fn on_unit_removed(&mut self, unit: &Unit) {
        (**self).on_unit_removed(unit);
    }
}

/// Records every notification as a [`CombatEvent`].
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<CombatEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn drain(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }
}

impl CombatObserver for EventLog {
    fn on_unit_damaged(&mut self, unit: &Unit, amount: i32) {
        self.events.push(CombatEvent::damaged(unit, amount));
    }

    fn on_unit_healed(&mut self, unit: &Unit, amount: i32) {
        self.events.push(CombatEvent::healed(unit, amount));
    }

    fn on_unit_removed(&mut self, unit: &Unit) {
        self.events.push(CombatEvent::removed(unit));
    }
}

/// Forwards to two observers in order.
impl<A: CombatObserver, B: CombatObserver> CombatObserver for (A, B) {
    fn on_unit_damaged(&mut self, unit: &Unit, amount: i32) {
        self.0.on_unit_damaged(unit, amount);
        self.1.on_unit_damaged(unit, amount);
    }

    fn on_unit_healed(&mut self, unit: &Unit, amount: i32) {
        self.0.on_unit_healed(unit, amount);
        self.1.on_unit_healed(unit, amount);
    }

    fn on_unit_removed(&mut self, unit: &Unit) {
        self.0.on_unit_removed(unit);
        self.1.on_unit_removed(unit);
    }
}

//! Combat resolution.
//!
//! [`CombatResolver`] is the only code that changes hit points as the result
//! of an exchange. It never removes units; callers inspect the returned
//! [`CombatOutcome`] and the participants' hit points afterwards.
//!
//! # Flow
//!
//! - validate participants, weapons, and range
//! - classify the item pair through [`effectiveness_of`](crate::catalog::effectiveness_of)
//! - apply the primary strike (or recovery for a staff)
//! - counter if both sides are still standing
mod error;
mod resolver;
mod result;

pub use error::{AttackError, Participant, ResolutionPhase};
pub use resolver::CombatResolver;
pub use result::{CombatOutcome, ExchangeKind};

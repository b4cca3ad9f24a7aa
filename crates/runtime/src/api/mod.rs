//! Public runtime API surface.
//!
//! Error types shared by the facade, the tactician rosters, and the scripted
//! skirmish runner.

pub mod errors;

pub use errors::{Result, RuntimeError};

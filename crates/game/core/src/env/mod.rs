//! Collaborators the core consumes but does not own.
//!
//! The map is external to combat: the resolver only asks for the distance
//! between two positions through [`DistanceOracle`].
mod map;

pub use map::{DistanceOracle, GridMetric};

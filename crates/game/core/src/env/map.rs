use crate::state::Position;

/// Distance collaborator consumed by range and adjacency checks.
///
/// The board itself lives outside the core; combat only needs to know how far
/// apart two cells are.
pub trait DistanceOracle: Send + Sync {
    fn distance(&self, from: Position, to: Position) -> u32;

    /// Two cells are adjacent when exactly one step apart.
    fn is_adjacent(&self, from: Position, to: Position) -> bool {
        self.distance(from, to) == 1
    }
}

/// Built-in grid metrics.
///
/// Manhattan matches path length on a four-neighbour grid with no obstacles;
/// Chebyshev treats diagonal steps as a single move.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GridMetric {
    #[default]
    Manhattan,
    Chebyshev,
}

impl DistanceOracle for GridMetric {
    fn distance(&self, from: Position, to: Position) -> u32 {
        let dx = from.x.abs_diff(to.x);
        let dy = from.y.abs_diff(to.y);
        match self {
            GridMetric::Manhattan => dx.saturating_add(dy),
            GridMetric::Chebyshev => dx.max(dy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_sums_axis_steps() {
        let metric = GridMetric::Manhattan;
        assert_eq!(metric.distance(Position::new(0, 0), Position::new(2, 3)), 5);
        assert_eq!(metric.distance(Position::new(-1, 4), Position::new(1, 1)), 5);
        assert_eq!(metric.distance(Position::new(3, 3), Position::new(3, 3)), 0);
    }

    #[test]
    fn extreme_corners_saturate() {
        let low = Position::new(i32::MIN, i32::MIN);
        let high = Position::new(i32::MAX, i32::MAX);
        assert_eq!(GridMetric::Manhattan.distance(low, high), u32::MAX);
        assert_eq!(GridMetric::Chebyshev.distance(low, high), u32::MAX);
        assert!(!GridMetric::Manhattan.is_adjacent(low, high));
    }

    #[test]
    fn chebyshev_counts_diagonals_once() {
        let metric = GridMetric::Chebyshev;
        assert_eq!(metric.distance(Position::new(0, 0), Position::new(2, 3)), 3);
        assert_eq!(metric.distance(Position::new(0, 0), Position::new(1, 1)), 1);
    }

    #[test]
    fn diagonal_neighbour_adjacency_depends_on_metric() {
        let a = Position::new(0, 0);
        let b = Position::new(1, 1);
        assert!(!GridMetric::Manhattan.is_adjacent(a, b));
        assert!(GridMetric::Chebyshev.is_adjacent(a, b));
    }

    #[test]
    fn parses_from_config_strings() {
        assert_eq!("manhattan".parse::<GridMetric>(), Ok(GridMetric::Manhattan));
        assert_eq!("Chebyshev".parse::<GridMetric>(), Ok(GridMetric::Chebyshev));
        assert!("euclid".parse::<GridMetric>().is_err());
    }
}

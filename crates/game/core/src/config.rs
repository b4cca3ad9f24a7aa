use crate::env::GridMetric;

/// Combat balance constants and tunable rules.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Flat amount subtracted from the power of a resistant-classified strike.
    pub resistant_penalty: i32,

    /// Multiplier applied to a weak-classified strike, as a ratio so the
    /// result floors the same way on every platform.
    pub weak_numerator: u32,
    pub weak_denominator: u32,

    /// Grid metric used for range, adjacency, and movement checks.
    pub metric: GridMetric,

    /// Require the defender's item to reach the attacker before countering.
    pub counter_requires_range: bool,

    /// Floor resistant strikes at zero instead of letting them heal the target.
    pub clamp_negative_damage: bool,
}

impl CombatConfig {
    pub const DEFAULT_RESISTANT_PENALTY: i32 = 20;
    pub const DEFAULT_WEAK_NUMERATOR: u32 = 3;
    pub const DEFAULT_WEAK_DENOMINATOR: u32 = 2;

    pub fn new() -> Self {
        Self {
            resistant_penalty: Self::DEFAULT_RESISTANT_PENALTY,
            weak_numerator: Self::DEFAULT_WEAK_NUMERATOR,
            weak_denominator: Self::DEFAULT_WEAK_DENOMINATOR,
            metric: GridMetric::default(),
            counter_requires_range: false,
            clamp_negative_damage: false,
        }
    }

    pub fn with_metric(mut self, metric: GridMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_counter_requires_range(mut self, enabled: bool) -> Self {
        self.counter_requires_range = enabled;
        self
    }

    pub fn with_clamp_negative_damage(mut self, enabled: bool) -> Self {
        self.clamp_negative_damage = enabled;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_rules() {
        let config = CombatConfig::default();
        assert_eq!(config.resistant_penalty, 20);
        assert_eq!((config.weak_numerator, config.weak_denominator), (3, 2));
        assert_eq!(config.metric, GridMetric::Manhattan);
        assert!(!config.counter_requires_range);
        assert!(!config.clamp_negative_damage);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: CombatConfig =
            serde_json::from_str(r#"{ "metric": "chebyshev", "counter_requires_range": true }"#)
                .unwrap();
        assert_eq!(config.metric, GridMetric::Chebyshev);
        assert!(config.counter_requires_range);
        assert_eq!(config.resistant_penalty, 20);
    }
}

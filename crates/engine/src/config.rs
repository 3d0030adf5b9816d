//! Field configuration
//!
//! Defaults describe the standard 10x20 playfield with uniform piece
//! selection. Drivers can override any value through environment variables:
//!
//! - `TETRIS_FIELD_WIDTH`: board width in cells (default: 10)
//! - `TETRIS_FIELD_HEIGHT`: board height in cells (default: 20)
//! - `TETRIS_SEED`: seed for piece selection (default: 1)
//! - `TETRIS_RANDOMIZER`: `uniform` or `bag` (default: uniform)
//!
//! Missing or unparsable values fall back to the default. Dimensions are only
//! checked by [`FieldConfig::validate`], so a zero width read from the
//! environment still fails loudly when the field is built.

use serde::{Deserialize, Serialize};

use crate::core::{FieldError, KindSource, PieceQueue, UniformKinds};
use crate::types::{PieceKind, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Next-piece policy selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Randomizer {
    /// Every draw is uniform over the seven kinds
    Uniform,
    /// 7-bag: one of each kind per shuffled bag
    Bag,
}

impl Randomizer {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" | "random" => Some(Randomizer::Uniform),
            "bag" | "7bag" | "7-bag" => Some(Randomizer::Bag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::Bag => "bag",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u32,
    pub randomizer: Randomizer,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: 1,
            randomizer: Randomizer::Uniform,
        }
    }
}

impl FieldConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment, map, ...)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = lookup("TETRIS_FIELD_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);

        let height = lookup("TETRIS_FIELD_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);

        let seed = lookup("TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let randomizer = lookup("TETRIS_RANDOMIZER")
            .and_then(|s| Randomizer::from_str(&s))
            .unwrap_or(defaults.randomizer);

        Self {
            width,
            height,
            seed,
            randomizer,
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.width == 0 || self.height == 0 {
            return Err(FieldError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// The kind source this configuration selects, seeded with `seed`
    pub fn kind_source(&self) -> ConfiguredKinds {
        match self.randomizer {
            Randomizer::Uniform => ConfiguredKinds::Uniform(UniformKinds::new(self.seed)),
            Randomizer::Bag => ConfiguredKinds::Bag(PieceQueue::new(self.seed)),
        }
    }
}

/// Kind source chosen at runtime from a [`FieldConfig`]
#[derive(Debug, Clone)]
pub enum ConfiguredKinds {
    Uniform(UniformKinds),
    Bag(PieceQueue),
}

impl KindSource for ConfiguredKinds {
    fn next_kind(&mut self) -> PieceKind {
        match self {
            ConfiguredKinds::Uniform(source) => source.next_kind(),
            ConfiguredKinds::Bag(source) => source.next_kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = FieldConfig::from_lookup(|_| None);
        assert_eq!(config, FieldConfig::default());
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_every_key() {
        let config = FieldConfig::from_lookup(lookup_from(&[
            ("TETRIS_FIELD_WIDTH", "12"),
            ("TETRIS_FIELD_HEIGHT", " 24 "),
            ("TETRIS_SEED", "777"),
            ("TETRIS_RANDOMIZER", "Bag"),
        ]));
        assert_eq!(
            config,
            FieldConfig {
                width: 12,
                height: 24,
                seed: 777,
                randomizer: Randomizer::Bag,
            }
        );
        assert!(matches!(config.kind_source(), ConfiguredKinds::Bag(_)));
    }

    #[test]
    fn unparsable_values_fall_back() {
        let config = FieldConfig::from_lookup(lookup_from(&[
            ("TETRIS_FIELD_WIDTH", "wide"),
            ("TETRIS_SEED", "-3"),
            ("TETRIS_RANDOMIZER", "chaos"),
        ]));
        assert_eq!(config, FieldConfig::default());
    }

    #[test]
    fn zero_dimension_fails_validation() {
        let config = FieldConfig::from_lookup(lookup_from(&[("TETRIS_FIELD_HEIGHT", "0")]));
        assert_eq!(
            config.validate(),
            Err(FieldError::InvalidDimensions {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn configured_source_matches_direct_source() {
        let config = FieldConfig {
            seed: 9,
            ..FieldConfig::default()
        };
        let mut configured = config.kind_source();
        let mut direct = UniformKinds::new(9);
        for _ in 0..20 {
            assert_eq!(configured.next_kind(), direct.next_kind());
        }
    }
}

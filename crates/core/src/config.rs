use crate::DECK_SIZE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_STACK_COUNT: usize = 16;
pub const DEFAULT_STACK_DEPTH: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("stack_count must be at least 1")]
    NoStacks,
    #[error("stack_depth must be at least 1")]
    ZeroDepth,
    #[error("layout holds {capacity} cards but the deck has {deck}")]
    CapacityTooSmall { capacity: usize, deck: usize },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    pub stack_count: usize,
    pub stack_depth: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            stack_count: DEFAULT_STACK_COUNT,
            stack_depth: DEFAULT_STACK_DEPTH,
        }
    }
}

impl LayoutConfig {
    pub fn capacity(&self) -> usize {
        self.stack_count.saturating_mul(self.stack_depth)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub layout: LayoutConfig,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.stack_count == 0 {
            return Err(ConfigError::NoStacks);
        }
        if self.layout.stack_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        let capacity = self.layout.capacity();
        if capacity < DECK_SIZE {
            return Err(ConfigError::CapacityTooSmall {
                capacity,
                deck: DECK_SIZE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fit_the_deck() {
        let config = GameConfig::default();
        assert_eq!(config.layout.stack_count, 16);
        assert_eq!(config.layout.stack_depth, 3);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.layout, LayoutConfig::default());

        let config: GameConfig =
            serde_json::from_str(r#"{"layout": {"stack_depth": 4}}"#).unwrap();
        assert_eq!(config.layout.stack_count, 16);
        assert_eq!(config.layout.stack_depth, 4);
    }

    #[test]
    fn undersized_layouts_are_rejected() {
        let mut config = GameConfig::default();
        config.layout.stack_count = 14;
        assert_eq!(
            config.validate(),
            Err(ConfigError::CapacityTooSmall {
                capacity: 42,
                deck: 44
            })
        );
        config.layout.stack_depth = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroDepth));
        config.layout.stack_count = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoStacks));
    }
}

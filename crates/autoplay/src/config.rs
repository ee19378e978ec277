use crescent_core::{GameConfig, LayoutConfig, Row};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplayConfig {
    pub seed: u64,
    pub layout: LayoutConfig,
    /// Placements plus reshuffles.
    pub max_steps: u32,
    pub max_reshuffles: u32,
    /// Lock this row before the first move instead of following the first hint.
    pub direction: Option<Row>,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            layout: LayoutConfig::default(),
            max_steps: 2_000,
            max_reshuffles: 500,
            direction: None,
        }
    }
}

impl AutoplayConfig {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            seed: Some(self.seed),
            layout: self.layout,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::MoodEntry;

/// Growth stage of the belief tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeLevel {
    Sapling,
    Young,
    Mature,
}

impl TreeLevel {
    pub fn number(self) -> u8 {
        match self {
            TreeLevel::Sapling => 1,
            TreeLevel::Young => 2,
            TreeLevel::Mature => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthStatus {
    pub level: TreeLevel,
    pub progress_percent: f64,
    pub next_level_target: usize,
}

/// Percent offsets within the tree container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub top_percent: f64,
    pub left_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ornament {
    pub entry: MoodEntry,
    pub rank: usize,
    pub top_percent: f64,
    pub left_percent: f64,
    pub animation_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeLayout {
    pub growth: GrowthStatus,
    pub ornaments: Vec<Ornament>,
}

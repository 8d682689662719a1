use crate::models::{GrowthStatus, TreeLevel};

/// Entry count at which the tree becomes a young tree.
pub const YOUNG_THRESHOLD: usize = 3;
/// Entry count at which the tree is fully grown.
pub const MATURE_THRESHOLD: usize = 8;

pub fn compute_level(entry_count: usize) -> GrowthStatus {
    let level = if entry_count >= MATURE_THRESHOLD {
        TreeLevel::Mature
    } else if entry_count >= YOUNG_THRESHOLD {
        TreeLevel::Young
    } else {
        TreeLevel::Sapling
    };

    let (base, target) = match level {
        TreeLevel::Sapling => (0, YOUNG_THRESHOLD),
        TreeLevel::Young => (YOUNG_THRESHOLD, MATURE_THRESHOLD),
        // Cosmetic goal only; a mature tree never levels up again.
        TreeLevel::Mature => (MATURE_THRESHOLD, MATURE_THRESHOLD * 2),
    };

    let progress_percent = match level {
        TreeLevel::Mature => 100.0,
        _ => {
            let span = (target - base) as f64;
            (((entry_count - base) as f64 / span) * 100.0).clamp(0.0, 100.0)
        }
    };

    GrowthStatus {
        level,
        progress_percent,
        next_level_target: target,
    }
}

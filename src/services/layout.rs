//! Ornament placement on the belief tree.
//!
//! Coordinates are percentages of the tree container. The tree grows taller
//! and wider with its level; higher-ranked ornaments sit nearer the top. Amber
//! ornaments ignore the level and rest in the root band at the bottom.

use crate::models::{MoodEntry, Ornament, Position, TreeLayout, TreeLevel, LAYOUT_SEED_RANGE};
use crate::services::growth::compute_level;
use crate::services::ranking::rank_entries;

const ROOT_TOP: f64 = 85.0;
const ROOT_TOP_SPAN: u8 = 13;
const ROOT_LEFT: f64 = 10.0;
const ROOT_LEFT_SPAN: u8 = 80;

/// Stagger between ornament fade-ins, cycling every five ranks.
const ANIMATION_STEP_MS: u32 = 500;
const ANIMATION_CYCLE: usize = 5;

pub fn calculate_position(
    level: TreeLevel,
    rank_index: usize,
    total_count: usize,
    seed: u8,
    is_amber: bool,
) -> Position {
    let seed = seed % LAYOUT_SEED_RANGE;

    if is_amber {
        return Position {
            top_percent: ROOT_TOP + f64::from(seed % ROOT_TOP_SPAN),
            left_percent: ROOT_LEFT + f64::from(seed % ROOT_LEFT_SPAN),
        };
    }

    let rank_ratio = (rank_index as f64 / total_count.max(1) as f64).clamp(0.0, 1.0);

    match level {
        // Sapling: tight cluster low in the middle.
        TreeLevel::Sapling => Position {
            top_percent: 50.0 + rank_ratio * 20.0,
            left_percent: 40.0 + f64::from(seed % 20),
        },
        TreeLevel::Young => Position {
            top_percent: 30.0 + rank_ratio * 40.0,
            left_percent: 20.0 + f64::from(seed % 60),
        },
        // Mature: full height, canopy widening towards the bottom.
        TreeLevel::Mature => {
            let spread_width = 20.0 + rank_ratio * 60.0;
            let offset = f64::from(seed) / 100.0;
            Position {
                top_percent: 10.0 + rank_ratio * 65.0,
                left_percent: (50.0 - spread_width / 2.0) + offset * spread_width,
            }
        }
    }
}

/// Ranks `entries`, derives the tree level from their count and places every
/// ornament. The result is in rank order.
pub fn arrange_tree(entries: &[MoodEntry]) -> TreeLayout {
    let ranked = rank_entries(entries);
    let total = ranked.len();
    let growth = compute_level(total);

    let ornaments = ranked
        .into_iter()
        .enumerate()
        .map(|(rank, entry)| {
            let position = calculate_position(
                growth.level,
                rank,
                total,
                entry.visuals.layout_seed,
                entry.visuals.is_amber(),
            );
            Ornament {
                entry,
                rank,
                top_percent: position.top_percent,
                left_percent: position.left_percent,
                animation_delay_ms: (rank % ANIMATION_CYCLE) as u32 * ANIMATION_STEP_MS,
            }
        })
        .collect();

    TreeLayout { growth, ornaments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CrystalVisuals, MoodContent, MoodStats, MoodType};
    use chrono::{Duration, TimeZone, Utc};

    const LEVELS: [TreeLevel; 3] = [TreeLevel::Sapling, TreeLevel::Young, TreeLevel::Mature];

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
    }

    #[test]
    fn test_sapling_coordinates() {
        let pos = calculate_position(TreeLevel::Sapling, 1, 2, 47, false);
        assert_close(pos.top_percent, 60.0);
        assert_close(pos.left_percent, 47.0);
    }

    #[test]
    fn test_young_coordinates() {
        let pos = calculate_position(TreeLevel::Young, 2, 4, 75, false);
        assert_close(pos.top_percent, 50.0);
        assert_close(pos.left_percent, 35.0);
    }

    #[test]
    fn test_mature_canopy_widens_with_rank() {
        let top = calculate_position(TreeLevel::Mature, 0, 10, 0, false);
        assert_close(top.top_percent, 10.0);
        assert_close(top.left_percent, 40.0);

        let low = calculate_position(TreeLevel::Mature, 5, 10, 0, false);
        assert_close(low.top_percent, 42.5);
        assert_close(low.left_percent, 25.0);

        let low_right = calculate_position(TreeLevel::Mature, 5, 10, 99, false);
        assert_close(low_right.left_percent, 25.0 + 0.99 * 50.0);
    }

    #[test]
    fn test_amber_sits_in_root_band_regardless_of_level() {
        for level in LEVELS {
            let pos = calculate_position(level, 3, 9, 27, true);
            assert_close(pos.top_percent, 86.0);
            assert_close(pos.left_percent, 37.0);
        }

        for seed in 0..100u8 {
            for level in LEVELS {
                let pos = calculate_position(level, 0, 0, seed, true);
                assert!((85.0..98.0).contains(&pos.top_percent));
                assert!((10.0..90.0).contains(&pos.left_percent));
            }
        }
    }

    #[test]
    fn test_standard_positions_stay_in_container() {
        for level in LEVELS {
            for total in 0..12usize {
                for rank in 0..total.max(1) {
                    for seed in 0..100u8 {
                        let pos = calculate_position(level, rank, total, seed, false);
                        assert!((0.0..=100.0).contains(&pos.top_percent));
                        assert!((0.0..=100.0).contains(&pos.left_percent));
                    }
                }
            }
        }
    }

    #[test]
    fn test_oversized_seed_is_folded() {
        let pos = calculate_position(TreeLevel::Mature, 0, 5, 150, false);
        assert_close(pos.left_percent, 50.0);
        assert_eq!(pos, calculate_position(TreeLevel::Mature, 0, 5, 50, false));

        for seed in 100..=u8::MAX {
            for rank in 0..5 {
                let pos = calculate_position(TreeLevel::Mature, rank, 5, seed, false);
                assert!((0.0..=100.0).contains(&pos.left_percent));
            }
        }
    }

    #[test]
    fn test_zero_total_uses_zero_ratio() {
        let pos = calculate_position(TreeLevel::Young, 0, 0, 10, false);
        assert_close(pos.top_percent, 30.0);
        assert_close(pos.left_percent, 30.0);
    }

    #[test]
    fn test_arrange_tree_orders_and_staggers() {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let entries: Vec<MoodEntry> = (0..7)
            .map(|i| MoodEntry {
                id: format!("e{}", i),
                created_at: base + Duration::minutes(i),
                content: MoodContent {
                    mood: MoodType::Euphoric,
                    event_text: String::new(),
                    source: None,
                    insight_text: String::new(),
                    image_file: None,
                },
                visuals: CrystalVisuals {
                    layout_seed: 10,
                    ..CrystalVisuals::default()
                },
                stats: MoodStats {
                    click_count: if i == 0 { 4 } else { 0 },
                    last_interaction_at: None,
                },
            })
            .collect();

        let layout = arrange_tree(&entries);
        assert_eq!(layout.growth.level, TreeLevel::Young);
        assert_eq!(layout.ornaments.len(), 7);

        let order: Vec<&str> = layout.ornaments.iter().map(|o| o.entry.id.as_str()).collect();
        assert_eq!(order, vec!["e0", "e6", "e5", "e4", "e3", "e2", "e1"]);

        let delays: Vec<u32> = layout.ornaments.iter().map(|o| o.animation_delay_ms).collect();
        assert_eq!(delays, vec![0, 500, 1000, 1500, 2000, 0, 500]);

        assert_close(layout.ornaments[0].top_percent, 30.0);
        assert_close(layout.ornaments[0].left_percent, 30.0);
    }

    #[test]
    fn test_arrange_empty_tree() {
        let layout = arrange_tree(&[]);
        assert_eq!(layout.growth.level, TreeLevel::Sapling);
        assert!(layout.ornaments.is_empty());
    }
}

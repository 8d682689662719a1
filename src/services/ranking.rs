use std::cmp::Ordering;

use crate::models::MoodEntry;

/// Most-clicked first; newer first among equal clicks.
pub fn compare_priority(a: &MoodEntry, b: &MoodEntry) -> Ordering {
    b.stats
        .click_count
        .cmp(&a.stats.click_count)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Stable: entries tied on both keys keep their input order.
pub fn rank_in_place(entries: &mut [MoodEntry]) {
    entries.sort_by(compare_priority);
}

pub fn rank_entries(entries: &[MoodEntry]) -> Vec<MoodEntry> {
    let mut ranked = entries.to_vec();
    rank_in_place(&mut ranked);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CrystalVisuals, MoodContent, MoodStats, MoodType};
    use chrono::{DateTime, TimeZone, Utc};

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, minute, 0).unwrap()
    }

    fn entry(id: &str, clicks: u32, created_at: DateTime<Utc>) -> MoodEntry {
        MoodEntry {
            id: id.to_string(),
            created_at,
            content: MoodContent {
                mood: MoodType::Stable,
                event_text: String::new(),
                source: None,
                insight_text: String::new(),
                image_file: None,
            },
            visuals: CrystalVisuals::default(),
            stats: MoodStats {
                click_count: clicks,
                last_interaction_at: None,
            },
        }
    }

    fn ids(entries: &[MoodEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_clicks_dominate_time() {
        let ranked = rank_entries(&[entry("old-popular", 5, at(0)), entry("new-quiet", 3, at(30))]);
        assert_eq!(ids(&ranked), vec!["old-popular", "new-quiet"]);

        let ranked = rank_entries(&[entry("new-quiet", 3, at(30)), entry("old-popular", 5, at(0))]);
        assert_eq!(ids(&ranked), vec!["old-popular", "new-quiet"]);
    }

    #[test]
    fn test_newer_first_among_equal_clicks() {
        let ranked = rank_entries(&[entry("a", 1, at(1)), entry("b", 1, at(3)), entry("c", 1, at(2))]);
        assert_eq!(ids(&ranked), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let input = vec![
            entry("x", 2, at(5)),
            entry("first", 0, at(10)),
            entry("second", 0, at(10)),
            entry("third", 0, at(10)),
        ];
        let ranked = rank_entries(&input);
        assert_eq!(ids(&ranked), vec!["x", "first", "second", "third"]);
        assert_eq!(rank_entries(&input), ranked);
    }

    #[test]
    fn test_rank_does_not_touch_input() {
        let input = vec![entry("a", 0, at(1)), entry("b", 9, at(0))];
        let _ = rank_entries(&input);
        assert_eq!(ids(&input), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_entries(&[]).is_empty());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Layout seeds fall in `0..LAYOUT_SEED_RANGE`.
pub const LAYOUT_SEED_RANGE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoodType {
    Euphoric,
    Stable,
    Depressed,
}

/// Where the user attributes a good moment to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HappinessSource {
    Internal,
    External,
}

/// What the user actually typed or selected. Never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodContent {
    pub mood: MoodType,
    pub event_text: String,
    #[serde(default)]
    pub source: Option<HappinessSource>,
    pub insight_text: String,
    #[serde(default)]
    pub image_file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleVariant {
    Nebula,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTheme {
    pub border: String,
    pub glow: String,
    pub nebula: String,
}

impl ColorTheme {
    pub fn new(border: &str, glow: &str, nebula: &str) -> Self {
        Self {
            border: border.to_string(),
            glow: glow.to_string(),
            nebula: nebula.to_string(),
        }
    }
}

/// Render spec computed once at creation. `layout_seed` is frozen forever so
/// an ornament stays put across reloads unless its rank changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrystalVisuals {
    pub style_variant: StyleVariant,
    pub color_theme: ColorTheme,
    #[serde(deserialize_with = "deserialize_seed")]
    pub layout_seed: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_amber: Option<bool>,
}

impl CrystalVisuals {
    pub fn is_amber(&self) -> bool {
        self.is_amber.unwrap_or(false)
    }
}

/// Folds any stored integer into the seed range so one odd record cannot
/// fail the whole collection or push its ornament off the tree.
fn deserialize_seed<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.rem_euclid(i64::from(LAYOUT_SEED_RANGE)) as u8)
}

// Records written before visuals existed render as a plain grey nebula.
impl Default for CrystalVisuals {
    fn default() -> Self {
        Self {
            style_variant: StyleVariant::Nebula,
            color_theme: ColorTheme::new(
                "border-white/50",
                "shadow-white",
                "from-gray-100 to-gray-200",
            ),
            layout_seed: 0,
            is_amber: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodStats {
    #[serde(default)]
    pub click_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_interaction_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub content: MoodContent,
    #[serde(default)]
    pub visuals: CrystalVisuals,
    #[serde(default)]
    pub stats: MoodStats,
}

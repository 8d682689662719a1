use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::models::{Settings, StorageBackend};

const ENV_STORAGE_BACKEND: &str = "MOODTREE_STORAGE_BACKEND";
const ENV_STORAGE_KEY: &str = "MOODTREE_STORAGE_KEY";
const ENV_LOG_LEVEL: &str = "MOODTREE_LOG_LEVEL";

pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

pub fn settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config").join("settings.json")
}

/// Reads `<data_dir>/config/settings.json`. A missing or unreadable file
/// yields defaults; environment overrides are applied either way.
pub fn load_settings(data_dir: &Path) -> Settings {
    let path = settings_path(data_dir);
    let mut settings = if path.exists() {
        std::fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|content| serde_json::from_str::<Settings>(&content).map_err(Into::into))
            .unwrap_or_else(|e| {
                log::warn!("Ignoring invalid settings at {}: {}", path.display(), e);
                Settings::default()
            })
    } else {
        Settings::default()
    };

    apply_env_defaults(&mut settings);
    settings
}

pub fn save_settings(data_dir: &Path, settings: &Settings) -> anyhow::Result<()> {
    let path = settings_path(data_dir);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&path, serde_json::to_string_pretty(settings)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn apply_env_defaults(settings: &mut Settings) {
    apply_overrides(settings, |name| std::env::var(name).ok());
}

/// Applies overrides looked up through `lookup`; blank values are ignored.
pub fn apply_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |name: &str| {
        lookup(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    if let Some(value) = lookup(ENV_STORAGE_BACKEND) {
        match value.parse::<StorageBackend>() {
            Ok(backend) => settings.storage.backend = backend,
            Err(e) => log::warn!("{}: {}", ENV_STORAGE_BACKEND, e),
        }
    }
    if let Some(key) = lookup(ENV_STORAGE_KEY) {
        settings.storage.storage_key = key;
    }
    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        settings.general.log_level = level;
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            general: GeneralSettings::default(),
            storage: StorageSettings::default(),
        }
    }
}

fn default_version() -> String {
    "1.0.0".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    File,
    Sqlite,
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" | "json" => Ok(Self::File),
            "sqlite" | "db" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// SQLite database file name, relative to the data directory.
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default = "default_backup_corrupt")]
    pub backup_corrupt: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            storage_key: default_storage_key(),
            file_name: default_file_name(),
            backup_corrupt: default_backup_corrupt(),
        }
    }
}

fn default_backend() -> StorageBackend {
    StorageBackend::File
}

fn default_storage_key() -> String {
    "mood_entries".to_string()
}

fn default_file_name() -> String {
    "moodtree.db".to_string()
}

fn default_backup_corrupt() -> bool {
    true
}

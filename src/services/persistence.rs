//! Persistence backends for the entry store.
//!
//! The store only ever needs "read the blob under this key" and "replace the
//! blob under this key", so that is all a backend exposes. Three backends ship
//! with the crate: an in-memory map, one JSON file per key, and a SQLite
//! key/value table.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::Connection;

use crate::database;
use crate::models::{StorageBackend, StorageSettings};
use crate::utils::error::StoreResult;

pub trait BlobBackend: Send + Sync {
    /// `Ok(None)` when nothing has ever been written under `key`.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the whole value under `key`.
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.values().keys().cloned().collect();
        keys.sort();
        keys
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BlobBackend for MemoryBackend {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobBackend for FileBackend {
    /// Invalid UTF-8 is decoded lossily so a damaged file still reaches the
    /// store as corrupt text and gets backed up, rather than failing the read.
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        // Write next to the target and rename so a crash never leaves half a file.
        let path = self.path_for(key);
        let tmp_path = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.dir.display())
    }
}

pub struct SqliteBackend {
    conn: Mutex<Connection>,
    label: String,
}

impl SqliteBackend {
    pub fn open(db_path: &Path) -> StoreResult<Self> {
        let conn = database::init_database(db_path)?;
        Ok(Self {
            conn: Mutex::new(conn),
            label: format!("sqlite:{}", db_path.display()),
        })
    }

    pub fn in_memory() -> StoreResult<Self> {
        let conn = database::init_in_memory()?;
        Ok(Self {
            conn: Mutex::new(conn),
            label: "sqlite::memory:".to_string(),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Keys starting with `prefix`, e.g. the corrupt-blob backups of a key.
    pub fn keys_with_prefix(&self, prefix: &str) -> StoreResult<Vec<String>> {
        database::queries::list_keys(&self.conn(), prefix)
    }
}

impl BlobBackend for SqliteBackend {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        database::queries::read_value(&self.conn(), key)
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        database::queries::write_value(&self.conn(), key, value)
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

/// Builds the backend selected in settings, rooted at `data_dir`.
pub fn open_backend(settings: &StorageSettings, data_dir: &Path) -> StoreResult<Box<dyn BlobBackend>> {
    let backend: Box<dyn BlobBackend> = match settings.backend {
        StorageBackend::File => Box::new(FileBackend::new(data_dir)?),
        StorageBackend::Sqlite => {
            fs::create_dir_all(data_dir)?;
            Box::new(SqliteBackend::open(&data_dir.join(&settings.file_name))?)
        }
        StorageBackend::Memory => Box::new(MemoryBackend::new()),
    };

    Ok(backend)
}

//! Durable mood entry collection.
//!
//! The whole collection lives under one backend key as a JSON array. Every
//! mutation reads it, changes it and writes it back while holding the store's
//! writer guard, so concurrent callers in one process never lose updates.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use anyhow::Context;
use chrono::{DateTime, Utc};

use crate::models::{MoodContent, MoodEntry, MoodStats, MoodType, Settings, StorageStats};
use crate::services::crystal_spec::{generate_spec, RandomSeeds, SeedSource};
use crate::services::persistence::{open_backend, BlobBackend};
use crate::utils::error::{StoreError, StoreResult};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Outcome of reading the stored collection.
enum Loaded {
    Entries(Vec<MoodEntry>),
    /// Blob present but unparseable; carries the raw text for backup.
    Corrupt(String),
    /// Backend failed to read at all.
    Unreadable,
}

impl Loaded {
    fn into_entries(self) -> Vec<MoodEntry> {
        match self {
            Loaded::Entries(entries) => entries,
            Loaded::Corrupt(_) | Loaded::Unreadable => Vec::new(),
        }
    }
}

/// The key doubles as a file name for the file backend, so it must stay a
/// single plain path component.
fn validate_storage_key(key: &str) -> StoreResult<()> {
    if key.is_empty() {
        return Err(StoreError::config("storage key is empty"));
    }
    if key.starts_with('.') || key.contains(['/', '\\']) {
        return Err(StoreError::config(format!(
            "storage key '{}' must be a plain name without path separators",
            key
        )));
    }
    Ok(())
}

struct WriterState {
    seeds: Box<dyn SeedSource>,
}

pub struct EntryStore {
    backend: Box<dyn BlobBackend>,
    key: String,
    clock: Box<dyn Clock>,
    backup_corrupt: bool,
    writer: Mutex<WriterState>,
}

impl EntryStore {
    pub fn new(backend: Box<dyn BlobBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            clock: Box::new(SystemClock),
            backup_corrupt: true,
            writer: Mutex::new(WriterState {
                seeds: Box::new(RandomSeeds::from_entropy()),
            }),
        }
    }

    /// Opens the store described by `settings` under `data_dir`.
    pub fn open(settings: &Settings, data_dir: &Path) -> StoreResult<Self> {
        validate_storage_key(&settings.storage.storage_key)?;
        let backend = open_backend(&settings.storage, data_dir)?;
        log::info!(
            "Opening entry store on {} (key '{}')",
            backend.describe(),
            settings.storage.storage_key
        );
        Ok(Self::new(backend, settings.storage.storage_key.clone())
            .with_backup_corrupt(settings.storage.backup_corrupt))
    }

    pub fn with_seed_source(self, seeds: Box<dyn SeedSource>) -> Self {
        Self {
            writer: Mutex::new(WriterState { seeds }),
            ..self
        }
    }

    pub fn with_clock(self, clock: Box<dyn Clock>) -> Self {
        Self { clock, ..self }
    }

    pub fn with_backup_corrupt(self, backup_corrupt: bool) -> Self {
        Self {
            backup_corrupt,
            ..self
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    fn lock(&self) -> MutexGuard<'_, WriterState> {
        // A panic mid-write leaves the backend as it was; the guard holds no data
        // that could be half-updated.
        self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn load(&self) -> Loaded {
        self.load_with_size().0
    }

    /// Reads the backend once; the size is the stored payload length in bytes.
    fn load_with_size(&self) -> (Loaded, usize) {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (Loaded::Entries(Vec::new()), 0),
            Err(e) => {
                log::warn!("Failed to read '{}', treating as empty: {}", self.key, e);
                return (Loaded::Unreadable, 0);
            }
        };

        let size = raw.len();
        let loaded = match serde_json::from_str::<Vec<MoodEntry>>(&raw) {
            Ok(entries) => Loaded::Entries(entries),
            Err(e) => {
                log::warn!("Stored '{}' is corrupt, treating as empty: {}", self.key, e);
                Loaded::Corrupt(raw)
            }
        };
        (loaded, size)
    }

    /// Loads for a read-modify-write. Also returns the raw blob when it was
    /// corrupt, so `persist` can copy it aside before replacing it.
    fn load_for_write(&self) -> (Vec<MoodEntry>, Option<String>) {
        match self.load() {
            Loaded::Corrupt(raw) => (Vec::new(), Some(raw)),
            loaded => (loaded.into_entries(), None),
        }
    }

    fn backup_corrupt_blob(&self, raw: &str) {
        let backup_key = format!("{}.corrupt-{}", self.key, self.clock.now().timestamp_millis());
        match self.backend.write(&backup_key, raw) {
            Ok(()) => log::warn!("Backed up corrupt '{}' to '{}'", self.key, backup_key),
            Err(e) => log::error!("Failed to back up corrupt '{}': {}", self.key, e),
        }
    }

    fn persist(&self, entries: &[MoodEntry], corrupt: Option<String>) -> StoreResult<()> {
        let payload = serde_json::to_string(entries)?;

        if let Some(raw) = corrupt.filter(|_| self.backup_corrupt) {
            self.backup_corrupt_blob(&raw);
        }

        self.backend.write(&self.key, &payload).map_err(|e| {
            log::error!("Failed to persist '{}': {}", self.key, e);
            e
        })
    }

    pub fn create_entry(&self, content: MoodContent) -> StoreResult<MoodEntry> {
        let mut writer = self.lock();

        let visuals = generate_spec(&content, writer.seeds.as_mut());
        let entry = MoodEntry {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: self.clock.now(),
            content,
            visuals,
            stats: MoodStats::default(),
        };

        let (mut entries, corrupt) = self.load_for_write();
        entries.push(entry.clone());
        self.persist(&entries, corrupt)?;

        log::info!(
            "Created entry {} ({:?}, seed {})",
            entry.id,
            entry.content.mood,
            entry.visuals.layout_seed
        );

        Ok(entry)
    }

    /// All entries in insertion order. Never fails: missing or corrupt data
    /// reads as an empty journal.
    pub fn get_all_entries(&self) -> Vec<MoodEntry> {
        let _writer = self.lock();
        self.load().into_entries()
    }

    /// `Ok(None)` when no entry has this id; nothing is written in that case.
    pub fn increment_click_count(&self, id: &str) -> StoreResult<Option<MoodEntry>> {
        let _writer = self.lock();

        let (mut entries, corrupt) = self.load_for_write();
        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            log::debug!("Click on unknown entry {}", id);
            return Ok(None);
        };

        entry.stats.click_count = entry.stats.click_count.saturating_add(1);
        entry.stats.last_interaction_at = Some(self.clock.now());
        let updated = entry.clone();

        self.persist(&entries, corrupt)?;
        log::debug!("Entry {} clicked, count now {}", updated.id, updated.stats.click_count);

        Ok(Some(updated))
    }

    pub fn storage_stats(&self) -> StorageStats {
        let _writer = self.lock();

        let (loaded, payload_size) = self.load_with_size();
        let entries = loaded.into_entries();

        let mut stats = StorageStats {
            entries_count: entries.len() as i64,
            payload_size_bytes: payload_size as i64,
            ..StorageStats::default()
        };

        for entry in &entries {
            stats.total_clicks += i64::from(entry.stats.click_count);
            if entry.visuals.is_amber() {
                stats.amber_count += 1;
            }
            match entry.content.mood {
                MoodType::Euphoric => stats.euphoric_count += 1,
                MoodType::Stable => stats.stable_count += 1,
                MoodType::Depressed => stats.depressed_count += 1,
            }
        }

        stats.oldest_entry = entries.iter().map(|e| e.created_at).min();
        stats.newest_entry = entries.iter().map(|e| e.created_at).max();

        stats
    }

    /// Writes every entry to a timestamped JSON file in `export_dir` and
    /// returns its path.
    pub fn export_to(&self, export_dir: &Path) -> anyhow::Result<PathBuf> {
        let entries = self.get_all_entries();
        let now = self.clock.now();

        let export = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "exported_at": now.to_rfc3339(),
            "entries": entries,
        });

        std::fs::create_dir_all(export_dir)
            .with_context(|| format!("creating {}", export_dir.display()))?;
        let export_path = export_dir.join(format!(
            "moodtree_export_{}.json",
            now.format("%Y%m%d_%H%M%S")
        ));
        std::fs::write(&export_path, serde_json::to_string_pretty(&export)?)
            .with_context(|| format!("writing {}", export_path.display()))?;

        log::info!("Exported {} entries to {}", entries.len(), export_path.display());
        Ok(export_path)
    }
}

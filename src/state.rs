//! State shared with Tauri commands.

use std::path::PathBuf;
use std::sync::Arc;

use crate::models::Settings;
use crate::services::EntryStore;
use crate::utils::error::StoreResult;

pub struct AppState {
    pub store: Arc<EntryStore>,
    pub data_dir: PathBuf,
}

impl AppState {
    pub fn open(settings: &Settings, data_dir: PathBuf) -> StoreResult<Self> {
        let store = EntryStore::open(settings, &data_dir)?;
        Ok(Self {
            store: Arc::new(store),
            data_dir,
        })
    }
}

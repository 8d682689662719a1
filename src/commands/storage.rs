use tauri::State;

use super::with_store;
use crate::models::StorageStats;
use crate::state::AppState;

#[tauri::command]
pub async fn get_storage_stats(state: State<'_, AppState>) -> Result<StorageStats, String> {
    with_store(&state.store, |store| Ok(store.storage_stats())).await
}

#[tauri::command]
pub async fn export_data(state: State<'_, AppState>) -> Result<String, String> {
    let export_dir = state.data_dir.join("exports");
    with_store(&state.store, move |store| {
        store
            .export_to(&export_dir)
            .map(|path| path.to_string_lossy().to_string())
            .map_err(|e| e.to_string())
    })
    .await
}

use tauri::State;

use super::with_store;
use crate::models::{GrowthStatus, MoodContent, MoodEntry, TreeLayout};
use crate::services::growth::compute_level;
use crate::services::layout::arrange_tree;
use crate::state::AppState;

#[tauri::command]
pub async fn create_entry(
    state: State<'_, AppState>,
    content: MoodContent,
) -> Result<MoodEntry, String> {
    with_store(&state.store, move |store| {
        store.create_entry(content).map_err(|e| e.to_string())
    })
    .await
}

#[tauri::command]
pub async fn get_entries(state: State<'_, AppState>) -> Result<Vec<MoodEntry>, String> {
    with_store(&state.store, |store| Ok(store.get_all_entries())).await
}

/// Resolves to `null` for an unknown id.
#[tauri::command]
pub async fn increment_click_count(
    state: State<'_, AppState>,
    id: String,
) -> Result<Option<MoodEntry>, String> {
    with_store(&state.store, move |store| {
        store.increment_click_count(&id).map_err(|e| e.to_string())
    })
    .await
}

#[tauri::command]
pub async fn get_tree_layout(state: State<'_, AppState>) -> Result<TreeLayout, String> {
    with_store(&state.store, |store| Ok(arrange_tree(&store.get_all_entries()))).await
}

#[tauri::command]
pub async fn get_growth_status(state: State<'_, AppState>) -> Result<GrowthStatus, String> {
    with_store(&state.store, |store| Ok(compute_level(store.get_all_entries().len()))).await
}

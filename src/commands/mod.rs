pub mod entry;
pub mod storage;

use std::sync::Arc;

use crate::services::EntryStore;

/// Runs a store call on the blocking pool so disk I/O never stalls the UI thread.
async fn with_store<T, F>(store: &Arc<EntryStore>, f: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce(&EntryStore) -> Result<T, String> + Send + 'static,
{
    let store = Arc::clone(store);
    tokio::task::spawn_blocking(move || f(&store))
        .await
        .map_err(|e| e.to_string())?
}

// Prevents additional console window on Windows (silent launch).
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use moodtree::commands;
use moodtree::state::AppState;
use moodtree::utils::config;
use tauri::Manager;

fn main() {
    config::load_dotenv();

    tauri::Builder::default()
        .setup(|app| {
            let data_dir = app.path().app_data_dir()?;
            std::fs::create_dir_all(&data_dir)?;

            let settings = config::load_settings(&data_dir);
            init_logging(&settings.general.log_level);

            let state = AppState::open(&settings, data_dir)?;
            app.manage(state);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Entry commands
            commands::entry::create_entry,
            commands::entry::get_entries,
            commands::entry::increment_click_count,
            commands::entry::get_tree_layout,
            commands::entry::get_growth_status,
            // Storage commands
            commands::storage::get_storage_stats,
            commands::storage::export_data,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

fn init_logging(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use nc_tauri::bootstrap::{initialize, run_app};

fn main() {
    let config = initialize();

    if let Err(err) = run_app(tauri::generate_context!(), config) {
        tracing::error!(error = format!("{err:#}"), "NavClip failed to start");
        std::process::exit(1);
    }
}

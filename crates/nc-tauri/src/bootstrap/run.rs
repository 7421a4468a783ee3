use anyhow::Context;
use nc_core::config::AppConfig;
use tauri::{Manager, RunEvent};
use tracing::info;

use super::wiring::build_tray_runtime;
use crate::tray::create_tray;

/// Run the tray application until the user picks Exit.
///
/// The app has no windows. Platform-adapter and tray failures during setup
/// abort startup with an error.
pub fn run_app(context: tauri::Context<tauri::Wry>, config: AppConfig) -> anyhow::Result<()> {
    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(move |app| {
            let runtime = build_tray_runtime(app.handle(), &config)?;
            app.manage(runtime);
            create_tray(app.handle())?;
            Ok(())
        })
        .build(context)
        .context("error while building tauri application")?;

    app.run(|_app, event| match event {
        // With no windows open Tauri would otherwise quit on its own; only an
        // explicit `exit(code)` ends the process.
        RunEvent::ExitRequested { code, api, .. } if code.is_none() => api.prevent_exit(),
        RunEvent::Exit => info!("application exiting"),
        _ => {}
    });

    Ok(())
}

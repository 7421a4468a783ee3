//! Tray icon and menu.
//!
//! Menu clicks are handed to a blocking worker thread: the actions open modal
//! dialogs, which must not run on the event loop thread.

use anyhow::{anyhow, Context};
use nc_app::{tray::MenuEntry, tray::MENU_LAYOUT, DispatchOutcome, TrayAction};
use tauri::{
    menu::{Menu, MenuEvent, MenuItem, PredefinedMenuItem},
    tray::TrayIconBuilder,
    AppHandle, Manager, Runtime,
};
use tracing::{info, warn};

use crate::bootstrap::TrayRuntime;

pub const TRAY_ID: &str = "navclip-tray";
pub const TRAY_TOOLTIP: &str = "Nav Clipboard";

/// Build the tray menu from [`MENU_LAYOUT`].
pub fn build_menu<R: Runtime>(app: &AppHandle<R>) -> tauri::Result<Menu<R>> {
    let menu = Menu::new(app)?;
    for entry in MENU_LAYOUT {
        match *entry {
            MenuEntry::Item(action) => {
                let item = MenuItem::with_id(app, action.id(), action.label(), true, None::<&str>)?;
                menu.append(&item)?;
            }
            MenuEntry::Separator => menu.append(&PredefinedMenuItem::separator(app)?)?,
        }
    }
    Ok(menu)
}

/// Create the tray icon. [`TrayRuntime`] must already be managed.
pub fn create_tray<R: Runtime>(app: &AppHandle<R>) -> anyhow::Result<()> {
    let icon = app
        .default_window_icon()
        .cloned()
        .ok_or_else(|| anyhow!("no application icon configured"))?;
    let menu = build_menu(app).context("failed to build tray menu")?;

    TrayIconBuilder::with_id(TRAY_ID)
        .icon(icon)
        .tooltip(TRAY_TOOLTIP)
        .menu(&menu)
        .on_menu_event(on_menu_event)
        .build(app)
        .context("failed to create tray icon")?;

    info!("tray icon ready");
    Ok(())
}

fn on_menu_event<R: Runtime>(app: &AppHandle<R>, event: MenuEvent) {
    let Some(action) = TrayAction::from_id(event.id().as_ref()) else {
        warn!(id = ?event.id(), "unknown tray menu id");
        return;
    };

    let app = app.clone();
    tauri::async_runtime::spawn_blocking(move || run_action(&app, action));
}

fn run_action<R: Runtime>(app: &AppHandle<R>, action: TrayAction) {
    let Some(runtime) = app.try_state::<TrayRuntime>() else {
        warn!(action = action.id(), "tray clicked before the application was wired");
        return;
    };

    let outcome = runtime.lock().dispatch(action);
    if outcome == DispatchOutcome::Exit {
        shutdown(app);
    }
}

fn shutdown<R: Runtime>(app: &AppHandle<R>) {
    info!("exit requested from tray");
    if let Some(tray) = app.remove_tray_by_id(TRAY_ID) {
        if let Err(err) = tray.set_visible(false) {
            warn!(error = %err, "failed to hide tray icon");
        }
    }
    app.exit(0);
}

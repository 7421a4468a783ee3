//! Builds the application object graph once the Tauri app handle exists.

use std::sync::{Arc, Mutex, MutexGuard};

use nc_app::{AboutInfo, App, AppDeps, TrayActionDispatcher};
use nc_core::config::AppConfig;
use nc_platform::{adapters::FsRecordFiles, clipboard::LocalClipboard};
use tauri::{AppHandle, Runtime};
use tracing::info;

use crate::adapters::TauriDialogPort;

/// Managed state behind the tray menu.
///
/// The dispatcher sits behind a mutex so that menu actions run one at a time,
/// each to completion, in click order.
pub struct TrayRuntime {
    dispatcher: Mutex<TrayActionDispatcher>,
}

impl TrayRuntime {
    pub fn new(dispatcher: TrayActionDispatcher) -> Self {
        Self {
            dispatcher: Mutex::new(dispatcher),
        }
    }

    /// Exclusive access to the dispatcher. A panic in an earlier action does
    /// not leave any state behind, so a poisoned lock is recovered.
    pub fn lock(&self) -> MutexGuard<'_, TrayActionDispatcher> {
        self.dispatcher
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Project sources shown in the About box.
pub const SOURCES_URL: &str = env!("CARGO_PKG_REPOSITORY");

pub fn about_info(product_name: &str, version: &str) -> AboutInfo {
    AboutInfo {
        product_name: product_name.to_string(),
        version: version.to_string(),
        sources: Some(SOURCES_URL.to_string()),
    }
}

pub fn build_tray_runtime<R: Runtime>(
    app: &AppHandle<R>,
    config: &AppConfig,
) -> anyhow::Result<TrayRuntime> {
    let deps = AppDeps {
        clipboard: Arc::new(LocalClipboard::new()?),
        record_files: Arc::new(FsRecordFiles::new()),
        dialog: Arc::new(TauriDialogPort::new(app.clone())),
        codec: config.codec.clone(),
    };

    let package = app.package_info();
    let about = about_info(&package.name, &package.version.to_string());
    info!(
        product = %about.product_name,
        version = %about.version,
        compression_level = config.codec.compression_level.value(),
        line_ending = ?config.codec.line_ending,
        "application wired"
    );

    Ok(TrayRuntime::new(App::new(deps).dispatcher(about)))
}

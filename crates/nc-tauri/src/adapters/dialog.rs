use std::path::PathBuf;

use nc_core::ports::DialogPort;
use tauri::{AppHandle, Runtime};
use tauri_plugin_dialog::{DialogExt, FilePath, MessageDialogKind};
use tracing::warn;

const DIALOG_TITLE: &str = "Nav Clipboard";

/// Modal dialogs through `tauri-plugin-dialog`.
///
/// All methods block, so they must only be called off the event loop thread.
pub struct TauriDialogPort<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> TauriDialogPort<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }

    fn show(&self, message: &str, kind: MessageDialogKind) {
        let _ = self
            .app
            .dialog()
            .message(message)
            .title(DIALOG_TITLE)
            .kind(kind)
            .blocking_show();
    }
}

fn into_local_path(picked: Option<FilePath>) -> Option<PathBuf> {
    match picked?.into_path() {
        Ok(path) => Some(path),
        Err(err) => {
            warn!(error = %err, "picked location is not a local path");
            None
        }
    }
}

impl<R: Runtime> DialogPort for TauriDialogPort<R> {
    fn pick_save_path(&self) -> Option<PathBuf> {
        into_local_path(
            self.app
                .dialog()
                .file()
                .set_title("Save clipboard to file")
                .blocking_save_file(),
        )
    }

    fn pick_open_path(&self) -> Option<PathBuf> {
        into_local_path(
            self.app
                .dialog()
                .file()
                .set_title("Load clipboard from file")
                .blocking_pick_file(),
        )
    }

    fn show_info(&self, message: &str) {
        self.show(message, MessageDialogKind::Info);
    }

    fn show_error(&self, message: &str) {
        self.show(message, MessageDialogKind::Error);
    }
}

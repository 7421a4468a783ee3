use std::sync::Arc;

use nc_core::ports::DialogPort;
use tracing::{error, info, info_span};

use super::TrayAction;
use crate::deps::UseCases;
use crate::error::ActionError;
use crate::usecases::clipboard::{ClipboardToText, TextToClipboard};
use crate::usecases::file::{LoadFromFile, SaveOutcome, SaveToFile};

/// Text of the "About..." box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    pub product_name: String,
    pub version: String,
    pub sources: Option<String>,
}

impl AboutInfo {
    pub fn message(&self) -> String {
        let mut message = format!("{} clipboard manager, ver: {}", self.product_name, self.version);
        if let Some(sources) = self.sources.as_deref().filter(|s| !s.is_empty()) {
            message.push_str("\nSources: ");
            message.push_str(sources);
        }
        message
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Completed,
    /// The user dismissed a file dialog; nothing changed.
    Cancelled,
    /// An error was shown to the user; nothing changed.
    Failed,
    /// The shell should remove the tray icon and exit.
    Exit,
}

/// Runs one tray action to completion and reports the result through modal
/// dialogs.
pub struct TrayActionDispatcher {
    clipboard_to_text: ClipboardToText,
    text_to_clipboard: TextToClipboard,
    save_to_file: SaveToFile,
    load_from_file: LoadFromFile,
    dialog: Arc<dyn DialogPort>,
    about: AboutInfo,
}

impl TrayActionDispatcher {
    pub fn new(usecases: UseCases<'_>, dialog: Arc<dyn DialogPort>, about: AboutInfo) -> Self {
        Self {
            clipboard_to_text: usecases.clipboard_to_text(),
            text_to_clipboard: usecases.text_to_clipboard(),
            save_to_file: usecases.save_to_file(),
            load_from_file: usecases.load_from_file(),
            dialog,
            about,
        }
    }

    pub fn dispatch(&self, action: TrayAction) -> DispatchOutcome {
        let _span = info_span!("tray_action", action = action.id()).entered();
        info!("dispatching tray action");

        let result = match action {
            TrayAction::About => {
                self.dialog.show_info(&self.about.message());
                Ok(DispatchOutcome::Completed)
            }
            TrayAction::TextToClipboard => self.text_to_clipboard.execute().map(|format| {
                self.dialog
                    .show_info(&format!("{format} has been pushed to the clipboard"));
                DispatchOutcome::Completed
            }),
            TrayAction::ClipboardToText => self.clipboard_to_text.execute().map(|format| {
                self.dialog
                    .show_info(&format!("{format} has been converted to Base64 text format"));
                DispatchOutcome::Completed
            }),
            TrayAction::SaveToFile => self
                .save_to_file
                .execute(|| self.dialog.pick_save_path())
                .map(|outcome| match outcome {
                    SaveOutcome::Saved { .. } => DispatchOutcome::Completed,
                    SaveOutcome::Cancelled => DispatchOutcome::Cancelled,
                }),
            TrayAction::LoadFromFile => self.load_from_file(),
            TrayAction::Exit => Ok(DispatchOutcome::Exit),
        };

        match result {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(error = %err, "tray action failed");
                self.dialog.show_error(&err.user_message());
                DispatchOutcome::Failed
            }
        }
    }

    fn load_from_file(&self) -> Result<DispatchOutcome, ActionError> {
        let Some(path) = self.dialog.pick_open_path() else {
            info!("load cancelled");
            return Ok(DispatchOutcome::Cancelled);
        };
        let format = self.load_from_file.execute(&path)?;
        self.dialog
            .show_info(&format!("{format} has been loaded into the clipboard"));
        Ok(DispatchOutcome::Completed)
    }
}

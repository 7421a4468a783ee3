use std::sync::Arc;

use nc_core::config::CodecConfig;
use nc_core::ports::{DialogPort, RecordFilePort, SystemClipboardPort};

use crate::tray::{AboutInfo, TrayActionDispatcher};
use crate::usecases::clipboard::{
    CaptureClipboard, ClipboardToText, RestoreClipboard, TextToClipboard,
};
use crate::usecases::file::{LoadFromFile, SaveToFile};

/// Everything the application needs from the outside world.
///
/// This struct IS the dependency manifest: no defaults, no optionals.
#[derive(Clone)]
pub struct AppDeps {
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub record_files: Arc<dyn RecordFilePort>,
    pub dialog: Arc<dyn DialogPort>,
    pub codec: CodecConfig,
}

/// The assembled application.
pub struct App {
    deps: AppDeps,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        Self { deps }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { deps: &self.deps }
    }

    pub fn dispatcher(&self, about: AboutInfo) -> TrayActionDispatcher {
        TrayActionDispatcher::new(self.usecases(), self.deps.dialog.clone(), about)
    }
}

/// Use case accessor; each call builds a fresh, cheap use case value.
pub struct UseCases<'a> {
    deps: &'a AppDeps,
}

impl UseCases<'_> {
    pub fn capture_clipboard(&self) -> CaptureClipboard {
        CaptureClipboard::new(self.deps.clipboard.clone())
    }

    pub fn restore_clipboard(&self) -> RestoreClipboard {
        RestoreClipboard::new(self.deps.clipboard.clone())
    }

    pub fn clipboard_to_text(&self) -> ClipboardToText {
        ClipboardToText::new(self.deps.clipboard.clone(), self.deps.codec.clone())
    }

    pub fn text_to_clipboard(&self) -> TextToClipboard {
        TextToClipboard::new(self.deps.clipboard.clone())
    }

    pub fn save_to_file(&self) -> SaveToFile {
        SaveToFile::new(
            self.deps.clipboard.clone(),
            self.deps.record_files.clone(),
            self.deps.codec.clone(),
        )
    }

    pub fn load_from_file(&self) -> LoadFromFile {
        LoadFromFile::new(self.deps.clipboard.clone(), self.deps.record_files.clone())
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use nc_core::config::CodecConfig;
use nc_core::ports::{RecordFilePort, SystemClipboardPort};
use nc_core::{encode, FormatName};
use tracing::{info, instrument};

use crate::error::ActionError;
use crate::usecases::clipboard::CaptureClipboard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { format: FormatName, path: PathBuf },
    Cancelled,
}

/// Captures and encodes the clipboard, then writes the two-line text form to
/// a file.
pub struct SaveToFile {
    capture: CaptureClipboard,
    files: Arc<dyn RecordFilePort>,
    codec: CodecConfig,
}

impl SaveToFile {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        files: Arc<dyn RecordFilePort>,
        codec: CodecConfig,
    ) -> Self {
        Self {
            capture: CaptureClipboard::new(clipboard),
            files,
            codec,
        }
    }

    /// The clipboard is captured before `choose_path` runs, so an empty or
    /// unreadable clipboard fails without ever prompting for a destination.
    #[instrument(name = "save_to_file", skip_all)]
    pub fn execute(
        &self,
        choose_path: impl FnOnce() -> Option<PathBuf>,
    ) -> Result<SaveOutcome, ActionError> {
        let record = self.capture.execute()?;
        let text = encode(&record, self.codec.compression_level).to_text(self.codec.line_ending);

        let Some(path) = choose_path() else {
            info!("save cancelled");
            return Ok(SaveOutcome::Cancelled);
        };

        self.files
            .write_string(&path, &text)
            .map_err(ActionError::File)?;

        info!(
            format = %record.format_name,
            payload_bytes = record.size_bytes(),
            path = %path.display(),
            "record saved"
        );
        Ok(SaveOutcome::Saved {
            format: record.format_name,
            path,
        })
    }
}

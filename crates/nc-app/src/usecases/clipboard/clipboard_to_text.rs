use std::sync::Arc;

use nc_core::config::CodecConfig;
use nc_core::ports::SystemClipboardPort;
use nc_core::{encode, FormatName};
use tracing::{info, instrument};

use super::CaptureClipboard;
use crate::error::ActionError;

/// Clipboard -> Base64 text: replaces the clipboard content with its own
/// two-line text form so it can be pasted anywhere.
pub struct ClipboardToText {
    capture: CaptureClipboard,
    clipboard: Arc<dyn SystemClipboardPort>,
    codec: CodecConfig,
}

impl ClipboardToText {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>, codec: CodecConfig) -> Self {
        Self {
            capture: CaptureClipboard::new(clipboard.clone()),
            clipboard,
            codec,
        }
    }

    /// Returns the format name that was converted.
    #[instrument(name = "clipboard_to_text", skip(self))]
    pub fn execute(&self) -> Result<FormatName, ActionError> {
        let record = self.capture.execute()?;
        let text = encode(&record, self.codec.compression_level).to_text(self.codec.line_ending);

        self.clipboard
            .write_text(&text)
            .map_err(ActionError::Clipboard)?;

        info!(format = %record.format_name, text_len = text.len(), "clipboard converted to text");
        Ok(record.format_name)
    }
}

use std::sync::Arc;

use nc_core::ports::SystemClipboardPort;
use nc_core::{decode, FormatName, SerializedRecord};
use tracing::{info, instrument, warn};

use super::RestoreClipboard;
use crate::error::ActionError;

/// Base64 text -> clipboard: reads the two-line text form from the clipboard
/// and replaces it with the record it describes.
pub struct TextToClipboard {
    clipboard: Arc<dyn SystemClipboardPort>,
    restore: RestoreClipboard,
}

impl TextToClipboard {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self {
            restore: RestoreClipboard::new(clipboard.clone()),
            clipboard,
        }
    }

    /// Returns the format name that was pushed to the clipboard.
    #[instrument(name = "text_to_clipboard", skip(self))]
    pub fn execute(&self) -> Result<FormatName, ActionError> {
        let text = self
            .clipboard
            .read_text()
            .map_err(ActionError::Clipboard)?
            .ok_or_else(|| ActionError::MalformedInput("clipboard holds no text".to_string()))?;

        let record = SerializedRecord::parse_text(&text)
            .and_then(|serialized| decode(&serialized))
            .inspect_err(|err| warn!(error = %err, "clipboard text is not a record"))?;

        self.restore.execute(&record)?;
        info!(format = %record.format_name, "text pushed to clipboard");
        Ok(record.format_name)
    }
}

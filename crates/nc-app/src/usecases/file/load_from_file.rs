use std::path::Path;
use std::sync::Arc;

use nc_core::ports::{RecordFilePort, SystemClipboardPort};
use nc_core::{decode, FormatName, SerializedRecord};
use tracing::{info, instrument};

use crate::error::ActionError;
use crate::usecases::clipboard::RestoreClipboard;

/// Reads a saved two-line file and restores the record to the clipboard.
pub struct LoadFromFile {
    files: Arc<dyn RecordFilePort>,
    restore: RestoreClipboard,
}

impl LoadFromFile {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>, files: Arc<dyn RecordFilePort>) -> Self {
        Self {
            files,
            restore: RestoreClipboard::new(clipboard),
        }
    }

    #[instrument(name = "load_from_file", skip_all, fields(path = %path.display()))]
    pub fn execute(&self, path: &Path) -> Result<FormatName, ActionError> {
        let text = self.files.read_to_string(path).map_err(ActionError::File)?;
        let record = decode(&SerializedRecord::parse_text(&text)?)?;

        self.restore.execute(&record)?;
        info!(format = %record.format_name, "record loaded into clipboard");
        Ok(record.format_name)
    }
}

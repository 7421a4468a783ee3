use std::sync::Arc;

use nc_core::ports::SystemClipboardPort;
use nc_core::ClipboardRecord;
use tracing::{info, instrument};

use crate::error::ActionError;

/// Puts a record back on the system clipboard under its own format name.
pub struct RestoreClipboard {
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl RestoreClipboard {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self { clipboard }
    }

    #[instrument(
        name = "restore_clipboard",
        skip_all,
        fields(format = %record.format_name, payload_bytes = record.size_bytes())
    )]
    pub fn execute(&self, record: &ClipboardRecord) -> Result<(), ActionError> {
        self.clipboard
            .write_bytes(&record.format_name, &record.payload)
            .map_err(ActionError::Clipboard)?;
        info!("restored clipboard");
        Ok(())
    }
}

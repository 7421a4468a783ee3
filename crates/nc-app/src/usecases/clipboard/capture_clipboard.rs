use std::sync::Arc;

use nc_core::ports::SystemClipboardPort;
use nc_core::ClipboardRecord;
use tracing::{debug, info, instrument};

use crate::error::ActionError;

/// Captures the clipboard's first advertised format as raw bytes.
///
/// Only the first format the OS reports is inspected. If that one cannot be
/// read as bytes the capture fails; later formats are not tried.
pub struct CaptureClipboard {
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl CaptureClipboard {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self { clipboard }
    }

    #[instrument(name = "capture_clipboard", skip(self))]
    pub fn execute(&self) -> Result<ClipboardRecord, ActionError> {
        let formats = self
            .clipboard
            .list_formats()
            .map_err(ActionError::Clipboard)?;

        let advertised = formats.len();
        let Some(format) = formats.into_iter().next() else {
            info!("clipboard is empty");
            return Err(ActionError::EmptyClipboard);
        };
        debug!(%format, advertised, "inspecting first advertised format");

        match self
            .clipboard
            .read_bytes(&format)
            .map_err(ActionError::Clipboard)?
        {
            Some(payload) => {
                info!(%format, payload_bytes = payload.len(), "captured clipboard");
                Ok(ClipboardRecord {
                    format_name: format,
                    payload,
                })
            }
            None => {
                info!(%format, "first format is not byte-stream accessible");
                Err(ActionError::UnsupportedFormat(format))
            }
        }
    }
}

#![cfg(target_os = "linux")]

use super::super::common::CommonClipboardImpl;
use anyhow::{anyhow, Result};
use clipboard_rs::{ClipboardContext, ClipboardContextX11Options};
use nc_core::ports::SystemClipboardPort;
use nc_core::FormatName;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, debug_span};

/// X11 selection targets that describe the selection protocol itself rather
/// than a data format.
const X11_META_TARGETS: &[&str] = &[
    "TARGETS",
    "TIMESTAMP",
    "MULTIPLE",
    "SAVE_TARGETS",
    "DELETE",
    "INSERT_SELECTION",
    "INSERT_PROPERTY",
];

/// Linux (X11) clipboard implementation using clipboard-rs
pub struct LinuxClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl LinuxClipboard {
    pub fn new() -> Result<Self> {
        let context =
            ClipboardContext::new_with_options(ClipboardContextX11Options { read_timeout: None })
                .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }

    fn context(&self) -> Result<MutexGuard<'_, ClipboardContext>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))
    }
}

fn is_data_format(format: &FormatName) -> bool {
    !X11_META_TARGETS.contains(&format.as_str())
}

impl SystemClipboardPort for LinuxClipboard {
    fn list_formats(&self) -> Result<Vec<FormatName>> {
        let span = debug_span!("platform.linux.list_formats");
        span.in_scope(|| {
            let ctx = self.context()?;
            let formats: Vec<FormatName> = CommonClipboardImpl::list_formats(&ctx)?
                .into_iter()
                .filter(is_data_format)
                .collect();
            debug!(formats = formats.len(), "listed clipboard formats");
            Ok(formats)
        })
    }

    fn read_bytes(&self, format: &FormatName) -> Result<Option<Vec<u8>>> {
        let ctx = self.context()?;
        CommonClipboardImpl::read_bytes(&ctx, format)
    }

    fn write_bytes(&self, format: &FormatName, bytes: &[u8]) -> Result<()> {
        let span = debug_span!("platform.linux.write_bytes", %format, bytes = bytes.len());
        span.in_scope(|| {
            let ctx = self.context()?;
            CommonClipboardImpl::write_bytes(&ctx, format, bytes)
        })
    }

    fn read_text(&self) -> Result<Option<String>> {
        let ctx = self.context()?;
        CommonClipboardImpl::read_text(&ctx)
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let ctx = self.context()?;
        CommonClipboardImpl::write_text(&ctx, text)
    }
}

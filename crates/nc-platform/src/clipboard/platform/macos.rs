#![cfg(target_os = "macos")]

use super::super::common::CommonClipboardImpl;
use anyhow::{anyhow, Result};
use clipboard_rs::ClipboardContext;
use nc_core::ports::SystemClipboardPort;
use nc_core::FormatName;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, debug_span};

/// macOS clipboard implementation using clipboard-rs
pub struct MacOSClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl MacOSClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
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

impl SystemClipboardPort for MacOSClipboard {
    fn list_formats(&self) -> Result<Vec<FormatName>> {
        let span = debug_span!("platform.macos.list_formats");
        span.in_scope(|| {
            let ctx = self.context()?;
            let formats = CommonClipboardImpl::list_formats(&ctx)?;
            debug!(formats = formats.len(), "listed clipboard formats");
            Ok(formats)
        })
    }

    fn read_bytes(&self, format: &FormatName) -> Result<Option<Vec<u8>>> {
        let ctx = self.context()?;
        CommonClipboardImpl::read_bytes(&ctx, format)
    }

    fn write_bytes(&self, format: &FormatName, bytes: &[u8]) -> Result<()> {
        let span = debug_span!("platform.macos.write_bytes", %format, bytes = bytes.len());
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

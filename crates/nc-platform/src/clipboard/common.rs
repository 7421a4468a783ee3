use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use nc_core::FormatName;
use tracing::debug;

pub struct CommonClipboardImpl;

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

/// Decide what a failed buffer read means. While the clipboard still offers
/// `format` as raw data the failure came from the OS (lock held elsewhere,
/// lost display connection); otherwise the format has no byte representation.
fn classify_read_failure(
    format: &FormatName,
    err: anyhow::Error,
    served_as_raw_data: bool,
) -> Result<Option<Vec<u8>>> {
    if served_as_raw_data {
        return Err(err.context(format!("failed to read clipboard format {format}")));
    }
    debug!(%format, error = %err, "format is not readable as a buffer");
    Ok(None)
}

impl CommonClipboardImpl {
    pub fn list_formats(ctx: &ClipboardContext) -> Result<Vec<FormatName>> {
        let formats = map_clipboard_err(ctx.available_formats())?;
        Ok(formats.into_iter().map(FormatName).collect())
    }

    /// A format the platform no longer serves as raw data is reported as
    /// `None`. Any other read failure is an OS error.
    pub fn read_bytes(ctx: &ClipboardContext, format: &FormatName) -> Result<Option<Vec<u8>>> {
        match ctx.get_buffer(format.as_str()) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) => {
                let served = ctx.has(ContentFormat::Other(format.as_str().to_string()));
                classify_read_failure(format, anyhow!(err), served)
            }
        }
    }

    pub fn write_bytes(ctx: &ClipboardContext, format: &FormatName, bytes: &[u8]) -> Result<()> {
        map_clipboard_err(ctx.set_buffer(format.as_str(), bytes.to_vec()))
    }

    pub fn read_text(ctx: &ClipboardContext) -> Result<Option<String>> {
        if !ctx.has(ContentFormat::Text) {
            return Ok(None);
        }
        map_clipboard_err(ctx.get_text()).map(Some)
    }

    pub fn write_text(ctx: &ClipboardContext, text: &str) -> Result<()> {
        map_clipboard_err(ctx.set_text(text.to_string()))
    }
}

//! Clipboard port - abstracts the OS clipboard
//!
//! The codec only needs five capabilities from a platform: enumerate the
//! advertised formats, read or write one format as bytes, and read or write
//! plain text. Each target platform supplies its own binding.

use anyhow::Result;

use crate::record::FormatName;

pub trait SystemClipboardPort: Send + Sync {
    /// Formats currently advertised, in the order the OS reports them.
    fn list_formats(&self) -> Result<Vec<FormatName>>;

    /// Read one format as a byte stream.
    ///
    /// Returns `Ok(None)` when the format is advertised but its data cannot be
    /// obtained as bytes (handle- or object-based formats).
    fn read_bytes(&self, format: &FormatName) -> Result<Option<Vec<u8>>>;

    /// Replace the clipboard content with `bytes` tagged as `format`.
    fn write_bytes(&self, format: &FormatName, bytes: &[u8]) -> Result<()>;

    /// Read the clipboard as plain text, `Ok(None)` when no text is present.
    fn read_text(&self) -> Result<Option<String>>;

    /// Replace the clipboard content with plain text.
    fn write_text(&self, text: &str) -> Result<()>;
}

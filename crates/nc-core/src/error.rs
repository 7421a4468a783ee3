use thiserror::Error;

/// Failures of the text codec.
///
/// Both variants are terminal for the current action only. Neither is ever
/// produced after the system clipboard has been touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Wrong line count, a field that is not Base64, or a format name that is
    /// not valid UTF-8.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The payload field decoded to bytes that are not a complete DEFLATE stream.
    #[error("decompression failed: {0}")]
    DecompressionFailed(String),
}

impl CodecError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput(reason.into())
    }

    pub fn decompression(reason: impl Into<String>) -> Self {
        Self::DecompressionFailed(reason.into())
    }
}

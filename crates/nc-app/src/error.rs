use nc_core::{CodecError, FormatName};
use thiserror::Error;

/// Why a user action stopped.
///
/// Every variant ends the current action only. Variants other than
/// `Clipboard` and `File` are raised before the system clipboard or the
/// destination file is touched.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("clipboard advertises no formats")]
    EmptyClipboard,

    #[error("clipboard format `{0}` is not readable as bytes")]
    UnsupportedFormat(FormatName),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("decompression failed: {0}")]
    DecompressionFailed(String),

    #[error("clipboard access failed: {0:#}")]
    Clipboard(#[source] anyhow::Error),

    #[error("file access failed: {0:#}")]
    File(#[source] anyhow::Error),
}

impl From<CodecError> for ActionError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::MalformedInput(reason) => Self::MalformedInput(reason),
            CodecError::DecompressionFailed(reason) => Self::DecompressionFailed(reason),
        }
    }
}

impl ActionError {
    /// Text shown in the modal error box.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyClipboard => "No data in the clipboard".to_string(),
            Self::UnsupportedFormat(format) => format!("Unknown data format: {format}"),
            Self::MalformedInput(reason) => format!("Unknown data ({reason})"),
            Self::DecompressionFailed(reason) => {
                format!("The data could not be decompressed ({reason})")
            }
            Self::Clipboard(err) => format!("Could not access the clipboard: {err:#}"),
            Self::File(err) => format!("Could not access the file: {err:#}"),
        }
    }
}

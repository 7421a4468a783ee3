use serde::{Deserialize, Serialize};
use std::fmt;

/// OS-specific clipboard format identifier, exactly as the platform reports it.
///
/// On Windows this is a registered format name such as `"Rich Text Format"`,
/// on macOS a UTI such as `"public.utf8-plain-text"`, on X11/Wayland a MIME type
/// or atom name such as `"text/plain;charset=utf-8"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormatName(pub String);

impl FormatName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FormatName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FormatName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for FormatName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single clipboard representation captured from (or destined for) the
/// system clipboard: the format tag plus its raw, uncompressed bytes.
///
/// Records are transient. One is created at the start of a capture action and
/// dropped at the end of it; the only persistent artifact is a saved file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardRecord {
    pub format_name: FormatName,
    pub payload: Vec<u8>,
}

impl ClipboardRecord {
    pub fn new(format_name: impl Into<FormatName>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            format_name: format_name.into(),
            payload: payload.into(),
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.payload.len()
    }
}

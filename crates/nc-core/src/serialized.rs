use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Text-safe projection of a [`ClipboardRecord`](crate::ClipboardRecord).
///
/// Always exactly two fields. As text, line 1 is `encoded_format` and line 2 is
/// `encoded_payload`, joined by a single line ending with nothing after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedRecord {
    pub encoded_format: String,
    pub encoded_payload: String,
}

/// Line separator used when rendering a [`SerializedRecord`] as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// The platform's newline: `\r\n` on Windows, `\n` elsewhere.
    #[default]
    Native,
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl SerializedRecord {
    pub const LINE_COUNT: usize = 2;

    /// Render both fields as one text block, e.g. for the clipboard or a file.
    pub fn to_text(&self, line_ending: LineEnding) -> String {
        let separator = line_ending.as_str();
        let mut text = String::with_capacity(
            self.encoded_format.len() + separator.len() + self.encoded_payload.len(),
        );
        text.push_str(&self.encoded_format);
        text.push_str(separator);
        text.push_str(&self.encoded_payload);
        text
    }

    /// Split a text block into the two fields.
    ///
    /// Accepts LF and CRLF on every platform, and tolerates one line terminator
    /// at the very end of the text (editors like to add one).
    ///
    /// # Errors
    ///
    /// [`CodecError::MalformedInput`] when the text does not hold exactly two lines.
    pub fn parse_text(text: &str) -> Result<Self, CodecError> {
        let body = text
            .strip_suffix("\r\n")
            .or_else(|| text.strip_suffix('\n'))
            .unwrap_or(text);

        let lines: Vec<&str> = body
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        match lines.as_slice() {
            [format, payload] => Ok(Self {
                encoded_format: (*format).to_string(),
                encoded_payload: (*payload).to_string(),
            }),
            other => Err(CodecError::malformed(format!(
                "expected {} lines, found {}",
                Self::LINE_COUNT,
                other.len()
            ))),
        }
    }
}

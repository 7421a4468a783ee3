//! Clipboard record <-> text codec.
//!
//! A record becomes two Base64 fields:
//!
//! - `encoded_format  = Base64(UTF-8(format_name))`
//! - `encoded_payload = Base64(DEFLATE(payload))`
//!
//! DEFLATE here is the raw RFC 1951 stream with no zlib or gzip framing.
//! There is no checksum and no version marker.

use std::io::Write;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use flate2::{write::DeflateEncoder, Compression, Decompress, FlushDecompress, Status};
use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::record::{ClipboardRecord, FormatName};
use crate::serialized::SerializedRecord;

/// Upper bound on a decompressed payload (256 MiB).
pub const MAX_PAYLOAD_BYTES: usize = 256 * 1024 * 1024;

const INFLATE_CHUNK: usize = 64 * 1024;

/// DEFLATE compression level, `0` (store) through `9` (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CompressionLevel(u32);

impl CompressionLevel {
    pub const MAX: u32 = 9;

    pub fn new(level: u32) -> Result<Self, String> {
        if level > Self::MAX {
            return Err(format!(
                "compression level must be between 0 and {}, got {level}",
                Self::MAX
            ));
        }
        Ok(Self(level))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self(6)
    }
}

impl TryFrom<u32> for CompressionLevel {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CompressionLevel> for u32 {
    fn from(level: CompressionLevel) -> Self {
        level.0
    }
}

impl From<CompressionLevel> for Compression {
    fn from(level: CompressionLevel) -> Self {
        Compression::new(level.0)
    }
}

/// Encode a record into its two-field text form.
///
/// Deterministic: the same record and level always produce the same output.
pub fn encode(record: &ClipboardRecord, level: CompressionLevel) -> SerializedRecord {
    let encoded_format = STANDARD.encode(record.format_name.as_str().as_bytes());
    let encoded_payload = STANDARD.encode(deflate(&record.payload, level));

    #[cfg(feature = "tracing")]
    tracing::debug!(
        format = %record.format_name,
        payload_bytes = record.payload.len(),
        encoded_bytes = encoded_payload.len(),
        "encoded clipboard record"
    );

    SerializedRecord {
        encoded_format,
        encoded_payload,
    }
}

/// Decode a two-field text form back into a record.
///
/// Surrounding whitespace on each field is ignored.
///
/// # Errors
///
/// - [`CodecError::MalformedInput`] if either field is not valid Base64, or the
///   format name is empty or not UTF-8.
/// - [`CodecError::DecompressionFailed`] if the payload is not a complete
///   DEFLATE stream or inflates past [`MAX_PAYLOAD_BYTES`].
pub fn decode(serialized: &SerializedRecord) -> Result<ClipboardRecord, CodecError> {
    let format_bytes = STANDARD
        .decode(serialized.encoded_format.trim())
        .map_err(|e| CodecError::malformed(format!("format field is not Base64: {e}")))?;
    let format_name = String::from_utf8(format_bytes)
        .map_err(|_| CodecError::malformed("format name is not valid UTF-8"))?;
    if format_name.is_empty() {
        return Err(CodecError::malformed("format name is empty"));
    }

    let compressed = STANDARD
        .decode(serialized.encoded_payload.trim())
        .map_err(|e| CodecError::malformed(format!("payload field is not Base64: {e}")))?;
    let payload = inflate(&compressed)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        format = %format_name,
        payload_bytes = payload.len(),
        "decoded clipboard record"
    );

    Ok(ClipboardRecord {
        format_name: FormatName(format_name),
        payload,
    })
}

fn deflate(bytes: &[u8], level: CompressionLevel) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(Vec::with_capacity(bytes.len() / 2 + 16), level.into());
    encoder
        .write_all(bytes)
        .and_then(|_| encoder.finish())
        .expect("deflating into a Vec cannot fail")
}

fn inflate(bytes: &[u8]) -> Result<Vec<u8>, CodecError> {
    inflate_with_limit(bytes, MAX_PAYLOAD_BYTES)
}

/// Inflate a raw DEFLATE stream producing at most `limit` bytes.
///
/// The output buffer never grows past `limit + 1` bytes: one byte over the
/// limit is enough to reject the stream.
fn inflate_with_limit(bytes: &[u8], limit: usize) -> Result<Vec<u8>, CodecError> {
    let ceiling = limit.saturating_add(1);
    let mut inflater = Decompress::new(false);
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len().saturating_mul(3).min(ceiling));

    loop {
        if out.len() == out.capacity() {
            let room = ceiling.saturating_sub(out.capacity()).min(INFLATE_CHUNK);
            out.reserve_exact(room);
        }

        let in_before = inflater.total_in();
        let out_before = inflater.total_out();
        let consumed = in_before as usize;

        let status = inflater
            .decompress_vec(&bytes[consumed..], &mut out, FlushDecompress::Finish)
            .map_err(|e| CodecError::decompression(format!("corrupt deflate stream: {e}")))?;

        if out.len() > limit {
            return Err(CodecError::decompression(format!(
                "payload exceeds {limit} bytes"
            )));
        }

        match status {
            Status::StreamEnd => return Ok(out),
            Status::Ok | Status::BufError => {
                let progressed =
                    inflater.total_in() != in_before || inflater.total_out() != out_before;
                if !progressed {
                    return Err(CodecError::decompression("truncated deflate stream"));
                }
            }
        }
    }
}

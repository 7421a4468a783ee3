//! # nc-core
//!
//! Core domain models and business logic for NavClip.
//!
//! This crate contains the clipboard record model, the text codec that turns a
//! record into two Base64 lines and back, and the ports the outer layers
//! implement. It has no infrastructure dependencies.

pub mod app_dirs;
pub mod codec;
pub mod config;
pub mod error;
pub mod ports;
pub mod record;
pub mod serialized;

// Re-export commonly used types at the crate root
pub use codec::{decode, encode, CompressionLevel, MAX_PAYLOAD_BYTES};
pub use config::AppConfig;
pub use error::CodecError;
pub use record::{ClipboardRecord, FormatName};
pub use serialized::{LineEnding, SerializedRecord};

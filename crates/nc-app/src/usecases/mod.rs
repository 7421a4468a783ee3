//! Business logic use cases
//!
//! Two primitives work on the system clipboard directly:
//!
//! - `CaptureClipboard`: first advertised format -> `ClipboardRecord`
//! - `RestoreClipboard`: `ClipboardRecord` -> system clipboard
//!
//! The composite actions behind the tray menu combine them with the codec:
//!
//! - `ClipboardToText` / `TextToClipboard`: round trip through plain text
//! - `SaveToFile` / `LoadFromFile`: round trip through a two-line file
//!
//! Every composite action either runs to completion or leaves the clipboard
//! untouched: decoding always finishes before anything is written.

pub mod clipboard;
pub mod file;

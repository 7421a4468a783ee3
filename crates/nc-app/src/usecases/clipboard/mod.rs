mod capture_clipboard;
mod clipboard_to_text;
mod restore_clipboard;
mod text_to_clipboard;

pub use capture_clipboard::CaptureClipboard;
pub use clipboard_to_text::ClipboardToText;
pub use restore_clipboard::RestoreClipboard;
pub use text_to_clipboard::TextToClipboard;

//! Ports implemented by the platform and shell layers.

pub mod app_dirs;
pub mod clipboard;
pub mod dialog;
pub mod errors;
pub mod record_file;

pub use app_dirs::AppDirsPort;
pub use clipboard::SystemClipboardPort;
pub use dialog::DialogPort;
pub use errors::AppDirsError;
pub use record_file::RecordFilePort;

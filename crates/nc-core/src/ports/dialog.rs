use std::path::PathBuf;

/// Blocking modal interactions with the user.
///
/// Every method blocks until the user dismisses the dialog. A `None` path means
/// the user cancelled.
pub trait DialogPort: Send + Sync {
    fn pick_save_path(&self) -> Option<PathBuf>;

    fn pick_open_path(&self) -> Option<PathBuf>;

    fn show_info(&self, message: &str);

    fn show_error(&self, message: &str);
}

use anyhow::Result;
use std::path::Path;

/// Whole-file text access for saved records.
///
/// Implementations open and close the file within each call.
pub trait RecordFilePort: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Create or truncate `path` and write `contents`.
    fn write_string(&self, path: &Path, contents: &str) -> Result<()>;
}

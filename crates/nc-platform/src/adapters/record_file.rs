use anyhow::{Context, Result};
use nc_core::ports::RecordFilePort;
use std::path::Path;
use tracing::debug;

/// Saved records on the local filesystem, read and written whole.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRecordFiles;

impl FsRecordFiles {
    pub fn new() -> Self {
        Self
    }
}

impl RecordFilePort for FsRecordFiles {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read record file: {}", path.display()))?;
        debug!(path = %path.display(), bytes = contents.len(), "read record file");
        Ok(contents)
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write record file: {}", path.display()))?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote record file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_returns_same_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.txt");
        let files = FsRecordFiles::new();

        files.write_string(&path, "VEVYVA==\ny0jNycnXBQA=").unwrap();
        assert_eq!(files.read_to_string(&path).unwrap(), "VEVYVA==\ny0jNycnXBQA=");
    }

    #[test]
    fn write_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.txt");
        std::fs::write(&path, "a much longer previous content\nline two\nline three").unwrap();

        FsRecordFiles::new().write_string(&path, "a\nb").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb");
    }

    #[test]
    fn read_error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = FsRecordFiles::new().read_to_string(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.txt"));
    }
}

use std::path::PathBuf;

/// Directories the application reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_config_root: PathBuf,
    pub app_log_root: PathBuf,
}

impl AppDirs {
    pub const CONFIG_FILE_NAME: &'static str = "config.toml";
    pub const LOG_FILE_NAME: &'static str = "navclip.log";

    pub fn config_file(&self) -> PathBuf {
        self.app_config_root.join(Self::CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_lives_in_config_root() {
        let dirs = AppDirs {
            app_config_root: PathBuf::from("/tmp/navclip"),
            app_log_root: PathBuf::from("/tmp/navclip/logs"),
        };
        assert_eq!(dirs.config_file(), PathBuf::from("/tmp/navclip/config.toml"));
    }
}

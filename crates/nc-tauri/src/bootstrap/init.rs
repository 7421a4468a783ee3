//! Startup sequence run from `main` before the event loop.

use nc_core::{config::AppConfig, ports::AppDirsPort};
use nc_platform::app_dirs::DirsAppDirsAdapter;

use super::config::{resolve_config, ConfigSource};
use super::tracing::init_tracing_subscriber;

/// Resolve directories and configuration, then install tracing.
///
/// Never fails: without a config directory the defaults are used, and without
/// a log directory logging goes to stdout only.
pub fn initialize() -> AppConfig {
    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs();

    let (config, source) = match &app_dirs {
        Ok(dirs) => resolve_config(&dirs.config_file()),
        Err(_) => (AppConfig::default(), ConfigSource::Defaults),
    };

    if let Err(err) = init_tracing_subscriber(&config.logging, app_dirs.as_ref().ok()) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    if let Err(err) = &app_dirs {
        tracing::warn!(error = %err, "application directories unavailable");
    }
    source.log();

    config
}

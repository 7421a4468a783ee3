//! Tracing configuration for NavClip
//!
//! Installs the global `tracing` subscriber: a stdout layer plus, when the log
//! directory is available, a non-blocking file layer writing `navclip.log`.
//!
//! Filter precedence: `RUST_LOG`, then `[logging] level` from `config.toml`,
//! then the built-in defaults below.

use std::{fs, io, path::Path, sync::OnceLock};

use nc_core::{app_dirs::AppDirs, config::LoggingConfig};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug level for the app crates
/// - **Production**: info level
/// - A configured level replaces the base directive; the Tauri noise filters stay.
fn build_filter_directives(is_dev: bool, configured: Option<&str>) -> Vec<String> {
    let app_level = if is_dev { "debug" } else { "info" };
    let base = configured
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(app_level);

    let mut directives = vec![
        base.to_string(),
        "tauri=warn".to_string(), // Filter noisy setup spans (app::setup)
        "wry=off".to_string(),
        "tao=warn".to_string(),
    ];
    if configured.is_none() {
        directives.push(format!("nc_platform={app_level}"));
        directives.push(format!("nc_app={app_level}"));
    }
    directives
}

/// Initialize the tracing subscriber
///
/// Call once in `main.rs`, before the Tauri builder runs. A failure to open
/// the log file is reported on stderr and logging continues on stdout only.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(
    logging: &LoggingConfig,
    app_dirs: Option<&AppDirs>,
) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development(), logging.level.as_deref());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let stdout_writer: BoxMakeWriter = BoxMakeWriter::new(io::stdout);
    let file_writer = match app_dirs.map(|dirs| build_file_writer(&dirs.app_log_root)) {
        Some(Ok(writer)) => Some(writer),
        Some(Err(err)) => {
            eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
            None
        }
        None => None,
    };

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stdout_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, AppDirs::LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

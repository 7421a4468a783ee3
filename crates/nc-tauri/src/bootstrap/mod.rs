pub mod config;
pub mod init;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config, ConfigSource};
pub use init::initialize;
pub use run::run_app;
pub use wiring::{build_tray_runtime, TrayRuntime};

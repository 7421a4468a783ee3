//! NavClip application layer
//!
//! Use cases built on the `nc-core` ports, and the dispatcher that maps a tray
//! menu click onto exactly one of them.

pub mod deps;
pub mod error;
pub mod tray;
pub mod usecases;

pub use deps::{App, AppDeps, UseCases};
pub use error::ActionError;
pub use tray::{AboutInfo, DispatchOutcome, TrayAction, TrayActionDispatcher};

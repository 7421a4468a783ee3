//! Tray menu model and action dispatch.
//!
//! The menu itself is drawn by the shell; this module owns which items exist,
//! in what order, and what each one does.

mod action;
mod dispatcher;

pub use action::{MenuEntry, TrayAction, MENU_LAYOUT};
pub use dispatcher::{AboutInfo, DispatchOutcome, TrayActionDispatcher};

//! # nc-tauri
//!
//! Tauri integration layer for NavClip.
//!
//! This crate provides:
//! - the tray icon and its menu
//! - the dialog adapter behind `DialogPort`
//! - bootstrap: configuration loading, tracing, and `run_app`
//!
//! ## Modules
//!
//! - **bootstrap**: startup wiring and the Tauri event loop
//! - **adapters**: Tauri-backed port implementations
//! - **tray**: tray icon, menu construction and click handling

pub mod adapters;
pub mod bootstrap;
pub mod tray;

pub use bootstrap::run_app;

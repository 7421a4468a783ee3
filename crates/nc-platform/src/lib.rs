//! # nc-platform
//!
//! Platform-specific implementations for NavClip.
//!
//! This crate contains the adapters that talk to the operating system: the
//! clipboard binding, record file access and application directories.

pub mod adapters;
pub mod app_dirs;
pub mod clipboard;

//! cable-joiner library crate — the shell around `joiner-core`.
//!
//! The primary interface is the `cable-joiner` binary. This lib.rs exposes
//! the shell modules so integration tests can drive the menu, the input
//! validation and the task runners without a terminal.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod format;
pub mod generate;
pub mod input;
pub mod menu;
pub mod tasks;
pub mod telemetry;

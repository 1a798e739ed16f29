//! `tickets_rust` - Personal ticket/bookmark tracker
//!
//! This crate provides the command-line front end for the `tk` tool. The
//! storage engine (ticket store, backups, bulk import) lives in
//! [`tickets_lib`].
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Runtime settings resolved from flags and environment
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup
//! - [`validation`] - Input checks for new tickets

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod validation;

pub use tickets_lib::{Result, TicketsError};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}

//! Rebuttal CLI library.
//!
//! This library provides the core functionality for the `rebuttal` command-line
//! interface, including configuration management, command execution, and output
//! formatting. The [`commands::prepare_appeal`] entry point runs the whole
//! remittance-to-appeal pipeline without touching the terminal.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

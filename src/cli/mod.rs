//! CLI command handlers for flexcols.
//!
//! Headless, scriptable access to rule generation and configuration,
//! for use from build scripts and CI.

pub mod common;
pub mod config;
pub mod css;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use css::{BreakpointArg, CssArgs};

//! Flexcols library
//!
//! Builds responsive column layouts from a handful of breakpoints. The core
//! derives a single CSS `clamp()` expression that switches column counts
//! without media queries, and wraps it in a copyable, pretty-printed rule.
//! On top of that sit an interactive terminal configurator and headless
//! CLI commands.

// Module declarations
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod configurator;
pub mod constants;
pub mod css;
pub mod logging;
pub mod models;
pub mod shortcuts;
pub mod tui;

//! Data models for the columns configurator.
//!
//! Models are independent of UI and rendering; the TUI and CLI both build on them.

pub mod breakpoints;
pub mod layout_config;
pub mod notification;
pub mod numeric;
pub mod rgb;

// Re-export all model types
pub use breakpoints::{Breakpoint, BreakpointMap};
pub use layout_config::{LayoutConfig, FALLBACK_CLASS_NAME};
pub use notification::{CopyNotification, NotificationPhase, DEFAULT_PHASE_DURATION};
pub use numeric::{coerce_count, coerce_number, format_px};
pub use rgb::RgbColor;

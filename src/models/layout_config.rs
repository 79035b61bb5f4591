//! Session-owned settings the generated rule is built from.

use serde::{Deserialize, Serialize};

use super::BreakpointMap;

/// Class name used when the class field is left empty.
pub const FALLBACK_CLASS_NAME: &str = "class";

/// Everything the user can edit in one configurator session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Breakpoint width to column count
    pub breakpoints: BreakpointMap,
    /// Gap between columns in pixels
    pub gap: f64,
    /// CSS class name as typed (may be empty)
    pub class_name: String,
    /// Number of preview placeholders; may go negative
    pub items_on_screen: i64,
}

impl LayoutConfig {
    /// Creates a config; the item count starts at twice the widest column count.
    #[must_use]
    pub fn new(breakpoints: BreakpointMap, gap: f64, class_name: impl Into<String>) -> Self {
        let items_on_screen = i64::from(breakpoints.max_columns()) * 2;
        Self {
            breakpoints,
            gap,
            class_name: class_name.into(),
            items_on_screen,
        }
    }

    /// Class name to print, falling back to [`FALLBACK_CLASS_NAME`] when empty.
    #[must_use]
    pub fn display_class_name(&self) -> &str {
        if self.class_name.is_empty() {
            FALLBACK_CLASS_NAME
        } else {
            &self.class_name
        }
    }

    /// Number of placeholders to draw; negative counts draw nothing.
    #[must_use]
    pub fn visible_items(&self) -> usize {
        usize::try_from(self.items_on_screen).unwrap_or(0)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(
            BreakpointMap::from([(500, 5), (600, 6), (700, 7)]),
            40.0,
            FALLBACK_CLASS_NAME,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_landing_page() {
        let config = LayoutConfig::default();
        assert_eq!(config.breakpoints.len(), 3);
        assert!((config.gap - 40.0).abs() < f64::EPSILON);
        assert_eq!(config.class_name, "class");
        assert_eq!(config.items_on_screen, 14);
    }

    #[test]
    fn test_display_class_name_fallback() {
        let mut config = LayoutConfig::default();
        config.class_name = String::new();
        assert_eq!(config.display_class_name(), "class");
        config.class_name = "grid".to_string();
        assert_eq!(config.display_class_name(), "grid");
    }

    #[test]
    fn test_visible_items_never_negative() {
        let mut config = LayoutConfig::default();
        config.items_on_screen = -3;
        assert_eq!(config.visible_items(), 0);
        config.items_on_screen = 0;
        assert_eq!(config.visible_items(), 0);
        config.items_on_screen = 5;
        assert_eq!(config.visible_items(), 5);
    }

    #[test]
    fn test_empty_breakpoints_start_with_no_items() {
        let config = LayoutConfig::new(BreakpointMap::new(), 0.0, "");
        assert_eq!(config.items_on_screen, 0);
    }
}

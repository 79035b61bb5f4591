//! UI colors for dark and light terminals.
//!
//! `ThemeMode::Auto` follows the OS setting through `dark-light`.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic colors used by every widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Chrome
    /// Borders, titles, and the copy buttons
    pub primary: Color,
    /// Key hints and section headings
    pub accent: Color,
    /// Success states, shortcut keys, and the toast
    pub success: Color,
    /// Errors and removals
    pub error: Color,
    /// Warnings
    pub warning: Color,

    // Text
    /// Body text
    pub text: Color,
    /// Field labels
    pub text_secondary: Color,
    /// Hints and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Screen background
    pub background: Color,
    /// Background of the focused field
    pub highlight_bg: Color,

    // Focus
    /// Focused field
    pub active: Color,
    /// Disabled controls
    pub inactive: Color,

    // Code pane
    /// Selectors and braces
    pub code_selector: Color,
    /// Property names
    pub code_property: Color,
    /// Property values
    pub code_value: Color,
}

impl Theme {
    /// Picks the dark or light palette from the OS setting.
    ///
    /// # Examples
    /// ```
    /// use flexcols::tui::theme::Theme;
    ///
    /// let theme = Theme::detect();
    /// assert!(theme == Theme::dark() || theme == Theme::light());
    /// ```
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Unspecified and detection errors get the dark palette
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Palette for dark terminals.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::LightRed,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::Rgb(40, 40, 48),

            active: Color::Yellow,
            inactive: Color::Gray,

            code_selector: Color::LightMagenta,
            code_property: Color::LightBlue,
            code_value: Color::LightGreen,
        }
    }

    /// Palette for light terminals. Text colors keep at least 4.5:1 contrast.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 236),

            active: Color::Rgb(180, 100, 0),
            inactive: Color::Rgb(180, 180, 180),

            code_selector: Color::Rgb(150, 0, 150),
            code_property: Color::Rgb(0, 80, 170),
            code_value: Color::Rgb(0, 110, 60),
        }
    }

    /// Resolves the configured theme mode; `Auto` asks the OS.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

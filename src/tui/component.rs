//! Widget traits shared by the form and the overlays.
//!
//! Widgets own their view state (focus, scroll, edit buffer) but never the
//! session. They report what the user asked for as events, and `AppState`
//! applies those to the configurator.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A self-contained widget, such as the help overlay.
pub trait Component {
    /// What the widget reports back to `AppState`
    type Event;

    /// Feeds one key press; `None` means the key only changed view state.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Draws into `area`.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// A widget that displays state it does not own.
///
/// The settings form reads the [`LayoutConfig`](crate::models::LayoutConfig)
/// it edits through `Context`.
pub trait ContextualComponent {
    /// Read-only state the widget displays
    type Context;

    /// What the widget reports back to `AppState`
    type Event;

    /// Feeds one key press.
    fn handle_input(&mut self, key: KeyEvent, context: &Self::Context) -> Option<Self::Event>;

    /// Draws into `area`.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context);
}

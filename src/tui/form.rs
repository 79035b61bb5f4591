//! Settings form: class name, gap, and one row per breakpoint.
//!
//! Focus moves between fields with the shortcut registry. While a field is
//! being edited every keystroke emits a [`FormEvent`] carrying the coerced
//! value, so the preview follows the text as it is typed.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::component::ContextualComponent;
use super::Theme;
use crate::models::{coerce_count, coerce_number, format_px, LayoutConfig};

/// A focusable field in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// CSS class name
    ClassName,
    /// Gap in pixels
    Gap,
    /// Width of the breakpoint currently keyed at this value
    Width(u32),
    /// Column count of the breakpoint keyed at this value
    Columns(u32),
}

impl FormField {
    /// Field label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ClassName => "CSS class",
            Self::Gap => "Gap",
            Self::Width(_) => "Breakpoint",
            Self::Columns(_) => "Columns",
        }
    }

    /// Breakpoint the field belongs to, if any.
    #[must_use]
    pub const fn breakpoint(&self) -> Option<u32> {
        match self {
            Self::Width(width) | Self::Columns(width) => Some(*width),
            Self::ClassName | Self::Gap => None,
        }
    }

    const fn is_numeric(&self) -> bool {
        !matches!(self, Self::ClassName)
    }
}

/// Change requested by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Class name text changed
    ClassNameChanged(String),
    /// Gap changed
    GapChanged(f64),
    /// A breakpoint moved to a new width
    WidthChanged {
        /// Width before the edit
        old: u32,
        /// Width after the edit
        new: u32,
    },
    /// Column count changed
    ColumnsChanged {
        /// Breakpoint width
        width: u32,
        /// New column count
        columns: u32,
    },
}

/// Form focus and the in-progress edit buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsForm {
    focus: FormField,
    buffer: Option<String>,
}

impl SettingsForm {
    /// Creates a form focused on the class name.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            focus: FormField::ClassName,
            buffer: None,
        }
    }

    /// Focused field.
    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    /// Whether a field is being edited.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.buffer.is_some()
    }

    /// All fields in display order.
    #[must_use]
    pub fn fields(layout: &LayoutConfig) -> Vec<FormField> {
        let mut fields = vec![FormField::ClassName, FormField::Gap];
        for breakpoint in layout.breakpoints.iter() {
            fields.push(FormField::Width(breakpoint.width));
            fields.push(FormField::Columns(breakpoint.width));
        }
        fields
    }

    /// Current value of a field as shown when not editing.
    #[must_use]
    pub fn field_text(layout: &LayoutConfig, field: FormField) -> String {
        match field {
            FormField::ClassName => layout.class_name.clone(),
            FormField::Gap => format_px(layout.gap),
            FormField::Width(width) => width.to_string(),
            FormField::Columns(width) => layout
                .breakpoints
                .columns(width)
                .map(|columns| columns.to_string())
                .unwrap_or_default(),
        }
    }

    fn move_focus(&mut self, layout: &LayoutConfig, step: isize) {
        let fields = Self::fields(layout);
        let len = fields.len() as isize;
        let index = fields
            .iter()
            .position(|field| *field == self.focus)
            .map_or(0, |i| i as isize);
        let next = (index + step).rem_euclid(len);
        self.focus = fields[next as usize];
        self.buffer = None;
    }

    /// Focus the next field, wrapping around.
    pub fn focus_next(&mut self, layout: &LayoutConfig) {
        self.move_focus(layout, 1);
    }

    /// Focus the previous field, wrapping around.
    pub fn focus_previous(&mut self, layout: &LayoutConfig) {
        self.move_focus(layout, -1);
    }

    /// Focus the first field.
    pub fn focus_first(&mut self) {
        self.focus = FormField::ClassName;
        self.buffer = None;
    }

    /// Focus the last field.
    pub fn focus_last(&mut self, layout: &LayoutConfig) {
        if let Some(last) = Self::fields(layout).last() {
            self.focus = *last;
        }
        self.buffer = None;
    }

    /// Starts editing the focused field from its current text.
    pub fn start_edit(&mut self, layout: &LayoutConfig) {
        self.buffer = Some(Self::field_text(layout, self.focus));
    }

    /// Leaves edit mode; the field shows its stored value again.
    pub fn finish_edit(&mut self) {
        self.buffer = None;
    }

    /// Keeps focus valid after the breakpoint set changed underneath.
    ///
    /// Focus on a removed row moves to the nearest remaining field.
    pub fn sync(&mut self, layout: &LayoutConfig) {
        let fields = Self::fields(layout);
        if fields.contains(&self.focus) {
            return;
        }
        let Some(width) = self.focus.breakpoint() else {
            return;
        };
        let replacement = layout
            .breakpoints
            .iter()
            .find(|breakpoint| breakpoint.width > width)
            .or_else(|| layout.breakpoints.widest())
            .map_or(FormField::Gap, |breakpoint| FormField::Width(breakpoint.width));
        self.focus = replacement;
        self.buffer = None;
    }

    /// Event for the buffer's current text.
    fn apply(&mut self) -> Option<FormEvent> {
        let text = self.buffer.as_deref()?;
        let event = match self.focus {
            FormField::ClassName => FormEvent::ClassNameChanged(text.to_string()),
            FormField::Gap => FormEvent::GapChanged(coerce_number(text)),
            FormField::Width(old) => {
                let new = coerce_count(text);
                if new == old {
                    return None;
                }
                self.focus = FormField::Width(new);
                FormEvent::WidthChanged { old, new }
            }
            FormField::Columns(width) => FormEvent::ColumnsChanged {
                width,
                columns: coerce_count(text),
            },
        };
        Some(event)
    }

    fn accepts(&self, c: char) -> bool {
        if self.focus.is_numeric() {
            c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
        } else {
            !c.is_control()
        }
    }
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextualComponent for SettingsForm {
    type Context = LayoutConfig;
    type Event = FormEvent;

    /// Handles typing while a field is being edited.
    fn handle_input(&mut self, key: KeyEvent, _layout: &LayoutConfig) -> Option<FormEvent> {
        if !self.is_editing() {
            return None;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Backspace, _) => {
                self.buffer.as_mut()?.pop();
                self.apply()
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) if self.accepts(c) => {
                self.buffer.as_mut()?.push(c);
                self.apply()
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, layout: &LayoutConfig) {
        let block = Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Class name
                Constraint::Length(3), // Gap
                Constraint::Length(2), // Items
                Constraint::Min(1),    // Breakpoints
                Constraint::Length(1), // Add button
            ])
            .split(inner);

        self.render_text_field(f, chunks[0], theme, layout, FormField::ClassName);
        self.render_text_field(f, chunks[1], theme, layout, FormField::Gap);

        let items = Paragraph::new(vec![Line::from(vec![
            Span::styled("Items: ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                layout.items_on_screen.to_string(),
                Style::default().fg(theme.text),
            ),
            Span::styled("   +", Style::default().fg(theme.success)),
            Span::styled(" More items  ", Style::default().fg(theme.text_muted)),
            Span::styled("-", Style::default().fg(theme.error)),
            Span::styled(" Less items", Style::default().fg(theme.text_muted)),
        ])]);
        f.render_widget(items, chunks[2]);

        self.render_breakpoints(f, chunks[3], theme, layout);

        let add_style = if layout.breakpoints.can_add_breakpoint() {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.inactive)
                .add_modifier(Modifier::DIM)
        };
        let add = Paragraph::new(Line::from(vec![
            Span::styled("[a] ", add_style),
            Span::styled("Add more breakpoints", add_style),
        ]));
        f.render_widget(add, chunks[4]);
    }
}

impl SettingsForm {
    fn display_text(&self, layout: &LayoutConfig, field: FormField) -> String {
        match (&self.buffer, self.focus == field) {
            (Some(buffer), true) => format!("{buffer}_"),
            _ => Self::field_text(layout, field),
        }
    }

    fn field_style(&self, theme: &Theme, field: FormField) -> Style {
        if self.focus != field {
            Style::default().fg(theme.text)
        } else if self.is_editing() {
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.accent)
                .bg(theme.highlight_bg)
        }
    }

    fn render_text_field(
        &self,
        f: &mut Frame,
        area: Rect,
        theme: &Theme,
        layout: &LayoutConfig,
        field: FormField,
    ) {
        let border = if self.focus == field {
            theme.accent
        } else {
            theme.inactive
        };
        let paragraph = Paragraph::new(self.display_text(layout, field))
            .style(self.field_style(theme, field))
            .block(
                Block::default()
                    .title(field.label())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(paragraph, area);
    }

    fn render_breakpoints(&self, f: &mut Frame, area: Rect, theme: &Theme, layout: &LayoutConfig) {
        let mut lines = vec![Line::from(Span::styled(
            "    Breakpoint   Columns",
            Style::default().fg(theme.text_secondary),
        ))];

        for breakpoint in layout.breakpoints.iter() {
            let row_focused = self.focus.breakpoint() == Some(breakpoint.width);
            let marker = if row_focused { "x " } else { "  " };
            let width_field = FormField::Width(breakpoint.width);
            let columns_field = FormField::Columns(breakpoint.width);
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.error)),
                Span::raw("  "),
                Span::styled(
                    format!("{:<13}", self.display_text(layout, width_field)),
                    self.field_style(theme, width_field),
                ),
                Span::styled(
                    self.display_text(layout, columns_field),
                    self.field_style(theme, columns_field),
                ),
            ]));
        }

        if layout.breakpoints.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (no breakpoints)",
                Style::default().fg(theme.text_muted),
            )));
        }

        // Keep the focused row on screen
        let visible = area.height as usize;
        let focused_line = self
            .focus
            .breakpoint()
            .and_then(|width| layout.breakpoints.iter().position(|b| b.width == width))
            .map_or(0, |i| i + 1);
        let scroll = (focused_line + 1).saturating_sub(visible);

        let paragraph = Paragraph::new(lines).scroll((scroll as u16, 0));
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn backspace() -> KeyEvent {
        KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
    }

    #[test]
    fn test_fields_follow_breakpoint_order() {
        let layout = LayoutConfig::default();
        let fields = SettingsForm::fields(&layout);
        assert_eq!(
            fields,
            vec![
                FormField::ClassName,
                FormField::Gap,
                FormField::Width(500),
                FormField::Columns(500),
                FormField::Width(600),
                FormField::Columns(600),
                FormField::Width(700),
                FormField::Columns(700),
            ]
        );
    }

    #[test]
    fn test_focus_wraps() {
        let layout = LayoutConfig::default();
        let mut form = SettingsForm::new();
        form.focus_previous(&layout);
        assert_eq!(form.focus(), FormField::Columns(700));
        form.focus_next(&layout);
        assert_eq!(form.focus(), FormField::ClassName);
        form.focus_last(&layout);
        assert_eq!(form.focus(), FormField::Columns(700));
        form.focus_first();
        assert_eq!(form.focus(), FormField::ClassName);
    }

    #[test]
    fn test_not_editing_ignores_typing() {
        let layout = LayoutConfig::default();
        let mut form = SettingsForm::new();
        assert_eq!(form.handle_input(key('x'), &layout), None);
    }

    #[test]
    fn test_class_name_every_keystroke() {
        let layout = LayoutConfig::default();
        let mut form = SettingsForm::new();
        form.start_edit(&layout);
        assert_eq!(
            form.handle_input(key('s'), &layout),
            Some(FormEvent::ClassNameChanged("classs".to_string()))
        );
        assert_eq!(
            form.handle_input(backspace(), &layout),
            Some(FormEvent::ClassNameChanged("class".to_string()))
        );
    }

    #[test]
    fn test_gap_coerces() {
        let layout = LayoutConfig::default();
        let mut form = SettingsForm::new();
        form.focus_next(&layout);
        form.start_edit(&layout);
        assert_eq!(form.buffer.as_deref(), Some("40"));
        assert_eq!(
            form.handle_input(backspace(), &layout),
            Some(FormEvent::GapChanged(4.0))
        );
        assert_eq!(
            form.handle_input(backspace(), &layout),
            Some(FormEvent::GapChanged(0.0))
        );
        // Letters are not accepted in numeric fields
        assert_eq!(form.handle_input(key('x'), &layout), None);
        assert_eq!(form.buffer.as_deref(), Some(""));
    }

    #[test]
    fn test_width_edit_follows_renamed_key() {
        let layout = LayoutConfig::default();
        let mut form = SettingsForm::new();
        form.focus_next(&layout);
        form.focus_next(&layout);
        assert_eq!(form.focus(), FormField::Width(500));
        form.start_edit(&layout);

        assert_eq!(
            form.handle_input(backspace(), &layout),
            Some(FormEvent::WidthChanged { old: 500, new: 50 })
        );
        assert_eq!(form.focus(), FormField::Width(50));

        assert_eq!(
            form.handle_input(key('0'), &layout),
            Some(FormEvent::WidthChanged { old: 50, new: 500 })
        );
        assert_eq!(form.focus(), FormField::Width(500));
    }

    #[test]
    fn test_width_unchanged_value_emits_nothing() {
        let layout = LayoutConfig::default();
        let mut form = SettingsForm::new();
        form.focus_next(&layout);
        form.focus_next(&layout);
        form.start_edit(&layout);
        // "500." still floors to 500
        assert_eq!(form.handle_input(key('.'), &layout), None);
    }

    #[test]
    fn test_columns_edit() {
        let layout = LayoutConfig::default();
        let mut form = SettingsForm::new();
        for _ in 0..3 {
            form.focus_next(&layout);
        }
        assert_eq!(form.focus(), FormField::Columns(500));
        form.start_edit(&layout);
        assert_eq!(
            form.handle_input(key('0'), &layout),
            Some(FormEvent::ColumnsChanged {
                width: 500,
                columns: 50
            })
        );
        form.finish_edit();
        assert!(!form.is_editing());
    }

    #[test]
    fn test_sync_after_removal() {
        let mut layout = LayoutConfig::default();
        let mut form = SettingsForm::new();
        form.focus_next(&layout);
        form.focus_next(&layout);
        form.focus_next(&layout);
        assert_eq!(form.focus(), FormField::Columns(500));

        layout.breakpoints = layout.breakpoints.remove_breakpoint(500);
        form.sync(&layout);
        assert_eq!(form.focus(), FormField::Width(600));

        layout.breakpoints = crate::models::BreakpointMap::new();
        form.sync(&layout);
        assert_eq!(form.focus(), FormField::Gap);
    }

    #[test]
    fn test_sync_removing_widest_moves_back() {
        let mut layout = LayoutConfig::default();
        let mut form = SettingsForm::new();
        form.focus_last(&layout);
        layout.breakpoints = layout.breakpoints.remove_breakpoint(700);
        form.sync(&layout);
        assert_eq!(form.focus(), FormField::Width(600));
    }
}

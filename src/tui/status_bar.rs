//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::shortcuts::{Action, EDIT_CONTEXT, MAIN_CONTEXT};

/// Actions advertised on the help line in the main context
const MAIN_HINTS: &[Action] = &[
    Action::StartEdit,
    Action::AddBreakpoint,
    Action::RemoveBreakpoint,
    Action::MoreItems,
    Action::FewerItems,
    Action::CopyExpression,
    Action::ToggleHelp,
    Action::Quit,
];

/// Actions advertised while a field is being edited
const EDIT_HINTS: &[Action] = &[Action::FinishEdit, Action::FocusNext];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        // First line: error, status message, or what is focused
        let first_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ])
        } else if !state.status_message.is_empty() {
            Line::from(state.status_message.as_str())
        } else {
            Self::focus_line(state, theme)
        };

        let status = Paragraph::new(vec![first_line, Self::help_line(state, theme)])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.inactive))
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text));

        f.render_widget(status, area);
    }

    /// Describes the focused field and whether it is being edited.
    fn focus_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let focus = state.form.focus();
        let mode = if state.form.is_editing() {
            "EDITING"
        } else {
            "FIELD"
        };
        let mut spans = vec![
            Span::styled(
                format!("{mode}: "),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(focus.label(), Style::default().fg(theme.text)),
        ];
        if let Some(width) = focus.breakpoint() {
            spans.push(Span::styled(
                format!(" ({width}px row)"),
                Style::default().fg(theme.text_muted),
            ));
        }
        if !state.configurator.can_add_breakpoint() {
            spans.push(Span::styled(
                "  Adding breakpoints is disabled",
                Style::default().fg(theme.warning),
            ));
        }
        Line::from(spans)
    }

    /// Key hints for the current mode.
    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let (context, actions) = if state.form.is_editing() {
            (EDIT_CONTEXT, EDIT_HINTS)
        } else {
            (MAIN_CONTEXT, MAIN_HINTS)
        };

        let mut spans = Vec::new();
        for action in actions {
            let Some(key) = state.shortcuts.keys_for(context, *action).into_iter().next() else {
                continue;
            };
            if !spans.is_empty() {
                spans.push(Span::styled(" | ", Style::default().fg(theme.text_muted)));
            }
            spans.push(Span::styled(key, Style::default().fg(theme.success)));
            spans.push(Span::styled(
                format!(" {}", action.label()),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }
}

//! Help overlay: what the tool is for, where the technique comes from, and
//! every keyboard shortcut.
//!
//! Opened with '?'. Shortcut keys are read from the [`ShortcutRegistry`] so
//! the overlay cannot drift from the bindings actually in effect.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use super::{Component, Theme};
use crate::constants::{APP_NAME, ARTICLE_URL, AUTHOR_URL, LIBRARY_URL};
use crate::shortcuts::{Action, ShortcutRegistry, EDIT_CONTEXT, MAIN_CONTEXT};

/// Sections of the shortcut list, in display order.
const SECTIONS: &[(&str, &str, &[Action])] = &[
    (
        "FORM",
        MAIN_CONTEXT,
        &[
            Action::FocusNext,
            Action::FocusPrevious,
            Action::FocusFirst,
            Action::FocusLast,
            Action::StartEdit,
        ],
    ),
    ("WHILE EDITING", EDIT_CONTEXT, &[Action::FinishEdit, Action::FocusNext, Action::FocusPrevious]),
    (
        "BREAKPOINTS & PREVIEW",
        MAIN_CONTEXT,
        &[
            Action::AddBreakpoint,
            Action::RemoveBreakpoint,
            Action::MoreItems,
            Action::FewerItems,
        ],
    ),
    ("CLIPBOARD", MAIN_CONTEXT, &[Action::CopyExpression, Action::CopyRule]),
    ("SYSTEM", MAIN_CONTEXT, &[Action::ToggleHelp, Action::Quit]),
];

/// Event emitted by the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpEvent {
    /// The overlay was dismissed
    Closed,
}

/// Scrollable help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    /// Content, built once from the registry
    lines: Vec<HelpLine>,
}

/// Theme-independent help content.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HelpLine {
    Title(String),
    Heading(String),
    Text(String),
    Link { label: String, url: String },
    Shortcut { keys: String, label: String },
    Blank,
}

impl HelpOverlay {
    /// Creates the overlay for the given bindings.
    #[must_use]
    pub fn new(registry: &ShortcutRegistry) -> Self {
        Self {
            scroll_offset: 0,
            lines: Self::build_content(registry),
        }
    }

    fn build_content(registry: &ShortcutRegistry) -> Vec<HelpLine> {
        let mut lines = vec![
            HelpLine::Title(APP_NAME.to_string()),
            HelpLine::Blank,
            HelpLine::Text(
                "Wouldn't it be nice to define media queries in your CSS with only one \
                 function? The technique comes from the article below by Temani Afif; \
                 this tool generates your custom rule in the style of the \
                 flexbox-media-queried-columns library."
                    .to_string(),
            ),
            HelpLine::Blank,
            HelpLine::Link {
                label: "Responsive Layouts, Fewer Media Queries".to_string(),
                url: ARTICLE_URL.to_string(),
            },
            HelpLine::Link {
                label: "Temani Afif".to_string(),
                url: AUTHOR_URL.to_string(),
            },
            HelpLine::Link {
                label: "flexbox-media-queried-columns".to_string(),
                url: LIBRARY_URL.to_string(),
            },
            HelpLine::Blank,
        ];

        for (title, context, actions) in SECTIONS {
            lines.push(HelpLine::Heading((*title).to_string()));
            for action in *actions {
                let keys = registry.keys_for(context, *action);
                if keys.is_empty() {
                    continue;
                }
                lines.push(HelpLine::Shortcut {
                    keys: keys.join(" / "),
                    label: action.label().to_string(),
                });
            }
            lines.push(HelpLine::Blank);
        }

        lines.push(HelpLine::Heading("TIPS".to_string()));
        lines.push(HelpLine::Text(
            "  • Every keystroke in a field applies at once; text that is not a number counts as 0"
                .to_string(),
        ));
        lines.push(HelpLine::Text(
            "  • A breakpoint at 0 disables adding more until it is fixed or removed".to_string(),
        ));
        lines.push(HelpLine::Text(
            "  • Copying is disabled while the \"Copied!\" notice is on screen".to_string(),
        ));
        lines.push(HelpLine::Text(
            "  • Colors are picked at random on every change".to_string(),
        ));
        lines
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.lines.len() {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to the bottom.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.lines.len().saturating_sub(1);
    }

    fn styled_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        self.lines
            .iter()
            .map(|line| match line {
                HelpLine::Title(text) => Line::from(Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
                HelpLine::Heading(text) => Line::from(Span::styled(
                    format!("═══ {text} ═══"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                HelpLine::Text(text) => {
                    Line::from(Span::styled(text.clone(), Style::default().fg(theme.text)))
                }
                HelpLine::Link { label, url } => Line::from(vec![
                    Span::styled(format!("  {label}: "), Style::default().fg(theme.text_secondary)),
                    Span::styled(
                        url.clone(),
                        Style::default()
                            .fg(theme.primary)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                ]),
                HelpLine::Shortcut { keys, label } => Line::from(vec![
                    Span::styled(format!("  {keys:<20}"), Style::default().fg(theme.success)),
                    Span::styled(label.clone(), Style::default().fg(theme.text)),
                ]),
                HelpLine::Blank => Line::from(""),
            })
            .collect()
    }
}

impl Component for HelpOverlay {
    type Event = HelpEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<HelpEvent> {
        match key.code {
            KeyCode::Char('?' | 'q') | KeyCode::Esc | KeyCode::Enter => Some(HelpEvent::Closed),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                None
            }
            KeyCode::Home => {
                self.scroll_to_top();
                None
            }
            KeyCode::End => {
                self.scroll_to_bottom();
                None
            }
            _ => None,
        }
    }

    /// Render the help overlay as a centered modal.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let modal_area = super::centered_rect(70, 80, area);

        f.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let visible_height = chunks[0].height.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(self.styled_lines(theme))
            .block(
                Block::default()
                    .title(" Help - Press '?' to close, ↑↓ to scroll ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));
        f.render_widget(paragraph, chunks[0]);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state =
            ScrollbarState::new(self.lines.len().saturating_sub(visible_height))
                .position(self.scroll_offset);
        f.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }
}

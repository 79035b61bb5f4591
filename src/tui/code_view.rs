//! Code pane: the generated rule plus the copy controls.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Theme;

/// Splits one formatted CSS line into styled spans.
fn highlight_line<'a>(line: &'a str, theme: &Theme) -> Line<'a> {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    if trimmed.ends_with('{') || trimmed == "}" {
        return Line::from(vec![
            Span::raw(indent),
            Span::styled(
                trimmed,
                Style::default()
                    .fg(theme.code_selector)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
    }

    match trimmed.split_once(": ") {
        Some((name, value)) => Line::from(vec![
            Span::raw(indent),
            Span::styled(name, Style::default().fg(theme.code_property)),
            Span::styled(": ", Style::default().fg(theme.text_muted)),
            Span::styled(value, Style::default().fg(theme.code_value)),
        ]),
        None => Line::from(Span::styled(line, Style::default().fg(theme.text))),
    }
}

/// Renders the code preview. `copy_enabled` is false while the toast shows.
pub fn render_code(f: &mut Frame, area: Rect, theme: &Theme, code: &str, copy_enabled: bool) {
    let block = Block::default()
        .title(" Code ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let lines: Vec<Line> = code.lines().map(|line| highlight_line(line, theme)).collect();
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[0]);

    let button_style = if copy_enabled {
        Style::default()
            .fg(theme.background)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.inactive)
            .add_modifier(Modifier::DIM)
    };
    let actions = Paragraph::new(Line::from(vec![
        Span::styled(" [c] Copy clamp function ", button_style),
        Span::raw("  "),
        Span::styled(" [C] Copy rule ", button_style),
    ]));
    f.render_widget(actions, chunks[1]);
}

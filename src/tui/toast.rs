//! "Copied!" toast drawn over the top-right corner.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::Theme;
use crate::models::NotificationPhase;

const TOAST_TEXT: &str = "Copied!";
const TOAST_WIDTH: u16 = 13;
const TOAST_HEIGHT: u16 = 3;

/// Where the toast goes inside `area`, or `None` if it does not fit.
#[must_use]
pub fn toast_area(area: Rect) -> Option<Rect> {
    if area.width < TOAST_WIDTH + 2 || area.height < TOAST_HEIGHT + 1 {
        return None;
    }
    Some(Rect {
        x: area.x + area.width - TOAST_WIDTH - 2,
        y: area.y + 1,
        width: TOAST_WIDTH,
        height: TOAST_HEIGHT,
    })
}

/// Draws the toast for `phase`; nothing while hidden.
pub fn render_toast(f: &mut Frame, area: Rect, theme: &Theme, phase: NotificationPhase) {
    let modifier = match phase {
        NotificationPhase::Hidden => return,
        NotificationPhase::Visible => Modifier::BOLD,
        NotificationPhase::Closing => Modifier::DIM,
    };
    let Some(rect) = toast_area(area) else {
        return;
    };

    f.render_widget(Clear, rect);
    let toast = Paragraph::new(TOAST_TEXT)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.success)
                .bg(theme.background)
                .add_modifier(modifier),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.success).add_modifier(modifier)),
        );
    f.render_widget(toast, rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_area_top_right() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = toast_area(area).unwrap();
        assert_eq!(rect.x + rect.width + 2, 80);
        assert_eq!(rect.y, 1);
    }

    #[test]
    fn test_toast_area_too_small() {
        assert!(toast_area(Rect::new(0, 0, 10, 24)).is_none());
        assert!(toast_area(Rect::new(0, 0, 80, 3)).is_none());
    }
}

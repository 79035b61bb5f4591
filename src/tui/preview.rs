//! Preview grid of placeholder boxes.
//!
//! The pane's width stands in for a browser viewport: each terminal column
//! counts as `preview_cell_px` pixels, and the derived expression decides how
//! many boxes share a row at that width.

// Terminal coordinates are small; casts between cell and pixel space are intended
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Theme;
use crate::configurator::RenderPass;
use crate::models::format_px;

/// Height of one row of boxes in terminal lines.
const ROW_HEIGHT: u16 = 3;

/// How a render pass maps onto terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Simulated viewport width in pixels
    pub viewport_px: u32,
    /// Boxes per row
    pub columns: usize,
    /// Width of each box in cells
    pub box_cells: u16,
    /// Gap between boxes in cells
    pub gap_cells: u16,
}

impl GridGeometry {
    /// Resolves the expression for a pane `width_cells` wide.
    #[must_use]
    pub fn resolve(pass: &RenderPass, width_cells: u16, cell_px: u32) -> Self {
        let cell_px = cell_px.max(1);
        let viewport_px = u32::from(width_cells) * cell_px;
        let viewport = f64::from(viewport_px);
        let columns = pass.width_expression.columns_at(viewport);

        let cell = f64::from(cell_px);
        let gap_cells = (pass.gap / cell).round().clamp(0.0, f64::from(width_cells)) as u16;
        let item_cells = (pass.width_expression.item_width_px(viewport) / cell).floor();
        let columns_u16 = u16::try_from(columns).unwrap_or(u16::MAX);
        let max_box = width_cells
            .saturating_sub(gap_cells.saturating_mul(columns_u16.saturating_sub(1)))
            / columns_u16.max(1);
        let box_cells = if item_cells.is_finite() && item_cells >= 1.0 {
            (item_cells as u16).min(max_box.max(1))
        } else {
            max_box.max(1)
        };

        Self {
            viewport_px,
            columns,
            box_cells,
            gap_cells,
        }
    }

    /// Number of rows needed for `items` boxes.
    #[must_use]
    pub const fn rows(&self, items: usize) -> usize {
        items.div_ceil(self.columns)
    }
}

/// Renders the placeholder grid for `pass`.
pub fn render_preview(f: &mut Frame, area: Rect, theme: &Theme, pass: &RenderPass, cell_px: u32) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    let geometry = GridGeometry::resolve(pass, inner.width, cell_px);

    let rows_visible = (inner.height / ROW_HEIGHT) as usize;
    let rows_needed = geometry.rows(pass.items.len());
    let hidden = rows_needed
        .saturating_sub(rows_visible)
        .saturating_mul(geometry.columns)
        .min(pass.items.len());

    let mut title = format!(
        " Preview: {} items, {} per row at {}px, gap {}px ",
        pass.items.len(),
        geometry.columns,
        geometry.viewport_px,
        format_px(pass.gap)
    );
    if hidden > 0 {
        title.push_str(&format!("(+{hidden} below) "));
    }
    f.render_widget(block.title(title), area);

    let gap_rows = u16::from(geometry.gap_cells > 0 && inner.height > ROW_HEIGHT);
    for (index, item) in pass.items.iter().enumerate() {
        let row = index / geometry.columns;
        let col = index % geometry.columns;
        let y = inner
            .y
            .saturating_add((row as u16).saturating_mul(ROW_HEIGHT + gap_rows));
        if y.saturating_add(ROW_HEIGHT) > inner.y + inner.height {
            break;
        }
        let x = inner.x.saturating_add(
            (col as u16).saturating_mul(geometry.box_cells + geometry.gap_cells),
        );
        let width = geometry
            .box_cells
            .min((inner.x + inner.width).saturating_sub(x));
        if width == 0 {
            continue;
        }

        let cell = Rect {
            x,
            y,
            width,
            height: ROW_HEIGHT,
        };
        let text_color = item.color.contrast_text().to_ratatui_color();
        let label = Paragraph::new(vec![
            Line::from(""),
            Line::from(item.color.to_hex()),
        ])
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .bg(item.color.to_ratatui_color())
                .fg(text_color)
                .add_modifier(Modifier::DIM),
        );
        f.render_widget(label, cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configurator::Configurator;
    use crate::models::{BreakpointMap, LayoutConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn pass(breakpoints: BreakpointMap, gap: f64) -> RenderPass {
        Configurator::new(
            LayoutConfig::new(breakpoints, gap, "x"),
            Duration::from_millis(2000),
        )
        .render_pass(&mut StdRng::seed_from_u64(1))
        .unwrap()
    }

    #[test]
    fn test_narrow_pane_is_one_column() {
        let pass = pass(BreakpointMap::from([(500, 5), (600, 6), (700, 7)]), 40.0);
        // 60 cells * 8px = 480px, below the smallest breakpoint
        let geometry = GridGeometry::resolve(&pass, 60, 8);
        assert_eq!(geometry.viewport_px, 480);
        assert_eq!(geometry.columns, 1);
        assert_eq!(geometry.box_cells, 60);
        assert_eq!(geometry.gap_cells, 5);
    }

    #[test]
    fn test_wide_pane_uses_breakpoint_columns() {
        let pass = pass(BreakpointMap::from([(500, 5), (600, 6), (700, 7)]), 40.0);
        // 100 cells * 8px = 800px, past the widest breakpoint
        let geometry = GridGeometry::resolve(&pass, 100, 8);
        assert_eq!(geometry.columns, 7);
        assert_eq!(geometry.rows(14), 2);
        assert!(geometry.box_cells * 7 + geometry.gap_cells * 6 <= 100);
    }

    #[test]
    fn test_middle_breakpoint() {
        let pass = pass(BreakpointMap::from([(500, 5), (600, 6), (700, 7)]), 0.0);
        // 80 cells * 8px = 640px: between 600 and 700
        let geometry = GridGeometry::resolve(&pass, 80, 8);
        assert_eq!(geometry.columns, 6);
        assert_eq!(geometry.gap_cells, 0);
    }

    #[test]
    fn test_no_breakpoints_is_full_width() {
        let pass = pass(BreakpointMap::new(), 40.0);
        let geometry = GridGeometry::resolve(&pass, 50, 8);
        assert_eq!(geometry.columns, 1);
        assert_eq!(geometry.rows(0), 0);
    }

    #[test]
    fn test_zero_cell_px_is_clamped() {
        let pass = pass(BreakpointMap::from([(500, 5)]), 40.0);
        let geometry = GridGeometry::resolve(&pass, 10, 0);
        assert_eq!(geometry.viewport_px, 10);
        assert_eq!(geometry.columns, 1);
    }
}

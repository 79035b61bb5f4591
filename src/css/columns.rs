//! Media-queried column math.
//!
//! Builds a single CSS sizing expression that switches column counts at each
//! breakpoint without media queries, after Temani Afif's "Responsive Layouts,
//! Fewer Media Queries" technique:
//!
//! ```text
//! clamp(<n columns>, (<breakpoint>px - 100vw) * 1000, <narrower layout>)
//! ```
//!
//! Past the breakpoint the middle term is hugely negative and the clamp
//! settles on its minimum; below it the term is hugely positive and the
//! narrower layout wins. Below the smallest breakpoint items take `100%`.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::models::{format_px, Breakpoint, BreakpointMap};

/// Multiplier that turns the viewport comparison into a step function.
const STEP_FACTOR: f64 = 1000.0;

/// Turns a breakpoint set and gap into a CSS sizing expression.
pub trait ColumnsFormula {
    /// Derives the expression for `breakpoints` separated by `gap` pixels.
    fn expression(&self, breakpoints: &BreakpointMap, gap: f64) -> ColumnsExpression;
}

/// Nested `clamp()` formula, one level per breakpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClampFormula;

impl ColumnsFormula for ClampFormula {
    fn expression(&self, breakpoints: &BreakpointMap, gap: f64) -> ColumnsExpression {
        let gap_px = format_px(gap);
        let css = breakpoints.iter().fold(String::from("100%"), |inner, bp| {
            format!(
                "clamp({}, ({}px - 100vw) * {}, {})",
                column_width(bp.columns, &gap_px),
                bp.width,
                STEP_FACTOR,
                inner
            )
        });

        ColumnsExpression {
            css,
            gap,
            stages: breakpoints.iter().collect(),
        }
    }
}

/// Width of one of `columns` equal columns, leaving room for the gaps.
fn column_width(columns: u32, gap_px: &str) -> String {
    format!(
        "(100% - {} * {}px) / {}",
        i64::from(columns) - 1,
        gap_px,
        columns
    )
}

/// A derived sizing expression together with the inputs it encodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnsExpression {
    /// CSS text, usable as `flex-basis`/`max-width`
    pub css: String,
    /// Gap in pixels the expression was built with
    pub gap: f64,
    /// Breakpoints in ascending width order
    pub stages: Vec<Breakpoint>,
}

impl ColumnsExpression {
    /// Evaluates the expression for a container `viewport_px` wide (the
    /// container is assumed to span the viewport), returning the item width.
    ///
    /// Mirrors CSS `clamp(min, val, max) = max(min, min(val, max))`, so
    /// breakpoint sets whose column counts shrink as widths grow evaluate the
    /// same way a browser would. A zero column count is invalid CSS and
    /// leaves the item at full width.
    #[must_use]
    pub fn item_width_px(&self, viewport_px: f64) -> f64 {
        self.stages.iter().fold(viewport_px, |inner, stage| {
            if stage.columns == 0 {
                return viewport_px;
            }
            let columns = f64::from(stage.columns);
            let min = (viewport_px - (columns - 1.0) * self.gap) / columns;
            let step = (f64::from(stage.width) - viewport_px) * STEP_FACTOR;
            min.max(step.min(inner))
        })
    }

    /// How many items fit on one row at `viewport_px` (always at least one).
    #[must_use]
    pub fn columns_at(&self, viewport_px: f64) -> usize {
        let item = self.item_width_px(viewport_px);
        if !item.is_finite() || item <= 0.0 {
            return 1;
        }
        // Small epsilon absorbs float error when items tile exactly
        let fit = ((viewport_px + self.gap) / (item + self.gap) + 1e-9).floor();
        if fit < 1.0 {
            1
        } else {
            fit as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> BreakpointMap {
        BreakpointMap::from([(500, 5), (600, 6), (700, 7)])
    }

    fn expression_css(breakpoints: &BreakpointMap, gap: f64) -> String {
        ClampFormula.expression(breakpoints, gap).css
    }

    #[test]
    fn test_empty_map_is_full_width() {
        assert_eq!(expression_css(&BreakpointMap::new(), 40.0), "100%");
    }

    #[test]
    fn test_single_breakpoint() {
        let css = expression_css(&BreakpointMap::from([(500, 5)]), 40.0);
        assert_eq!(
            css,
            "clamp((100% - 4 * 40px) / 5, (500px - 100vw) * 1000, 100%)"
        );
    }

    #[test]
    fn test_widest_breakpoint_is_outermost() {
        let css = expression_css(&initial(), 40.0);
        assert!(css.starts_with("clamp((100% - 6 * 40px) / 7, (700px - 100vw) * 1000, clamp("));
        assert!(css.ends_with(", 100%)))"));
        assert_eq!(css.matches("clamp(").count(), 3);
    }

    #[test]
    fn test_fractional_gap() {
        let css = expression_css(&BreakpointMap::from([(300, 2)]), 2.5);
        assert!(css.contains("1 * 2.5px"));
    }

    #[test]
    fn test_zero_columns_do_not_panic() {
        let map = BreakpointMap::from([(0, 0)]);
        let expr = ClampFormula.expression(&map, 0.0);
        assert!(expr.css.contains("(100% - -1 * 0px) / 0"));
        assert_eq!(expr.columns_at(800.0), 1);
    }

    #[test]
    fn test_columns_at_viewport() {
        let expr = ClampFormula.expression(&initial(), 40.0);
        assert_eq!(expr.columns_at(400.0), 1);
        assert_eq!(expr.columns_at(500.0), 5);
        assert_eq!(expr.columns_at(550.0), 5);
        assert_eq!(expr.columns_at(650.0), 6);
        assert_eq!(expr.columns_at(1200.0), 7);
    }

    #[test]
    fn test_item_width_with_gap() {
        let expr = ClampFormula.expression(&BreakpointMap::from([(500, 5)]), 40.0);
        // (1000 - 4 * 40) / 5 = 168
        assert!((expr.item_width_px(1000.0) - 168.0).abs() < 1e-9);
        assert!((expr.item_width_px(300.0) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_stages_follow_breakpoints() {
        let expr = ClampFormula.expression(&initial(), 10.0);
        assert_eq!(expr.stages, initial().iter().collect::<Vec<_>>());
        assert!((expr.gap - 10.0).abs() < f64::EPSILON);
    }
}

//! The copyable CSS rule built around a columns expression.

use anyhow::{Context, Result};

use super::format::{format_css, Syntax};
use crate::models::format_px;

/// Raw (unformatted) rule text for a flex container and its items.
///
/// The container carries the expression in `--column-width`; items size
/// themselves from that variable.
#[must_use]
pub fn rule_source(class_name: &str, width_expression: &str, gap: f64) -> String {
    format!(
        "
      .{class_name} {{
        --column-width: {width_expression};

        display: flex;
        flex-wrap: wrap;
        gap: {gap}px;
      }}

      .{class_name}-inner {{
        flex: var(--column-width);
        max-width: var(--column-width);
      }}
    ",
        gap = format_px(gap)
    )
}

/// Builds and pretty-prints the rule.
///
/// Fails when the class name or expression make the stylesheet malformed.
pub fn render_rule(class_name: &str, width_expression: &str, gap: f64) -> Result<String> {
    format_css(&rule_source(class_name, width_expression, gap), Syntax::Css)
        .with_context(|| format!("Failed to format CSS rule for class '{class_name}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rule_layout() {
        let css = render_rule("grid", "100%", 40.0).unwrap();
        assert_eq!(
            css,
            ".grid {\n  --column-width: 100%;\n\n  display: flex;\n  flex-wrap: wrap;\n  gap: 40px;\n}\n\n.grid-inner {\n  flex: var(--column-width);\n  max-width: var(--column-width);\n}\n"
        );
    }

    #[test]
    fn test_render_rule_embeds_expression_verbatim() {
        let expr = "clamp((100% - 4 * 40px) / 5, (500px - 100vw) * 1000, 100%)";
        let css = render_rule("class", expr, 40.0).unwrap();
        assert!(css.contains(&format!("--column-width: {expr};")));
    }

    #[test]
    fn test_render_rule_fractional_gap() {
        let css = render_rule("a", "100%", 12.5).unwrap();
        assert!(css.contains("gap: 12.5px;"));
    }

    #[test]
    fn test_malformed_class_name_fails() {
        let err = render_rule("oops{", "100%", 0.0).unwrap_err();
        assert!(format!("{err:#}").contains("oops{"));
    }
}

//! CSS generation: column math, rule template and pretty-printing.

pub mod columns;
pub mod format;
pub mod rule;

pub use columns::{ClampFormula, ColumnsExpression, ColumnsFormula};
pub use format::{format_css, Syntax};
pub use rule::{render_rule, rule_source};

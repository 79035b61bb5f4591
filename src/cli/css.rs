//! Headless CSS generation.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::configurator::Configurator;
use crate::models::{coerce_count, Breakpoint, BreakpointMap, LayoutConfig};
use clap::Args;
use serde::Serialize;
use std::str::FromStr;

/// Print the generated rule for a set of breakpoints
#[derive(Debug, Clone, Args)]
pub struct CssArgs {
    /// Breakpoint as WIDTH:COLUMNS (repeatable); defaults to the configured set
    #[arg(short, long = "breakpoint", value_name = "WIDTH:COLUMNS")]
    pub breakpoints: Vec<BreakpointArg>,

    /// Gap between columns in pixels
    #[arg(short, long, value_name = "PX")]
    pub gap: Option<f64>,

    /// CSS class name
    #[arg(short, long = "class", value_name = "NAME")]
    pub class_name: Option<String>,

    /// Print only the sizing expression
    #[arg(long, conflicts_with = "json")]
    pub expression_only: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// A `WIDTH:COLUMNS` pair from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakpointArg(pub Breakpoint);

impl FromStr for BreakpointArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, columns) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid breakpoint '{s}'. Expected WIDTH:COLUMNS, e.g. 500:5"))?;
        if width.trim().is_empty() || columns.trim().is_empty() {
            return Err(format!(
                "Invalid breakpoint '{s}'. Expected WIDTH:COLUMNS, e.g. 500:5"
            ));
        }
        // Same coercion as the form fields: non-numbers become 0
        Ok(Self(Breakpoint::new(coerce_count(width), coerce_count(columns))))
    }
}

/// JSON document printed with `--json`
#[derive(Serialize, Debug)]
struct CssOutput<'a> {
    class_name: &'a str,
    gap: f64,
    breakpoints: &'a BreakpointMap,
    width_expression: &'a str,
    css: &'a str,
}

impl CssArgs {
    /// Execute the css command
    pub fn execute(&self) -> CliResult<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    /// Builds the text the command prints.
    pub fn render(&self) -> CliResult<String> {
        let layout = self.layout()?;
        let configurator = Configurator::new(layout, Config::default().notification.phase_duration());

        let expression = configurator.width_expression();
        if self.expression_only {
            return Ok(format!("{}\n", expression.css));
        }

        let css = configurator
            .code()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        if self.json {
            let layout = configurator.layout();
            let output = CssOutput {
                class_name: layout.display_class_name(),
                gap: layout.gap,
                breakpoints: &layout.breakpoints,
                width_expression: &expression.css,
                css: &css,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))?;
            return Ok(format!("{json}\n"));
        }

        Ok(css)
    }

    /// Session settings from arguments, filling gaps from the config file.
    fn layout(&self) -> CliResult<LayoutConfig> {
        let needs_config =
            self.breakpoints.is_empty() || self.gap.is_none() || self.class_name.is_none();
        let defaults = if needs_config {
            Config::load()
                .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?
                .defaults
        } else {
            crate::config::DefaultsConfig::default()
        };

        let breakpoints = if self.breakpoints.is_empty() {
            defaults.breakpoints
        } else {
            self.breakpoints.iter().map(|arg| arg.0).collect()
        };

        let gap = self.gap.unwrap_or(defaults.gap);
        if !gap.is_finite() || gap < 0.0 {
            return Err(CliError::usage(format!(
                "Invalid gap '{gap}'. Must be a non-negative number"
            )));
        }

        let class_name = self.class_name.clone().unwrap_or(defaults.class_name);
        Ok(LayoutConfig::new(breakpoints, gap, class_name))
    }
}

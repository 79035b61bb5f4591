//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::models::BreakpointMap;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init(ConfigInitArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a config file with default values
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    force: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Class name new sessions start with
    #[arg(long = "class", value_name = "NAME")]
    class_name: Option<String>,

    /// Gap new sessions start with, in pixels
    #[arg(long, value_name = "PX")]
    gap: Option<f64>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    path: String,
    ui: UiOutput,
    defaults: DefaultsOutput<'a>,
    notification: NotificationOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help_on_startup: bool,
    preview_cell_px: u32,
}

#[derive(Serialize, Debug)]
struct DefaultsOutput<'a> {
    class_name: &'a str,
    gap: f64,
    breakpoints: &'a BreakpointMap,
}

#[derive(Serialize, Debug)]
struct NotificationOutput {
    phase_ms: u64,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                println!("{}", config_path_display()?);
                Ok(())
            }
            ConfigCommand::Init(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let path = config_path_display()?;

        if self.json {
            output_json(&config, path)?;
        } else {
            output_human_readable(&config, &path);
        }

        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self) -> CliResult<()> {
        if Config::exists() && !self.force {
            return Err(CliError::validation(format!(
                "Config file already exists: {}. Use --force to overwrite",
                config_path_display()?
            )));
        }

        let path = Config::default()
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        tracing::info!(path = %path.display(), "Wrote default configuration");
        println!("Wrote {}", path.display());
        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.theme.is_none() && self.class_name.is_none() && self.gap.is_none() {
            return Err(CliError::usage(
                "At least one configuration option must be specified: --theme, --class, or --gap",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = parse_theme_mode(theme_str)?;
        }
        if let Some(class_name) = &self.class_name {
            config.defaults.class_name.clone_from(class_name);
        }
        if let Some(gap) = self.gap {
            config.defaults.gap = gap;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

fn parse_theme_mode(value: &str) -> CliResult<ThemeMode> {
    match value.to_lowercase().as_str() {
        "auto" => Ok(ThemeMode::Auto),
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        _ => Err(CliError::validation(
            "Invalid theme mode. Must be 'auto', 'light', or 'dark'",
        )),
    }
}

fn theme_name(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

fn config_path_display() -> CliResult<String> {
    Config::config_file_path()
        .map(|p| p.display().to_string())
        .map_err(|e| CliError::io(format!("{e:#}")))
}

/// Output configuration in JSON format
fn output_json(config: &Config, path: String) -> CliResult<()> {
    let output = ConfigOutput {
        path,
        ui: UiOutput {
            theme: theme_name(config.ui.theme_mode),
            show_help_on_startup: config.ui.show_help_on_startup,
            preview_cell_px: config.ui.preview_cell_px,
        },
        defaults: DefaultsOutput {
            class_name: &config.defaults.class_name,
            gap: config.defaults.gap,
            breakpoints: &config.defaults.breakpoints,
        },
        notification: NotificationOutput {
            phase_ms: config.notification.phase_ms,
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, path: &str) {
    println!("flexcols Configuration");
    println!("======================");
    println!();
    println!("File: {path}");
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", theme_name(config.ui.theme_mode));
    println!("  Help On Startup: {}", config.ui.show_help_on_startup);
    println!("  Preview Cell: {}px", config.ui.preview_cell_px);
    println!();

    println!("Defaults:");
    println!("  Class Name: {}", config.defaults.class_name);
    println!("  Gap: {}px", crate::models::format_px(config.defaults.gap));
    println!("  Breakpoints: {}", config.defaults.breakpoints);
    println!();

    println!("Notification:");
    println!("  Phase: {}ms", config.notification.phase_ms);
    println!();
}

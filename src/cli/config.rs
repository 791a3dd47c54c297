//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode, MAX_PALETTE_CHIPS};
use crate::constants::APP_NAME;
use crate::models::ContrastMode;
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

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default contrast role (background or text)
    #[arg(long, value_name = "MODE")]
    mode: Option<String>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "THEME")]
    theme: Option<String>,

    /// Maximum number of palette chips
    #[arg(long, value_name = "N")]
    max_chips: Option<usize>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: String,
    contrast: ContrastOutput,
    palette: PaletteOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct ContrastOutput {
    default_mode: ContrastMode,
}

#[derive(Serialize, Debug)]
struct PaletteOutput {
    max_chips: usize,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help_on_startup: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e}")))?;
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?
            .display()
            .to_string();

        if self.json {
            print_json(&ConfigOutput {
                path,
                contrast: ContrastOutput {
                    default_mode: config.contrast.default_mode,
                },
                palette: PaletteOutput {
                    max_chips: config.palette.max_chips,
                },
                ui: UiOutput {
                    theme: config.ui.theme_mode.as_str().to_string(),
                    show_help_on_startup: config.ui.show_help_on_startup,
                },
            })?;
        } else {
            output_human_readable(&config, &path);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.mode.is_none() && self.theme.is_none() && self.max_chips.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --mode, --theme, or --max-chips",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e}")))?;

        if let Some(mode) = &self.mode {
            config.contrast.default_mode = mode.parse().map_err(CliError::validation)?;
        }

        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = ThemeMode::parse(theme_str).ok_or_else(|| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?;
        }

        if let Some(max_chips) = self.max_chips {
            if max_chips == 0 || max_chips > MAX_PALETTE_CHIPS {
                return Err(CliError::validation(format!(
                    "Invalid --max-chips {max_chips}. Must be between 1 and {MAX_PALETTE_CHIPS}"
                )));
            }
            config.palette.max_chips = max_chips;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, path: &str) {
    println!("{APP_NAME} Configuration");
    println!("=======================");
    println!();
    println!("File: {path}");
    println!();

    println!("Contrast:");
    println!("  Default Mode: {}", config.contrast.default_mode);
    println!();

    println!("Palette:");
    println!("  Max Chips: {}", config.palette.max_chips);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode.as_str());
    println!("  Help On Startup: {}", config.ui.show_help_on_startup);
    println!();
}

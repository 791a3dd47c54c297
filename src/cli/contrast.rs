//! Contrast check command.
//!
//! Scores a color against the mode's reference color, or against an arbitrary
//! second color, and optionally fails when a WCAG level is not met.

use crate::cli::common::{print_json, resolve_mode, CliError, CliResult};
use crate::config::Config;
use crate::models::{Color, ContrastLevel, ContrastReport};
use crate::services::ContrastSummary;
use clap::Args;
use serde::Serialize;

/// Check the WCAG contrast ratio of a color
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Color to score (hex, r,g,b or h,s%,l%)
    #[arg(value_name = "COLOR", allow_hyphen_values = true)]
    pub color: String,

    /// Second color to compare against instead of the mode's reference color
    #[arg(short, long, value_name = "COLOR")]
    pub against: Option<String>,

    /// Contrast role (background or text). Defaults to the configured mode.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Exit with code 1 unless this level is reached (fail, aa-large, aa, aaa)
    #[arg(long, value_name = "LEVEL")]
    pub require: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ContrastOutput {
    color: String,
    #[serde(flatten)]
    contrast: ContrastSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<ContrastLevel>,
    passed: bool,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e}")))?;
        let mode = resolve_mode(self.mode.as_deref(), config.contrast.default_mode)?;

        let required = self
            .require
            .as_deref()
            .map(str::parse::<ContrastLevel>)
            .transpose()
            .map_err(CliError::validation)?;

        let color: Color = self.color.parse()?;
        let report = match &self.against {
            Some(other) => ContrastReport::against(color, other.parse()?, mode),
            None => ContrastReport::for_mode(color, mode),
        };

        let passed = required.map_or(true, |level| report.level >= level);
        let output = ContrastOutput {
            color: color.to_hex(),
            contrast: ContrastSummary::from(&report),
            required,
            passed,
        };

        if self.json {
            print_json(&output)?;
        } else {
            println!("Color:     {}", output.color);
            println!("Against:   {}", output.contrast.reference);
            println!("Ratio:     {}", output.contrast.ratio_text);
            println!("Level:     {}", output.contrast.level);
            if let Some(level) = required {
                let mark = if passed { "✓" } else { "✗" };
                println!("Required:  {} {}", level, mark);
            }
        }

        if !passed {
            return Err(CliError::validation(format!(
                "Contrast {} is below the required level {}",
                output.contrast.ratio_text,
                required.map_or("", ContrastLevel::label)
            )));
        }

        Ok(())
    }
}

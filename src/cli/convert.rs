//! Color conversion command.

use crate::cli::common::{print_json, resolve_mode, CliError, CliResult};
use crate::config::Config;
use crate::services::{Conversion, Field};
use clap::Args;
use serde::Serialize;

/// Convert a color between hex, RGB and HSL and score its contrast
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Color text: "#RRGGBB", "#RGB", "r,g,b" or "h,s%,l%"
    #[arg(value_name = "COLOR", allow_hyphen_values = true)]
    pub input: String,

    /// Input format (hex, rgb, hsl). Detected when omitted.
    #[arg(long, value_name = "FORMAT")]
    pub from: Option<String>,

    /// Contrast role (background or text). Defaults to the configured mode.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ConvertOutput {
    input: String,
    source: Field,
    #[serde(flatten)]
    conversion: Conversion,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e}")))?;
        let mode = resolve_mode(self.mode.as_deref(), config.contrast.default_mode)?;

        let (source, color) = match &self.from {
            Some(format) => {
                let field: Field = format.parse().map_err(CliError::validation)?;
                (field, field.parse(&self.input)?)
            }
            None => Field::detect(&self.input).ok_or_else(|| {
                CliError::validation(format!(
                    "Unrecognized color '{}': expected hex, r,g,b or h,s%,l%",
                    self.input
                ))
            })?,
        };

        let output = ConvertOutput {
            input: self.input.clone(),
            source,
            conversion: Conversion::of(color, mode),
        };

        if self.json {
            print_json(&output)?;
        } else {
            print_conversion(&output.input, Some(output.source), &output.conversion);
        }

        Ok(())
    }
}

/// Prints a conversion in the human-readable layout shared by `convert` and `random`.
pub fn print_conversion(input: &str, source: Option<Field>, conversion: &Conversion) {
    match source {
        Some(field) => println!("Input:    {} ({})", input, field),
        None => println!("Input:    {}", input),
    }
    println!("Hex:      {}", conversion.hex);
    println!("RGB:      {}", conversion.rgb_text);
    println!("HSL:      {}", conversion.hsl_text);
    println!(
        "Contrast: {} vs {} ({})",
        conversion.contrast.ratio_text, conversion.contrast.reference, conversion.contrast.mode
    );
    println!("Level:    {}", conversion.contrast.level);
}

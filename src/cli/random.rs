//! Random color command.

use crate::cli::common::{print_json, resolve_mode, CliError, CliResult};
use crate::cli::convert::print_conversion;
use crate::config::Config;
use crate::models::Color;
use crate::services::Conversion;
use clap::Args;

/// Generate random colors
#[derive(Debug, Clone, Args)]
pub struct RandomArgs {
    /// Number of colors to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Contrast role (background or text). Defaults to the configured mode.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl RandomArgs {
    /// Execute the random command
    pub fn execute(&self) -> CliResult<()> {
        if self.count == 0 {
            return Err(CliError::validation("--count must be at least 1"));
        }

        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e}")))?;
        let mode = resolve_mode(self.mode.as_deref(), config.contrast.default_mode)?;

        let mut rng = rand::thread_rng();
        let conversions: Vec<Conversion> = (0..self.count)
            .map(|_| Conversion::of(Color::random(&mut rng), mode))
            .collect();

        if self.json {
            print_json(&conversions)?;
        } else {
            for (i, conversion) in conversions.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_conversion(&conversion.hex, None, conversion);
            }
        }

        Ok(())
    }
}

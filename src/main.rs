//! ColorTool - color converter and contrast checker
//!
//! Without a subcommand this launches the interactive terminal converter.
//! Subcommands expose the same conversions for scripts and CI.

use clap::{Parser, Subcommand};

use colortool::cli::{CliError, ConfigArgs, ContrastArgs, ConvertArgs, RandomArgs};
use colortool::logging;

/// ColorTool - convert colors and check WCAG contrast
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Color to preload in the interactive converter
    #[arg(long, value_name = "COLOR", allow_hyphen_values = true)]
    color: Option<String>,

    /// Contrast role for the interactive converter (background or text)
    #[arg(short, long, value_name = "MODE")]
    mode: Option<String>,

    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a color to every notation and score its contrast
    Convert(ConvertArgs),
    /// Check contrast of a color against a reference or another color
    Contrast(ContrastArgs),
    /// Generate random colors
    Random(RandomArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(command) => {
            logging::init(cli.verbose, "warn");
            match command {
                Commands::Convert(args) => args.execute(),
                Commands::Contrast(args) => args.execute(),
                Commands::Random(args) => args.execute(),
                Commands::Config(args) => args.execute(),
            }
        }
        None => run_interactive(&cli),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

#[cfg(feature = "ratatui")]
fn run_interactive(cli: &Cli) -> Result<(), CliError> {
    use colortool::cli::common::resolve_mode;
    use colortool::config::Config;
    use colortool::models::parse_any;

    let config =
        Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {e}")))?;
    let color = cli.color.as_deref().map(parse_any).transpose()?;
    let mode = cli
        .mode
        .as_deref()
        .map(|flag| resolve_mode(Some(flag), config.contrast.default_mode))
        .transpose()?;

    colortool::tui::launch(config, color, mode)
        .map_err(|e| CliError::io(format!("Terminal error: {e:#}")))
}

#[cfg(not(feature = "ratatui"))]
fn run_interactive(_cli: &Cli) -> Result<(), CliError> {
    Err(CliError::validation(
        "Interactive mode requires the 'ratatui' feature; use a subcommand such as 'convert'",
    ))
}

//! CLI command handlers for ColorTool.
//!
//! This module provides headless, scriptable access to the converter for
//! shell scripts and CI checks (for example failing a build when a brand
//! color drops below AA).

pub mod common;
pub mod config;
pub mod contrast;
pub mod convert;
pub mod random;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use contrast::ContrastArgs;
pub use convert::ConvertArgs;
pub use random::RandomArgs;

//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "ColorTool";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "ColorTool";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "COLORTOOL_CONFIG_DIR";

/// How long a "Copied" status message stays visible, in milliseconds.
pub const COPY_FEEDBACK_MS: u64 = 900;

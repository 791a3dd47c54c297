//! Data models for colors, contrast scoring and saved palettes.
//!
//! Everything in here is pure: no terminal, network or file access. The
//! presentation layers (`tui`, `cli`, `web`) call into these types.

pub mod color;
pub mod contrast;
pub mod palette;

// Re-export all model types
pub use color::{parse_any, parse_hex, parse_hsl_text, parse_rgb_text, Color, Hsl, ParseColorError};
pub use contrast::{
    contrast_ratio, format_ratio, relative_luminance, ContrastLevel, ContrastMode, ContrastReport,
    INK, PANEL,
};
pub use palette::{Palette, PaletteError, DEFAULT_MAX_CHIPS};

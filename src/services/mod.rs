//! Service layer for business logic.
//!
//! Services coordinate the pure color models for the front ends: the TUI,
//! the CLI and the web API all drive the same converter.

pub mod converter;

// Re-export commonly used types
pub use converter::{ContrastSummary, Conversion, ConverterState, Field};

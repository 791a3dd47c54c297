//! ColorTool Library
//!
//! This library provides the core of the ColorTool application: parsing and
//! converting colors between hex, RGB and HSL notation, scoring WCAG contrast
//! against fixed reference colors, and the terminal, command-line and HTTP
//! front ends built on top of them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod services;
#[cfg(feature = "ratatui")]
pub mod shortcuts;
#[cfg(feature = "ratatui")]
pub mod tui;
#[cfg(feature = "web")]
pub mod web;

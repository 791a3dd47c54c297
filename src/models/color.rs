//! Color values with hex, `r,g,b` and `h,s%,l%` parsing and formatting.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static RGB_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*$")
        .expect("rgb text pattern is valid")
});

static HSL_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})%\s*,\s*([0-9]{1,3})%\s*$")
        .expect("hsl text pattern is valid")
});

/// Malformed color text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Not a 3- or 6-digit hex color.
    #[error("invalid hex color '{0}': expected #RGB or #RRGGBB")]
    InvalidHex(String),
    /// Not an `r,g,b` triple.
    #[error("invalid rgb color '{0}': expected r,g,b")]
    InvalidRgb(String),
    /// Not an `h,s%,l%` triple.
    #[error("invalid hsl color '{0}': expected h,s%,l%")]
    InvalidHsl(String),
    /// Matches none of the three formats.
    #[error("unrecognized color '{0}': expected hex, r,g,b or h,s%,l%")]
    Unrecognized(String),
}

/// RGB color value.
///
/// Channels parsed from `r,g,b` text are kept as typed (up to 999) and clamped
/// to 0-255 whenever the color is rendered or measured. Colors built any other
/// way are always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u16,
    /// Green channel
    pub g: u16,
    /// Blue channel
    pub b: u16,
}

/// Hue/saturation/lightness triple rounded to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees (0-359)
    pub h: u16,
    /// Saturation percentage (0-100)
    pub s: u8,
    /// Lightness percentage (0-100)
    pub l: u8,
}

impl Color {
    /// Creates a new `Color` from in-range channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as u16,
            g: g as u16,
            b: b as u16,
        }
    }

    /// Creates a `Color` from raw channels, which may exceed 255.
    #[must_use]
    pub const fn from_channels(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels clamped to 0-255.
    #[must_use]
    pub fn clamped(&self) -> (u8, u8, u8) {
        let clamp = |v: u16| v.min(255) as u8;
        (clamp(self.r), clamp(self.g), clamp(self.b))
    }

    /// Returns true if every channel is within 0-255.
    #[must_use]
    pub const fn in_range(&self) -> bool {
        self.r <= 255 && self.g <= 255 && self.b <= 255
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use colortool::models::Color;
    ///
    /// assert_eq!(Color::new(0, 128, 255).to_hex(), "#0080FF");
    /// assert_eq!(Color::from_channels(300, 0, 0).to_hex(), "#FF0000");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.clamped();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Formats the raw channels as `r,g,b`.
    #[must_use]
    pub fn rgb_text(&self) -> String {
        format!("{},{},{}", self.r, self.g, self.b)
    }

    /// Converts the color to HSL at full precision.
    ///
    /// Returns `(h, s, l)` with `h` in 0.0-360.0 degrees and `s`, `l` in 0.0-1.0.
    /// Grayscale colors report a hue and saturation of 0.
    #[must_use]
    pub fn to_hsl_exact(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.clamped();
        let r = f64::from(r) / 255.0;
        let g = f64::from(g) / 255.0;
        let b = f64::from(b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h * 60.0, s, l)
    }

    /// Converts the color to HSL rounded to whole degrees and percentages.
    ///
    /// # Examples
    ///
    /// ```
    /// use colortool::models::{Color, Hsl};
    ///
    /// assert_eq!(Color::new(255, 0, 0).to_hsl(), Hsl { h: 0, s: 100, l: 50 });
    /// assert_eq!(Color::new(128, 128, 128).to_hsl(), Hsl { h: 0, s: 0, l: 50 });
    /// ```
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        let (h, s, l) = self.to_hsl_exact();
        Hsl {
            // 359.5 and up rounds onto the 0 degree mark
            h: (h.round() as u16) % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }

    /// Creates a color from HSL at full precision.
    ///
    /// `h` is in degrees and wrapped into 0-360; `s` and `l` are clamped to 0.0-1.0.
    #[must_use]
    pub fn from_hsl_exact(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(360.0) / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        let to_channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u16;

        if s == 0.0 {
            let v = to_channel(l);
            return Self::from_channels(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::from_channels(
            to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_channel(p, q, h)),
            to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Creates a color from a rounded HSL triple.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_hsl_exact(
            f64::from(hsl.h),
            f64::from(hsl.s) / 100.0,
            f64::from(hsl.l) / 100.0,
        )
    }

    /// Picks a uniformly random in-range color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }
}

/// Piecewise hue function shared by the three output channels.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Parses a 3- or 6-digit hex color, with or without a leading `#`.
///
/// # Examples
///
/// ```
/// use colortool::models::{parse_hex, Color};
///
/// assert_eq!(parse_hex("#FFFFFF"), Ok(Color::new(255, 255, 255)));
/// assert_eq!(parse_hex("abc"), Ok(Color::new(170, 187, 204)));
/// assert!(parse_hex("#abcd").is_err());
/// ```
pub fn parse_hex(input: &str) -> Result<Color, ParseColorError> {
    let invalid = || ParseColorError::InvalidHex(input.to_string());

    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return Err(invalid()),
    };

    let value = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
    Ok(Color::new(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ))
}

/// Parses `r,g,b` text. Each component is a 1-3 digit integer; values above
/// 255 are kept and clamped on output.
pub fn parse_rgb_text(input: &str) -> Result<Color, ParseColorError> {
    let caps = RGB_TEXT
        .captures(input)
        .ok_or_else(|| ParseColorError::InvalidRgb(input.to_string()))?;

    let channel = |i: usize| caps[i].parse::<u16>();
    match (channel(1), channel(2), channel(3)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Color::from_channels(r, g, b)),
        _ => Err(ParseColorError::InvalidRgb(input.to_string())),
    }
}

/// Parses `h,s%,l%` text into a color.
///
/// The hue accepts any 1-3 digit value and is taken modulo 360. Saturation and
/// lightness above 100% are clamped to 100%.
pub fn parse_hsl_text(input: &str) -> Result<Color, ParseColorError> {
    let caps = HSL_TEXT
        .captures(input)
        .ok_or_else(|| ParseColorError::InvalidHsl(input.to_string()))?;

    let component = |i: usize| caps[i].parse::<u16>();
    let (Ok(h), Ok(s), Ok(l)) = (component(1), component(2), component(3)) else {
        return Err(ParseColorError::InvalidHsl(input.to_string()));
    };

    Ok(Color::from_hsl_exact(
        f64::from(h % 360),
        f64::from(s.min(100)) / 100.0,
        f64::from(l.min(100)) / 100.0,
    ))
}

/// Parses any supported format, trying hex, then `r,g,b`, then `h,s%,l%`.
pub fn parse_any(input: &str) -> Result<Color, ParseColorError> {
    parse_hex(input)
        .or_else(|_| parse_rgb_text(input))
        .or_else(|_| parse_hsl_text(input))
        .map_err(|_| ParseColorError::Unrecognized(input.to_string()))
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_any(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}%,{}%", self.h, self.s, self.l)
    }
}

impl Default for Color {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

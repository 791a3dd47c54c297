//! WCAG relative luminance, contrast ratios and compliance levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Color;

/// Dark panel color the text role is measured against.
pub const PANEL: Color = Color::new(0x12, 0x13, 0x18);

/// Light ink color the background role is measured against.
pub const INK: Color = Color::new(0xE8, 0xEC, 0xF1);

/// Which role the current color plays when scoring contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    /// The color is a background behind light ink text
    #[default]
    Background,
    /// The color is text drawn on the dark panel
    Text,
}

impl ContrastMode {
    /// Fixed reference color this mode is measured against.
    #[must_use]
    pub const fn reference(self) -> Color {
        match self {
            Self::Background => INK,
            Self::Text => PANEL,
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn swapped(self) -> Self {
        match self {
            Self::Background => Self::Text,
            Self::Text => Self::Background,
        }
    }

    /// Lowercase name used in config files, CLI flags and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ContrastMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContrastMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "background" | "bg" => Ok(Self::Background),
            "text" | "fg" => Ok(Self::Text),
            other => Err(format!(
                "Invalid contrast mode '{other}'. Must be 'background' or 'text'"
            )),
        }
    }
}

/// WCAG compliance level for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContrastLevel {
    /// Below 3:1
    #[serde(rename = "Fail")]
    Fail,
    /// At least 3:1, enough for large text
    #[serde(rename = "AA-large")]
    AaLarge,
    /// At least 4.5:1
    #[serde(rename = "AA")]
    Aa,
    /// At least 7:1
    #[serde(rename = "AAA")]
    Aaa,
}

impl ContrastLevel {
    /// Classifies a contrast ratio.
    ///
    /// # Examples
    ///
    /// ```
    /// use colortool::models::ContrastLevel;
    ///
    /// assert_eq!(ContrastLevel::classify(21.0), ContrastLevel::Aaa);
    /// assert_eq!(ContrastLevel::classify(4.5), ContrastLevel::Aa);
    /// assert_eq!(ContrastLevel::classify(2.99), ContrastLevel::Fail);
    /// ```
    #[must_use]
    pub fn classify(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    /// Badge text shown next to the ratio.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::AaLarge => "AA-large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContrastLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "aa-large" | "aa_large" | "large" => Ok(Self::AaLarge),
            "aa" => Ok(Self::Aa),
            "aaa" => Ok(Self::Aaa),
            other => Err(format!(
                "Invalid contrast level '{other}'. Must be 'fail', 'aa-large', 'aa' or 'aaa'"
            )),
        }
    }
}

/// Relative luminance of a color per the sRGB linearization.
///
/// Channels above 255 are clamped first.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.clamped();
    let linear = |channel: u8| {
        let v = f64::from(channel) / 255.0;
        if v <= 0.039_28 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };

    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// Contrast ratio between two colors, rounded to two decimal places.
///
/// # Examples
///
/// ```
/// use colortool::models::{contrast_ratio, Color};
///
/// let white = Color::new(255, 255, 255);
/// let black = Color::new(0, 0, 0);
/// assert_eq!(contrast_ratio(white, black), 21.0);
/// ```
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let ratio = (la.max(lb) + 0.05) / (la.min(lb) + 0.05);
    (ratio * 100.0).round() / 100.0
}

/// Contrast of a color against the reference color of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastReport {
    /// Role the color was scored in
    pub mode: ContrastMode,
    /// Color the ratio was measured against
    pub reference: Color,
    /// Ratio rounded to two decimals
    pub ratio: f64,
    /// WCAG level of the ratio
    pub level: ContrastLevel,
}

impl ContrastReport {
    /// Scores `color` against an arbitrary reference.
    #[must_use]
    pub fn against(color: Color, reference: Color, mode: ContrastMode) -> Self {
        let ratio = contrast_ratio(color, reference);
        Self {
            mode,
            reference,
            ratio,
            level: ContrastLevel::classify(ratio),
        }
    }

    /// Scores `color` against the fixed reference of `mode`.
    #[must_use]
    pub fn for_mode(color: Color, mode: ContrastMode) -> Self {
        Self::against(color, mode.reference(), mode)
    }

    /// Ratio formatted as `X.XX:1`.
    #[must_use]
    pub fn ratio_text(&self) -> String {
        format_ratio(self.ratio)
    }
}

/// Formats a ratio as `X.XX:1`.
#[must_use]
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.2}:1")
}

//! Converter state shared by the interactive front ends.
//!
//! `ConverterState` owns the three field texts, the contrast mode and the last
//! color that parsed successfully. Front ends feed it edits and read back the
//! derived values; they never compute conversions themselves.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::models::{
    parse_hex, parse_hsl_text, parse_rgb_text, Color, ContrastLevel, ContrastMode, ContrastReport,
    Hsl, ParseColorError,
};

/// One of the three editable color fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// `#RRGGBB` or `#RGB`
    Hex,
    /// `r,g,b`
    Rgb,
    /// `h,s%,l%`
    Hsl,
}

impl Field {
    /// All fields in precedence order.
    pub const ALL: [Self; 3] = [Self::Hex, Self::Rgb, Self::Hsl];

    /// Parses text in this field's format.
    pub fn parse(self, text: &str) -> Result<Color, ParseColorError> {
        match self {
            Self::Hex => parse_hex(text),
            Self::Rgb => parse_rgb_text(text),
            Self::Hsl => parse_hsl_text(text),
        }
    }

    /// Short label used in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
        }
    }

    /// Detects which format `text` is in, trying hex, then rgb, then hsl.
    #[must_use]
    pub fn detect(text: &str) -> Option<(Self, Color)> {
        Self::ALL
            .into_iter()
            .find_map(|field| field.parse(text).ok().map(|color| (field, color)))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        })
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            other => Err(format!(
                "Invalid color format '{other}'. Must be 'hex', 'rgb' or 'hsl'"
            )),
        }
    }
}

/// Live state of the converter widget.
#[derive(Debug, Clone)]
pub struct ConverterState {
    hex: String,
    rgb: String,
    hsl: String,
    mode: ContrastMode,
    color: Option<Color>,
    report: Option<ContrastReport>,
    last_edited: Option<Field>,
}

impl ConverterState {
    /// Creates an empty converter. Nothing is displayed until a field parses.
    #[must_use]
    pub fn new(mode: ContrastMode) -> Self {
        Self {
            hex: String::new(),
            rgb: String::new(),
            hsl: String::new(),
            mode,
            color: None,
            report: None,
            last_edited: None,
        }
    }

    /// Creates a converter showing `color` in all three fields.
    #[must_use]
    pub fn with_color(color: Color, mode: ContrastMode) -> Self {
        let mut state = Self::new(mode);
        state.hex = color.to_hex();
        // The hex field always parses, so the initial update cannot fail
        let _ = state.update(None);
        state
    }

    /// Replaces the text of `field` and recomputes everything from it.
    ///
    /// On a parse error the other fields and the derived values keep their
    /// previous contents.
    pub fn edit(&mut self, field: Field, text: impl Into<String>) -> Result<Color, ParseColorError> {
        *self.field_mut(field) = text.into();
        self.last_edited = Some(field);
        self.update(Some(field))
    }

    /// Recomputes derived values with `from` as the source of truth.
    ///
    /// With `None`, the first field that parses wins (hex, then rgb, then hsl)
    /// and all three fields are rewritten.
    pub fn update(&mut self, from: Option<Field>) -> Result<Color, ParseColorError> {
        let color = match from {
            Some(field) => field.parse(self.field(field)),
            None => Field::ALL
                .into_iter()
                .find_map(|field| field.parse(self.field(field)).ok())
                .ok_or_else(|| ParseColorError::Unrecognized(self.hex.clone())),
        };

        let color = match color {
            Ok(color) => color,
            Err(e) => {
                debug!("Ignoring unparseable input: {e}");
                return Err(e);
            }
        };

        if from != Some(Field::Hex) {
            self.hex = color.to_hex();
        }
        if from != Some(Field::Rgb) {
            self.rgb = color.rgb_text();
        }
        if from != Some(Field::Hsl) {
            self.hsl = color.to_hsl().to_string();
        }

        self.color = Some(color);
        self.report = Some(ContrastReport::for_mode(color, self.mode));
        Ok(color)
    }

    /// Recomputes from the last edited field, or by precedence if none was edited.
    pub fn refresh(&mut self) -> Result<Color, ParseColorError> {
        self.update(self.last_edited)
    }

    /// Sets the contrast mode and rescores the current color.
    pub fn set_mode(&mut self, mode: ContrastMode) {
        debug!("Contrast mode: {} -> {}", self.mode, mode);
        self.mode = mode;
        if self.refresh().is_err() {
            // Stale text in the source field; rescore the last valid color
            self.report = self.color.map(|c| ContrastReport::for_mode(c, mode));
        }
    }

    /// Toggles between background and text mode.
    pub fn swap_mode(&mut self) {
        self.set_mode(self.mode.swapped());
    }

    /// Loads a random color through the hex field.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Color {
        let color = Color::random(rng);
        self.hex = color.to_hex();
        self.last_edited = Some(Field::Hex);
        // A freshly formatted hex string always parses
        let _ = self.update(Some(Field::Hex));
        color
    }

    /// Text of `field`.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Hex => &self.hex,
            Field::Rgb => &self.rgb,
            Field::Hsl => &self.hsl,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Hex => &mut self.hex,
            Field::Rgb => &mut self.rgb,
            Field::Hsl => &mut self.hsl,
        }
    }

    /// Current contrast mode.
    #[must_use]
    pub const fn mode(&self) -> ContrastMode {
        self.mode
    }

    /// Field that was edited most recently.
    #[must_use]
    pub const fn last_edited(&self) -> Option<Field> {
        self.last_edited
    }

    /// Last color that parsed successfully.
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        self.color
    }

    /// Contrast of the last valid color.
    #[must_use]
    pub const fn report(&self) -> Option<&ContrastReport> {
        self.report.as_ref()
    }

    /// Swatch color as `#RRGGBB`.
    #[must_use]
    pub fn swatch_hex(&self) -> Option<String> {
        self.color.map(|c| c.to_hex())
    }

    /// Ratio as `X.XX:1`.
    #[must_use]
    pub fn ratio_text(&self) -> Option<String> {
        self.report.as_ref().map(ContrastReport::ratio_text)
    }

    /// Compliance badge.
    #[must_use]
    pub fn badge(&self) -> Option<ContrastLevel> {
        self.report.as_ref().map(|r| r.level)
    }
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new(ContrastMode::default())
    }
}

/// Contrast part of a [`Conversion`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastSummary {
    /// Role the color was scored in
    pub mode: ContrastMode,
    /// Reference color as `#RRGGBB`
    pub reference: String,
    /// Ratio rounded to two decimals
    pub ratio: f64,
    /// Ratio as `X.XX:1`
    pub ratio_text: String,
    /// WCAG level
    pub level: ContrastLevel,
}

impl From<&ContrastReport> for ContrastSummary {
    fn from(report: &ContrastReport) -> Self {
        Self {
            mode: report.mode,
            reference: report.reference.to_hex(),
            ratio: report.ratio,
            ratio_text: report.ratio_text(),
            level: report.level,
        }
    }
}

/// Every representation of one color, ready for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    /// `#RRGGBB`
    pub hex: String,
    /// Raw channels
    pub rgb: Color,
    /// `r,g,b`
    pub rgb_text: String,
    /// Rounded HSL
    pub hsl: Hsl,
    /// `h,s%,l%`
    pub hsl_text: String,
    /// Contrast against the mode's reference color
    pub contrast: ContrastSummary,
}

impl Conversion {
    /// Derives all representations of `color` and scores it in `mode`.
    #[must_use]
    pub fn of(color: Color, mode: ContrastMode) -> Self {
        let hsl = color.to_hsl();
        Self {
            hex: color.to_hex(),
            rgb: color,
            rgb_text: color.rgb_text(),
            hsl,
            hsl_text: hsl.to_string(),
            contrast: ContrastSummary::from(&ContrastReport::for_mode(color, mode)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{INK, PANEL};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_is_empty() {
        let state = ConverterState::default();
        assert_eq!(state.field(Field::Hex), "");
        assert!(state.color().is_none());
        assert!(state.ratio_text().is_none());
        assert_eq!(state.mode(), ContrastMode::Background);
    }

    #[test]
    fn test_with_color_fills_all_fields() {
        let state = ConverterState::with_color(Color::new(170, 187, 204), ContrastMode::Text);
        assert_eq!(state.field(Field::Hex), "#AABBCC");
        assert_eq!(state.field(Field::Rgb), "170,187,204");
        assert_eq!(state.field(Field::Hsl), "210,25%,73%");
        assert_eq!(state.last_edited(), None);
    }

    #[test]
    fn test_edit_hex_rewrites_other_fields_only() {
        let mut state = ConverterState::default();
        let color = state.edit(Field::Hex, "abc").unwrap();

        assert_eq!(color, Color::new(170, 187, 204));
        assert_eq!(state.field(Field::Hex), "abc");
        assert_eq!(state.field(Field::Rgb), "170,187,204");
        assert_eq!(state.field(Field::Hsl), "210,25%,73%");
        assert_eq!(state.swatch_hex().as_deref(), Some("#AABBCC"));
    }

    #[test]
    fn test_edit_rgb_keeps_raw_text_and_clamps_hex() {
        let mut state = ConverterState::default();
        state.edit(Field::Rgb, "300,0,0").unwrap();

        assert_eq!(state.field(Field::Rgb), "300,0,0");
        assert_eq!(state.field(Field::Hex), "#FF0000");
        assert_eq!(state.field(Field::Hsl), "0,100%,50%");
        assert_eq!(state.color(), Some(Color::from_channels(300, 0, 0)));
    }

    #[test]
    fn test_edit_hsl_rewrites_hex_and_rgb() {
        let mut state = ConverterState::default();
        state.edit(Field::Hsl, "120,100%,25%").unwrap();

        assert_eq!(state.field(Field::Hex), "#008000");
        assert_eq!(state.field(Field::Rgb), "0,128,0");
        assert_eq!(state.field(Field::Hsl), "120,100%,25%");
    }

    #[test]
    fn test_invalid_edit_leaves_previous_values() {
        let mut state = ConverterState::default();
        state.edit(Field::Hex, "#FFFFFF").unwrap();
        let ratio = state.ratio_text();

        let err = state.edit(Field::Hsl, "bad").unwrap_err();
        assert!(matches!(err, ParseColorError::InvalidHsl(_)));

        assert_eq!(state.field(Field::Hsl), "bad");
        assert_eq!(state.field(Field::Hex), "#FFFFFF");
        assert_eq!(state.field(Field::Rgb), "255,255,255");
        assert_eq!(state.color(), Some(Color::new(255, 255, 255)));
        assert_eq!(state.ratio_text(), ratio);
    }

    #[test]
    fn test_update_without_source_uses_precedence() {
        let mut state = ConverterState::default();
        *state.field_mut(Field::Rgb) = "1,2,3".to_string();
        *state.field_mut(Field::Hsl) = "0,100%,50%".to_string();

        let color = state.update(None).unwrap();
        assert_eq!(color, Color::new(1, 2, 3));
        assert_eq!(state.field(Field::Hex), "#010203");
        assert_eq!(state.field(Field::Hsl), "210,50%,1%");
    }

    #[test]
    fn test_update_without_source_fails_when_nothing_parses() {
        let mut state = ConverterState::default();
        assert!(state.update(None).is_err());
        assert!(state.color().is_none());
    }

    #[test]
    fn test_mode_change_rescores_from_last_edited_field() {
        let mut state = ConverterState::default();
        state.edit(Field::Rgb, "255,255,255").unwrap();
        // Hex now disagrees with the rgb field; the rgb edit stays authoritative
        *state.field_mut(Field::Hex) = "#000000".to_string();

        state.set_mode(ContrastMode::Text);
        let report = state.report().unwrap();
        assert_eq!(report.reference, PANEL);
        assert_eq!(state.color(), Some(Color::new(255, 255, 255)));
        assert_eq!(state.badge(), Some(ContrastLevel::Aaa));
    }

    #[test]
    fn test_swap_mode() {
        let mut state = ConverterState::with_color(Color::new(255, 255, 255), ContrastMode::Background);
        assert_eq!(state.report().unwrap().reference, INK);
        assert_eq!(state.badge(), Some(ContrastLevel::Fail));

        state.swap_mode();
        assert_eq!(state.mode(), ContrastMode::Text);
        assert_eq!(state.report().unwrap().reference, PANEL);
        assert_eq!(state.ratio_text().as_deref(), Some("18.55:1"));
    }

    #[test]
    fn test_swap_mode_with_stale_field_rescores_last_color() {
        let mut state = ConverterState::default();
        state.edit(Field::Hex, "#FFFFFF").unwrap();
        let _ = state.edit(Field::Hex, "#FFF1");

        state.swap_mode();
        let report = state.report().unwrap();
        assert_eq!(report.mode, ContrastMode::Text);
        assert_eq!(report.ratio_text(), "18.55:1");
        assert_eq!(state.field(Field::Hex), "#FFF1");
    }

    #[test]
    fn test_randomize() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = ConverterState::default();
        let color = state.randomize(&mut rng);

        assert_eq!(state.color(), Some(color));
        assert_eq!(state.field(Field::Hex), color.to_hex());
        assert_eq!(state.last_edited(), Some(Field::Hex));
    }

    #[test]
    fn test_field_detect_and_parse() {
        assert_eq!(Field::detect("fff").map(|(f, _)| f), Some(Field::Hex));
        assert_eq!(Field::detect("1,2,3").map(|(f, _)| f), Some(Field::Rgb));
        assert_eq!(Field::detect("1,2%,3%").map(|(f, _)| f), Some(Field::Hsl));
        assert!(Field::detect("???").is_none());
        assert_eq!("RGB".parse::<Field>(), Ok(Field::Rgb));
        assert!("cmyk".parse::<Field>().is_err());
    }

    #[test]
    fn test_conversion_of() {
        let conversion = Conversion::of(Color::new(255, 255, 255), ContrastMode::Text);
        assert_eq!(conversion.hex, "#FFFFFF");
        assert_eq!(conversion.rgb_text, "255,255,255");
        assert_eq!(conversion.hsl_text, "0,0%,100%");
        assert_eq!(conversion.contrast.reference, "#121318");
        assert_eq!(conversion.contrast.level, ContrastLevel::Aaa);

        let json = serde_json::to_value(&conversion).unwrap();
        assert_eq!(json["contrast"]["mode"], "text");
        assert_eq!(json["contrast"]["level"], "AAA");
        assert_eq!(json["rgb"]["r"], 255);
    }
}

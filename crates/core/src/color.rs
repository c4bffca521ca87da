//! Display colors and the theme that assigns them to simulation roles.
//!
//! Colors are plain sRGB triples in [0, 1]. They serialize as `"#rrggbb"`
//! hex strings so themes stay readable in JSON config files.

use crate::error::SimError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Srgb = Srgb::new(1.0, 1.0, 1.0);
    pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);
    pub const MAGENTA: Srgb = Srgb::new(1.0, 0.0, 1.0);
    /// `#999999`.
    pub const GRAY: Srgb = Srgb::new(0.6, 0.6, 0.6);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color like `"#ff00aa"`, `"ff00aa"` or the short form `"#f0a"`.
    ///
    /// Returns `SimError::InvalidColor` for anything else.
    pub fn from_hex(hex: &str) -> Result<Srgb, SimError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SimError::InvalidColor(format!("non-hex digits in {hex:?}")));
        }
        let channel = |s: &str| {
            u8::from_str_radix(s, 16)
                .map_err(|e| SimError::InvalidColor(format!("{hex:?}: {e}")))
        };
        let (r, g, b) = match digits.len() {
            6 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ),
            // "#f0a" expands each nibble: f -> ff
            3 => (
                channel(&digits[0..1])? * 17,
                channel(&digits[1..2])? * 17,
                channel(&digits[2..3])? * 17,
            ),
            n => {
                return Err(SimError::InvalidColor(format!(
                    "expected 3 or 6 hex digits, got {n}"
                )))
            }
        };
        Ok(Srgb::from_rgb8(r, g, b))
    }

    /// Builds a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Quantizes to 8-bit channels, clamping out-of-range components.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Colors used by the renderer for each kind of drawable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: Srgb,
    pub particle: Srgb,
    pub attractive: Srgb,
    pub repulsive: Srgb,
    pub neutral: Srgb,
    pub emitter: Srgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Srgb::BLACK,
            particle: Srgb::MAGENTA,
            attractive: Srgb::GREEN,
            repulsive: Srgb::RED,
            neutral: Srgb::WHITE,
            emitter: Srgb::GRAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_long_form_with_and_without_hash() {
        assert_eq!(Srgb::from_hex("#ff00ff").unwrap(), Srgb::MAGENTA);
        assert_eq!(Srgb::from_hex("00ff00").unwrap(), Srgb::GREEN);
    }

    #[test]
    fn from_hex_expands_short_form() {
        assert_eq!(Srgb::from_hex("#f00").unwrap(), Srgb::RED);
        assert_eq!(Srgb::from_hex("#fff").unwrap(), Srgb::WHITE);
        assert_eq!(Srgb::from_hex("#999").unwrap().to_hex(), "#999999");
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        for bad in ["", "#12", "#12345", "#gggggg", "#ffé", "#+f+f+f", "+ff", "#-1-1-1"] {
            assert!(
                matches!(Srgb::from_hex(bad), Err(SimError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn to_rgb8_clamps_out_of_range() {
        assert_eq!(Srgb::new(-0.5, 0.5, 2.0).to_rgb8(), [0, 128, 255]);
    }

    #[test]
    fn gray_matches_emitter_hex() {
        assert_eq!(Srgb::GRAY.to_hex(), "#999999");
    }

    #[test]
    fn theme_serializes_as_hex_strings() {
        let v = serde_json::to_value(Theme::default()).unwrap();
        assert_eq!(v["particle"], "#ff00ff");
        assert_eq!(v["attractive"], "#00ff00");
        assert_eq!(v["repulsive"], "#ff0000");
        assert_eq!(v["neutral"], "#ffffff");
        assert_eq!(v["emitter"], "#999999");
    }

    #[test]
    fn theme_missing_keys_fall_back_to_defaults() {
        let theme: Theme = serde_json::from_str(r##"{"particle": "#00ffff"}"##).unwrap();
        assert_eq!(theme.particle, Srgb::new(0.0, 1.0, 1.0));
        assert_eq!(theme.emitter, Theme::default().emitter);
    }

    #[test]
    fn theme_rejects_invalid_color() {
        let result = serde_json::from_str::<Theme>(r#"{"particle": "purple"}"#);
        assert!(result.is_err());
    }
}

//! # Colors
//!
//! RGB colors, `#RRGGBB` parsing, shade derivation, and the per-family /
//! per-cell fill model used when laying out tiles.

mod fill;

pub use fill::{ColorGrid, CubeColor, FamilyFills, Fill};

use std::fmt;
use std::str::FromStr;

use config::constants::{BLACK, SHADE_STEP, WHITE};
use serde::{Deserialize, Serialize};

use crate::error::DrawError;

/// An 8-bit-per-channel RGB color.
///
/// Serializes as an uppercase `#RRGGBB` string.
///
/// # Example
///
/// ```rust
/// use arraydraw::Rgb;
///
/// let red: Rgb = "#FF0000".parse().unwrap();
/// assert_eq!(red.lighten().to_hex(), "#FF8080");
/// assert_eq!(red.darken().to_hex(), "#800000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::from_array(WHITE);
    pub const BLACK: Rgb = Rgb::from_array(BLACK);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn from_array(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parses a `#RRGGBB` string. Hex digits may be either case.
    pub fn from_hex(hex: &str) -> Result<Self, DrawError> {
        let invalid = || DrawError::invalid_color(format!("expected #RRGGBB, got {hex:?}"));

        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(invalid)?;
        let channel =
            |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Formats as uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Linear interpolation toward `target` in RGB space.
    ///
    /// `step = 0` keeps `self`, `step = 1` yields `target`. Each channel is
    /// rounded to the nearest integer and clamped to [0, 255].
    pub fn interpolate(self, target: Rgb, step: f64) -> Rgb {
        let mix = |from: u8, to: u8| {
            let from = f64::from(from);
            let value = from + (f64::from(to) - from) * step;
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            mix(self.r, target.r),
            mix(self.g, target.g),
            mix(self.b, target.b),
        )
    }

    /// Roof shade: halfway toward white.
    pub fn lighten(self) -> Rgb {
        self.interpolate(Rgb::WHITE, SHADE_STEP)
    }

    /// Side shade: halfway toward black.
    pub fn darken(self) -> Rgb {
        self.interpolate(Rgb::BLACK, SHADE_STEP)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = DrawError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(channels: [u8; 3]) -> Self {
        Self::from_array(channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upper_and_lower() {
        assert_eq!(Rgb::from_hex("#304E6C").unwrap(), Rgb::new(0x30, 0x4E, 0x6C));
        assert_eq!(Rgb::from_hex("#304e6c").unwrap(), Rgb::new(0x30, 0x4E, 0x6C));
    }

    #[test]
    fn test_malformed_rejected() {
        for bad in ["#ZZZZZZ", "FF0000", "#FF000", "#FF00000", "", "#", "red", "#ＦＦ00"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(DrawError::InvalidColor { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#000000", "#FFFFFF", "#FF8C00", "#6F6F6F", "#0A0B0C"] {
            assert_eq!(Rgb::from_hex(hex).unwrap().to_hex(), hex);
        }
    }

    #[test]
    fn test_lowercase_canonicalized() {
        assert_eq!(Rgb::from_hex("#ff8c00").unwrap().to_string(), "#FF8C00");
    }

    #[test]
    fn test_red_shades() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(red.lighten(), Rgb::new(255, 128, 128));
        assert_eq!(red.darken(), Rgb::new(128, 0, 0));
    }

    #[test]
    fn test_interpolate_endpoints() {
        let base = Rgb::new(0x30, 0x4E, 0x6C);
        assert_eq!(base.interpolate(Rgb::WHITE, 0.0), base);
        assert_eq!(base.interpolate(Rgb::WHITE, 1.0), Rgb::WHITE);
    }

    #[test]
    fn test_interpolate_clamps() {
        let grey = Rgb::new(128, 128, 128);
        assert_eq!(grey.interpolate(Rgb::WHITE, 2.0), Rgb::WHITE);
        assert_eq!(grey.interpolate(Rgb::WHITE, -2.0), Rgb::BLACK);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(0, 255, 0)).unwrap();
        assert_eq!(json, "\"#00FF00\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(0, 255, 0));
        assert!(serde_json::from_str::<Rgb>("\"#GG0000\"").is_err());
    }
}

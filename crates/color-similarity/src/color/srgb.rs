//! The 24-bit sRGB color value
//!
//! [`Color`] is the only color representation the engine accepts. It is
//! validated once, at parse time, so every downstream computation is total.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::lab::LabColor;
use crate::error::{ColorError, FormatIssue};

/// An opaque 24-bit sRGB color.
///
/// The canonical text form is `#RRGGBB` with uppercase hex digits. Parsing is
/// case-insensitive, accepts an optional leading `#` and trims surrounding
/// whitespace; anything that is not exactly six hex digits is rejected.
///
/// # Example
///
/// ```
/// use color_similarity::Color;
///
/// let red: Color = "#ff0000".parse().unwrap();
/// assert_eq!(red.to_string(), "#FF0000");
/// assert_eq!(red.to_bytes(), [255, 0, 0]);
///
/// assert!("#F00".parse::<Color>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    /// Create a color from 8-bit channel values.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_rgb(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.r
    }

    #[inline]
    pub const fn g(self) -> u8 {
        self.g
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Channels normalized to `0.0..=1.0`, still gamma-encoded.
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Convert to CIE LAB (D65) with chroma and hue.
    #[inline]
    pub fn to_lab(self) -> LabColor {
        LabColor::from(self)
    }

    /// CIEDE2000 distance from `self` to `other`.
    ///
    /// Not guaranteed to be symmetric, see [`crate::delta_e_2000`].
    #[inline]
    pub fn delta_e(self, other: Color) -> f64 {
        crate::difference::delta_e_2000(&self.to_lab(), &other.to_lab())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse a color from `#RRGGBB` or `RRGGBB`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        // Overlong input shifts bits out of the top; it is rejected below
        let mut value: u32 = 0;
        let mut count = 0;
        for c in digits.chars() {
            let nibble = c
                .to_digit(16)
                .ok_or_else(|| ColorError::format(s, FormatIssue::NonHexDigit(c)))?;
            value = (value << 4) | nibble;
            count += 1;
        }
        if count != 6 {
            return Err(ColorError::format(s, FormatIssue::WrongLength(count)));
        }

        let [_, r, g, b] = value.to_be_bytes();
        Ok(Self::from_rgb(r, g, b))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercase_with_hash() {
        let color: Color = "#FF8000".parse().unwrap();
        assert_eq!(color.to_bytes(), [255, 128, 0]);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let lower: Color = "#ab12cd".parse().unwrap();
        let upper: Color = "#AB12CD".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.to_string(), "#AB12CD");
    }

    #[test]
    fn test_parse_without_hash_and_with_whitespace() {
        let color: Color = "  00ff7f \n".parse().unwrap();
        assert_eq!(color, Color::from_rgb(0, 255, 127));
    }

    #[test]
    fn test_parse_rejects_shorthand() {
        let err = "#F00".parse::<Color>().unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColorFormat {
                input: "#F00".to_string(),
                issue: FormatIssue::WrongLength(3),
            }
        );
    }

    #[test]
    fn test_parse_rejects_long_input() {
        let err = "#FF0000FF".parse::<Color>().unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidColorFormat {
                issue: FormatIssue::WrongLength(8),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_splits_channels() {
        let color: Color = "#0a0B0c".parse().unwrap();
        assert_eq!(color, Color::from_rgb(10, 11, 12));

        let err = "123456789ABC".parse::<Color>().unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidColorFormat {
                issue: FormatIssue::WrongLength(12),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let err = "#GG0000".parse::<Color>().unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidColorFormat {
                issue: FormatIssue::NonHexDigit('G'),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_multibyte_input() {
        // Six chars but not six bytes; must not panic on slicing
        let err = "#ÄÄÄ000".parse::<Color>().unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidColorFormat {
                issue: FormatIssue::NonHexDigit('Ä'),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = "".parse::<Color>().unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidColorFormat {
                issue: FormatIssue::WrongLength(0),
                ..
            }
        ));
        assert!("#".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_pads_channels() {
        assert_eq!(Color::from_rgb(1, 2, 3).to_string(), "#010203");
        assert_eq!(Color::BLACK.to_string(), "#000000");
        assert_eq!(Color::WHITE.to_string(), "#FFFFFF");
    }

    #[test]
    fn test_to_unit() {
        let [r, g, b] = Color::from_rgb(255, 0, 51).to_unit();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let color = Color::from_rgb(0xfe, 0x01, 0x01);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#FE0101\"");

        let back: Color = serde_json::from_str("\"#fe0101\"").unwrap();
        assert_eq!(back, color);
    }

    #[test]
    fn test_serde_rejects_invalid_string() {
        let result: Result<Color, _> = serde_json::from_str("\"#XYZ\"");
        assert!(result.is_err());
    }
}

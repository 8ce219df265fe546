//! HSL descriptors for display and hue bucketing
//!
//! HSL is not used for distances. It only feeds the coarse palette analysis
//! in [`crate::analysis`], where whole-degree hue and whole-percent
//! saturation/lightness are plenty.

use super::srgb::Color;

/// Rounded HSL triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue in whole degrees, `0..360`
    pub h: u16,
    /// Saturation in percent, `0..=100`
    pub s: u8,
    /// Lightness in percent, `0..=100`
    pub l: u8,
}

impl Hsl {
    /// True when the color has no hue at all (a pure gray).
    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.s == 0
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        let [r, g, b] = color.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
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
            (h / 6.0, s)
        };

        // Rounding can land exactly on 360
        let h = ((h * 360.0).round() as u16) % 360;
        Self {
            h,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

impl Color {
    /// Convert to rounded HSL.
    #[inline]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from(self)
    }
}

//! Coarse palette analysis
//!
//! Cheap descriptive helpers that sit next to clustering in an audit report:
//! hue families, a guess at the color scheme, luminance ordering and a size
//! label. They work on rounded HSL and WCAG luminance, not on LAB.

use std::fmt;

use serde::Serialize;

use crate::color::Color;
use crate::contrast::relative_luminance;

/// Named hue band. Bands are half-open on the upper end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HueFamily {
    /// 0°..30°
    Red,
    /// 30°..60°
    Orange,
    /// 60°..90°
    Yellow,
    /// 90°..150°
    Green,
    /// 150°..210°
    Cyan,
    /// 210°..270°
    Blue,
    /// 270°..300°
    Purple,
    /// 300°..360°
    Magenta,
    /// Zero saturation. Plain hue bucketing would file these under red
    /// (hue 0); they get their own family instead.
    Gray,
}

impl HueFamily {
    pub const ALL: [HueFamily; 9] = [
        HueFamily::Red,
        HueFamily::Orange,
        HueFamily::Yellow,
        HueFamily::Green,
        HueFamily::Cyan,
        HueFamily::Blue,
        HueFamily::Purple,
        HueFamily::Magenta,
        HueFamily::Gray,
    ];

    /// Classify a single color.
    pub fn of(color: Color) -> Self {
        let hsl = color.to_hsl();
        if hsl.is_achromatic() {
            return HueFamily::Gray;
        }
        match hsl.h {
            0..=29 => HueFamily::Red,
            30..=59 => HueFamily::Orange,
            60..=89 => HueFamily::Yellow,
            90..=149 => HueFamily::Green,
            150..=209 => HueFamily::Cyan,
            210..=269 => HueFamily::Blue,
            270..=299 => HueFamily::Purple,
            _ => HueFamily::Magenta,
        }
    }
}

/// Group colors by hue family.
///
/// Families come out in [`HueFamily::ALL`] order, empty ones are omitted, and
/// colors keep their input order within a family.
pub fn group_by_hue(colors: &[Color]) -> Vec<(HueFamily, Vec<Color>)> {
    let mut buckets: [Vec<Color>; 9] = Default::default();
    for &color in colors {
        buckets[HueFamily::of(color) as usize].push(color);
    }

    HueFamily::ALL
        .into_iter()
        .zip(buckets)
        .filter(|(_, members)| !members.is_empty())
        .collect()
}

/// Rough classification of a palette by the spread of its hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Monochromatic,
    Analogous,
    Complementary,
    Triadic,
}

/// Guess the color scheme from the range of chromatic hues.
///
/// Grays carry no hue and are ignored. A hue range up to 30° is
/// monochromatic, up to 60° analogous, within 30° of 180° complementary,
/// anything else triadic.
pub fn detect_color_scheme(colors: &[Color]) -> ColorScheme {
    if colors.len() < 2 {
        return ColorScheme::Monochromatic;
    }

    let hues: Vec<u16> = colors
        .iter()
        .map(|c| c.to_hsl())
        .filter(|hsl| !hsl.is_achromatic())
        .map(|hsl| hsl.h)
        .collect();
    let range = match (hues.iter().min(), hues.iter().max()) {
        (Some(min), Some(max)) => max - min,
        _ => return ColorScheme::Monochromatic,
    };

    if range <= 30 {
        ColorScheme::Monochromatic
    } else if range <= 60 {
        ColorScheme::Analogous
    } else if range.abs_diff(180) <= 30 {
        ColorScheme::Complementary
    } else {
        ColorScheme::Triadic
    }
}

/// Sort colors by WCAG luminance, lightest first. Stable.
pub fn sort_by_luminance(colors: &[Color]) -> Vec<Color> {
    let mut keyed: Vec<(f64, Color)> = colors
        .iter()
        .map(|&c| (relative_luminance(c), c))
        .collect();
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    keyed.into_iter().map(|(_, c)| c).collect()
}

/// Size label for a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaletteSize {
    #[serde(rename = "Empty Palette")]
    Empty,
    Monochrome,
    Limited,
    Standard,
    Extended,
}

impl PaletteSize {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => PaletteSize::Empty,
            1 => PaletteSize::Monochrome,
            2..=3 => PaletteSize::Limited,
            4..=5 => PaletteSize::Standard,
            _ => PaletteSize::Extended,
        }
    }
}

impl fmt::Display for PaletteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaletteSize::Empty => "Empty Palette",
            PaletteSize::Monochrome => "Monochrome",
            PaletteSize::Limited => "Limited",
            PaletteSize::Standard => "Standard",
            PaletteSize::Extended => "Extended",
        };
        f.write_str(label)
    }
}

/// Size label for `colors`.
pub fn palette_name(colors: &[Color]) -> PaletteSize {
    PaletteSize::from_count(colors.len())
}

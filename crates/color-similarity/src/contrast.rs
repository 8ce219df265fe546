//! WCAG 2 contrast helpers
//!
//! These use the WCAG relative-luminance definition, whose linearization
//! breakpoint (0.03928) differs slightly from the sRGB one used for LAB.
//! Keep the two separate.

use crate::color::Color;

const WCAG_BREAKPOINT: f64 = 0.03928;

/// WCAG conformance level for normal-size text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WcagLevel {
    /// Minimum contrast 4.5:1
    #[default]
    Aa,
    /// Enhanced contrast 7:1
    Aaa,
}

impl WcagLevel {
    /// Minimum contrast ratio required by this level.
    pub fn minimum_ratio(self) -> f64 {
        match self {
            WcagLevel::Aa => 4.5,
            WcagLevel::Aaa => 7.0,
        }
    }
}

#[inline]
fn channel(v: f64) -> f64 {
    if v <= WCAG_BREAKPOINT {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in `0.0..=1.0`.
pub fn relative_luminance(color: Color) -> f64 {
    let [r, g, b] = color.to_unit();
    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// Contrast ratio between two colors, `1.0..=21.0`, order-independent.
///
/// ```
/// use color_similarity::{contrast_ratio, Color};
///
/// let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// True if the pair reaches the contrast ratio `level` requires.
pub fn meets_wcag(a: Color, b: Color, level: WcagLevel) -> bool {
    contrast_ratio(a, b) >= level.minimum_ratio()
}

/// Black for light backgrounds, white for dark ones.
pub fn contrasting_text_color(background: Color) -> Color {
    if relative_luminance(background) > 0.5 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(hex: &str) -> Color {
        hex.parse().unwrap()
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
        assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_is_symmetric_and_bounded() {
        let pairs = [("#000000", "#FFFFFF"), ("#777777", "#FFFFFF"), ("#FF0000", "#00FF00")];
        for (a, b) in pairs {
            let ab = contrast_ratio(c(a), c(b));
            let ba = contrast_ratio(c(b), c(a));
            assert_eq!(ab, ba);
            assert!((1.0..=21.0 + 1e-9).contains(&ab), "{a}/{b}: {ab}");
        }
        assert_eq!(contrast_ratio(c("#123456"), c("#123456")), 1.0);
    }

    #[test]
    fn test_gray_on_white_levels() {
        // #767676 is the classic lightest gray that passes AA on white
        let ratio = contrast_ratio(c("#767676"), Color::WHITE);
        assert!(ratio > 4.5 && ratio < 4.6, "ratio = {ratio}");
        assert!(meets_wcag(c("#767676"), Color::WHITE, WcagLevel::Aa));
        assert!(!meets_wcag(c("#767676"), Color::WHITE, WcagLevel::Aaa));
        assert!(!meets_wcag(c("#777777"), Color::WHITE, WcagLevel::Aa));
    }

    #[test]
    fn test_default_level_is_aa() {
        assert_eq!(WcagLevel::default(), WcagLevel::Aa);
        assert_eq!(WcagLevel::Aaa.minimum_ratio(), 7.0);
    }

    #[test]
    fn test_contrasting_text_color() {
        assert_eq!(contrasting_text_color(Color::WHITE), Color::BLACK);
        assert_eq!(contrasting_text_color(c("#FFFF00")), Color::BLACK);
        assert_eq!(contrasting_text_color(Color::BLACK), Color::WHITE);
        assert_eq!(contrasting_text_color(c("#0000FF")), Color::WHITE);
        // Mid gray has luminance ~0.22, so it gets white text
        assert_eq!(contrasting_text_color(c("#808080")), Color::WHITE);
    }
}

//! CIE LAB color space
//!
//! LAB is derived from CIE XYZ relative to the D65 reference white. Lightness
//! runs from 0 (black) to 100 (white); `a` is the green–red axis and `b` the
//! blue–yellow axis. Chroma and hue are the polar form of `(a, b)` and are
//! precomputed because the distance metric needs both for every pair.
//!
//! Every constant below feeds the clustering result. Changing the reference
//! white, the gamma breakpoint or the matrix changes which colors merge.

use super::srgb::Color;

/// sRGB gamma breakpoint (encoded value)
const SRGB_BREAKPOINT: f64 = 0.04045;

/// D65 reference white
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// LAB nonlinearity breakpoint (≈ (6/29)³)
const LAB_EPSILON: f64 = 0.008856;
/// Slope of the linear segment below the breakpoint
const LAB_KAPPA: f64 = 7.787;

/// A color in CIE LAB with its polar descriptors.
///
/// Values are derived from a [`Color`] and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabColor {
    /// Lightness, 0.0..=100.0 for sRGB inputs
    pub l: f64,
    /// Green (negative) to red (positive)
    pub a: f64,
    /// Blue (negative) to yellow (positive)
    pub b: f64,
    /// Chroma, `sqrt(a² + b²)`
    pub c: f64,
    /// Hue angle in degrees, `0.0..360.0`
    pub h: f64,
}

impl LabColor {
    /// Build a LAB value from its Cartesian coordinates, deriving chroma and hue.
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        let c = (a * a + b * b).sqrt();
        let mut h = b.atan2(a).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        Self { l, a, b, c, h }
    }
}

/// Undo the sRGB transfer curve for one channel in `0.0..=1.0`.
#[inline]
fn linearize(v: f64) -> f64 {
    if v > SRGB_BREAKPOINT {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        LAB_KAPPA * t + 16.0 / 116.0
    }
}

impl From<Color> for LabColor {
    fn from(color: Color) -> Self {
        let [r, g, b] = color.to_unit();
        let (r, g, b) = (linearize(r), linearize(g), linearize(b));

        // sRGB -> XYZ (D65), four-digit matrix
        let x = r * 0.4124 + g * 0.3576 + b * 0.1805;
        let y = r * 0.2126 + g * 0.7152 + b * 0.0722;
        let z = r * 0.0193 + g * 0.1192 + b * 0.9505;

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        LabColor::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }
}

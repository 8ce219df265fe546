//! CIEDE2000 color difference
//!
//! This follows the CIEDE2000 structure (lightness, chroma and hue terms with
//! the `S_L`, `S_C`, `S_H` weights and the `R_C` rotation term) with one
//! deliberate deviation that the clustering results depend on:
//!
//! The hue difference `ΔH′` is the chord length between the unprimed `(a, b)`
//! points after removing the primed chroma difference along the direction of
//! `h1 − h2`, where `h1`, `h2` are the plain LAB hue angles. Textbook
//! CIEDE2000 instead recomputes `h′` from `(a′, b)` for each color and uses
//! `2·sqrt(C′1·C′2)·sin(Δh′/2)`.
//!
//! A consequence is that the metric is not symmetric. Gray pairs agree to
//! within 1e-5 and saturated colors one channel step apart to within about a
//! quarter unit, but distant saturated pairs can differ by tens of units
//! depending on argument order. Callers that care about order must pass the
//! reference color first.

use std::f64::consts::PI;

use crate::color::LabColor;

/// 25⁷, the chroma normalization constant of the G and R_C terms
const POW25_7: f64 = 6_103_515_625.0;

#[inline]
fn rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// `sqrt(C⁷ / (C⁷ + 25⁷))`
#[inline]
fn chroma_weight(c: f64) -> f64 {
    let c7 = c.powi(7);
    (c7 / (c7 + POW25_7)).sqrt()
}

/// CIEDE2000 distance from `lab1` to `lab2`.
///
/// Returns a non-negative value, exactly zero when both colors have identical
/// LAB coordinates. About 1.0 is a just-noticeable difference; black to white
/// is about 100.
///
/// # Example
///
/// ```
/// use color_similarity::{delta_e_2000, Color};
///
/// let red = "#FF0000".parse::<Color>().unwrap().to_lab();
/// let off_red = "#FE0101".parse::<Color>().unwrap().to_lab();
/// let d = delta_e_2000(&red, &off_red);
/// assert!(d > 0.0 && d < 1.0);
/// ```
pub fn delta_e_2000(lab1: &LabColor, lab2: &LabColor) -> f64 {
    let d_l = lab2.l - lab1.l;

    let l_mean = (lab1.l + lab2.l) / 2.0;
    let c_mean = (lab1.c + lab2.c) / 2.0;

    let g = (1.0 - chroma_weight(c_mean)) / 2.0;
    let a1p = lab1.a * (1.0 + g);
    let a2p = lab2.a * (1.0 + g);

    let c1p = (a1p * a1p + lab1.b * lab1.b).sqrt();
    let c2p = (a2p * a2p + lab2.b * lab2.b).sqrt();
    let d_cp = c2p - c1p;

    // Chord-length hue delta over the unprimed hues, see module docs
    let hue_delta = rad(lab1.h - lab2.h);
    let d_hp = ((lab2.a - lab1.a - d_cp * hue_delta.cos()).powi(2)
        + (lab2.b - lab1.b - d_cp * hue_delta.sin()).powi(2))
    .sqrt();

    let cp_mean = (c1p + c2p) / 2.0;
    let h_mean = if (lab1.h - lab2.h).abs() > 180.0 {
        ((lab1.h + lab2.h + 360.0) % 360.0) / 2.0
    } else {
        (lab1.h + lab2.h) / 2.0
    };

    let t = 1.0 - 0.17 * rad(h_mean - 30.0).cos() + 0.24 * rad(2.0 * h_mean).cos()
        + 0.32 * rad(3.0 * h_mean + 6.0).cos()
        - 0.20 * rad(4.0 * h_mean - 63.0).cos();

    let l_off = (l_mean - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l_off / (20.0 + l_off).sqrt();
    let s_c = 1.0 + 0.045 * cp_mean;
    let s_h = 1.0 + 0.015 * cp_mean * t;

    // The rotation term uses R_C alone; the Δθ factor is not applied
    let r_c = 2.0 * chroma_weight(cp_mean);

    let l_term = d_l / s_l;
    let c_term = d_cp / s_c;
    let h_term = d_hp / s_h;

    // Non-negative in exact arithmetic since R_C <= 2; clamp rounding noise
    (l_term * l_term + c_term * c_term + h_term * h_term + r_c * c_term * h_term)
        .max(0.0)
        .sqrt()
}

//! Color types and conversion utilities
//!
//! - [`Color`]: validated 24-bit sRGB value, the engine's only input type
//! - [`LabColor`]: CIE LAB (D65) with chroma and hue, used for distances
//! - [`Hsl`]: rounded HSL, used for coarse palette analysis
//!
//! # Example
//!
//! ```
//! use color_similarity::{Color, LabColor};
//!
//! let color: Color = "#FF0000".parse().unwrap();
//! let lab = LabColor::from(color);
//! assert!((lab.l - 53.23).abs() < 0.01);
//! ```

mod hsl;
mod lab;
mod srgb;

pub use hsl::Hsl;
pub use lab::LabColor;
pub use srgb::Color;

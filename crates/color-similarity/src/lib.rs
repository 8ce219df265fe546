//! color-similarity: perceptual color grouping for design-system audits
//!
//! This library converts sRGB colors to CIE LAB, measures their CIEDE2000
//! distance, and greedily groups a list of colors into clusters of
//! near-duplicates. Everything here is a pure function over values: no I/O,
//! no global state, safe to call from any number of threads.
//!
//! # Quick Start
//!
//! ```
//! use color_similarity::{cluster_hex, find_nearest, Color};
//!
//! let clusters = cluster_hex(&["#FF0000", "#FE0101", "#0000FF"], 5.0).unwrap();
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters[0].colors().len(), 2);
//!
//! let target: Color = "#FF0000".parse().unwrap();
//! let nearest = find_nearest(target, clusters[1].colors());
//! assert_eq!(nearest.color.unwrap().to_string(), "#0000FF");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! "#RRGGBB"  --parse-->  Color  --to_lab-->  LabColor { l, a, b, c, h }
//!                                                |
//!                                 delta_e_2000(seed, candidate)
//!                                                |
//!                                   greedy single-pass clustering
//! ```
//!
//! Parsing is the only fallible step for colors. Once a [`Color`] exists,
//! conversion and distance are total, so [`cluster_colors`] and
//! [`find_nearest`] only fail on a bad threshold. [`cluster_hex`] reports
//! the index of the first invalid string.
//!
//! # Thresholds
//!
//! CIEDE2000 values are roughly calibrated so that 1.0 is a just-noticeable
//! difference. Around 2–5 merges colors a reviewer would call "the same";
//! 30 and above merges loosely related shades.
//!
//! # Greedy Clustering
//!
//! [`cluster_colors`] makes one pass. The first unused color becomes a seed
//! and absorbs every later unused color within threshold *of the seed*.
//! This is order-dependent and not globally optimal: reordering the input can
//! regroup colors, and raising the threshold can occasionally increase the
//! number of clusters. What does hold is that every input ends up in exactly
//! one cluster and every member is within threshold of its representative.
//!
//! # Metric Asymmetry
//!
//! The distance uses a chord-length hue term over the plain LAB hue angles
//! instead of recomputed primed hues (see [`delta_e_2000`]). The result is
//! not symmetric for distant saturated pairs. Clustering always measures
//! seed → candidate, nearest-match always target → candidate.

pub mod analysis;
pub mod cluster;
pub mod color;
pub mod contrast;
pub mod difference;
pub mod error;
pub mod nearest;


pub use analysis::{
    detect_color_scheme, group_by_hue, palette_name, sort_by_luminance, ColorScheme, HueFamily,
    PaletteSize,
};
pub use cluster::{check_threshold, cluster_colors, cluster_hex, Cluster};
pub use color::{Color, Hsl, LabColor};
pub use contrast::{
    contrast_ratio, contrasting_text_color, meets_wcag, relative_luminance, WcagLevel,
};
pub use difference::delta_e_2000;
pub use error::{ColorError, FormatIssue};
pub use nearest::{find_nearest, NearestMatch};

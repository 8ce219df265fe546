//! Greedy threshold clustering
//!
//! One left-to-right pass: the first unused color seeds a cluster and absorbs
//! every later unused color within `threshold` of the seed. Absorbed colors
//! are never compared against later seeds, so the result depends on input
//! order and is not globally optimal. Distances are always measured from the
//! seed, never between members.
//!
//! Worst case is `n(n-1)/2` distance evaluations. LAB descriptors are
//! computed once per input color for the duration of the call.

use crate::color::{Color, LabColor};
use crate::difference::delta_e_2000;
use crate::error::ColorError;

/// A group of colors within threshold of their seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    representative: Color,
    colors: Vec<Color>,
}

impl Cluster {
    fn seeded(seed: Color) -> Self {
        Self {
            representative: seed,
            colors: vec![seed],
        }
    }

    /// The seed color that opened this cluster.
    #[inline]
    pub fn representative(&self) -> Color {
        self.representative
    }

    /// Members in absorption order; the representative is always first.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of members, at least 1.
    #[inline]
    pub fn count(&self) -> usize {
        self.colors.len()
    }

    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }
}

/// Validate a clustering threshold.
pub fn check_threshold(threshold: f64) -> Result<f64, ColorError> {
    if threshold.is_finite() && threshold >= 0.0 {
        Ok(threshold)
    } else {
        Err(ColorError::InvalidThreshold(threshold))
    }
}

/// Cluster `colors` greedily under a CIEDE2000 `threshold`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidThreshold`] if `threshold` is negative, NaN
/// or infinite.
///
/// # Example
///
/// ```
/// use color_similarity::{cluster_colors, Color};
///
/// let colors: Vec<Color> = ["#FF0000", "#FE0101", "#0000FF"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let clusters = cluster_colors(&colors, 5.0).unwrap();
///
/// assert_eq!(clusters.len(), 2);
/// assert_eq!(clusters[0].count(), 2);
/// assert_eq!(clusters[1].representative().to_string(), "#0000FF");
/// ```
pub fn cluster_colors(colors: &[Color], threshold: f64) -> Result<Vec<Cluster>, ColorError> {
    let threshold = check_threshold(threshold)?;
    if colors.is_empty() {
        return Ok(Vec::new());
    }

    let labs: Vec<LabColor> = colors.iter().map(|&c| c.to_lab()).collect();
    let mut used = vec![false; colors.len()];
    let mut clusters = Vec::new();

    for i in 0..colors.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        let mut cluster = Cluster::seeded(colors[i]);

        for j in (i + 1)..colors.len() {
            if used[j] {
                continue;
            }
            if delta_e_2000(&labs[i], &labs[j]) <= threshold {
                cluster.colors.push(colors[j]);
                used[j] = true;
            }
        }

        clusters.push(cluster);
    }

    Ok(clusters)
}

/// Parse every string in `colors`, then cluster.
///
/// Parsing happens up front, so nothing is clustered if any entry is invalid.
///
/// # Errors
///
/// [`ColorError::InBatch`] wrapping the first parse failure, or
/// [`ColorError::InvalidThreshold`].
pub fn cluster_hex<S: AsRef<str>>(colors: &[S], threshold: f64) -> Result<Vec<Cluster>, ColorError> {
    let parsed = parse_batch(colors)?;
    cluster_colors(&parsed, threshold)
}

/// Parse a batch of color strings, failing on the first invalid one.
fn parse_batch<S: AsRef<str>>(colors: &[S]) -> Result<Vec<Color>, ColorError> {
    colors
        .iter()
        .enumerate()
        .map(|(index, s)| {
            s.as_ref()
                .parse::<Color>()
                .map_err(|e| ColorError::in_batch(index, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn colors(hex: &[&str]) -> Vec<Color> {
        hex.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn hex_groups(clusters: &[Cluster]) -> Vec<Vec<String>> {
        clusters
            .iter()
            .map(|c| c.colors().iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(cluster_colors(&[], 30.0).unwrap().is_empty());
    }

    #[test]
    fn test_single_color() {
        let clusters = cluster_colors(&colors(&["#123456"]), 0.0).unwrap();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].count(), 1);
        assert_eq!(clusters[0].representative().to_string(), "#123456");
    }

    #[test]
    fn test_red_pair_and_blue() {
        let clusters = cluster_colors(&colors(&["#FF0000", "#FE0101", "#0000FF"]), 5.0).unwrap();
        assert_eq!(
            hex_groups(&clusters),
            vec![vec!["#FF0000", "#FE0101"], vec!["#0000FF"]]
        );
        assert_eq!(clusters[0].representative().to_string(), "#FF0000");
        assert_eq!(clusters[1].representative().to_string(), "#0000FF");
    }

    #[test]
    fn test_zero_threshold_merges_only_duplicates() {
        let input = colors(&["#ABCDEF", "#123456", "#abcdef", "#123457"]);
        let clusters = cluster_colors(&input, 0.0).unwrap();
        assert_eq!(
            hex_groups(&clusters),
            vec![vec!["#ABCDEF", "#ABCDEF"], vec!["#123456"], vec!["#123457"]]
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let input = colors(&["#808080", "#888888"]);
        let exact = input[0].delta_e(input[1]);
        assert_eq!(cluster_colors(&input, exact).unwrap().len(), 1);
        assert_eq!(cluster_colors(&input, exact - 1e-9).unwrap().len(), 2);
    }

    #[test]
    fn test_members_keep_input_order() {
        let input = colors(&["#FF0000", "#0000FF", "#FE0101", "#0000FE", "#FD0000"]);
        let clusters = cluster_colors(&input, 5.0).unwrap();
        assert_eq!(
            hex_groups(&clusters),
            vec![
                vec!["#FF0000", "#FE0101", "#FD0000"],
                vec!["#0000FF", "#0000FE"],
            ]
        );
    }

    #[test]
    fn test_invalid_thresholds() {
        let input = colors(&["#000000"]);
        for bad in [-0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = cluster_colors(&input, bad).unwrap_err();
            assert!(matches!(err, ColorError::InvalidThreshold(_)), "{bad}");
        }
        // Validated even when there is nothing to cluster
        assert!(cluster_colors(&[], -1.0).is_err());
    }

    #[test]
    fn test_cluster_hex_parses_then_clusters() {
        let clusters = cluster_hex(&["#ff0000", "fe0101", "#0000FF"], 5.0).unwrap();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].colors()[1].to_string(), "#FE0101");
    }

    #[test]
    fn test_cluster_hex_reports_index_of_bad_color() {
        let err = cluster_hex(&["#FF0000", "#00FF00", "red", "#0000FF"], 5.0).unwrap_err();
        match err {
            ColorError::InBatch { index, source } => {
                assert_eq!(index, 2);
                assert!(matches!(*source, ColorError::InvalidColorFormat { .. }));
            }
            other => panic!("Expected InBatch, got {other:?}"),
        }
    }

    #[test]
    fn test_into_colors() {
        let clusters = cluster_colors(&colors(&["#000000", "#010101"]), 5.0).unwrap();
        let members = clusters.into_iter().next().unwrap().into_colors();
        assert_eq!(members.len(), 2);
    }
}

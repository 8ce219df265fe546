//! Nearest-color search

use crate::color::Color;
use crate::difference::delta_e_2000;

/// Result of [`find_nearest`].
///
/// `color` is `None` only when there were no candidates, in which case
/// `distance` is `f64::INFINITY`. Treat that as "no match", not as a match
/// at some distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestMatch {
    pub color: Option<Color>,
    pub distance: f64,
}

impl NearestMatch {
    const NONE: NearestMatch = NearestMatch {
        color: None,
        distance: f64::INFINITY,
    };

    /// True if a candidate was found.
    #[inline]
    pub fn is_match(&self) -> bool {
        self.color.is_some()
    }

    /// The distance, or `None` when there was no candidate.
    #[inline]
    pub fn finite_distance(&self) -> Option<f64> {
        self.color.map(|_| self.distance)
    }
}

/// Find the candidate with the smallest CIEDE2000 distance from `target`.
///
/// Distances are measured as `target → candidate`. On ties the earliest
/// candidate wins.
///
/// # Example
///
/// ```
/// use color_similarity::{find_nearest, Color};
///
/// let target: Color = "#FF0000".parse().unwrap();
/// let candidates: Vec<Color> = vec!["#0000FF".parse().unwrap(), "#FE0101".parse().unwrap()];
///
/// let nearest = find_nearest(target, &candidates);
/// assert_eq!(nearest.color.unwrap().to_string(), "#FE0101");
/// assert!(nearest.distance > 0.0 && nearest.distance < 1.0);
/// ```
pub fn find_nearest(target: Color, candidates: &[Color]) -> NearestMatch {
    let target_lab = target.to_lab();

    let mut best = NearestMatch::NONE;
    for &candidate in candidates {
        let distance = delta_e_2000(&target_lab, &candidate.to_lab());
        if distance < best.distance {
            best = NearestMatch {
                color: Some(candidate),
                distance,
            };
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(hex: &[&str]) -> Vec<Color> {
        hex.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_empty_candidates() {
        let nearest = find_nearest(Color::WHITE, &[]);
        assert_eq!(nearest.color, None);
        assert!(nearest.distance.is_infinite() && nearest.distance > 0.0);
        assert!(!nearest.is_match());
        assert_eq!(nearest.finite_distance(), None);
    }

    #[test]
    fn test_picks_closest() {
        let target: Color = "#FF0000".parse().unwrap();
        let nearest = find_nearest(target, &colors(&["#0000FF", "#FE0101"]));
        assert_eq!(nearest.color.unwrap().to_string(), "#FE0101");
        assert!((nearest.distance - 0.22689).abs() < 1e-4);
        assert!(nearest.is_match());
    }

    #[test]
    fn test_exact_match_has_zero_distance() {
        let target: Color = "#3366CC".parse().unwrap();
        let nearest = find_nearest(target, &colors(&["#000000", "#3366CC", "#FFFFFF"]));
        assert_eq!(nearest.color, Some(target));
        assert_eq!(nearest.distance, 0.0);
        assert_eq!(nearest.finite_distance(), Some(0.0));
    }

    #[test]
    fn test_first_of_equal_candidates_wins() {
        let target: Color = "#808080".parse().unwrap();
        let candidates = colors(&["#000000", "#7F7F7F", "#7f7f7f"]);
        let nearest = find_nearest(target, &candidates);
        // Duplicates tie; strict comparison keeps the first
        assert_eq!(nearest.color, Some(candidates[1]));
    }

    #[test]
    fn test_single_candidate_always_matches() {
        let nearest = find_nearest(Color::BLACK, &[Color::WHITE]);
        assert_eq!(nearest.color, Some(Color::WHITE));
        assert!((nearest.distance - 100.0).abs() < 1e-3);
    }
}

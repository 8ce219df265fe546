//! Request and report types shared by the HTTP API and the CLI.

use color_similarity::{Cluster, Color, ColorScheme, HueFamily, LabColor};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for clustering
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ClusterRequest {
    /// Colors as `#RRGGBB`, `RRGGBB`, `rgb()` or `rgba()`
    pub colors: Vec<String>,
    /// CIEDE2000 merge threshold (0 to 100); configured default when omitted
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// One group of perceptually similar colors
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ClusterView {
    /// Seed color of the cluster
    pub representative: String,
    /// Members in absorption order, representative first
    pub colors: Vec<String>,
    pub count: usize,
}

impl From<&Cluster> for ClusterView {
    fn from(cluster: &Cluster) -> Self {
        Self {
            representative: cluster.representative().to_string(),
            colors: cluster.colors().iter().map(Color::to_string).collect(),
            count: cluster.count(),
        }
    }
}

/// An input entry dropped under the `skip` policy
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkippedColor {
    /// Position in the request
    pub index: usize,
    /// The entry as received
    pub input: String,
    pub error: String,
}

/// Clustering result
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClusterReport {
    pub success: bool,
    /// Threshold actually applied
    pub threshold: f64,
    /// Number of colors that took part in clustering
    pub total_colors: usize,
    pub clusters: Vec<ClusterView>,
    /// Invalid entries dropped under the `skip` policy
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedColor>,
}

/// Request body for nearest-match lookup
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NearestRequest {
    pub target: String,
    #[serde(default)]
    pub candidates: Vec<String>,
}

/// Closest candidate to a target color
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NearestReport {
    pub success: bool,
    /// Closest candidate, `null` when no candidates were given
    pub color: Option<String>,
    /// CIEDE2000 distance from target to `color`, `null` when no candidates
    pub distance: Option<f64>,
}

/// CIE LAB descriptor of a single color
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LabReport {
    pub success: bool,
    pub color: String,
    /// Lightness, 0 to 100
    pub l: f64,
    pub a: f64,
    pub b: f64,
    /// Chroma
    pub c: f64,
    /// Hue angle in degrees, 0 to 360
    pub h: f64,
}

impl LabReport {
    pub fn new(color: Color, lab: LabColor) -> Self {
        Self {
            success: true,
            color: color.to_string(),
            l: lab.l,
            a: lab.a,
            b: lab.b,
            c: lab.c,
            h: lab.h,
        }
    }
}

/// Request body for a contrast check
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContrastRequest {
    pub foreground: String,
    pub background: String,
}

/// WCAG contrast between two colors
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContrastReport {
    pub success: bool,
    pub foreground: String,
    pub background: String,
    /// Contrast ratio, 1 to 21
    pub ratio: f64,
    /// Meets WCAG AA (4.5:1)
    pub aa: bool,
    /// Meets WCAG AAA (7:1)
    pub aaa: bool,
    /// Black or white, whichever reads better on the background
    pub text_color: String,
}

/// Request body for palette analysis
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    pub colors: Vec<String>,
}

/// Colors sharing a hue family
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HueGroupView {
    #[schema(value_type = String, example = "red")]
    pub family: HueFamily,
    pub colors: Vec<String>,
}

/// Descriptive palette summary
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalyzeReport {
    pub success: bool,
    pub total_colors: usize,
    /// Size label such as "Limited" or "Extended"
    pub palette_name: String,
    #[schema(value_type = String, example = "analogous")]
    pub scheme: ColorScheme,
    pub hue_groups: Vec<HueGroupView>,
    /// Colors ordered lightest first
    pub by_luminance: Vec<String>,
    /// Invalid entries dropped under the `skip` policy
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedColor>,
}

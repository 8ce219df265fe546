//! Color audit service
//!
//! Applies request policy (size limits, threshold bounds, invalid-color
//! handling, cluster ordering) around the color-similarity engine and turns
//! its results into reports.

use color_similarity::{
    cluster_colors, contrast_ratio, contrasting_text_color, detect_color_scheme, find_nearest,
    group_by_hue, meets_wcag, palette_name, sort_by_luminance, Cluster, Color, WcagLevel,
};

use crate::error::ApiError;
use crate::models::{
    AnalyzeReport, AnalyzeRequest, ClusterOrder, ClusterReport, ClusterRequest, ClusterView,
    ClusteringConfig, ContrastReport, ContrastRequest, HueGroupView, InvalidColorPolicy,
    LabReport, NearestReport, NearestRequest, SkippedColor, MAX_THRESHOLD,
};
use crate::services::normalize::{normalize_all, normalize_color, normalize_lenient};

/// Clustering result before it is flattened into a report
#[derive(Debug, Clone)]
pub struct ClusteredPalette {
    pub threshold: f64,
    /// Valid input colors in request order
    pub colors: Vec<Color>,
    /// Clusters in the configured order
    pub clusters: Vec<Cluster>,
    pub skipped: Vec<SkippedColor>,
}

impl ClusteredPalette {
    pub fn to_report(&self) -> ClusterReport {
        ClusterReport {
            success: true,
            threshold: self.threshold,
            total_colors: self.colors.len(),
            clusters: self.clusters.iter().map(ClusterView::from).collect(),
            skipped: self.skipped.clone(),
        }
    }
}

/// Stateless audit operations configured once at startup
pub struct AuditService {
    config: ClusteringConfig,
}

impl AuditService {
    pub fn new(config: ClusteringConfig) -> Self {
        Self { config }
    }

    /// Resolve a requested threshold against the configured default.
    pub fn resolve_threshold(&self, requested: Option<f64>) -> Result<f64, ApiError> {
        match requested {
            None => Ok(self.config.default_threshold),
            Some(t) if t.is_finite() && (0.0..=MAX_THRESHOLD).contains(&t) => Ok(t),
            Some(t) => Err(ApiError::InvalidRequest(format!(
                "threshold {t} must be within 0..={MAX_THRESHOLD}"
            ))),
        }
    }

    fn check_size(&self, count: usize) -> Result<(), ApiError> {
        if count > self.config.max_colors {
            return Err(ApiError::TooManyColors {
                count,
                max: self.config.max_colors,
            });
        }
        Ok(())
    }

    /// Parse a batch according to the invalid-color policy.
    fn parse_batch(&self, inputs: &[String]) -> Result<(Vec<Color>, Vec<SkippedColor>), ApiError> {
        self.check_size(inputs.len())?;

        match self.config.invalid_colors {
            InvalidColorPolicy::Reject => Ok((normalize_all(inputs)?, Vec::new())),
            InvalidColorPolicy::Skip => {
                let (colors, rejected) = normalize_lenient(inputs);
                let skipped = rejected
                    .into_iter()
                    .map(|(index, error)| {
                        tracing::warn!(index, input = %inputs[index], %error, "Skipping invalid color");
                        SkippedColor {
                            index,
                            input: inputs[index].clone(),
                            error: error.to_string(),
                        }
                    })
                    .collect();
                Ok((colors, skipped))
            }
        }
    }

    /// Cluster a batch of color strings.
    pub fn cluster_palette(
        &self,
        inputs: &[String],
        threshold: Option<f64>,
    ) -> Result<ClusteredPalette, ApiError> {
        let threshold = self.resolve_threshold(threshold)?;
        let (colors, skipped) = self.parse_batch(inputs)?;

        let mut clusters = cluster_colors(&colors, threshold)?;
        if self.config.order == ClusterOrder::Size {
            // stable: equal sizes keep seed order
            clusters.sort_by(|a, b| b.count().cmp(&a.count()));
        }

        tracing::info!(
            colors = colors.len(),
            skipped = skipped.len(),
            threshold,
            clusters = clusters.len(),
            "Clustered colors"
        );

        Ok(ClusteredPalette {
            threshold,
            colors,
            clusters,
            skipped,
        })
    }

    pub fn cluster(&self, request: &ClusterRequest) -> Result<ClusterReport, ApiError> {
        self.cluster_palette(&request.colors, request.threshold)
            .map(|palette| palette.to_report())
    }

    /// Find the candidate closest to the target. Candidates are always
    /// parsed strictly.
    pub fn nearest(&self, request: &NearestRequest) -> Result<NearestReport, ApiError> {
        self.check_size(request.candidates.len())?;
        let target = normalize_color(&request.target)?;
        let candidates = normalize_all(&request.candidates)?;

        let nearest = find_nearest(target, &candidates);
        tracing::debug!(
            %target,
            candidates = candidates.len(),
            matched = nearest.is_match(),
            "Nearest color lookup"
        );

        Ok(NearestReport {
            success: true,
            color: nearest.color.map(|c| c.to_string()),
            distance: nearest.finite_distance(),
        })
    }

    pub fn lab(&self, input: &str) -> Result<LabReport, ApiError> {
        let color = normalize_color(input)?;
        Ok(LabReport::new(color, color.to_lab()))
    }

    pub fn contrast(&self, request: &ContrastRequest) -> Result<ContrastReport, ApiError> {
        let foreground = normalize_color(&request.foreground)?;
        let background = normalize_color(&request.background)?;

        Ok(ContrastReport {
            success: true,
            foreground: foreground.to_string(),
            background: background.to_string(),
            ratio: contrast_ratio(foreground, background),
            aa: meets_wcag(foreground, background, WcagLevel::Aa),
            aaa: meets_wcag(foreground, background, WcagLevel::Aaa),
            text_color: contrasting_text_color(background).to_string(),
        })
    }

    pub fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeReport, ApiError> {
        let (colors, skipped) = self.parse_batch(&request.colors)?;

        let hue_groups = group_by_hue(&colors)
            .into_iter()
            .map(|(family, members)| HueGroupView {
                family,
                colors: members.iter().map(Color::to_string).collect(),
            })
            .collect();

        tracing::debug!(colors = colors.len(), skipped = skipped.len(), "Analyzed palette");

        Ok(AnalyzeReport {
            success: true,
            total_colors: colors.len(),
            palette_name: palette_name(&colors).to_string(),
            scheme: detect_color_scheme(&colors),
            hue_groups,
            by_luminance: sort_by_luminance(&colors)
                .iter()
                .map(Color::to_string)
                .collect(),
            skipped,
        })
    }
}

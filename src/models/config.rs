use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Upper bound accepted for thresholds at the API/CLI boundary
pub const MAX_THRESHOLD: f64 = 100.0;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Clustering defaults and request limits
    #[serde(default)]
    pub clustering: ClusteringConfig,

    /// Export formatting
    #[serde(default)]
    pub export: ExportConfig,
}

/// What to do with colors that fail to parse in a batch
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvalidColorPolicy {
    /// Fail the whole request
    #[default]
    Reject,
    /// Drop the color, log it, and report it back
    Skip,
}

/// Ordering of clusters in reports
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClusterOrder {
    /// Largest cluster first; ties keep seed order
    #[default]
    Size,
    /// Seed order as produced by the engine
    Input,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClusteringConfig {
    /// Threshold used when a request doesn't carry one
    #[serde(default = "default_threshold")]
    pub default_threshold: f64,

    /// Maximum number of colors per request
    #[serde(default = "default_max_colors")]
    pub max_colors: usize,

    #[serde(default)]
    pub invalid_colors: InvalidColorPolicy,

    #[serde(default)]
    pub order: ClusterOrder,
}

fn default_threshold() -> f64 {
    30.0
}

fn default_max_colors() -> usize {
    5000
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            default_threshold: default_threshold(),
            max_colors: default_max_colors(),
            invalid_colors: InvalidColorPolicy::default(),
            order: ClusterOrder::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Prefix for generated CSS custom properties
    #[serde(default = "default_css_prefix")]
    pub css_prefix: String,
}

fn default_css_prefix() -> String {
    "color".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            css_prefix: default_css_prefix(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config.sanitized())
    }

    /// Load configuration from a file, falling back to defaults on any error
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file configured, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        default_threshold = config.clustering.default_threshold,
                        max_colors = config.clustering.max_colors,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from the file named by `CONFIG_FILE`, if set
    pub fn load_from_env() -> Self {
        let path = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
        Self::load(path.as_deref())
    }

    /// Replace out-of-range values with their defaults
    fn sanitized(mut self) -> Self {
        let threshold = self.clustering.default_threshold;
        if !(threshold.is_finite() && (0.0..=MAX_THRESHOLD).contains(&threshold)) {
            tracing::warn!(
                threshold,
                "default_threshold out of range 0..=100, using default"
            );
            self.clustering.default_threshold = default_threshold();
        }
        if self.clustering.max_colors == 0 {
            tracing::warn!("max_colors must be positive, using default");
            self.clustering.max_colors = default_max_colors();
        }
        self
    }
}

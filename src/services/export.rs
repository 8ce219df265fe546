//! Palette export as JSON or CSS custom properties.

use chrono::{DateTime, Utc};
use color_similarity::Color;
use serde::Serialize;

use crate::models::ClusterView;
use crate::services::audit::ClusteredPalette;

#[derive(Debug, Serialize)]
struct ExportMetadata {
    exported: DateTime<Utc>,
    total_colors: usize,
    cluster_count: usize,
}

#[derive(Debug, Serialize)]
struct PaletteExport<'a> {
    metadata: ExportMetadata,
    colors: &'a [Color],
    clusters: Vec<ClusterView>,
}

/// Pretty-printed JSON document with export metadata, the input colors and
/// the clusters.
pub fn export_json(
    palette: &ClusteredPalette,
    exported: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    let document = PaletteExport {
        metadata: ExportMetadata {
            exported,
            total_colors: palette.colors.len(),
            cluster_count: palette.clusters.len(),
        },
        colors: &palette.colors,
        clusters: palette.clusters.iter().map(ClusterView::from).collect(),
    };
    serde_json::to_string_pretty(&document)
}

/// `:root` block declaring `--{prefix}-{index}` for every color.
pub fn export_css(colors: &[Color], prefix: &str) -> String {
    let mut css = String::from(":root {\n");
    for (index, color) in colors.iter().enumerate() {
        css.push_str(&format!("  --{prefix}-{index}: {color};\n"));
    }
    css.push_str("}\n");
    css
}

pub mod config;
pub mod report;

pub use config::{
    AppConfig, ClusterOrder, ClusteringConfig, ExportConfig, InvalidColorPolicy, MAX_THRESHOLD,
};
pub use report::{
    AnalyzeReport, AnalyzeRequest, ClusterReport, ClusterRequest, ClusterView, ContrastReport,
    ContrastRequest, HueGroupView, LabReport, NearestReport, NearestRequest, SkippedColor,
};

pub mod audit;
pub mod export;
pub mod normalize;

pub use audit::{AuditService, ClusteredPalette};
pub use export::{export_css, export_json};
pub use normalize::{normalize_all, normalize_color, normalize_lenient};

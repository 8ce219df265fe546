pub mod cluster;
pub mod inspect;
pub mod nearest;

pub use cluster::{handle_cluster, __path_handle_cluster};
pub use inspect::{handle_analyze, handle_contrast, handle_lab};
pub use inspect::{__path_handle_analyze, __path_handle_contrast, __path_handle_lab};
pub use nearest::{handle_nearest, __path_handle_nearest};

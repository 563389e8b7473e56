//! Dashboard consumers of ranked keywords
//!
//! This module shapes extraction output for rendering:
//! - treemap: Relative share and size tier per keyword
//! - heatmap: Per-sector keyword intensities on a shared scale

pub mod heatmap;
pub mod treemap;

pub use heatmap::{sector_heatmap, HeatmapCell, SectorHeatmap, SectorRow};
pub use treemap::{bucket_treemap, TreemapTile, TreemapTier};

//! Pipeline configuration

use crate::composite::{DrawOrder, SEGMENT_ALPHA};
use crate::overlay::{BoxStyle, OverlayStyle};
use serde::{Deserialize, Serialize};

/// Mask generation to edges, segments and WKT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkupConfig {
    pub edges_width: u32,
    pub draw_order: DrawOrder,
    pub segment_alpha: f32,
    /// Stems matching these are outputs of earlier runs, not inputs
    pub filename_exceptions: Vec<String>,
    /// Seed for segment colors; `None` draws from entropy
    pub seed: Option<u64>,
    /// Skip images whose edges, segments and WKT all exist
    pub skip_existing: bool,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            edges_width: 2,
            draw_order: DrawOrder::AreaDescending,
            segment_alpha: SEGMENT_ALPHA,
            filename_exceptions: ["*_edges", "*_heat", "*_segms", "*_tile"]
                .into_iter()
                .map(String::from)
                .collect(),
            seed: None,
            skip_existing: true,
        }
    }
}

impl MarkupConfig {
    pub fn with_edges_width(edges_width: u32) -> Self {
        Self {
            edges_width,
            ..Default::default()
        }
    }
}

/// Box-prompted prediction scored against a reference polygon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocateConfig {
    pub overlay: OverlayStyle,
    pub bbox_style: BoxStyle,
    pub filename_exceptions: Vec<String>,
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self {
            overlay: OverlayStyle::default(),
            bbox_style: BoxStyle::default(),
            filename_exceptions: vec!["*_pred_*".to_string()],
        }
    }
}

//! Maskvec Computer Vision Library
//!
//! Raster-to-vector geometry for segmentation masks: contour extraction,
//! polygon construction, compositing, IoU evaluation and overlay rendering,
//! plus the per-image pipelines built on top of them.

pub mod composite;
pub mod contour;
pub mod evaluation;
pub mod io;
pub mod overlay;
pub mod pipeline;
pub mod polygon;
pub mod source;
pub mod utils;

// Re-export commonly used types
pub use composite::{ColorSource, DrawOrder, draw_edges, draw_segments};
pub use contour::{largest_contour, outer_contours};
pub use evaluation::{CandidateSelection, LayerScore, LayerScorer, polygon_iou, select_best};
pub use overlay::{BoxStyle, OverlayStyle, blend_mask, draw_box_mut};
pub use pipeline::{LocateConfig, LocatePipeline, MarkupConfig, MarkupPipeline};
pub use polygon::{mask_to_polygon, to_polygon};
pub use source::{MaskDirectory, Prompt, SourceImage};

pub use maskvec_core::{BoundingBox, Contour, GeometryError, Mask, Point};

// Error handling
pub type Result<T> = anyhow::Result<T>;

/// Capability interfaces standing in for the segmentation model
pub mod traits {
    use super::*;

    /// Whole-image segmentation: every region the model can find.
    pub trait MaskGenerator {
        fn generate(&mut self, image: &SourceImage) -> Result<Vec<Mask>>;
    }

    /// Prompted segmentation: a handful of candidate masks for one object.
    pub trait MaskPredictor {
        fn predict(&mut self, image: &SourceImage, prompt: &Prompt) -> Result<Vec<Mask>>;
    }
}

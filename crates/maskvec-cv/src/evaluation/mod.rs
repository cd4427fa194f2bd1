//! Overlap scoring of predicted geometry against reference geometry

pub mod iou;
pub mod layer;
pub mod selector;

pub use iou::polygon_iou;
pub use layer::{LayerScore, LayerScorer};
pub use selector::{CandidateSelection, select_best};

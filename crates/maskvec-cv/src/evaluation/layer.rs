//! Dataset-level scoring of a predicted polygon layer

use super::iou::polygon_iou;
use geo::{BoundingRect, Polygon};
use maskvec_core::BoundingBox;
use serde::{Deserialize, Serialize};

/// Mean best IoU of a predicted layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerScore {
    pub objects: usize,
    pub mean_iou: f64,
}

/// Matches predicted polygons against a fixed set of reference polygons.
///
/// References are prefiltered by bounding box before the exact overlap is
/// computed.
pub struct LayerScorer {
    references: Vec<(BoundingBox, Polygon<f64>)>,
}

impl LayerScorer {
    pub fn new(references: Vec<Polygon<f64>>) -> Self {
        let references = references
            .into_iter()
            .filter_map(|polygon| envelope(&polygon).map(|bbox| (bbox, polygon)))
            .collect();
        Self { references }
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Best IoU of one predicted polygon over all references it may touch
    pub fn best_iou(&self, predicted: &Polygon<f64>) -> f64 {
        let Some(bbox) = envelope(predicted) else {
            return 0.0;
        };

        self.references
            .iter()
            .filter(|(ref_bbox, _)| ref_bbox.intersects(&bbox))
            .map(|(_, reference)| polygon_iou(predicted, reference))
            .fold(0.0, f64::max)
    }

    /// Average of the per-object best IoU; 0 for an empty layer
    pub fn score(&self, predicted: &[Polygon<f64>]) -> LayerScore {
        let total: f64 = predicted.iter().map(|p| self.best_iou(p)).sum();
        let mean_iou = if predicted.is_empty() {
            0.0
        } else {
            total / predicted.len() as f64
        };

        LayerScore {
            objects: predicted.len(),
            mean_iou,
        }
    }
}

fn envelope(polygon: &Polygon<f64>) -> Option<BoundingBox> {
    polygon
        .bounding_rect()
        .map(|rect| BoundingBox::from_corners(rect.min().x_y(), rect.max().x_y()))
}

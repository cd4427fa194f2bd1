use super::iou::polygon_iou;
use crate::polygon::mask_to_polygon;
use geo::Polygon;
use maskvec_core::Mask;
use serde::Serialize;

/// Outcome of scoring several candidate masks for one object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateSelection {
    /// Highest IoU seen, 0 when nothing overlapped
    pub max_iou: f64,
    /// Index of the first candidate reaching `max_iou`
    pub best: Option<usize>,
    /// Per-candidate IoU in input order
    pub scores: Vec<f64>,
}

impl CandidateSelection {
    pub fn best_mask<'a>(&self, candidates: &'a [Mask]) -> Option<&'a Mask> {
        self.best.and_then(|i| candidates.get(i))
    }
}

/// Score every candidate against the reference and keep the best.
///
/// Only a strictly greater score replaces the current best, so ties keep
/// the earliest candidate. Candidates without geometry score 0 and the
/// remaining ones are still evaluated.
pub fn select_best(candidates: &[Mask], reference: &Polygon<f64>) -> CandidateSelection {
    let mut selection = CandidateSelection {
        max_iou: 0.0,
        best: None,
        scores: Vec::with_capacity(candidates.len()),
    };

    for (i, candidate) in candidates.iter().enumerate() {
        let score = match mask_to_polygon(candidate) {
            Ok(polygon) => polygon_iou(&polygon, reference),
            Err(e) => {
                log::debug!("Candidate {} has no geometry: {}", i, e);
                0.0
            }
        };
        log::debug!("Candidate {} IoU = {:.4}", i, score);

        selection.scores.push(score);
        if score > selection.max_iou {
            selection.max_iou = score;
            selection.best = Some(i);
        }
    }

    selection
}

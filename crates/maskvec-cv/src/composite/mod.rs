//! Merging a batch of masks into one visualization raster

pub mod color;
pub mod edges;
pub mod segments;

pub use color::ColorSource;
pub use edges::draw_edges;
pub use segments::{SEGMENT_ALPHA, draw_segments};

use maskvec_core::Mask;
use serde::{Deserialize, Serialize};

/// Order in which masks are painted; later masks win overlapping pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOrder {
    /// Largest area first, so small regions stay visible on top
    #[default]
    AreaDescending,
    /// Smallest area first
    AreaAscending,
    /// Iteration order of the input
    AsGiven,
}

impl DrawOrder {
    /// Masks in painting order. Sorting is stable: equal areas keep their
    /// input order.
    pub fn arrange<'a>(&self, masks: &'a [Mask]) -> Vec<&'a Mask> {
        let mut ordered: Vec<&Mask> = masks.iter().collect();
        match self {
            DrawOrder::AreaDescending => ordered.sort_by(|a, b| b.area().cmp(&a.area())),
            DrawOrder::AreaAscending => ordered.sort_by_key(|m| m.area()),
            DrawOrder::AsGiven => {}
        }
        ordered
    }
}

/// Canvas size for a batch: the first mask by iteration, not by area.
fn canvas_size(masks: &[Mask]) -> Option<(u32, u32)> {
    masks.first().map(Mask::dimensions)
}

fn fits_canvas(mask: &Mask, canvas: (u32, u32)) -> bool {
    if mask.dimensions() == canvas {
        return true;
    }
    log::warn!(
        "Skipping mask of size {:?} on a {:?} canvas",
        mask.dimensions(),
        canvas
    );
    false
}

//! Dominant outer contour of a mask

use super::chain::compress_chain;
use image::{GrayImage, Luma};
use imageproc::contours::{BorderType, find_contours};
use maskvec_core::mask::BINARY_THRESHOLD;
use maskvec_core::{Contour, GeometryError, Point};

/// All outermost boundaries, in tracing order.
///
/// The raster is thresholded at the midpoint of the 0-255 range first.
/// Holes, and islands sitting inside holes, are left out. Points are
/// chain-compressed.
pub fn outer_contours(raster: &GrayImage) -> Vec<Contour> {
    // one pixel of background all round so regions touching the edge close
    let padded = GrayImage::from_fn(raster.width() + 2, raster.height() + 2, |x, y| {
        let inside = x > 0 && y > 0 && x <= raster.width() && y <= raster.height();
        if inside && raster.get_pixel(x - 1, y - 1).0[0] > BINARY_THRESHOLD {
            Luma([255])
        } else {
            Luma([0])
        }
    });

    find_contours::<i32>(&padded)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .map(|c| {
            let points: Vec<Point> = c
                .points
                .iter()
                .map(|p| Point::new(p.x - 1, p.y - 1))
                .collect();
            Contour::new(compress_chain(&points))
        })
        .collect()
}

/// The outer contour enclosing the largest area.
///
/// Ties keep the first contour found. Fails with
/// [`GeometryError::EmptyMask`] when the raster has no foreground.
pub fn largest_contour(raster: &GrayImage) -> Result<Contour, GeometryError> {
    let mut best: Option<(f64, Contour)> = None;

    for contour in outer_contours(raster) {
        let area = contour.area();
        let replace = match &best {
            Some((best_area, _)) => area > *best_area,
            None => true,
        };
        if replace {
            best = Some((area, contour));
        }
    }

    best.map(|(_, contour)| contour).ok_or(GeometryError::EmptyMask)
}

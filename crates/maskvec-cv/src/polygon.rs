//! Contour to vector polygon conversion

use crate::contour::largest_contour;
use geo::{Coord, LineString, Polygon};
use maskvec_core::{Contour, GeometryError, Mask};

/// Build a single-ring polygon from a contour.
///
/// Points keep their order and integer values. The ring is closed
/// explicitly and no interior rings are ever added, so a mask with holes is
/// represented by its filled outer silhouette.
pub fn to_polygon(contour: &Contour) -> Polygon<f64> {
    let mut coords: Vec<Coord<f64>> = contour
        .points()
        .iter()
        .map(|p| Coord {
            x: p.x as f64,
            y: p.y as f64,
        })
        .collect();

    if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
        if first != last {
            coords.push(first);
        }
    }

    Polygon::new(LineString::new(coords), vec![])
}

/// Dominant contour of the mask as a polygon.
pub fn mask_to_polygon(mask: &Mask) -> Result<Polygon<f64>, GeometryError> {
    largest_contour(mask.segmentation()).map(|contour| to_polygon(&contour))
}

use geo::{Area, BooleanOps, Polygon};

/// Intersection over union of two polygons, in `[0, 1]`.
///
/// A polygon without area overlaps nothing, so any pair involving one
/// scores 0; this also covers the 0/0 case of two empty polygons.
pub fn polygon_iou(a: &Polygon<f64>, b: &Polygon<f64>) -> f64 {
    let area_a = a.unsigned_area();
    let area_b = b.unsigned_area();
    if area_a <= 0.0 || area_b <= 0.0 {
        return 0.0;
    }

    let intersection = a.intersection(b).unsigned_area();
    let union = area_a + area_b - intersection;
    if union <= 0.0 {
        return 0.0;
    }

    (intersection / union).clamp(0.0, 1.0)
}

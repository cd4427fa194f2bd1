use super::{DrawOrder, canvas_size, fits_canvas};
use crate::contour::outer_contours;
use image::{GrayImage, Luma};
use imageproc::drawing::{BresenhamLineIter, draw_filled_rect_mut};
use imageproc::rect::Rect;
use maskvec_core::{Contour, Mask};

const EDGE: Luma<u8> = Luma([255]);

/// Stroke the outer contours of every mask onto one single-channel canvas.
///
/// Returns `None` for an empty batch. Empty masks contribute nothing.
pub fn draw_edges(masks: &[Mask], edges_width: u32, order: DrawOrder) -> Option<GrayImage> {
    let (width, height) = canvas_size(masks)?;
    let mut canvas = GrayImage::new(width, height);

    for mask in order.arrange(masks) {
        if !fits_canvas(mask, (width, height)) || mask.is_empty() {
            continue;
        }
        for contour in outer_contours(mask.segmentation()) {
            stroke_closed(&mut canvas, &contour, edges_width);
        }
    }

    Some(canvas)
}

/// Draw the contour as a closed polyline of the given thickness.
///
/// Every polyline pixel is widened to a `thickness` square, so a straight
/// edge comes out exactly `thickness` pixels across. For even widths the
/// extra pixel falls on the right and bottom side.
pub fn stroke_closed(canvas: &mut GrayImage, contour: &Contour, thickness: u32) {
    let thickness = thickness.max(1);
    let points = contour.points();

    match points {
        [] => {}
        [only] => stamp(canvas, only.x, only.y, thickness),
        _ => {
            for (i, start) in points.iter().enumerate() {
                let end = points[(i + 1) % points.len()];
                let line = BresenhamLineIter::new(
                    (start.x as f32, start.y as f32),
                    (end.x as f32, end.y as f32),
                );
                for (x, y) in line {
                    stamp(canvas, x, y, thickness);
                }
            }
        }
    }
}

fn stamp(canvas: &mut GrayImage, x: i32, y: i32, thickness: u32) {
    if thickness == 1 {
        if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
            canvas.put_pixel(x as u32, y as u32, EDGE);
        }
        return;
    }
    let back = ((thickness - 1) / 2) as i32;
    draw_filled_rect_mut(canvas, Rect::at(x - back, y - back).of_size(thickness, thickness), EDGE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch() {
        assert!(draw_edges(&[], 2, DrawOrder::default()).is_none());
    }

    #[test]
    fn test_square_outline() {
        let masks = vec![Mask::from_rect(30, 30, 5, 5, 10, 10)];
        let edges = draw_edges(&masks, 1, DrawOrder::default()).unwrap();

        assert_eq!(edges.dimensions(), (30, 30));
        assert_eq!(edges.get_pixel(5, 5).0[0], 255);
        assert_eq!(edges.get_pixel(14, 9).0[0], 255);
        assert_eq!(edges.get_pixel(9, 14).0[0], 255);
        // interior and exterior untouched
        assert_eq!(edges.get_pixel(9, 9).0[0], 0);
        assert_eq!(edges.get_pixel(20, 20).0[0], 0);

        let lit = edges.pixels().filter(|p| p.0[0] == 255).count();
        assert_eq!(lit, 36);
    }

    #[test]
    fn test_thick_outline_spreads() {
        let masks = vec![Mask::from_rect(30, 30, 5, 5, 10, 10)];
        let thin = draw_edges(&masks, 1, DrawOrder::default()).unwrap();
        let thick = draw_edges(&masks, 3, DrawOrder::default()).unwrap();

        assert_eq!(thick.get_pixel(4, 9).0[0], 255);
        assert_eq!(thick.get_pixel(6, 9).0[0], 255);
        let count = |img: &GrayImage| img.pixels().filter(|p| p.0[0] == 255).count();
        assert!(count(&thick) > count(&thin));
    }

    #[test]
    fn test_stroke_spans_requested_width() {
        let masks = vec![Mask::from_rect(40, 40, 5, 5, 30, 30)];
        for width in 1..=5u32 {
            let edges = draw_edges(&masks, width, DrawOrder::default()).unwrap();
            // run across the left edge, away from the corners
            let lit = (0..20).filter(|&x| edges.get_pixel(x, 25).0[0] == 255).count();
            assert_eq!(lit, width as usize, "edges_width {}", width);
        }

        let two = draw_edges(&masks, 2, DrawOrder::default()).unwrap();
        let three = draw_edges(&masks, 3, DrawOrder::default()).unwrap();
        assert_ne!(two, three);
    }

    #[test]
    fn test_edges_accumulate_and_repeat() {
        let masks = vec![
            Mask::from_rect(40, 40, 0, 0, 30, 30),
            Mask::from_bools(40, 40, &[false; 1600]).unwrap(),
            Mask::from_rect(40, 40, 10, 10, 5, 5),
        ];
        let first = draw_edges(&masks, 2, DrawOrder::default()).unwrap();
        let second = draw_edges(&masks, 2, DrawOrder::default()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.get_pixel(10, 12).0[0], 255);
        assert_eq!(first.get_pixel(29, 20).0[0], 255);
    }

    #[test]
    fn test_mismatched_mask_skipped() {
        let masks = vec![Mask::from_rect(20, 20, 2, 2, 4, 4), Mask::from_rect(50, 50, 30, 30, 10, 10)];
        let edges = draw_edges(&masks, 1, DrawOrder::AsGiven).unwrap();

        assert_eq!(edges.dimensions(), (20, 20));
        assert_eq!(edges.pixels().filter(|p| p.0[0] == 255).count(), 12);
    }
}

//! Inspection overlays: translucent mask fill and box outline

use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use maskvec_core::{BoundingBox, GeometryError};
use serde::{Deserialize, Serialize};

/// How the chosen mask is blended over the source image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    pub alpha: f32,
    pub color: [u8; 3],
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            color: [255, 0, 0],
        }
    }
}

/// Outline of the prompt box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxStyle {
    pub color: [u8; 3],
    pub thickness: u32,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            color: [255, 255, 0],
            thickness: 2,
        }
    }
}

/// Blend `color` into every masked pixel by factor `alpha`.
///
/// Pixels where the mask is 0 are copied unchanged. The input image is not
/// touched; a new buffer is returned.
pub fn blend_mask(
    image: &RgbImage,
    mask: &GrayImage,
    alpha: f32,
    color: [u8; 3],
) -> Result<RgbImage, GeometryError> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(GeometryError::InvalidAlpha(alpha));
    }
    if image.dimensions() != mask.dimensions() {
        return Err(GeometryError::DimensionMismatch {
            expected: image.dimensions(),
            actual: mask.dimensions(),
        });
    }

    let mut output = image.clone();
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        if mask.get_pixel(x, y).0[0] == 0 {
            continue;
        }
        for (channel, target) in pixel.0.iter_mut().zip(color) {
            let mixed = *channel as f32 * (1.0 - alpha) + target as f32 * alpha;
            *channel = mixed.clamp(0.0, 255.0) as u8;
        }
    }

    Ok(output)
}

/// Draw the box outline onto `image` in place.
///
/// Unlike an OpenCV rectangle, whose stroke is centred on the box edge, the
/// outline here grows inward so the box interior shrinks but nothing outside
/// the annotated corners is painted. Parts outside the image are clipped.
pub fn draw_box_mut(image: &mut RgbImage, bbox: &BoundingBox, style: &BoxStyle) {
    let (x0, y0, x1, y1) = bbox.to_pixels();
    let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
    // a side clamped to -1 or to the far edge stays off the raster
    let max_x = image.width() as i64;
    let max_y = image.height() as i64;
    let color = Rgb(style.color);

    for k in 0..style.thickness.max(1) as i64 {
        let (left, top) = (x0 + k, y0 + k);
        let (right, bottom) = (x1 - k, y1 - k);
        if right < left || bottom < top {
            break;
        }
        let (left, right) = (left.clamp(-1, max_x), right.clamp(-1, max_x));
        let (top, bottom) = (top.clamp(-1, max_y), bottom.clamp(-1, max_y));
        let rect = Rect::at(left as i32, top as i32)
            .of_size((right - left + 1) as u32, (bottom - top + 1) as u32);
        draw_hollow_rect_mut(image, rect, color);
    }
}

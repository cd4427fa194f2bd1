use super::{ColorSource, DrawOrder, canvas_size, fits_canvas};
use image::{Rgba, RgbaImage};
use maskvec_core::Mask;

/// Opacity of each filled segment
pub const SEGMENT_ALPHA: f32 = 0.35;

/// Fill every mask's footprint with its own translucent color.
///
/// The canvas starts fully transparent. Masks painted later overwrite
/// earlier ones, so with the default order the smaller mask wins on shared
/// pixels. Returns `None` for an empty batch.
pub fn draw_segments<C: ColorSource + ?Sized>(
    masks: &[Mask],
    order: DrawOrder,
    alpha: f32,
    colors: &mut C,
) -> Option<RgbaImage> {
    let (width, height) = canvas_size(masks)?;
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    let alpha = (alpha.clamp(0.0, 1.0) * 255.0) as u8;

    for mask in order.arrange(masks) {
        if !fits_canvas(mask, (width, height)) {
            continue;
        }
        let [r, g, b] = colors.next_color();
        for (x, y) in mask.foreground() {
            canvas.put_pixel(x, y, Rgba([r, g, b, alpha]));
        }
    }

    Some(canvas)
}

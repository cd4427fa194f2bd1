use crate::error::GeometryError;
use image::{GrayImage, Luma};

/// Values above this are foreground when a grayscale raster is binarized.
pub const BINARY_THRESHOLD: u8 = 127;

/// Probability masks are foreground above this value.
pub const PROBABILITY_THRESHOLD: f32 = 0.5;

const FOREGROUND: Luma<u8> = Luma([255]);

/// Binary segmentation mask as produced by a segmentation model.
///
/// The raster only ever holds 0 or 255. `area` defaults to the foreground
/// pixel count but a model may report its own value.
#[derive(Debug, Clone)]
pub struct Mask {
    segmentation: GrayImage,
    area: u64,
    stability_score: Option<f32>,
}

impl Mask {
    /// Binarize a grayscale raster at the midpoint of its value range.
    pub fn from_gray(raster: GrayImage) -> Self {
        let mut segmentation = raster;
        for pixel in segmentation.pixels_mut() {
            pixel.0[0] = if pixel.0[0] > BINARY_THRESHOLD { 255 } else { 0 };
        }
        Self::from_binary(segmentation)
    }

    /// Build from a row-major boolean array.
    pub fn from_bools(width: u32, height: u32, data: &[bool]) -> Result<Self, GeometryError> {
        check_len(width, height, data.len())?;
        let segmentation = GrayImage::from_fn(width, height, |x, y| {
            Luma([if data[(y * width + x) as usize] { 255 } else { 0 }])
        });
        Ok(Self::from_binary(segmentation))
    }

    /// Build from a row-major probability map, thresholded at 0.5.
    pub fn from_probabilities(
        width: u32,
        height: u32,
        data: &[f32],
    ) -> Result<Self, GeometryError> {
        check_len(width, height, data.len())?;
        let segmentation = GrayImage::from_fn(width, height, |x, y| {
            Luma([if data[(y * width + x) as usize] > PROBABILITY_THRESHOLD { 255 } else { 0 }])
        });
        Ok(Self::from_binary(segmentation))
    }

    /// Filled axis-aligned rectangle; handy for synthetic masks.
    pub fn from_rect(width: u32, height: u32, x: u32, y: u32, w: u32, h: u32) -> Self {
        let mut segmentation = GrayImage::new(width, height);
        for py in y..y.saturating_add(h).min(height) {
            for px in x..x.saturating_add(w).min(width) {
                segmentation.put_pixel(px, py, FOREGROUND);
            }
        }
        Self::from_binary(segmentation)
    }

    fn from_binary(segmentation: GrayImage) -> Self {
        let area = segmentation.pixels().filter(|p| p.0[0] != 0).count() as u64;
        Self {
            segmentation,
            area,
            stability_score: None,
        }
    }

    /// Override the pixel-count area with the model's reported value
    pub fn with_area(mut self, area: u64) -> Self {
        self.area = area;
        self
    }

    pub fn with_stability_score(mut self, score: f32) -> Self {
        self.stability_score = Some(score);
        self
    }

    pub fn width(&self) -> u32 {
        self.segmentation.width()
    }

    pub fn height(&self) -> u32 {
        self.segmentation.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.segmentation.dimensions()
    }

    pub fn area(&self) -> u64 {
        self.area
    }

    pub fn stability_score(&self) -> Option<f32> {
        self.stability_score
    }

    /// The 0/255 raster
    pub fn segmentation(&self) -> &GrayImage {
        &self.segmentation
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height() && self.segmentation.get_pixel(x, y).0[0] != 0
    }

    /// True when no pixel is foreground, regardless of the reported area.
    pub fn is_empty(&self) -> bool {
        self.segmentation.pixels().all(|p| p.0[0] == 0)
    }

    /// Coordinates of every foreground pixel in row-major order.
    pub fn foreground(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.segmentation
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] != 0)
            .map(|(x, y, _)| (x, y))
    }
}

fn check_len(width: u32, height: u32, actual: usize) -> Result<(), GeometryError> {
    let expected = width as usize * height as usize;
    if actual != expected {
        return Err(GeometryError::BufferLength { expected, actual });
    }
    Ok(())
}

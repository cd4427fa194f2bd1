//! Image loading and saving

use crate::Result;
use anyhow::Context;
use image::{GrayImage, RgbImage, RgbaImage};
use std::path::Path;

/// Image utility functions
pub struct ImageUtils;

impl ImageUtils {
    /// Load image as RGB
    pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
        let img = image::open(&path)
            .with_context(|| format!("Failed to open image: {:?}", path.as_ref()))?;
        Ok(img.to_rgb8())
    }

    /// Load image as single-channel grayscale
    pub fn load_gray<P: AsRef<Path>>(path: P) -> Result<GrayImage> {
        let img = image::open(&path)
            .with_context(|| format!("Failed to open image: {:?}", path.as_ref()))?;
        Ok(img.to_luma8())
    }

    pub fn save_gray<P: AsRef<Path>>(img: &GrayImage, path: P) -> Result<()> {
        img.save(&path)
            .with_context(|| format!("Failed to save image: {:?}", path.as_ref()))
    }

    pub fn save_rgb<P: AsRef<Path>>(img: &RgbImage, path: P) -> Result<()> {
        img.save(&path)
            .with_context(|| format!("Failed to save image: {:?}", path.as_ref()))
    }

    /// Save RGBA to a format without alpha (JPEG) by dropping the channel
    pub fn save_rgba_flattened<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<()> {
        Self::save_rgb(&Self::rgba_to_rgb(img), path)
    }

    /// Convert RGBA to RGB, discarding alpha
    pub fn rgba_to_rgb(rgba_image: &RgbaImage) -> RgbImage {
        let (width, height) = rgba_image.dimensions();
        let mut rgb_image = RgbImage::new(width, height);

        for (x, y, pixel) in rgba_image.enumerate_pixels() {
            rgb_image.put_pixel(x, y, image::Rgb([pixel[0], pixel[1], pixel[2]]));
        }

        rgb_image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_to_rgb_conversion() {
        let rgba_img = RgbaImage::from_pixel(50, 50, image::Rgba([10, 20, 30, 89]));
        let rgb_img = ImageUtils::rgba_to_rgb(&rgba_img);

        assert_eq!(rgba_img.dimensions(), rgb_img.dimensions());
        assert_eq!(rgb_img.get_pixel(3, 3), &image::Rgb([10, 20, 30]));
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("mask.png");

        let gray = GrayImage::from_pixel(12, 7, image::Luma([255]));
        ImageUtils::save_gray(&gray, &path)?;
        assert_eq!(ImageUtils::load_gray(&path)?, gray);

        let jpeg = dir.path().join("segms.jpg");
        ImageUtils::save_rgba_flattened(&RgbaImage::new(8, 8), &jpeg)?;
        assert_eq!(ImageUtils::load_rgb(&jpeg)?.dimensions(), (8, 8));
        Ok(())
    }
}

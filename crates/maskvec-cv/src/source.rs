//! Inputs to the segmentation model and a file-backed stand-in for it

use crate::Result;
use crate::traits::{MaskGenerator, MaskPredictor};
use crate::utils::ImageUtils;
use anyhow::{Context, bail};
use image::RgbImage;
use maskvec_core::{BoundingBox, Mask};
use std::fs;
use std::path::{Path, PathBuf};

/// A decoded source image together with its file stem
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub stem: String,
    pub pixels: RgbImage,
}

impl SourceImage {
    pub fn new(stem: impl Into<String>, pixels: RgbImage) -> Self {
        Self {
            stem: stem.into(),
            pixels,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

/// Box prompt plus positive point prompts for one object
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub bbox: BoundingBox,
    pub points: Vec<(f64, f64)>,
}

/// Masks exported ahead of time by an external segmenter.
///
/// For an image with stem `S` the generator reads `S_mask_<i>.png` and the
/// predictor reads `S_cand_<i>.png`, both in ascending `<i>`. Rasters are
/// binarized at the midpoint when loaded.
#[derive(Debug, Clone)]
pub struct MaskDirectory {
    root: PathBuf,
}

impl MaskDirectory {
    /// Fails when the directory is missing; without it there is no model.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            bail!("Mask directory does not exist: {:?}", root);
        }
        Ok(Self { root })
    }

    fn load(&self, stem: &str, kind: &str) -> Result<Vec<Mask>> {
        let prefix = format!("{}_{}_", stem, kind);
        let mut indexed = Vec::new();

        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read directory: {:?}", self.root))?;
        for entry in entries {
            let path = entry?.path();
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
                continue;
            };
            let index = name
                .strip_prefix(&prefix)
                .and_then(|rest| rest.strip_suffix(".png"))
                .and_then(|i| i.parse::<usize>().ok());
            if let Some(index) = index {
                indexed.push((index, path));
            }
        }
        indexed.sort_by_key(|(index, _)| *index);

        let masks = indexed
            .into_iter()
            .map(|(_, path)| ImageUtils::load_gray(&path).map(Mask::from_gray))
            .collect::<Result<Vec<Mask>>>()?;

        log::debug!("Loaded {} {} rasters for {}", masks.len(), kind, stem);
        Ok(masks)
    }
}

impl MaskGenerator for MaskDirectory {
    fn generate(&mut self, image: &SourceImage) -> Result<Vec<Mask>> {
        self.load(&image.stem, "mask")
    }
}

impl MaskPredictor for MaskDirectory {
    fn predict(&mut self, image: &SourceImage, _prompt: &Prompt) -> Result<Vec<Mask>> {
        self.load(&image.stem, "cand")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn write_mask(dir: &Path, name: &str, side: u32) -> Result<()> {
        let raster = GrayImage::from_fn(32, 32, |x, y| {
            Luma([if x < side && y < side { 255 } else { 0 }])
        });
        ImageUtils::save_gray(&raster, dir.join(name))
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        assert!(MaskDirectory::open("/no/such/masks").is_err());
    }

    #[test]
    fn test_masks_load_in_index_order() -> Result<()> {
        let dir = tempfile::tempdir()?;
        write_mask(dir.path(), "tile_mask_10.png", 3)?;
        write_mask(dir.path(), "tile_mask_2.png", 5)?;
        write_mask(dir.path(), "tile_cand_0.png", 7)?;
        write_mask(dir.path(), "other_mask_0.png", 9)?;

        let mut source = MaskDirectory::open(dir.path())?;
        let image = SourceImage::new("tile", RgbImage::new(32, 32));

        let masks = source.generate(&image)?;
        let areas: Vec<u64> = masks.iter().map(Mask::area).collect();
        assert_eq!(areas, vec![25, 9]);

        let prompt = Prompt {
            bbox: BoundingBox::from_corners((0.0, 0.0), (8.0, 8.0)),
            points: vec![],
        };
        let candidates = source.predict(&image, &prompt)?;
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].area(), 49);
        Ok(())
    }
}

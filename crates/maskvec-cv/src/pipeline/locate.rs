//! Box-prompted object location scored by IoU against a reference

use super::config::LocateConfig;
use crate::Result;
use crate::evaluation::select_best;
use crate::io::{ImagePaths, list_images, read_bbox, read_points, read_polygon};
use crate::overlay::{blend_mask, draw_box_mut};
use crate::source::{Prompt, SourceImage};
use crate::traits::MaskPredictor;
use crate::utils::ImageUtils;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Result for one image
#[derive(Debug, Clone, PartialEq)]
pub struct LocateOutcome {
    pub max_iou: f64,
    pub best: Option<usize>,
    pub candidates: usize,
    pub overlay_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageScore {
    pub stem: String,
    pub iou: f64,
}

/// Scores over a directory run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocateSummary {
    pub images: Vec<ImageScore>,
    pub failed: Vec<String>,
    pub mean_iou: f64,
}

impl LocateSummary {
    fn finish(mut self) -> Self {
        self.mean_iou = if self.images.is_empty() {
            0.0
        } else {
            self.images.iter().map(|s| s.iou).sum::<f64>() / self.images.len() as f64
        };
        self
    }

    /// Export the summary as pretty JSON
    pub fn export_json(&self, output_path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize locate summary")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write JSON to: {:?}", output_path))?;

        Ok(())
    }
}

pub struct LocatePipeline<P: MaskPredictor> {
    config: LocateConfig,
    predictor: P,
}

impl<P: MaskPredictor> LocatePipeline<P> {
    pub fn new(config: LocateConfig, predictor: P) -> Self {
        Self { config, predictor }
    }

    /// Process every image in `dir`. Images with missing or malformed
    /// annotations are logged and left out of the mean.
    pub fn run<D: AsRef<Path>>(&mut self, dir: D) -> Result<LocateSummary> {
        let images = list_images(&dir, &self.config.filename_exceptions)?;
        log::info!("Number of jpg files: {}", images.len());

        let mut summary = LocateSummary::default();
        for paths in &images {
            match self.process_image(paths) {
                Ok(outcome) => summary.images.push(ImageScore {
                    stem: paths.stem().to_string(),
                    iou: outcome.max_iou,
                }),
                Err(e) => {
                    log::warn!("Skipping {}: {:#}", paths.stem(), e);
                    summary.failed.push(paths.stem().to_string());
                }
            }
        }

        let summary = summary.finish();
        log::info!("mean iou = {}", summary.mean_iou);
        Ok(summary)
    }

    pub fn process_image(&mut self, paths: &ImagePaths) -> Result<LocateOutcome> {
        let image = SourceImage::new(paths.stem(), ImageUtils::load_rgb(paths.image())?);

        let prompt = Prompt {
            bbox: read_bbox(paths.bbox())?,
            points: read_points(paths.points())?,
        };
        let reference = read_polygon(paths.object())?;

        let candidates = self.predictor.predict(&image, &prompt)?;
        let selection = select_best(&candidates, &reference);
        log::info!(
            "{}: best IoU {:.4} of {} candidates",
            paths.stem(),
            selection.max_iou,
            candidates.len()
        );

        let mut overlay = match selection.best_mask(&candidates) {
            Some(mask) => blend_mask(
                &image.pixels,
                mask.segmentation(),
                self.config.overlay.alpha,
                self.config.overlay.color,
            )?,
            None => {
                log::warn!("{}: no candidate overlaps the reference", paths.stem());
                image.pixels.clone()
            }
        };
        draw_box_mut(&mut overlay, &prompt.bbox, &self.config.bbox_style);

        let overlay_path = paths.overlay(selection.max_iou);
        ImageUtils::save_rgb(&overlay, &overlay_path)?;
        fs::write(paths.iou(), selection.max_iou.to_string())
            .with_context(|| format!("Failed to write score: {:?}", paths.iou()))?;

        Ok(LocateOutcome {
            max_iou: selection.max_iou,
            best: selection.best,
            candidates: candidates.len(),
            overlay_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use maskvec_core::Mask;

    struct Fixed(Vec<Mask>);

    impl MaskPredictor for Fixed {
        fn predict(&mut self, _image: &SourceImage, _prompt: &Prompt) -> Result<Vec<Mask>> {
            Ok(self.0.clone())
        }
    }

    fn annotate(dir: &Path, stem: &str) -> Result<ImagePaths> {
        let image_path = dir.join(format!("{}.jpg", stem));
        ImageUtils::save_rgb(&RgbImage::new(64, 64), &image_path)?;
        let paths = ImagePaths::new(&image_path)?;

        fs::write(paths.bbox(), "[8.0 8.0], [32.0 32.0]\n")?;
        fs::write(paths.points(), "MULTIPOINT ((20 20))\n")?;
        fs::write(paths.object(), "POLYGON ((10 10,29 10,29 29,10 29,10 10))\n")?;
        Ok(paths)
    }

    #[test]
    fn test_exact_candidate_scores_one() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let paths = annotate(dir.path(), "obj")?;
        let candidates = vec![
            Mask::from_rect(64, 64, 40, 40, 10, 10),
            Mask::from_rect(64, 64, 10, 10, 20, 20),
        ];

        let mut pipeline = LocatePipeline::new(LocateConfig::default(), Fixed(candidates));
        let outcome = pipeline.process_image(&paths)?;

        assert_eq!(outcome.best, Some(1));
        assert!((outcome.max_iou - 1.0).abs() < 1e-9);
        assert!(outcome.overlay_path.is_file());
        let score: f64 = fs::read_to_string(paths.iou())?.parse()?;
        assert_eq!(score, outcome.max_iou);
        Ok(())
    }

    #[test]
    fn test_missing_annotations_skip_only_that_image() -> Result<()> {
        let dir = tempfile::tempdir()?;
        annotate(dir.path(), "good")?;
        ImageUtils::save_rgb(&RgbImage::new(64, 64), dir.path().join("bare.jpg"))?;

        let candidates = vec![Mask::from_rect(64, 64, 10, 10, 20, 10)];
        let mut pipeline = LocatePipeline::new(LocateConfig::default(), Fixed(candidates));
        let summary = pipeline.run(dir.path())?;

        assert_eq!(summary.failed, vec!["bare".to_string()]);
        assert_eq!(summary.images.len(), 1);
        assert!((summary.mean_iou - summary.images[0].iou).abs() < 1e-12);
        assert!(summary.mean_iou > 0.4 && summary.mean_iou < 0.6);

        let json_path = dir.path().join("summary.json");
        summary.export_json(&json_path)?;
        let restored: LocateSummary = serde_json::from_str(&fs::read_to_string(&json_path)?)?;
        assert_eq!(restored.failed, summary.failed);
        assert!((restored.mean_iou - summary.mean_iou).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_no_overlap_still_renders() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let paths = annotate(dir.path(), "miss")?;

        let mut pipeline = LocatePipeline::new(LocateConfig::default(), Fixed(vec![]));
        let outcome = pipeline.process_image(&paths)?;

        assert_eq!(outcome.best, None);
        assert_eq!(outcome.overlay_path, paths.overlay(0.0));
        assert_eq!(fs::read_to_string(paths.iou())?, "0");
        Ok(())
    }
}

//! Whole-image segmentation into edge, segment and WKT products

use super::config::MarkupConfig;
use crate::Result;
use crate::composite::{draw_edges, draw_segments};
use crate::io::{ImagePaths, list_images, write_polygons};
use crate::polygon::mask_to_polygon;
use crate::source::SourceImage;
use crate::traits::MaskGenerator;
use crate::utils::ImageUtils;
use image::{GrayImage, RgbaImage};
use maskvec_core::{GeometryError, Mask};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

/// What happened to one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupOutcome {
    Skipped,
    Processed { masks: usize, polygons: usize },
}

/// Counts over a directory run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupReport {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

pub struct MarkupPipeline<G: MaskGenerator> {
    config: MarkupConfig,
    generator: G,
    colors: StdRng,
}

impl<G: MaskGenerator> MarkupPipeline<G> {
    pub fn new(config: MarkupConfig, generator: G) -> Self {
        let colors = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            generator,
            colors,
        }
    }

    /// Process every image in `dir`; a failing image is logged and skipped
    pub fn run<P: AsRef<Path>>(&mut self, dir: P) -> Result<MarkupReport> {
        let images = list_images(&dir, &self.config.filename_exceptions)?;
        log::info!("Number of jpg files: {}", images.len());

        let mut report = MarkupReport::default();
        for paths in &images {
            match self.process_image(paths) {
                Ok(MarkupOutcome::Skipped) => report.skipped += 1,
                Ok(MarkupOutcome::Processed { .. }) => report.processed += 1,
                Err(e) => {
                    log::warn!("Skipping {}: {:#}", paths.stem(), e);
                    report.failed += 1;
                }
            }
        }

        log::info!(
            "Markup done: {} processed, {} skipped, {} failed",
            report.processed,
            report.skipped,
            report.failed
        );
        Ok(report)
    }

    pub fn process_image(&mut self, paths: &ImagePaths) -> Result<MarkupOutcome> {
        if self.config.skip_existing && paths.markup_done() {
            log::debug!("{} already marked up", paths.stem());
            return Ok(MarkupOutcome::Skipped);
        }

        let image = SourceImage::new(paths.stem(), ImageUtils::load_rgb(paths.image())?);
        let masks = self.generator.generate(&image)?;
        log::info!("{}: {} masks", paths.stem(), masks.len());

        self.write_rasters(paths, &image, &masks)?;
        let polygons = self.write_geometry(paths, &masks)?;

        Ok(MarkupOutcome::Processed {
            masks: masks.len(),
            polygons,
        })
    }

    fn write_rasters(&mut self, paths: &ImagePaths, image: &SourceImage, masks: &[Mask]) -> Result<()> {
        let (width, height) = image.dimensions();
        let order = self.config.draw_order;

        // no masks still leaves blank products so the image counts as done
        let edges = draw_edges(masks, self.config.edges_width, order)
            .unwrap_or_else(|| GrayImage::new(width, height));
        ImageUtils::save_gray(&edges, paths.edges())?;
        drop(edges);

        let segments = draw_segments(masks, order, self.config.segment_alpha, &mut self.colors)
            .unwrap_or_else(|| RgbaImage::new(width, height));
        ImageUtils::save_rgba_flattened(&segments, paths.segments())?;

        Ok(())
    }

    /// One polygon per mask with geometry, in production order
    fn write_geometry(&self, paths: &ImagePaths, masks: &[Mask]) -> Result<usize> {
        let mut polygons = Vec::with_capacity(masks.len());
        for (i, mask) in masks.iter().enumerate() {
            match mask_to_polygon(mask) {
                Ok(polygon) => polygons.push(polygon),
                Err(GeometryError::EmptyMask) => {
                    log::debug!("{}: mask {} is empty", paths.stem(), i);
                }
                Err(e) => return Err(e.into()),
            }
        }

        write_polygons(paths.wkt(), &polygons)?;
        Ok(polygons.len())
    }
}

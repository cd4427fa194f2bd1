//! Image discovery and per-image file naming

use crate::Result;
use anyhow::{Context, bail};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

/// Every input and output file belonging to one source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePaths {
    dir: PathBuf,
    stem: String,
    image: PathBuf,
}

impl ImagePaths {
    pub fn new<P: AsRef<Path>>(image: P) -> Result<Self> {
        let image = image.as_ref().to_path_buf();
        let stem = image
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .with_context(|| format!("Not an image file: {:?}", image))?;
        let dir = image
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(Self { dir, stem, image })
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn image(&self) -> &Path {
        &self.image
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        self.dir.join(format!("{}{}", self.stem, suffix))
    }

    pub fn edges(&self) -> PathBuf {
        self.sibling("_edges.jpg")
    }

    pub fn segments(&self) -> PathBuf {
        self.sibling("_segms.jpg")
    }

    pub fn wkt(&self) -> PathBuf {
        self.sibling(".wkt")
    }

    pub fn bbox(&self) -> PathBuf {
        self.sibling(".bbox")
    }

    pub fn points(&self) -> PathBuf {
        self.sibling(".points")
    }

    pub fn object(&self) -> PathBuf {
        self.sibling(".object")
    }

    /// Overlay name embeds the IoU as a truncated percentage
    pub fn overlay(&self, iou: f64) -> PathBuf {
        self.sibling(&format!("_pred_{}.jpg", (iou * 100.0) as i64))
    }

    pub fn iou(&self) -> PathBuf {
        self.sibling("_pred.iou")
    }

    /// True when every markup product is already on disk
    pub fn markup_done(&self) -> bool {
        self.edges().is_file() && self.segments().is_file() && self.wkt().is_file()
    }
}

/// JPEG images in `dir` whose stem matches none of the shell-style
/// `exceptions` (`*` and `?` wildcards), sorted by file name.
pub fn list_images<P: AsRef<Path>>(dir: P, exceptions: &[String]) -> Result<Vec<ImagePaths>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        bail!("Input directory does not exist: {:?}", dir);
    }

    let patterns = exceptions
        .iter()
        .map(|p| wildcard(p))
        .collect::<Result<Vec<Regex>>>()?;

    let mut images = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {:?}", dir))?;

    for entry in entries {
        let path = entry?.path();
        let is_jpeg = path
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                IMAGE_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false);
        if !is_jpeg || !path.is_file() {
            continue;
        }

        let paths = ImagePaths::new(&path)?;
        if patterns.iter().any(|re| re.is_match(paths.stem())) {
            continue;
        }
        images.push(paths);
    }

    images.sort_by(|a, b| a.image.cmp(&b.image));
    Ok(images)
}

fn wildcard(pattern: &str) -> Result<Regex> {
    let mut expr = String::from("^");
    for c in pattern.chars() {
        match c {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            other => expr.push_str(&regex::escape(&other.to_string())),
        }
    }
    expr.push('$');

    Regex::new(&expr).with_context(|| format!("Invalid exception pattern: {}", pattern))
}

//! Readers for the per-image auxiliary inputs of the locate pipeline

use crate::Result;
use anyhow::Context;
use geo::{MultiPoint, Polygon};
use maskvec_core::BoundingBox;
use std::fs;
use std::path::Path;
use thiserror::Error;
use wkt::TryFromWkt;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnnotationError {
    #[error("line {line}: expected `x y`, found `{text}`")]
    MalformedCoordinate { line: usize, text: String },

    #[error("a box needs two corners, found {0}")]
    MissingCorners(usize),

    #[error("invalid WKT: {0}")]
    Wkt(String),
}

/// Parse bracketed coordinate pairs such as `[123.0 45.0], [200.0 90.0]`.
///
/// Any number of comma-separated pairs may sit on each line; blank lines
/// are ignored.
pub fn parse_coordinates(text: &str) -> std::result::Result<Vec<(f64, f64)>, AnnotationError> {
    let mut coordinates = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let cleaned = line.replace(['[', ']'], "");
        if cleaned.trim().is_empty() {
            continue;
        }

        for part in cleaned.split(',') {
            let malformed = || AnnotationError::MalformedCoordinate {
                line: index + 1,
                text: part.trim().to_string(),
            };
            let values: Vec<&str> = part.split_whitespace().collect();
            let [x, y] = values.as_slice() else {
                return Err(malformed());
            };
            let x: f64 = x.parse().map_err(|_| malformed())?;
            let y: f64 = y.parse().map_err(|_| malformed())?;
            coordinates.push((x, y));
        }
    }

    Ok(coordinates)
}

pub fn read_coordinates<P: AsRef<Path>>(path: P) -> Result<Vec<(f64, f64)>> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read coordinates: {:?}", path.as_ref()))?;

    parse_coordinates(&text)
        .with_context(|| format!("Malformed coordinates in {:?}", path.as_ref()))
}

/// Box from the first two corners of a coordinate file
pub fn read_bbox<P: AsRef<Path>>(path: P) -> Result<BoundingBox> {
    let corners = read_coordinates(&path)?;
    match corners.as_slice() {
        [a, b, ..] => Ok(BoundingBox::from_corners(*a, *b)),
        _ => Err(AnnotationError::MissingCorners(corners.len()))
            .with_context(|| format!("Invalid box file: {:?}", path.as_ref())),
    }
}

/// Point prompts from a WKT `MULTIPOINT`
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<(f64, f64)>> {
    let text = read_wkt_text(&path)?;
    let points = MultiPoint::<f64>::try_from_wkt_str(&text)
        .map_err(|e| AnnotationError::Wkt(e.to_string()))
        .with_context(|| format!("Invalid points file: {:?}", path.as_ref()))?;

    Ok(points.iter().map(|p| p.x_y()).collect())
}

/// Reference geometry from a WKT `POLYGON`
pub fn read_polygon<P: AsRef<Path>>(path: P) -> Result<Polygon<f64>> {
    let text = read_wkt_text(&path)?;
    Polygon::<f64>::try_from_wkt_str(&text)
        .map_err(|e| AnnotationError::Wkt(e.to_string()))
        .with_context(|| format!("Invalid reference geometry: {:?}", path.as_ref()))
}

/// File content with line breaks removed, so wrapped WKT parses
fn read_wkt_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read WKT: {:?}", path.as_ref()))?;
    Ok(text.replace(['\r', '\n'], ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;

    #[test]
    fn test_parse_bracketed_pairs() {
        let coordinates = parse_coordinates("[123.0 45.0], [200.0 90.0]\n").unwrap();
        assert_eq!(coordinates, vec![(123.0, 45.0), (200.0, 90.0)]);
    }

    #[test]
    fn test_parse_multiple_lines() {
        let text = "[1 2]\n\n[3.5 4.5], [5 6]\n";
        let coordinates = parse_coordinates(text).unwrap();
        assert_eq!(coordinates, vec![(1.0, 2.0), (3.5, 4.5), (5.0, 6.0)]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_coordinates("[1 2], [3]\n").unwrap_err();
        assert_eq!(
            err,
            AnnotationError::MalformedCoordinate {
                line: 1,
                text: "3".to_string()
            }
        );
        assert!(parse_coordinates("[a b]").is_err());
    }

    #[test]
    fn test_read_files() -> Result<()> {
        let dir = tempfile::tempdir()?;

        let bbox_path = dir.path().join("img.bbox");
        fs::write(&bbox_path, "[200.0 90.0], [123.0 45.0]\n")?;
        let bbox = read_bbox(&bbox_path)?;
        assert_eq!(bbox, BoundingBox::from_corners((123.0, 45.0), (200.0, 90.0)));

        let points_path = dir.path().join("img.points");
        fs::write(&points_path, "MULTIPOINT ((10 20),\n(30 40))\n")?;
        assert_eq!(read_points(&points_path)?, vec![(10.0, 20.0), (30.0, 40.0)]);

        let object_path = dir.path().join("img.object");
        fs::write(&object_path, "POLYGON ((0 0,10 0,\n10 10,0 10,0 0))\n")?;
        assert_eq!(read_polygon(&object_path)?.unsigned_area(), 100.0);

        Ok(())
    }

    #[test]
    fn test_box_needs_two_corners() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("img.bbox");
        fs::write(&path, "[1 2]\n")?;

        let err = read_bbox(&path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AnnotationError>(),
            Some(&AnnotationError::MissingCorners(1))
        );
        Ok(())
    }

    #[test]
    fn test_missing_file_fails() {
        assert!(read_polygon("/nonexistent/img.object").is_err());
    }
}

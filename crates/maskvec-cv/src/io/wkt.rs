//! Polygon layers stored as one WKT geometry per line

use crate::Result;
use crate::io::annotations::AnnotationError;
use anyhow::Context;
use geo::Polygon;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use wkt::{ToWkt, TryFromWkt};

/// Write each polygon as a WKT line, in the given order
pub fn write_polygons<P: AsRef<Path>>(path: P, polygons: &[Polygon<f64>]) -> Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("Failed to create WKT file: {:?}", path.as_ref()))?;
    let mut writer = BufWriter::new(file);

    for polygon in polygons {
        writeln!(writer, "{}", polygon.wkt_string())?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write WKT file: {:?}", path.as_ref()))?;

    Ok(())
}

/// Read one polygon per non-empty line
pub fn read_polygons<P: AsRef<Path>>(path: P) -> Result<Vec<Polygon<f64>>> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read WKT file: {:?}", path.as_ref()))?;

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            Polygon::<f64>::try_from_wkt_str(line.trim())
                .map_err(|e| AnnotationError::Wkt(e.to_string()))
                .with_context(|| format!("{:?}, line {}", path.as_ref(), index + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Rect, coord};

    #[test]
    fn test_layer_keeps_order() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("layer.wkt");
        let polygons = vec![
            Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 19.0, y: 19.0 }).to_polygon(),
            Rect::new(coord! { x: 5.0, y: 5.0 }, coord! { x: 7.0, y: 9.0 }).to_polygon(),
        ];

        write_polygons(&path, &polygons)?;
        let text = fs::read_to_string(&path)?;
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|line| line.starts_with("POLYGON")));

        assert_eq!(read_polygons(&path)?, polygons);
        Ok(())
    }

    #[test]
    fn test_bad_line_reported() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("layer.wkt");
        fs::write(&path, "POLYGON((0 0,1 0,1 1,0 0))\nPOLYGON((oops\n")?;

        let err = read_polygons(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
        Ok(())
    }
}

//! Annotation files, WKT layers and output naming

pub mod annotations;
pub mod paths;
pub mod wkt;

pub use annotations::{AnnotationError, parse_coordinates, read_bbox, read_coordinates, read_points, read_polygon};
pub use paths::{ImagePaths, list_images};
pub use wkt::{read_polygons, write_polygons};

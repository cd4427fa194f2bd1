//! Core data model for turning segmentation masks into vector geometry.
//!
//! Everything in here is transient: masks, contours and boxes are created
//! per input image and dropped once that image is done.

pub mod bbox;
pub mod contour;
pub mod error;
pub mod mask;

pub use bbox::BoundingBox;
pub use contour::{Contour, Point};
pub use error::GeometryError;
pub use mask::Mask;

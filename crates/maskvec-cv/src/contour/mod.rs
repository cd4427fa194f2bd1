//! Boundary tracing of binary masks

pub mod chain;
pub mod extractor;

pub use chain::compress_chain;
pub use extractor::{largest_contour, outer_contours};

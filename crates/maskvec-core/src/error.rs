use thiserror::Error;

/// Failures of the raster-to-vector core.
///
/// `EmptyMask` is the expected "no geometry for this mask" outcome; callers
/// are meant to match on it and move on to the next mask.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("mask has no foreground pixels")]
    EmptyMask,

    #[error("raster is {actual:?}, expected {expected:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("mask data holds {actual} values, expected {expected}")]
    BufferLength { expected: usize, actual: usize },

    #[error("blend factor {0} is outside [0, 1]")]
    InvalidAlpha(f32),
}

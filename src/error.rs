//! Error types for image construction and color conversions.
//!
//! Out-of-range pixel coordinates are never errors: reads clamp to the edge
//! and writes are dropped. Errors are reserved for buffers that cannot be
//! interpreted as the requested image (bad dimensions, wrong channel count).

use thiserror::Error;

/// Errors produced by `planar_image` operations.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Width, height and channel count must all be positive
    #[error("image dimensions must be positive, got {width}x{height} with {channels} channels")]
    EmptyDimensions {
        width: usize,
        height: usize,
        channels: usize,
    },

    /// `channels * width * height` does not fit in a sample buffer
    #[error("image of {width}x{height} with {channels} channels is too large")]
    TooLarge {
        width: usize,
        height: usize,
        channels: usize,
    },

    /// Operation requires a specific channel layout (e.g. RGB)
    #[error("expected {expected} channels, found {found}")]
    InvalidChannelCount { expected: usize, found: usize },

    /// Sample buffer does not match `channels * width * height`
    #[error("sample buffer holds {found} values, expected {expected}")]
    BufferLength { expected: usize, found: usize },

    /// ndarray rejected the (channels, height, width) shape
    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ImageError>;

#[cfg(feature = "python")]
impl From<ImageError> for pyo3::PyErr {
    fn from(err: ImageError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

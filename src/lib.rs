//! Planar Image Operations
//!
//! Elementary per-pixel operations over a channel-planar `f32` image,
//! with Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! An [`Image`] stores one contiguous plane per channel:
//! - **Grayscale**: 1 plane
//! - **RGB / HSV**: 3 planes
//!
//! Sample `(x, y, c)` lives at `c * width * height + y * width + x`, which is
//! the standard layout of an ndarray of shape `(channels, height, width)`.
//! Values are nominally 0.0-1.0 but nothing enforces it until
//! [`clamp_image`](filters::clamp_image) runs.
//!
//! ## Operations
//! - [`Image::get_pixel`] / [`Image::set_pixel`] - clamp-to-edge reads,
//!   dropped out-of-range writes
//! - [`Image::copy_image`] - deep copy
//! - [`filters::rgb_to_grayscale`] - BT.601 luma reduction to 1 channel
//! - [`filters::shift_image`] / [`filters::scale_image`] - per-channel bias
//!   and gain
//! - [`filters::clamp_image`] - saturate into 0.0-1.0
//! - [`filters::rgb_to_hsv`] / [`filters::hsv_to_rgb`] - in-place color space
//!   conversion

pub mod error;
pub mod filters;
pub mod image;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{ImageError, Result};
pub use image::Image;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::prelude::*;

    use crate::filters::{color_adjust, color_science, grayscale};
    use crate::filters::GrayscaleWeights;
    use crate::image::Image;

    /// numpy array of shape (channels, height, width) -> owned planar image
    fn to_image(image: PyReadonlyArray3<'_, f32>) -> PyResult<Image> {
        Ok(Image::from_array(image.as_array().to_owned())?)
    }

    fn to_py<'py>(py: Python<'py>, image: Image) -> PyResult<Bound<'py, PyArray3<f32>>> {
        Ok(image.into_array()?.into_pyarray(py))
    }

    // ========================================================================
    // Pixel Access
    // ========================================================================

    /// Read a sample with clamp-to-edge coordinates.
    #[pyfunction]
    pub fn get_pixel<'py>(
        image: PyReadonlyArray3<'py, f32>,
        x: isize,
        y: isize,
        c: isize,
    ) -> PyResult<f32> {
        Ok(to_image(image)?.get_pixel(x, y, c))
    }

    /// Return a copy with one sample replaced; out-of-range writes are dropped.
    #[pyfunction]
    pub fn set_pixel<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
        x: isize,
        y: isize,
        c: isize,
        v: f32,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let mut img = to_image(image)?;
        img.set_pixel(x, y, c, v);
        to_py(py, img)
    }

    #[pyfunction]
    pub fn copy_image<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        to_py(py, to_image(image)?.copy_image())
    }

    // ========================================================================
    // Grayscale
    // ========================================================================

    /// Reduce a (3, H, W) RGB image to (1, H, W) with BT.601 luma.
    #[pyfunction]
    pub fn rgb_to_grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let gray = grayscale::rgb_to_grayscale(&to_image(image)?)?;
        to_py(py, gray)
    }

    /// Reduce to grayscale with custom RGB weights (normalized automatically).
    #[pyfunction]
    #[pyo3(signature = (image, r_weight=0.299, g_weight=0.587, b_weight=0.114))]
    pub fn rgb_to_grayscale_weighted<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
        r_weight: f32,
        g_weight: f32,
        b_weight: f32,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let weights = GrayscaleWeights::custom(r_weight, g_weight, b_weight);
        let gray = grayscale::rgb_to_grayscale_weighted(&to_image(image)?, weights)?;
        to_py(py, gray)
    }

    // ========================================================================
    // Color Adjustment
    // ========================================================================

    #[pyfunction]
    pub fn shift_image<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
        c: isize,
        v: f32,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let mut img = to_image(image)?;
        color_adjust::shift_image(&mut img, c, v);
        to_py(py, img)
    }

    #[pyfunction]
    pub fn scale_image<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
        c: isize,
        v: f32,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let mut img = to_image(image)?;
        color_adjust::scale_image(&mut img, c, v);
        to_py(py, img)
    }

    #[pyfunction]
    pub fn clamp_image<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let mut img = to_image(image)?;
        color_adjust::clamp_image(&mut img);
        to_py(py, img)
    }

    // ========================================================================
    // Color Science
    // ========================================================================

    #[pyfunction]
    pub fn rgb_to_hsv<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let mut img = to_image(image)?;
        color_science::rgb_to_hsv(&mut img)?;
        to_py(py, img)
    }

    #[pyfunction]
    pub fn hsv_to_rgb<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let mut img = to_image(image)?;
        color_science::hsv_to_rgb(&mut img)?;
        to_py(py, img)
    }

    /// Planar image extension module
    #[pymodule]
    pub fn planar_image(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Pixel access
        m.add_function(wrap_pyfunction!(get_pixel, m)?)?;
        m.add_function(wrap_pyfunction!(set_pixel, m)?)?;
        m.add_function(wrap_pyfunction!(copy_image, m)?)?;

        // Grayscale
        m.add_function(wrap_pyfunction!(rgb_to_grayscale, m)?)?;
        m.add_function(wrap_pyfunction!(rgb_to_grayscale_weighted, m)?)?;

        // Color adjustment
        m.add_function(wrap_pyfunction!(shift_image, m)?)?;
        m.add_function(wrap_pyfunction!(scale_image, m)?)?;
        m.add_function(wrap_pyfunction!(clamp_image, m)?)?;

        // Color science
        m.add_function(wrap_pyfunction!(rgb_to_hsv, m)?)?;
        m.add_function(wrap_pyfunction!(hsv_to_rgb, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::planar_image;

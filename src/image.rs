//! Owned channel-planar f32 image.
//!
//! Samples are stored plane by plane: every sample of channel 0 (row-major),
//! then every sample of channel 1, and so on. The sample for channel `c`,
//! column `x`, row `y` lives at `c * width * height + y * width + x`.
//!
//! This is exactly the standard (C-order) layout of an ndarray with shape
//! `(channels, height, width)`, which is what [`Image::view`] and
//! [`Image::from_array`] use for interop.
//!
//! ## Boundary policy
//!
//! - [`Image::get_pixel`] clamps each coordinate to the nearest edge
//!   (edge replication), so reads never fail.
//! - [`Image::set_pixel`] drops writes with any coordinate out of range.

use log::trace;
use ndarray::{Array3, ArrayView3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{ImageError, Result};

/// Linear index of `(c, x, y)` in a planar buffer of `width × height` planes.
#[inline]
fn planar_index(c: usize, x: usize, y: usize, width: usize, height: usize) -> usize {
    c * width * height + y * width + x
}

/// Clamp a signed coordinate into `[0, len - 1]`. `len` is never zero.
#[inline]
fn clamp_coord(v: isize, len: usize) -> usize {
    v.clamp(0, len as isize - 1) as usize
}

/// Checked conversion of a signed coordinate into `[0, len - 1]`.
#[inline]
fn checked_coord(v: isize, len: usize) -> Option<usize> {
    usize::try_from(v).ok().filter(|&v| v < len)
}

/// Channel-planar floating point image.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<f32>,
}

impl Image {
    /// Allocate a zero-filled image.
    ///
    /// # Errors
    /// [`ImageError::EmptyDimensions`] if any dimension is zero,
    /// [`ImageError::TooLarge`] if the sample count overflows.
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self> {
        let len = Self::sample_count(width, height, channels)?;
        Ok(Self {
            width,
            height,
            channels,
            data: vec![0.0; len],
        })
    }

    /// Wrap an existing planar sample buffer.
    ///
    /// # Errors
    /// [`ImageError::EmptyDimensions`] for a zero dimension,
    /// [`ImageError::TooLarge`] if the sample count overflows,
    /// [`ImageError::BufferLength`] if `data.len() != channels * width * height`.
    pub fn from_vec(width: usize, height: usize, channels: usize, data: Vec<f32>) -> Result<Self> {
        let expected = Self::sample_count(width, height, channels)?;
        if data.len() != expected {
            return Err(ImageError::BufferLength {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Build an image from an array of shape `(channels, height, width)`.
    ///
    /// Samples are read in logical order, so arrays with any memory layout
    /// (transposed, sliced) are accepted.
    pub fn from_array(array: Array3<f32>) -> Result<Self> {
        let (channels, height, width) = array.dim();
        let data = array.iter().copied().collect();
        Self::from_vec(width, height, channels, data)
    }

    /// Validate dimensions and return `channels * width * height`.
    ///
    /// The count is capped at `isize::MAX`, the largest `Vec` length, which
    /// also keeps every dimension representable as a signed coordinate.
    fn sample_count(width: usize, height: usize, channels: usize) -> Result<usize> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(ImageError::EmptyDimensions {
                width,
                height,
                channels,
            });
        }
        channels
            .checked_mul(width)
            .and_then(|n| n.checked_mul(height))
            .filter(|&n| n <= isize::MAX as usize)
            .ok_or(ImageError::TooLarge {
                width,
                height,
                channels,
            })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of channel planes
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of samples in one channel plane.
    #[inline]
    pub fn plane_len(&self) -> usize {
        self.width * self.height
    }

    /// All samples in planar order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// All samples in planar order, mutable.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Samples of channel `c`, or `None` if `c` is out of range.
    pub fn plane(&self, c: usize) -> Option<&[f32]> {
        if c >= self.channels {
            return None;
        }
        let n = self.plane_len();
        Some(&self.data[c * n..(c + 1) * n])
    }

    /// Mutable samples of channel `c`, or `None` if `c` is out of range.
    pub fn plane_mut(&mut self, c: usize) -> Option<&mut [f32]> {
        if c >= self.channels {
            return None;
        }
        let n = self.plane_len();
        Some(&mut self.data[c * n..(c + 1) * n])
    }

    /// Consume the image, returning the planar sample buffer.
    pub fn into_raw(self) -> Vec<f32> {
        self.data
    }

    /// Borrow the samples as an array of shape `(channels, height, width)`.
    pub fn view(&self) -> Result<ArrayView3<'_, f32>> {
        Ok(ArrayView3::from_shape(
            (self.channels, self.height, self.width),
            &self.data,
        )?)
    }

    /// Convert into an owned array of shape `(channels, height, width)`.
    pub fn into_array(self) -> Result<Array3<f32>> {
        Ok(Array3::from_shape_vec(
            (self.channels, self.height, self.width),
            self.data,
        )?)
    }

    /// Read the sample at `(x, y, c)` with clamp-to-edge.
    ///
    /// Each coordinate is clamped independently into its valid range, so
    /// `get_pixel(-3, y, c) == get_pixel(0, y, c)` and reads past the last
    /// column, row or channel return the last one.
    pub fn get_pixel(&self, x: isize, y: isize, c: isize) -> f32 {
        let x = clamp_coord(x, self.width);
        let y = clamp_coord(y, self.height);
        let c = clamp_coord(c, self.channels);
        self.data[planar_index(c, x, y, self.width, self.height)]
    }

    /// Write `v` at `(x, y, c)`.
    ///
    /// Writes with any coordinate out of range are dropped; nothing in the
    /// buffer changes.
    pub fn set_pixel(&mut self, x: isize, y: isize, c: isize, v: f32) {
        let (Some(xu), Some(yu), Some(cu)) = (
            checked_coord(x, self.width),
            checked_coord(y, self.height),
            checked_coord(c, self.channels),
        ) else {
            trace!(
                "set_pixel: ({x}, {y}, {c}) outside {}x{}x{}, dropped",
                self.width,
                self.height,
                self.channels
            );
            return;
        };
        let idx = planar_index(cu, xu, yu, self.width, self.height);
        self.data[idx] = v;
    }

    /// Deep copy with identical dimensions.
    pub fn copy_image(&self) -> Image {
        self.clone()
    }

    /// Fail with [`ImageError::InvalidChannelCount`] unless the image has
    /// exactly `expected` channels.
    pub(crate) fn require_channels(&self, expected: usize) -> Result<()> {
        if self.channels != expected {
            return Err(ImageError::InvalidChannelCount {
                expected,
                found: self.channels,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Loop drivers
// ============================================================================
//
// Every sample/pixel is visited by exactly one iteration, so the rayon and
// sequential variants produce identical results.

/// Replace every sample of `samples` with `f(sample)`.
pub(crate) fn map_samples<F>(samples: &mut [f32], f: F)
where
    F: Fn(f32) -> f32 + Sync + Send,
{
    #[cfg(feature = "parallel")]
    samples.par_iter_mut().for_each(|v| *v = f(*v));

    #[cfg(not(feature = "parallel"))]
    samples.iter_mut().for_each(|v| *v = f(*v));
}

/// Map every (ch0, ch1, ch2) pixel triple of a 3-channel image in place.
///
/// The three samples are read into locals before `f` runs, so `f` never
/// observes a partially written pixel.
pub(crate) fn map_pixels3<F>(image: &mut Image, f: F) -> Result<()>
where
    F: Fn(f32, f32, f32) -> (f32, f32, f32) + Sync + Send,
{
    image.require_channels(3)?;
    let n = image.plane_len();
    let (p0, rest) = image.data.split_at_mut(n);
    let (p1, p2) = rest.split_at_mut(n);

    let apply = |((a, b), c): ((&mut f32, &mut f32), &mut f32)| {
        let (na, nb, nc) = f(*a, *b, *c);
        *a = na;
        *b = nb;
        *c = nc;
    };

    #[cfg(feature = "parallel")]
    p0.par_iter_mut()
        .zip(p1.par_iter_mut())
        .zip(p2.par_iter_mut())
        .for_each(apply);

    #[cfg(not(feature = "parallel"))]
    p0.iter_mut().zip(p1.iter_mut()).zip(p2.iter_mut()).for_each(apply);

    Ok(())
}

/// Reduce every pixel of a 3-channel image to one sample of a new
/// single-channel image with the same width and height.
pub(crate) fn reduce_pixels3<F>(image: &Image, f: F) -> Result<Image>
where
    F: Fn(f32, f32, f32) -> f32 + Sync + Send,
{
    image.require_channels(3)?;
    let n = image.plane_len();
    let (p0, rest) = image.data.split_at(n);
    let (p1, p2) = rest.split_at(n);
    let mut output = Image::new(image.width, image.height, 1)?;

    let apply = |(((out, &a), &b), &c): (((&mut f32, &f32), &f32), &f32)| {
        *out = f(a, b, c);
    };

    #[cfg(feature = "parallel")]
    output
        .data
        .par_iter_mut()
        .zip(p0.par_iter())
        .zip(p1.par_iter())
        .zip(p2.par_iter())
        .for_each(apply);

    #[cfg(not(feature = "parallel"))]
    output
        .data
        .iter_mut()
        .zip(p0.iter())
        .zip(p1.iter())
        .zip(p2.iter())
        .for_each(apply);

    Ok(output)
}

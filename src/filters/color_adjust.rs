//! Per-channel value adjustments: Shift, Scale, Clamp.
//!
//! These are pixel-wise operations that don't require spatial context and
//! mutate the image in place. They treat samples as plain numbers, so they
//! apply equally to RGB, HSV or single-channel images.

use log::trace;

use crate::image::{map_samples, Image};

/// Resolve a signed channel index to its plane, or `None` if out of range.
fn channel_plane(image: &mut Image, c: isize) -> Option<&mut [f32]> {
    usize::try_from(c).ok().and_then(|c| image.plane_mut(c))
}

// ============================================================================
// Shift
// ============================================================================

/// Add `v` to every sample of channel `c`.
///
/// A channel index outside `[0, channels - 1]` is a silent no-op.
pub fn shift_image(image: &mut Image, c: isize, v: f32) {
    let channels = image.channels();
    match channel_plane(image, c) {
        Some(plane) => map_samples(plane, |s| s + v),
        None => trace!("shift_image: channel {c} outside 0..{channels}, ignored"),
    }
}

// ============================================================================
// Scale
// ============================================================================

/// Multiply every sample of channel `c` by `v`.
///
/// Same out-of-range rule as [`shift_image`]. After
/// [`rgb_to_hsv`](crate::filters::color_science::rgb_to_hsv), scaling
/// channel 1 adjusts saturation.
pub fn scale_image(image: &mut Image, c: isize, v: f32) {
    let channels = image.channels();
    match channel_plane(image, c) {
        Some(plane) => map_samples(plane, |s| s * v),
        None => trace!("scale_image: channel {c} outside 0..{channels}, ignored"),
    }
}

// ============================================================================
// Clamp
// ============================================================================

/// Saturate every sample into `[0.0, 1.0]`.
///
/// NaN samples become 0.0.
pub fn clamp_image(image: &mut Image) {
    map_samples(image.as_mut_slice(), |s| s.max(0.0).min(1.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_channel() -> Image {
        Image::from_vec(2, 1, 2, vec![0.1, 0.2, 0.3, 0.4]).unwrap()
    }

    #[test]
    fn test_shift_only_target_channel() {
        let mut img = two_channel();
        shift_image(&mut img, 1, 0.5);
        let expected = [0.1, 0.2, 0.8, 0.9];
        for (a, b) in img.as_slice().iter().zip(expected) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_shift_negative() {
        let mut img = two_channel();
        shift_image(&mut img, 0, -0.3);
        assert!((img.get_pixel(0, 0, 0) + 0.2).abs() < 1e-6);
        assert!((img.get_pixel(1, 0, 0) + 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_shift_out_of_range_channel_noop() {
        let mut img = two_channel();
        let before = img.clone();
        shift_image(&mut img, 2, 1.0);
        shift_image(&mut img, -1, 1.0);
        assert_eq!(img, before);
    }

    #[test]
    fn test_scale_channel() {
        let mut img = two_channel();
        scale_image(&mut img, 0, 2.0);
        assert!((img.get_pixel(0, 0, 0) - 0.2).abs() < 1e-6);
        assert!((img.get_pixel(1, 0, 0) - 0.4).abs() < 1e-6);
        assert!((img.get_pixel(0, 0, 1) - 0.3).abs() < 1e-6);

        let before = img.clone();
        scale_image(&mut img, 5, 0.0);
        assert_eq!(img, before);
    }

    #[test]
    fn test_clamp_saturates() {
        let mut img = Image::from_vec(2, 2, 1, vec![-0.5, 1.7, 0.25, 1.0]).unwrap();
        clamp_image(&mut img);
        assert_eq!(img.as_slice(), &[0.0, 1.0, 0.25, 1.0]);
    }

    #[test]
    fn test_clamp_idempotent() {
        let mut once = Image::from_vec(3, 1, 2, vec![-3.0, 0.0, 0.5, 1.0, 2.0, 0.999]).unwrap();
        clamp_image(&mut once);
        let mut twice = once.clone();
        clamp_image(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clamp_nan_to_zero() {
        let mut img = Image::from_vec(1, 1, 1, vec![f32::NAN]).unwrap();
        clamp_image(&mut img);
        assert_eq!(img.get_pixel(0, 0, 0), 0.0);
    }
}

//! RGB <-> HSV color space conversion.
//!
//! Both conversions run in place on a 3-channel image: channels 0/1/2 hold
//! R/G/B before [`rgb_to_hsv`] and H/S/V after it, all in 0.0-1.0 (hue is a
//! fraction of a full turn, not degrees).
//!
//! When several channels share the maximum, the hue formula is picked with
//! priority R > G > B. [`hsv_to_rgb_pixel`] uses the same sector convention,
//! so `hsv_to_rgb(rgb_to_hsv(im))` reproduces `im` for RGB values in 0.0-1.0.

use log::debug;

use crate::error::Result;
use crate::image::{map_pixels3, Image};

// ============================================================================
// Pixel Conversion Utilities
// ============================================================================

/// Largest of three values.
#[inline]
pub fn three_way_max(a: f32, b: f32, c: f32) -> f32 {
    if a > b {
        if a > c { a } else { c }
    } else if b > c {
        b
    } else {
        c
    }
}

/// Smallest of three values.
#[inline]
pub fn three_way_min(a: f32, b: f32, c: f32) -> f32 {
    if a < b {
        if a < c { a } else { c }
    } else if b < c {
        b
    } else {
        c
    }
}

/// Convert one RGB pixel to HSV.
/// Input: r, g, b in 0.0-1.0
/// Output: (h, s, v) in 0.0-1.0, h in [0, 1)
#[inline]
pub fn rgb_to_hsv_pixel(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = three_way_max(r, g, b);
    let min = three_way_min(r, g, b);
    let chroma = max - min;
    let v = max;

    let s = if v != 0.0 { chroma / v } else { 0.0 };

    if chroma == 0.0 {
        return (0.0, s, v);
    }

    let h_prime = if v == r {
        (g - b) / chroma
    } else if v == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    let mut h = h_prime / 6.0;
    if h < 0.0 {
        h += 1.0;
    }

    (h, s, v)
}

/// Convert one HSV pixel to RGB.
/// Input: h, s, v in 0.0-1.0 (h wraps, so 1.0 is the same hue as 0.0)
/// Output: (r, g, b) in 0.0-1.0
#[inline]
pub fn hsv_to_rgb_pixel(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let chroma = s * v;
    let max = v;
    let min = v - chroma;

    let h6 = h * 6.0;
    let x = chroma * (1.0 - (h6.rem_euclid(2.0) - 1.0).abs());
    let mid = x + min;

    match h6.floor().rem_euclid(6.0) as u8 {
        0 => (max, mid, min),
        1 => (mid, max, min),
        2 => (min, max, mid),
        3 => (min, mid, max),
        4 => (mid, min, max),
        _ => (max, min, mid),
    }
}

// ============================================================================
// Image Conversion
// ============================================================================

/// Convert an RGB image to HSV in place.
///
/// # Errors
/// [`ImageError::InvalidChannelCount`](crate::ImageError::InvalidChannelCount)
/// unless the image has exactly 3 channels; the image is left untouched.
pub fn rgb_to_hsv(image: &mut Image) -> Result<()> {
    debug!("rgb_to_hsv: {}x{}", image.width(), image.height());
    map_pixels3(image, rgb_to_hsv_pixel)
}

/// Convert an HSV image back to RGB in place.
///
/// # Errors
/// [`ImageError::InvalidChannelCount`](crate::ImageError::InvalidChannelCount)
/// unless the image has exactly 3 channels; the image is left untouched.
pub fn hsv_to_rgb(image: &mut Image) -> Result<()> {
    debug!("hsv_to_rgb: {}x{}", image.width(), image.height());
    map_pixels3(image, hsv_to_rgb_pixel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImageError;

    fn assert_triple(actual: (f32, f32, f32), expected: (f32, f32, f32)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-5
                && (actual.1 - expected.1).abs() < 1e-5
                && (actual.2 - expected.2).abs() < 1e-5,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_three_way() {
        assert_eq!(three_way_max(0.1, 0.9, 0.5), 0.9);
        assert_eq!(three_way_max(0.1, 0.2, 0.5), 0.5);
        assert_eq!(three_way_min(0.4, 0.9, 0.5), 0.4);
        assert_eq!(three_way_min(0.4, 0.3, 0.1), 0.1);
    }

    #[test]
    fn test_achromatic() {
        assert_triple(rgb_to_hsv_pixel(0.5, 0.5, 0.5), (0.0, 0.0, 0.5));
    }

    #[test]
    fn test_black() {
        assert_triple(rgb_to_hsv_pixel(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_primaries() {
        assert_triple(rgb_to_hsv_pixel(1.0, 0.0, 0.0), (0.0, 1.0, 1.0));
        assert_triple(rgb_to_hsv_pixel(0.0, 1.0, 0.0), (1.0 / 3.0, 1.0, 1.0));
        assert_triple(rgb_to_hsv_pixel(0.0, 0.0, 1.0), (2.0 / 3.0, 1.0, 1.0));
    }

    #[test]
    fn test_hue_wraps_negative() {
        // Magenta-red: max = R, G < B gives a negative h' that wraps into [0, 1)
        let (h, s, v) = rgb_to_hsv_pixel(1.0, 0.0, 0.5);
        assert!((h - 11.0 / 12.0).abs() < 1e-5);
        assert!((s - 1.0).abs() < 1e-6);
        assert!((v - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_tie_prefers_red_then_green() {
        // R == G == max: red branch, h' = (G - B) / C = 1 -> h = 1/6 (yellow)
        assert_triple(rgb_to_hsv_pixel(1.0, 1.0, 0.0), (1.0 / 6.0, 1.0, 1.0));
        // G == B == max: green branch, h' = (B - R) / C + 2 = 3 -> h = 1/2 (cyan)
        assert_triple(rgb_to_hsv_pixel(0.0, 1.0, 1.0), (0.5, 1.0, 1.0));
    }

    #[test]
    fn test_hsv_to_rgb_sectors() {
        assert_triple(hsv_to_rgb_pixel(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_triple(hsv_to_rgb_pixel(1.0 / 6.0, 1.0, 1.0), (1.0, 1.0, 0.0));
        assert_triple(hsv_to_rgb_pixel(1.0 / 3.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_triple(hsv_to_rgb_pixel(0.5, 1.0, 1.0), (0.0, 1.0, 1.0));
        assert_triple(hsv_to_rgb_pixel(2.0 / 3.0, 1.0, 1.0), (0.0, 0.0, 1.0));
        assert_triple(hsv_to_rgb_pixel(5.0 / 6.0, 1.0, 1.0), (1.0, 0.0, 1.0));
        // h = 1.0 is a full turn
        assert_triple(hsv_to_rgb_pixel(1.0, 1.0, 1.0), (1.0, 0.0, 0.0));
    }

    #[test]
    fn test_hsv_to_rgb_gray() {
        assert_triple(hsv_to_rgb_pixel(0.7, 0.0, 0.25), (0.25, 0.25, 0.25));
    }

    #[test]
    fn test_pixel_roundtrip() {
        let samples = [
            (0.8, 0.4, 0.2),
            (0.2, 0.4, 0.6),
            (1.0, 0.0, 0.5),
            (0.1, 0.9, 0.3),
            (0.33, 0.33, 0.9),
            (0.0, 0.0, 0.0),
            (1.0, 1.0, 1.0),
            (0.25, 0.75, 0.75),
        ];
        for (r, g, b) in samples {
            let (h, s, v) = rgb_to_hsv_pixel(r, g, b);
            assert_triple(hsv_to_rgb_pixel(h, s, v), (r, g, b));
        }
    }

    #[test]
    fn test_image_roundtrip_in_place() {
        let data = vec![
            0.9, 0.1, 0.5, 0.0, // R plane
            0.2, 0.6, 0.5, 0.0, // G plane
            0.4, 0.3, 0.5, 1.0, // B plane
        ];
        let original = Image::from_vec(2, 2, 3, data).unwrap();
        let mut img = original.clone();

        rgb_to_hsv(&mut img).unwrap();
        // (0.5, 0.5, 0.5) at x=0, y=1 is achromatic
        assert!((img.get_pixel(0, 1, 0)).abs() < 1e-6);
        assert!((img.get_pixel(0, 1, 1)).abs() < 1e-6);
        assert!((img.get_pixel(0, 1, 2) - 0.5).abs() < 1e-6);

        hsv_to_rgb(&mut img).unwrap();
        for (a, b) in img.as_slice().iter().zip(original.as_slice()) {
            assert!((a - b).abs() < 1e-5, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_conversion_requires_rgb() {
        let mut img = Image::new(2, 2, 4).unwrap();
        img.set_pixel(0, 0, 0, 0.7);
        let before = img.clone();

        assert!(matches!(
            rgb_to_hsv(&mut img),
            Err(ImageError::InvalidChannelCount {
                expected: 3,
                found: 4
            })
        ));
        assert!(hsv_to_rgb(&mut img).is_err());
        assert_eq!(img, before);
    }
}

//! Grayscale reduction.
//!
//! Reduces a 3-channel RGB image to a new single-channel luminance image of
//! the same width and height. The default weights are the ITU-R BT.601 luma
//! coefficients (0.299, 0.587, 0.114).

use log::debug;

use crate::error::Result;
use crate::image::{reduce_pixels3, Image};

/// ITU-R BT.601 luma coefficients
pub const LUMA_R: f32 = 0.299;
pub const LUMA_G: f32 = 0.587;
pub const LUMA_B: f32 = 0.114;

/// RGB channel weights for grayscale conversion.
/// Default uses BT.601 coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrayscaleWeights {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for GrayscaleWeights {
    fn default() -> Self {
        Self {
            r: LUMA_R,
            g: LUMA_G,
            b: LUMA_B,
        }
    }
}

impl GrayscaleWeights {
    /// ITU-R BT.709 coefficients (HDTV / sRGB primaries)
    pub const BT709: Self = Self {
        r: 0.2126,
        g: 0.7152,
        b: 0.0722,
    };

    /// Custom weights, normalized to sum to 1.0.
    ///
    /// Falls back to the default weights if the sum is not positive.
    pub fn custom(r: f32, g: f32, b: f32) -> Self {
        let sum = r + g + b;
        if sum > 0.0 {
            Self {
                r: r / sum,
                g: g / sum,
                b: b / sum,
            }
        } else {
            Self::default()
        }
    }

    #[inline]
    fn apply(&self, r: f32, g: f32, b: f32) -> f32 {
        self.r * r + self.g * g + self.b * b
    }
}

/// Convert an RGB image to grayscale with BT.601 luma weights.
///
/// # Errors
/// [`ImageError::InvalidChannelCount`](crate::ImageError::InvalidChannelCount)
/// unless the input has exactly 3 channels.
pub fn rgb_to_grayscale(image: &Image) -> Result<Image> {
    rgb_to_grayscale_weighted(image, GrayscaleWeights::default())
}

/// Convert an RGB image to grayscale with custom channel weights.
///
/// Weights are used as given; use [`GrayscaleWeights::custom`] to normalize.
pub fn rgb_to_grayscale_weighted(image: &Image, weights: GrayscaleWeights) -> Result<Image> {
    debug!(
        "rgb_to_grayscale: {}x{}, weights {:?}",
        image.width(),
        image.height(),
        weights
    );
    reduce_pixels3(image, |r, g, b| weights.apply(r, g, b))
}

//! Pixel operations on planar [`Image`](crate::Image)s.
//!
//! ## Supported Formats
//!
//! | Operation | Channels | Mode |
//! |-----------|----------|------|
//! | `rgb_to_grayscale` | 3 | New 1-channel image |
//! | `shift_image`, `scale_image` | any | In place, one channel |
//! | `clamp_image` | any | In place, all channels |
//! | `rgb_to_hsv`, `hsv_to_rgb` | 3 | In place |
//!
//! ## Architecture
//!
//! - **Planar** - loops run over whole channel planes, never over
//!   interleaved pixels
//! - **Explicit preconditions** - RGB-only operations return
//!   `InvalidChannelCount` instead of producing wrong-shaped output
//! - **Thread-safe** - per-sample loops use rayon when the `parallel`
//!   feature is enabled

pub mod color_adjust;
pub mod color_science;
pub mod grayscale;

pub use color_adjust::{clamp_image, scale_image, shift_image};
pub use color_science::{hsv_to_rgb, hsv_to_rgb_pixel, rgb_to_hsv, rgb_to_hsv_pixel};
pub use grayscale::{rgb_to_grayscale, rgb_to_grayscale_weighted, GrayscaleWeights};

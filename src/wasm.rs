//! WebAssembly exports for planar image operations.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! All functions take a flat planar `Float32Array` (every sample of channel 0,
//! then channel 1, ...) and return a new one. Invalid dimensions are reported
//! as a thrown JS error.

use wasm_bindgen::prelude::*;

use crate::error::ImageError;
use crate::filters::{color_adjust, color_science, grayscale};
use crate::image::Image;

fn to_js(err: ImageError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn load(data: &[f32], width: usize, height: usize, channels: usize) -> Result<Image, JsValue> {
    Image::from_vec(width, height, channels, data.to_vec()).map_err(to_js)
}

// ============================================================================
// Pixel Access
// ============================================================================

/// Read a sample with clamp-to-edge coordinates.
#[wasm_bindgen]
pub fn get_pixel_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    channels: usize,
    x: isize,
    y: isize,
    c: isize,
) -> Result<f32, JsValue> {
    Ok(load(data, width, height, channels)?.get_pixel(x, y, c))
}

/// Return a copy with one sample replaced; out-of-range writes are dropped.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn set_pixel_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    channels: usize,
    x: isize,
    y: isize,
    c: isize,
    v: f32,
) -> Result<Vec<f32>, JsValue> {
    let mut img = load(data, width, height, channels)?;
    img.set_pixel(x, y, c, v);
    Ok(img.into_raw())
}

// ============================================================================
// Grayscale
// ============================================================================

/// Reduce a 3-plane RGB buffer to a single luminance plane (BT.601).
///
/// # Arguments
/// * `data` - Flat planar RGB floats (length = width * height * 3)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
/// Flat array of width * height luminance values
#[wasm_bindgen]
pub fn rgb_to_grayscale_wasm(data: &[f32], width: usize, height: usize) -> Result<Vec<f32>, JsValue> {
    let img = load(data, width, height, 3)?;
    let gray = grayscale::rgb_to_grayscale(&img).map_err(to_js)?;
    Ok(gray.into_raw())
}

// ============================================================================
// Color Adjustment
// ============================================================================

#[wasm_bindgen]
pub fn shift_image_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    channels: usize,
    c: isize,
    v: f32,
) -> Result<Vec<f32>, JsValue> {
    let mut img = load(data, width, height, channels)?;
    color_adjust::shift_image(&mut img, c, v);
    Ok(img.into_raw())
}

#[wasm_bindgen]
pub fn scale_image_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    channels: usize,
    c: isize,
    v: f32,
) -> Result<Vec<f32>, JsValue> {
    let mut img = load(data, width, height, channels)?;
    color_adjust::scale_image(&mut img, c, v);
    Ok(img.into_raw())
}

#[wasm_bindgen]
pub fn clamp_image_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<Vec<f32>, JsValue> {
    let mut img = load(data, width, height, channels)?;
    color_adjust::clamp_image(&mut img);
    Ok(img.into_raw())
}

// ============================================================================
// Color Science
// ============================================================================

/// Convert a 3-plane RGB buffer to HSV (all components 0.0-1.0).
#[wasm_bindgen]
pub fn rgb_to_hsv_wasm(data: &[f32], width: usize, height: usize) -> Result<Vec<f32>, JsValue> {
    let mut img = load(data, width, height, 3)?;
    color_science::rgb_to_hsv(&mut img).map_err(to_js)?;
    Ok(img.into_raw())
}

/// Convert a 3-plane HSV buffer back to RGB.
#[wasm_bindgen]
pub fn hsv_to_rgb_wasm(data: &[f32], width: usize, height: usize) -> Result<Vec<f32>, JsValue> {
    let mut img = load(data, width, height, 3)?;
    color_science::hsv_to_rgb(&mut img).map_err(to_js)?;
    Ok(img.into_raw())
}

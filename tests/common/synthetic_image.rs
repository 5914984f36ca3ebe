use planar_image::Image;

/// Generates a 3-channel RGB gradient: R ramps along x, G ramps along y,
/// B is the inverse of their mean. All values stay within 0.0-1.0.
pub fn rgb_gradient(width: usize, height: usize) -> Image {
    assert!(width > 1 && height > 1, "gradient needs at least 2x2 pixels");

    let mut img = Image::new(width, height, 3).expect("positive dimensions");
    for y in 0..height {
        for x in 0..width {
            let r = x as f32 / (width - 1) as f32;
            let g = y as f32 / (height - 1) as f32;
            let b = 1.0 - 0.5 * (r + g);
            img.set_pixel(x as isize, y as isize, 0, r);
            img.set_pixel(x as isize, y as isize, 1, g);
            img.set_pixel(x as isize, y as isize, 2, b);
        }
    }
    img
}

/// Single RGB pixel.
pub fn rgb_pixel(r: f32, g: f32, b: f32) -> Image {
    Image::from_vec(1, 1, 3, vec![r, g, b]).expect("1x1 RGB buffer")
}

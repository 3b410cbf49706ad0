use pixel_stamp::{Pixel, PixelBuffer};

/// Generates a two-color checkerboard image.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> PixelBuffer {
    assert!(cell > 0, "cell size must be positive");

    let dark = Pixel::new(32, 32, 48);
    let light = Pixel::new(220, 210, 200);
    let mut img = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            img.set(y, x, if sum & 1 == 0 { dark } else { light });
        }
    }
    img
}

/// Every pixel distinct per (row, col) for images up to 256×256.
pub fn coordinates(width: usize, height: usize) -> PixelBuffer {
    let mut img = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set(y, x, Pixel::new(y as u8, x as u8, ((x + y) % 7) as u8));
        }
    }
    img
}

//! Shared fixtures for unit tests.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::decode::DecodedImage;

/// Leading bytes of a BMP file: recognized, but not an accepted format.
pub(crate) const BMP_HEADER: &[u8] = b"BM\x3a\x00\x00\x00\x00\x00\x00\x00\x36\x00\x00\x00";

/// Encode a solid-color image in the given format.
pub(crate) fn encoded(width: u32, height: u32, color: [u8; 4], format: ImageFormat) -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color)));
    let img = if format == ImageFormat::Jpeg {
        DynamicImage::ImageRgb8(img.into_rgb8())
    } else {
        img
    };
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, format).unwrap();
    buffer.into_inner()
}

/// Solid-color decoded image.
pub(crate) fn solid(width: u32, height: u32, color: [u8; 4]) -> DecodedImage {
    DecodedImage::from_rgba_image(RgbaImage::from_pixel(width, height, Rgba(color)))
}

/// Image whose pixels all differ, so any resampling or shift is visible.
pub(crate) fn gradient(width: u32, height: u32) -> DecodedImage {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
            255,
        ])
    });
    DecodedImage::from_rgba_image(img)
}

/// RGBA value at `(x, y)`.
pub(crate) fn pixel_at(img: &DecodedImage, x: u32, y: u32) -> [u8; 4] {
    let idx = ((y as usize) * (img.width as usize) + x as usize) * 4;
    [
        img.pixels[idx],
        img.pixels[idx + 1],
        img.pixels[idx + 2],
        img.pixels[idx + 3],
    ]
}

use image::{ImageFormat, Rgb, RgbImage};
use std::fs;
use std::path::Path;

// A solid BMP stores raw pixels, so a JPEG re-encode saves well over 90%.
pub fn write_solid_bmp(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_pixel(width, height, Rgb([200, 30, 30]));
    img.save_with_format(path, ImageFormat::Bmp).unwrap();
}

// A tiny solid PNG is smaller than any JPEG rendition of itself.
pub fn write_tiny_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_pixel(width, height, Rgb([30, 200, 30]));
    img.save_with_format(path, ImageFormat::Png).unwrap();
}

pub fn write_corrupt_image(path: &Path) {
    fs::write(path, b"these bytes decode as no image format").unwrap();
}

//! Output scaling for annotated maps.

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Resize an image to the given width, keeping the aspect ratio.
///
/// The height is `height * width / original_width` truncated, with a
/// floor of one pixel so extreme ratios never produce an empty image.
/// Returns a plain copy when the image is already the requested width.
pub fn resize_to_width(image: &RgbaImage, width: u32) -> RgbaImage {
    if image.width() == width {
        return image.clone();
    }

    let height = (image.height() as u64 * width as u64 / image.width() as u64).max(1) as u32;
    imageops::resize(image, width, height, FilterType::CatmullRom)
}

//! Scaling input images to the resolution a descriptor is configured for.
//!
//! Resampling uses the Lanczos3 filter from `image::imageops`. Nearest
//! neighbour sampling would introduce spurious high-frequency gradients.

use crate::definitions::Image;
use crate::error::{HogError, Result};
use image::imageops::{self, FilterType};
use image::{GenericImageView, Pixel};

/// Resizes `image` to exactly `width` x `height` pixels.
///
/// An image that already has the target dimensions is copied unchanged.
/// Returns [`HogError::EmptyImage`] if the input has zero width or height.
pub fn resize_to<I>(image: &I, width: u32, height: u32) -> Result<Image<I::Pixel>>
where
    I: GenericImageView,
    I::Pixel: 'static,
    <I::Pixel as Pixel>::Subpixel: 'static,
{
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return Err(HogError::EmptyImage {
            width: w,
            height: h,
        });
    }

    if (w, h) == (width, height) {
        log::debug!("input already {}x{}, skipping resize", w, h);
        return Ok(Image::from_fn(w, h, |x, y| image.get_pixel(x, y)));
    }

    log::debug!("resizing {}x{} image to {}x{}", w, h, width, height);
    Ok(imageops::resize(image, width, height, FilterType::Lanczos3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{gray_bench_image, rgb_bench_image, vertical_edge_image};
    use image::{GrayImage, Luma};

    #[test]
    fn test_resize_matching_dimensions_is_identity() {
        let image = gray_bench_image(30, 60);
        let resized = resize_to(&image, 30, 60).unwrap();
        assert_pixels_eq!(resized, image);
    }

    #[test]
    fn test_resize_produces_target_dimensions() {
        let image = rgb_bench_image(47, 13);
        let resized = resize_to(&image, 30, 60).unwrap();
        assert_eq!(resized.dimensions(), (30, 60));
    }

    #[test]
    fn test_resize_smooths_sharp_edge() {
        let image = vertical_edge_image(61, 8, 30, 0, 255);
        let resized = resize_to(&image, 15, 4).unwrap();
        // Nearest neighbour sampling would only ever produce 0 or 255.
        assert!(resized.pixels().any(|p| p[0] > 0 && p[0] < 255));
    }

    #[test]
    fn test_resize_uses_lanczos3() {
        let image = rgb_bench_image(47, 13);
        let expected = imageops::resize(&image, 30, 60, FilterType::Lanczos3);
        let nearest = imageops::resize(&image, 30, 60, FilterType::Nearest);
        let resized = resize_to(&image, 30, 60).unwrap();
        assert_pixels_eq!(resized, expected);
        assert_ne!(resized, nearest);
    }

    #[test]
    fn test_resize_constant_image_stays_constant() {
        let image = GrayImage::from_pixel(90, 120, Luma([77u8]));
        let resized = resize_to(&image, 30, 60).unwrap();
        assert!(resized.pixels().all(|p| p[0] == 77));
    }

    #[test]
    fn test_resize_rejects_empty_image() {
        let image = GrayImage::new(0, 12);
        match resize_to(&image, 30, 60) {
            Err(HogError::EmptyImage { width, height }) => assert_eq!((width, height), (0, 12)),
            other => panic!("expected EmptyImage, got {:?}", other.map(|i| i.dimensions())),
        }
    }
}

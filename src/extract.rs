//! End-to-end extraction: resize, grayscale conversion and descriptor
//! computation for images of any size and pixel type.

use crate::error::Result;
use crate::grayscale::to_gray;
use crate::hog::{hog_impl, HogOptions, HogSpec};
use crate::resize::resize_to;
use image::{GenericImageView, Pixel};

/// Computes HoG descriptors for a fixed configuration.
///
/// The configuration is validated once, when the extractor is built. Each
/// call to [`extract`](HogExtractor::extract) is independent, so one
/// extractor can be shared between threads.
///
/// # Examples
/// ```
/// use hogproc::extract::HogExtractor;
/// use hogproc::hog::HogOptions;
/// use image::{Rgb, RgbImage};
///
/// let extractor = HogExtractor::new(HogOptions::default()).unwrap();
/// let image = RgbImage::from_fn(64, 128, |x, _| Rgb([(x * 4) as u8, 0, 0]));
/// let descriptor = extractor.extract(&image).unwrap();
/// assert_eq!(descriptor.len(), extractor.descriptor_length());
/// assert_eq!(descriptor.len(), 3240);
/// ```
#[derive(Debug, Clone)]
pub struct HogExtractor {
    spec: HogSpec,
}

impl HogExtractor {
    /// Validates `options`, returning a configuration error if the resize
    /// target cannot be split into whole cells and blocks.
    pub fn new(options: HogOptions) -> Result<HogExtractor> {
        let spec = HogSpec::from_options(options)?;
        log::debug!(
            "HoG extractor: {}x{} px, {}x{} cells, {}x{} blocks, {} bins of {} deg, descriptor length {}",
            options.width,
            options.height,
            spec.cells_wide(),
            spec.cells_high(),
            spec.blocks_wide(),
            spec.blocks_high(),
            options.orientations,
            options.bin_width(),
            spec.descriptor_length()
        );
        Ok(HogExtractor { spec })
    }

    /// The validated geometry used by this extractor.
    pub fn spec(&self) -> &HogSpec {
        &self.spec
    }

    /// Length of every descriptor this extractor produces.
    pub fn descriptor_length(&self) -> usize {
        self.spec.descriptor_length()
    }

    /// Computes the descriptor of `image`.
    ///
    /// Fails only if the image is empty.
    pub fn extract<I>(&self, image: &I) -> Result<Vec<f64>>
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8> + 'static,
    {
        let options = self.spec.options();
        let resized = resize_to(image, options.width, options.height)?;
        log::debug!("converting to grayscale ({:?})", options.luma);
        let gray = to_gray(&resized, options.luma);
        Ok(hog_impl(&gray, &self.spec))
    }

    /// Computes the descriptors of several images, in input order.
    ///
    /// With the `rayon` feature enabled images are processed in parallel.
    pub fn extract_all<I>(&self, images: &[I]) -> Vec<Result<Vec<f64>>>
    where
        I: GenericImageView + Sync,
        I::Pixel: Pixel<Subpixel = u8> + 'static,
    {
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            images.par_iter().map(|image| self.extract(image)).collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            images.iter().map(|image| self.extract(image)).collect()
        }
    }
}

/// Computes the descriptor of `image` with the given options.
///
/// Equivalent to building a [`HogExtractor`] and calling `extract` once.
pub fn extract_hog<I>(image: &I, options: HogOptions) -> Result<Vec<f64>>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8> + 'static,
{
    HogExtractor::new(options)?.extract(image)
}

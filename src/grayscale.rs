//! Conversion of colour images to 8-bit luminance.

use image::{GenericImageView, GrayImage, Luma, Pixel};
use serde::Deserialize;

/// Weights used to combine red, green and blue into luminance.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LumaWeights {
    /// ITU-R BT.601: `0.299 R + 0.587 G + 0.114 B`.
    #[default]
    Rec601,
    /// ITU-R BT.709, as used by `image`'s own `to_luma` conversions.
    Rec709,
}

impl LumaWeights {
    /// Luminance of a single pixel. Alpha is ignored.
    pub fn luma<P>(self, pixel: &P) -> u8
    where
        P: Pixel<Subpixel = u8>,
    {
        match self {
            LumaWeights::Rec601 => {
                let [r, g, b] = pixel.to_rgb().0;
                let y = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
                y.round().clamp(0.0, 255.0) as u8
            }
            LumaWeights::Rec709 => pixel.to_luma()[0],
        }
    }
}

/// Maps every pixel of `image` to its luminance. Output dimensions equal
/// input dimensions.
pub fn to_gray<I>(image: &I, weights: LumaWeights) -> GrayImage
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    GrayImage::from_fn(width, height, |x, y| {
        Luma([weights.luma(&image.get_pixel(x, y))])
    })
}

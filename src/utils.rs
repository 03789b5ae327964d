//! Utils for testing and debugging.

use image::{GrayImage, Luma, Rgb, RgbImage};
use std::cmp;

/// Helper for defining greyscale images.
///
/// Columns are separated by commas and rows by semi-colons.
/// By default a subpixel type of `u8` is used but this can be
/// overridden, as shown in the examples.
///
/// # Examples
/// ```
/// # extern crate image;
/// # #[macro_use]
/// # extern crate hogproc;
/// # fn main() {
/// use image::{GrayImage, ImageBuffer, Luma};
///
/// // An empty grayscale image with pixel type Luma<u8>
/// let image = gray_image!();
/// assert_eq!(image.dimensions(), (0, 0));
///
/// // A grayscale image with 2 rows and 3 columns
/// let image = gray_image!(
///     1, 2, 3;
///     4, 5, 6);
///
/// let equivalent = GrayImage::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(image, equivalent);
///
/// // A grayscale image with pixel type Luma<i16>
/// let image = gray_image!(type: i16,
///     -1, 0;
///      1, 2);
///
/// let equivalent = ImageBuffer::<Luma<i16>, Vec<i16>>::from_raw(2, 2, vec![-1, 0, 1, 2]).unwrap();
/// assert_eq!(image, equivalent);
/// # }
/// ```
#[macro_export]
macro_rules! gray_image {
    () => {
        $crate::gray_image!(type: u8)
    };
    (type: $channel_type:ty) => {
        ::image::ImageBuffer::<::image::Luma<$channel_type>, Vec<$channel_type>>::new(0, 0)
    };
    ($( $( $x: expr ),*);*) => {
        $crate::gray_image!(type: u8, $( $( $x ),*);*)
    };
    (type: $channel_type:ty, $( $( $x: expr ),*);*) => {{
        let nested_array = [ $( [ $($x),* ] ),* ];
        let height = nested_array.len() as u32;
        let width = nested_array[0].len() as u32;
        let flat_array: Vec<$channel_type> = nested_array
            .iter()
            .flat_map(|row| row.iter().copied())
            .collect();
        ::image::ImageBuffer::<::image::Luma<$channel_type>, Vec<$channel_type>>::from_raw(
            width,
            height,
            flat_array,
        )
        .unwrap()
    }};
}

/// Panics if any pixels differ between the two input images.
#[macro_export]
macro_rules! assert_pixels_eq {
    ($actual:expr, $expected:expr) => {{
        let actual_dim = $actual.dimensions();
        let expected_dim = $expected.dimensions();

        if actual_dim != expected_dim {
            panic!(
                "dimensions do not match. actual: {:?}, expected: {:?}",
                actual_dim, expected_dim
            )
        }

        // ImageBuffer defines its own pixels method with a different signature,
        // so go through the trait to get coordinates alongside values.
        let diffs = ::image::GenericImageView::pixels(&$actual)
            .zip(::image::GenericImageView::pixels(&$expected))
            .filter(|&(p, q)| p != q)
            .collect::<Vec<_>>();

        if !diffs.is_empty() {
            let diff_messages = diffs
                .iter()
                .take(5)
                .map(|d| format!("\nactual: {:?}, expected {:?} ", d.0, d.1))
                .collect::<Vec<_>>()
                .join("");

            panic!("pixels do not match. {}", diff_messages)
        }
    }};
}

/// Gray image to use in benchmarks. This is neither noise nor
/// similar to natural images - it's just a convenience method
/// to produce an image that's not constant.
pub fn gray_bench_image(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| Luma([(x % 7 + y % 6) as u8]))
}

/// RGB image to use in benchmarks. See comment on `gray_bench_image`.
pub fn rgb_bench_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let r = (x % 7 + y % 6) as u8;
        let g = 255u8 - r;
        let b = cmp::min(r, g);
        Rgb([r, g, b])
    })
}

/// Image whose left `edge` columns are `low` and remaining columns `high`.
pub fn vertical_edge_image(width: u32, height: u32, edge: u32, low: u8, high: u8) -> GrayImage {
    GrayImage::from_fn(width, height, |x, _| Luma([if x < edge { low } else { high }]))
}

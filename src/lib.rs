//! Histogram of oriented gradients (HoG) descriptors built on the
//! [image] crate.
//!
//! An input image of any size is resized to a fixed resolution, converted to
//! grayscale, and summarised as a fixed-length vector of block-normalised
//! orientation histograms. Descriptors computed with the same [`HogOptions`]
//! always have the same length and layout, so they can be compared or fed to
//! a classifier directly.
//!
//! ```
//! use hogproc::{HogExtractor, HogOptions};
//! use image::GrayImage;
//!
//! let extractor = HogExtractor::new(HogOptions::default()).unwrap();
//! let descriptor = extractor.extract(&GrayImage::new(30, 60)).unwrap();
//! assert_eq!(descriptor.len(), 3240);
//! ```
//!
//! Decoding images from disk is left to the `image` crate.
//!
//! [image]: https://github.com/image-rs/image
#![deny(missing_docs)]
#![allow(clippy::needless_range_loop, clippy::many_single_char_names)]

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

#[macro_use]
pub mod utils;
pub mod definitions;
pub mod error;
pub mod extract;
pub mod gradients;
pub mod grayscale;
pub mod hog;
pub mod math;
pub mod multiarray;
#[cfg(test)]
mod proptest_utils;
pub mod resize;

pub use crate::error::{HogError, Result};
pub use crate::extract::{extract_hog, HogExtractor};
pub use crate::hog::{HogOptions, HogSpec};

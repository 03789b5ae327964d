//! Type aliases shared across stages.

use image::{ImageBuffer, Pixel};

/// An `ImageBuffer` containing pixels of type `P` with storage `Vec<P::Subpixel>`.
/// Most operations in this library only support inputs of this type.
pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

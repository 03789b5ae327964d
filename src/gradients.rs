//! Functions for computing gradients of image intensities.
//!
//! Gradients are central differences `I(x + 1) - I(x - 1)`, falling back to a
//! one-sided difference against the single neighbour at the image border.

use crate::multiarray::Array2d;
use image::GrayImage;
use std::f64::consts::PI;

/// Per-pixel gradient magnitude and unsigned orientation of a grayscale image.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientField {
    /// Euclidean norm of the gradient vector.
    pub magnitude: Array2d<f64>,
    /// Orientation in degrees, in `[0, 180)`.
    pub orientation: Array2d<f64>,
}

impl GradientField {
    /// Width of the field in pixels.
    pub fn width(&self) -> usize {
        self.magnitude.width()
    }

    /// Height of the field in pixels.
    pub fn height(&self) -> usize {
        self.magnitude.height()
    }
}

/// Computes gradient magnitude and orientation at every pixel of `image`.
pub fn gradients(image: &GrayImage) -> GradientField {
    let (width, height) = image.dimensions();
    let intensity = |x: u32, y: u32| image.get_pixel(x, y)[0] as f64;

    let mut magnitude = Array2d::new(width as usize, height as usize);
    let mut orientation = Array2d::new(width as usize, height as usize);

    for y in 0..height {
        let (up, down) = (y.saturating_sub(1), (y + 1).min(height - 1));
        for x in 0..width {
            let (left, right) = (x.saturating_sub(1), (x + 1).min(width - 1));

            let fu = intensity(right, y) - intensity(left, y);
            let fv = intensity(x, down) - intensity(x, up);

            *magnitude.at_mut(x as usize, y as usize) = fu.hypot(fv);
            *orientation.at_mut(x as usize, y as usize) = unsigned_orientation(fu, fv);
        }
    }

    GradientField {
        magnitude,
        orientation,
    }
}

/// Orientation in degrees of the gradient `(fu, fv)`, folded into `[0, 180)`.
///
/// Equivalent to `atan(fv / fu) + 90` wherever that is defined, so a purely
/// horizontal gradient maps to 90. Where `fu` is zero the result would be 180,
/// which wraps to 0; a zero gradient also maps to 0.
pub fn unsigned_orientation(fu: f64, fv: f64) -> f64 {
    // (fu, fv) and (-fu, -fv) are the same orientation
    let (fu, fv) = if fu < 0.0 { (-fu, -fv) } else { (fu, fv) };
    if fu == 0.0 {
        return 0.0;
    }
    let theta = fv.atan2(fu) * 180.0 / PI + 90.0;
    if theta >= 180.0 {
        0.0
    } else {
        theta.max(0.0)
    }
}

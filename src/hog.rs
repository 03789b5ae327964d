//! Histogram of oriented gradients descriptors.
//! http://lear.inrialpes.fr/people/triggs/pubs/Dalal-cvpr05.pdf
//!
//! An image is split into square cells, each holding a histogram of gradient
//! orientations weighted by gradient magnitude. Cells are grouped into
//! overlapping square blocks and each block is L2-normalised independently.

use crate::error::{Axis, HogError, Result};
use crate::gradients::{gradients, GradientField};
use crate::grayscale::LumaWeights;
use crate::math::sum_of_squares;
use crate::multiarray::{Array3d, Dim3};
use image::GrayImage;
use itertools::iproduct;
use serde::Deserialize;

/// Parameters for HoG descriptors.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HogOptions {
    /// Width in pixels that inputs are resized to.
    pub width: u32,
    /// Height in pixels that inputs are resized to.
    pub height: u32,
    /// Width and height of a cell in pixels.
    pub cell_side: usize,
    /// Width and height of a block in cells.
    pub block_side: usize,
    /// Offset of the start of one block from the next in cells.
    pub block_stride: usize,
    /// Number of orientation bins spanning `[0, 180)` degrees.
    pub orientations: usize,
    /// Added (squared) to each block's sum of squares before normalising.
    pub epsilon: f64,
    /// Weights used when converting colour inputs to grayscale.
    pub luma: LumaWeights,
}

impl Default for HogOptions {
    /// 30x60 pixels, 5 pixel cells, 3x3 cell blocks overlapping by all but one
    /// cell, 9 bins of 20 degrees.
    fn default() -> Self {
        HogOptions {
            width: 30,
            height: 60,
            cell_side: 5,
            block_side: 3,
            block_stride: 1,
            orientations: 9,
            epsilon: 0.01,
            luma: LumaWeights::default(),
        }
    }
}

impl HogOptions {
    /// Options for the given resolution and geometry, with the default bin
    /// count, stride and epsilon.
    pub fn new(width: u32, height: u32, cell_side: usize, block_side: usize) -> HogOptions {
        HogOptions {
            width,
            height,
            cell_side,
            block_side,
            ..HogOptions::default()
        }
    }

    /// Parses options from a JSON object. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<HogOptions> {
        Ok(serde_json::from_str(json)?)
    }

    /// Width of one orientation bin in degrees.
    pub fn bin_width(&self) -> f64 {
        180.0 / self.orientations as f64
    }
}

/// HoG options plus values calculated from them. Validation occurs when
/// instances of this struct are created - functions receiving a spec assume
/// that it is valid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HogSpec {
    /// Original options.
    options: HogOptions,
    /// Number of non-overlapping cells covering the image's width.
    cells_wide: usize,
    /// Number of non-overlapping cells covering the image's height.
    cells_high: usize,
    /// Number of (possibly overlapping) blocks across the cell grid.
    blocks_wide: usize,
    /// Number of (possibly overlapping) blocks down the cell grid.
    blocks_high: usize,
}

impl HogSpec {
    /// Validates `options` and derives the cell and block grid sizes.
    pub fn from_options(options: HogOptions) -> Result<HogSpec> {
        let positive = [
            ("width", options.width as usize),
            ("height", options.height as usize),
            ("cell_side", options.cell_side),
            ("block_side", options.block_side),
            ("block_stride", options.block_stride),
            ("orientations", options.orientations),
        ];
        if let Some(&(name, _)) = positive.iter().find(|(_, value)| *value == 0) {
            return Err(HogError::ZeroParameter { name });
        }

        if !options.epsilon.is_finite() || options.epsilon < 0.0 {
            return Err(HogError::InvalidEpsilon(options.epsilon));
        }

        for (axis, length) in [
            (Axis::Horizontal, options.width),
            (Axis::Vertical, options.height),
        ] {
            if length as usize % options.cell_side != 0 {
                return Err(HogError::CellMismatch {
                    axis,
                    length,
                    cell_side: options.cell_side,
                });
            }
        }

        let cells_wide = options.width as usize / options.cell_side;
        let cells_high = options.height as usize / options.cell_side;
        if options.block_side > cells_wide || options.block_side > cells_high {
            return Err(HogError::BlockTooLarge {
                block_side: options.block_side,
                cells_wide,
                cells_high,
            });
        }

        Ok(HogSpec {
            options,
            cells_wide,
            cells_high,
            blocks_wide: num_blocks(cells_wide, options.block_side, options.block_stride),
            blocks_high: num_blocks(cells_high, options.block_side, options.block_stride),
        })
    }

    /// The options this spec was built from.
    pub fn options(&self) -> &HogOptions {
        &self.options
    }

    /// Number of cells across the image.
    pub fn cells_wide(&self) -> usize {
        self.cells_wide
    }

    /// Number of cells down the image.
    pub fn cells_high(&self) -> usize {
        self.cells_high
    }

    /// Number of block positions across the cell grid.
    pub fn blocks_wide(&self) -> usize {
        self.blocks_wide
    }

    /// Number of block positions down the cell grid.
    pub fn blocks_high(&self) -> usize {
        self.blocks_high
    }

    /// The size in floats of the descriptor for a single block.
    pub fn block_descriptor_length(&self) -> usize {
        self.options.orientations * self.options.block_side.pow(2)
    }

    /// The total size in floats of the HoG descriptor with these dimensions.
    pub fn descriptor_length(&self) -> usize {
        self.blocks_wide * self.blocks_high * self.block_descriptor_length()
    }

    /// Dimensions of a grid of cell histograms, viewed as a 3d array.
    /// Innermost dimension is orientation bin, then horizontal cell location,
    /// then vertical cell location.
    pub fn cell_grid_dimensions(&self) -> Dim3 {
        Dim3::new(self.options.orientations, self.cells_wide, self.cells_high)
    }
}

/// Number of blocks required to cover num_cells cells when each block is
/// block_side long and blocks are staggered by block_stride. Trailing cells
/// that cannot hold a whole block are left uncovered. Assumes that
/// `block_side <= num_cells`.
fn num_blocks(num_cells: usize, block_side: usize, block_stride: usize) -> usize {
    (num_cells - block_side) / block_stride + 1
}

/// Index of the bin containing orientation `theta` (degrees).
///
/// Values at or beyond 180 fall into the last bin, negative and NaN values
/// into the first.
pub fn orientation_bin(theta: f64, orientations: usize) -> usize {
    let bin = (theta * orientations as f64 / 180.0).floor() as usize;
    bin.min(orientations - 1)
}

/// Computes the HoG descriptor of a grayscale image that is already at the
/// resolution named in `options`.
pub fn hog(image: &GrayImage, options: HogOptions) -> Result<Vec<f64>> {
    let spec = HogSpec::from_options(options)?;
    let expected = (options.width, options.height);
    if image.dimensions() != expected {
        return Err(HogError::UnexpectedDimensions {
            expected,
            actual: image.dimensions(),
        });
    }
    Ok(hog_impl(image, &spec))
}

/// Computes the HoG descriptor of an image. Assumes that the image matches
/// the spec's dimensions.
pub(crate) fn hog_impl(image: &GrayImage, spec: &HogSpec) -> Vec<f64> {
    log::debug!("computing gradients");
    let field = gradients(image);
    log::debug!("computing cell histograms");
    let cells = cell_histograms(&field, spec);
    log::debug!("normalising {} blocks", spec.blocks_wide * spec.blocks_high);
    block_descriptors(&cells, spec)
}

/// Computes orientation histograms for each cell of a gradient field.
/// Each pixel adds its gradient magnitude to the bin of its orientation
/// in the cell that contains it.
pub fn cell_histograms(field: &GradientField, spec: &HogSpec) -> Array3d<f64> {
    debug_assert_eq!(
        (field.width(), field.height()),
        (spec.options.width as usize, spec.options.height as usize)
    );

    let mut grid = Array3d::new(spec.cell_grid_dimensions());
    let cell_side = spec.options.cell_side;
    let orientations = spec.options.orientations;

    for y in 0..field.height() {
        for x in 0..field.width() {
            let bin = orientation_bin(*field.orientation.at(x, y), orientations);
            *grid.at_mut(bin, x / cell_side, y / cell_side) += *field.magnitude.at(x, y);
        }
    }

    grid
}

/// Concatenates and normalises the cell histograms of every block position.
///
/// Blocks are visited in row-major order. Within a block, cells are visited
/// in row-major order and each cell contributes its bins in order.
pub fn block_descriptors(cells: &Array3d<f64>, spec: &HogSpec) -> Vec<f64> {
    let side = spec.options.block_side;
    let stride = spec.options.block_stride;
    let mut descriptor = Vec::with_capacity(spec.descriptor_length());

    for (by, bx) in iproduct!(0..spec.blocks_high, 0..spec.blocks_wide) {
        let start = descriptor.len();
        for (iy, ix) in iproduct!(0..side, 0..side) {
            descriptor.extend_from_slice(cells.inner_slice(bx * stride + ix, by * stride + iy));
        }
        normalize_block(&mut descriptor[start..], spec.options.epsilon);
    }

    descriptor
}

/// Divides every value by `sqrt(sum of squares + epsilon^2)`. A block that is
/// all zero is left as zeros even when `epsilon` is zero.
pub fn normalize_block(block: &mut [f64], epsilon: f64) {
    let denominator = (sum_of_squares(block) + epsilon * epsilon).sqrt();
    if denominator == 0.0 {
        return;
    }
    for value in block.iter_mut() {
        *value /= denominator;
    }
}

//! Errors reported when configuring or running a HoG extraction.

use std::fmt;

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, HogError>;

/// Image axis named in geometry errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("width"),
            Axis::Vertical => f.write_str("height"),
        }
    }
}

/// Everything that can go wrong before a descriptor is produced.
///
/// Configuration errors are reported when a [`HogSpec`](crate::hog::HogSpec)
/// is built; input errors are reported by an extraction before any stage runs.
/// The numeric stages themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum HogError {
    /// The input image has no pixels.
    #[error("input image is empty ({width}x{height})")]
    EmptyImage {
        /// Width of the rejected image.
        width: u32,
        /// Height of the rejected image.
        height: u32,
    },

    /// A size or count option was zero.
    #[error("option `{name}` must be greater than zero")]
    ZeroParameter {
        /// Name of the offending option.
        name: &'static str,
    },

    /// The resize target is not a whole number of cells along one axis.
    #[error("resize {axis} {length} is not divisible by cell side {cell_side}")]
    CellMismatch {
        /// Axis along which the mismatch occurs.
        axis: Axis,
        /// Configured length of that axis in pixels.
        length: u32,
        /// Configured cell side in pixels.
        cell_side: usize,
    },

    /// A block does not fit inside the cell grid.
    #[error("block side {block_side} exceeds cell grid {cells_wide}x{cells_high}")]
    BlockTooLarge {
        /// Configured block side in cells.
        block_side: usize,
        /// Number of cells across the image.
        cells_wide: usize,
        /// Number of cells down the image.
        cells_high: usize,
    },

    /// Normalisation epsilon is negative or not finite.
    #[error("normalisation epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),

    /// A grayscale image handed straight to the descriptor stages has the wrong size.
    #[error("expected a {}x{} image, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    UnexpectedDimensions {
        /// Configured (width, height).
        expected: (u32, u32),
        /// Dimensions of the image received.
        actual: (u32, u32),
    },

    /// Options could not be parsed.
    #[error("invalid HoG options: {0}")]
    Config(#[from] serde_json::Error),
}

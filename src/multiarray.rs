//! Helpers providing multi-dimensional views of 1d data.

use num::Zero;

/// A 2d array stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Array2d<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Zero + Clone> Array2d<T> {
    /// Allocates a new zero-filled Array2d with the given dimensions.
    pub fn new(width: usize, height: usize) -> Array2d<T> {
        Array2d {
            data: vec![Zero::zero(); width * height],
            width,
            height,
        }
    }
}

impl<T> Array2d<T> {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Element at column `x`, row `y`.
    pub fn at(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    /// Mutable element at column `x`, row `y`.
    pub fn at_mut(&mut self, x: usize, y: usize) -> &mut T {
        let idx = self.index(x, y);
        &mut self.data[idx]
    }

    /// Underlying row-major storage.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "index ({}, {}) out of bounds for {}x{} array",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }
}

/// Dimensions of a 3d array.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Dim3 {
    /// Length of the innermost, i.e. fastest-varying, dimension.
    pub len_0: usize,
    /// Length of the middle dimension.
    pub len_1: usize,
    /// Length of the outermost dimension.
    pub len_2: usize,
}

impl Dim3 {
    /// Bundles the three lengths, innermost first.
    pub fn new(len_0: usize, len_1: usize, len_2: usize) -> Dim3 {
        Dim3 {
            len_0,
            len_1,
            len_2,
        }
    }

    /// Total number of elements.
    pub(crate) fn len(&self) -> usize {
        self.len_0 * self.len_1 * self.len_2
    }
}

/// A 3d array that owns its data.
///
/// Cell histograms are stored with orientation bin innermost, then cell
/// column, then cell row, so `inner_slice(cx, cy)` is the histogram of one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Array3d<T> {
    data: Vec<T>,
    dim: Dim3,
}

impl<T: Zero + Clone> Array3d<T> {
    /// Allocates a new zero-filled Array3d with the given dimensions.
    pub fn new(dim: Dim3) -> Array3d<T> {
        Array3d {
            data: vec![Zero::zero(); dim.len()],
            dim,
        }
    }
}

impl<T> Array3d<T> {
    /// Element at the given position, innermost index first.
    pub fn at(&self, x0: usize, x1: usize, x2: usize) -> &T {
        assert!(x0 < self.dim.len_0, "inner index {} out of bounds", x0);
        &self.data[self.inner_start(x1, x2) + x0]
    }

    /// Mutable element at the given position, innermost index first.
    pub fn at_mut(&mut self, x0: usize, x1: usize, x2: usize) -> &mut T {
        assert!(x0 < self.dim.len_0, "inner index {} out of bounds", x0);
        let idx = self.inner_start(x1, x2) + x0;
        &mut self.data[idx]
    }

    /// The run of innermost values at outer position `(x1, x2)`.
    pub fn inner_slice(&self, x1: usize, x2: usize) -> &[T] {
        let start = self.inner_start(x1, x2);
        &self.data[start..start + self.dim.len_0]
    }

    #[cfg(test)]
    fn data(&self) -> &[T] {
        &self.data
    }

    fn inner_start(&self, x1: usize, x2: usize) -> usize {
        let d = self.dim;
        assert!(
            x1 < d.len_1 && x2 < d.len_2,
            "outer index ({}, {}) out of bounds for {:?}",
            x1,
            x2,
            d
        );
        x2 * d.len_1 * d.len_0 + x1 * d.len_0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array2d_row_major() {
        let mut a = Array2d::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                *a.at_mut(x, y) = 10 * y + x;
            }
        }
        assert_eq!(a.data(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(*a.at(2, 1), 12);
    }

    #[test]
    #[should_panic]
    fn test_array2d_rejects_out_of_bounds_column() {
        let a: Array2d<f64> = Array2d::new(3, 2);
        // Would alias (0, 1) without the bounds check.
        a.at(3, 0);
    }

    #[test]
    fn test_array3d_inner_slice() {
        let mut a: Array3d<u32> = Array3d::new(Dim3::new(2, 3, 2));
        *a.at_mut(1, 2, 1) = 7;
        *a.at_mut(0, 0, 0) = 5;
        assert_eq!(a.inner_slice(2, 1), &[0, 7]);
        assert_eq!(*a.at(0, 0, 0), 5);
        assert_eq!(a.data().len(), 12);
    }
}

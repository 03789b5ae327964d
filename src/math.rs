//! Assorted mathematical helper functions.

/// Sum of squares of a vector.
pub fn sum_of_squares(xs: &[f64]) -> f64 {
    xs.iter().fold(0f64, |acc, x| acc + x * x)
}

/// L2 norm of a vector.
#[cfg(test)]
pub(crate) fn l2_norm(xs: &[f64]) -> f64 {
    sum_of_squares(xs).sqrt()
}

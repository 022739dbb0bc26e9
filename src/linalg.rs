//! This module contains the small amount of linear algebra that color conversion needs: triples of
//! channel values, 3x3 matrices, and the handful of operations between them. The matrix products
//! are delegated to [`rulinalg`]; everything else is simple enough to do componentwise.
//!
//! A word of warning about multiplication order. The working-space and adaptation tables in this
//! crate are laid out for *row vectors* (`v · M`, see [`vec_times_mat`]), whereas the broadcast
//! luma/chroma matrices are laid out for *column vectors* (`M · v`, see [`mat_times_vec`]). The two
//! products are transposes of each other, so using the wrong one silently produces garbage: each
//! table documents which one it expects.

use num::Float;
use rulinalg::matrix::{BaseMatrix, Matrix};
use rulinalg::vector::Vector;

/// An ordered triple of channel values. What the channels mean depends entirely on the color space
/// the triple is in: no range checking is ever done, so out-of-gamut values pass through untouched.
pub type Color3 = [f64; 3];

/// A row-major 3x3 matrix.
pub type Matrix3 = [[f64; 3]; 3];

/// The 3x3 identity matrix.
pub const IDENTITY: Matrix3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

fn to_matrix(m: &Matrix3) -> Matrix<f64> {
    Matrix::new(3, 3, m.iter().flat_map(|row| row.iter().cloned()).collect::<Vec<f64>>())
}

fn from_matrix(m: &Matrix<f64>) -> Matrix3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            *val = m[[i, j]];
        }
    }
    out
}

fn from_vector(v: &Vector<f64>) -> Color3 {
    [v[0], v[1], v[2]]
}

/// Multiplies the row vector `v` by `m`, giving `v · m`. This is the product used by the RGB
/// working-space matrices and by chromatic adaptation.
/// # Example
/// ```
/// # use vermilion::linalg::vec_times_mat;
/// let m = [[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]];
/// assert_eq!(vec_times_mat([1., 0., 1.], &m), [8., 10., 12.]);
/// ```
pub fn vec_times_mat(v: Color3, m: &Matrix3) -> Color3 {
    // v · M is the same as Mᵀ · vᵀ
    from_vector(&(to_matrix(m).transpose() * Vector::new(v.to_vec())))
}

/// Multiplies `m` by the column vector `v`, giving `m · v`. This is the product used by the
/// YPbPr luma/chroma matrices.
/// # Example
/// ```
/// # use vermilion::linalg::mat_times_vec;
/// let m = [[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]];
/// assert_eq!(mat_times_vec(&m, [1., 0., 1.]), [4., 10., 16.]);
/// ```
pub fn mat_times_vec(m: &Matrix3, v: Color3) -> Color3 {
    from_vector(&(to_matrix(m) * Vector::new(v.to_vec())))
}

/// The matrix product `a · b`.
pub fn mat_times_mat(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    from_matrix(&(to_matrix(a) * to_matrix(b)))
}

/// A diagonal matrix with the given diagonal.
pub fn diag(v: Color3) -> Matrix3 {
    from_matrix(&Matrix::from_diag(&v))
}

/// Componentwise sum of two triples.
pub fn vec_add(a: Color3, b: Color3) -> Color3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Raises every component to the power `p`. Negative components with fractional powers give NaN,
/// exactly as [`f64::powf`] does: use [`apow`] when the sign should be kept.
pub fn pow3(v: Color3, p: f64) -> Color3 {
    [v[0].powf(p), v[1].powf(p), v[2].powf(p)]
}

/// The signed power `sign(x) · |x|^p`. Gamma curves use this so that channels that dip below zero
/// come back out negative instead of turning into NaN.
/// # Example
/// ```
/// # use vermilion::linalg::apow;
/// assert!((apow(-8.0f64, 1.0 / 3.0) + 2.0).abs() <= 1e-12);
/// assert_eq!(apow(4.0f64, 0.5), 2.0);
/// ```
pub fn apow<T: Float>(x: T, p: T) -> T {
    if x < T::zero() {
        -(-x).powf(p)
    } else {
        x.powf(p)
    }
}

/// The smallest component.
pub fn min3(v: Color3) -> f64 {
    v[0].min(v[1]).min(v[2])
}

/// The largest component.
pub fn max3(v: Color3) -> f64 {
    v[0].max(v[1]).max(v[2])
}

/// The L1 (taxicab) distance between two triples: the sum of absolute componentwise differences.
pub fn l1_distance(a: Color3, b: Color3) -> f64 {
    (a[0] - b[0]).abs() + (a[1] - b[1]).abs() + (a[2] - b[2]).abs()
}

/// Folds an angle in `(-360, 360)` into `[0, 360)`. Adding 360 to a tiny negative angle rounds
/// to exactly 360, so that case is folded to 0.
pub(crate) fn wrap_degrees(h: f64) -> f64 {
    if h >= 0.0 {
        h
    } else if h + 360.0 >= 360.0 {
        0.0
    } else {
        h + 360.0
    }
}

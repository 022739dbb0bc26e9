//! This file provides the fixed numeric constants used by the conversions: the CIE breakpoints for
//! the L* curve, the Bradford cone-response matrices, and the Rec. 601 luma/chroma matrices. Keeping
//! them in one place makes it easy to check the values against their published sources.

use crate::linalg::Matrix3;

/// The CIE breakpoint between the linear and cube-root parts of the L* curve, as actually
/// published (216/24389 rounded).
pub const CIE_EPSILON: f64 = 0.008856;

/// The CIE slope of the linear part of the L* curve (24389/27 rounded).
pub const CIE_KAPPA: f64 = 903.3;

/// The Bradford cone-response basis, laid out for row vectors: `[ρ γ β] = [X Y Z] · M`.
pub const BRADFORD_TRANSFORM_MAT: Matrix3 = [
    [0.8951, -0.7502, 0.0389],
    [0.2664, 1.7135, -0.0685],
    [-0.1614, 0.0367, 1.0296],
];

/// The published inverse of [`BRADFORD_TRANSFORM_MAT`]. This is *not* the exact matrix inverse:
/// it is the rounded table everybody uses, so adapting there and back is only approximately the
/// identity. Don't replace it with a computed inverse, or every adapted color will shift.
pub const BRADFORD_INVERSE_MAT: Matrix3 = [
    [0.9869929, 0.4323053, -0.0085287],
    [-0.1470543, 0.5183603, 0.0400428],
    [0.1599627, 0.0492912, 0.9684867],
];

// Rec. 601 luma weights
const KR: f64 = 0.299;
const KB: f64 = 0.114;
const KG: f64 = 1.0 - KR - KB;

/// Non-linear RGB to YPbPr, laid out for column vectors: `[Y Pb Pr]ᵀ = M · [R G B]ᵀ`.
pub const YPBPR_TRANSFORM_MAT: Matrix3 = [
    [KR, KG, KB],
    [-0.5 * KR / (1.0 - KB), -0.5 * KG / (1.0 - KB), 0.5],
    [0.5, -0.5 * KG / (1.0 - KR), -0.5 * KB / (1.0 - KR)],
];

/// YPbPr to non-linear RGB, the exact inverse of [`YPBPR_TRANSFORM_MAT`]. Also for column vectors.
pub const YPBPR_INVERSE_MAT: Matrix3 = [
    [1.0, 0.0, 2.0 * (1.0 - KR)],
    [1.0, -2.0 * KB * (1.0 - KB) / KG, -2.0 * KR * (1.0 - KR) / KG],
    [1.0, 2.0 * (1.0 - KB), 0.0],
];

/// Scale from YPbPr to 8-bit studio-swing YCbCr, before the offset.
pub const YCBCR_SCALE: [f64; 3] = [219.0, 224.0, 224.0];

/// Offset added after scaling YPbPr into YCbCr.
pub const YCBCR_OFFSET: [f64; 3] = [16.0, 128.0, 128.0];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::{mat_times_mat, IDENTITY};

    fn max_deviation(a: &Matrix3, b: &Matrix3) -> f64 {
        let mut worst: f64 = 0.0;
        for i in 0..3 {
            for j in 0..3 {
                worst = worst.max((a[i][j] - b[i][j]).abs());
            }
        }
        worst
    }

    #[test]
    fn test_ypbpr_matrices_are_inverse() {
        let prod = mat_times_mat(&YPBPR_INVERSE_MAT, &YPBPR_TRANSFORM_MAT);
        assert!(max_deviation(&prod, &IDENTITY) <= 1e-14);
    }

    #[test]
    fn test_ypbpr_published_coefficients() {
        assert!((YPBPR_TRANSFORM_MAT[1][0] + 0.168736).abs() <= 1e-6);
        assert!((YPBPR_TRANSFORM_MAT[2][1] + 0.418688).abs() <= 1e-6);
        assert!((YPBPR_INVERSE_MAT[1][1] + 0.344136).abs() <= 1e-6);
        assert!((YPBPR_INVERSE_MAT[2][1] - 1.772).abs() <= 1e-12);
    }

    #[test]
    fn test_bradford_inverse_is_only_approximate() {
        let prod = mat_times_mat(&BRADFORD_TRANSFORM_MAT, &BRADFORD_INVERSE_MAT);
        let dev = max_deviation(&prod, &IDENTITY);
        assert!(dev <= 1e-6);
        assert!(dev > 0.0);
    }
}

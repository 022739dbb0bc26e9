//! Luma and color-difference encodings: analog YPbPr and its digital, studio-range counterpart
//! YCbCr. Both use the ITU-R BT.601 weights and operate on whatever (gamma-encoded) RGB the color's
//! working space produces. Y runs 0 to 1 and Pb and Pr run -0.5 to 0.5; YCbCr maps those onto
//! `16..=235` and `16..=240` without rounding.

use crate::consts::{YCBCR_OFFSET, YCBCR_SCALE, YPBPR_INVERSE_MAT, YPBPR_TRANSFORM_MAT};
use crate::linalg::{mat_times_vec, Color3};

/// Converts RGB to YPbPr.
/// # Example
/// ```
/// # use vermilion::colors::ypbprcolor::rgb_to_ypbpr;
/// let ypbpr = rgb_to_ypbpr([1., 1., 1.]);
/// assert!((ypbpr[0] - 1.).abs() <= 1e-12);
/// assert!(ypbpr[1].abs() <= 1e-12 && ypbpr[2].abs() <= 1e-12);
/// ```
pub fn rgb_to_ypbpr(rgb: Color3) -> Color3 {
    mat_times_vec(&YPBPR_TRANSFORM_MAT, rgb)
}

/// Converts YPbPr to RGB.
pub fn ypbpr_to_rgb(ypbpr: Color3) -> Color3 {
    mat_times_vec(&YPBPR_INVERSE_MAT, ypbpr)
}

/// Scales and offsets YPbPr into studio-range YCbCr.
pub fn ypbpr_to_ycbcr(ypbpr: Color3) -> Color3 {
    let mut out = [0.0; 3];
    for i in 0..3 {
        out[i] = YCBCR_OFFSET[i] + YCBCR_SCALE[i] * ypbpr[i];
    }
    out
}

/// Undoes [`ypbpr_to_ycbcr`].
pub fn ycbcr_to_ypbpr(ycbcr: Color3) -> Color3 {
    let mut out = [0.0; 3];
    for i in 0..3 {
        out[i] = (ycbcr[i] - YCBCR_OFFSET[i]) / YCBCR_SCALE[i];
    }
    out
}

/// Converts RGB straight to YCbCr.
pub fn rgb_to_ycbcr(rgb: Color3) -> Color3 {
    ypbpr_to_ycbcr(rgb_to_ypbpr(rgb))
}

/// Converts YCbCr straight to RGB.
pub fn ycbcr_to_rgb(ycbcr: Color3) -> Color3 {
    ypbpr_to_rgb(ycbcr_to_ypbpr(ycbcr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::l1_distance;

    #[test]
    fn test_studio_range() {
        let black = rgb_to_ycbcr([0.0, 0.0, 0.0]);
        assert!(l1_distance(black, [16.0, 128.0, 128.0]) <= 1e-12);
        let white = rgb_to_ycbcr([1.0, 1.0, 1.0]);
        assert!(l1_distance(white, [235.0, 128.0, 128.0]) <= 1e-9);
        // pure blue and red drive Cb and Cr to their maxima
        assert!((rgb_to_ycbcr([0.0, 0.0, 1.0])[1] - 240.0).abs() <= 1e-9);
        assert!((rgb_to_ycbcr([1.0, 0.0, 0.0])[2] - 240.0).abs() <= 1e-9);
    }

    #[test]
    fn test_red_luma() {
        let ypbpr = rgb_to_ypbpr([1.0, 0.0, 0.0]);
        assert!((ypbpr[0] - 0.299).abs() <= 1e-12);
        assert!((ypbpr[2] - 0.5).abs() <= 1e-12);
    }

    #[test]
    fn test_round_trip() {
        for rgb in &[[0.2, 0.4, 0.6], [0.9, 0.1, 0.5], [0.0, 1.0, 0.3]] {
            let back = ycbcr_to_rgb(rgb_to_ycbcr(*rgb));
            assert!(l1_distance(*rgb, back) <= 1e-12, "{:?} -> {:?}", rgb, back);
        }
    }
}

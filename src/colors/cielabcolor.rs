//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). CIELAB is a device-independent
//! space with a lightness axis `L` and two opponent color axes: `a` runs from green (negative) to
//! magenta (positive), and `b` from blue (negative) to yellow (positive). Formally these are L\*,
//! a\*, and b\*, but the stars are dropped here for convenience.
//!
//! CIELAB is always relative to a reference white, which maps to `L = 100, a = b = 0`. The
//! conversions take that white explicitly as XYZ.
//!
//! The breakpoint between the cube-root and linear parts of the curve uses the constants the CIE
//! actually published (0.008856 and 903.3) rather than the exact rationals, because that's what
//! every other implementation matches. The two are very slightly inconsistent with each other, so a
//! value within a hair of the breakpoint can come back on the other branch; the error that causes
//! is below 1e-7.

use crate::consts::{CIE_EPSILON, CIE_KAPPA};
use crate::linalg::Color3;

/// The forward nonlinearity: a cube root above the breakpoint, a line below it.
pub(crate) fn lab_f(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        (CIE_KAPPA * t + 16.0) / 116.0
    }
}

/// The inverse of [`lab_f`] for the X and Z channels, branching on the cubed value.
fn lab_f_inv(f: f64) -> f64 {
    let cubed = f * f * f;
    if cubed > CIE_EPSILON {
        cubed
    } else {
        (116.0 * f - 16.0) / CIE_KAPPA
    }
}

/// The lightness `L` of a color whose luminance relative to the white is `yr`. Shared with CIELUV,
/// which uses the same lightness scale. Below the breakpoint this is exactly `kappa · yr`, so black
/// is exactly zero.
pub(crate) fn y_ratio_to_lightness(yr: f64) -> f64 {
    if yr > CIE_EPSILON {
        116.0 * yr.cbrt() - 16.0
    } else {
        CIE_KAPPA * yr
    }
}

/// Recovers `Y / Yw` from `L`, branching on `L` itself.
pub(crate) fn lightness_to_y_ratio(l: f64) -> f64 {
    if l > CIE_KAPPA * CIE_EPSILON {
        let fy = (l + 16.0) / 116.0;
        fy * fy * fy
    } else {
        l / CIE_KAPPA
    }
}

/// Converts XYZ to CIELAB relative to the reference white `white`, given as XYZ.
/// # Example
/// ```
/// # use vermilion::colors::cielabcolor::xyz_to_lab;
/// # use vermilion::illuminants::white_point_xyz;
/// let d50 = white_point_xyz("D50");
/// let lab = xyz_to_lab(d50, d50);
/// assert!((lab[0] - 100.).abs() <= 1e-12);
/// assert!(lab[1].abs() <= 1e-12 && lab[2].abs() <= 1e-12);
/// ```
pub fn xyz_to_lab(xyz: Color3, white: Color3) -> Color3 {
    let fx = lab_f(xyz[0] / white[0]);
    let fy = lab_f(xyz[1] / white[1]);
    let fz = lab_f(xyz[2] / white[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Converts CIELAB back to XYZ relative to the reference white `white`.
pub fn lab_to_xyz(lab: Color3, white: Color3) -> Color3 {
    let (l, a, b) = (lab[0], lab[1], lab[2]);
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;
    [
        lab_f_inv(fx) * white[0],
        lightness_to_y_ratio(l) * white[1],
        lab_f_inv(fz) * white[2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminants::white_point_xyz;
    use crate::linalg::l1_distance;

    #[test]
    fn test_black_is_zero() {
        let lab = xyz_to_lab([0.0, 0.0, 0.0], white_point_xyz("D65"));
        assert!(lab.iter().all(|c| c.abs() <= 1e-12));
    }

    #[test]
    fn test_known_value() {
        // mid gray, Y = 0.18, sits at L* = 49.5
        let d65 = white_point_xyz("D65");
        let gray = [d65[0] * 0.18, 0.18, d65[2] * 0.18];
        let lab = xyz_to_lab(gray, d65);
        assert!((lab[0] - 49.496).abs() <= 1e-3);
        assert!(lab[1].abs() <= 1e-9);
        assert!(lab[2].abs() <= 1e-9);
    }

    #[test]
    fn test_round_trip_both_branches() {
        let d50 = white_point_xyz("D50");
        for xyz in &[
            [0.2, 0.42, 0.23],
            [0.001, 0.002, 0.0005],
            [0.0088, 0.0089, 0.0087],
            [0.95, 1.2, -0.01],
        ] {
            let back = lab_to_xyz(xyz_to_lab(*xyz, d50), d50);
            assert!(l1_distance(*xyz, back) <= 1e-12, "{:?} -> {:?}", xyz, back);
        }
    }

    #[test]
    fn test_lab_round_trip() {
        let d65 = white_point_xyz("D65");
        let lab = [50.0, 25.0, -30.0];
        let back = xyz_to_lab(lab_to_xyz(lab, d65), d65);
        assert!(l1_distance(lab, back) <= 1e-9);
    }

    #[test]
    fn test_branches_meet() {
        // the linear branch and the cube-root branch agree (to the published precision) at the
        // breakpoint
        let below = lab_f(CIE_EPSILON);
        let above = lab_f(CIE_EPSILON * (1.0 + 1e-12));
        assert!((below - above).abs() <= 1e-4);
    }
}

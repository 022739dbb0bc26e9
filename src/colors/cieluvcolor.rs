//! This module implements the CIELUV color specification, which was adopted concurrently with
//! CIELAB. CIELUV shares CIELAB's lightness scale but measures chromaticity through the CIE 1976
//! UCS coordinates `(u', v')`, scaled by lightness and taken relative to the reference white.
//!
//! Two places divide by zero in the textbook formulas, and both get a defined answer here. Going to
//! LUV, a color whose `X + 15Y + 3Z` is zero (black, in practice) takes the white's own `(u', v')`,
//! so it lands on `u = v = 0`. Coming back, `L = 0` is black no matter what `u` and `v` say.

use crate::colors::cielabcolor::{lightness_to_y_ratio, y_ratio_to_lightness};
use crate::linalg::Color3;

/// The CIE 1976 UCS chromaticity `(u', v')` of an XYZ color, or `None` when it is undefined.
fn uv_prime(xyz: Color3) -> Option<(f64, f64)> {
    let denom = xyz[0] + 15.0 * xyz[1] + 3.0 * xyz[2];
    if denom == 0.0 {
        None
    } else {
        Some((4.0 * xyz[0] / denom, 9.0 * xyz[1] / denom))
    }
}

/// Converts XYZ to CIELUV relative to the reference white `white`, given as XYZ.
/// # Example
/// ```
/// # use vermilion::colors::cieluvcolor::xyz_to_luv;
/// # use vermilion::illuminants::white_point_xyz;
/// let d65 = white_point_xyz("D65");
/// assert_eq!(xyz_to_luv([0., 0., 0.], d65), [0., 0., 0.]);
/// let white = xyz_to_luv(d65, d65);
/// assert!((white[0] - 100.).abs() <= 1e-12);
/// ```
pub fn xyz_to_luv(xyz: Color3, white: Color3) -> Color3 {
    let (un, vn) = uv_prime(white).unwrap_or((0.0, 0.0));
    let (u_prime, v_prime) = uv_prime(xyz).unwrap_or((un, vn));
    let l = y_ratio_to_lightness(xyz[1] / white[1]);
    [l, 13.0 * l * (u_prime - un), 13.0 * l * (v_prime - vn)]
}

/// Converts CIELUV back to XYZ relative to the reference white `white`.
pub fn luv_to_xyz(luv: Color3, white: Color3) -> Color3 {
    let (l, u, v) = (luv[0], luv[1], luv[2]);
    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let (un, vn) = uv_prime(white).unwrap_or((0.0, 0.0));
    let u_prime = u / (13.0 * l) + un;
    let v_prime = v / (13.0 * l) + vn;
    let y = lightness_to_y_ratio(l) * white[1];
    if v_prime == 0.0 {
        // no color has v' = 0 and nonzero luminance; keep the luminance and drop the rest
        return [0.0, y, 0.0];
    }
    let x = y * 9.0 * u_prime / (4.0 * v_prime);
    let z = y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime);
    [x, y, z]
}

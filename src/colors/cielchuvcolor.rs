//! This module implements CIELCHuv, the cylindrical form of CIELUV: lightness, chroma (distance
//! from the neutral axis), and hue angle in degrees. It's sometimes called CIEHCL, especially in
//! visualization work.

use crate::colors::cielchcolor::{cartesian_to_polar, polar_to_cartesian};
use crate::linalg::Color3;

/// Converts CIELUV to CIELCHuv.
/// # Example
/// ```
/// # use vermilion::colors::cielchuvcolor::{luv_to_lchuv, lchuv_to_luv};
/// let luv = [53.2, -9.4, 13.3];
/// let back = lchuv_to_luv(luv_to_lchuv(luv));
/// assert!(luv.iter().zip(back.iter()).all(|(a, b)| (a - b).abs() <= 1e-12));
/// ```
pub fn luv_to_lchuv(luv: Color3) -> Color3 {
    let (c, h) = cartesian_to_polar(luv[1], luv[2]);
    [luv[0], c, h]
}

/// Converts CIELCHuv back to CIELUV.
pub fn lchuv_to_luv(lch: Color3) -> Color3 {
    let (u, v) = polar_to_cartesian(lch[1], lch[2]);
    [lch[0], u, v]
}

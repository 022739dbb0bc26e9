//! CIE xyY: XYZ split into chromaticity `(x, y)` and luminance `Y`. The chromaticity is XYZ
//! normalized by its sum, so it is undefined for black; this module defines it as the reference
//! white's chromaticity instead, which keeps black on the neutral axis.

use crate::linalg::Color3;

/// Converts XYZ to xyY. Black (a zero sum) gets the chromaticity of `white`, given as XYZ.
/// # Example
/// ```
/// # use vermilion::colors::xyycolor::xyz_to_xyy;
/// # use vermilion::illuminants::white_point_xyz;
/// let d65 = white_point_xyz("D65");
/// let black = xyz_to_xyy([0., 0., 0.], d65);
/// assert!((black[0] - 0.31271).abs() <= 1e-9);
/// assert!((black[1] - 0.32902).abs() <= 1e-9);
/// assert_eq!(black[2], 0.);
/// ```
pub fn xyz_to_xyy(xyz: Color3, white: Color3) -> Color3 {
    let sum = xyz[0] + xyz[1] + xyz[2];
    if sum == 0.0 {
        let white_sum = white[0] + white[1] + white[2];
        [white[0] / white_sum, white[1] / white_sum, xyz[1]]
    } else {
        [xyz[0] / sum, xyz[1] / sum, xyz[1]]
    }
}

/// Converts xyY to XYZ. A chromaticity with `y = 0` has no well-defined XYZ and maps to black:
/// that's lossy, but it's the only value that doesn't involve infinities.
pub fn xyy_to_xyz(xyy: Color3) -> Color3 {
    let (x, y, lum) = (xyy[0], xyy[1], xyy[2]);
    if y == 0.0 {
        [0.0, 0.0, 0.0]
    } else {
        [x * lum / y, lum, (1.0 - x - y) * lum / y]
    }
}

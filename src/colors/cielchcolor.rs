//! This file implements the CIELCHab color space, a cylindrical transformation of CIELAB that uses
//! chroma and hue instead of two opponent color axes. Be careful not to confuse it with CIELCHuv,
//! which is the same transformation applied to CIELUV: the polar conversion itself is shared by both
//! and lives here.

use crate::linalg::{wrap_degrees, Color3};

/// Converts the Cartesian pair `(first, second)` to `(chroma, hue)`, with the hue in degrees in
/// `[0, 360)`.
pub(crate) fn cartesian_to_polar(first: f64, second: f64) -> (f64, f64) {
    let c = first.hypot(second);
    let h = second.atan2(first).to_degrees();
    (c, wrap_degrees(h))
}

/// The inverse of [`cartesian_to_polar`]. The magnitudes come from `tan(h)`, and the signs are put
/// back by quadrant using the same boundaries `atan2` splits on: the first component is negative
/// strictly between 90 and 270 degrees, the second above 180.
pub(crate) fn polar_to_cartesian(c: f64, h: f64) -> (f64, f64) {
    let t = h.to_radians().tan();
    let mut first = c / (1.0 + t * t).sqrt();
    let mut second = (first * t).abs();
    if h > 90.0 && h < 270.0 {
        first = -first;
    }
    if h > 180.0 {
        second = -second;
    }
    (first, second)
}

/// Converts CIELAB to CIELCHab: lightness is untouched, `(a, b)` becomes chroma and hue angle.
/// # Example
/// ```
/// # use vermilion::colors::cielchcolor::lab_to_lchab;
/// let lch = lab_to_lchab([50., 0., -20.]);
/// assert_eq!(lch[0], 50.);
/// assert!((lch[1] - 20.).abs() <= 1e-12);
/// assert!((lch[2] - 270.).abs() <= 1e-12);
/// ```
pub fn lab_to_lchab(lab: Color3) -> Color3 {
    let (c, h) = cartesian_to_polar(lab[1], lab[2]);
    [lab[0], c, h]
}

/// Converts CIELCHab back to CIELAB.
pub fn lchab_to_lab(lch: Color3) -> Color3 {
    let (a, b) = polar_to_cartesian(lch[1], lch[2]);
    [lch[0], a, b]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::l1_distance;

    #[test]
    fn test_every_quadrant_round_trips() {
        for &(a, b) in &[
            (3.0, 4.0),
            (-3.0, 4.0),
            (-3.0, -4.0),
            (3.0, -4.0),
            (5.0, 0.0),
            (-5.0, 0.0),
            (0.0, 5.0),
            (0.0, -5.0),
        ] {
            let lab = [60.0, a, b];
            let back = lchab_to_lab(lab_to_lchab(lab));
            assert!(l1_distance(lab, back) <= 1e-12, "{:?} -> {:?}", lab, back);
        }
    }

    #[test]
    fn test_hue_range() {
        let lch = lab_to_lchab([50.0, 1.0, -1e-9]);
        assert!(lch[2] >= 0.0 && lch[2] < 360.0);
        assert!((lab_to_lchab([50.0, -1.0, 1.0])[2] - 135.0).abs() <= 1e-12);
        // atan2 gives a hair below zero here, which must not come out as 360
        assert_eq!(lab_to_lchab([50.0, 1.0, -1e-17])[2], 0.0);
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(lab_to_lchab([42.0, 0.0, 0.0]), [42.0, 0.0, 0.0]);
        assert_eq!(lchab_to_lab([42.0, 0.0, 123.0]), [42.0, 0.0, 0.0]);
    }
}

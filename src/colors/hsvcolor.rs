//! This file implements HSV, a cylindrical rearrangement of RGB: hue, saturation, and value, where
//! value runs from black to the fully saturated color. Like HSL, it is a transformation of whatever
//! RGB working space the color is in, so HSV in sRGB and HSV in Adobe RGB are different colors.
//!
//! The projection is hexagonal, not circular: the hue is the position around the hexagon you get by
//! looking down the gray diagonal of the RGB cube, stretched to 0-360. Gray has no hue at all; this
//! implementation calls it 0 degrees, and gives it 0 saturation too.

use crate::linalg::{max3, min3, wrap_degrees, Color3};

/// The hexagonal hue shared by HSV and HSL, in degrees in `[0, 360)`. `delta` must be nonzero.
pub(crate) fn hex_hue(rgb: Color3, max: f64, delta: f64) -> f64 {
    let (r, g, b) = (rgb[0], rgb[1], rgb[2]);
    let sector = if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    wrap_degrees(sector * 60.0)
}

/// Converts RGB to HSV, with hue in degrees and saturation and value nominally between 0 and 1.
/// # Example
/// ```
/// # use vermilion::colors::hsvcolor::rgb_to_hsv;
/// assert_eq!(rgb_to_hsv([0., 0.5, 1.]), [210., 1., 1.]);
/// assert_eq!(rgb_to_hsv([0.3, 0.3, 0.3]), [0., 0., 0.3]);
/// ```
pub fn rgb_to_hsv(rgb: Color3) -> Color3 {
    let max = max3(rgb);
    let delta = max - min3(rgb);
    if delta == 0.0 {
        return [0.0, 0.0, max];
    }
    let s = if max == 0.0 { 0.0 } else { delta / max };
    [hex_hue(rgb, max, delta), s, max]
}

/// Converts HSV to RGB. The hue may be any angle: it is reduced to one of six sectors with
/// `floor(h / 60) mod 6`.
pub fn hsv_to_rgb(hsv: Color3) -> Color3 {
    let (h, s, v) = (hsv[0], hsv[1], hsv[2]);
    if s == 0.0 {
        return [v, v, v];
    }
    let scaled = h / 60.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

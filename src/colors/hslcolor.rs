//! This file implements HSL, the other common cylindrical rearrangement of RGB. It shares its hue
//! with HSV, but measures lightness as the midpoint of the brightest and darkest channels, so white
//! sits at `L = 1` instead of being one of the fully saturated colors.
//!
//! Saturation divides by `max + min` in the lower half and by `2 - max - min` in the upper half.
//! Inside the gamut those are zero only for black and white, which return early as grays. Outside
//! it they can vanish for a real color (`[0.3, -0.3, 0]` has `L = 0`); such colors get zero
//! saturation, so they come back from HSL as the gray at their lightness.

use crate::colors::hsvcolor::hex_hue;
use crate::linalg::{max3, min3, Color3};

/// Converts RGB to HSL, with hue in degrees and saturation and lightness nominally between 0 and 1.
/// # Example
/// ```
/// # use vermilion::colors::hslcolor::rgb_to_hsl;
/// assert_eq!(rgb_to_hsl([1., 0., 0.]), [0., 1., 0.5]);
/// assert_eq!(rgb_to_hsl([1., 1., 1.]), [0., 0., 1.]);
/// ```
pub fn rgb_to_hsl(rgb: Color3) -> Color3 {
    let max = max3(rgb);
    let min = min3(rgb);
    let l = (max + min) / 2.0;
    let delta = max - min;
    if delta == 0.0 {
        return [0.0, 0.0, l];
    }
    let denom = if l <= 0.5 { max + min } else { 2.0 - max - min };
    let s = if denom == 0.0 { 0.0 } else { delta / denom };
    [hex_hue(rgb, max, delta), s, l]
}

/// One channel of the HSL to RGB conversion: a trapezoid over the hue circle running between `p1`
/// and `p2`.
fn hue_to_channel(p1: f64, p2: f64, h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    if h < 60.0 {
        p1 + (p2 - p1) * h / 60.0
    } else if h < 180.0 {
        p2
    } else if h < 240.0 {
        p1 + (p2 - p1) * (240.0 - h) / 60.0
    } else {
        p1
    }
}

/// Converts HSL to RGB. Any hue angle is accepted.
pub fn hsl_to_rgb(hsl: Color3) -> Color3 {
    let (h, s, l) = (hsl[0], hsl[1], hsl[2]);
    if s == 0.0 {
        return [l, l, l];
    }
    let p2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p1 = 2.0 * l - p2;
    [
        hue_to_channel(p1, p2, h + 120.0),
        hue_to_channel(p1, p2, h),
        hue_to_channel(p1, p2, h - 120.0),
    ]
}

//! This module implements RGB in all of its forms: gamma-encoded RGB in a working space (the RGB most
//! people mean), light-linear RGB, the conversion of either to CIE XYZ, and the two common integer
//! encodings, 0-255 triples and `#RRGGBB` hex strings.
//!
//! RGB channels are nominally between 0 and 1, but nothing here clamps them except the integer
//! encodings, which can't represent anything else. Negative channels (colors outside the working
//! space's gamut) go through the gamma curves with their sign intact.

use regex::Regex;

use crate::error::{Error, Result};
use crate::linalg::{apow, vec_times_mat, Color3};
use crate::rgb_spaces::{Gamma, RgbSpace};

// sRGB curve breakpoints, on the encoded and on the linear side
const SRGB_ENCODED_BREAK: f64 = 0.04045;
const SRGB_LINEAR_BREAK: f64 = 0.0031308;

lazy_static! {
    static ref HEX_RE: Regex =
        Regex::new(r"^#?([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$").unwrap();
}

fn linearize_channel(c: f64, gamma: Gamma) -> f64 {
    match gamma {
        Gamma::Srgb => {
            if c.abs() <= SRGB_ENCODED_BREAK {
                c / 12.92
            } else {
                ((c.abs() + 0.055) / 1.055).powf(2.4).copysign(c)
            }
        }
        Gamma::Power(g) => apow(c, g),
    }
}

fn encode_channel(c: f64, gamma: Gamma) -> f64 {
    match gamma {
        Gamma::Srgb => {
            if c.abs() <= SRGB_LINEAR_BREAK {
                12.92 * c
            } else {
                (1.055 * c.abs().powf(1.0 / 2.4) - 0.055).copysign(c)
            }
        }
        Gamma::Power(g) => apow(c, 1.0 / g),
    }
}

/// Undoes the working space's gamma, giving light-linear RGB.
pub fn rgb_to_rgb_linear(rgb: Color3, space: &RgbSpace) -> Color3 {
    [
        linearize_channel(rgb[0], space.gamma),
        linearize_channel(rgb[1], space.gamma),
        linearize_channel(rgb[2], space.gamma),
    ]
}

/// Applies the working space's gamma to light-linear RGB.
pub fn rgb_linear_to_rgb(rgb: Color3, space: &RgbSpace) -> Color3 {
    [
        encode_channel(rgb[0], space.gamma),
        encode_channel(rgb[1], space.gamma),
        encode_channel(rgb[2], space.gamma),
    ]
}

/// Converts gamma-encoded RGB to XYZ relative to the working space's own white point: linearize,
/// then apply the forward matrix.
/// # Example
/// ```
/// # use vermilion::colors::rgbcolor::rgb_to_xyz;
/// # use vermilion::rgb_spaces::lookup_rgb_space;
/// let xyz = rgb_to_xyz([1., 0., 0.], lookup_rgb_space("sRGB"));
/// assert!((xyz[0] - 0.4124).abs() <= 1e-3);
/// assert!((xyz[1] - 0.2127).abs() <= 1e-3);
/// assert!((xyz[2] - 0.0193).abs() <= 1e-3);
/// ```
pub fn rgb_to_xyz(rgb: Color3, space: &RgbSpace) -> Color3 {
    vec_times_mat(rgb_to_rgb_linear(rgb, space), &space.m)
}

/// Converts XYZ, relative to the working space's white point, to gamma-encoded RGB: apply the
/// inverse matrix, then encode.
pub fn xyz_to_rgb(xyz: Color3, space: &RgbSpace) -> Color3 {
    rgb_linear_to_rgb(vec_times_mat(xyz, &space.m_inv), space)
}

/// Scales RGB to 0-255 integers, clamping anything outside of 0-1 and rounding to the nearest
/// integer.
/// # Example
/// ```
/// # use vermilion::colors::rgbcolor::rgb_to_rgb255;
/// assert_eq!(rgb_to_rgb255([1., 0., 0.]), [255, 0, 0]);
/// assert_eq!(rgb_to_rgb255([1.2, -0.3, 0.5]), [255, 0, 128]);
/// ```
pub fn rgb_to_rgb255(rgb: Color3) -> [u8; 3] {
    let scale = |c: f64| (c.max(0.0).min(1.0) * 255.0).round() as u8;
    [scale(rgb[0]), scale(rgb[1]), scale(rgb[2])]
}

/// Scales 0-255 integers back to RGB between 0 and 1.
pub fn rgb255_to_rgb(rgb255: [u8; 3]) -> Color3 {
    [
        f64::from(rgb255[0]) / 255.0,
        f64::from(rgb255[1]) / 255.0,
        f64::from(rgb255[2]) / 255.0,
    ]
}

/// Formats a 0-255 triple as an uppercase `#RRGGBB` string.
pub fn rgb255_to_rgbhex(rgb255: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb255[0], rgb255[1], rgb255[2])
}

/// Parses a hex triplet into 0-255 integers. The leading `#` is optional and either case works, but
/// shorthand like `#F00` isn't accepted.
/// # Errors
/// Returns [`Error::InvalidHex`] if the string isn't six hex digits.
pub fn rgbhex_to_rgb255(hex: &str) -> Result<[u8; 3]> {
    let caps = HEX_RE
        .captures(hex.trim())
        .ok_or_else(|| Error::InvalidHex(hex.to_string()))?;
    let mut out = [0u8; 3];
    for (i, val) in out.iter_mut().enumerate() {
        *val = u8::from_str_radix(&caps[i + 1], 16)
            .map_err(|_| Error::InvalidHex(hex.to_string()))?;
    }
    Ok(out)
}

/// Formats RGB as an uppercase `#RRGGBB` string, clamping and rounding as [`rgb_to_rgb255`] does.
pub fn rgb_to_rgbhex(rgb: Color3) -> String {
    rgb255_to_rgbhex(rgb_to_rgb255(rgb))
}

/// Parses a hex triplet into RGB between 0 and 1.
/// # Example
/// ```
/// # use vermilion::colors::rgbcolor::rgbhex_to_rgb;
/// assert_eq!(rgbhex_to_rgb("#FF0000").unwrap(), [1., 0., 0.]);
/// assert!(rgbhex_to_rgb("#GG0000").is_err());
/// ```
pub fn rgbhex_to_rgb(hex: &str) -> Result<Color3> {
    rgbhex_to_rgb255(hex).map(rgb255_to_rgb)
}

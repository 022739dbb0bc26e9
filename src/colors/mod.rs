//! This module contains the pairwise conversions, one submodule per color space. Each conversion is a
//! pure function between `[f64; 3]` triples (or `[f64; 4]` for CMYK), with any reference white or
//! working space passed in explicitly. For convenience, every conversion is also re-exported here.
//!
//! The functions never clamp, round, or reject out-of-gamut values, except where an encoding can't
//! represent them (0-255 integers and hex strings).
pub mod cielabcolor;
pub mod cielchcolor;
pub mod cielchuvcolor;
pub mod cieluvcolor;
pub mod cmycolor;
pub mod hslcolor;
pub mod hsvcolor;
pub mod rgbcolor;
pub mod xyycolor;
pub mod ypbprcolor;

// for convenience, use this namespace for the conversion functions
pub use self::cielabcolor::{lab_to_xyz, xyz_to_lab};
pub use self::cielchcolor::{lab_to_lchab, lchab_to_lab};
pub use self::cielchuvcolor::{lchuv_to_luv, luv_to_lchuv};
pub use self::cieluvcolor::{luv_to_xyz, xyz_to_luv};
pub use self::cmycolor::{cmy_to_cmyk, cmy_to_rgb, cmyk_to_cmy, rgb_to_cmy};
pub use self::hslcolor::{hsl_to_rgb, rgb_to_hsl};
pub use self::hsvcolor::{hsv_to_rgb, rgb_to_hsv};
pub use self::rgbcolor::{
    rgb255_to_rgb, rgb255_to_rgbhex, rgb_linear_to_rgb, rgb_to_rgb255, rgb_to_rgb_linear,
    rgb_to_rgbhex, rgb_to_xyz, rgbhex_to_rgb, rgbhex_to_rgb255, xyz_to_rgb,
};
pub use self::xyycolor::{xyy_to_xyz, xyz_to_xyy};
pub use self::ypbprcolor::{
    rgb_to_ycbcr, rgb_to_ypbpr, ycbcr_to_rgb, ycbcr_to_ypbpr, ypbpr_to_rgb, ypbpr_to_ycbcr,
};

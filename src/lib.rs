//! Vermilion is a color conversion library. It moves colors between the device-independent CIE spaces
//! (XYZ, xyY, CIELAB, CIELUV, and their cylindrical forms), RGB in any of sixteen calibrated working
//! spaces, and the spaces derived from RGB: HSV, HSL, CMY, CMYK, YPbPr, and YCbCr.
//!
//! There are two ways in. Every conversion step is a plain function in [`colors`], taking and
//! returning `[f64; 3]`, for when you know exactly which steps you want. Most of the time it's
//! simpler to use [`Color`](color::Color), which stores a color once (as XYZ, along with the
//! working space and reference white it is relative to) and reads it back in any space, taking
//! care of the chain of conversions and of chromatic adaptation between white points.
//!
//! ```
//! use vermilion::prelude::*;
//!
//! let orange = Color::new_rgbhex("#FF8000", ColorContext::new()).unwrap();
//! let lab = orange.as_lab();
//! assert!(lab[0] > 60. && lab[0] < 70.);
//! // the same color, read in a wider working space, needs less saturated RGB
//! let mut wide = orange.clone();
//! wide.set_working_space("ProPhoto");
//! assert!(wide.equals(&orange, None));
//! ```
//!
//! The library never fails on an unknown working space or white point name: it falls back to sRGB or
//! D65 and logs a warning through the [`log`](https://docs.rs/log) facade, so install a logger if you
//! want to see them.

#![doc(html_root_url = "https://docs.rs/vermilion/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

extern crate csv;
extern crate num;
extern crate regex;
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate maplit;
extern crate thiserror;

pub mod adapt;
pub mod color;
pub mod colors;
mod consts;
pub mod context;
pub mod error;
pub mod illuminants;
pub mod linalg;
pub mod names;
pub mod prelude;
pub mod rgb_spaces;
pub mod space;

pub use crate::color::{convert, Color};
pub use crate::error::{Error, Result};
pub use crate::illuminants::list_white_points;
pub use crate::rgb_spaces::list_rgb_spaces;
pub use crate::space::list_colorspaces;

//! This module provides the table of CIE standard illuminants that can serve as the reference white
//! of a color. Every white point is stored as its 1931 chromaticity `(x, y)`; the XYZ value used in
//! the conversions is derived from that by fixing the luminance at `Y = 1`.
//!
//! The table is fixed: there is no way to register a custom illuminant. Looking up a name that isn't
//! in the table is not an error, but it is almost always a mistake, so it falls back to D65 and logs
//! a warning.

use std::collections::HashMap;

use crate::linalg::Color3;

/// The white point used whenever none is given or the given one is unknown.
pub const DEFAULT_WHITE_POINT: &str = "D65";

/// A named reference white, given as a CIE 1931 chromaticity.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct WhitePoint {
    /// The canonical name of the illuminant, e.g. `"D65"`.
    pub name: &'static str,
    /// The x chromaticity coordinate.
    pub x: f64,
    /// The y chromaticity coordinate.
    pub y: f64,
}

impl WhitePoint {
    /// The XYZ coordinates of this white, normalized so that `Y = 1`.
    /// # Example
    /// ```
    /// # use vermilion::illuminants::lookup_white_point;
    /// let d65 = lookup_white_point("D65").xyz();
    /// assert!((d65[0] - 0.9505).abs() <= 1e-3);
    /// assert_eq!(d65[1], 1.0);
    /// assert!((d65[2] - 1.0891).abs() <= 1e-3);
    /// ```
    pub fn xyz(&self) -> Color3 {
        [self.x / self.y, 1.0, (1.0 - self.x - self.y) / self.y]
    }
}

macro_rules! white_point {
    ($name:expr, $x:expr, $y:expr) => {
        ($name, WhitePoint { name: $name, x: $x, y: $y })
    };
}

lazy_static! {
    static ref WHITE_POINTS: HashMap<&'static str, WhitePoint> = [
        white_point!("A", 0.44757, 0.40745),
        white_point!("B", 0.34840, 0.35160),
        white_point!("C", 0.31006, 0.31616),
        white_point!("D50", 0.34567, 0.35850),
        white_point!("D55", 0.33242, 0.34743),
        white_point!("D65", 0.31271, 0.32902),
        white_point!("D75", 0.29902, 0.31485),
        white_point!("E", 1.0 / 3.0, 1.0 / 3.0),
        white_point!("F2", 0.37208, 0.37529),
        white_point!("F7", 0.31292, 0.32933),
        white_point!("F11", 0.38052, 0.37713),
    ]
    .iter()
    .cloned()
    .collect();

    // every target here must be a key of WHITE_POINTS: aliases never chain
    static ref WHITE_POINT_ALIASES: HashMap<&'static str, &'static str> = hashmap! {
        "ICC" => "D50",
        "PCS" => "D50",
        "5000K" => "D50",
        "6500K" => "D65",
        "EE" => "E",
    };
}

/// Finds a white point by name without any fallback. Names are matched exactly first, then
/// case-insensitively; aliases resolve in a single hop.
pub fn find_white_point(name: &str) -> Option<&'static WhitePoint> {
    if let Some(wp) = WHITE_POINTS.get(name) {
        return Some(wp);
    }
    if let Some(target) = WHITE_POINT_ALIASES.get(name) {
        return WHITE_POINTS.get(target);
    }
    WHITE_POINTS
        .values()
        .find(|wp| wp.name.eq_ignore_ascii_case(name))
        .or_else(|| {
            WHITE_POINT_ALIASES
                .iter()
                .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                .and_then(|(_, target)| WHITE_POINTS.get(target))
        })
}

/// Looks up a white point by name, falling back to D65 with a warning if the name is unknown.
/// # Example
/// ```
/// # use vermilion::illuminants::lookup_white_point;
/// assert_eq!(lookup_white_point("d50").name, "D50");
/// assert_eq!(lookup_white_point("bogus").name, "D65");
/// ```
pub fn lookup_white_point(name: &str) -> &'static WhitePoint {
    match find_white_point(name) {
        Some(wp) => wp,
        None => {
            warn!("unknown white point {:?}, using {}", name, DEFAULT_WHITE_POINT);
            &WHITE_POINTS[DEFAULT_WHITE_POINT]
        }
    }
}

/// The XYZ of the named white point (with `Y = 1`), with the same fallback as
/// [`lookup_white_point`].
pub fn white_point_xyz(name: &str) -> Color3 {
    lookup_white_point(name).xyz()
}

/// The canonical names of every known white point, sorted.
pub fn list_white_points() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = WHITE_POINTS.keys().cloned().collect();
    names.sort();
    names
}

//! The closed set of color spaces, and a value type that carries a color's coordinates in any one of
//! them.
//!
//! [`Space`] names a space; [`ColorValue`] is a color in a particular space, with the right shape of
//! data for it: three floats for most spaces, four for CMYK, three bytes for RGB255, and a string
//! for hex. Because the shape comes with the variant there's no way to hand a CMYK conversion three
//! numbers.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::context::ColorContext;
use crate::error::{Error, Result};
use crate::linalg::Color3;

/// Every color space this crate knows the name of. `YUV`, `YIQ`, and `YCC` are recognized, but
/// converting to or from them returns [`Error::NotImplemented`].
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Space {
    /// CIE 1931 XYZ.
    XYZ,
    /// CIE xyY: chromaticity plus luminance.
    xyY,
    /// CIELAB.
    Lab,
    /// CIELCHab, the polar form of CIELAB.
    LCHab,
    /// CIELUV.
    Luv,
    /// CIELCHuv, the polar form of CIELUV.
    LCHuv,
    /// Gamma-encoded RGB between 0 and 1.
    RGB,
    /// RGB as 0-255 integers.
    RGB255,
    /// RGB as a `#RRGGBB` string.
    RGBhex,
    /// Hue, saturation, value.
    HSV,
    /// Hue, saturation, lightness.
    HSL,
    /// Cyan, magenta, yellow.
    CMY,
    /// Cyan, magenta, yellow, black.
    CMYK,
    /// Analog luma and color difference.
    YPbPr,
    /// Digital studio-range luma and color difference.
    YCbCr,
    /// PAL luma and chroma. Not implemented.
    YUV,
    /// NTSC luma and chroma. Not implemented.
    YIQ,
    /// Photo YCC. Not implemented.
    YCC,
}

const ALL_SPACES: [Space; 18] = [
    Space::XYZ,
    Space::xyY,
    Space::Lab,
    Space::LCHab,
    Space::Luv,
    Space::LCHuv,
    Space::RGB,
    Space::RGB255,
    Space::RGBhex,
    Space::HSV,
    Space::HSL,
    Space::CMY,
    Space::CMYK,
    Space::YPbPr,
    Space::YCbCr,
    Space::YUV,
    Space::YIQ,
    Space::YCC,
];

impl Space {
    /// The canonical name of the space, which is also what [`FromStr`] accepts.
    pub fn name(self) -> &'static str {
        match self {
            Space::XYZ => "XYZ",
            Space::xyY => "xyY",
            Space::Lab => "Lab",
            Space::LCHab => "LCHab",
            Space::Luv => "Luv",
            Space::LCHuv => "LCHuv",
            Space::RGB => "RGB",
            Space::RGB255 => "RGB255",
            Space::RGBhex => "RGBhex",
            Space::HSV => "HSV",
            Space::HSL => "HSL",
            Space::CMY => "CMY",
            Space::CMYK => "CMYK",
            Space::YPbPr => "YPbPr",
            Space::YCbCr => "YCbCr",
            Space::YUV => "YUV",
            Space::YIQ => "YIQ",
            Space::YCC => "YCC",
        }
    }

    /// Whether conversions to and from this space exist.
    pub fn is_implemented(self) -> bool {
        match self {
            Space::YUV | Space::YIQ | Space::YCC => false,
            _ => true,
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Space {
    type Err = Error;

    /// Parses a space name, ignoring case. `xyY` is the one name where case carries meaning, but
    /// nothing else is spelled `XYY`, so it is still unambiguous.
    /// # Example
    /// ```
    /// # use vermilion::space::Space;
    /// assert_eq!("lchab".parse::<Space>().unwrap(), Space::LCHab);
    /// assert_eq!("XYY".parse::<Space>().unwrap(), Space::xyY);
    /// assert!("Munsell".parse::<Space>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Space> {
        let s = s.trim();
        ALL_SPACES
            .iter()
            .cloned()
            .find(|space| space.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownSpace(s.to_string()))
    }
}

/// The spaces that colors can actually be converted to and from, in a fixed order.
pub fn list_colorspaces() -> Vec<Space> {
    ALL_SPACES
        .iter()
        .cloned()
        .filter(|space| space.is_implemented())
        .collect()
}

/// A color's coordinates in one particular space.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColorValue {
    /// CIE 1931 XYZ, relative to the context's white.
    XYZ(Color3),
    /// CIE xyY.
    xyY(Color3),
    /// CIELAB `[L, a, b]`.
    Lab(Color3),
    /// CIELCHab `[L, C, H]`, hue in degrees.
    LCHab(Color3),
    /// CIELUV `[L, u, v]`.
    Luv(Color3),
    /// CIELCHuv `[L, C, H]`, hue in degrees.
    LCHuv(Color3),
    /// RGB between 0 and 1.
    RGB(Color3),
    /// RGB as 0-255 integers.
    RGB255([u8; 3]),
    /// RGB as a `#RRGGBB` string.
    RGBhex(String),
    /// HSV `[H, S, V]`, hue in degrees.
    HSV(Color3),
    /// HSL `[H, S, L]`, hue in degrees.
    HSL(Color3),
    /// CMY between 0 and 1.
    CMY(Color3),
    /// CMYK between 0 and 1.
    CMYK([f64; 4]),
    /// YPbPr `[Y, Pb, Pr]`.
    YPbPr(Color3),
    /// YCbCr `[Y, Cb, Cr]`, studio range.
    YCbCr(Color3),
}

impl ColorValue {
    /// The space these coordinates are in.
    pub fn space(&self) -> Space {
        match self {
            ColorValue::XYZ(_) => Space::XYZ,
            ColorValue::xyY(_) => Space::xyY,
            ColorValue::Lab(_) => Space::Lab,
            ColorValue::LCHab(_) => Space::LCHab,
            ColorValue::Luv(_) => Space::Luv,
            ColorValue::LCHuv(_) => Space::LCHuv,
            ColorValue::RGB(_) => Space::RGB,
            ColorValue::RGB255(_) => Space::RGB255,
            ColorValue::RGBhex(_) => Space::RGBhex,
            ColorValue::HSV(_) => Space::HSV,
            ColorValue::HSL(_) => Space::HSL,
            ColorValue::CMY(_) => Space::CMY,
            ColorValue::CMYK(_) => Space::CMYK,
            ColorValue::YPbPr(_) => Space::YPbPr,
            ColorValue::YCbCr(_) => Space::YCbCr,
        }
    }

    /// Converts these coordinates to XYZ relative to the white point `context` resolves to.
    /// # Errors
    /// Returns [`Error::InvalidHex`] for an `RGBhex` value that doesn't parse.
    pub fn to_xyz(&self, context: &ColorContext) -> Result<Color3> {
        Color::new(self.clone(), context.clone()).map(|color| color.as_xyz())
    }

    /// Builds the coordinates in `space` of the color whose XYZ, relative to the white point
    /// `context` resolves to, is `xyz`.
    /// # Errors
    /// Returns [`Error::NotImplemented`] for a space without conversions.
    pub fn from_xyz(xyz: Color3, space: Space, context: &ColorContext) -> Result<ColorValue> {
        Color::new_xyz(xyz, context.clone()).read(space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for space in ALL_SPACES.iter() {
            assert_eq!(space.to_string().parse::<Space>().unwrap(), *space);
        }
    }

    #[test]
    fn test_unknown_name() {
        match "HunterLab".parse::<Space>() {
            Err(Error::UnknownSpace(name)) => assert_eq!(name, "HunterLab"),
            other => panic!("expected UnknownSpace, got {:?}", other),
        }
    }

    #[test]
    fn test_listing_skips_unimplemented() {
        let spaces = list_colorspaces();
        assert_eq!(spaces.len(), 15);
        assert!(spaces.contains(&Space::CMYK));
        assert!(!spaces.contains(&Space::YIQ));
    }

    #[test]
    fn test_value_knows_its_space() {
        assert_eq!(ColorValue::CMYK([0.0; 4]).space(), Space::CMYK);
        assert_eq!(ColorValue::RGBhex("#000000".into()).space(), Space::RGBhex);
        assert_eq!(ColorValue::xyY([0.3, 0.3, 0.5]).space(), Space::xyY);
    }

    #[test]
    fn test_from_xyz_unimplemented() {
        match ColorValue::from_xyz([0.5, 0.5, 0.5], Space::YUV, &ColorContext::new()) {
            Err(Error::NotImplemented(Space::YUV)) => (),
            other => panic!("expected NotImplemented, got {:?}", other),
        }
    }
}

//! This file defines [`Color`], the stateful wrapper around the conversion functions. A `Color` stores
//! one thing, its CIE XYZ coordinates, along with the [`ColorContext`] those coordinates are
//! relative to. Every other representation is computed from the XYZ on demand: nothing is cached,
//! so reading a color in one space and then another never goes through a stale intermediate.
//!
//! XYZ is always relative to the color's effective white point. RGB-family spaces (RGB, its integer
//! encodings, HSV, HSL, CMY, CMYK, YPbPr, and YCbCr) are defined by the working space's matrices,
//! which are tied to that space's own white; when the two whites differ, the conversion goes through
//! a chromatic adaptation on the way in and out.
//!
//! Changing the white point re-expresses the color under the new white (so its XYZ changes, but it
//! would look the same). Changing the working space keeps the color and only changes how its RGB is
//! read, except that the white point follows the new working space's white.

use crate::adapt::adapt_white_point;
use crate::colors::cielabcolor::{lab_to_xyz, xyz_to_lab};
use crate::colors::cielchcolor::{lab_to_lchab, lchab_to_lab};
use crate::colors::cielchuvcolor::{lchuv_to_luv, luv_to_lchuv};
use crate::colors::cieluvcolor::{luv_to_xyz, xyz_to_luv};
use crate::colors::cmycolor::{cmy_to_cmyk, cmy_to_rgb, cmyk_to_cmy, rgb_to_cmy};
use crate::colors::hslcolor::{hsl_to_rgb, rgb_to_hsl};
use crate::colors::hsvcolor::{hsv_to_rgb, rgb_to_hsv};
use crate::colors::rgbcolor::{rgb255_to_rgb, rgb_to_rgb255, rgb_to_rgbhex, rgbhex_to_rgb};
use crate::colors::xyycolor::{xyy_to_xyz, xyz_to_xyy};
use crate::colors::ypbprcolor::{rgb_to_ycbcr, rgb_to_ypbpr, ycbcr_to_rgb, ypbpr_to_rgb};
use crate::context::{ColorContext, ResolvedContext};
use crate::error::{Error, Result};
use crate::illuminants::lookup_white_point;
use crate::linalg::{l1_distance, Color3};
use crate::names::NameLookup;
use crate::rgb_spaces::lookup_rgb_space;
use crate::space::{ColorValue, Space};

/// The largest L1 distance in XYZ at which [`Color::equals`] considers two colors the same, unless
/// told otherwise.
pub const DEFAULT_ACCURACY: f64 = 0.0001;

/// A color, stored as XYZ relative to its context's white point.
/// # Example
/// ```
/// # use vermilion::color::Color;
/// # use vermilion::context::ColorContext;
/// let red = Color::new_rgb([1., 0., 0.], ColorContext::new());
/// let hsl = red.as_hsl();
/// assert!(hsl[0] <= 1e-9 || hsl[0] >= 360. - 1e-9);
/// assert!((hsl[1] - 1.).abs() <= 1e-9 && (hsl[2] - 0.5).abs() <= 1e-9);
/// assert_eq!(red.as_rgbhex(), "#FF0000");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    xyz: Color3,
    context: ColorContext,
}

impl Color {
    /// Canonicalizes `context`, resolves it, and stores whatever XYZ `to_xyz` computes under it.
    fn build<F>(context: ColorContext, to_xyz: F) -> Color
    where
        F: FnOnce(&ResolvedContext) -> Color3,
    {
        let context = context.canonical();
        let xyz = to_xyz(&context.resolve());
        Color { xyz, context }
    }

    /// Builds a color from coordinates in any space.
    /// # Errors
    /// Returns [`Error::InvalidHex`] if `value` is a hex string that doesn't parse.
    pub fn new(value: ColorValue, context: ColorContext) -> Result<Color> {
        Ok(match value {
            ColorValue::XYZ(v) => Color::new_xyz(v, context),
            ColorValue::xyY(v) => Color::new_xyy(v, context),
            ColorValue::Lab(v) => Color::new_lab(v, context),
            ColorValue::LCHab(v) => Color::new_lchab(v, context),
            ColorValue::Luv(v) => Color::new_luv(v, context),
            ColorValue::LCHuv(v) => Color::new_lchuv(v, context),
            ColorValue::RGB(v) => Color::new_rgb(v, context),
            ColorValue::RGB255(v) => Color::new_rgb255(v, context),
            ColorValue::RGBhex(ref hex) => Color::new_rgbhex(hex, context)?,
            ColorValue::HSV(v) => Color::new_hsv(v, context),
            ColorValue::HSL(v) => Color::new_hsl(v, context),
            ColorValue::CMY(v) => Color::new_cmy(v, context),
            ColorValue::CMYK(v) => Color::new_cmyk(v, context),
            ColorValue::YPbPr(v) => Color::new_ypbpr(v, context),
            ColorValue::YCbCr(v) => Color::new_ycbcr(v, context),
        })
    }

    /// Builds a color from XYZ relative to the context's white point.
    pub fn new_xyz(xyz: Color3, context: ColorContext) -> Color {
        Color::build(context, |_| xyz)
    }

    /// Builds a color from xyY.
    pub fn new_xyy(xyy: Color3, context: ColorContext) -> Color {
        Color::build(context, |_| xyy_to_xyz(xyy))
    }

    /// Builds a color from CIELAB relative to the context's white point.
    pub fn new_lab(lab: Color3, context: ColorContext) -> Color {
        Color::build(context, |ctx| lab_to_xyz(lab, ctx.white_xyz()))
    }

    /// Builds a color from CIELCHab.
    pub fn new_lchab(lch: Color3, context: ColorContext) -> Color {
        Color::build(context, |ctx| lab_to_xyz(lchab_to_lab(lch), ctx.white_xyz()))
    }

    /// Builds a color from CIELUV relative to the context's white point.
    pub fn new_luv(luv: Color3, context: ColorContext) -> Color {
        Color::build(context, |ctx| luv_to_xyz(luv, ctx.white_xyz()))
    }

    /// Builds a color from CIELCHuv.
    pub fn new_lchuv(lch: Color3, context: ColorContext) -> Color {
        Color::build(context, |ctx| luv_to_xyz(lchuv_to_luv(lch), ctx.white_xyz()))
    }

    /// Builds a color from gamma-encoded RGB in the context's working space.
    pub fn new_rgb(rgb: Color3, context: ColorContext) -> Color {
        Color::build(context, |ctx| ctx.rgb_to_xyz(rgb))
    }

    /// Builds a color from 0-255 RGB.
    pub fn new_rgb255(rgb255: [u8; 3], context: ColorContext) -> Color {
        Color::new_rgb(rgb255_to_rgb(rgb255), context)
    }

    /// Builds a color from a `#RRGGBB` string.
    /// # Errors
    /// Returns [`Error::InvalidHex`] if the string isn't a hex triplet.
    pub fn new_rgbhex(hex: &str, context: ColorContext) -> Result<Color> {
        Ok(Color::new_rgb(rgbhex_to_rgb(hex)?, context))
    }

    /// Builds a color from HSV.
    pub fn new_hsv(hsv: Color3, context: ColorContext) -> Color {
        Color::new_rgb(hsv_to_rgb(hsv), context)
    }

    /// Builds a color from HSL.
    pub fn new_hsl(hsl: Color3, context: ColorContext) -> Color {
        Color::new_rgb(hsl_to_rgb(hsl), context)
    }

    /// Builds a color from CMY.
    pub fn new_cmy(cmy: Color3, context: ColorContext) -> Color {
        Color::new_rgb(cmy_to_rgb(cmy), context)
    }

    /// Builds a color from CMYK.
    pub fn new_cmyk(cmyk: [f64; 4], context: ColorContext) -> Color {
        Color::new_cmy(cmyk_to_cmy(cmyk), context)
    }

    /// Builds a color from YPbPr.
    pub fn new_ypbpr(ypbpr: Color3, context: ColorContext) -> Color {
        Color::new_rgb(ypbpr_to_rgb(ypbpr), context)
    }

    /// Builds a color from studio-range YCbCr.
    pub fn new_ycbcr(ycbcr: Color3, context: ColorContext) -> Color {
        Color::new_rgb(ycbcr_to_rgb(ycbcr), context)
    }

    /// Builds a color from a name, using `names` to find its RGB. The RGB is read in the context's
    /// working space like any other RGB.
    /// # Errors
    /// Returns [`Error::UnknownColorName`] if `names` doesn't know the name.
    /// # Example
    /// ```
    /// # use vermilion::color::Color;
    /// # use vermilion::context::ColorContext;
    /// # use vermilion::names::NameTable;
    /// let teal = Color::new_named("Teal", NameTable::basic(), ColorContext::new()).unwrap();
    /// assert_eq!(teal.as_rgb255(), [0, 128, 128]);
    /// assert!(Color::new_named("blurple", NameTable::basic(), ColorContext::new()).is_err());
    /// ```
    pub fn new_named<N: NameLookup + ?Sized>(
        name: &str,
        names: &N,
        context: ColorContext,
    ) -> Result<Color> {
        let rgb = names
            .lookup(name)
            .ok_or_else(|| Error::UnknownColorName(name.to_string()))?;
        Ok(Color::new_rgb(rgb, context))
    }

    fn resolved(&self) -> ResolvedContext {
        self.context.resolve()
    }

    /// Reads the color in any space.
    /// # Errors
    /// Returns [`Error::NotImplemented`] for YUV, YIQ, and YCC.
    /// # Example
    /// ```
    /// # use vermilion::color::Color;
    /// # use vermilion::context::ColorContext;
    /// # use vermilion::space::{ColorValue, Space};
    /// let gray = Color::new_rgb255([128, 128, 128], ColorContext::new());
    /// assert_eq!(gray.read(Space::RGBhex).unwrap(), ColorValue::RGBhex("#808080".into()));
    /// assert!(gray.read(Space::YIQ).is_err());
    /// ```
    pub fn read(&self, space: Space) -> Result<ColorValue> {
        Ok(match space {
            Space::XYZ => ColorValue::XYZ(self.as_xyz()),
            Space::xyY => ColorValue::xyY(self.as_xyy()),
            Space::Lab => ColorValue::Lab(self.as_lab()),
            Space::LCHab => ColorValue::LCHab(self.as_lchab()),
            Space::Luv => ColorValue::Luv(self.as_luv()),
            Space::LCHuv => ColorValue::LCHuv(self.as_lchuv()),
            Space::RGB => ColorValue::RGB(self.as_rgb()),
            Space::RGB255 => ColorValue::RGB255(self.as_rgb255()),
            Space::RGBhex => ColorValue::RGBhex(self.as_rgbhex()),
            Space::HSV => ColorValue::HSV(self.as_hsv()),
            Space::HSL => ColorValue::HSL(self.as_hsl()),
            Space::CMY => ColorValue::CMY(self.as_cmy()),
            Space::CMYK => ColorValue::CMYK(self.as_cmyk()),
            Space::YPbPr => ColorValue::YPbPr(self.as_ypbpr()),
            Space::YCbCr => ColorValue::YCbCr(self.as_ycbcr()),
            Space::YUV | Space::YIQ | Space::YCC => return Err(Error::NotImplemented(space)),
        })
    }

    /// Reads the color in any space under a different context, without changing the color.
    /// Fields set in `explicit` take precedence over the color's own; the color is re-expressed
    /// the same way [`set_working_space`](Color::set_working_space) and
    /// [`set_white_point`](Color::set_white_point) would.
    pub fn read_with(&self, space: Space, explicit: &ColorContext) -> Result<ColorValue> {
        let mut view = self.clone();
        if let Some(ref name) = explicit.working_space {
            view.set_working_space(name);
        }
        if let Some(ref name) = explicit.white_point {
            view.set_white_point(name);
        }
        view.read(space)
    }

    /// XYZ relative to the color's white point.
    pub fn as_xyz(&self) -> Color3 {
        self.xyz
    }

    /// xyY. Black takes the white point's chromaticity.
    pub fn as_xyy(&self) -> Color3 {
        xyz_to_xyy(self.xyz, self.resolved().white_xyz())
    }

    /// CIELAB relative to the color's white point.
    pub fn as_lab(&self) -> Color3 {
        xyz_to_lab(self.xyz, self.resolved().white_xyz())
    }

    /// CIELCHab.
    pub fn as_lchab(&self) -> Color3 {
        lab_to_lchab(self.as_lab())
    }

    /// CIELUV relative to the color's white point.
    pub fn as_luv(&self) -> Color3 {
        xyz_to_luv(self.xyz, self.resolved().white_xyz())
    }

    /// CIELCHuv.
    pub fn as_lchuv(&self) -> Color3 {
        luv_to_lchuv(self.as_luv())
    }

    /// Gamma-encoded RGB in the color's working space. Out-of-gamut colors come back with channels
    /// outside of 0-1.
    pub fn as_rgb(&self) -> Color3 {
        self.resolved().xyz_to_rgb(self.xyz)
    }

    /// RGB as 0-255 integers, clamped.
    pub fn as_rgb255(&self) -> [u8; 3] {
        rgb_to_rgb255(self.as_rgb())
    }

    /// RGB as an uppercase `#RRGGBB` string, clamped.
    pub fn as_rgbhex(&self) -> String {
        rgb_to_rgbhex(self.as_rgb())
    }

    /// HSV.
    pub fn as_hsv(&self) -> Color3 {
        rgb_to_hsv(self.as_rgb())
    }

    /// HSL.
    pub fn as_hsl(&self) -> Color3 {
        rgb_to_hsl(self.as_rgb())
    }

    /// CMY.
    pub fn as_cmy(&self) -> Color3 {
        rgb_to_cmy(self.as_rgb())
    }

    /// CMYK.
    pub fn as_cmyk(&self) -> [f64; 4] {
        cmy_to_cmyk(self.as_cmy())
    }

    /// YPbPr.
    pub fn as_ypbpr(&self) -> Color3 {
        rgb_to_ypbpr(self.as_rgb())
    }

    /// Studio-range YCbCr.
    pub fn as_ycbcr(&self) -> Color3 {
        rgb_to_ycbcr(self.as_rgb())
    }

    /// The canonical name of the working space in effect.
    pub fn working_space(&self) -> &'static str {
        self.resolved().rgb.name
    }

    /// The canonical name of the white point in effect.
    pub fn white_point(&self) -> &'static str {
        self.resolved().white.name
    }

    /// The stored context. Unset fields are the ones filled in by defaults.
    pub fn context(&self) -> &ColorContext {
        &self.context
    }

    /// Re-expresses the color under another white point and records it. If the new white is the
    /// same as the one in effect, nothing changes: the XYZ stays exactly as it is, and an unset
    /// white point stays unset.
    /// # Example
    /// ```
    /// # use vermilion::color::Color;
    /// # use vermilion::context::ColorContext;
    /// let mut color = Color::new_rgb([0.2, 0.5, 0.7], ColorContext::new());
    /// let before = color.as_xyz();
    /// color.set_white_point("D65");
    /// assert_eq!(color.as_xyz(), before);
    /// color.set_white_point("D50");
    /// assert_ne!(color.as_xyz(), before);
    /// assert_eq!(color.white_point(), "D50");
    /// ```
    pub fn set_white_point(&mut self, name: &str) {
        let current = self.resolved().white;
        let new = lookup_white_point(name);
        if new.name != current.name {
            self.xyz = adapt_white_point(self.xyz, current.xyz(), new.xyz());
            self.context.white_point = Some(new.name.to_string());
        }
    }

    /// Switches the working space. The white point moves to the new space's white first, so
    /// the color's RGB is always read against the white the space was designed for.
    pub fn set_working_space(&mut self, name: &str) {
        let space = lookup_rgb_space(name);
        if space.white_point != self.white_point() {
            self.set_white_point(space.white_point);
        }
        self.context.working_space = Some(space.name.to_string());
    }

    /// Whether `other` is the same color, to within `accuracy` (L1 distance in XYZ, defaulting to
    /// [`DEFAULT_ACCURACY`]). `other` is compared after moving a copy of it into this color's
    /// working space and white point.
    /// # Example
    /// ```
    /// # use vermilion::color::Color;
    /// # use vermilion::context::ColorContext;
    /// let a = Color::new_rgb([1., 0., 0.], ColorContext::new());
    /// let b = Color::new_rgbhex("#FF0000", ColorContext::new()).unwrap();
    /// assert!(a.equals(&b, None));
    /// let c = Color::new_rgb([0.99, 0., 0.], ColorContext::new());
    /// assert!(!a.equals(&c, None));
    /// assert!(a.equals(&c, Some(0.05)));
    /// ```
    pub fn equals(&self, other: &Color, accuracy: Option<f64>) -> bool {
        let mut other = other.clone();
        other.set_working_space(self.working_space());
        other.set_white_point(self.white_point());
        l1_distance(self.xyz, other.xyz) <= accuracy.unwrap_or(DEFAULT_ACCURACY)
    }
}

/// Converts `value` to `target` under `context` without keeping a [`Color`] around.
/// # Errors
/// Returns [`Error::InvalidHex`] for an unparseable hex input, and [`Error::NotImplemented`] for an
/// unimplemented target.
/// # Example
/// ```
/// # use vermilion::color::convert;
/// # use vermilion::context::ColorContext;
/// # use vermilion::space::{ColorValue, Space};
/// let cmyk = convert(ColorValue::RGB255([255, 128, 0]), &ColorContext::new(), Space::CMYK).unwrap();
/// match cmyk {
///     ColorValue::CMYK(v) => assert!((v[1] - 127. / 255.).abs() <= 1e-9),
///     _ => unreachable!(),
/// }
/// ```
pub fn convert(value: ColorValue, context: &ColorContext, target: Space) -> Result<ColorValue> {
    Color::new(value, context.clone())?.read(target)
}

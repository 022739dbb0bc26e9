//! A color's context: which RGB working space and which reference white it is expressed against.
//!
//! [`ColorContext`] is the stored, serializable form. Either field may be left unset, in which case
//! it is filled in by the defaults every time it's needed: the working space defaults to sRGB, and
//! the white point defaults to whatever white the working space uses. Resolving a context turns the
//! names into the actual table entries, in a [`ResolvedContext`], and that is what the conversions
//! work with.
//!
//! When more than one context applies to an operation (a color's stored context and one passed in
//! explicitly), [`ColorContext::overlay`] combines them: explicit fields win, stored fields fill the
//! gaps, and the defaults fill whatever's left.

use crate::adapt::adapt_white_point_named;
use crate::colors::rgbcolor;
use crate::illuminants::{lookup_white_point, WhitePoint};
use crate::linalg::Color3;
use crate::rgb_spaces::{lookup_rgb_space, RgbSpace, DEFAULT_RGB_SPACE};

/// The working space and white point a color is expressed against. Both are optional.
/// # Example
/// ```
/// # use vermilion::context::ColorContext;
/// let ctx = ColorContext::new().with_working_space("Adobe");
/// let resolved = ctx.resolve();
/// assert_eq!(resolved.rgb.name, "Adobe RGB (1998)");
/// // no white point was given, so the working space's own white is used
/// assert_eq!(resolved.white.name, "D65");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorContext {
    /// The name of the RGB working space, or `None` for the default.
    #[serde(default)]
    pub working_space: Option<String>,
    /// The name of the reference white, or `None` for the working space's white.
    #[serde(default)]
    pub white_point: Option<String>,
}

/// A context with every name resolved to its table entry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResolvedContext {
    /// The RGB working space.
    pub rgb: &'static RgbSpace,
    /// The effective reference white.
    pub white: &'static WhitePoint,
}

impl ColorContext {
    /// A context with nothing set: everything comes from the defaults.
    pub fn new() -> ColorContext {
        ColorContext::default()
    }

    /// Sets the working space.
    pub fn with_working_space(mut self, name: &str) -> ColorContext {
        self.working_space = Some(name.to_string());
        self
    }

    /// Sets the reference white.
    pub fn with_white_point(mut self, name: &str) -> ColorContext {
        self.white_point = Some(name.to_string());
        self
    }

    /// Combines this context with an explicitly given one. Fields set in `explicit` win; the rest
    /// come from `self`.
    /// # Example
    /// ```
    /// # use vermilion::context::ColorContext;
    /// let stored = ColorContext::new().with_working_space("NTSC").with_white_point("C");
    /// let explicit = ColorContext::new().with_white_point("D50");
    /// let combined = stored.overlay(&explicit);
    /// assert_eq!(combined.working_space.as_ref().map(String::as_str), Some("NTSC"));
    /// assert_eq!(combined.white_point.as_ref().map(String::as_str), Some("D50"));
    /// ```
    pub fn overlay(&self, explicit: &ColorContext) -> ColorContext {
        ColorContext {
            working_space: explicit
                .working_space
                .clone()
                .or_else(|| self.working_space.clone()),
            white_point: explicit
                .white_point
                .clone()
                .or_else(|| self.white_point.clone()),
        }
    }

    /// Replaces every name that is set with the canonical name it resolves to. Aliases become the
    /// name they point to, and unknown names become the fallback (with the usual warning). Unset
    /// fields stay unset.
    pub fn canonical(&self) -> ColorContext {
        ColorContext {
            working_space: self
                .working_space
                .as_ref()
                .map(|name| lookup_rgb_space(name).name.to_string()),
            white_point: self
                .white_point
                .as_ref()
                .map(|name| lookup_white_point(name).name.to_string()),
        }
    }

    /// Resolves the context, filling unset fields with the defaults.
    pub fn resolve(&self) -> ResolvedContext {
        let rgb = match self.working_space {
            Some(ref name) => lookup_rgb_space(name),
            None => {
                debug!("no working space set, defaulting to {}", DEFAULT_RGB_SPACE);
                lookup_rgb_space(DEFAULT_RGB_SPACE)
            }
        };
        let white = match self.white_point {
            Some(ref name) => lookup_white_point(name),
            None => {
                debug!(
                    "no white point set, defaulting to {}'s white {}",
                    rgb.name, rgb.white_point
                );
                lookup_white_point(rgb.white_point)
            }
        };
        ResolvedContext { rgb, white }
    }
}

impl ResolvedContext {
    /// The XYZ of the effective reference white.
    pub fn white_xyz(&self) -> Color3 {
        self.white.xyz()
    }

    /// Converts RGB in the working space to XYZ relative to the effective white. The working space's
    /// matrices are defined against its own white, so when the effective white is a different one
    /// the result is adapted to it.
    pub fn rgb_to_xyz(&self, rgb: Color3) -> Color3 {
        let native = rgbcolor::rgb_to_xyz(rgb, self.rgb);
        adapt_white_point_named(native, self.rgb.white_point, self.white.name)
    }

    /// Converts XYZ relative to the effective white to RGB in the working space, adapting to the
    /// working space's own white first if the two differ.
    pub fn xyz_to_rgb(&self, xyz: Color3) -> Color3 {
        let native = adapt_white_point_named(xyz, self.white.name, self.rgb.white_point);
        rgbcolor::xyz_to_rgb(native, self.rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::l1_distance;

    #[test]
    fn test_defaults() {
        let resolved = ColorContext::new().resolve();
        assert_eq!(resolved.rgb.name, "sRGB");
        assert_eq!(resolved.white.name, "D65");
        let ntsc = ColorContext::new().with_working_space("NTSC").resolve();
        assert_eq!(ntsc.white.name, "C");
    }

    #[test]
    fn test_canonical_names() {
        let ctx = ColorContext::new()
            .with_working_space("wide gamut")
            .with_white_point("icc")
            .canonical();
        assert_eq!(ctx.working_space, Some("WideGamut".to_string()));
        assert_eq!(ctx.white_point, Some("D50".to_string()));
        assert_eq!(ColorContext::new().canonical(), ColorContext::new());
    }

    #[test]
    fn test_overlay_keeps_stored_fields() {
        let stored = ColorContext::new().with_working_space("Apple RGB");
        let combined = stored.overlay(&ColorContext::new());
        assert_eq!(combined, stored);
        let explicit = ColorContext::new().with_working_space("sRGB");
        assert_eq!(
            stored.overlay(&explicit).working_space,
            Some("sRGB".to_string())
        );
    }

    #[test]
    fn test_native_white_skips_adaptation() {
        let resolved = ColorContext::new().with_working_space("sRGB").resolve();
        let xyz = resolved.rgb_to_xyz([0.3, 0.6, 0.2]);
        assert_eq!(xyz, rgbcolor::rgb_to_xyz([0.3, 0.6, 0.2], resolved.rgb));
    }

    #[test]
    fn test_foreign_white_round_trips() {
        let resolved = ColorContext::new()
            .with_working_space("sRGB")
            .with_white_point("D50")
            .resolve();
        // white RGB lands on the effective white
        let white = resolved.rgb_to_xyz([1.0, 1.0, 1.0]);
        assert!(l1_distance(white, resolved.white_xyz()) <= 1e-4);
        let rgb = [0.3, 0.6, 0.2];
        let back = resolved.xyz_to_rgb(resolved.rgb_to_xyz(rgb));
        assert!(l1_distance(rgb, back) <= 1e-5);
    }

    #[test]
    fn test_serde_round_trip() {
        let ctx = ColorContext::new().with_white_point("D50");
        let json = serde_json::to_string(&ctx).unwrap();
        let back: ColorContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ctx);
        let empty: ColorContext = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ColorContext::new());
    }
}

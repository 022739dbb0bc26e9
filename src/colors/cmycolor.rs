//! The subtractive device spaces, CMY and CMYK. These are the naive versions: CMY is just the
//! complement of RGB, and CMYK pulls the shared gray component out into K. Real printing needs an
//! ink profile, which is out of scope here.

use crate::linalg::{min3, Color3};

/// Converts RGB to CMY.
pub fn rgb_to_cmy(rgb: Color3) -> Color3 {
    [1.0 - rgb[0], 1.0 - rgb[1], 1.0 - rgb[2]]
}

/// Converts CMY to RGB.
pub fn cmy_to_rgb(cmy: Color3) -> Color3 {
    [1.0 - cmy[0], 1.0 - cmy[1], 1.0 - cmy[2]]
}

/// Converts CMY to CMYK by moving the smallest component into K.
/// # Example
/// ```
/// # use vermilion::colors::cmycolor::cmy_to_cmyk;
/// assert_eq!(cmy_to_cmyk([0.5, 0.75, 0.25]), [0.25, 0.5, 0., 0.25]);
/// ```
pub fn cmy_to_cmyk(cmy: Color3) -> [f64; 4] {
    let k = min3(cmy);
    [cmy[0] - k, cmy[1] - k, cmy[2] - k, k]
}

/// Converts CMYK to CMY by adding K back to each channel.
pub fn cmyk_to_cmy(cmyk: [f64; 4]) -> Color3 {
    let k = cmyk[3];
    [cmyk[0] + k, cmyk[1] + k, cmyk[2] + k]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white() {
        assert_eq!(rgb_to_cmy([0.0, 0.0, 0.0]), [1.0, 1.0, 1.0]);
        assert_eq!(cmy_to_cmyk([1.0, 1.0, 1.0]), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(cmy_to_cmyk(rgb_to_cmy([1.0, 1.0, 1.0])), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_one_channel_is_zero() {
        let cmyk = cmy_to_cmyk(rgb_to_cmy([0.2, 0.6, 0.4]));
        assert_eq!(cmyk.iter().take(3).filter(|&&c| c == 0.0).count(), 1);
    }

    #[test]
    fn test_k_adds_back() {
        assert_eq!(cmyk_to_cmy([0.25, 0.5, 0.0, 0.25]), [0.5, 0.75, 0.25]);
        assert_eq!(cmy_to_rgb([0.5, 0.75, 0.25]), [0.5, 0.25, 0.75]);
    }
}

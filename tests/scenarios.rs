//! Concrete conversions with known answers, and the public surface used the way a caller would.

use std::collections::HashMap;
use std::path::Path;

use vermilion::colors::{rgb_to_hsl, rgb_to_hsv, rgb_to_rgb255, rgbhex_to_rgb, xyz_to_lab};
use vermilion::illuminants::white_point_xyz;
use vermilion::prelude::*;
use vermilion::{list_colorspaces, list_rgb_spaces, list_white_points};

fn close(a: &[f64], b: &[f64], tol: f64) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tol)
}

#[test]
fn test_srgb_red() {
    let red = Color::new_rgb([1.0, 0.0, 0.0], ColorContext::new().with_working_space("sRGB"));
    assert!(close(&red.as_xyz(), &[0.4124, 0.2127, 0.0193], 1e-3));
    assert!(close(&red.as_lab(), &[53.24, 80.09, 67.20], 0.05));
    assert_eq!(rgb_to_hsl([1.0, 0.0, 0.0]), [0.0, 1.0, 0.5]);
    assert_eq!(rgb_to_hsv([1.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
    assert_eq!(rgbhex_to_rgb("#FF0000").unwrap(), [1.0, 0.0, 0.0]);
    assert_eq!(rgb_to_rgb255([1.0, 0.0, 0.0]), [255, 0, 0]);
}

#[test]
fn test_lab_of_reference_whites() {
    for white in list_white_points() {
        let w = white_point_xyz(white);
        assert!(close(&xyz_to_lab(w, w), &[100.0, 0.0, 0.0], 1e-9), "{}", white);
    }
}

#[test]
fn test_ycbcr_of_grays() {
    let black = Color::new_rgb([0.0, 0.0, 0.0], ColorContext::new());
    assert!(close(&black.as_ycbcr(), &[16.0, 128.0, 128.0], 1e-9));
    let white = Color::new_rgb255([255, 255, 255], ColorContext::new());
    assert!(close(&white.as_ycbcr(), &[235.0, 128.0, 128.0], 1e-6));
}

#[test]
fn test_cmyk_of_orange() {
    let orange = Color::new_rgb255([255, 128, 0], ColorContext::new());
    let cmyk = orange.as_cmyk();
    assert!(close(&cmyk, &[0.0, 127.0 / 255.0, 1.0, 0.0], 1e-9));
    let back = Color::new_cmyk(cmyk, ColorContext::new());
    assert_eq!(back.as_rgbhex(), "#FF8000");
}

#[test]
fn test_setters_leave_xyz_bit_identical() {
    for ctx in vec![
        ColorContext::new(),
        ColorContext::new().with_working_space("NTSC"),
        ColorContext::new().with_working_space("ProPhoto"),
    ] {
        let mut color = Color::new_rgb([0.1, 0.5, 0.9], ctx);
        let xyz = color.as_xyz();
        let space = color.working_space();
        let white = color.white_point();
        color.set_working_space(space);
        color.set_white_point(white);
        assert_eq!(color.as_xyz(), xyz);
        assert_eq!(color.working_space(), space);
        assert_eq!(color.white_point(), white);
    }
}

#[test]
fn test_white_point_change_keeps_appearance() {
    let mut color = Color::new_lab([60.0, 20.0, -30.0], ColorContext::new());
    let d65 = color.clone();
    color.set_white_point("D50");
    assert!(color.equals(&d65, None));
    assert!(!close(&color.as_xyz(), &d65.as_xyz(), 1e-3));
}

#[test]
fn test_achromatic_inputs() {
    for &v in &[0.0, 0.2, 0.5, 1.0] {
        assert_eq!(rgb_to_hsv([v, v, v]), [0.0, 0.0, v]);
        assert_eq!(rgb_to_hsl([v, v, v]), [0.0, 0.0, v]);
        let gray = Color::new_hsv([123.0, 0.0, v], ColorContext::new());
        assert!(close(&gray.as_rgb(), &[v, v, v], 1e-9));
    }
}

#[test]
fn test_unimplemented_spaces_fail_fast() {
    let color = Color::new_rgb([0.5, 0.2, 0.1], ColorContext::new());
    for space in &[Space::YUV, Space::YIQ, Space::YCC] {
        match color.read(*space) {
            Err(Error::NotImplemented(s)) => assert_eq!(s, *space),
            other => panic!("expected NotImplemented, got {:?}", other),
        }
    }
    let err = convert(ColorValue::RGB([0.5, 0.2, 0.1]), &ColorContext::new(), Space::YIQ)
        .unwrap_err();
    assert_eq!(err.to_string(), "conversion to or from YIQ is not implemented");
}

#[test]
fn test_generic_conversion() {
    let lab = convert(
        ColorValue::RGBhex("#336699".into()),
        &ColorContext::new(),
        "lab".parse().unwrap(),
    )
    .unwrap();
    match lab {
        ColorValue::Lab(v) => assert!(close(&v, &[42.01, -0.15, -32.85], 0.05), "{:?}", v),
        other => panic!("asked for Lab, got {:?}", other),
    }
    let bad = ColorValue::RGBhex("336699z".into());
    assert!(convert(bad, &ColorContext::new(), Space::XYZ).is_err());
}

#[test]
fn test_listings() {
    assert_eq!(list_colorspaces().len(), 15);
    assert_eq!(list_rgb_spaces().len(), 16);
    assert_eq!(
        list_white_points(),
        vec!["A", "B", "C", "D50", "D55", "D65", "D75", "E", "F11", "F2", "F7"]
    );
}

struct Palette {
    colors: HashMap<String, [f64; 3]>,
}

impl NameLookup for Palette {
    fn lookup(&self, name: &str) -> Option<[f64; 3]> {
        self.colors.get(&name.to_lowercase()).cloned()
    }
}

#[test]
fn test_named_colors() {
    let mut colors = HashMap::new();
    colors.insert("brand".to_string(), [0.9, 0.25, 0.2]);
    let palette = Palette { colors };
    let brand = Color::new_named("BRAND", &palette, ColorContext::new()).unwrap();
    assert!(close(&brand.as_rgb(), &[0.9, 0.25, 0.2], 1e-9));
    match Color::new_named("off-brand", &palette, ColorContext::new()) {
        Err(Error::UnknownColorName(name)) => assert_eq!(name, "off-brand"),
        other => panic!("expected UnknownColorName, got {:?}", other),
    }

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/basic_colors.csv");
    let table = NameTable::from_path(&path).unwrap();
    assert_eq!(&table, NameTable::basic());
    let olive = Color::new_named("Olive", &table, ColorContext::new()).unwrap();
    assert_eq!(olive.as_rgb255(), [128, 128, 0]);
}

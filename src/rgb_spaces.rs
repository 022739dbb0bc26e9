//! This module provides the table of RGB working spaces. An RGB working space is fully described by
//! three things: the reference white its primaries are balanced against, the gamma curve used to
//! encode light-linear values, and the 3x3 matrix that takes light-linear RGB to CIE XYZ. Every
//! entry here carries the forward matrix and its inverse, both derived from the published primary
//! chromaticities and stored at full precision so that going to XYZ and back is exact up to
//! floating-point error.
//!
//! Both matrices are laid out for row vectors: `xyz = rgb_linear · m` and
//! `rgb_linear = xyz · m_inv`, so they are used with [`vec_times_mat`](crate::linalg::vec_times_mat).
//!
//! Many spaces go by more than one name. Aliases are a separate table that points straight at a
//! canonical entry, so every alias resolves in exactly one hop and cycles are impossible.

use std::collections::HashMap;

use crate::linalg::{Color3, Matrix3};

/// The working space used whenever none is given or the given one is unknown.
pub const DEFAULT_RGB_SPACE: &str = "sRGB";

/// How a working space encodes light-linear values.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub enum Gamma {
    /// A pure power law: encoded values are `linear^(1/γ)`, applied with the sign preserved.
    Power(f64),
    /// The piecewise sRGB curve: a short linear segment near black, then a 2.4 power law with an
    /// offset.
    Srgb,
}

/// A named RGB working space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct RgbSpace {
    /// The canonical name of the space.
    pub name: &'static str,
    /// The name of the white point the primaries are balanced against.
    pub white_point: &'static str,
    /// The encoding curve.
    pub gamma: Gamma,
    /// Light-linear RGB to XYZ, for row vectors.
    pub m: Matrix3,
    /// XYZ to light-linear RGB, for row vectors.
    pub m_inv: Matrix3,
}

impl RgbSpace {
    /// The XYZ coordinates of pure red, green, and blue in this space, in that order. These are just
    /// the rows of the forward matrix.
    pub fn primaries_xyz(&self) -> [Color3; 3] {
        self.m
    }
}

macro_rules! rgb_space {
    ($name:expr, $white:expr, $gamma:expr, $m:expr, $m_inv:expr) => {
        (
            $name,
            RgbSpace {
                name: $name,
                white_point: $white,
                gamma: $gamma,
                m: $m,
                m_inv: $m_inv,
            },
        )
    };
}

lazy_static! {
    static ref RGB_SPACES: HashMap<&'static str, RgbSpace> = [
        rgb_space!(
            "Adobe RGB (1998)",
            "D65",
            Gamma::Power(2.2),
            [
                [0.5766680923931057, 0.2973444851401951, 0.027031316830926827],
                [0.18556194899344525, 0.6273761132635529, 0.07069026628321723],
                [0.18819850399062982, 0.07527940159625193, 0.9911787876839837],
            ],
            [
                [2.041591268942416, -0.9692242522025166, 0.013446433894589058],
                [-0.5650079055749646, 1.875929983695176, -0.11838134938569583],
                [-0.344731918996031, 0.041554226340084724, 1.0153375868247543],
            ]
        ),
        rgb_space!(
            "Apple RGB",
            "D65",
            Gamma::Power(1.8),
            [
                [0.44965881392543455, 0.2446143947754364, 0.025180893579824334],
                [0.3162636630677017, 0.6720602840188661, 0.1411891352980811],
                [0.18450606838404446, 0.0833253212056975, 0.9225303419202223],
            ],
            [
                [2.9519969159216783, -1.0850576886392607, 0.0854870924413869],
                [-1.2896123581299181, 1.9907618462891166, -0.26947661319758986],
                [-0.4739182669661495, 0.03720079032109321, 1.091217591751821],
            ]
        ),
        rgb_space!(
            "Best RGB",
            "D50",
            Gamma::Power(2.2),
            [
                [0.6326642357012516, 0.22845490912146732, 0.0],
                [0.20455659324952943, 0.73735516171342, 0.009514260151140904],
                [0.12699116547041842, 0.034189929165112654, 0.8156740243676875],
            ],
            [
                [1.7552749543332502, -0.5441315140605228, 0.006346908969204001],
                [-0.4836827006857772, 1.5068730621193598, -0.017576607688180097],
                [-0.2530022150171501, 0.021552742100228, 1.2257285529960715],
            ]
        ),
        rgb_space!(
            "Beta RGB",
            "D50",
            Gamma::Power(2.2),
            [
                [0.6712480953569409, 0.30327004540516844, 0.0],
                [0.17458429798795724, 0.6637895438605564, 0.04070117319658822],
                [0.11837960107630131, 0.03294041073427515, 0.7844871113222402],
            ],
            [
                [1.6832410092416292, -0.771018883572531, 0.040002407515953804],
                [-0.42823985898979683, 1.7065482230230056, -0.08854003308801085],
                [-0.23602045166721372, 0.04468971886140448, 1.272399586438198],
            ]
        ),
        rgb_space!(
            "Bruce RGB",
            "D65",
            Gamma::Power(2.2),
            [
                [0.4673486569755949, 0.24097665125304113, 0.02190696829573101],
                [0.29446392220849604, 0.683576962269723, 0.07361598055212401],
                [0.18861596619308976, 0.07544638647723591, 0.9933774219502728],
            ],
            [
                [2.7458634392057193, -0.9692242522025166, 0.01127149676073601],
                [-1.1359776686445024, 1.875929983695176, -0.11396735613633076],
                [-0.43508969083821236, 0.041554226340084724, 1.0131823199372703],
            ]
        ),
        rgb_space!(
            "CIE",
            "E",
            Gamma::Power(2.2),
            [
                [0.4887179654811715, 0.17620443653402784, 0.0],
                [0.31068034326701394, 0.812984693877551, 0.010204828793442063],
                [0.20060169125181454, 0.010810869588421142, 0.9897951712065579],
            ],
            [
                [2.3706743291021386, -0.5138849665819448, 0.005298175073030401],
                [-0.900040532785405, 1.4253035865574697, -0.014694938410103187],
                [-0.47063379631673363, 0.0885813800244752, 1.0093967633370728],
            ]
        ),
        rgb_space!(
            "ColorMatch",
            "D50",
            Gamma::Power(1.8),
            [
                [0.509337426218845, 0.2748805157371545, 0.024254163153278337],
                [0.32090983398402656, 0.6581371171536816, 0.10878299457085647],
                [0.1339647342183278, 0.0669823671091639, 0.6921511267946936],
            ],
            [
                [2.6423207519138114, -1.1119667638044366, 0.0821725106091906],
                [-1.2234424722353572, 2.059000658336445, -0.28073447630837045],
                [-0.39301926112183216, 0.015961245413460813, 1.456034675368529],
            ]
        ),
        rgb_space!(
            "Don RGB 4",
            "D50",
            Gamma::Power(2.2),
            [
                [0.6457655940894033, 0.2783472388316393, 0.003711296517755191],
                [0.19335203167972712, 0.6879735080697267, 0.017986235505090892],
                [0.1250943686520691, 0.03367925309863399, 0.8034907524959823],
            ],
            [
                [1.7604053474791752, -0.7126253637897092, 0.007820950477108476],
                [-0.4881239918548025, 1.6527352261977024, -0.034742045316679154],
                [-0.25361479695493977, 0.041671334581727684, 1.2448080157340615],
            ]
        ),
        rgb_space!(
            "ECI",
            "D50",
            Gamma::Power(1.8),
            [
                [0.6501987756260722, 0.32024715814418486, 0.0],
                [0.17807883141407782, 0.6020760490666441, 0.0678395548244106],
                [0.13593438738104935, 0.07767679278917106, 0.7573487296944178],
            ],
            [
                [1.782776799170763, -0.9593543859649123, 0.08593422278395502],
                [-0.4969889286690874, 1.9477801169590643, -0.1744725129249996],
                [-0.26901235588510236, -0.027580506822612087, 1.3228662174014894],
            ]
        ),
        rgb_space!(
            "Ekta Space PS5",
            "D50",
            Gamma::Power(2.2),
            [
                [0.5938849915780864, 0.2606257876709588, 0.0],
                [0.2729812069869819, 0.7349494034264898, 0.04199710876722799],
                [0.09734579585613114, 0.004424808902551415, 0.7831911757516005],
            ],
            [
                [2.004403440958456, -0.7110257243940881, 0.03812737631398749],
                [-0.7304922600102107, 1.620206158865217, -0.08688041487941411],
                [-0.24500781605127583, 0.07922237162601536, 1.2725793143488284],
            ]
        ),
        rgb_space!(
            "NTSC",
            "C",
            Gamma::Power(2.2),
            [
                [0.6068638092956182, 0.2989030702500806, 0.0],
                [0.17350728095553725, 0.5866198546591973, 0.06609801179258562],
                [0.20033488140876357, 0.11447707509072204, 1.11615148213454],
            ],
            [
                [1.9100814289466772, -0.9846313481702315, 0.05830944589908316],
                [-0.5324779431078972, 1.9991000099213792, -0.11838584470419913],
                [-0.2882220059024398, -0.028307194935740923, 0.8976120762646741],
            ]
        ),
        rgb_space!(
            "PAL/SECAM",
            "D65",
            Gamma::Power(2.2),
            [
                [0.4305499405695949, 0.22200231310619736, 0.02018202846419976],
                [0.3415566343833116, 0.7066688987240929, 0.1295559647660837],
                [0.17832197042427422, 0.0713287881697097, 0.9391623775678443],
            ],
            [
                [3.063388644757234, -0.9692242522025166, 0.06787259345765422],
                [-1.3934027083341634, 1.875929983695176, -0.2288381976140582],
                [-0.47582801799181684, 0.041554226340084724, 1.0692715133246835],
            ]
        ),
        rgb_space!(
            "ProPhoto",
            "D50",
            Gamma::Power(1.8),
            [
                [0.7976672347917348, 0.2880374539134984, 0.0],
                [0.13519223060072058, 0.7118768834388821, 0.0],
                [0.031352529028744025, 8.56626476195192e-05, 0.8251882845188284],
            ],
            [
                [1.3459563097929053, -0.5445967379622615, 0.0],
                [-0.2556099798226412, 1.5081614149297908, 0.0],
                [-0.051112259877959164, 0.020535061214497864, 1.2118446405029917],
            ]
        ),
        rgb_space!(
            "SMPTE-C",
            "D65",
            Gamma::Power(2.2),
            [
                [0.39351682034042373, 0.21237415700911758, 0.018738896206686843],
                [0.36526674686159905, 0.7010764980085531, 0.11193658371565132],
                [0.1916449781751579, 0.08654934498232938, 0.9582248908757895],
            ],
            [
                [3.5060396626935977, -1.0690221844360916, 0.05631598429566508],
                [-1.7398087792045187, 1.9777319372352484, -0.19700851253604634],
                [-0.5440639137718598, 0.03517058449177655, 1.0501274718662252],
            ]
        ),
        rgb_space!(
            "sRGB",
            "D65",
            Gamma::Srgb,
            [
                [0.4123865632529917, 0.21263682167732384, 0.019330620152483987],
                [0.35759149092062537, 0.7151829818412507, 0.11919716364020845],
                [0.18045049120356368, 0.07218019648142547, 0.9503725870054354],
            ],
            [
                [3.2410032329763587, -0.9692242522025166, 0.055639419851975444],
                [-1.5373989694887855, 1.875929983695176, -0.20401120612390997],
                [-0.4986158819963629, 0.041554226340084724, 1.0571489771875335],
            ]
        ),
        rgb_space!(
            "WideGamut",
            "D50",
            Gamma::Power(2.2),
            [
                [0.7161004490503358, 0.2581858761882163, 0.0],
                [0.100929874200734, 0.724939792085272, 0.05178141372037657],
                [0.14718167117012962, 0.016874331726511677, 0.7734068707984518],
            ],
            [
                [1.4628151283182433, -0.5217919030812773, 0.03493519831482772],
                [-0.18406340024453907, 1.4472341462820335, -0.09689573872225803],
                [-0.2743622229594697, 0.06772256260688964, 1.288446311497965],
            ]
        ),
    ]
    .iter()
    .cloned()
    .collect();

    // every target here must be a key of RGB_SPACES: aliases never chain
    static ref RGB_SPACE_ALIASES: HashMap<&'static str, &'static str> = hashmap! {
        "Adobe" => "Adobe RGB (1998)",
        "AdobeRGB" => "Adobe RGB (1998)",
        "Adobe RGB" => "Adobe RGB (1998)",
        "Apple" => "Apple RGB",
        "MacRGB" => "Apple RGB",
        "Best" => "Best RGB",
        "Beta" => "Beta RGB",
        "Bruce" => "Bruce RGB",
        "CIE RGB" => "CIE",
        "Don RGB" => "Don RGB 4",
        "DonRGB4" => "Don RGB 4",
        "ECI RGB" => "ECI",
        "Ekta Space" => "Ekta Space PS5",
        "601" => "NTSC",
        "NTSC (1953)" => "NTSC",
        "PAL" => "PAL/SECAM",
        "SECAM" => "PAL/SECAM",
        "CIE ITU" => "PAL/SECAM",
        "ROMM RGB" => "ProPhoto",
        "ProPhoto RGB" => "ProPhoto",
        "SMPTE" => "SMPTE-C",
        "709" => "sRGB",
        "HDTV" => "sRGB",
        "Rec. 709" => "sRGB",
        "Wide Gamut" => "WideGamut",
    };
}

/// Finds a working space by name without any fallback. Names are matched exactly first, then
/// case-insensitively; aliases resolve in a single hop.
pub fn find_rgb_space(name: &str) -> Option<&'static RgbSpace> {
    if let Some(space) = RGB_SPACES.get(name) {
        return Some(space);
    }
    if let Some(target) = RGB_SPACE_ALIASES.get(name) {
        return RGB_SPACES.get(target);
    }
    RGB_SPACES
        .values()
        .find(|space| space.name.eq_ignore_ascii_case(name))
        .or_else(|| {
            RGB_SPACE_ALIASES
                .iter()
                .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                .and_then(|(_, target)| RGB_SPACES.get(target))
        })
}

/// Looks up a working space by name, falling back to sRGB with a warning if the name is unknown.
/// # Example
/// ```
/// # use vermilion::rgb_spaces::lookup_rgb_space;
/// assert_eq!(lookup_rgb_space("Adobe").name, "Adobe RGB (1998)");
/// assert_eq!(lookup_rgb_space("NTSC").white_point, "C");
/// assert_eq!(lookup_rgb_space("not-a-real-space").name, "sRGB");
/// ```
pub fn lookup_rgb_space(name: &str) -> &'static RgbSpace {
    match find_rgb_space(name) {
        Some(space) => space,
        None => {
            warn!("unknown RGB space {:?}, using {}", name, DEFAULT_RGB_SPACE);
            &RGB_SPACES[DEFAULT_RGB_SPACE]
        }
    }
}

/// The canonical names of every known working space, sorted.
pub fn list_rgb_spaces() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = RGB_SPACES.keys().cloned().collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminants::{find_white_point, white_point_xyz};
    use crate::linalg::{mat_times_mat, vec_times_mat, IDENTITY};

    #[test]
    fn test_matrices_are_inverse() {
        for name in list_rgb_spaces() {
            let space = lookup_rgb_space(name);
            let prod = mat_times_mat(&space.m, &space.m_inv);
            for i in 0..3 {
                for j in 0..3 {
                    assert!(
                        (prod[i][j] - IDENTITY[i][j]).abs() <= 1e-12,
                        "{}: m · m_inv is off at ({}, {})",
                        name,
                        i,
                        j
                    );
                }
            }
        }
    }

    #[test]
    fn test_white_maps_to_white_point() {
        // (1, 1, 1) is linear white, which has to land on the space's reference white
        for name in list_rgb_spaces() {
            let space = lookup_rgb_space(name);
            let white = vec_times_mat([1.0, 1.0, 1.0], &space.m);
            let expected = white_point_xyz(space.white_point);
            for i in 0..3 {
                assert!((white[i] - expected[i]).abs() <= 1e-12, "{}", name);
            }
        }
    }

    #[test]
    fn test_srgb_primaries() {
        let srgb = lookup_rgb_space("sRGB");
        let red = srgb.primaries_xyz()[0];
        assert!((red[0] - 0.4124).abs() <= 1e-3);
        assert!((red[1] - 0.2126).abs() <= 1e-3);
        assert!((red[2] - 0.0193).abs() <= 1e-3);
        assert_eq!(srgb.gamma, Gamma::Srgb);
    }

    #[test]
    fn test_aliases_resolve_in_one_hop() {
        for (alias, target) in RGB_SPACE_ALIASES.iter() {
            assert!(RGB_SPACES.contains_key(target), "{} -> {}", alias, target);
            assert!(!RGB_SPACES.contains_key(alias));
            assert_eq!(lookup_rgb_space(alias).name, *target);
        }
    }

    #[test]
    fn test_every_space_has_a_known_white_point() {
        for name in list_rgb_spaces() {
            let space = lookup_rgb_space(name);
            assert!(find_white_point(space.white_point).is_some(), "{}", name);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(find_rgb_space("srgb").map(|s| s.name), Some("sRGB"));
        assert_eq!(find_rgb_space("widegamut").map(|s| s.name), Some("WideGamut"));
        assert_eq!(find_rgb_space("romm rgb").map(|s| s.name), Some("ProPhoto"));
        assert!(find_rgb_space("not-a-real-space").is_none());
    }

    #[test]
    fn test_listing() {
        let names = list_rgb_spaces();
        assert_eq!(names.len(), 16);
        assert!(names.contains(&"NTSC"));
        assert!(!names.contains(&"Adobe"));
    }
}

//! Chromatic adaptation: re-expressing an XYZ color measured under one reference white as the color
//! that would look the same under another. This uses the Bradford transform, the same one used by
//! Photoshop and most ICC workflows: project into a sharpened cone-response space, scale each cone
//! by the ratio of the two whites, and project back.
//!
//! The projection back uses the published, rounded inverse of the Bradford matrix rather than an
//! exact one, so adapting from A to B and back to A lands close to, but not exactly on, the
//! starting color.

use crate::consts::{BRADFORD_INVERSE_MAT, BRADFORD_TRANSFORM_MAT};
use crate::illuminants::lookup_white_point;
use crate::linalg::{diag, mat_times_mat, vec_times_mat, Color3, Matrix3};

/// Builds the single 3x3 matrix (for row vectors) that adapts colors from `white_old` to
/// `white_new`, both given as XYZ.
pub fn adaptation_matrix(white_old: Color3, white_new: Color3) -> Matrix3 {
    let cone_old = vec_times_mat(white_old, &BRADFORD_TRANSFORM_MAT);
    let cone_new = vec_times_mat(white_new, &BRADFORD_TRANSFORM_MAT);
    let scale = diag([
        cone_new[0] / cone_old[0],
        cone_new[1] / cone_old[1],
        cone_new[2] / cone_old[2],
    ]);
    mat_times_mat(
        &mat_times_mat(&BRADFORD_TRANSFORM_MAT, &scale),
        &BRADFORD_INVERSE_MAT,
    )
}

/// Adapts `xyz` from the reference white `white_old` to `white_new`, both given as XYZ.
/// # Example
/// ```
/// # use vermilion::adapt::adapt_white_point;
/// # use vermilion::illuminants::white_point_xyz;
/// // the old white maps onto the new white
/// let d65 = white_point_xyz("D65");
/// let d50 = white_point_xyz("D50");
/// let adapted = adapt_white_point(d65, d65, d50);
/// for i in 0..3 {
///     assert!((adapted[i] - d50[i]).abs() <= 1e-4);
/// }
/// ```
pub fn adapt_white_point(xyz: Color3, white_old: Color3, white_new: Color3) -> Color3 {
    vec_times_mat(xyz, &adaptation_matrix(white_old, white_new))
}

/// Like [`adapt_white_point`], but with the whites given by name. Returns `xyz` untouched when both
/// names resolve to the same white point: the Bradford round trip is not exactly the identity, so
/// it is skipped rather than applied with a unit scale.
pub fn adapt_white_point_named(xyz: Color3, white_old: &str, white_new: &str) -> Color3 {
    let old = lookup_white_point(white_old);
    let new = lookup_white_point(white_new);
    if old.name == new.name {
        xyz
    } else {
        adapt_white_point(xyz, old.xyz(), new.xyz())
    }
}

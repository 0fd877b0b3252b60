// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS `matrix(a, b, c, d, e, f)` parsing and serialization.
//!
//! Coefficients are in the same order as [`Affine::as_coeffs`], so the
//! translation lives in the last two slots.

use alloc::{format, string::String};

use kurbo::{Affine, Vec2};

const MATRIX_OPEN: &str = "matrix(";

/// Parses a computed CSS transform, falling back to [`Affine::IDENTITY`].
///
/// Browsers report `none` for untransformed elements and `matrix3d(...)` for
/// 3D transforms; both, and any other text that is not a well-formed
/// six-coefficient `matrix(...)`, produce the identity.
///
/// ```
/// use kurbo::Affine;
/// use panzoom_transform::parse_matrix;
///
/// let m = parse_matrix("matrix(1, 0, 0, 1, 50, 60)");
/// assert_eq!(m.as_coeffs(), [1.0, 0.0, 0.0, 1.0, 50.0, 60.0]);
/// assert_eq!(parse_matrix("none"), Affine::IDENTITY);
/// ```
#[must_use]
pub fn parse_matrix(text: &str) -> Affine {
    try_parse_matrix(text).unwrap_or(Affine::IDENTITY)
}

/// Parses a CSS `matrix(...)` value, returning `None` if it is malformed.
///
/// Exactly six finite numbers are required.
#[must_use]
pub fn try_parse_matrix(text: &str) -> Option<Affine> {
    let start = text.find(MATRIX_OPEN)? + MATRIX_OPEN.len();
    let end = text.rfind(')')?;
    let body = text.get(start..end)?;

    let mut coeffs = [0.0_f64; 6];
    let mut parts = body.split(',');
    for slot in &mut coeffs {
        let value: f64 = parts.next()?.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        *slot = value;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Affine::new(coeffs))
}

/// Serializes a matrix as a CSS `matrix(a,b,c,d,e,f)` value.
///
/// Whole numbers are written without a fractional part.
///
/// ```
/// use kurbo::Affine;
/// use panzoom_transform::format_matrix;
///
/// let m = Affine::new([2.0, 0.0, 0.0, 2.0, 10.5, -4.0]);
/// assert_eq!(format_matrix(m), "matrix(2,0,0,2,10.5,-4)");
/// ```
#[must_use]
pub fn format_matrix(matrix: Affine) -> String {
    let [a, b, c, d, e, f] = matrix.as_coeffs();
    format!("matrix({a},{b},{c},{d},{e},{f})")
}

/// Replaces the translation of `matrix`, keeping its scale/skew part.
#[must_use]
pub fn with_translation(matrix: Affine, translation: Vec2) -> Affine {
    matrix.with_translation(translation)
}

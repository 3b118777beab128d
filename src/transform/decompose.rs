//! Decomposition of matrices into elementary transform functions.
//!
//! Two factorizations are computed for every matrix, a QR-like one
//! (translate, rotate, scale, skewX) and an LDU-like one (translate, skewY,
//! scale, skewX). After dropping identity functions, the one with the lower
//! total weight wins: skews and non-uniform scales are the most expensive,
//! then rotations.

use super::TransformFunction;
use crate::math;
use crate::primitives::Matrix;

/// Decomposes a matrix into an equivalent list of transform functions.
///
/// Composing the result reproduces `matrix` up to floating point error.
pub fn decompose(matrix: &Matrix) -> Vec<TransformFunction> {
    let qr = remove_redundant(qr_decompose(matrix));
    let ldu = remove_redundant(ldu_decompose(matrix));

    if total_weight(&ldu) < total_weight(&qr) {
        ldu
    } else {
        qr
    }
}

/// Drops functions that do not move any point.
pub fn remove_redundant(functions: Vec<TransformFunction>) -> Vec<TransformFunction> {
    functions.into_iter().filter(|f| !f.is_identity()).collect()
}

fn total_weight(functions: &[TransformFunction]) -> u64 {
    functions.iter().map(TransformFunction::weight).sum()
}

fn qr_decompose(m: &Matrix) -> Vec<TransformFunction> {
    let Matrix { a, b, c, d, e, f } = *m;
    let det = m.determinant();
    let mut result = vec![TransformFunction::translate(e, f)];

    if a != 0.0 || b != 0.0 {
        let r2 = a * a + b * b;
        let r = r2.sqrt();
        result.push(TransformFunction::rotate(math::atan2_deg(b, a)));
        result.push(TransformFunction::scale(r, det / r));
        result.push(TransformFunction::skew_x(math::atan_deg((a * c + b * d) / r2)));
    } else if c != 0.0 || d != 0.0 {
        let s2 = c * c + d * d;
        let s = s2.sqrt();
        result.push(TransformFunction::rotate(math::atan2_deg(-c, d)));
        result.push(TransformFunction::scale(det / s, s));
        result.push(TransformFunction::skew_y(math::atan_deg((a * c + b * d) / s2)));
    } else {
        result.push(TransformFunction::scale(0.0, 0.0));
    }

    result
}

fn ldu_decompose(m: &Matrix) -> Vec<TransformFunction> {
    let Matrix { a, b, c, d, e, f } = *m;
    let det = m.determinant();
    let mut result = vec![TransformFunction::translate(e, f)];

    if a != 0.0 {
        result.push(TransformFunction::skew_y(math::atan_deg(b / a)));
        result.push(TransformFunction::scale(a, det / a));
        result.push(TransformFunction::skew_x(math::atan_deg(c / a)));
    } else if b != 0.0 {
        result.push(TransformFunction::rotate(90.0));
        result.push(TransformFunction::scale(b, det / b));
        result.push(TransformFunction::skew_x(math::atan_deg(d / b)));
    } else {
        result.push(TransformFunction::scale(c, d));
        result.push(TransformFunction::skew_x(45.0));
        result.push(TransformFunction::scale(0.0, 1.0));
    }

    result
}

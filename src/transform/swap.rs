//! Reordering of adjacent transform functions.
//!
//! In a transform list `[a, b]` the combined matrix is `A * B`, so `b` acts
//! on the geometry first. [`swap`] rewrites the pair as `[b', a']` with
//! `B' * A' == A * B`.

use super::TransformFunction;
use crate::error::{Result, SvgError};
use crate::format::SvgSerialize;
use crate::math;
use crate::primitives::Point;

fn swap_error(a: &TransformFunction, b: &TransformFunction) -> SvgError {
    SvgError::TransformSwap {
        first: a.serialize(),
        second: b.serialize(),
    }
}

fn translation(tx: f64, ty: Option<f64>) -> Point {
    Point::new(tx, ty.unwrap_or(0.0))
}

/// Swaps two adjacent transform functions, adjusting their parameters so
/// that the combined transform is unchanged.
///
/// # Example
///
/// ```
/// use svgmodel::transform::{swap, TransformFunction};
///
/// let (scale, translate) = swap(
///     &TransformFunction::translate(10.0, 20.0),
///     &TransformFunction::scale(2.0, 4.0),
/// )
/// .unwrap();
///
/// assert_eq!(scale, TransformFunction::scale(2.0, 4.0));
/// assert_eq!(translate, TransformFunction::translate(5.0, 5.0));
/// ```
///
/// # Errors
///
/// Returns [`SvgError::TransformSwap`] for pairs without a swap rule, which
/// includes every pair involving a raw matrix and rotations next to
/// non-uniform scales.
pub fn swap(
    a: &TransformFunction,
    b: &TransformFunction,
) -> Result<(TransformFunction, TransformFunction)> {
    use TransformFunction::{Rotate, Scale, SkewX, SkewY, Translate};

    let swapped = match (*a, *b) {
        (Translate { .. }, Translate { .. }) | (Scale { .. }, Scale { .. }) => (*b, *a),
        (SkewX { .. }, SkewX { .. }) | (SkewY { .. }, SkewY { .. }) => (*b, *a),
        (Rotate { center: c1, .. }, Rotate { center: c2, .. })
            if c1.unwrap_or_default().is_close(c2.unwrap_or_default()) =>
        {
            (*b, *a)
        }

        (Translate { tx, ty }, Scale { sx, sy }) => {
            let sy = sy.unwrap_or(sx);
            if sx == 0.0 || sy == 0.0 {
                return Err(swap_error(a, b));
            }
            let t = translation(tx, ty);
            (*b, TransformFunction::translate(t.x / sx, t.y / sy))
        }
        (Scale { sx, sy }, Translate { tx, ty }) => {
            let t = translation(tx, ty);
            (TransformFunction::translate(t.x * sx, t.y * sy.unwrap_or(sx)), *a)
        }

        (Rotate { angle, center }, Translate { tx, ty }) => {
            let t = translation(tx, ty);
            let center = center.unwrap_or_default() - t;
            (*b, TransformFunction::rotate_around(angle, center))
        }
        (Translate { tx, ty }, Rotate { angle, center }) => {
            let t = translation(tx, ty);
            let center = center.unwrap_or_default() + t;
            (TransformFunction::rotate_around(angle, center), *a)
        }

        (Rotate { angle, center }, Scale { sx, sy }) => {
            let factor = uniform_factor(sx, sy).ok_or_else(|| swap_error(a, b))?;
            if factor == 0.0 {
                return Err(swap_error(a, b));
            }
            let swapped = match center {
                Some(c) => TransformFunction::rotate_around(angle, c / factor),
                None => *a,
            };
            (*b, swapped)
        }
        (Scale { sx, sy }, Rotate { angle, center }) => {
            let factor = uniform_factor(sx, sy).ok_or_else(|| swap_error(a, b))?;
            let swapped = match center {
                Some(c) => TransformFunction::rotate_around(angle, c * factor),
                None => *b,
            };
            (swapped, *a)
        }

        (SkewX { angle }, Translate { tx, ty }) => {
            let t = translation(tx, ty);
            let tx = t.x + t.y * math::tan_deg(angle);
            (TransformFunction::translate(tx, t.y), *a)
        }
        (Translate { tx, ty }, SkewX { angle }) => {
            let t = translation(tx, ty);
            let tx = t.x - t.y * math::tan_deg(angle);
            (*b, TransformFunction::translate(tx, t.y))
        }
        (SkewY { angle }, Translate { tx, ty }) => {
            let t = translation(tx, ty);
            let ty = t.y + t.x * math::tan_deg(angle);
            (TransformFunction::translate(t.x, ty), *a)
        }
        (Translate { tx, ty }, SkewY { angle }) => {
            let t = translation(tx, ty);
            let ty = t.y - t.x * math::tan_deg(angle);
            (*b, TransformFunction::translate(t.x, ty))
        }

        (Scale { sx, sy }, SkewX { angle }) => {
            let sy = sy.unwrap_or(sx);
            let angle = skew_through_scale(angle, sx, sy).ok_or_else(|| swap_error(a, b))?;
            (TransformFunction::skew_x(angle), *a)
        }
        (SkewX { angle }, Scale { sx, sy }) => {
            let sy = sy.unwrap_or(sx);
            let angle = skew_through_scale(angle, sy, sx).ok_or_else(|| swap_error(a, b))?;
            (*b, TransformFunction::skew_x(angle))
        }
        (Scale { sx, sy }, SkewY { angle }) => {
            let sy = sy.unwrap_or(sx);
            let angle = skew_through_scale(angle, sy, sx).ok_or_else(|| swap_error(a, b))?;
            (TransformFunction::skew_y(angle), *a)
        }
        (SkewY { angle }, Scale { sx, sy }) => {
            let sy = sy.unwrap_or(sx);
            let angle = skew_through_scale(angle, sx, sy).ok_or_else(|| swap_error(a, b))?;
            (*b, TransformFunction::skew_y(angle))
        }

        _ => return Err(swap_error(a, b)),
    };

    Ok(swapped)
}

/// Returns the common factor of a uniform scale.
fn uniform_factor(sx: f64, sy: Option<f64>) -> Option<f64> {
    let sy = sy.unwrap_or(sx);
    math::is_close(sx, sy).then_some(sx)
}

/// Skew angle after moving a skew past a scale, `atan(num / den * tan(angle))`.
///
/// A uniform scale leaves the angle unchanged.
fn skew_through_scale(angle: f64, num: f64, den: f64) -> Option<f64> {
    if math::is_close(num, den) {
        return Some(angle);
    }
    if den == 0.0 {
        return None;
    }
    Some(math::atan_deg(num / den * math::tan_deg(angle)))
}

/// Moves the function at `index` to the end of the list by swapping it with
/// each following function in turn.
///
/// On error the list may be partially rearranged; it still composes to the
/// same matrix.
pub fn move_to_end(functions: &mut [TransformFunction], index: usize) -> Result<()> {
    if index >= functions.len() {
        return Err(SvgError::IndexOutOfRange {
            index,
            len: functions.len(),
        });
    }

    for i in index..functions.len() - 1 {
        let (left, right) = swap(&functions[i], &functions[i + 1])?;
        functions[i] = left;
        functions[i + 1] = right;
    }
    Ok(())
}

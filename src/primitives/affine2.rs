//! 2D affine transformation matrix in SVG component order.

use super::Point2;
use crate::math;
use num_traits::Float;
use std::ops::Mul;

/// A 2D affine transformation matrix.
///
/// Components follow the order of the SVG `matrix(a, b, c, d, e, f)`
/// function, which stands for the 3x3 matrix:
/// ```text
/// | a  c  e |
/// | b  d  f |
/// | 0  0  1 |
/// ```
///
/// A point maps to `(a*x + c*y + e, b*x + d*y + f)`.
///
/// # Example
///
/// ```
/// use svgmodel::primitives::{Affine2, Point2};
///
/// // Scale first, then translate.
/// let m: Affine2<f64> = Affine2::translation(10.0, 0.0) * Affine2::scaling(2.0, 3.0);
/// assert_eq!(m.apply_point(Point2::new(1.0, 1.0)), Point2::new(12.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2<F> {
    pub a: F,
    pub b: F,
    pub c: F,
    pub d: F,
    /// Translation x component
    pub e: F,
    /// Translation y component
    pub f: F,
}

impl<F: Float> Affine2<F> {
    /// Creates a matrix from its six components.
    #[inline]
    pub fn new(a: F, b: F, c: F, d: F, e: F, f: F) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Creates the identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self::scaling(F::one(), F::one())
    }

    /// Creates a translation.
    #[inline]
    pub fn translation(tx: F, ty: F) -> Self {
        Self {
            a: F::one(),
            b: F::zero(),
            c: F::zero(),
            d: F::one(),
            e: tx,
            f: ty,
        }
    }

    /// Creates a scaling around the origin.
    #[inline]
    pub fn scaling(sx: F, sy: F) -> Self {
        Self {
            a: sx,
            b: F::zero(),
            c: F::zero(),
            d: sy,
            e: F::zero(),
            f: F::zero(),
        }
    }

    /// Returns the determinant of the linear part.
    #[inline]
    pub fn determinant(&self) -> F {
        self.a * self.d - self.b * self.c
    }

    /// Returns the inverse transform, or `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == F::zero() || !det.is_finite() {
            return None;
        }
        Some(Self {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        })
    }

    /// Transforms a point.
    #[inline]
    pub fn apply_point(&self, p: Point2<F>) -> Point2<F> {
        Point2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Checks component-wise equality within `eps`.
    pub fn approx_eq(&self, other: &Self, eps: F) -> bool {
        (self.a - other.a).abs() <= eps
            && (self.b - other.b).abs() <= eps
            && (self.c - other.c).abs() <= eps
            && (self.d - other.d).abs() <= eps
            && (self.e - other.e).abs() <= eps
            && (self.f - other.f).abs() <= eps
    }

    /// Components as `[a, b, c, d, e, f]`.
    #[inline]
    pub fn to_array(&self) -> [F; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}

impl Affine2<f64> {
    /// Checks equality with the crate-wide tolerances.
    pub fn is_close(&self, other: &Self) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(x, y)| math::is_close(*x, *y))
    }
}

impl<F: Float> Default for Affine2<F> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Matrix product; `lhs * rhs` applies `rhs` first.
impl<F: Float> Mul for Affine2<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            e: self.a * rhs.e + self.c * rhs.f + self.e,
            f: self.b * rhs.e + self.d * rhs.f + self.f,
        }
    }
}

impl<F: Float> Mul<Point2<F>> for Affine2<F> {
    type Output = Point2<F>;

    #[inline]
    fn mul(self, p: Point2<F>) -> Point2<F> {
        self.apply_point(p)
    }
}

//! 2D point type used for coordinates, offsets and control points.

use crate::error::{Result, SvgError};
use crate::format::{Formatter, PrecisionGroup, SvgSerialize};
use crate::math;
use crate::parse::Scanner;
use num_traits::Float;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A 2D point.
///
/// Points double as offsets: they add, subtract and scale component-wise.
/// Equality is structural.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// The origin.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Creates a point from a complex number given as `(re, im)`.
    #[inline]
    pub fn from_complex((re, im): (F, F)) -> Self {
        Self { x: re, y: im }
    }

    /// Returns the point as a complex number `(re, im)`.
    #[inline]
    pub fn to_complex(self) -> (F, F) {
        (self.x, self.y)
    }

    /// Reflects this point through `pivot`, giving `2 * pivot - self`.
    #[inline]
    pub fn reflect_across(self, pivot: Self) -> Self {
        Self {
            x: pivot.x + pivot.x - self.x,
            y: pivot.y + pivot.y - self.y,
        }
    }

    /// Rotates around `center` by an angle in degrees.
    ///
    /// Positive angles turn from the positive x axis towards the positive
    /// y axis, which is clockwise on screen.
    pub fn rotated(self, angle_deg: F, center: Self) -> Self {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        let (re, im) = (self - center).to_complex();
        Self::from_complex((re * cos - im * sin, re * sin + im * cos)) + center
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Checks component-wise equality within `eps`.
    #[inline]
    pub fn approx_eq(self, other: Self, eps: F) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl Point2<f64> {
    /// Checks equality with the crate-wide relative and absolute tolerances.
    #[inline]
    pub fn is_close(self, other: Self) -> bool {
        math::is_close(self.x, other.x) && math::is_close(self.y, other.y)
    }
}

impl<F: Float> Add for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<F: Float> AddAssign for Point2<F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl<F: Float> SubAssign for Point2<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> Neg for Point2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<F: Float> Mul<F> for Point2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<F: Float> Div<F> for Point2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    #[inline]
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl SvgSerialize for Point2<f64> {
    fn serialize_with(&self, formatter: &Formatter) -> String {
        format!(
            "{}{}{}",
            formatter.number(self.x, PrecisionGroup::Coordinate),
            formatter.point_separator,
            formatter.number(self.y, PrecisionGroup::Coordinate)
        )
    }
}

impl FromStr for Point2<f64> {
    type Err = SvgError;

    fn from_str(s: &str) -> Result<Self> {
        let mut scanner = Scanner::new(s, "point");
        scanner.skip_whitespace();
        let x = scanner.argument()?;
        let y = scanner.number()?;
        scanner.finish()?;
        Ok(Self::new(x, y))
    }
}

/// Parses the value of a `points` attribute, such as `"0,0 10,0 10,10"`.
///
/// An odd number of coordinates is an error.
pub fn parse_points(s: &str) -> Result<Vec<Point2<f64>>> {
    let mut scanner = Scanner::new(s, "points");
    scanner.skip_whitespace();

    let mut points = Vec::new();
    while !scanner.is_at_end() {
        let x = scanner.argument()?;
        if scanner.is_at_end() {
            return Err(scanner.error("odd number of coordinates"));
        }
        let y = scanner.argument()?;
        points.push(Point2::new(x, y));
    }
    Ok(points)
}

/// Serializes a point list using the list separator between points.
pub fn serialize_points(points: &[Point2<f64>], formatter: &Formatter) -> String {
    formatter.list(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arithmetic() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(3.0, -1.0);

        assert_eq!(a + b, Point2::new(4.0, 1.0));
        assert_eq!(a - b, Point2::new(-2.0, 3.0));
        assert_eq!(-a, Point2::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Point2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Point2::new(1.5, -0.5));
    }

    #[test]
    fn test_reflect_across() {
        let control = Point2::new(1.0, 1.0);
        let pivot = Point2::new(3.0, 2.0);
        assert_eq!(control.reflect_across(pivot), Point2::new(5.0, 3.0));
        assert_eq!(pivot.reflect_across(pivot), pivot);
    }

    #[test]
    fn test_rotated_quarter_turn() {
        let p = Point2::new(2.0, 1.0).rotated(90.0, Point2::new(1.0, 1.0));
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_complex_view() {
        let p = Point2::from_complex((3.0, 4.0));
        assert_eq!(p, Point2::new(3.0, 4.0));
        assert_eq!(p.to_complex(), (3.0, 4.0));
        assert_relative_eq!(p.distance(Point2::zero()), 5.0);
    }

    #[test]
    fn test_is_close() {
        let p = Point2::new(0.1 + 0.2, 1.0);
        assert!(p.is_close(Point2::new(0.3, 1.0)));
        assert!(!p.is_close(Point2::new(0.3, 1.001)));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("10,20".parse::<Point2<f64>>().unwrap(), Point2::new(10.0, 20.0));
        assert_eq!(" -1.5 2e1 ".parse::<Point2<f64>>().unwrap(), Point2::new(-1.5, 20.0));
        assert!("10".parse::<Point2<f64>>().is_err());
        assert!("1,2,3".parse::<Point2<f64>>().is_err());
    }

    #[test]
    fn test_parse_points() {
        let points = parse_points("0,0 10,0 10-10").unwrap();
        assert_eq!(
            points,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, -10.0)
            ]
        );
        assert!(parse_points("").unwrap().is_empty());
        assert!(parse_points("1,2 3").is_err());
    }

    #[test]
    fn test_serialize() {
        let formatter = Formatter::default();
        assert_eq!(Point2::new(1.5, -0.0).serialize_with(&formatter), "1.5,0");

        let points = [Point2::new(0.0, 0.0), Point2::new(10.0, 5.0)];
        assert_eq!(serialize_points(&points, &formatter), "0,0, 10,5");
    }
}

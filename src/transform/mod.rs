//! Transform lists and their algebra.
//!
//! A [`Transform`] is the value of an SVG `transform` attribute: an ordered
//! list of [`TransformFunction`]s. The list composes left to right, so
//! `translate(10) scale(2)` scales the geometry first and then translates it.
//!
//! The algebra has three parts:
//!
//! - composition of a list into one [`Matrix`](crate::primitives::Matrix);
//! - decomposition of a matrix back into elementary functions ([`decompose`]);
//! - reordering of adjacent functions without changing the result ([`swap`],
//!   [`move_to_end`]), which element reification builds on.
//!
//! # Example
//!
//! ```
//! use svgmodel::transform::Transform;
//! use svgmodel::{Point, SvgSerialize};
//!
//! let transform: Transform = "translate(10, 20) scale(2)".parse().unwrap();
//! assert_eq!(transform.apply_to_point(Point::new(1.0, 1.0)), Point::new(12.0, 22.0));
//! assert_eq!(transform.serialize(), "translate(10, 20) scale(2)");
//! ```

mod decompose;
mod function;
mod swap;

pub use decompose::{decompose, remove_redundant};
pub use function::TransformFunction;
pub use swap::{move_to_end, swap};

use crate::error::{Result, SvgError};
use crate::format::{Formatter, SvgSerialize};
use crate::parse::Scanner;
use crate::primitives::{Matrix, Point};
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// An ordered list of transform functions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transform(Vec<TransformFunction>);

impl Transform {
    /// Creates an empty transform list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the list, returning its functions.
    pub fn into_inner(self) -> Vec<TransformFunction> {
        self.0
    }

    /// Multiplies the matrices of all functions in list order.
    pub fn compose(&self) -> Matrix {
        self.0
            .iter()
            .fold(Matrix::identity(), |matrix, function| matrix * function.to_matrix())
    }

    /// Maps a point through the whole list.
    pub fn apply_to_point(&self, point: Point) -> Point {
        self.0
            .iter()
            .rev()
            .fold(point, |p, function| function.apply_to_point(p))
    }

    /// Replaces every `matrix(...)` function with its decomposition.
    pub fn decompose_matrices(&self) -> Self {
        let functions = self
            .0
            .iter()
            .flat_map(|function| match function {
                TransformFunction::Matrix(m) => decompose(m),
                other => vec![*other],
            })
            .collect();
        Self(functions)
    }

    /// Drops functions that leave every point in place.
    pub fn remove_redundant(&self) -> Self {
        Self(remove_redundant(self.0.clone()))
    }

    /// Moves the function at `index` to the end of the list.
    ///
    /// See [`move_to_end`].
    pub fn move_to_end(&mut self, index: usize) -> Result<()> {
        move_to_end(&mut self.0, index)
    }
}

impl Deref for Transform {
    type Target = Vec<TransformFunction>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Transform {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<TransformFunction>> for Transform {
    fn from(functions: Vec<TransformFunction>) -> Self {
        Self(functions)
    }
}

impl FromIterator<TransformFunction> for Transform {
    fn from_iter<I: IntoIterator<Item = TransformFunction>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for Transform {
    type Err = SvgError;

    fn from_str(s: &str) -> Result<Self> {
        let mut scanner = Scanner::new(s, "transform");
        let mut functions = Vec::new();

        scanner.skip_whitespace();
        while !scanner.is_at_end() {
            functions.push(TransformFunction::parse(&mut scanner)?);
            scanner.skip_separator();
        }

        Ok(Self(functions))
    }
}

impl SvgSerialize for Transform {
    fn serialize_with(&self, formatter: &Formatter) -> String {
        self.0
            .iter()
            .map(|function| function.serialize_with(formatter))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_list() {
        let transform: Transform = " translate(10,20)scale(2) , rotate(45 1 1) ".parse().unwrap();
        assert_eq!(
            transform.as_slice(),
            &[
                TransformFunction::translate(10.0, 20.0),
                TransformFunction::uniform_scale(2.0),
                TransformFunction::rotate_around(45.0, Point::new(1.0, 1.0)),
            ]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!("".parse::<Transform>().unwrap().is_empty());
        assert!("  ".parse::<Transform>().unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        let err = "translate(1) bogus".parse::<Transform>().unwrap_err();
        assert!(matches!(err, SvgError::Parse { grammar: "transform", .. }));
        assert!("translate(1".parse::<Transform>().is_err());
    }

    #[test]
    fn test_round_trip() {
        let text = "matrix(1, 2, 3, 4, 5, 6) skewY(-10) rotate(30, 5, 5) scale(1.5, 2)";
        let transform: Transform = text.parse().unwrap();
        assert_eq!(transform.serialize(), text);
        assert_eq!(transform.serialize().parse::<Transform>().unwrap(), transform);
    }

    #[test]
    fn test_compose_order() {
        let transform = Transform::from(vec![
            TransformFunction::translate(10.0, 0.0),
            TransformFunction::uniform_scale(2.0),
        ]);
        let m = transform.compose();
        assert_eq!(m, Matrix::new(2.0, 0.0, 0.0, 2.0, 10.0, 0.0));
        assert_eq!(m.apply_point(Point::new(1.0, 1.0)), Point::new(12.0, 2.0));
        assert_eq!(transform.apply_to_point(Point::new(1.0, 1.0)), Point::new(12.0, 2.0));
    }

    #[test]
    fn test_apply_to_point_matches_compose() {
        let transform: Transform = "rotate(30, 4, 2) skewX(12) translate(-3, 7) scale(2, 0.5)"
            .parse()
            .unwrap();
        let p = Point::new(3.5, -1.25);
        let expected = transform.compose().apply_point(p);
        let actual = transform.apply_to_point(p);
        assert_relative_eq!(actual.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(actual.y, expected.y, epsilon = 1e-12);
    }

    #[test]
    fn test_decompose_matrices() {
        let transform: Transform = "rotate(10) matrix(2, 0, 0, 2, 10, 20)".parse().unwrap();
        let decomposed = transform.decompose_matrices();

        assert!(decomposed
            .iter()
            .all(|f| !matches!(f, TransformFunction::Matrix(_))));
        assert!(decomposed.compose().approx_eq(&transform.compose(), 1e-9));
    }

    #[test]
    fn test_remove_redundant() {
        let transform: Transform = "translate(0) scale(1 1) rotate(0, 5, 5) skewX(3)".parse().unwrap();
        assert_eq!(
            transform.remove_redundant().as_slice(),
            &[TransformFunction::skew_x(3.0)]
        );
    }

    #[test]
    fn test_move_to_end() {
        let mut transform: Transform = "translate(10, 20) scale(2, 4)".parse().unwrap();
        let before = transform.compose();
        transform.move_to_end(0).unwrap();

        assert_eq!(transform[0], TransformFunction::scale(2.0, 4.0));
        assert_eq!(transform[1], TransformFunction::translate(5.0, 5.0));
        assert!(transform.compose().approx_eq(&before, 1e-12));
    }
}

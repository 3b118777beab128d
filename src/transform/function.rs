//! Individual transform functions.

use crate::format::{Formatter, PrecisionGroup, SvgSerialize};
use crate::math;
use crate::parse::Scanner;
use crate::primitives::{Matrix, Point};
use crate::error::Result;

/// One function of an SVG transform list.
///
/// Optional arguments are kept as written so that serialization reproduces
/// them; `None` stands for the SVG default (`ty = 0`, `sy = sx`, rotation
/// around the origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformFunction {
    Translate { tx: f64, ty: Option<f64> },
    Scale { sx: f64, sy: Option<f64> },
    /// Rotation by `angle` degrees, optionally around `center`.
    Rotate { angle: f64, center: Option<Point> },
    SkewX { angle: f64 },
    SkewY { angle: f64 },
    Matrix(Matrix),
}

impl TransformFunction {
    #[inline]
    pub fn translate(tx: f64, ty: f64) -> Self {
        TransformFunction::Translate { tx, ty: Some(ty) }
    }

    #[inline]
    pub fn scale(sx: f64, sy: f64) -> Self {
        TransformFunction::Scale { sx, sy: Some(sy) }
    }

    /// A scale with a single factor for both axes.
    #[inline]
    pub fn uniform_scale(factor: f64) -> Self {
        TransformFunction::Scale {
            sx: factor,
            sy: None,
        }
    }

    /// A rotation around the origin.
    #[inline]
    pub fn rotate(angle: f64) -> Self {
        TransformFunction::Rotate {
            angle,
            center: None,
        }
    }

    #[inline]
    pub fn rotate_around(angle: f64, center: Point) -> Self {
        TransformFunction::Rotate {
            angle,
            center: Some(center),
        }
    }

    #[inline]
    pub fn skew_x(angle: f64) -> Self {
        TransformFunction::SkewX { angle }
    }

    #[inline]
    pub fn skew_y(angle: f64) -> Self {
        TransformFunction::SkewY { angle }
    }

    #[inline]
    pub fn matrix(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        TransformFunction::Matrix(Matrix::new(a, b, c, d, e, f))
    }

    /// The SVG function name.
    pub fn name(&self) -> &'static str {
        match self {
            TransformFunction::Translate { .. } => "translate",
            TransformFunction::Scale { .. } => "scale",
            TransformFunction::Rotate { .. } => "rotate",
            TransformFunction::SkewX { .. } => "skewX",
            TransformFunction::SkewY { .. } => "skewY",
            TransformFunction::Matrix(_) => "matrix",
        }
    }

    /// Returns true for functions that can be applied to element attributes
    /// directly (translations and scales).
    #[inline]
    pub fn is_reifiable(&self) -> bool {
        matches!(
            self,
            TransformFunction::Translate { .. } | TransformFunction::Scale { .. }
        )
    }

    /// Returns the 2x3 matrix of this function.
    pub fn to_matrix(&self) -> Matrix {
        match *self {
            TransformFunction::Translate { tx, ty } => {
                Matrix::translation(tx, ty.unwrap_or(0.0))
            }
            TransformFunction::Scale { sx, sy } => Matrix::scaling(sx, sy.unwrap_or(sx)),
            TransformFunction::Rotate { angle, center } => {
                let (sin, cos) = math::sin_cos_deg(angle);
                let c = center.unwrap_or_default();
                Matrix::new(
                    cos,
                    sin,
                    -sin,
                    cos,
                    c.x - cos * c.x + sin * c.y,
                    c.y - sin * c.x - cos * c.y,
                )
            }
            TransformFunction::SkewX { angle } => {
                Matrix::new(1.0, 0.0, math::tan_deg(angle), 1.0, 0.0, 0.0)
            }
            TransformFunction::SkewY { angle } => {
                Matrix::new(1.0, math::tan_deg(angle), 0.0, 1.0, 0.0, 0.0)
            }
            TransformFunction::Matrix(m) => m,
        }
    }

    /// Maps a point through this function.
    pub fn apply_to_point(&self, point: Point) -> Point {
        match *self {
            TransformFunction::Translate { tx, ty } => {
                Point::new(point.x + tx, point.y + ty.unwrap_or(0.0))
            }
            TransformFunction::Scale { sx, sy } => {
                Point::new(point.x * sx, point.y * sy.unwrap_or(sx))
            }
            _ => self.to_matrix().apply_point(point),
        }
    }

    /// Returns true if the function leaves every point in place.
    pub fn is_identity(&self) -> bool {
        match *self {
            TransformFunction::Translate { tx, ty } => {
                math::is_close(tx, 0.0) && math::is_close(ty.unwrap_or(0.0), 0.0)
            }
            TransformFunction::Scale { sx, sy } => {
                math::is_close(sx, 1.0) && math::is_close(sy.unwrap_or(sx), 1.0)
            }
            TransformFunction::Rotate { angle, .. }
            | TransformFunction::SkewX { angle }
            | TransformFunction::SkewY { angle } => math::is_close(angle, 0.0),
            TransformFunction::Matrix(m) => m.is_close(&Matrix::identity()),
        }
    }

    /// Complexity of the function, used to rank matrix decompositions.
    pub(crate) fn weight(&self) -> u64 {
        match *self {
            TransformFunction::SkewX { .. } | TransformFunction::SkewY { .. } => 1_000_000,
            TransformFunction::Scale { sx, sy } if !math::is_close(sx, sy.unwrap_or(sx)) => {
                1_000_000
            }
            TransformFunction::Rotate { .. } => 1_000,
            _ => 1,
        }
    }

    /// Compares two functions of the same kind with the crate-wide
    /// tolerances, treating omitted arguments as their defaults.
    pub fn is_close(&self, other: &Self) -> bool {
        use TransformFunction::*;

        match (*self, *other) {
            (Translate { tx: x1, ty: y1 }, Translate { tx: x2, ty: y2 }) => {
                math::is_close(x1, x2) && math::is_close(y1.unwrap_or(0.0), y2.unwrap_or(0.0))
            }
            (Scale { sx: x1, sy: y1 }, Scale { sx: x2, sy: y2 }) => {
                math::is_close(x1, x2) && math::is_close(y1.unwrap_or(x1), y2.unwrap_or(x2))
            }
            (Rotate { angle: a1, center: c1 }, Rotate { angle: a2, center: c2 }) => {
                math::is_close(a1, a2) && c1.unwrap_or_default().is_close(c2.unwrap_or_default())
            }
            (SkewX { angle: a1 }, SkewX { angle: a2 }) | (SkewY { angle: a1 }, SkewY { angle: a2 }) => {
                math::is_close(a1, a2)
            }
            (TransformFunction::Matrix(m1), TransformFunction::Matrix(m2)) => m1.is_close(&m2),
            _ => false,
        }
    }

    /// Parses one function starting at the scanner position.
    pub(crate) fn parse(scanner: &mut Scanner<'_>) -> Result<Self> {
        let name = scanner.identifier();
        scanner.skip_whitespace();
        scanner.expect('(')?;
        scanner.skip_whitespace();

        let mut args = Vec::with_capacity(6);
        while scanner.has_number() {
            args.push(scanner.argument()?);
        }
        scanner.expect(')')?;

        let function = match (name, args.as_slice()) {
            ("translate", &[tx]) => TransformFunction::Translate { tx, ty: None },
            ("translate", &[tx, ty]) => TransformFunction::translate(tx, ty),
            ("scale", &[sx]) => TransformFunction::uniform_scale(sx),
            ("scale", &[sx, sy]) => TransformFunction::scale(sx, sy),
            ("rotate", &[angle]) => TransformFunction::rotate(angle),
            ("rotate", &[angle, cx, cy]) => {
                TransformFunction::rotate_around(angle, Point::new(cx, cy))
            }
            ("skewX", &[angle]) => TransformFunction::skew_x(angle),
            ("skewY", &[angle]) => TransformFunction::skew_y(angle),
            ("matrix", &[a, b, c, d, e, f]) => TransformFunction::matrix(a, b, c, d, e, f),
            ("translate" | "scale" | "rotate" | "skewX" | "skewY" | "matrix", _) => {
                return Err(scanner.error(format!(
                    "wrong number of arguments for {}: {}",
                    name,
                    args.len()
                )))
            }
            _ => return Err(scanner.error(format!("unknown transform function '{}'", name))),
        };
        Ok(function)
    }
}

impl From<Matrix> for TransformFunction {
    fn from(matrix: Matrix) -> Self {
        TransformFunction::Matrix(matrix)
    }
}

impl SvgSerialize for TransformFunction {
    fn serialize_with(&self, formatter: &Formatter) -> String {
        let num = |value: f64, group| formatter.number(value, group);

        let args: Vec<String> = match *self {
            TransformFunction::Translate { tx, ty } => std::iter::once(tx)
                .chain(ty)
                .map(|v| num(v, PrecisionGroup::Coordinate))
                .collect(),
            TransformFunction::Scale { sx, sy } => std::iter::once(sx)
                .chain(sy)
                .map(|v| num(v, PrecisionGroup::Scale))
                .collect(),
            TransformFunction::Rotate { angle, center } => {
                let mut args = vec![num(angle, PrecisionGroup::Angle)];
                if let Some(c) = center {
                    args.push(num(c.x, PrecisionGroup::Coordinate));
                    args.push(num(c.y, PrecisionGroup::Coordinate));
                }
                args
            }
            TransformFunction::SkewX { angle } | TransformFunction::SkewY { angle } => {
                vec![num(angle, PrecisionGroup::Angle)]
            }
            TransformFunction::Matrix(m) => m
                .to_array()
                .iter()
                .map(|v| num(*v, PrecisionGroup::Other))
                .collect(),
        };

        formatter.function_call(self.name(), &args)
    }
}

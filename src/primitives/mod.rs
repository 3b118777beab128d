//! Point and matrix value types.

mod affine2;
mod point2;

pub use affine2::Affine2;
pub use point2::{parse_points, serialize_points, Point2};

/// The point type used throughout the document model.
pub type Point = Point2<f64>;

/// The matrix type used throughout the document model.
pub type Matrix = Affine2<f64>;

//! svgmodel - A typed model of SVG geometry attributes
//!
//! SVG stores geometry as text: path data, transform lists, lengths with
//! units. This library parses those values into typed structures, lets you
//! edit and transform them, and writes them back out with configurable
//! formatting.
//!
//! # Modules
//!
//! - [`path`]: path data commands, the invariant-checked [`PathData`] list,
//!   shorthand rewriting and resolution of implicit points
//! - [`transform`]: transform functions, matrix decomposition and the swap
//!   algebra used to reorder a transform list
//! - [`element`]: reification, which folds translations and scales into
//!   element attributes
//! - [`units`]: lengths and angles with unit conversion
//! - [`format`]: number and path data formatting options
//!
//! # Example
//!
//! ```
//! use svgmodel::{PathData, Point, SvgSerialize};
//! use svgmodel::transform::TransformFunction;
//!
//! let path: PathData = "M 10,10 h 20 v 20 z".parse().unwrap();
//! let moved = path.transformed(&TransformFunction::translate(5.0, 0.0));
//!
//! assert_eq!(moved.end(), Some(Point::new(15.0, 10.0)));
//! assert_eq!(moved.serialize(), "M 15,10 H 35 V 30 Z");
//! ```

pub mod element;
pub mod error;
pub mod format;
pub mod math;
mod parse;
pub mod path;
pub mod primitives;
pub mod transform;
pub mod units;

pub use element::{reify, Element, GeometricElement, ReifyOptions};
pub use error::{Result, SvgError};
pub use format::{Formatter, SvgSerialize};
pub use path::{PathCommand, PathData};
pub use primitives::{Matrix, Point};
pub use transform::{Transform, TransformFunction};
pub use units::{Angle, Length};

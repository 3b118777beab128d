//! Path data: the `d` attribute mini-language.
//!
//! - [`PathCommand`]: one drawing command, stored with absolute coordinates
//! - [`PathData`]: an invariant-checked command list with a fluent builder,
//!   shorthand rewriting, relativization and transforms
//! - [`resolve_end`], [`resolve_quadratic_control`],
//!   [`resolve_cubic_control`]: recovery of implicit geometry
//!
//! Parsing goes through `FromStr` and writing through
//! [`SvgSerialize`](crate::format::SvgSerialize), which honours the path data
//! options of the active [`Formatter`](crate::format::Formatter).

mod command;
mod data;
mod parse;
mod resolve;
mod serialize;

pub use command::PathCommand;
pub use data::PathData;
pub use resolve::{resolve_cubic_control, resolve_end, resolve_quadratic_control, subpath_start};

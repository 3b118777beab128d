//! Unit conversion over sparse rate tables.
//!
//! A [`UnitConverter`] is built from a handful of known rates, such as
//! "one inch is 2.54 centimeters". Every entry also implies the inverse
//! rate. Rates between units that are not directly related are found by a
//! depth-first search that multiplies the rates along the way.
//!
//! # Example
//!
//! ```
//! use svgmodel::units::UnitConverter;
//!
//! let converter = UnitConverter::new([(("A", "B"), 2.0), (("B", "C"), 4.0)]);
//!
//! assert_eq!(converter.rate("A", "C").unwrap(), 8.0);
//! assert_eq!(converter.rate("C", "A").unwrap(), 0.125);
//! assert!(converter.rate("A", "D").is_err());
//! ```

mod angle;
mod length;

pub use angle::{Angle, AngleUnit};
pub use length::{Length, LengthUnit};

use crate::error::{Result, SvgError};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

/// A numeric value tagged with a unit.
pub trait Quantity: Sized {
    /// The unit type of this quantity.
    type Unit: Copy + Eq + Hash + Display;

    /// The numeric value, expressed in [`Quantity::unit`].
    fn value(&self) -> f64;

    /// The unit of the value.
    fn unit(&self) -> Self::Unit;

    /// Creates a quantity from a value and a unit.
    fn from_parts(value: f64, unit: Self::Unit) -> Self;
}

/// Finds conversion rates between units from a sparse table.
///
/// Resolved rates, including failed lookups, are cached for the lifetime
/// of the converter.
#[derive(Debug)]
pub struct UnitConverter<U> {
    edges: HashMap<U, Vec<(U, f64)>>,
    cache: RefCell<HashMap<(U, U), Option<f64>>>,
}

impl<U> UnitConverter<U>
where
    U: Copy + Eq + Hash + Display,
{
    /// Builds a converter from `((source, target), rate)` entries.
    ///
    /// A rate `r` means one `source` equals `r` `target`s.
    pub fn new(table: impl IntoIterator<Item = ((U, U), f64)>) -> Self {
        let mut edges: HashMap<U, Vec<(U, f64)>> = HashMap::new();
        for ((source, target), rate) in table {
            edges.entry(source).or_default().push((target, rate));
            edges.entry(target).or_default().push((source, 1.0 / rate));
        }
        Self {
            edges,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the factor that converts values in `from` to values in `to`.
    pub fn rate(&self, from: U, to: U) -> Result<f64> {
        if from == to {
            return Ok(1.0);
        }

        let cached = self.cache.borrow().get(&(from, to)).copied();
        let rate = match cached {
            Some(rate) => rate,
            None => {
                tracing::trace!(%from, %to, "resolving conversion rate");
                let mut visited = HashSet::new();
                let rate = self.search(from, to, 1.0, &mut visited);
                self.cache.borrow_mut().insert((from, to), rate);
                rate
            }
        };

        rate.ok_or_else(|| SvgError::UnitConversion {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    /// Converts a quantity to another unit.
    pub fn convert<Q>(&self, quantity: &Q, to: U) -> Result<Q>
    where
        Q: Quantity<Unit = U>,
    {
        let rate = self.rate(quantity.unit(), to)?;
        Ok(Q::from_parts(quantity.value() * rate, to))
    }

    fn search(&self, node: U, target: U, rate: f64, visited: &mut HashSet<U>) -> Option<f64> {
        if node == target {
            return Some(rate);
        }
        visited.insert(node);

        for &(next, edge_rate) in self.edges.get(&node).into_iter().flatten() {
            if visited.contains(&next) {
                continue;
            }
            if let Some(found) = self.search(next, target, rate * edge_rate, visited) {
                return Some(found);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn chain() -> UnitConverter<&'static str> {
        UnitConverter::new([(("A", "B"), 2.0), (("B", "C"), 4.0)])
    }

    #[test]
    fn test_transitive_rate() {
        let converter = chain();
        assert_eq!(converter.rate("A", "B").unwrap(), 2.0);
        assert_eq!(converter.rate("A", "C").unwrap(), 8.0);
        assert_eq!(converter.rate("C", "A").unwrap(), 0.125);
        assert_eq!(converter.rate("B", "A").unwrap(), 0.5);
    }

    #[test]
    fn test_missing_unit() {
        let converter = chain();
        let err = converter.rate("A", "D").unwrap_err();
        assert_eq!(
            err,
            SvgError::UnitConversion {
                from: "A".to_string(),
                to: "D".to_string()
            }
        );
        // cached failures fail the same way
        assert!(converter.rate("A", "D").is_err());
    }

    #[test]
    fn test_identity_rate_without_table_entry() {
        let converter = chain();
        assert_eq!(converter.rate("Z", "Z").unwrap(), 1.0);
    }

    #[test]
    fn test_disconnected_components() {
        let converter = UnitConverter::new([(("A", "B"), 2.0), (("X", "Y"), 3.0)]);
        assert!(converter.rate("A", "Y").is_err());
        assert_eq!(converter.rate("Y", "X").unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn test_cycle_terminates() {
        let converter = UnitConverter::new([
            (("A", "B"), 2.0),
            (("B", "C"), 3.0),
            (("C", "A"), 1.0 / 6.0),
            (("C", "D"), 5.0),
        ]);
        assert_relative_eq!(converter.rate("A", "D").unwrap(), 30.0, epsilon = 1e-12);
        assert!(converter.rate("A", "E").is_err());
    }

    #[test]
    fn test_cache_is_consistent() {
        let converter = chain();
        let first = converter.rate("C", "A").unwrap();
        let second = converter.rate("C", "A").unwrap();
        assert_eq!(first, second);
        assert_eq!(converter.cache.borrow().len(), 1);
    }
}

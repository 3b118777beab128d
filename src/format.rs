//! Serialization options and the active formatter.
//!
//! Every value in the model renders itself through [`SvgSerialize`]. The
//! options live in a [`Formatter`]; one formatter is active per thread and
//! can be overridden for a scope with [`Formatter::activate`] or
//! [`with_formatter`].
//!
//! # Example
//!
//! ```
//! use svgmodel::format::{with_formatter, Formatter};
//! use svgmodel::{PathData, SvgSerialize};
//!
//! let path: PathData = "M 0.123456 0 L 10 10".parse().unwrap();
//! let formatter = Formatter {
//!     max_precision: Some(2),
//!     ..Formatter::default()
//! };
//!
//! let text = with_formatter(formatter, || path.serialize());
//! assert_eq!(text, "M 0.12,0 L 10,10");
//! ```

use std::cell::RefCell;
use std::marker::PhantomData;

/// A value with an SVG attribute representation.
pub trait SvgSerialize {
    /// Renders the value using explicit formatter options.
    fn serialize_with(&self, formatter: &Formatter) -> String;

    /// Renders the value using the formatter active on this thread.
    fn serialize(&self) -> String {
        self.serialize_with(&current())
    }
}

/// Number category, used to pick a precision override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionGroup {
    /// Coordinates and lengths.
    Coordinate,
    /// Angles in degrees.
    Angle,
    /// Scale factors.
    Scale,
    /// Everything else.
    Other,
}

/// Whether repeated path commands repeat their command letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandMode {
    /// Every command carries its letter.
    #[default]
    Explicit,
    /// Letters of repeated commands are omitted where the grammar allows it.
    Implicit,
}

/// Coordinate style for path data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateMode {
    /// Upper-case commands with absolute coordinates.
    #[default]
    Absolute,
    /// Lower-case commands with offsets from the current point.
    Relative,
}

/// Policy for shorthand path commands (`H`, `V`, `S`, `T`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShorthandMode {
    /// Keep commands as they are stored.
    #[default]
    Original,
    /// Use shorthands wherever they reproduce the same geometry.
    Always,
    /// Expand every shorthand into its full-length form.
    Never,
}

/// Options that control how values are serialized.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Formatter {
    /// Maximum digits after the decimal point; `None` keeps full precision.
    pub max_precision: Option<usize>,
    /// Override of `max_precision` for coordinates and lengths.
    pub coordinate_precision: Option<usize>,
    /// Override of `max_precision` for angles.
    pub angle_precision: Option<usize>,
    /// Override of `max_precision` for scale factors.
    pub scale_precision: Option<usize>,
    /// Separator between the two coordinates of a point.
    pub point_separator: String,
    /// Separator between list items and function arguments.
    pub list_separator: String,
    /// Explicit or implicit command letters in path data.
    pub path_data_commands: CommandMode,
    /// Absolute or relative path data coordinates.
    pub path_data_coordinates: CoordinateMode,
    /// Shorthand policy for `H` and `V`.
    pub path_data_shorthand_line_commands: ShorthandMode,
    /// Shorthand policy for `S` and `T`.
    pub path_data_shorthand_curve_commands: ShorthandMode,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            max_precision: None,
            coordinate_precision: None,
            angle_precision: None,
            scale_precision: None,
            point_separator: ",".to_string(),
            list_separator: ", ".to_string(),
            path_data_commands: CommandMode::Explicit,
            path_data_coordinates: CoordinateMode::Absolute,
            path_data_shorthand_line_commands: ShorthandMode::Original,
            path_data_shorthand_curve_commands: ShorthandMode::Original,
        }
    }
}

thread_local! {
    static ACTIVE: RefCell<Formatter> = RefCell::new(Formatter::default());
}

/// Returns a copy of the formatter active on this thread.
pub fn current() -> Formatter {
    ACTIVE.with(|active| active.borrow().clone())
}

/// Runs `f` with `formatter` active, restoring the previous one afterwards.
pub fn with_formatter<R>(formatter: Formatter, f: impl FnOnce() -> R) -> R {
    let _guard = formatter.activate();
    f()
}

/// Restores the previously active formatter when dropped.
///
/// Guards are bound to the thread that created them.
#[must_use = "the formatter is deactivated as soon as the guard is dropped"]
#[derive(Debug)]
pub struct FormatterGuard {
    previous: Option<Formatter>,
    _thread_bound: PhantomData<*const ()>,
}

impl Drop for FormatterGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            ACTIVE.with(|active| *active.borrow_mut() = previous);
        }
    }
}

impl Formatter {
    /// Makes this formatter the active one until the guard is dropped.
    pub fn activate(self) -> FormatterGuard {
        let previous = ACTIVE.with(|active| active.replace(self));
        FormatterGuard {
            previous: Some(previous),
            _thread_bound: PhantomData,
        }
    }

    /// Precision that applies to a number group.
    pub fn precision(&self, group: PrecisionGroup) -> Option<usize> {
        let specific = match group {
            PrecisionGroup::Coordinate => self.coordinate_precision,
            PrecisionGroup::Angle => self.angle_precision,
            PrecisionGroup::Scale => self.scale_precision,
            PrecisionGroup::Other => None,
        };
        specific.or(self.max_precision)
    }

    /// Formats a number according to this formatter.
    pub fn number(&self, value: f64, group: PrecisionGroup) -> String {
        format_number(value, self.precision(group))
    }

    /// Formats `name(arg, arg, ...)` using the list separator.
    pub fn function_call(&self, name: &str, args: &[String]) -> String {
        format!("{}({})", name, args.join(&self.list_separator))
    }

    /// Joins serialized items with the list separator.
    pub fn list<T: SvgSerialize>(&self, items: &[T]) -> String {
        items
            .iter()
            .map(|item| item.serialize_with(self))
            .collect::<Vec<_>>()
            .join(&self.list_separator)
    }
}

/// Formats a number with at most `precision` digits after the decimal point.
///
/// Trailing zeros are trimmed and negative zero is written as `0`.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    let mut text = match precision {
        Some(digits) => {
            let fixed = format!("{:.*}", digits, value);
            if fixed.contains('.') {
                fixed.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                fixed
            }
        }
        None => format!("{}", value),
    };

    if text == "-0" {
        text = "0".to_string();
    }
    text
}

impl SvgSerialize for f64 {
    fn serialize_with(&self, formatter: &Formatter) -> String {
        formatter.number(*self, PrecisionGroup::Other)
    }
}

impl SvgSerialize for bool {
    fn serialize_with(&self, _formatter: &Formatter) -> String {
        if *self { "1" } else { "0" }.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_default() {
        assert_eq!(format_number(10.0, None), "10");
        assert_eq!(format_number(0.5, None), "0.5");
        assert_eq!(format_number(-0.0, None), "0");
        assert_eq!(format_number(20.0 / 3.0, None), "6.666666666666667");
    }

    #[test]
    fn test_format_number_precision() {
        assert_eq!(format_number(3.14159, Some(2)), "3.14");
        assert_eq!(format_number(2.5, Some(0)), "2");
        assert_eq!(format_number(1.10, Some(3)), "1.1");
        assert_eq!(format_number(-0.0001, Some(2)), "0");
        assert_eq!(format_number(100.0, Some(2)), "100");
    }

    #[test]
    fn test_precision_groups() {
        let formatter = Formatter {
            max_precision: Some(3),
            angle_precision: Some(1),
            ..Formatter::default()
        };

        assert_eq!(formatter.precision(PrecisionGroup::Angle), Some(1));
        assert_eq!(formatter.precision(PrecisionGroup::Coordinate), Some(3));
        assert_eq!(formatter.number(12.3456, PrecisionGroup::Angle), "12.3");
        assert_eq!(formatter.number(12.3456, PrecisionGroup::Scale), "12.346");
    }

    #[test]
    fn test_guard_restores_previous() {
        let outer = Formatter {
            max_precision: Some(1),
            ..Formatter::default()
        };
        let inner = Formatter {
            max_precision: Some(4),
            ..Formatter::default()
        };

        {
            let _outer = outer.clone().activate();
            assert_eq!(current(), outer);
            {
                let _inner = inner.clone().activate();
                assert_eq!(current(), inner);
            }
            assert_eq!(current(), outer);
        }
        assert_eq!(current(), Formatter::default());
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let formatter = Formatter {
            max_precision: Some(2),
            ..Formatter::default()
        };

        let result = std::panic::catch_unwind(|| {
            with_formatter(formatter, || panic!("serialization failed"))
        });

        assert!(result.is_err());
        assert_eq!(current(), Formatter::default());
    }

    #[test]
    fn test_with_formatter_returns_value() {
        let formatter = Formatter {
            max_precision: Some(1),
            ..Formatter::default()
        };
        let text = with_formatter(formatter, || 1.25_f64.serialize());
        assert_eq!(text, "1.2");
        assert_eq!(1.25_f64.serialize(), "1.25");
    }

    #[test]
    fn test_formatter_from_toml() {
        let formatter: Formatter = toml::from_str(
            r#"
            max_precision = 3
            list_separator = ","
            path_data_commands = "implicit"
            path_data_coordinates = "relative"
            path_data_shorthand_curve_commands = "always"
            "#,
        )
        .unwrap();

        assert_eq!(formatter.max_precision, Some(3));
        assert_eq!(formatter.list_separator, ",");
        assert_eq!(formatter.point_separator, ",");
        assert_eq!(formatter.path_data_commands, CommandMode::Implicit);
        assert_eq!(formatter.path_data_coordinates, CoordinateMode::Relative);
        assert_eq!(
            formatter.path_data_shorthand_curve_commands,
            ShorthandMode::Always
        );
        assert_eq!(
            formatter.path_data_shorthand_line_commands,
            ShorthandMode::Original
        );
    }
}

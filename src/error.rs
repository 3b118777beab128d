//! Error types for svgmodel operations.

use thiserror::Error;

/// Errors that can occur while building, parsing or transforming SVG values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SvgError {
    /// A path data mutation would leave the path without an initial `MoveTo`.
    #[error("path data must start with a MoveTo command")]
    MissingInitialMoveTo,

    /// Attribute text could not be parsed.
    #[error("failed to parse {grammar}: {message}")]
    Parse {
        /// Name of the grammar that rejected the input.
        grammar: &'static str,
        /// Description of the underlying failure.
        message: String,
    },

    /// No conversion path exists between two units.
    #[error("cannot convert from {from} to {to}")]
    UnitConversion {
        /// Unit of the value being converted.
        from: String,
        /// Requested unit.
        to: String,
    },

    /// Two adjacent transform functions have no swap rule.
    #[error("cannot swap transforms {first} and {second}")]
    TransformSwap {
        /// Serialized first operand.
        first: String,
        /// Serialized second operand.
        second: String,
    },

    /// A transform list could not be applied to an element.
    #[error("cannot reify transform list `{transform}`")]
    Reify {
        /// Serialized transform list that was being reified.
        transform: String,
        /// The failure that stopped reification.
        #[source]
        source: Box<SvgError>,
    },

    /// A transform function that cannot be applied to attributes directly.
    #[error("transform function {function} cannot be applied to element attributes")]
    UnsupportedTransform {
        /// Serialized function.
        function: String,
    },

    /// An operation that requires a uniform scale received a non-uniform one.
    #[error("non-uniform scale ({sx}, {sy}) is not supported here")]
    NonUniformScale {
        /// Horizontal scale factor.
        sx: f64,
        /// Vertical scale factor.
        sy: f64,
    },

    /// An index was outside the bounds of a sequence.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SvgError>;

impl SvgError {
    pub(crate) fn parse(grammar: &'static str, message: impl Into<String>) -> Self {
        SvgError::Parse {
            grammar,
            message: message.into(),
        }
    }
}

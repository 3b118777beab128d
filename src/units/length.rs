//! The `<length>` value type.

use super::{Quantity, UnitConverter};
use crate::error::{Result, SvgError};
use crate::format::{Formatter, PrecisionGroup, SvgSerialize};
use crate::parse::Scanner;
use std::fmt;
use std::ops::{Div, Mul, Neg};
use std::str::FromStr;

/// Units a length can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    /// No unit: user space units.
    #[default]
    User,
    Px,
    Cm,
    Mm,
    In,
    Pt,
    Pc,
    /// Quarter millimeters.
    Q,
    Percent,
    Em,
    Ex,
    Ch,
    Rem,
    Vw,
    Vh,
    Vmin,
    Vmax,
}

impl LengthUnit {
    /// The unit suffix as written after the number.
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::User => "",
            LengthUnit::Px => "px",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::In => "in",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
            LengthUnit::Q => "Q",
            LengthUnit::Percent => "%",
            LengthUnit::Em => "em",
            LengthUnit::Ex => "ex",
            LengthUnit::Ch => "ch",
            LengthUnit::Rem => "rem",
            LengthUnit::Vw => "vw",
            LengthUnit::Vh => "vh",
            LengthUnit::Vmin => "vmin",
            LengthUnit::Vmax => "vmax",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        let unit = match suffix {
            "" => LengthUnit::User,
            "px" => LengthUnit::Px,
            "cm" => LengthUnit::Cm,
            "mm" => LengthUnit::Mm,
            "in" => LengthUnit::In,
            "pt" => LengthUnit::Pt,
            "pc" => LengthUnit::Pc,
            "Q" => LengthUnit::Q,
            "%" => LengthUnit::Percent,
            "em" => LengthUnit::Em,
            "ex" => LengthUnit::Ex,
            "ch" => LengthUnit::Ch,
            "rem" => LengthUnit::Rem,
            "vw" => LengthUnit::Vw,
            "vh" => LengthUnit::Vh,
            "vmin" => LengthUnit::Vmin,
            "vmax" => LengthUnit::Vmax,
            _ => return None,
        };
        Some(unit)
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthUnit::User => f.write_str("user units"),
            unit => f.write_str(unit.suffix()),
        }
    }
}

const LENGTH_RATES: [((LengthUnit, LengthUnit), f64); 7] = [
    ((LengthUnit::User, LengthUnit::Px), 1.0),
    ((LengthUnit::In, LengthUnit::Px), 96.0),
    ((LengthUnit::In, LengthUnit::Cm), 2.54),
    ((LengthUnit::Cm, LengthUnit::Mm), 10.0),
    ((LengthUnit::Mm, LengthUnit::Q), 4.0),
    ((LengthUnit::Pt, LengthUnit::Px), 4.0 / 3.0),
    ((LengthUnit::Pc, LengthUnit::Px), 16.0),
];

thread_local! {
    static CONVERTER: UnitConverter<LengthUnit> = UnitConverter::new(LENGTH_RATES);
}

/// A number with an optional length unit, such as `10`, `2.5cm` or `50%`.
///
/// # Example
///
/// ```
/// use svgmodel::units::{Length, LengthUnit};
///
/// let length: Length = "1in".parse().unwrap();
/// assert_eq!(length.to(LengthUnit::Px).unwrap().value, 96.0);
/// assert!(length.to(LengthUnit::Percent).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    #[inline]
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// A length in user units.
    #[inline]
    pub fn user(value: f64) -> Self {
        Self::new(value, LengthUnit::User)
    }

    #[inline]
    pub fn zero() -> Self {
        Self::user(0.0)
    }

    /// Converts to another unit.
    pub fn to(&self, unit: LengthUnit) -> Result<Self> {
        CONVERTER.with(|converter| converter.convert(self, unit))
    }

    /// The value in user units.
    pub fn to_user(&self) -> Result<f64> {
        Ok(self.to(LengthUnit::User)?.value)
    }

    #[inline]
    pub fn is_percentage(&self) -> bool {
        self.unit == LengthUnit::Percent
    }

    /// Adds `other`, converted into this length's unit.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        let other = other.to(self.unit)?;
        Ok(Self::new(self.value + other.value, self.unit))
    }

    /// Subtracts `other`, converted into this length's unit.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.try_add(&-*other)
    }

    /// Adds a user-space offset. Percentages are returned unchanged.
    pub fn translated(&self, offset: f64) -> Result<Self> {
        if self.is_percentage() {
            return Ok(*self);
        }
        self.try_add(&Self::user(offset))
    }

    /// Multiplies by a scale factor. Percentages are returned unchanged.
    pub fn scaled(&self, factor: f64) -> Self {
        if self.is_percentage() {
            *self
        } else {
            *self * factor
        }
    }
}

impl Quantity for Length {
    type Unit = LengthUnit;

    fn value(&self) -> f64 {
        self.value
    }

    fn unit(&self) -> LengthUnit {
        self.unit
    }

    fn from_parts(value: f64, unit: LengthUnit) -> Self {
        Self::new(value, unit)
    }
}

impl Mul<f64> for Length {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self::new(self.value * factor, self.unit)
    }
}

impl Div<f64> for Length {
    type Output = Self;

    fn div(self, divisor: f64) -> Self {
        Self::new(self.value / divisor, self.unit)
    }
}

impl Neg for Length {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Self::user(value)
    }
}

impl FromStr for Length {
    type Err = SvgError;

    fn from_str(s: &str) -> Result<Self> {
        let mut scanner = Scanner::new(s, "length");
        scanner.skip_whitespace();
        let value = scanner.number()?;
        let suffix = if scanner.peek() == Some('%') {
            scanner.bump();
            "%"
        } else {
            scanner.identifier()
        };
        let unit = LengthUnit::from_suffix(suffix)
            .ok_or_else(|| scanner.error(format!("unknown unit '{}'", suffix)))?;
        scanner.finish()?;
        Ok(Self::new(value, unit))
    }
}

impl SvgSerialize for Length {
    fn serialize_with(&self, formatter: &Formatter) -> String {
        format!(
            "{}{}",
            formatter.number(self.value, PrecisionGroup::Coordinate),
            self.unit.suffix()
        )
    }
}

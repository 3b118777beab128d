//! The `<angle>` value type.

use super::{Quantity, UnitConverter};
use crate::error::{Result, SvgError};
use crate::format::{Formatter, PrecisionGroup, SvgSerialize};
use crate::parse::Scanner;
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Mul, Neg};
use std::str::FromStr;

/// Units an angle can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    /// No unit: degrees.
    #[default]
    User,
    Deg,
    Grad,
    Rad,
    Turn,
}

impl AngleUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            AngleUnit::User => "",
            AngleUnit::Deg => "deg",
            AngleUnit::Grad => "grad",
            AngleUnit::Rad => "rad",
            AngleUnit::Turn => "turn",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::User => f.write_str("user units"),
            unit => f.write_str(unit.suffix()),
        }
    }
}

const ANGLE_RATES: [((AngleUnit, AngleUnit), f64); 4] = [
    ((AngleUnit::User, AngleUnit::Deg), 1.0),
    ((AngleUnit::Deg, AngleUnit::Grad), 10.0 / 9.0),
    ((AngleUnit::Rad, AngleUnit::Deg), 180.0 / PI),
    ((AngleUnit::Turn, AngleUnit::Deg), 360.0),
];

thread_local! {
    static CONVERTER: UnitConverter<AngleUnit> = UnitConverter::new(ANGLE_RATES);
}

/// A number with an optional angle unit, such as `45`, `0.5turn` or `1rad`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle {
    pub value: f64,
    pub unit: AngleUnit,
}

impl Angle {
    #[inline]
    pub fn new(value: f64, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    /// An angle in degrees, without a unit suffix.
    #[inline]
    pub fn user(value: f64) -> Self {
        Self::new(value, AngleUnit::User)
    }

    pub fn to(&self, unit: AngleUnit) -> Result<Self> {
        CONVERTER.with(|converter| converter.convert(self, unit))
    }

    /// The value in degrees.
    pub fn to_degrees(&self) -> Result<f64> {
        Ok(self.to(AngleUnit::Deg)?.value)
    }
}

impl Quantity for Angle {
    type Unit = AngleUnit;

    fn value(&self) -> f64 {
        self.value
    }

    fn unit(&self) -> AngleUnit {
        self.unit
    }

    fn from_parts(value: f64, unit: AngleUnit) -> Self {
        Self::new(value, unit)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self::new(self.value * factor, self.unit)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

impl FromStr for Angle {
    type Err = SvgError;

    fn from_str(s: &str) -> Result<Self> {
        let mut scanner = Scanner::new(s, "angle");
        scanner.skip_whitespace();
        let value = scanner.number()?;
        let unit = match scanner.identifier() {
            "" => AngleUnit::User,
            "deg" => AngleUnit::Deg,
            "grad" => AngleUnit::Grad,
            "rad" => AngleUnit::Rad,
            "turn" => AngleUnit::Turn,
            other => return Err(scanner.error(format!("unknown unit '{}'", other))),
        };
        scanner.finish()?;
        Ok(Self::new(value, unit))
    }
}

impl SvgSerialize for Angle {
    fn serialize_with(&self, formatter: &Formatter) -> String {
        format!(
            "{}{}",
            formatter.number(self.value, PrecisionGroup::Angle),
            self.unit.suffix()
        )
    }
}

//! Tolerance-aware float helpers and degree-based trigonometry.
//!
//! SVG expresses every angle in degrees, so the trigonometric helpers here
//! take and return degrees. Common angles map to exact results so that
//! round trips such as `atan_deg(tan_deg(45.0))` stay exact.

/// Relative tolerance used by [`is_close`].
pub const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Absolute tolerance used by [`is_close`].
pub const ABSOLUTE_TOLERANCE: f64 = 1e-9;

/// Returns true if two numbers are equal within the crate-wide tolerances.
#[inline]
pub fn is_close(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    diff <= (RELATIVE_TOLERANCE * a.abs().max(b.abs())).max(ABSOLUTE_TOLERANCE)
}

/// Sign of `x` as -1, 0 or 1.
#[inline]
pub fn signum(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Tangent of an angle given in degrees.
pub fn tan_deg(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(180.0);

    if normalized == 0.0 {
        0.0
    } else if normalized == 45.0 {
        1.0
    } else if normalized == 135.0 {
        -1.0
    } else {
        normalized.to_radians().tan()
    }
}

/// Arctangent in degrees.
pub fn atan_deg(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else if value == 1.0 {
        45.0
    } else if value == -1.0 {
        -45.0
    } else {
        value.atan().to_degrees()
    }
}

/// Two-argument arctangent in degrees, in the range (-180, 180].
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    if y == 0.0 && x >= 0.0 {
        return 0.0;
    }
    let angle = y.atan2(x).to_degrees();
    if is_close(angle, -180.0) {
        180.0
    } else {
        angle
    }
}

/// Sine and cosine of an angle given in degrees, exact for multiples of 90.
pub fn sin_cos_deg(degrees: f64) -> (f64, f64) {
    let normalized = degrees.rem_euclid(360.0);

    if normalized == 0.0 {
        (0.0, 1.0)
    } else if normalized == 90.0 {
        (1.0, 0.0)
    } else if normalized == 180.0 {
        (0.0, -1.0)
    } else if normalized == 270.0 {
        (-1.0, 0.0)
    } else {
        normalized.to_radians().sin_cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_is_close() {
        assert!(is_close(1.0, 1.0));
        assert!(is_close(1.0, 1.0 + 1e-12));
        assert!(!is_close(1.0, 1.001));
        assert!(is_close(0.0, std::f64::consts::PI.sin()));
        assert!(is_close(1e12, 1e12 + 1.0));
    }

    #[test]
    fn test_signum() {
        assert_eq!(signum(-5.0), -1.0);
        assert_eq!(signum(0.0), 0.0);
        assert_eq!(signum(0.5), 1.0);
    }

    #[test]
    fn test_tan_exact_angles() {
        assert_eq!(tan_deg(0.0), 0.0);
        assert_eq!(tan_deg(45.0), 1.0);
        assert_eq!(tan_deg(-45.0), -1.0);
        assert_eq!(tan_deg(180.0), 0.0);
        assert_relative_eq!(tan_deg(30.0), 30f64.to_radians().tan(), epsilon = 1e-12);
    }

    #[test]
    fn test_atan_exact_values() {
        assert_eq!(atan_deg(0.0), 0.0);
        assert_eq!(atan_deg(1.0), 45.0);
        assert_eq!(atan_deg(-1.0), -45.0);
        assert_relative_eq!(atan_deg(tan_deg(33.0)), 33.0, epsilon = 1e-10);
    }

    #[test]
    fn test_atan2_range() {
        assert_eq!(atan2_deg(0.0, 1.0), 0.0);
        assert_relative_eq!(atan2_deg(1.0, 0.0), 90.0, epsilon = 1e-12);
        assert_relative_eq!(atan2_deg(0.0, -1.0), 180.0, epsilon = 1e-12);
        assert_relative_eq!(atan2_deg(-1.0, 0.0), -90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sin_cos_quarter_turns() {
        assert_eq!(sin_cos_deg(90.0), (1.0, 0.0));
        assert_eq!(sin_cos_deg(-90.0), (-1.0, 0.0));
        assert_eq!(sin_cos_deg(360.0), (0.0, 1.0));
        let (s, c) = sin_cos_deg(30.0);
        assert_relative_eq!(s, 0.5, epsilon = 1e-12);
        assert_relative_eq!(c, 3f64.sqrt() / 2.0, epsilon = 1e-12);
    }
}

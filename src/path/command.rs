//! Path commands.

use crate::primitives::Point;
use crate::transform::TransformFunction;

/// One command of SVG path data.
///
/// Coordinates are always stored absolute; relative input is converted when
/// the command is added to a [`PathData`](super::PathData). Commands whose end
/// point or control point depends on their predecessor (`H`, `V`, `S`, `T`,
/// `Z`) store only what they carry and are resolved against the containing
/// path on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M`: start a new subpath at `end`.
    MoveTo { end: Point },
    /// `L`
    LineTo { end: Point },
    /// `H`: horizontal line to `x`, keeping the current y coordinate.
    HorizontalLineTo { x: f64 },
    /// `V`: vertical line to `y`, keeping the current x coordinate.
    VerticalLineTo { y: f64 },
    /// `C`
    CubicBezierTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// `S`: cubic curve whose first control point mirrors the previous one.
    SmoothCubicBezierTo { control2: Point, end: Point },
    /// `Q`
    QuadraticBezierTo { control: Point, end: Point },
    /// `T`: quadratic curve whose control point mirrors the previous one.
    SmoothQuadraticBezierTo { end: Point },
    /// `A`: elliptical arc with x-axis rotation `angle` in degrees.
    ArcTo {
        radii: Point,
        angle: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    /// `Z`
    ClosePath,
}

impl PathCommand {
    /// The absolute (upper-case) command letter.
    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo { .. } => 'M',
            PathCommand::LineTo { .. } => 'L',
            PathCommand::HorizontalLineTo { .. } => 'H',
            PathCommand::VerticalLineTo { .. } => 'V',
            PathCommand::CubicBezierTo { .. } => 'C',
            PathCommand::SmoothCubicBezierTo { .. } => 'S',
            PathCommand::QuadraticBezierTo { .. } => 'Q',
            PathCommand::SmoothQuadraticBezierTo { .. } => 'T',
            PathCommand::ArcTo { .. } => 'A',
            PathCommand::ClosePath => 'Z',
        }
    }

    /// Returns true for commands with coordinates, which is every command
    /// except `ClosePath`.
    #[inline]
    pub fn is_physical(&self) -> bool {
        !matches!(self, PathCommand::ClosePath)
    }

    /// Returns true for `H`, `V`, `S` and `T`.
    #[inline]
    pub fn is_shorthand(&self) -> bool {
        matches!(
            self,
            PathCommand::HorizontalLineTo { .. }
                | PathCommand::VerticalLineTo { .. }
                | PathCommand::SmoothCubicBezierTo { .. }
                | PathCommand::SmoothQuadraticBezierTo { .. }
        )
    }

    /// The stored end point, if the command has one.
    ///
    /// `H`, `V` and `Z` return `None`; use
    /// [`resolve_end`](super::resolve_end) for those.
    pub fn end(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo { end }
            | PathCommand::LineTo { end }
            | PathCommand::CubicBezierTo { end, .. }
            | PathCommand::SmoothCubicBezierTo { end, .. }
            | PathCommand::QuadraticBezierTo { end, .. }
            | PathCommand::SmoothQuadraticBezierTo { end }
            | PathCommand::ArcTo { end, .. } => Some(end),
            PathCommand::HorizontalLineTo { .. }
            | PathCommand::VerticalLineTo { .. }
            | PathCommand::ClosePath => None,
        }
    }

    /// Moves every stored coordinate by `offset`.
    ///
    /// Arc radii are sizes, not positions, and stay unchanged.
    pub fn translated(&self, offset: Point) -> Self {
        match *self {
            PathCommand::MoveTo { end } => PathCommand::MoveTo { end: end + offset },
            PathCommand::LineTo { end } => PathCommand::LineTo { end: end + offset },
            PathCommand::HorizontalLineTo { x } => PathCommand::HorizontalLineTo { x: x + offset.x },
            PathCommand::VerticalLineTo { y } => PathCommand::VerticalLineTo { y: y + offset.y },
            PathCommand::CubicBezierTo {
                control1,
                control2,
                end,
            } => PathCommand::CubicBezierTo {
                control1: control1 + offset,
                control2: control2 + offset,
                end: end + offset,
            },
            PathCommand::SmoothCubicBezierTo { control2, end } => {
                PathCommand::SmoothCubicBezierTo {
                    control2: control2 + offset,
                    end: end + offset,
                }
            }
            PathCommand::QuadraticBezierTo { control, end } => PathCommand::QuadraticBezierTo {
                control: control + offset,
                end: end + offset,
            },
            PathCommand::SmoothQuadraticBezierTo { end } => {
                PathCommand::SmoothQuadraticBezierTo { end: end + offset }
            }
            PathCommand::ArcTo {
                radii,
                angle,
                large_arc,
                sweep,
                end,
            } => PathCommand::ArcTo {
                radii,
                angle,
                large_arc,
                sweep,
                end: end + offset,
            },
            PathCommand::ClosePath => PathCommand::ClosePath,
        }
    }

    /// Converts `H` and `V` into a `LineTo`, filling the missing coordinate
    /// with 0. Other commands are returned unchanged.
    pub fn to_line(&self) -> Self {
        match *self {
            PathCommand::HorizontalLineTo { x } => PathCommand::LineTo {
                end: Point::new(x, 0.0),
            },
            PathCommand::VerticalLineTo { y } => PathCommand::LineTo {
                end: Point::new(0.0, y),
            },
            other => other,
        }
    }

    /// Maps the command through a transform function.
    ///
    /// `H` and `V` keep their form under translations and scales; any other
    /// function turns them into a `LineTo` first via [`to_line`](Self::to_line).
    ///
    /// Arcs are only approximated: a rotation adds to the arc's x-axis angle
    /// and leaves its end point alone, a scale scales the radii, and skews or
    /// matrices move the end point only.
    pub fn transformed(&self, function: &TransformFunction) -> Self {
        let map = |p: Point| function.apply_to_point(p);

        match *self {
            PathCommand::MoveTo { end } => PathCommand::MoveTo { end: map(end) },
            PathCommand::LineTo { end } => PathCommand::LineTo { end: map(end) },
            PathCommand::HorizontalLineTo { x } => match function {
                TransformFunction::Translate { .. } | TransformFunction::Scale { .. } => {
                    PathCommand::HorizontalLineTo {
                        x: map(Point::new(x, 0.0)).x,
                    }
                }
                _ => self.to_line().transformed(function),
            },
            PathCommand::VerticalLineTo { y } => match function {
                TransformFunction::Translate { .. } | TransformFunction::Scale { .. } => {
                    PathCommand::VerticalLineTo {
                        y: map(Point::new(0.0, y)).y,
                    }
                }
                _ => self.to_line().transformed(function),
            },
            PathCommand::CubicBezierTo {
                control1,
                control2,
                end,
            } => PathCommand::CubicBezierTo {
                control1: map(control1),
                control2: map(control2),
                end: map(end),
            },
            PathCommand::SmoothCubicBezierTo { control2, end } => {
                PathCommand::SmoothCubicBezierTo {
                    control2: map(control2),
                    end: map(end),
                }
            }
            PathCommand::QuadraticBezierTo { control, end } => PathCommand::QuadraticBezierTo {
                control: map(control),
                end: map(end),
            },
            PathCommand::SmoothQuadraticBezierTo { end } => {
                PathCommand::SmoothQuadraticBezierTo { end: map(end) }
            }
            PathCommand::ArcTo {
                radii,
                angle,
                large_arc,
                sweep,
                end,
            } => {
                let (radii, angle, sweep, end) = match *function {
                    TransformFunction::Translate { .. } => (radii, angle, sweep, map(end)),
                    TransformFunction::Scale { sx, sy } => {
                        let sy = sy.unwrap_or(sx);
                        let radii = Point::new((radii.x * sx).abs(), (radii.y * sy).abs());
                        // a mirrored arc runs the other way round
                        let sweep = if sx * sy < 0.0 { !sweep } else { sweep };
                        (radii, angle, sweep, map(end))
                    }
                    TransformFunction::Rotate { angle: rotation, .. } => {
                        (radii, angle + rotation, sweep, end)
                    }
                    _ => (radii, angle, sweep, map(end)),
                };
                PathCommand::ArcTo {
                    radii,
                    angle,
                    large_arc,
                    sweep,
                    end,
                }
            }
            PathCommand::ClosePath => PathCommand::ClosePath,
        }
    }
}

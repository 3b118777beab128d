//! End point and control point resolution.
//!
//! Shorthand commands leave part of their geometry implicit. These functions
//! recover it by walking backwards through the commands that precede
//! `index`. They are pure: nothing is cached on the commands.
//!
//! A missing predecessor resolves to the origin, the initial current point
//! of every path.

use super::PathCommand;
use crate::primitives::Point;

/// Returns the end point of the command at `index`.
///
/// `H` and `V` take their missing coordinate from the preceding commands and
/// `Z` returns the start of its subpath.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn resolve_end(commands: &[PathCommand], index: usize) -> Point {
    let mut x = None;
    let mut y = None;
    let mut i = index;

    loop {
        let base = match commands[i] {
            PathCommand::HorizontalLineTo { x: hx } => {
                x.get_or_insert(hx);
                None
            }
            PathCommand::VerticalLineTo { y: vy } => {
                y.get_or_insert(vy);
                None
            }
            PathCommand::ClosePath => Some(subpath_start(commands, i)),
            command => command.end(),
        };

        if let Some(base) = base {
            return Point::new(x.unwrap_or(base.x), y.unwrap_or(base.y));
        }
        if i == 0 {
            return Point::new(x.unwrap_or(0.0), y.unwrap_or(0.0));
        }
        i -= 1;
    }
}

/// Returns the current point after the first `len` commands.
pub(crate) fn current_point(commands: &[PathCommand], len: usize) -> Point {
    match len {
        0 => Point::zero(),
        n => resolve_end(commands, n - 1),
    }
}

/// Returns the initial point of the subpath that contains `index`: the end of
/// the nearest `MoveTo` before it.
pub fn subpath_start(commands: &[PathCommand], index: usize) -> Point {
    commands[..index]
        .iter()
        .rev()
        .find_map(|command| match *command {
            PathCommand::MoveTo { end } => Some(end),
            _ => None,
        })
        .unwrap_or_default()
}

/// Returns the control point of a smooth quadratic curve (`T`) at `index`.
///
/// Following a `Q`, the control point is the reflection of the `Q` control
/// point across its end. A chain of `T` commands keeps reflecting. After any
/// other command the control point coincides with the current point.
///
/// The command at `index` itself is not inspected, so `index` may equal
/// `commands.len()` to ask what a newly appended `T` would resolve to.
pub fn resolve_quadratic_control(commands: &[PathCommand], index: usize) -> Point {
    let mut start = index;
    while start > 0 && matches!(commands[start - 1], PathCommand::SmoothQuadraticBezierTo { .. }) {
        start -= 1;
    }

    let mut control = match start.checked_sub(1) {
        None => Point::zero(),
        Some(prev) => match commands[prev] {
            PathCommand::QuadraticBezierTo { control, .. } => {
                control.reflect_across(resolve_end(commands, prev))
            }
            _ => resolve_end(commands, prev),
        },
    };

    for m in start + 1..=index {
        control = control.reflect_across(resolve_end(commands, m - 1));
    }
    control
}

/// Returns the first control point of a smooth cubic curve (`S`) at `index`.
///
/// Following a `C` or `S`, this is the reflection of the previous second
/// control point across the previous end point. Otherwise it is the current
/// point. As with [`resolve_quadratic_control`], `index` may equal
/// `commands.len()`.
pub fn resolve_cubic_control(commands: &[PathCommand], index: usize) -> Point {
    let Some(prev) = index.checked_sub(1) else {
        return Point::zero();
    };

    let end = resolve_end(commands, prev);
    match commands[prev] {
        PathCommand::CubicBezierTo { control2, .. }
        | PathCommand::SmoothCubicBezierTo { control2, .. } => control2.reflect_across(end),
        _ => end,
    }
}

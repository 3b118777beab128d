//! Path data serialization.

use super::{PathCommand, PathData};
use crate::format::{CommandMode, CoordinateMode, Formatter, PrecisionGroup, ShorthandMode, SvgSerialize};
use std::borrow::Cow;

/// Returns true if `current` may be written without its letter after `prev`.
///
/// A repeated `M` would read back as `L` and a bare `Z` has nothing to
/// repeat, so neither is ever elided.
fn can_elide_letter(prev: &PathCommand, current: &PathCommand) -> bool {
    match (prev, current) {
        (_, PathCommand::MoveTo { .. }) | (_, PathCommand::ClosePath) => false,
        (PathCommand::MoveTo { .. }, PathCommand::LineTo { .. }) => true,
        _ => prev.letter() == current.letter(),
    }
}

fn serialize_command(
    command: &PathCommand,
    relative: bool,
    implicit: bool,
    formatter: &Formatter,
) -> String {
    let coordinate = |value: f64| formatter.number(value, PrecisionGroup::Coordinate);

    let args: Vec<String> = match *command {
        PathCommand::MoveTo { end }
        | PathCommand::LineTo { end }
        | PathCommand::SmoothQuadraticBezierTo { end } => vec![end.serialize_with(formatter)],
        PathCommand::HorizontalLineTo { x } => vec![coordinate(x)],
        PathCommand::VerticalLineTo { y } => vec![coordinate(y)],
        PathCommand::CubicBezierTo {
            control1,
            control2,
            end,
        } => vec![
            control1.serialize_with(formatter),
            control2.serialize_with(formatter),
            end.serialize_with(formatter),
        ],
        PathCommand::SmoothCubicBezierTo { control2, end } => vec![
            control2.serialize_with(formatter),
            end.serialize_with(formatter),
        ],
        PathCommand::QuadraticBezierTo { control, end } => vec![
            control.serialize_with(formatter),
            end.serialize_with(formatter),
        ],
        PathCommand::ArcTo {
            radii,
            angle,
            large_arc,
            sweep,
            end,
        } => vec![
            radii.serialize_with(formatter),
            formatter.number(angle, PrecisionGroup::Angle),
            large_arc.serialize_with(formatter),
            sweep.serialize_with(formatter),
            end.serialize_with(formatter),
        ],
        PathCommand::ClosePath => Vec::new(),
    };

    let letter = if relative {
        command.letter().to_ascii_lowercase()
    } else {
        command.letter()
    };

    match (implicit, args.is_empty()) {
        (true, _) => args.join(" "),
        (false, true) => letter.to_string(),
        (false, false) => format!("{} {}", letter, args.join(" ")),
    }
}

impl SvgSerialize for PathData {
    /// Writes the path using the formatter's path data options.
    ///
    /// Shorthands are resolved or applied first, then coordinates are made
    /// relative if requested, then command letters are elided in implicit
    /// mode.
    fn serialize_with(&self, formatter: &Formatter) -> String {
        let lines = formatter.path_data_shorthand_line_commands;
        let curves = formatter.path_data_shorthand_curve_commands;

        let mut path = Cow::Borrowed(self);
        if lines == ShorthandMode::Never || curves == ShorthandMode::Never {
            path = Cow::Owned(path.resolve_shorthands(
                lines == ShorthandMode::Never,
                curves == ShorthandMode::Never,
            ));
        }
        if lines == ShorthandMode::Always || curves == ShorthandMode::Always {
            path = Cow::Owned(path.apply_shorthands(
                lines == ShorthandMode::Always,
                curves == ShorthandMode::Always,
            ));
        }

        let relative = formatter.path_data_coordinates == CoordinateMode::Relative;
        if relative {
            path = Cow::Owned(path.relativize());
        }

        let implicit_mode = formatter.path_data_commands == CommandMode::Implicit;
        let mut parts = Vec::with_capacity(path.len());
        let mut prev: Option<&PathCommand> = None;

        for command in path.iter() {
            let implicit = implicit_mode && prev.map_or(false, |p| can_elide_letter(p, command));
            parts.push(serialize_command(command, relative, implicit, formatter));
            prev = Some(command);
        }

        parts.join(" ")
    }
}

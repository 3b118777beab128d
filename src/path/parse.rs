//! Path data parser.

use super::{PathCommand, PathData};
use crate::error::{Result, SvgError};
use crate::parse::Scanner;
use crate::primitives::Point;
use std::str::FromStr;

fn point(scanner: &mut Scanner<'_>) -> Result<Point> {
    let x = scanner.argument()?;
    let y = scanner.argument()?;
    Ok(Point::new(x, y))
}

/// Parses the arguments of one command of kind `letter` (upper case).
fn arguments(scanner: &mut Scanner<'_>, letter: char) -> Result<PathCommand> {
    let command = match letter {
        'M' => PathCommand::MoveTo {
            end: point(scanner)?,
        },
        'L' => PathCommand::LineTo {
            end: point(scanner)?,
        },
        'H' => PathCommand::HorizontalLineTo {
            x: scanner.argument()?,
        },
        'V' => PathCommand::VerticalLineTo {
            y: scanner.argument()?,
        },
        'C' => PathCommand::CubicBezierTo {
            control1: point(scanner)?,
            control2: point(scanner)?,
            end: point(scanner)?,
        },
        'S' => PathCommand::SmoothCubicBezierTo {
            control2: point(scanner)?,
            end: point(scanner)?,
        },
        'Q' => PathCommand::QuadraticBezierTo {
            control: point(scanner)?,
            end: point(scanner)?,
        },
        'T' => PathCommand::SmoothQuadraticBezierTo {
            end: point(scanner)?,
        },
        'A' => PathCommand::ArcTo {
            radii: point(scanner)?,
            angle: scanner.argument()?,
            large_arc: scanner.flag()?,
            sweep: scanner.flag()?,
            end: point(scanner)?,
        },
        other => return Err(scanner.error(format!("unknown command '{}'", other))),
    };
    Ok(command)
}

impl FromStr for PathData {
    type Err = SvgError;

    /// Parses path data such as `"M 10,10 h 90 v 90 z"`.
    ///
    /// Numbers may follow each other without separators where the grammar
    /// is unambiguous (`"M0-1.5.5"`), arc flags may be packed (`"a1 1 0 110 1"`),
    /// and a command letter may be omitted for repeated commands. Repeated
    /// `M` arguments are read as `L`. An empty string is an empty path.
    fn from_str(s: &str) -> Result<Self> {
        let mut scanner = Scanner::new(s, "path-data");
        let mut path = PathData::new();

        scanner.skip_whitespace();
        while let Some(letter) = scanner.peek() {
            if !letter.is_ascii_alphabetic() {
                return Err(scanner.error(format!("expected a command, found '{}'", letter)));
            }
            if path.is_empty() && letter != 'M' && letter != 'm' {
                return Err(scanner.error("path data must begin with a moveto command"));
            }
            scanner.bump();
            scanner.skip_whitespace();

            let relative = letter.is_ascii_lowercase();
            let mut kind = letter.to_ascii_uppercase();

            if kind == 'Z' {
                path.append_command(PathCommand::ClosePath, false)?;
                scanner.skip_separator();
                continue;
            }

            loop {
                let command = arguments(&mut scanner, kind)?;
                path.append_command(command, relative)?;
                if !scanner.has_number() {
                    break;
                }
                if kind == 'M' {
                    kind = 'L';
                }
            }
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_compact_arcs() {
        let path: PathData = "M12 22a10 10 0 110-20 10 10 0 010 20z".parse().unwrap();

        assert_eq!(path.len(), 4);
        assert_eq!(path[0], PathCommand::MoveTo { end: p(12.0, 22.0) });
        assert_eq!(
            path[1],
            PathCommand::ArcTo {
                radii: p(10.0, 10.0),
                angle: 0.0,
                large_arc: true,
                sweep: true,
                end: p(12.0, 2.0),
            }
        );
        assert_eq!(
            path[2],
            PathCommand::ArcTo {
                radii: p(10.0, 10.0),
                angle: 0.0,
                large_arc: false,
                sweep: true,
                end: p(12.0, 22.0),
            }
        );
        assert_eq!(path[3], PathCommand::ClosePath);
    }

    #[test]
    fn test_implicit_commands() {
        let path: PathData = "M 0 0 10 0 10 10 L 20 20 30 30".parse().unwrap();
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo { end: p(0.0, 0.0) },
                PathCommand::LineTo { end: p(10.0, 0.0) },
                PathCommand::LineTo { end: p(10.0, 10.0) },
                PathCommand::LineTo { end: p(20.0, 20.0) },
                PathCommand::LineTo { end: p(30.0, 30.0) },
            ]
        );
    }

    #[test]
    fn test_relative_commands() {
        let path: PathData = "m 10 10 h 5 v 5 l -5 0 z m 1 1 t 2 2".parse().unwrap();
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo { end: p(10.0, 10.0) },
                PathCommand::HorizontalLineTo { x: 15.0 },
                PathCommand::VerticalLineTo { y: 15.0 },
                PathCommand::LineTo { end: p(10.0, 15.0) },
                PathCommand::ClosePath,
                // relative to the start of the closed subpath
                PathCommand::MoveTo { end: p(11.0, 11.0) },
                PathCommand::SmoothQuadraticBezierTo { end: p(13.0, 13.0) },
            ]
        );
    }

    #[test]
    fn test_relative_implicit_move_repeats_as_line() {
        let path: PathData = "m1,1 2,2".parse().unwrap();
        assert_eq!(path[1], PathCommand::LineTo { end: p(3.0, 3.0) });
    }

    #[test]
    fn test_curves() {
        let path: PathData = "M0,0C1,2 3,4 5,6S7,8 9,10Q1,1 2,2T3,3".parse().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(
            path[2],
            PathCommand::SmoothCubicBezierTo {
                control2: p(7.0, 8.0),
                end: p(9.0, 10.0)
            }
        );
        assert_eq!(path[4], PathCommand::SmoothQuadraticBezierTo { end: p(3.0, 3.0) });
    }

    #[test]
    fn test_empty() {
        assert!("".parse::<PathData>().unwrap().is_empty());
        assert!(" \n ".parse::<PathData>().unwrap().is_empty());
    }

    #[test]
    fn test_errors() {
        let err = "L 10 10".parse::<PathData>().unwrap_err();
        assert!(matches!(err, SvgError::Parse { grammar: "path-data", .. }));

        assert!("M 10".parse::<PathData>().is_err());
        assert!("M 10 10 X 5".parse::<PathData>().is_err());
        assert!("M 10 10 Z 5".parse::<PathData>().is_err());
        assert!("M 0 0 A 1 1 0 2 0 5 5".parse::<PathData>().is_err());
        assert!("10 10".parse::<PathData>().is_err());
    }
}

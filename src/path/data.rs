//! The `PathData` container.

use super::resolve::{self, current_point};
use super::PathCommand;
use crate::error::{Result, SvgError};
use crate::primitives::Point;
use crate::transform::TransformFunction;
use std::ops::{Add, Bound, Deref, RangeBounds, Sub};

/// The value of a `d` attribute: an ordered list of [`PathCommand`]s.
///
/// A non-empty path always starts with a `MoveTo`. The builder methods and
/// the indexed mutators ([`push`](Self::push), [`insert`](Self::insert),
/// [`set`](Self::set), [`remove`](Self::remove)) refuse changes that would
/// break it with [`SvgError::MissingInitialMoveTo`].
///
/// Read access goes through `Deref<Target = [PathCommand]>`, so paths index
/// and slice like any slice.
///
/// # Example
///
/// ```
/// use svgmodel::{PathData, Point};
///
/// # fn main() -> svgmodel::Result<()> {
/// let path = PathData::new()
///     .move_to(Point::new(10.0, 10.0), false)?
///     .horizontal_line_to(100.0, false)?
///     .vertical_line_to(100.0, false)?
///     .close()?;
///
/// assert_eq!(path.resolve_end(1), Point::new(100.0, 10.0));
/// assert_eq!(path.end(), Some(Point::new(10.0, 10.0)));
///
/// assert!(PathData::new().line_to(Point::new(1.0, 1.0), false).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the path, returning its commands.
    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// The initial point of the path.
    pub fn start(&self) -> Option<Point> {
        self.commands.first().and_then(PathCommand::end)
    }

    /// The resolved end point of the last command.
    pub fn end(&self) -> Option<Point> {
        (!self.commands.is_empty()).then(|| self.current_point())
    }

    /// The point the next command starts from; the origin for an empty path.
    pub fn current_point(&self) -> Point {
        current_point(&self.commands, self.commands.len())
    }

    /// See [`resolve_end`](super::resolve_end).
    pub fn resolve_end(&self, index: usize) -> Point {
        resolve::resolve_end(&self.commands, index)
    }

    /// See [`resolve_quadratic_control`](super::resolve_quadratic_control).
    pub fn resolve_quadratic_control(&self, index: usize) -> Point {
        resolve::resolve_quadratic_control(&self.commands, index)
    }

    /// See [`resolve_cubic_control`](super::resolve_cubic_control).
    pub fn resolve_cubic_control(&self, index: usize) -> Point {
        resolve::resolve_cubic_control(&self.commands, index)
    }

    /// Appends a command, converting relative coordinates first.
    ///
    /// Relative coordinates on an empty path are taken from the origin.
    pub(crate) fn append_command(&mut self, command: PathCommand, relative: bool) -> Result<()> {
        let command = if relative {
            command.translated(self.current_point())
        } else {
            command
        };
        self.push(command)
    }

    fn with(mut self, command: PathCommand, relative: bool) -> Result<Self> {
        self.append_command(command, relative)?;
        Ok(self)
    }

    pub fn move_to(self, end: Point, relative: bool) -> Result<Self> {
        self.with(PathCommand::MoveTo { end }, relative)
    }

    pub fn line_to(self, end: Point, relative: bool) -> Result<Self> {
        self.with(PathCommand::LineTo { end }, relative)
    }

    pub fn horizontal_line_to(self, x: f64, relative: bool) -> Result<Self> {
        self.with(PathCommand::HorizontalLineTo { x }, relative)
    }

    pub fn vertical_line_to(self, y: f64, relative: bool) -> Result<Self> {
        self.with(PathCommand::VerticalLineTo { y }, relative)
    }

    pub fn quadratic_bezier_to(self, control: Point, end: Point, relative: bool) -> Result<Self> {
        self.with(PathCommand::QuadraticBezierTo { control, end }, relative)
    }

    pub fn cubic_bezier_to(
        self,
        control1: Point,
        control2: Point,
        end: Point,
        relative: bool,
    ) -> Result<Self> {
        self.with(
            PathCommand::CubicBezierTo {
                control1,
                control2,
                end,
            },
            relative,
        )
    }

    /// Draws an elliptical arc; `angle` is the x-axis rotation in degrees.
    pub fn arc_to(
        self,
        radii: Point,
        angle: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
        relative: bool,
    ) -> Result<Self> {
        self.with(
            PathCommand::ArcTo {
                radii,
                angle,
                large_arc,
                sweep,
                end,
            },
            relative,
        )
    }

    pub fn smooth_quadratic_bezier_to(self, end: Point, relative: bool) -> Result<Self> {
        self.with(PathCommand::SmoothQuadraticBezierTo { end }, relative)
    }

    pub fn smooth_cubic_bezier_to(self, control2: Point, end: Point, relative: bool) -> Result<Self> {
        self.with(PathCommand::SmoothCubicBezierTo { control2, end }, relative)
    }

    pub fn close(self) -> Result<Self> {
        self.with(PathCommand::ClosePath, false)
    }

    /// Appends a command as given.
    ///
    /// # Errors
    ///
    /// [`SvgError::MissingInitialMoveTo`] if the path is empty and `command`
    /// is not a `MoveTo`.
    pub fn push(&mut self, command: PathCommand) -> Result<()> {
        self.insert(self.commands.len(), command)
    }

    /// Removes the last command.
    pub fn pop(&mut self) -> Option<PathCommand> {
        self.commands.pop()
    }

    /// Inserts a command at `index`, shifting later commands back.
    ///
    /// # Errors
    ///
    /// [`SvgError::IndexOutOfRange`] if `index > len`, and
    /// [`SvgError::MissingInitialMoveTo`] when inserting anything but a
    /// `MoveTo` at the front.
    pub fn insert(&mut self, index: usize, command: PathCommand) -> Result<()> {
        if index > self.commands.len() {
            return Err(SvgError::IndexOutOfRange {
                index,
                len: self.commands.len(),
            });
        }
        if index == 0 && !matches!(command, PathCommand::MoveTo { .. }) {
            return Err(SvgError::MissingInitialMoveTo);
        }
        self.commands.insert(index, command);
        Ok(())
    }

    /// Replaces the command at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// [`SvgError::IndexOutOfRange`] for a bad index, and
    /// [`SvgError::MissingInitialMoveTo`] when replacing the first command
    /// with anything but a `MoveTo`.
    pub fn set(&mut self, index: usize, command: PathCommand) -> Result<PathCommand> {
        if index >= self.commands.len() {
            return Err(SvgError::IndexOutOfRange {
                index,
                len: self.commands.len(),
            });
        }
        if index == 0 && !matches!(command, PathCommand::MoveTo { .. }) {
            return Err(SvgError::MissingInitialMoveTo);
        }
        Ok(std::mem::replace(&mut self.commands[index], command))
    }

    /// Removes and returns the command at `index`.
    ///
    /// # Errors
    ///
    /// [`SvgError::IndexOutOfRange`] for a bad index, and
    /// [`SvgError::MissingInitialMoveTo`] when removing the first command
    /// would leave a path that does not start with a `MoveTo`.
    pub fn remove(&mut self, index: usize) -> Result<PathCommand> {
        if index >= self.commands.len() {
            return Err(SvgError::IndexOutOfRange {
                index,
                len: self.commands.len(),
            });
        }
        if index == 0
            && self.commands.len() > 1
            && !matches!(self.commands[1], PathCommand::MoveTo { .. })
        {
            return Err(SvgError::MissingInitialMoveTo);
        }
        Ok(self.commands.remove(index))
    }

    /// Copies a range of commands into a new path.
    ///
    /// # Errors
    ///
    /// [`SvgError::IndexOutOfRange`] if the range reaches past the end, and
    /// [`SvgError::MissingInitialMoveTo`] if a non-empty range does not start
    /// with a `MoveTo`.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<Self> {
        let len = self.commands.len();
        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i + 1,
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        };
        if end > len || start > end {
            return Err(SvgError::IndexOutOfRange {
                index: start.max(end),
                len,
            });
        }

        let commands = &self.commands[start..end];
        match commands.first() {
            Some(PathCommand::MoveTo { .. }) | None => Ok(Self {
                commands: commands.to_vec(),
            }),
            Some(_) => Err(SvgError::MissingInitialMoveTo),
        }
    }

    /// Splits the path into subpaths.
    ///
    /// A subpath starts at a `MoveTo` and runs up to the next `MoveTo`, or up
    /// to and including a `ClosePath`.
    pub fn subpaths(&self) -> Vec<&[PathCommand]> {
        let mut subpaths = Vec::new();
        let mut start = 0;

        for (i, command) in self.commands.iter().enumerate() {
            match command {
                PathCommand::MoveTo { .. } if i > start => {
                    subpaths.push(&self.commands[start..i]);
                    start = i;
                }
                PathCommand::ClosePath => {
                    subpaths.push(&self.commands[start..=i]);
                    start = i + 1;
                }
                _ => {}
            }
        }

        if start < self.commands.len() {
            subpaths.push(&self.commands[start..]);
        }
        subpaths
    }

    /// Returns true if no `MoveTo` separates two drawing commands.
    ///
    /// Leading and trailing moves are allowed.
    pub fn is_continuous(&self) -> bool {
        self.commands
            .split(|command| matches!(command, PathCommand::MoveTo { .. }))
            .filter(|run| !run.is_empty())
            .count()
            <= 1
    }

    /// Moves every command by `offset`.
    pub fn translated(&self, offset: Point) -> Self {
        self.commands
            .iter()
            .map(|command| command.translated(offset))
            .collect()
    }

    /// Maps every command through a transform function.
    ///
    /// Unlike [`PathCommand::transformed`], `H` and `V` commands that cannot
    /// stay axis-aligned are first expanded to a `LineTo` through their
    /// resolved end point, so the drawn geometry is preserved.
    pub fn transformed(&self, function: &TransformFunction) -> Self {
        let keeps_axes = matches!(
            function,
            TransformFunction::Translate { .. } | TransformFunction::Scale { .. }
        );

        self.commands
            .iter()
            .enumerate()
            .map(|(i, command)| match command {
                PathCommand::HorizontalLineTo { .. } | PathCommand::VerticalLineTo { .. }
                    if !keeps_axes =>
                {
                    PathCommand::LineTo {
                        end: function.apply_to_point(self.resolve_end(i)),
                    }
                }
                command => command.transformed(function),
            })
            .collect()
    }

    /// Replaces shorthand commands with their full-length forms.
    ///
    /// `lines` expands `H` and `V` into `L`; `curves` expands `S` into `C`
    /// and `T` into `Q`.
    pub fn resolve_shorthands(&self, lines: bool, curves: bool) -> Self {
        let mut result = Self {
            commands: Vec::with_capacity(self.commands.len()),
        };

        for (i, command) in self.commands.iter().enumerate() {
            let resolved = match *command {
                PathCommand::SmoothQuadraticBezierTo { end } if curves => {
                    PathCommand::QuadraticBezierTo {
                        control: self.resolve_quadratic_control(i),
                        end,
                    }
                }
                PathCommand::SmoothCubicBezierTo { control2, end } if curves => {
                    PathCommand::CubicBezierTo {
                        control1: self.resolve_cubic_control(i),
                        control2,
                        end,
                    }
                }
                PathCommand::HorizontalLineTo { x } if lines => PathCommand::LineTo {
                    end: Point::new(x, result.current_point().y),
                },
                PathCommand::VerticalLineTo { y } if lines => PathCommand::LineTo {
                    end: Point::new(result.current_point().x, y),
                },
                other => other,
            };
            result.commands.push(resolved);
        }

        result
    }

    /// Replaces full-length commands with shorthands where they draw exactly
    /// the same thing.
    ///
    /// A line becomes `V` or `H` when it keeps the current x or y coordinate.
    /// A curve is first written as `T` or `S`; if the control point that
    /// shorthand resolves to differs from the original one, the original
    /// command is put back.
    pub fn apply_shorthands(&self, lines: bool, curves: bool) -> Self {
        let mut result = Self {
            commands: Vec::with_capacity(self.commands.len()),
        };

        for command in &self.commands {
            let current = result.current_point();

            match *command {
                PathCommand::LineTo { end } if lines && end.x == current.x => {
                    result.commands.push(PathCommand::VerticalLineTo { y: end.y });
                }
                PathCommand::LineTo { end } if lines && end.y == current.y => {
                    result.commands.push(PathCommand::HorizontalLineTo { x: end.x });
                }
                PathCommand::QuadraticBezierTo { control, end } if curves => {
                    result
                        .commands
                        .push(PathCommand::SmoothQuadraticBezierTo { end });
                    let last = result.commands.len() - 1;
                    if result.resolve_quadratic_control(last) != control {
                        result.commands[last] = *command;
                    }
                }
                PathCommand::CubicBezierTo {
                    control1,
                    control2,
                    end,
                } if curves => {
                    result
                        .commands
                        .push(PathCommand::SmoothCubicBezierTo { control2, end });
                    let last = result.commands.len() - 1;
                    if result.resolve_cubic_control(last) != control1 {
                        result.commands[last] = *command;
                    }
                }
                other => result.commands.push(other),
            }
        }

        result
    }

    /// Rewrites every coordinate as an offset from the current point.
    ///
    /// The result is meant for relative serialization; its commands still
    /// look absolute to every other operation.
    pub fn relativize(&self) -> Self {
        let mut position = Point::zero();
        let mut commands = Vec::with_capacity(self.commands.len());

        for (i, command) in self.commands.iter().enumerate() {
            commands.push(command.translated(-position));
            position = self.resolve_end(i);
        }

        Self { commands }
    }
}

impl Deref for PathData {
    type Target = [PathCommand];

    fn deref(&self) -> &[PathCommand] {
        &self.commands
    }
}

impl<'a> IntoIterator for &'a PathData {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Collects commands without checking the initial `MoveTo`.
///
/// Only used for maps over a path that is already valid.
impl FromIterator<PathCommand> for PathData {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<Vec<PathCommand>> for PathData {
    type Error = SvgError;

    fn try_from(commands: Vec<PathCommand>) -> Result<Self> {
        match commands.first() {
            Some(PathCommand::MoveTo { .. }) | None => Ok(Self { commands }),
            Some(_) => Err(SvgError::MissingInitialMoveTo),
        }
    }
}

impl Add<Point> for PathData {
    type Output = Self;

    fn add(self, offset: Point) -> Self {
        self.translated(offset)
    }
}

impl Sub<Point> for PathData {
    type Output = Self;

    fn sub(self, offset: Point) -> Self {
        self.translated(-offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn square() -> PathData {
        PathData::try_from(vec![
            PathCommand::MoveTo { end: p(10.0, 10.0) },
            PathCommand::HorizontalLineTo { x: 100.0 },
            PathCommand::VerticalLineTo { y: 100.0 },
            PathCommand::ClosePath,
        ])
        .unwrap()
    }

    fn radical_inverse(mut index: u32, base: u32) -> f64 {
        let mut result = 0.0;
        let mut fraction = 1.0 / base as f64;
        while index > 0 {
            result += (index % base) as f64 * fraction;
            index /= base;
            fraction /= base as f64;
        }
        result
    }

    /// Builds a path of full-length commands on an integer grid, with some
    /// curves that continue smoothly from their predecessor.
    fn full_length_path(seed: u32) -> PathData {
        let coord = |i: u32, base: u32| (radical_inverse(seed * 16 + i, base) * 64.0).floor();
        let point = |i: u32| p(coord(i, 2), coord(i, 3));

        let mut path = PathData::new().move_to(point(0), false).unwrap();
        for i in 1..12 {
            let current = path.current_point();
            path = match (seed + i) % 6 {
                0 => path.line_to(p(current.x, coord(i, 5)), false),
                1 => path.line_to(point(i), false),
                2 => path.quadratic_bezier_to(point(i), point(i + 20), false),
                3 => {
                    let control = path.resolve_quadratic_control(path.len());
                    path.quadratic_bezier_to(control, point(i), false)
                }
                4 => path.cubic_bezier_to(point(i), point(i + 20), point(i + 40), false),
                _ => {
                    let control1 = path.resolve_cubic_control(path.len());
                    path.cubic_bezier_to(control1, point(i + 20), point(i), false)
                }
            }
            .unwrap();
        }
        path
    }

    #[test]
    fn test_builder_resolves_ends() {
        let path = square();
        assert_eq!(path.len(), 4);
        assert_eq!(path.resolve_end(1), p(100.0, 10.0));
        assert_eq!(path.resolve_end(2), p(100.0, 100.0));
        assert_eq!(path.start(), Some(p(10.0, 10.0)));
        assert_eq!(path.end(), Some(p(10.0, 10.0)));
        assert_eq!(PathData::new().end(), None);
    }

    #[test]
    fn test_builder_chain() -> Result<()> {
        let path = PathData::new()
            .move_to(p(10.0, 10.0), false)?
            .horizontal_line_to(100.0, false)?
            .vertical_line_to(100.0, false)?
            .close()?;
        assert_eq!(path, square());
        Ok(())
    }

    #[test]
    fn test_builder_relative() -> Result<()> {
        let path = PathData::new()
            .move_to(p(5.0, 5.0), true)?
            .line_to(p(10.0, 0.0), true)?
            .vertical_line_to(10.0, true)?
            .arc_to(p(3.0, 3.0), 0.0, false, true, p(-10.0, 0.0), true)?;

        assert_eq!(path[0], PathCommand::MoveTo { end: p(5.0, 5.0) });
        assert_eq!(path[1], PathCommand::LineTo { end: p(15.0, 5.0) });
        assert_eq!(path[2], PathCommand::VerticalLineTo { y: 15.0 });
        assert_eq!(
            path[3],
            PathCommand::ArcTo {
                radii: p(3.0, 3.0),
                angle: 0.0,
                large_arc: false,
                sweep: true,
                end: p(5.0, 15.0),
            }
        );
        Ok(())
    }

    #[test]
    fn test_builder_requires_move_to() {
        assert_eq!(
            PathData::new().line_to(p(5.0, 5.0), false),
            Err(SvgError::MissingInitialMoveTo)
        );
        assert_eq!(PathData::new().close(), Err(SvgError::MissingInitialMoveTo));
        assert_eq!(
            PathData::new().smooth_quadratic_bezier_to(p(1.0, 1.0), true),
            Err(SvgError::MissingInitialMoveTo)
        );
    }

    #[test]
    fn test_first_command_must_be_move_to() {
        let line = PathCommand::LineTo { end: p(1.0, 1.0) };
        let mut path = PathData::new();

        assert_eq!(path.push(line), Err(SvgError::MissingInitialMoveTo));
        assert_eq!(path.insert(0, line), Err(SvgError::MissingInitialMoveTo));
        assert!(path.is_empty());

        let mut path = square();
        assert_eq!(path.set(0, line), Err(SvgError::MissingInitialMoveTo));
        assert_eq!(path.insert(0, line), Err(SvgError::MissingInitialMoveTo));
        assert_eq!(path.remove(0), Err(SvgError::MissingInitialMoveTo));
        assert_eq!(path, square());

        assert_eq!(
            PathData::try_from(vec![PathCommand::ClosePath]),
            Err(SvgError::MissingInitialMoveTo)
        );
    }

    #[test]
    fn test_allowed_mutations() -> Result<()> {
        let mut path = square();
        assert_eq!(path.set(1, PathCommand::LineTo { end: p(50.0, 10.0) }), Ok(PathCommand::HorizontalLineTo { x: 100.0 }));
        assert_eq!(path.remove(3), Ok(PathCommand::ClosePath));
        assert!(path.push(PathCommand::ClosePath).is_ok());
        assert_eq!(path.pop(), Some(PathCommand::ClosePath));

        // removing the first command is fine when a MoveTo follows it
        let mut path = PathData::new().move_to(p(1.0, 1.0), false)?.move_to(p(2.0, 2.0), false)?;
        assert!(path.remove(0).is_ok());
        assert!(path.remove(0).is_ok());
        assert!(path.is_empty());

        assert_eq!(
            path.remove(0),
            Err(SvgError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(
            path.insert(1, PathCommand::ClosePath),
            Err(SvgError::IndexOutOfRange { index: 1, len: 0 })
        );
        Ok(())
    }

    #[test]
    fn test_slicing() {
        let path = square();
        assert_eq!(&path[1..3], &[
            PathCommand::HorizontalLineTo { x: 100.0 },
            PathCommand::VerticalLineTo { y: 100.0 },
        ]);
        assert_eq!(path.iter().filter(|c| c.is_shorthand()).count(), 2);

        let head = path.slice(..2).unwrap();
        assert_eq!(head.commands(), &path[..2]);
        assert!(path.slice(2..2).unwrap().is_empty());
        assert_eq!(path.slice(1..3), Err(SvgError::MissingInitialMoveTo));
        assert_eq!(
            path.slice(2..=path.len()),
            Err(SvgError::IndexOutOfRange {
                index: path.len() + 1,
                len: path.len()
            })
        );
    }

    #[test]
    fn test_subpaths() -> Result<()> {
        let path = PathData::new()
            .move_to(p(0.0, 0.0), false)?
            .line_to(p(1.0, 0.0), false)?
            .close()?
            .line_to(p(0.0, 1.0), false)?
            .move_to(p(5.0, 5.0), false)?
            .move_to(p(6.0, 6.0), false)?;

        let subpaths = path.subpaths();
        assert_eq!(subpaths.len(), 4);
        assert_eq!(subpaths[0].len(), 3);
        assert_eq!(subpaths[1], &[PathCommand::LineTo { end: p(0.0, 1.0) }]);
        assert_eq!(subpaths[2], &[PathCommand::MoveTo { end: p(5.0, 5.0) }]);
        assert!(PathData::new().subpaths().is_empty());
        Ok(())
    }

    #[test]
    fn test_is_continuous() -> Result<()> {
        assert!(PathData::new().is_continuous());

        let path = PathData::new().move_to(p(0.0, 0.0), false)?.line_to(p(1.0, 1.0), false)?;
        assert!(path.is_continuous());

        let path = path.move_to(p(2.0, 2.0), false)?;
        assert!(path.is_continuous());

        let path = path.line_to(p(3.0, 3.0), false)?;
        assert!(!path.is_continuous());
        Ok(())
    }

    #[test]
    fn test_translated() {
        let moved = square() + p(1.0, 2.0);
        assert_eq!(moved[0], PathCommand::MoveTo { end: p(11.0, 12.0) });
        assert_eq!(moved[1], PathCommand::HorizontalLineTo { x: 101.0 });
        assert_eq!(moved[2], PathCommand::VerticalLineTo { y: 102.0 });
        assert_eq!(moved - p(1.0, 2.0), square());
    }

    #[test]
    fn test_transformed_keeps_geometry_of_axis_lines() {
        let rotated = square().transformed(&TransformFunction::rotate(90.0));
        assert_eq!(rotated[0], PathCommand::MoveTo { end: p(-10.0, 10.0) });
        assert_eq!(rotated[1], PathCommand::LineTo { end: p(-10.0, 100.0) });
        assert_eq!(rotated[2], PathCommand::LineTo { end: p(-100.0, 100.0) });
        assert_eq!(rotated[3], PathCommand::ClosePath);

        let scaled = square().transformed(&TransformFunction::scale(2.0, 3.0));
        assert_eq!(scaled[1], PathCommand::HorizontalLineTo { x: 200.0 });
        assert_eq!(scaled.resolve_end(2), p(200.0, 300.0));
    }

    #[test]
    fn test_resolve_shorthands() -> Result<()> {
        let path = PathData::new()
            .move_to(p(0.0, 0.0), false)?
            .quadratic_bezier_to(p(20.0, 0.0), p(20.0, 20.0), false)?
            .smooth_quadratic_bezier_to(p(40.0, 40.0), false)?
            .horizontal_line_to(50.0, false)?;

        let resolved = path.resolve_shorthands(true, true);
        assert_eq!(
            resolved[2],
            PathCommand::QuadraticBezierTo {
                control: p(20.0, 40.0),
                end: p(40.0, 40.0)
            }
        );
        assert_eq!(resolved[3], PathCommand::LineTo { end: p(50.0, 40.0) });

        let lines_only = path.resolve_shorthands(true, false);
        assert_eq!(lines_only[2], path[2]);
        assert_eq!(lines_only[3], PathCommand::LineTo { end: p(50.0, 40.0) });
        Ok(())
    }

    #[test]
    fn test_apply_shorthands() -> Result<()> {
        let path = PathData::new()
            .move_to(p(10.0, 10.0), false)?
            .line_to(p(100.0, 10.0), false)?
            .line_to(p(100.0, 50.0), false)?
            .cubic_bezier_to(p(120.0, 50.0), p(140.0, 70.0), p(150.0, 70.0), false)?
            .cubic_bezier_to(p(160.0, 70.0), p(170.0, 90.0), p(180.0, 90.0), false)?
            .cubic_bezier_to(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0), false)?;

        let applied = path.apply_shorthands(true, true);
        assert_eq!(applied[1], PathCommand::HorizontalLineTo { x: 100.0 });
        assert_eq!(applied[2], PathCommand::VerticalLineTo { y: 50.0 });
        // a C right after a line only has a smooth form if control1 is the current point
        assert_eq!(applied[3], path[3]);
        assert_eq!(
            applied[4],
            PathCommand::SmoothCubicBezierTo {
                control2: p(170.0, 90.0),
                end: p(180.0, 90.0)
            }
        );
        // the shorthand would resolve to (190, 90), so the original stays
        assert_eq!(applied[5], path[5]);
        Ok(())
    }

    #[test]
    fn test_shorthand_laws() {
        for seed in 0..24 {
            let path = full_length_path(seed);
            let applied = path.apply_shorthands(true, true);
            let resolved = path.resolve_shorthands(true, true);

            assert_eq!(applied.apply_shorthands(true, true), applied);
            assert_eq!(resolved.resolve_shorthands(true, true), resolved);
            assert_eq!(applied.resolve_shorthands(true, true), path);
        }
    }

    #[test]
    fn test_shorthands_are_used() {
        let applied: usize = (0..24)
            .map(|seed| {
                full_length_path(seed)
                    .apply_shorthands(true, true)
                    .iter()
                    .filter(|c| c.is_shorthand())
                    .count()
            })
            .sum();
        assert!(applied > 24);
    }

    #[test]
    fn test_relativize() -> Result<()> {
        let path = square();
        let relative = path.relativize();
        assert_eq!(relative[0], PathCommand::MoveTo { end: p(10.0, 10.0) });
        assert_eq!(relative[1], PathCommand::HorizontalLineTo { x: 90.0 });
        assert_eq!(relative[2], PathCommand::VerticalLineTo { y: 90.0 });
        assert_eq!(relative[3], PathCommand::ClosePath);

        let path = square().move_to(p(5.0, 0.0), false)?;
        assert_eq!(path.relativize()[4], PathCommand::MoveTo { end: p(-5.0, -10.0) });
        Ok(())
    }
}

//! Elements as seen by reification.
//!
//! Reification only needs to know which geometric attributes an element
//! carries, so elements are described by a set of [`Capability`] tags rather
//! than by a type per element kind. Any document model can take part by
//! implementing [`GeometricElement`]; [`Element`] is a small tree type that
//! does so for plain SVG element names.

mod reify;

pub use reify::{apply_transform, reify, ReifyOptions};

use crate::primitives::Point;
use crate::transform::Transform;
use crate::units::Length;
use crate::PathData;

/// A geometric attribute group that reification can rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    X,
    Y,
    X1,
    Y1,
    X2,
    Y2,
    Cx,
    Cy,
    R,
    Rx,
    Ry,
    Width,
    Height,
    Points,
    D,
    FontSize,
    /// `stroke-width`, `stroke-dasharray`, `stroke-dashoffset` and
    /// `vector-effect`.
    Stroke,
    /// `pathLength`, which dash lengths are measured against.
    PathLength,
}

/// Attribute values that reification reads and writes.
///
/// Every field is optional; `None` means the attribute is absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    pub x: Option<Length>,
    pub y: Option<Length>,
    pub x1: Option<Length>,
    pub y1: Option<Length>,
    pub x2: Option<Length>,
    pub y2: Option<Length>,
    pub cx: Option<Length>,
    pub cy: Option<Length>,
    pub r: Option<Length>,
    pub rx: Option<Length>,
    pub ry: Option<Length>,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub points: Option<Vec<Point>>,
    pub d: Option<PathData>,
    pub font_size: Option<Length>,
    pub stroke_width: Option<Length>,
    pub stroke_dasharray: Option<Vec<Length>>,
    pub stroke_dashoffset: Option<Length>,
    pub path_length: Option<f64>,
    pub vector_effect: Option<String>,
    pub transform: Option<Transform>,
    /// `transform-origin` as an x, y pair.
    pub transform_origin: Option<(Length, Length)>,
}

/// The interface reification needs from a document element.
pub trait GeometricElement {
    /// The element name, such as `"rect"`.
    fn name(&self) -> &str;

    /// The attribute groups this element supports, or `None` if its
    /// transform cannot be folded into its attributes at all.
    fn capabilities(&self) -> Option<&[Capability]>;

    fn attributes(&self) -> &Attributes;

    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Direct child elements.
    fn children_mut(&mut self) -> &mut [Self]
    where
        Self: Sized;

    fn supports(&self, capability: Capability) -> bool {
        self.capabilities()
            .map_or(false, |capabilities| capabilities.contains(&capability))
    }
}

/// Capabilities of SVG elements by name.
///
/// `use` and `pattern` are deliberately absent: a `use` may share its target
/// with other references, and pattern transforms apply to the tile.
pub fn capabilities_of(name: &str) -> Option<&'static [Capability]> {
    use Capability::*;

    let capabilities: &'static [Capability] = match name {
        "rect" => &[X, Y, Width, Height, Rx, Ry, Stroke, PathLength],
        "circle" => &[Cx, Cy, R, Stroke, PathLength],
        "ellipse" => &[Cx, Cy, Rx, Ry, Stroke, PathLength],
        "line" => &[X1, Y1, X2, Y2, Stroke, PathLength],
        "polyline" | "polygon" => &[Points, Stroke, PathLength],
        "path" => &[D, Stroke, PathLength],
        "text" | "tspan" => &[X, Y, FontSize, Stroke],
        "image" | "foreignObject" | "svg" => &[X, Y, Width, Height],
        "g" | "a" | "switch" => &[FontSize, Stroke],
        _ => return None,
    };
    Some(capabilities)
}

/// A minimal element tree.
///
/// # Example
///
/// ```
/// use svgmodel::element::{Element, ReifyOptions};
/// use svgmodel::units::Length;
///
/// let mut rect = Element::new("rect");
/// rect.attributes.x = Some(Length::user(10.0));
/// rect.attributes.width = Some(Length::user(20.0));
/// rect.attributes.transform = Some("translate(5, 5) scale(2)".parse().unwrap());
///
/// rect.reify(&ReifyOptions::default()).unwrap();
///
/// assert_eq!(rect.attributes.x, Some(Length::user(25.0)));
/// assert_eq!(rect.attributes.y, Some(Length::user(5.0)));
/// assert_eq!(rect.attributes.width, Some(Length::user(40.0)));
/// assert_eq!(rect.attributes.transform, None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a child, builder style.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Folds this element's transforms into its attributes.
    ///
    /// See [`reify`].
    pub fn reify(&mut self, options: &ReifyOptions) -> crate::Result<()> {
        reify(self, options)
    }
}

impl GeometricElement for Element {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> Option<&[Capability]> {
        capabilities_of(&self.name)
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities() {
        let rect = Element::new("rect");
        assert!(rect.supports(Capability::Width));
        assert!(rect.supports(Capability::PathLength));
        assert!(!rect.supports(Capability::R));

        let group = Element::new("g");
        assert!(group.supports(Capability::Stroke));
        assert!(!group.supports(Capability::PathLength));

        assert!(Element::new("use").capabilities().is_none());
        assert!(Element::new("pattern").capabilities().is_none());
        assert!(!Element::new("linearGradient").supports(Capability::X1));
    }

    #[test]
    fn test_with_child() {
        let group = Element::new("g")
            .with_child(Element::new("rect"))
            .with_child(Element::new("circle"));
        assert_eq!(group.children.len(), 2);
        assert_eq!(group.children[1].name, "circle");
    }
}

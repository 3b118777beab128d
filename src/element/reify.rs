//! Reification: folding transform functions into element attributes.
//!
//! A transform list is reified from the outside in. Each translation or
//! scale is moved to the end of the list by swapping it past its
//! neighbours, then popped and applied to the attributes. Functions that
//! cannot be applied directly (rotations, skews) stay in the list. Every
//! function applied to a container is pushed down to its children, since
//! the container's own attributes do not carry its children's geometry.

use super::{Attributes, Capability, GeometricElement};
use crate::error::{Result, SvgError};
use crate::format::SvgSerialize;
use crate::math;
use crate::primitives::Point;
use crate::transform::{Transform, TransformFunction};
use crate::units::Length;

/// Options for [`reify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReifyOptions {
    /// Maximum number of functions to apply to each element.
    pub limit: usize,
    /// Also reify the element's descendants.
    pub recursive: bool,
    /// Remove the `transform` attribute once its list is empty.
    pub remove_transform_list_if_empty: bool,
}

impl Default for ReifyOptions {
    fn default() -> Self {
        Self {
            limit: usize::MAX,
            recursive: true,
            remove_transform_list_if_empty: true,
        }
    }
}

/// Options used for a child after a parent pushed one function onto it.
const CHILD_OPTIONS: ReifyOptions = ReifyOptions {
    limit: 1,
    recursive: false,
    remove_transform_list_if_empty: false,
};

/// Folds the transforms of `element` into its attributes.
///
/// The rendered geometry is unchanged: afterwards the element's remaining
/// transform list, applied to its rewritten attributes, draws the same
/// picture as before. Elements whose transforms cannot be folded (such as
/// `use` and `pattern`) are left untouched together with their subtree.
///
/// # Errors
///
/// Returns [`SvgError::Reify`] naming the transform list that failed, with
/// the underlying cause as its source. Typical causes are a swap that has no
/// closed form (a non-uniform scale next to a rotation) and a non-uniform
/// scale of a circle radius or stroke width.
pub fn reify<E: GeometricElement>(element: &mut E, options: &ReifyOptions) -> Result<()> {
    if element.capabilities().is_none() {
        if element.attributes().transform.is_some() {
            tracing::warn!(element = element.name(), "element cannot be reified, skipping");
        }
        return Ok(());
    }

    reify_this(element, options.limit)?;

    let attributes = element.attributes_mut();
    if options.remove_transform_list_if_empty
        && attributes.transform.as_ref().map_or(false, |t| t.is_empty())
    {
        attributes.transform = None;
    }

    if options.recursive {
        for child in element.children_mut() {
            reify(child, options)?;
        }
    }

    Ok(())
}

/// Rewrites `transform-origin` as a pair of translations around the list.
fn fold_transform_origin(attributes: &mut Attributes) -> Result<()> {
    let Some(transform) = attributes.transform.as_mut() else {
        return Ok(());
    };
    let Some((ox, oy)) = attributes.transform_origin else {
        return Ok(());
    };

    let origin = Point::new(ox.to_user()?, oy.to_user()?);
    transform.insert(0, TransformFunction::translate(origin.x, origin.y));
    transform.push(TransformFunction::translate(-origin.x, -origin.y));
    attributes.transform_origin = None;
    Ok(())
}

fn reify_this<E: GeometricElement>(element: &mut E, limit: usize) -> Result<()> {
    fold_transform_origin(element.attributes_mut())?;

    let Some(transform) = element.attributes_mut().transform.take() else {
        return Ok(());
    };
    let mut transform = transform.decompose_matrices();
    let written = transform.serialize();

    let result = reify_functions(element, &mut transform, limit);
    element.attributes_mut().transform = Some(transform);

    result.map_err(|source| SvgError::Reify {
        transform: written,
        source: Box::new(source),
    })
}

fn reify_functions<E: GeometricElement>(
    element: &mut E,
    transform: &mut Transform,
    limit: usize,
) -> Result<()> {
    let mut reified = 0;
    let mut i = 0;

    while reified < limit && i < transform.len() {
        if !transform[i].is_reifiable() {
            i += 1;
            continue;
        }

        transform.move_to_end(i)?;
        let Some(function) = transform.pop() else {
            break;
        };
        tracing::debug!(
            element = element.name(),
            function = %function.serialize(),
            "applying transform function"
        );
        apply_transform(element, &function)?;
        reified += 1;

        for child in element.children_mut() {
            // gradient stops carry no geometry
            if child.name() == "stop" {
                continue;
            }
            let attributes = child.attributes_mut();
            fold_transform_origin(attributes)?;
            attributes
                .transform
                .get_or_insert_with(Transform::new)
                .insert(0, function);
            tracing::debug!(
                element = child.name(),
                function = %function.serialize(),
                "pushed transform function to child"
            );
            reify(child, &CHILD_OPTIONS)?;
        }
    }

    Ok(())
}

/// Applies one translation or scale to the attributes of `element`.
///
/// # Errors
///
/// Returns [`SvgError::UnsupportedTransform`] for any other function, and
/// [`SvgError::NonUniformScale`] when a non-uniform scale meets an
/// attribute that only has a single size (a radius, a font size or a
/// stroke width).
pub fn apply_transform<E: GeometricElement>(
    element: &mut E,
    function: &TransformFunction,
) -> Result<()> {
    match *function {
        TransformFunction::Translate { tx, ty } => translate(element, tx, ty.unwrap_or(0.0)),
        TransformFunction::Scale { sx, sy } => scale(element, sx, sy.unwrap_or(sx)),
        _ => Err(SvgError::UnsupportedTransform {
            function: function.serialize(),
        }),
    }
}

fn capabilities<E: GeometricElement>(element: &E) -> Vec<Capability> {
    element
        .capabilities()
        .map(<[Capability]>::to_vec)
        .unwrap_or_default()
}

/// Translates a length slot. Absent slots start at zero if `initialize`.
fn shift(slot: &mut Option<Length>, offset: f64, initialize: bool) -> Result<()> {
    let current = match *slot {
        Some(length) => length,
        None if initialize => Length::default(),
        None => return Ok(()),
    };
    *slot = Some(current.translated(offset)?);
    Ok(())
}

fn stretch(slot: &mut Option<Length>, factor: f64) {
    if let Some(length) = slot.as_mut() {
        *length = length.scaled(factor);
    }
}

fn translate<E: GeometricElement>(element: &mut E, tx: f64, ty: f64) -> Result<()> {
    if math::is_close(tx, 0.0) && math::is_close(ty, 0.0) {
        return Ok(());
    }

    let capabilities = capabilities(element);
    let has = |capability| capabilities.contains(&capability);
    let attributes = element.attributes_mut();

    if has(Capability::X) {
        shift(&mut attributes.x, tx, true)?;
    }
    if has(Capability::Y) {
        shift(&mut attributes.y, ty, true)?;
    }
    if has(Capability::Cx) {
        shift(&mut attributes.cx, tx, true)?;
    }
    if has(Capability::Cy) {
        shift(&mut attributes.cy, ty, true)?;
    }
    if has(Capability::X1) {
        shift(&mut attributes.x1, tx, false)?;
    }
    if has(Capability::Y1) {
        shift(&mut attributes.y1, ty, false)?;
    }
    if has(Capability::X2) {
        shift(&mut attributes.x2, tx, false)?;
    }
    if has(Capability::Y2) {
        shift(&mut attributes.y2, ty, false)?;
    }

    let offset = Point::new(tx, ty);
    if has(Capability::Points) {
        if let Some(points) = attributes.points.as_mut() {
            points.iter_mut().for_each(|point| *point += offset);
        }
    }
    if has(Capability::D) {
        if let Some(d) = attributes.d.as_mut() {
            *d = d.translated(offset);
        }
    }

    Ok(())
}

fn scale<E: GeometricElement>(element: &mut E, sx: f64, sy: f64) -> Result<()> {
    if math::is_close(sx, 1.0) && math::is_close(sy, 1.0) {
        return Ok(());
    }

    let capabilities = capabilities(element);
    let has = |capability| capabilities.contains(&capability);
    let uniform = math::is_close(sx.abs(), sy.abs());
    let non_uniform = || SvgError::NonUniformScale { sx, sy };
    let attributes = element.attributes_mut();

    for (capability, slot, factor) in [
        (Capability::X, &mut attributes.x, sx),
        (Capability::Y, &mut attributes.y, sy),
        (Capability::X1, &mut attributes.x1, sx),
        (Capability::Y1, &mut attributes.y1, sy),
        (Capability::X2, &mut attributes.x2, sx),
        (Capability::Y2, &mut attributes.y2, sy),
        (Capability::Cx, &mut attributes.cx, sx),
        (Capability::Cy, &mut attributes.cy, sy),
        (Capability::Width, &mut attributes.width, sx),
        (Capability::Height, &mut attributes.height, sy),
        (Capability::Rx, &mut attributes.rx, sx.abs()),
        (Capability::Ry, &mut attributes.ry, sy.abs()),
    ] {
        if has(capability) {
            stretch(slot, factor);
        }
    }

    for (capability, slot) in [
        (Capability::R, &mut attributes.r),
        (Capability::FontSize, &mut attributes.font_size),
    ] {
        if has(capability) && slot.is_some() {
            if !uniform {
                return Err(non_uniform());
            }
            stretch(slot, sx.abs());
        }
    }

    if has(Capability::Points) {
        if let Some(points) = attributes.points.as_mut() {
            points
                .iter_mut()
                .for_each(|point| *point = Point::new(point.x * sx, point.y * sy));
        }
    }
    if has(Capability::D) {
        if let Some(d) = attributes.d.as_mut() {
            *d = d.transformed(&TransformFunction::scale(sx, sy));
        }
    }

    if has(Capability::Stroke) {
        scale_stroke(attributes, has(Capability::PathLength), sx, sy)?;
    }

    Ok(())
}

/// Scales `stroke-width` and the dash attributes.
///
/// Only an explicit stroke width is scaled. An unset one is inherited, and
/// the inherited value is scaled wherever it is set.
fn scale_stroke(
    attributes: &mut Attributes,
    measured: bool,
    sx: f64,
    sy: f64,
) -> Result<()> {
    if attributes.vector_effect.as_deref() == Some("non-scaling-stroke") {
        return Ok(());
    }

    let uniform = math::is_close(sx.abs(), sy.abs());
    let factor = sx.abs();
    let dashes_scale = !(measured && attributes.path_length.is_some())
        && (attributes.stroke_dasharray.is_some() || attributes.stroke_dashoffset.is_some());

    if !uniform {
        if attributes.stroke_width.is_some() || dashes_scale {
            return Err(SvgError::NonUniformScale { sx, sy });
        }
        return Ok(());
    }

    stretch(&mut attributes.stroke_width, factor);

    // dash lengths follow pathLength when it is set
    if dashes_scale {
        if let Some(dashes) = attributes.stroke_dasharray.as_mut() {
            dashes.iter_mut().for_each(|dash| *dash = dash.scaled(factor));
        }
        stretch(&mut attributes.stroke_dashoffset, factor);
    }

    Ok(())
}

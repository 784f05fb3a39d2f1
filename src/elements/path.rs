use log::debug;

use super::ellipse::ellipse;
use super::{Context, Positionable, ShapeBuilder, Styleable};
use crate::document::Element;
use crate::errors::{Error, Result};
use crate::path::{has_curves, is_closed, parse_path};
use crate::serialize::ModelicaElement;
use crate::style::{style_value, LinePattern, ShapeStyle, StrokeStyle};
use crate::types::fstr;

/// Build the item for a `path`: an arc drawn by Inkscape becomes an
/// `Ellipse`, a closed or filled path a `Polygon`, and anything else a `Line`.
pub fn path(el: &Element, ctx: &Context) -> Result<ModelicaElement> {
    if el.get_ns_attr("sodipodi", "type") == Some("arc") {
        debug!("path on line {} is an arc", el.line());
        return ellipse(el, ctx);
    }
    let d = path_data(el)?;
    let filled = style_value(el, "fill").is_some_and(|fill| fill != "none");
    if is_closed(d) || filled {
        polygon(el, ctx)
    } else {
        line(el, ctx)
    }
}

fn path_data<'a>(el: &Element<'a>) -> Result<&'a str> {
    el.get_attr("d")
        .ok_or_else(|| Error::MissingAttribute(el.tag().to_string(), "d".to_string()))
}

/// Common part of polygons and lines: the point sequence and smoothing.
fn path_shape(name: &str, el: &Element, ctx: &Context) -> Result<ShapeBuilder> {
    let d = path_data(el)?;
    let mut shape = ShapeBuilder::new(name, el, ctx)?;
    let points = parse_path(d, ctx.strict)?;
    let points = shape.points(&points);
    shape.set_attr("points", points);
    if has_curves(d) {
        shape.set_attr("smooth", "Smooth.Bezier");
    }
    Ok(shape)
}

pub fn polygon(el: &Element, ctx: &Context) -> Result<ModelicaElement> {
    let mut shape = path_shape("Polygon", el, ctx)?;
    shape.apply_style(&ShapeStyle::resolve(el, ctx.strict)?);
    Ok(shape.finish())
}

/// True if a marker property is set to something other than `none`
fn has_marker(el: &Element, name: &str) -> bool {
    style_value(el, name).is_some_and(|m| m != "none")
}

pub fn line(el: &Element, ctx: &Context) -> Result<ModelicaElement> {
    let mut shape = path_shape("Line", el, ctx)?;
    let stroke = StrokeStyle::resolve(el, ctx.strict)?;
    let thickness = stroke
        .width
        .filter(|_| stroke.is_visible())
        .map(|w| fstr(shape.length(w)));
    if let Some(thickness) = &thickness {
        shape.set_attr("thickness", thickness);
    }
    if stroke.pattern != LinePattern::Solid {
        shape.set_attr("pattern", stroke.pattern.to_string());
    }
    if let Some(colour) = stroke.colour.filter(|c| !c.is_black()) {
        shape.set_attr("color", colour.to_string());
    }

    // any marker is assumed to be an arrow head
    let arrow_start = has_marker(el, "marker-start");
    let arrow_end = has_marker(el, "marker-end");
    if arrow_start || arrow_end {
        let arrow = |set: bool| if set { "Arrow.Open" } else { "Arrow.None" };
        shape.set_attr(
            "arrow",
            format!("{{{}, {}}}", arrow(arrow_start), arrow(arrow_end)),
        );
        if let Some(thickness) = thickness {
            shape.set_attr("arrowSize", thickness);
        }
    }
    Ok(shape.finish())
}

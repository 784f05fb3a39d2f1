use super::{
    ns_number_attr, number_attr, required_attr, Context, Positionable, ShapeBuilder, Styleable,
};
use crate::document::Element;
use crate::errors::{Error, Result};
use crate::serialize::ModelicaElement;
use crate::style::ShapeStyle;
use crate::types::fstr;

fn required_ns_attr(el: &Element, name: &str) -> Result<f64> {
    ns_number_attr(el, "sodipodi", name)?
        .ok_or_else(|| Error::MissingAttribute(el.tag().to_string(), format!("sodipodi:{name}")))
}

/// Center and radii of a `circle`, `ellipse` or Inkscape arc `path`
fn geometry(el: &Element) -> Result<(f64, f64, f64, f64)> {
    match el.tag() {
        "circle" => {
            let r = required_attr(el, "r")?;
            Ok((
                number_attr(el, "cx")?.unwrap_or(0.),
                number_attr(el, "cy")?.unwrap_or(0.),
                r,
                r,
            ))
        }
        "ellipse" => Ok((
            number_attr(el, "cx")?.unwrap_or(0.),
            number_attr(el, "cy")?.unwrap_or(0.),
            required_attr(el, "rx")?,
            required_attr(el, "ry")?,
        )),
        _ => Ok((
            required_ns_attr(el, "cx")?,
            required_ns_attr(el, "cy")?,
            required_ns_attr(el, "rx")?,
            required_ns_attr(el, "ry")?,
        )),
    }
}

/// Start and end angles of an arc in degrees.
///
/// Inkscape gives clockwise angles in radians; Modelica angles are
/// counter-clockwise, with the start never after the end.
fn arc_angles(start: f64, end: f64) -> (f64, f64) {
    let mut start_angle = 360. - end.to_degrees();
    let end_angle = 360. - start.to_degrees();
    if start_angle > end_angle {
        start_angle -= 360.;
    }
    (start_angle, end_angle)
}

pub fn ellipse(el: &Element, ctx: &Context) -> Result<ModelicaElement> {
    let mut shape = ShapeBuilder::new("Ellipse", el, ctx)?;
    shape.apply_style(&ShapeStyle::resolve(el, ctx.strict)?);

    let (cx, cy, rx, ry) = geometry(el)?;
    let extent = shape.extent(cx - rx, cy - ry, cx + rx, cy + ry);
    shape.set_attr("extent", extent);

    if el.tag() == "path" {
        let start = ns_number_attr(el, "sodipodi", "start")?;
        let end = ns_number_attr(el, "sodipodi", "end")?;
        // a full ellipse has neither
        if let (Some(start), Some(end)) = (start, end) {
            let (start_angle, end_angle) = arc_angles(start, end);
            shape.set_attr("startAngle", fstr(start_angle));
            shape.set_attr("endAngle", fstr(end_angle));
        }
    }
    Ok(shape.finish())
}

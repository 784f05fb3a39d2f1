use super::{number_attr, required_attr, Context, Positionable, ShapeBuilder, Styleable};
use crate::document::Element;
use crate::errors::{tolerate, Error, Result};
use crate::serialize::ModelicaElement;
use crate::style::ShapeStyle;
use crate::types::{fstr, is_close, nonzero};

/// Corner radius from `rx` / `ry`. Modelica only has circular corners, so
/// the two must match in strict mode; otherwise their mean is used.
fn corner_radius(el: &Element, strict: bool) -> Result<Option<f64>> {
    let rx = number_attr(el, "rx")?;
    let ry = number_attr(el, "ry")?;
    let (rx, ry) = match (rx, ry) {
        (None, None) => return Ok(None),
        (Some(rx), Some(ry)) => {
            if !is_close(rx, ry, 1e-5, 1e-8) {
                tolerate(
                    Err(Error::Unsupported(format!(
                        "rx and ry must be equal ({rx} != {ry})"
                    ))),
                    strict,
                    || (),
                )?;
            }
            (rx, ry)
        }
        (rx, ry) => {
            tolerate(
                Err(Error::Unsupported(
                    "rx and ry must be equal (only one was given)".to_string(),
                )),
                strict,
                || (),
            )?;
            (rx.unwrap_or(0.), ry.unwrap_or(0.))
        }
    };
    Ok((nonzero(rx) && nonzero(ry)).then(|| (rx + ry) / 2.))
}

pub fn rectangle(el: &Element, ctx: &Context) -> Result<ModelicaElement> {
    let mut shape = ShapeBuilder::new("Rectangle", el, ctx)?;
    shape.apply_style(&ShapeStyle::resolve(el, ctx.strict)?);

    let x = number_attr(el, "x")?.unwrap_or(0.);
    let y = number_attr(el, "y")?.unwrap_or(0.);
    let w = required_attr(el, "width")?;
    let h = required_attr(el, "height")?;
    let extent = shape.extent(x, y, x + w, y + h);
    shape.set_attr("extent", extent);

    if let Some(radius) = corner_radius(el, ctx.strict)? {
        let radius = fstr(shape.length(radius));
        shape.set_attr("radius", radius);
    }
    Ok(shape.finish())
}

//! Builders turning SVG shape elements into Modelica graphic items.
mod container;
mod ellipse;
mod path;
mod rect;
mod text;

use itertools::Itertools;

use crate::document::Element;
use crate::errors::{Error, Result};
use crate::geometry::CoordSystem;
use crate::serialize::ModelicaElement;
use crate::style::{FillPattern, LinePattern, ShapeStyle};
use crate::transform_attr::resolve_chain;
use crate::types::{extent_str, fstr, nonzero, strp_lead};

pub use container::build_icon;
pub use text::TextExtent;

/// Per-document settings shared by all shape builders
#[derive(Clone, Copy, Debug)]
pub struct Context {
    pub coords: CoordSystem,
    pub strict: bool,
    pub text_extent: TextExtent,
}

/// Mapping from an element's local coordinates to icon coordinates.
///
/// Translation and rotation are emitted as the item's `origin` and
/// `rotation`; scale is applied to every coordinate and length.
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    coords: CoordSystem,
    sx: f64,
    sy: f64,
    offset: (f64, f64),
}

impl Placement {
    /// Resolve the transform chain of `el`, setting `origin` and `rotation`
    /// on the target item.
    pub fn resolve(el: &Element, ctx: &Context, target: &mut ModelicaElement) -> Result<Self> {
        let d = resolve_chain(el, ctx.strict)?;
        let coords = ctx.coords;
        target.set_attr(
            "origin",
            format!(
                "{{{},{}}}",
                fstr(coords.normalize_x(d.tx)),
                fstr(coords.normalize_y(d.ty))
            ),
        );
        if nonzero(d.angle) {
            target.set_attr("rotation", fstr(d.angle));
        }
        Ok(Self {
            coords,
            sx: d.sx,
            sy: d.sy,
            // the origin already carries the shift to the icon center
            offset: (-coords.normalize_x(0.), -coords.normalize_y(0.)),
        })
    }
}

pub trait Positionable {
    fn placement(&self) -> &Placement;

    fn x_coord(&self, x: f64) -> f64 {
        let p = self.placement();
        p.coords.normalize_x(x * p.sx) + p.offset.0
    }

    /// SVG y coordinates point down; Modelica's point up.
    fn y_coord(&self, y: f64) -> f64 {
        let p = self.placement();
        p.coords.normalize_y(-y * p.sy) + p.offset.1
    }

    /// Scale a length such as a stroke width or corner radius
    fn length(&self, value: f64) -> f64 {
        let p = self.placement();
        p.coords.normalize_delta(value) * (p.sx.abs() + p.sy.abs()) / 2.
    }

    fn extent(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> String {
        extent_str(
            self.x_coord(x1),
            self.y_coord(y1),
            self.x_coord(x2),
            self.y_coord(y2),
        )
    }

    fn points(&self, points: &[(f64, f64)]) -> String {
        let inner = points
            .iter()
            .map(|&(x, y)| format!("{{{}, {}}}", fstr(self.x_coord(x)), fstr(self.y_coord(y))))
            .join(", ");
        format!("{{{inner}}}")
    }
}

pub trait Styleable: Positionable {
    fn target(&mut self) -> &mut ModelicaElement;

    /// Apply stroke and fill to a closed shape. Black is the Modelica
    /// default colour and is never emitted.
    fn apply_style(&mut self, style: &ShapeStyle) {
        let has_stroke = style.stroke.is_visible();
        let has_fill = style.fill.is_visible();
        let thickness = style
            .stroke
            .width
            .filter(|_| has_stroke)
            .map(|w| fstr(self.length(w)));
        let target = self.target();
        if !has_stroke {
            target.set_attr("pattern", LinePattern::None.to_string());
        }
        if has_fill {
            target.set_attr("fillPattern", FillPattern::Solid.to_string());
        }
        if let Some(colour) = style.stroke.colour.filter(|c| has_stroke && !c.is_black()) {
            target.set_attr("lineColor", colour.to_string());
        }
        if let Some(colour) = style.fill.colour.filter(|c| has_fill && !c.is_black()) {
            target.set_attr("fillColor", colour.to_string());
        }
        if let Some(thickness) = thickness {
            target.set_attr("lineThickness", thickness);
        }
    }
}

/// A Modelica graphic item under construction
pub struct ShapeBuilder {
    placement: Placement,
    target: ModelicaElement,
}

impl ShapeBuilder {
    pub fn new(name: &str, el: &Element, ctx: &Context) -> Result<Self> {
        let mut target = ModelicaElement::new(name);
        let placement = Placement::resolve(el, ctx, &mut target)?;
        Ok(Self { placement, target })
    }

    pub fn set_attr(&mut self, key: &str, value: impl Into<String>) {
        self.target.set_attr(key, value);
    }

    pub fn finish(self) -> ModelicaElement {
        self.target
    }
}

impl Positionable for ShapeBuilder {
    fn placement(&self) -> &Placement {
        &self.placement
    }
}

impl Styleable for ShapeBuilder {
    fn target(&mut self) -> &mut ModelicaElement {
        &mut self.target
    }
}

fn parse_number(el: &Element, name: &str, value: &str) -> Result<f64> {
    strp_lead(value).map_err(|_| {
        Error::Malformed(format!("<{}> attribute {name}='{value}'", el.tag()))
    })
}

/// Numeric attribute of an element, ignoring any unit suffix
fn number_attr(el: &Element, name: &str) -> Result<Option<f64>> {
    el.get_attr(name)
        .map(|v| parse_number(el, name, v))
        .transpose()
}

fn required_attr(el: &Element, name: &str) -> Result<f64> {
    number_attr(el, name)?
        .ok_or_else(|| Error::MissingAttribute(el.tag().to_string(), name.to_string()))
}

/// Numeric attribute in the given namespace, e.g. `sodipodi:cx`
fn ns_number_attr(el: &Element, prefix: &str, name: &str) -> Result<Option<f64>> {
    el.get_ns_attr(prefix, name)
        .map(|v| parse_number(el, &format!("{prefix}:{name}"), v))
        .transpose()
}

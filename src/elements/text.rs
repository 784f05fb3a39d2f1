use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use super::{number_attr, Context, Placement, Positionable, ShapeBuilder, Styleable};
use crate::document::Element;
use crate::errors::{tolerate, Error, Result};
use crate::serialize::{modelica_string, ModelicaElement};
use crate::style::{FillPattern, FontStyle, LinePattern, ShapeStyle, TextAlignment};
use crate::types::fstr;
use crate::units::{convert_units, parse_length, Unit};

/// How the extent of a text item is estimated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TextExtent {
    /// Box around the estimated size of the text
    #[default]
    Normal,
    /// Zero-width box, for renderers which lay out text themselves
    Flow,
    /// Estimated box with a font size of zero, so the text is scaled to fit
    Scaled,
}

impl FromStr for TextExtent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "normal" => Ok(TextExtent::Normal),
            "flow" => Ok(TextExtent::Flow),
            "scaled" => Ok(TextExtent::Scaled),
            _ => Err(Error::Parse(format!("Unknown text extent mode: {s}"))),
        }
    }
}

impl fmt::Display for TextExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextExtent::Normal => write!(f, "normal"),
            TextExtent::Flow => write!(f, "flow"),
            TextExtent::Scaled => write!(f, "scaled"),
        }
    }
}

/// Font families which are the Modelica default and so never emitted
const DEFAULT_FONTS: [&str; 2] = ["Arial", "sans-serif"];

/// Ratio of character advance to font size; a guess, based on the
/// golden ratio.
const CHAR_WIDTH_RATIO: f64 = 1. / 1.618;
const LINE_HEIGHT_RATIO: f64 = 1.1;
const LINE_SPACING_RATIO: f64 = 0.2;
/// Position of the baseline within the line height, from the bottom
const BASELINE: f64 = 0.1;

/// Estimated box of a text anchored at `(x, y)`, in document units.
///
/// There is no text layout here; the box is derived from the number of
/// lines and the longest line only.
fn estimate_extent(
    text: &str,
    x: f64,
    y: f64,
    font_size_mm: f64,
    align: TextAlignment,
    mode: TextExtent,
) -> (f64, f64, f64, f64) {
    let lines: Vec<&str> = text.split('\n').collect();
    let text_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f64;
    let text_h = lines.len() as f64;
    let w = text_w * font_size_mm * CHAR_WIDTH_RATIO;
    let line_height = font_size_mm * LINE_HEIGHT_RATIO;
    let h = text_h * line_height + text_h * font_size_mm * LINE_SPACING_RATIO;
    let top = y - (1. - BASELINE) * line_height;
    let bottom = y + h - (1. - BASELINE) * line_height;
    if mode == TextExtent::Flow {
        return (x, y, x, bottom);
    }
    match align {
        TextAlignment::Left => (x, top, x + w, bottom),
        TextAlignment::Right => (x - w, top, x, bottom),
        TextAlignment::Center => (
            x - w / 2.,
            y - w / 2. + BASELINE * line_height,
            x + w / 2.,
            y + w / 2. + BASELINE * line_height,
        ),
    }
}

/// Text content: one line per child element (e.g. `tspan`), or the
/// element's own text if it has no children.
fn text_string(el: &Element) -> String {
    let mut children = el.children().peekable();
    if children.peek().is_some() {
        children.map(|c| c.text_content()).join("\n")
    } else {
        el.text_content()
    }
}

struct TextBuilder {
    shape: ShapeBuilder,
}

impl Positionable for TextBuilder {
    fn placement(&self) -> &Placement {
        self.shape.placement()
    }
}

impl Styleable for TextBuilder {
    fn target(&mut self) -> &mut ModelicaElement {
        self.shape.target()
    }

    /// Modelica draws text with the line colour, where SVG uses the fill.
    fn apply_style(&mut self, style: &ShapeStyle) {
        let target = self.target();
        if style.fill.pattern == Some(FillPattern::None) {
            target.set_attr("pattern", LinePattern::None.to_string());
        }
        if let Some(colour) = style.fill.colour.filter(|c| !c.is_black()) {
            target.set_attr("lineColor", colour.to_string());
        }
    }
}

pub fn text(el: &Element, ctx: &Context) -> Result<ModelicaElement> {
    let mut builder = TextBuilder {
        shape: ShapeBuilder::new("Text", el, ctx)?,
    };
    builder.apply_style(&ShapeStyle::resolve(el, ctx.strict)?);

    let content = text_string(el);
    builder.shape.set_attr("textString", modelica_string(&content));

    let first_child = el.first_child();
    let font = match &first_child {
        Some(child) => FontStyle::of(child).or(FontStyle::of(el)),
        None => FontStyle::of(el),
    };
    if !font.styles.is_empty() {
        let styles = font.styles.iter().join(",");
        builder.shape.set_attr("textStyle", format!("{{{styles}}}"));
    }
    if let Some(family) = font.family.filter(|f| !DEFAULT_FONTS.contains(f)) {
        builder.shape.set_attr("fontName", modelica_string(family));
    }
    let font_size_pt = match font.size {
        Some(size) => tolerate(parse_length(size, Unit::Pt).map(Some), ctx.strict, || None)?,
        None => None,
    }
    .unwrap_or(0.);
    let font_size = if ctx.text_extent == TextExtent::Scaled {
        0.
    } else {
        builder.length(font_size_pt)
    };
    builder.shape.set_attr("fontSize", fstr(font_size));

    let align = TextAlignment::resolve(el, first_child.as_ref(), ctx.strict)?;
    if let Some(value) = align.modelica() {
        builder.shape.set_attr("horizontalAlignment", value);
    }

    let x = number_attr(el, "x")?.unwrap_or(0.);
    let y = number_attr(el, "y")?.unwrap_or(0.);
    let font_size_mm = convert_units(font_size_pt, Unit::Pt, Unit::Mm);
    let (x1, y1, x2, y2) = estimate_extent(&content, x, y, font_size_mm, align, ctx.text_extent);
    let extent = builder.extent(x1, y1, x2, y2);
    builder.shape.set_attr("extent", extent);

    Ok(builder.shape.finish())
}

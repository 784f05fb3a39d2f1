//! Presentation properties of SVG elements, mapped to Modelica graphics attributes.
mod colour;

use std::fmt;

use crate::document::Element;
use crate::errors::{tolerate, Error, Result};
use crate::types::{is_close, strp, strp_lead};

pub use colour::Colour;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinePattern {
    None,
    Solid,
}

impl fmt::Display for LinePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinePattern::None => write!(f, "LinePattern.None"),
            LinePattern::Solid => write!(f, "LinePattern.Solid"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillPattern {
    None,
    Solid,
}

impl fmt::Display for FillPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillPattern::None => write!(f, "FillPattern.None"),
            FillPattern::Solid => write!(f, "FillPattern.Solid"),
        }
    }
}

/// Look up a presentation property of an element.
///
/// Entries of the inline `style` attribute take precedence over the
/// presentation attribute of the same name.
pub fn style_value<'a>(el: &Element<'a>, name: &str) -> Option<&'a str> {
    el.style()
        .into_iter()
        .flat_map(|style| style.split(';'))
        .filter_map(|entry| entry.split_once(':'))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim())
        .or_else(|| el.get_attr(name).map(str::trim))
}

/// Resolve a colour property; `none` and absent properties give no colour.
fn colour_value(el: &Element, name: &str, strict: bool) -> Result<Option<Colour>> {
    match style_value(el, name) {
        None | Some("none") => Ok(None),
        Some(value) => tolerate(value.parse().map(Some), strict, || None),
    }
}

/// Reject a property which has a value other than its default, which is the
/// only value Modelica can express.
fn check_default(el: &Element, name: &str, default: &str, strict: bool) -> Result<()> {
    let Some(value) = style_value(el, name) else {
        return Ok(());
    };
    let is_default = match default.parse::<f64>() {
        Ok(expected) => strp(value).is_ok_and(|v| is_close(v, expected, 1e-5, 1e-8)),
        Err(_) => value == default,
    };
    if is_default {
        Ok(())
    } else {
        tolerate(
            Err(Error::Unsupported(format!("css attribute {name}: {value}"))),
            strict,
            || (),
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub colour: Option<Colour>,
    pub pattern: LinePattern,
    /// Stroke width in document units
    pub width: Option<f64>,
}

impl StrokeStyle {
    pub fn resolve(el: &Element, strict: bool) -> Result<Self> {
        let pattern = if style_value(el, "stroke") == Some("none") {
            LinePattern::None
        } else {
            check_default(el, "stroke-dasharray", "none", strict)?;
            check_default(el, "stroke-dashoffset", "0", strict)?;
            check_default(el, "stroke-opacity", "1", strict)?;
            LinePattern::Solid
        };
        let width = match style_value(el, "stroke-width") {
            None => None,
            Some(value) if value.contains('%') || value == "inherit" => Some(tolerate(
                Err(Error::Unsupported(format!("stroke-width {value}"))),
                strict,
                || 1.,
            )?),
            Some(value) => Some(strp_lead(value).map_err(|_| {
                Error::Malformed(format!("<{}> stroke-width '{value}'", el.tag()))
            })?),
        };
        Ok(Self {
            colour: colour_value(el, "stroke", strict)?,
            pattern,
            width,
        })
    }

    pub fn is_visible(&self) -> bool {
        self.pattern != LinePattern::None
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FillStyle {
    pub colour: Option<Colour>,
    /// Unset when the element declares no fill
    pub pattern: Option<FillPattern>,
}

impl FillStyle {
    pub fn resolve(el: &Element, strict: bool) -> Result<Self> {
        let pattern = match style_value(el, "fill") {
            Some("none") => Some(FillPattern::None),
            fill => {
                check_default(el, "fill-opacity", "1", strict)?;
                fill.map(|_| FillPattern::Solid)
            }
        };
        Ok(Self {
            colour: colour_value(el, "fill", strict)?,
            pattern,
        })
    }

    pub fn is_visible(&self) -> bool {
        self.pattern == Some(FillPattern::Solid)
    }
}

/// Stroke and fill of a closed shape
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
    pub stroke: StrokeStyle,
    pub fill: FillStyle,
}

impl ShapeStyle {
    pub fn resolve(el: &Element, strict: bool) -> Result<Self> {
        Ok(Self {
            stroke: StrokeStyle::resolve(el, strict)?,
            fill: FillStyle::resolve(el, strict)?,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlignment {
    /// Value of a CSS `text-align` property. Inkscape also writes
    /// `start` and `end` here.
    fn from_text_align(value: &str) -> Result<Self> {
        match value {
            "left" | "start" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" | "end" => Ok(Self::Right),
            _ => Err(Error::Unsupported(format!("text-align {value}"))),
        }
    }

    fn from_text_anchor(value: &str) -> Result<Self> {
        match value {
            "start" => Ok(Self::Left),
            "middle" => Ok(Self::Center),
            "end" => Ok(Self::Right),
            _ => Err(Error::Unsupported(format!("text-anchor {value}"))),
        }
    }

    /// Resolve the alignment of a text element; the `text-anchor` of its
    /// first child overrides the element's own `text-align`.
    pub fn resolve(el: &Element, first_child: Option<&Element>, strict: bool) -> Result<Self> {
        let inner = match first_child.and_then(|c| style_value(c, "text-anchor")) {
            Some(v) => tolerate(Self::from_text_anchor(v).map(Some), strict, || None)?,
            None => None,
        };
        let outer = match style_value(el, "text-align") {
            Some(v) => tolerate(Self::from_text_align(v).map(Some), strict, || None)?,
            None => None,
        };
        Ok(inner.or(outer).unwrap_or_default())
    }

    /// Modelica value, if different from the implicit centered default
    pub fn modelica(&self) -> Option<&'static str> {
        match self {
            Self::Left => Some("TextAlignment.Left"),
            Self::Center => None,
            Self::Right => Some("TextAlignment.Right"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Italic,
    Bold,
    UnderLine,
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextStyle::Italic => write!(f, "TextStyle.Italic"),
            TextStyle::Bold => write!(f, "TextStyle.Bold"),
            TextStyle::UnderLine => write!(f, "TextStyle.UnderLine"),
        }
    }
}

/// Font properties declared on a single element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontStyle<'a> {
    pub family: Option<&'a str>,
    pub size: Option<&'a str>,
    pub styles: Vec<TextStyle>,
}

impl<'a> FontStyle<'a> {
    pub fn of(el: &Element<'a>) -> Self {
        let mut styles = Vec::new();
        if style_value(el, "font-style") == Some("italic") {
            styles.push(TextStyle::Italic);
        }
        if style_value(el, "font-weight") == Some("bold") {
            styles.push(TextStyle::Bold);
        }
        if style_value(el, "text-decoration") == Some("underline") {
            styles.push(TextStyle::UnderLine);
        }
        Self {
            family: style_value(el, "font-family"),
            size: style_value(el, "font-size"),
            styles,
        }
    }

    /// Properties of `self`, falling back to `outer` for any not set
    pub fn or(self, outer: FontStyle<'a>) -> Self {
        Self {
            family: self.family.or(outer.family),
            size: self.size.or(outer.size),
            styles: if self.styles.is_empty() {
                outer.styles
            } else {
                self.styles
            },
        }
    }
}

use std::str::FromStr;

use log::warn;

use crate::document::Element;
use crate::errors::{Error, Result};
use crate::geometry::{Decomposed, Matrix};
use crate::types::{fstr, strp};

#[derive(Clone, Debug, PartialEq)]
enum TransformType {
    Translate(f64, f64),
    Scale(f64, f64),
    Rotate(f64, Option<(f64, f64)>),
    SkewX(f64),
    SkewY(f64),
    Matrix(f64, f64, f64, f64, f64, f64),
}

impl FromStr for TransformType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let mut parts = value.splitn(2, '(');
        let name = parts
            .next()
            .ok_or_else(|| Error::Parse("no transform name".to_owned()))?
            .trim();
        let args = parts
            .next()
            .ok_or_else(|| Error::Parse("no transform args".to_owned()))?
            .trim_end()
            .strip_suffix(')')
            .ok_or_else(|| Error::Parse("no closing bracket".to_owned()))?
            .split(&[',', ' ', '\t', '\n', '\r'])
            .filter(|&v| !v.is_empty())
            .map(strp)
            .collect::<Result<Vec<_>>>()?;
        // See https://www.w3.org/TR/SVG11/coords.html#TransformAttribute
        Ok(match (name.to_lowercase().as_str(), args.as_slice()) {
            // "If <ty> is not provided, it is assumed to be zero."
            ("translate", &[tx]) => TransformType::Translate(tx, 0.),
            ("translate", &[tx, ty]) => TransformType::Translate(tx, ty),
            // "If <sy> is not provided, it is assumed to be equal to <sx>."
            ("scale", &[s]) => TransformType::Scale(s, s),
            ("scale", &[sx, sy]) => TransformType::Scale(sx, sy),
            ("rotate", &[angle]) => TransformType::Rotate(angle, None),
            ("rotate", &[angle, cx, cy]) => TransformType::Rotate(angle, Some((cx, cy))),
            ("skewx", &[angle]) => TransformType::SkewX(angle),
            ("skewy", &[angle]) => TransformType::SkewY(angle),
            ("matrix", &[a, b, c, d, e, f]) => TransformType::Matrix(a, b, c, d, e, f),
            ("translate" | "scale" | "rotate" | "skewx" | "skewy" | "matrix", _) => {
                return Err(Error::Parse(format!(
                    "invalid number of arguments for {name}: '{value}'"
                )))
            }
            _ => return Err(Error::Parse(format!("unknown transform type: '{name}'"))),
        })
    }
}

impl std::fmt::Display for TransformType {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            TransformType::Translate(tx, ty) => write!(w, "translate({}, {})", fstr(tx), fstr(ty)),
            TransformType::Scale(sx, sy) => write!(w, "scale({}, {})", fstr(sx), fstr(sy)),
            TransformType::Rotate(angle, None) => write!(w, "rotate({})", fstr(angle)),
            TransformType::Rotate(angle, Some((cx, cy))) => {
                write!(w, "rotate({}, {}, {})", fstr(angle), fstr(cx), fstr(cy))
            }
            TransformType::SkewX(angle) => write!(w, "skewX({})", fstr(angle)),
            TransformType::SkewY(angle) => write!(w, "skewY({})", fstr(angle)),
            TransformType::Matrix(a, b, c, d, e, f) => {
                write!(
                    w,
                    "matrix({}, {}, {}, {}, {}, {})",
                    fstr(a),
                    fstr(b),
                    fstr(c),
                    fstr(d),
                    fstr(e),
                    fstr(f)
                )
            }
        }
    }
}

impl TransformType {
    /// Matrix for this transform in SVG (y-down) coordinates.
    ///
    /// Only transforms which can be expressed as origin, rotation and
    /// per-axis scale in Modelica are supported.
    fn matrix(&self) -> Result<Matrix> {
        match *self {
            TransformType::Translate(tx, ty) => Ok(Matrix::translate(tx, ty)),
            TransformType::Rotate(angle, None) => Ok(Matrix::rotate(angle)),
            TransformType::Rotate(angle, Some((cx, cy))) => Ok(Matrix::translate(cx, cy)
                * Matrix::rotate(angle)
                * Matrix::translate(-cx, -cy)),
            TransformType::Matrix(a, b, c, d, e, f) => Ok(Matrix::new(a, b, c, d, e, f)),
            TransformType::Scale(sx, sy) if sx == sy => Ok(Matrix::scale(sx, sy)),
            TransformType::Scale(..) | TransformType::SkewX(_) | TransformType::SkewY(_) => Err(
                Error::Unsupported(format!("cannot handle transform '{self}'")),
            ),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct TransformAttr {
    transforms: Vec<TransformType>,
}

impl FromStr for TransformAttr {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let parts = value.split_inclusive(')').map(|v| v.trim());
        Ok(Self {
            transforms: parts
                .filter(|v| !v.is_empty())
                .map(|v| v.trim_start_matches([',', ' ', '\t', '\n', '\r']))
                .map(|v| v.parse())
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

impl std::fmt::Display for TransformAttr {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, transform) in self.transforms.iter().enumerate() {
            if idx != 0 {
                write!(w, " ")?;
            }
            write!(w, "{transform}")?;
        }
        Ok(())
    }
}

impl TransformAttr {
    /// Combined matrix of all transforms in this attribute, in Modelica
    /// (y-up) coordinates.
    ///
    /// Transforms are listed outermost first, so the rightmost transform
    /// is the first applied to points.
    pub fn matrix(&self) -> Result<Matrix> {
        let mut result = Matrix::identity();
        for transform in &self.transforms {
            result = result * transform.matrix()?;
        }
        Ok(result.flip_y())
    }
}

/// Matrix for a single element's own `transform` attribute.
///
/// Unsupported or unparseable transforms are an error in strict mode, and
/// otherwise ignored.
fn own_matrix(el: &Element, strict: bool) -> Result<Matrix> {
    let Some(value) = el.get_attr("transform") else {
        return Ok(Matrix::identity());
    };
    let result = value.parse::<TransformAttr>().and_then(|t| t.matrix());
    match result {
        Ok(m) => Ok(m),
        Err(e) if strict => Err(Error::Unsupported(format!(
            "cannot handle transform='{value}': {e}"
        ))),
        Err(e) => {
            warn!("ignoring transform='{value}' on <{}>: {e}", el.tag());
            Ok(Matrix::identity())
        }
    }
}

/// Combined matrix of an element and all its ancestors.
pub fn element_matrix(el: &Element, strict: bool) -> Result<Matrix> {
    let own = own_matrix(el, strict)?;
    match el.parent() {
        Some(parent) => Ok(element_matrix(&parent, strict)? * own),
        None => Ok(own),
    }
}

/// Resolve the full transform chain of an element to origin, rotation and scale.
pub fn resolve_chain(el: &Element, strict: bool) -> Result<Decomposed> {
    element_matrix(el, strict)?.decompose(strict)
}

use log::debug;

use crate::document::Element;
use crate::errors::{Error, Result};
use crate::serialize::ModelicaElement;
use crate::types::{attr_split, extent_str, strp_lead};

/// Coordinate system of the generated icon, derived from the root `<svg>`.
///
/// With normalization enabled, all coordinates are centered on the origin
/// and scaled so the larger dimension spans 200 units, matching the default
/// Modelica icon extent of `{{-100,-100},{100,100}}`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordSystem {
    /// `(x1, y1, x2, y2)` in document units, y-axis pointing up
    pub extent: (f64, f64, f64, f64),
    pub scale: f64,
    pub center: (f64, f64),
    pub normalize: bool,
    /// Ratio of declared size to viewBox size
    pub px2mm: (f64, f64),
}

fn root_number(name: &str, value: &str) -> Result<f64> {
    strp_lead(value).map_err(|_| Error::Malformed(format!("root {name} '{value}'")))
}

fn length_attr(el: &Element, name: &str) -> Result<Option<f64>> {
    el.get_attr(name).map(|v| root_number(name, v)).transpose()
}

impl CoordSystem {
    pub fn from_root(root: &Element, normalize: bool) -> Result<Self> {
        let width = length_attr(root, "width")?;
        let height = length_attr(root, "height")?;
        let (extent, px2mm) = if let Some(view_box) = root.get_attr("viewBox") {
            let parts = attr_split(view_box)
                .map(|v| root_number("viewBox", &v))
                .collect::<Result<Vec<_>>>()?;
            let &[vx, vy, vw, vh] = parts.as_slice() else {
                return Err(Error::Malformed(format!(
                    "viewBox '{view_box}' must have four values"
                )));
            };
            if vw <= 0. || vh <= 0. {
                return Err(Error::Malformed(format!(
                    "viewBox '{view_box}' has zero size"
                )));
            }
            let w = width.unwrap_or(vw);
            let h = height.unwrap_or(vh);
            ((vx, vy - vh, vx + vw, vy), (w / vw, h / vh))
        } else {
            let w = width.ok_or_else(|| {
                Error::MissingAttribute(root.tag().to_string(), "width".to_string())
            })?;
            let h = height.ok_or_else(|| {
                Error::MissingAttribute(root.tag().to_string(), "height".to_string())
            })?;
            ((0., -h, w, 0.), (1., 1.))
        };
        Self::new(extent, normalize, px2mm)
    }

    fn new(extent: (f64, f64, f64, f64), normalize: bool, px2mm: (f64, f64)) -> Result<Self> {
        let (x1, y1, x2, y2) = extent;
        let w = x2 - x1;
        let h = y2 - y1;
        if w <= 0. || h <= 0. {
            return Err(Error::Malformed(format!(
                "document extent {} has zero size",
                extent_str(x1, y1, x2, y2)
            )));
        }
        let coords = Self {
            extent,
            scale: (200. / w).min(200. / h),
            center: ((x1 + x2) / 2., (y1 + y2) / 2.),
            normalize,
            px2mm,
        };
        debug!(
            "coordinate system: extent {}, scale {}, px2mm {:?}",
            extent_str(x1, y1, x2, y2),
            coords.scale,
            coords.px2mm
        );
        Ok(coords)
    }

    pub fn normalize_x(&self, x: f64) -> f64 {
        if self.normalize {
            (x - self.center.0) * self.scale
        } else {
            x
        }
    }

    pub fn normalize_y(&self, y: f64) -> f64 {
        if self.normalize {
            (y - self.center.1) * self.scale
        } else {
            y
        }
    }

    pub fn normalize_delta(&self, delta: f64) -> f64 {
        if self.normalize {
            delta * self.scale
        } else {
            delta
        }
    }

    /// The extent as emitted in the `coordinateSystem` annotation
    pub fn output_extent(&self) -> (f64, f64, f64, f64) {
        let (x1, y1, x2, y2) = self.extent;
        if self.normalize {
            let w = (x2 - x1) / 2. * self.scale;
            let h = (y2 - y1) / 2. * self.scale;
            (-w, -h, w, h)
        } else {
            self.extent
        }
    }

    pub fn to_element(&self) -> ModelicaElement {
        let (x1, y1, x2, y2) = self.output_extent();
        let mut el = ModelicaElement::new("coordinateSystem");
        el.set_attr("extent", extent_str(x1, y1, x2, y2));
        el.set_attr("preserveAspectRatio", "false");
        el
    }
}

use log::{debug, warn};

use super::ellipse::ellipse;
use super::path::path;
use super::rect::rectangle;
use super::text::text;
use super::Context;
use crate::document::{Document, Element};
use crate::errors::{tolerate, Error, Result};
use crate::geometry::CoordSystem;
use crate::serialize::ModelicaElement;
use crate::ConvertConfig;

/// Elements whose content is never drawn
const SKIPPED_TAGS: [&str; 5] = ["defs", "metadata", "namedview", "title", "desc"];

/// Convert a single element, or `None` if it has no Modelica counterpart.
fn graphic_item(el: &Element, ctx: &Context) -> Result<Option<ModelicaElement>> {
    let item = match el.tag() {
        "rect" => rectangle(el, ctx)?,
        "circle" | "ellipse" => ellipse(el, ctx)?,
        "path" => path(el, ctx)?,
        "text" => text(el, ctx)?,
        tag => {
            return tolerate(
                Err(Error::Unsupported(format!("tag <{tag}> is not supported"))),
                ctx.strict,
                || None,
            )
        }
    };
    debug!("<{}> on line {} -> {}", el.tag(), el.line(), item.name());
    Ok(Some(item))
}

/// Collect graphic items below `el` in document order; groups are
/// flattened into their parent.
fn collect_items(el: &Element, ctx: &Context, items: &mut Vec<ModelicaElement>) -> Result<()> {
    for child in el.children() {
        let tag = child.tag();
        if tag == "g" {
            collect_items(&child, ctx, items)?;
        } else if SKIPPED_TAGS.contains(&tag) {
            debug!("skipping <{tag}> on line {}", child.line());
        } else if let Some(item) =
            graphic_item(&child, ctx).map_err(|e| e.at_element(tag, child.line()))?
        {
            items.push(item);
        }
    }
    Ok(())
}

/// Build the `Icon` annotation for a whole document.
pub fn build_icon(doc: &Document, config: &ConvertConfig) -> Result<ModelicaElement> {
    let root = doc.root();
    if root.tag() != "svg" {
        warn!("root element is <{}> rather than <svg>", root.tag());
    }
    let coords = CoordSystem::from_root(&root, config.normalize_extent)
        .map_err(|e| e.at_element(root.tag(), root.line()))?;
    let ctx = Context {
        coords,
        strict: config.strict,
        text_extent: config.text_extent,
    };
    let mut items = Vec::new();
    collect_items(&root, &ctx, &mut items)?;

    let mut icon = ModelicaElement::new("Icon");
    icon.add_child(coords.to_element());
    icon.set_graphics("graphics", items);
    Ok(icon)
}

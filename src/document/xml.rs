use std::io::{BufRead, Cursor};
use std::str::FromStr;

use super::{Content, Document, Node, NodeId};
use crate::errors::{Error, Result};

use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event as XmlEvent};
use quick_xml::Reader;

/// Build a `Node` from a `BytesStart` value. Failures here are are low-level
/// XML type errors (e.g. bad attribute names, non-UTF8) rather than anything
/// semantic about SVG.
fn node_from_start(e: &BytesStart, parent: Option<NodeId>, line: usize) -> Result<Node> {
    let name = String::from_utf8(e.name().into_inner().to_vec())?;
    let attrs: Result<Vec<(String, String)>> = e
        .attributes()
        .map(move |a| {
            let aa = a.map_err(Error::from_err)?;
            let key = String::from_utf8(aa.key.into_inner().to_vec())?;
            let value = aa.unescape_value().map_err(Error::from_err)?.into_owned();
            Ok((key, value))
        })
        .collect();
    Ok(Node {
        name,
        attrs: attrs?,
        content: Vec::new(),
        parent,
        line,
    })
}

/// Resolve a general reference such as `amp` or `#x41` to its text.
fn resolve_reference(name: &str) -> Result<String> {
    if let Some(text) = resolve_predefined_entity(name) {
        return Ok(text.to_string());
    }
    let code = if let Some(hex) = name.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(dec) = name.strip_prefix('#') {
        dec.parse().ok()
    } else {
        None
    };
    code.and_then(char::from_u32)
        .map(|c| c.to_string())
        .ok_or_else(|| Error::Document(format!("unknown entity reference '&{name};'")))
}

impl Document {
    pub fn from_reader(reader: &mut dyn BufRead) -> Result<Self> {
        let mut reader = Reader::from_reader(reader);

        let mut nodes: Vec<Node> = Vec::new();
        let mut buf = Vec::new();

        // Stack of currently open elements
        let mut open: Vec<NodeId> = Vec::new();

        let mut src_line = 1;
        loop {
            let ev = reader.read_event_into(&mut buf);
            let event_lines = if let Ok(ok_ev) = &ev {
                ok_ev.iter().filter(|&c| *c == b'\n').count()
            } else {
                0
            };
            let ev =
                ev.map_err(|e| Error::Document(format!("XML error near line {src_line}: {e:?}")))?;

            let text = match ev {
                XmlEvent::Eof => break,
                XmlEvent::Start(ref e) | XmlEvent::Empty(ref e) => {
                    let parent = open.last().copied();
                    if parent.is_none() && !nodes.is_empty() {
                        return Err(Error::Document(format!(
                            "multiple root elements (line {src_line})"
                        )));
                    }
                    let id = nodes.len();
                    nodes.push(node_from_start(e, parent, src_line)?);
                    if let Some(parent) = parent {
                        nodes[parent].content.push(Content::Element(id));
                    }
                    if matches!(ev, XmlEvent::Start(_)) {
                        open.push(id);
                    }
                    None
                }
                XmlEvent::End(_) => {
                    open.pop();
                    None
                }
                XmlEvent::Text(ref t) => Some(String::from_utf8(t.to_vec())?),
                XmlEvent::CData(ref c) => Some(String::from_utf8(c.to_vec())?),
                XmlEvent::GeneralRef(ref r) => {
                    let name = String::from_utf8(r.to_vec())?;
                    Some(resolve_reference(&name)?)
                }
                // comments, processing instructions, declarations
                _ => None,
            };

            if let (Some(text), Some(&parent)) = (text, open.last()) {
                // merge adjacent text runs (e.g. split by entity references)
                match nodes[parent].content.last_mut() {
                    Some(Content::Text(prev)) => prev.push_str(&text),
                    _ => nodes[parent].content.push(Content::Text(text)),
                }
            }

            src_line += event_lines;
            buf.clear();
        }

        if !open.is_empty() {
            return Err(Error::Document("unexpected end of document".to_string()));
        }
        if nodes.is_empty() {
            return Err(Error::Document("no root element".to_string()));
        }
        Ok(Self { nodes })
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(&mut Cursor::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal() {
        let doc: Document = "<svg></svg>".parse().unwrap();
        assert_eq!(doc.nodes.len(), 1);
        assert_eq!(doc.root().tag(), "svg");
        assert_eq!(doc.root().line(), 1);
    }

    #[test]
    fn test_prolog_and_comments() {
        let input = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- Created with Inkscape -->
<svg>
  <!-- <rect/> -->
  <rect/>
</svg>"#;
        let doc: Document = input.parse().unwrap();
        assert_eq!(doc.root().line(), 3);
        let rects: Vec<_> = doc.root().children().collect();
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].line(), 5);
    }

    #[test]
    fn test_entities() {
        let doc: Document = r#"<svg><text a="x&amp;y">&lt;&#65;&#x42;&gt;</text></svg>"#
            .parse()
            .unwrap();
        let text = doc.root().first_child().unwrap();
        assert_eq!(text.get_attr("a"), Some("x&y"));
        assert_eq!(text.text_content(), "<AB>");
    }

    #[test]
    fn test_errors() {
        assert!("".parse::<Document>().is_err());
        assert!("<svg><rect></svg>".parse::<Document>().is_err());
        assert!("<svg>".parse::<Document>().is_err());
        assert!("<svg/><svg/>".parse::<Document>().is_err());
        assert!(r#"<svg><rect x=y/></svg>"#.parse::<Document>().is_err());
    }
}

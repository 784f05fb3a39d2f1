//! A read-only element tree for parsed SVG documents.
//!
//! Nodes are stored in an arena owned by the `Document`; an `Element` is a
//! cheap handle giving access to the node's tag, attributes, children, parent
//! and text content.
mod xml;

pub type NodeId = usize;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Content {
    Element(NodeId),
    Text(String),
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    /// Qualified name as given in the source, e.g. `svg:rect`
    name: String,
    attrs: Vec<(String, String)>,
    content: Vec<Content>,
    parent: Option<NodeId>,
    line: usize,
}

#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn root(&self) -> Element<'_> {
        Element { doc: self, id: 0 }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl<'a> Element<'a> {
    fn node(&self) -> &'a Node {
        self.doc.node(self.id)
    }

    fn with_id(&self, id: NodeId) -> Element<'a> {
        Element { doc: self.doc, id }
    }

    /// Tag name with any namespace prefix removed
    pub fn tag(&self) -> &'a str {
        let name = self.node().name.as_str();
        name.rsplit_once(':').map_or(name, |(_, local)| local)
    }

    /// Source line on which the element starts
    pub fn line(&self) -> usize {
        self.node().line
    }

    pub fn get_attr(&self, key: &str) -> Option<&'a str> {
        self.node()
            .attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Inline `style` attribute, if any
    pub fn style(&self) -> Option<&'a str> {
        self.get_attr("style")
    }

    /// Look up a namespaced attribute, e.g. `sodipodi:type`.
    ///
    /// `prefix` is resolved to a namespace URI using the declarations in scope
    /// for this element, and matched against the namespace of each attribute,
    /// so documents using another prefix for the same namespace still match.
    pub fn get_ns_attr(&self, prefix: &str, local: &str) -> Option<&'a str> {
        let uri = self.namespace_uri(prefix)?;
        self.node()
            .attrs
            .iter()
            .filter_map(|(k, v)| k.split_once(':').map(|(p, l)| (p, l, v)))
            .filter(|(p, _, _)| *p != "xmlns")
            .find(|(p, l, _)| *l == local && self.namespace_uri(p) == Some(uri))
            .map(|(_, _, v)| v.as_str())
    }

    fn namespace_uri(&self, prefix: &str) -> Option<&'a str> {
        let decl = format!("xmlns:{prefix}");
        let mut current = Some(*self);
        while let Some(el) = current {
            if let Some(uri) = el.get_attr(&decl) {
                return Some(uri);
            }
            current = el.parent();
        }
        None
    }

    pub fn parent(&self) -> Option<Element<'a>> {
        self.node().parent.map(|id| self.with_id(id))
    }

    /// Child elements in document order
    pub fn children(&self) -> impl Iterator<Item = Element<'a>> + 'a {
        let doc = self.doc;
        self.node().content.iter().filter_map(move |c| match c {
            Content::Element(id) => Some(Element { doc, id: *id }),
            Content::Text(_) => None,
        })
    }

    pub fn first_child(&self) -> Option<Element<'a>> {
        self.children().next()
    }

    /// Concatenated text of this element and all its descendants
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, text: &mut String) {
        for c in &self.node().content {
            match c {
                Content::Text(t) => text.push_str(t),
                Content::Element(id) => self.with_id(*id).collect_text(text),
            }
        }
    }
}

//! Modelica annotation syntax tree and its textual rendering.
use std::collections::BTreeMap;

/// Indentation unit, repeated once per nesting level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Indent(pub String);

impl Default for Indent {
    fn default() -> Self {
        Self("    ".to_string())
    }
}

impl Indent {
    pub fn spaces(n: usize) -> Self {
        Self(" ".repeat(n))
    }

    pub fn at(&self, depth: usize) -> String {
        self.0.repeat(depth)
    }

    fn newline(&self, depth: usize) -> String {
        format!("\n{}", self.at(depth))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// Preformatted Modelica expression
    Text(String),
    /// Array of graphic items, e.g. `graphics= {...}`
    Graphics(Vec<ModelicaElement>),
}

/// A Modelica record constructor such as `Rectangle(extent= ...)`.
///
/// Attributes are kept sorted by key so output is deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelicaElement {
    name: String,
    attrs: BTreeMap<String, AttrValue>,
    children: Vec<ModelicaElement>,
}

impl ModelicaElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_attr(&mut self, key: &str, value: impl Into<String>) {
        self.attrs
            .insert(key.to_string(), AttrValue::Text(value.into()));
    }

    pub fn set_graphics(&mut self, key: &str, items: Vec<ModelicaElement>) {
        self.attrs
            .insert(key.to_string(), AttrValue::Graphics(items));
    }

    #[cfg(test)]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        match self.attrs.get(key) {
            Some(AttrValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn has_attr(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    #[cfg(test)]
    pub fn remove_attr(&mut self, key: &str) -> Option<AttrValue> {
        self.attrs.remove(key)
    }

    pub fn add_child(&mut self, child: ModelicaElement) {
        self.children.push(child);
    }

    /// Render at the given nesting depth; contents are placed one level deeper
    /// than `depth - 1`, on which the closing bracket sits.
    pub fn render(&self, indent: &Indent, depth: usize) -> String {
        let delim = indent.newline(depth);
        let mut inner = delim.clone();
        if !self.children.is_empty() {
            let children: Vec<String> = self
                .children
                .iter()
                .map(|c| c.render(indent, depth + 1))
                .collect();
            inner.push_str(&children.join(&format!(",{delim}")));
            if !self.attrs.is_empty() {
                inner.push(',');
            }
            inner.push_str(&delim);
        }
        let attrs: Vec<String> = self
            .attrs
            .iter()
            .map(|(k, v)| match v {
                AttrValue::Text(text) => format!("{k}= {text}"),
                AttrValue::Graphics(items) => {
                    format!("{k}= {}", render_graphics(items, indent, depth + 1))
                }
            })
            .collect();
        inner.push_str(&attrs.join(&format!(",{delim}")));
        inner.push_str(&indent.newline(depth.saturating_sub(1)));
        format!("{}({inner})", self.name)
    }
}

fn render_graphics(items: &[ModelicaElement], indent: &Indent, depth: usize) -> String {
    let delim = indent.newline(depth);
    let rendered: Vec<String> = items.iter().map(|i| i.render(indent, depth + 1)).collect();
    format!(
        "{{{delim}{}{}}}",
        rendered.join(&format!(",{delim}")),
        indent.newline(depth.saturating_sub(1))
    )
}

/// Wrap a rendered `Icon(...)` annotation into a model definition.
pub fn model_text(model_name: &str, icon: &str, indent: &Indent) -> String {
    let i = indent.at(1);
    format!("model {model_name}\n{i}annotation(\n{i}{i}{icon}\n{i});\nend {model_name};")
}

/// Quote a string as a Modelica string literal.
pub fn modelica_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            other => result.push(other),
        }
    }
    result.push('"');
    result
}

//! Owned SVG element tree and its XML serializer.

use std::fmt::{self, Write};

use crate::serializer::Serializer;

/// Namespace added to the root element when it does not declare one.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Element(Element),
    Text(String),
}

/// An SVG element: tag name, attributes in insertion order, and children.
///
/// # Example
///
/// ```
/// use svg64::{Element, Serializer, XmlSerializer};
///
/// let svg = Element::new("svg")
///     .attr("width", "10")
///     .child(Element::new("rect").attr("fill", "red"));
/// assert_eq!(
///     XmlSerializer.serialize(&svg).unwrap(),
///     r#"<svg width="10" xmlns="http://www.w3.org/2000/svg"><rect fill="red"/></svg>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Content>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing the value in place if the name exists.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Appends a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Content::Element(child));
        self
    }

    /// Appends a text node.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Content::Text(text.into()));
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Writes this element and its subtree as markup, without namespace fix-up.
    pub fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.write_open(out)?;
        self.write_rest(out)
    }

    fn write_open<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "<{}", self.name)?;
        for (name, value) in &self.attributes {
            write!(out, " {}=\"", name)?;
            escape_into(out, value, true)?;
            out.write_char('"')?;
        }
        Ok(())
    }

    fn write_rest<W: Write>(&self, out: &mut W) -> fmt::Result {
        if self.children.is_empty() {
            return out.write_str("/>");
        }
        out.write_char('>')?;
        for child in &self.children {
            match child {
                Content::Element(element) => element.write_to(out)?,
                Content::Text(text) => escape_into(out, text, false)?,
            }
        }
        write!(out, "</{}>", self.name)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

fn escape_into<W: Write>(out: &mut W, s: &str, attribute: bool) -> fmt::Result {
    for c in s.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' if attribute => out.write_str("&quot;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

/// Serializes [`Element`] trees the way a browser `XMLSerializer` does for
/// SVG nodes: the root gets the SVG namespace unless it declares its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlSerializer;

impl Serializer for XmlSerializer {
    type Node = Element;
    type Error = fmt::Error;

    fn serialize(&self, node: &Element) -> Result<String, fmt::Error> {
        let mut out = String::new();
        node.write_open(&mut out)?;
        if node.attribute("xmlns").is_none() {
            write!(out, " xmlns=\"{}\"", SVG_NAMESPACE)?;
        }
        node.write_rest(&mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_root_gets_namespace() {
        let svg = Element::new("svg");
        assert_eq!(
            XmlSerializer.serialize(&svg).unwrap(),
            r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#
        );
    }

    #[test]
    fn test_existing_namespace_kept() {
        let svg = Element::new("svg").attr("xmlns", "urn:custom");
        assert_eq!(
            XmlSerializer.serialize(&svg).unwrap(),
            r#"<svg xmlns="urn:custom"/>"#
        );
    }

    #[test]
    fn test_descendants_not_namespaced() {
        let svg = Element::new("svg").child(Element::new("g").child(Element::new("circle")));
        assert_eq!(
            XmlSerializer.serialize(&svg).unwrap(),
            r#"<svg xmlns="http://www.w3.org/2000/svg"><g><circle/></g></svg>"#
        );
    }

    #[test]
    fn test_escaping() {
        let text = Element::new("text")
            .attr("data-label", "a \"b\" & <c>")
            .text("1 < 2 & \"3\"");
        assert_eq!(
            text.to_string(),
            r#"<text data-label="a &quot;b&quot; &amp; &lt;c&gt;">1 &lt; 2 &amp; "3"</text>"#
        );
    }

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let rect = Element::new("rect")
            .attr("x", "1")
            .attr("y", "2")
            .attr("x", "3");
        assert_eq!(rect.to_string(), r#"<rect x="3" y="2"/>"#);
        assert_eq!(rect.attribute("y"), Some("2"));
        assert_eq!(rect.attribute("z"), None);
    }

    #[test]
    fn test_mixed_content_order() {
        let text = Element::new("text")
            .text("a")
            .child(Element::new("tspan").text("b"))
            .text("c");
        assert_eq!(text.to_string(), "<text>a<tspan>b</tspan>c</text>");
    }
}

//! The untyped document tree.

use indexmap::IndexMap;

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with a tag, attributes, and children.
    Element(Element),
    /// A text node. Escaped on serialization.
    Text(String),
    /// Raw markup. Serialized verbatim, no escaping.
    Raw(String),
}

impl Node {
    /// Borrow this node as an element, if it is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Mutably borrow this node as an element, if it is one.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element: tag name, ordered attributes, ordered children, plus an
/// out-of-band `data` map for metadata that has no markup representation
/// (for example the info string of the code fence an element came from).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Tag name, lowercase (`"pre"`, `"code"`, ...).
    pub tag: String,
    /// Attributes in document order.
    pub attrs: IndexMap<String, String>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
    /// Out-of-band metadata. Not serialized.
    pub data: IndexMap<String, String>,
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// The `class` attribute as an iterator of whitespace-separated tokens.
    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    /// Concatenated text content of this element's subtree, in document
    /// order. `Text` and `Raw` descendants both contribute verbatim.
    pub fn text_content(&self) -> String {
        fn collect(nodes: &[Node], out: &mut String) {
            for node in nodes {
                match node {
                    Node::Element(element) => collect(&element.children, out),
                    Node::Text(value) | Node::Raw(value) => out.push_str(value),
                }
            }
        }

        let mut out = String::new();
        collect(&self.children, &mut out);
        out
    }

    /// Serialize this element (and its subtree) to an HTML string.
    pub fn to_html(&self) -> String {
        crate::serialize::serialize_element(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{el, raw, text};

    #[test]
    fn class_list_splits_on_whitespace() {
        let element = el("code", &[("class", "shiki  language-js")], vec![]);
        let classes: Vec<_> = element.class_list().collect();
        assert_eq!(classes, ["shiki", "language-js"]);
    }

    #[test]
    fn class_list_empty_without_attribute() {
        let element = el("code", &[], vec![]);
        assert_eq!(element.class_list().count(), 0);
    }

    #[test]
    fn text_content_concatenates_descendants() {
        let element = el(
            "pre",
            &[],
            vec![
                el("code", &[], vec![text("const x"), raw(" = 1;")]).into(),
                text("\n"),
            ],
        );
        assert_eq!(element.text_content(), "const x = 1;\n");
    }
}

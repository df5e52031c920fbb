//! Terse tree construction, mainly for tests and docs.

use crate::tree::{Element, Node};

/// Build an element from a tag, attribute pairs, and children.
///
/// ```rust
/// use scion_dom::{el, text};
///
/// let pre = el("pre", &[("class", "shiki")], vec![
///     el("code", &[], vec![text("fn main() {}")]).into(),
/// ]);
/// assert_eq!(pre.to_html(), "<pre class=\"shiki\"><code>fn main() {}</code></pre>");
/// ```
pub fn el(tag: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Element {
    let mut element = Element::new(tag);
    for (name, value) in attrs {
        element.set_attr(*name, *value);
    }
    element.children = children;
    element
}

/// Build a text node.
pub fn text(value: &str) -> Node {
    Node::Text(value.to_string())
}

/// Build a raw markup node.
pub fn raw(value: &str) -> Node {
    Node::Raw(value.to_string())
}

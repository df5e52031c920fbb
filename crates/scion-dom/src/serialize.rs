//! HTML5 serialization.

use crate::tree::{Element, Node};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
    "source", "track", "wbr",
];

/// Escape text for safe inclusion in HTML content or attribute values.
pub fn html_escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Serialize a single element with its subtree.
pub fn serialize_element(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

/// Serialize a sequence of sibling nodes.
pub fn serialize_fragment(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(element) => write_element(element, out),
        Node::Text(value) => out.push_str(&html_escape(value)),
        Node::Raw(value) => out.push_str(value),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape(value));
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return;
    }

    for child in &element.children {
        write_node(child, out);
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{el, raw, text};

    #[test]
    fn escapes_text_and_attributes() {
        let element = el(
            "code",
            &[("title", "a \"b\" <c>")],
            vec![text("if a < b && b > c {}")],
        );
        assert_eq!(
            serialize_element(&element),
            "<code title=\"a &quot;b&quot; &lt;c&gt;\">if a &lt; b &amp;&amp; b &gt; c {}</code>",
        );
    }

    #[test]
    fn raw_nodes_pass_through_verbatim() {
        let element = el("pre", &[], vec![raw("<span class=\"line\"></span>")]);
        assert_eq!(
            serialize_element(&element),
            "<pre><span class=\"line\"></span></pre>",
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let element = el("br", &[], vec![]);
        assert_eq!(serialize_element(&element), "<br>");
    }

    #[test]
    fn data_map_is_not_serialized() {
        let mut element = el("code", &[], vec![]);
        element.data.insert("meta".into(), "{highlight: 1}".into());
        assert_eq!(serialize_element(&element), "<code></code>");
    }
}

//! Untyped HTML document tree for tree-transform plugins.
//!
//! scion-dom provides:
//! - **Untyped DOM**: a simple [`Element`]/[`Node`] tree with ordered
//!   attributes and out-of-band metadata
//! - **Traversal**: pre-order visitation that stays well-defined while the
//!   visitor replaces children of the visited element
//! - **Serialization**: HTML5 serialization with proper escaping
//! - **Builders**: terse helpers for constructing trees in tests and docs
//!
//! # Example
//!
//! ```rust
//! use scion_dom::{el, text, Flow, visit_mut};
//!
//! let mut tree = el("div", &[], vec![
//!     el("pre", &[], vec![
//!         el("code", &[("class", "language-rust")], vec![text("fn main() {}")]).into(),
//!     ]).into(),
//! ]);
//!
//! // Count elements in pre-order.
//! let mut tags = Vec::new();
//! visit_mut::<(), _>(&mut tree, &mut |element| {
//!     tags.push(element.tag.clone());
//!     Ok(Flow::Continue)
//! }).unwrap();
//! assert_eq!(tags, ["div", "pre", "code"]);
//!
//! assert_eq!(
//!     tree.to_html(),
//!     "<div><pre><code class=\"language-rust\">fn main() {}</code></pre></div>",
//! );
//! ```

mod builder;
mod serialize;
mod tree;
mod visit;

pub use builder::{el, raw, text};
pub use serialize::{html_escape, serialize_element, serialize_fragment};
pub use tree::{Element, Node};
pub use visit::{Flow, visit_mut};

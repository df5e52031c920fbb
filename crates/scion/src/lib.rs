//! Splice syntax-highlighted code blocks into HTML document trees.
//!
//! scion walks an HTML-like tree (see [`scion_dom`]), finds `pre > code`
//! blocks, resolves each block's language and per-line highlight options
//! from its metadata, and replaces the block wholesale with the output of
//! a pluggable [`Highlighter`].
//!
//! Language resolution, first hit wins:
//! 1. a `data-language` attribute on the code element
//! 2. a `language-*` class token (`language-JS` resolves to `js`)
//! 3. none — the block is rendered as plain text
//!
//! Line-options resolution, first hit wins:
//! 1. a resolver callback configured on [`TransformOptions`]
//! 2. a `data-highlight` attribute holding a compact numeric range
//!    (`"1,3-5"` marks lines 1, 3, 4 and 5)
//! 3. a `highlight` field in the element's fence metadata
//!    (`{highlight: '1,3-5'}`, relaxed JSON)
//!
//! # Example
//!
//! ```rust
//! use scion::{HighlightError, Highlighter, LineOption, TransformOptions, transform};
//! use scion_dom::{Element, el, text};
//!
//! /// A stand-in for a real highlighter: echoes `source:language`.
//! struct Echo;
//!
//! impl Highlighter for Echo {
//!     fn loaded_languages(&self) -> Vec<String> {
//!         vec!["js".to_string()]
//!     }
//!
//!     fn render(
//!         &mut self,
//!         source: &str,
//!         language: Option<&str>,
//!         _line_options: &[LineOption],
//!     ) -> Result<Element, HighlightError> {
//!         let body = format!("{source}:{}", language.unwrap_or("none"));
//!         Ok(el("pre", &[("class", "stub")], vec![
//!             el("code", &[], vec![text(&body)]).into(),
//!         ]))
//!     }
//! }
//!
//! let mut doc = el("div", &[], vec![
//!     el("pre", &[], vec![
//!         el("code", &[("class", "language-js")], vec![text("const x = 1;")]).into(),
//!     ]).into(),
//! ]);
//!
//! let mut options = TransformOptions::new().with_highlighter(Echo);
//! transform(&mut doc, &mut options).unwrap();
//!
//! assert_eq!(
//!     doc.to_html(),
//!     "<div><pre class=\"stub\"><code>const x = 1;:js</code></pre></div>",
//! );
//! ```

mod error;
mod highlighter;
mod language;
mod lines;
mod meta;
mod options;
mod transform;

pub use error::{HighlightError, TransformError};
pub use highlighter::Highlighter;
pub use language::{LANGUAGE_ATTR, LANGUAGE_CLASS_PREFIX};
pub use lines::{HIGHLIGHT_ATTR, HIGHLIGHTED_CLASS, LineOption};
pub use meta::META_KEY;
pub use options::{LineOptionsFn, TransformOptions};
pub use transform::transform;

pub use scion_dom;

//! The injected highlighter capability.

use scion_dom::Element;

use crate::error::HighlightError;
use crate::lines::LineOption;

/// An external syntax highlighter.
///
/// The transform treats this as an opaque collaborator: it asks which
/// languages are loaded, hands over raw source text plus a resolved
/// language and per-line options, and splices whatever fragment comes
/// back. Test doubles can implement this without any real tokenizer.
pub trait Highlighter {
    /// The language identifiers this highlighter can currently render.
    fn loaded_languages(&self) -> Vec<String>;

    /// Render `source` to a replacement fragment.
    ///
    /// `language` is `None` when no language is known (or when an unknown
    /// one was suppressed); implementations should fall back to plain-text
    /// rendering in that case. `line_options` carries extra classes to
    /// attach to specific 1-based source lines.
    ///
    /// The returned element's attributes and children replace the matched
    /// `pre` element wholesale; the element's own tag is ignored.
    fn render(
        &mut self,
        source: &str,
        language: Option<&str>,
        line_options: &[LineOption],
    ) -> Result<Element, HighlightError>;
}

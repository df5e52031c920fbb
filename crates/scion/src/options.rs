//! Transform configuration.

use scion_dom::Element;

use crate::highlighter::Highlighter;
use crate::lines::LineOption;

/// A caller-supplied line-options resolver. When configured it replaces
/// the built-in attribute/metadata resolution entirely; its result is
/// used verbatim, even when empty.
pub type LineOptionsFn = dyn Fn(&Element) -> Vec<LineOption>;

/// Options for [`transform()`](crate::transform()).
///
/// ```rust,ignore
/// let mut options = TransformOptions::new()
///     .with_highlighter(my_highlighter)
///     .ignore_unknown_language(false);
/// transform(&mut tree, &mut options)?;
/// ```
pub struct TransformOptions {
    pub(crate) highlighter: Option<Box<dyn Highlighter>>,
    pub(crate) ignore_unknown_language: bool,
    pub(crate) line_options: Option<Box<LineOptionsFn>>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            highlighter: None,
            ignore_unknown_language: true,
            line_options: None,
        }
    }
}

impl TransformOptions {
    /// Create options with defaults: no highlighter yet, unknown languages
    /// ignored, built-in line-options resolution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the highlighter collaborator. Required; [`transform()`](crate::transform())
    /// fails with [`TransformError::MissingHighlighter`](crate::TransformError::MissingHighlighter)
    /// without one.
    pub fn with_highlighter<H: Highlighter + 'static>(mut self, highlighter: H) -> Self {
        self.highlighter = Some(Box::new(highlighter));
        self
    }

    /// Whether a language token the highlighter has not loaded is silently
    /// downgraded to plain text (`true`, the default) or surfaced as an
    /// error that aborts the whole transform (`false`).
    pub fn ignore_unknown_language(mut self, ignore: bool) -> Self {
        self.ignore_unknown_language = ignore;
        self
    }

    /// Override line-options resolution with a callback. The callback's
    /// result is used unconditionally for every matched block; the
    /// `data-highlight` attribute and fence metadata are no longer
    /// consulted.
    pub fn with_line_options<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&Element) -> Vec<LineOption> + 'static,
    {
        self.line_options = Some(Box::new(resolver));
        self
    }
}

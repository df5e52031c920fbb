//! Error types.

use thiserror::Error;

/// Errors a [`Highlighter`](crate::Highlighter) implementation can raise.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// The highlighter has no grammar loaded for this language.
    ///
    /// This is the detectable unknown-language signal: when
    /// [`ignore_unknown_language`](crate::TransformOptions::ignore_unknown_language)
    /// is enabled the transform recovers from it locally, otherwise it
    /// aborts the whole document.
    #[error("unknown language: {language}")]
    UnsupportedLanguage {
        /// The language token the highlighter rejected.
        language: String,
    },

    /// Any other rendering failure. Always fatal to the transform.
    #[error("highlighting failed: {message}")]
    Render {
        /// Human-readable description from the highlighter.
        message: String,
    },
}

/// Errors that cross the transform boundary.
///
/// Everything else (malformed highlight ranges, unparseable fence metadata)
/// degrades to a safe default inside the transform and is never surfaced.
#[derive(Debug, Error)]
pub enum TransformError {
    /// No highlighter collaborator was configured. Raised synchronously
    /// before any node is visited.
    #[error(
        "no highlighter configured; supply one with TransformOptions::with_highlighter"
    )]
    MissingHighlighter,

    /// A highlighter failure that was not recovered locally.
    #[error(transparent)]
    Highlight(#[from] HighlightError),
}

//! Language resolution.

use scion_dom::Element;

use crate::Highlighter;

/// Explicit language attribute. Wins over any class token.
pub const LANGUAGE_ATTR: &str = "data-language";

/// Class token prefix carrying the language (`language-rust`).
pub const LANGUAGE_CLASS_PREFIX: &str = "language-";

/// Detect the language of a code element from its own metadata:
/// the [`LANGUAGE_ATTR`] attribute first, then the first
/// `language-*` token in its class list. Tokens are normalized to
/// lowercase (`language-JS` resolves to `js`).
pub(crate) fn detect_language(code: &Element) -> Option<String> {
    if let Some(language) = code.attr(LANGUAGE_ATTR) {
        return Some(language.to_ascii_lowercase());
    }
    code.class_list()
        .find_map(|token| token.strip_prefix(LANGUAGE_CLASS_PREFIX))
        .map(str::to_ascii_lowercase)
}

/// Detect the language and apply the unknown-language policy: with
/// `ignore_unknown` set, a token the highlighter has not loaded is
/// downgraded to `None` so the block renders as plain text instead of
/// failing.
pub(crate) fn resolve_language(
    code: &Element,
    highlighter: &dyn Highlighter,
    ignore_unknown: bool,
) -> Option<String> {
    let language = detect_language(code)?;
    if ignore_unknown
        && !highlighter
            .loaded_languages()
            .iter()
            .any(|loaded| loaded == &language)
    {
        log::debug!("language {language:?} not loaded, treating as plain text");
        return None;
    }
    Some(language)
}

//! The code block transform: match, resolve, splice.

use scion_dom::{Element, Flow, Node, visit_mut};

use crate::error::{HighlightError, TransformError};
use crate::highlighter::Highlighter;
use crate::language::resolve_language;
use crate::lines::{LineOption, resolve_line_options};
use crate::options::{LineOptionsFn, TransformOptions};

/// Highlight every `pre > code` block in the tree, in document order.
///
/// For each matched block: resolve a language and per-line options from the
/// code element's metadata, render through the configured highlighter, and
/// replace the `pre` element's attributes and children wholesale with the
/// rendered fragment. All other nodes are left untouched.
///
/// Fails before visiting anything when no highlighter is configured, and
/// mid-walk when the highlighter raises an error the options do not allow
/// recovering from; nodes spliced before such a failure stay spliced.
pub fn transform(
    root: &mut Element,
    options: &mut TransformOptions,
) -> Result<(), TransformError> {
    let highlighter = options
        .highlighter
        .as_deref_mut()
        .ok_or(TransformError::MissingHighlighter)?;
    let line_resolver = options.line_options.as_deref();
    let ignore_unknown = options.ignore_unknown_language;

    visit_mut(root, &mut |element| {
        let Some(code_index) = code_block_child(element) else {
            return Ok(Flow::Continue);
        };
        if splice(element, code_index, highlighter, line_resolver, ignore_unknown)? {
            // The replacement subtree must not be re-visited.
            return Ok(Flow::SkipChildren);
        }
        Ok(Flow::Continue)
    })
}

/// Index of the first `code` element child, if `parent` is a `pre`.
pub(crate) fn code_block_child(parent: &Element) -> Option<usize> {
    if parent.tag != "pre" {
        return None;
    }
    parent
        .children
        .iter()
        .position(|node| matches!(node, Node::Element(element) if element.tag == "code"))
}

/// Render one matched block and graft the result onto the `pre` element.
/// Returns whether a splice happened.
fn splice(
    pre: &mut Element,
    code_index: usize,
    highlighter: &mut dyn Highlighter,
    line_resolver: Option<&LineOptionsFn>,
    ignore_unknown: bool,
) -> Result<bool, TransformError> {
    // Read every metadata source before the first write to the subtree.
    let Some(Node::Element(code)) = pre.children.get(code_index) else {
        return Ok(false);
    };
    let language = resolve_language(code, &*highlighter, ignore_unknown);
    let line_options: Vec<LineOption> = match line_resolver {
        Some(resolver) => resolver(code),
        None => resolve_line_options(code),
    };
    let source = code.text_content();

    let rendered = match highlighter.render(&source, language.as_deref(), &line_options) {
        Ok(fragment) => fragment,
        Err(HighlightError::UnsupportedLanguage { language }) if ignore_unknown => {
            log::debug!("leaving code block untouched: language {language:?} not loaded");
            return Ok(false);
        }
        Err(err) => return Err(err.into()),
    };

    pre.attrs = rendered.attrs;
    pre.children = rendered.children;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scion_dom::{el, text};

    #[test]
    fn matches_code_directly_under_pre() {
        let pre = el("pre", &[], vec![el("code", &[], vec![]).into()]);
        assert_eq!(code_block_child(&pre), Some(0));
    }

    #[test]
    fn skips_leading_non_element_children() {
        let pre = el(
            "pre",
            &[],
            vec![text("\n"), el("code", &[], vec![]).into()],
        );
        assert_eq!(code_block_child(&pre), Some(1));
    }

    #[test]
    fn rejects_other_parents_and_children() {
        let div = el("div", &[], vec![el("code", &[], vec![]).into()]);
        assert_eq!(code_block_child(&div), None);

        let pre = el("pre", &[], vec![el("samp", &[], vec![]).into()]);
        assert_eq!(code_block_child(&pre), None);

        let empty = el("pre", &[], vec![]);
        assert_eq!(code_block_child(&empty), None);
    }
}

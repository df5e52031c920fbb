//! Per-line highlight options and compact numeric range parsing.

use std::collections::BTreeSet;

use scion_dom::Element;
use thiserror::Error;

use crate::meta;

/// Attribute holding a compact numeric range of lines to mark.
pub const HIGHLIGHT_ATTR: &str = "data-highlight";

/// Class attached to every marked line.
pub const HIGHLIGHTED_CLASS: &str = "highlighted";

/// Extra classes to attach to one source line of the highlighter's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOption {
    /// 1-based source line number.
    pub line: u32,
    /// Classes the highlighter should add to that line's wrapper.
    pub classes: Vec<String>,
}

impl LineOption {
    /// A line marked with the standard [`HIGHLIGHTED_CLASS`].
    pub fn highlighted(line: u32) -> Self {
        Self {
            line,
            classes: vec![HIGHLIGHTED_CLASS.to_string()],
        }
    }
}

/// Why a compact numeric range failed to parse. Never crosses the
/// transform boundary; malformed ranges degrade to no annotation.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum RangeError {
    #[error("empty token")]
    EmptyToken,
    #[error("not a line number: {0:?}")]
    InvalidNumber(String),
    #[error("line numbers start at 1")]
    Zero,
    #[error("inverted range {start}-{end}")]
    Inverted { start: u32, end: u32 },
}

/// Parse a compact numeric range: comma-separated tokens, each a single
/// line number or an inclusive `a-b` pair. `"1,3-5"` covers {1, 3, 4, 5}.
///
/// Any malformed token invalidates the whole range; callers degrade the
/// error to an empty result.
pub(crate) fn parse_range(input: &str) -> Result<BTreeSet<u32>, RangeError> {
    let mut lines = BTreeSet::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            return Err(RangeError::EmptyToken);
        }
        match token.split_once('-') {
            Some((start, end)) => {
                let start = parse_line(start)?;
                let end = parse_line(end)?;
                if start > end {
                    return Err(RangeError::Inverted { start, end });
                }
                lines.extend(start..=end);
            }
            None => {
                lines.insert(parse_line(token)?);
            }
        }
    }
    Ok(lines)
}

fn parse_line(token: &str) -> Result<u32, RangeError> {
    let number: u32 = token
        .trim()
        .parse()
        .map_err(|_| RangeError::InvalidNumber(token.trim().to_string()))?;
    if number == 0 {
        return Err(RangeError::Zero);
    }
    Ok(number)
}

/// Resolve line options from the code element's own metadata: the
/// [`HIGHLIGHT_ATTR`] attribute first, then a `highlight` field in the
/// element's fence metadata. A caller-supplied resolver callback, when
/// configured, replaces this entirely (see the orchestrator).
pub(crate) fn resolve_line_options(code: &Element) -> Vec<LineOption> {
    if let Some(range) = code.attr(HIGHLIGHT_ATTR) {
        return expand(range);
    }
    if let Some(range) = meta::highlight_field(code) {
        return expand(&range);
    }
    Vec::new()
}

fn expand(range: &str) -> Vec<LineOption> {
    match parse_range(range) {
        Ok(lines) => lines.into_iter().map(LineOption::highlighted).collect(),
        Err(err) => {
            log::debug!("ignoring malformed highlight range {range:?}: {err}");
            Vec::new()
        }
    }
}

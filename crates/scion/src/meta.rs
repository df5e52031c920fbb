//! Fence metadata extraction.
//!
//! Markdown pipelines attach the code fence's info string to the code
//! element out-of-band (under the `"meta"` data key). The string is a
//! relaxed JSON object in the wild (`{highlight: '1-3'}` with unquoted
//! keys and single quotes), so it goes through json5 rather than strict
//! JSON. Only the `highlight` field is of interest here; everything else
//! in the blob is ignored.

use scion_dom::Element;
use serde_json::Value;

/// Data key the surrounding pipeline stores the fence info string under.
pub const META_KEY: &str = "meta";

/// Extract the `highlight` field from the element's fence metadata, if
/// any. A blob that does not parse, or parses to something without a
/// usable `highlight` field, counts as absent.
pub(crate) fn highlight_field(code: &Element) -> Option<String> {
    let blob = code.data.get(META_KEY)?;
    let value: Value = match json5::from_str(blob) {
        Ok(value) => value,
        Err(err) => {
            log::debug!("ignoring unparseable fence metadata {blob:?}: {err}");
            return None;
        }
    };
    match value.get("highlight") {
        Some(Value::String(range)) => Some(range.clone()),
        Some(Value::Number(line)) => Some(line.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scion_dom::el;

    fn code_with_meta(meta: &str) -> scion_dom::Element {
        let mut code = el("code", &[], vec![]);
        code.data.insert(META_KEY.into(), meta.into());
        code
    }

    #[test]
    fn relaxed_syntax_is_accepted() {
        let code = code_with_meta("{highlight: '1,3-5'}");
        assert_eq!(highlight_field(&code).as_deref(), Some("1,3-5"));
    }

    #[test]
    fn strict_json_is_accepted_too() {
        let code = code_with_meta(r#"{"highlight": "2-4", "filename": "a.rs"}"#);
        assert_eq!(highlight_field(&code).as_deref(), Some("2-4"));
    }

    #[test]
    fn numeric_highlight_field_is_stringified() {
        let code = code_with_meta("{highlight: 7}");
        assert_eq!(highlight_field(&code).as_deref(), Some("7"));
    }

    #[test]
    fn unparseable_blob_counts_as_absent() {
        let code = code_with_meta("{highlight: ");
        assert_eq!(highlight_field(&code), None);
    }

    #[test]
    fn missing_field_counts_as_absent() {
        let code = code_with_meta("{filename: 'a.rs'}");
        assert_eq!(highlight_field(&code), None);
    }

    #[test]
    fn non_object_blob_counts_as_absent() {
        let code = code_with_meta("'just a string'");
        assert_eq!(highlight_field(&code), None);
    }

    #[test]
    fn no_meta_key_counts_as_absent() {
        let code = el("code", &[], vec![]);
        assert_eq!(highlight_field(&code), None);
    }
}

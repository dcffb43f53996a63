//! Flat array strings: `{a, b, "c d"}` inside a single option value.
//!
//! This is a plain text transform with no typing of elements and no nesting.
//! It is unrelated to the child arrays of [`Value`](crate::Value), which have
//! their own multi-line text form ([`Value::build_array_string`](crate::Value::build_array_string));
//! the two forms cannot be converted into each other.

use crate::strutil;

/// Decode a flat array string into its elements.
///
/// One pair of outer braces is stripped if present. The rest is split on `,`
/// and each element is trimmed and has one layer of quotes removed. Text
/// without braces is split as-is.
///
/// ```
/// use cfgfile_core::split_array;
///
/// assert_eq!(split_array(r#"{1, "two", 'three'}"#), vec!["1", "two", "three"]);
/// assert!(split_array("{}").is_empty());
/// ```
pub fn split_array(text: &str) -> Vec<String> {
    let inner = text
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(text);

    strutil::split(inner, ",")
        .into_iter()
        .map(|element| strutil::trim_quotes(element.trim()).0.to_string())
        .collect()
}

/// Encode elements as `{e1,e2,e3}`. An empty slice encodes as `{}`.
///
/// Elements are written verbatim; nothing is quoted or escaped.
pub fn join_array<S: AsRef<str>>(elements: &[S]) -> String {
    let mut out = String::from("{");
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(element.as_ref());
    }
    out.push('}');
    out
}

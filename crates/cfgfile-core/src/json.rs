//! JSON views of a [`Store`], for tooling and debugging.
//!
//! - [`to_json`] maps each option to its most natural JSON type.
//! - [`describe`] lists every option with all of its metadata.

use serde::Serialize;
use serde_json::{Map, Number, Value as Json};

use crate::store::Store;
use crate::value::{Range, Value, ValueKind};

/// Convert a store into a JSON object of sections, each an object of options.
///
/// Section and option order is preserved. Options with child arrays become
/// JSON arrays (recursively); other options become numbers, booleans or
/// strings according to their [`ValueKind`].
///
/// ```
/// use serde_json::json;
///
/// let store = cfgfile_core::parse("[net]\nport = 8080\nhost = \"localhost\"\nssl = true");
/// assert_eq!(
///     cfgfile_core::to_json(&store),
///     json!({"net": {"port": 8080, "host": "localhost", "ssl": true}})
/// );
/// ```
pub fn to_json(store: &Store) -> Json {
    let mut root = Map::new();
    for (section_name, section) in store {
        let options: Map<String, Json> = section
            .iter()
            .map(|(name, value)| (name.clone(), value_to_json(value)))
            .collect();
        root.insert(section_name.clone(), Json::Object(options));
    }
    Json::Object(root)
}

fn value_to_json(value: &Value) -> Json {
    if value.is_array() {
        return Json::Array(value.elements().map(value_to_json).collect());
    }
    match value.kind() {
        ValueKind::Number => number_to_json(value.to_double()),
        ValueKind::Boolean => Json::Bool(value.to_bool()),
        ValueKind::Text => Json::String(value.as_str().to_string()),
    }
}

/// Integral floats become JSON integers so `5` does not turn into `5.0`.
fn number_to_json(number: f64) -> Json {
    if number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
        Json::Number(Number::from(number as i64))
    } else {
        Number::from_f64(number).map_or(Json::Null, Json::Number)
    }
}

/// Everything known about a single option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionInfo<'a> {
    pub section: &'a str,
    pub name: &'a str,
    pub text: &'a str,
    pub kind: ValueKind,
    pub quoted: bool,
    pub range: Range,
    /// Element count, or `None` when the option is not an array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<usize>,
}

/// List all options in store order.
pub fn describe(store: &Store) -> Vec<OptionInfo<'_>> {
    store
        .iter()
        .flat_map(|(section_name, section)| {
            section.iter().map(move |(name, value)| OptionInfo {
                section: section_name,
                name,
                text: value.as_str(),
                kind: value.kind(),
                quoted: value.has_quotes(),
                range: value.range(),
                elements: value.is_array().then_some(value.len()),
            })
        })
        .collect()
}

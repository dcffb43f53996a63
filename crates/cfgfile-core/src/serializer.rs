//! [`Store`] → config text.
//!
//! Output is canonical rather than faithful: comments, blank-line placement and
//! original spacing are not preserved. Each section is written as
//!
//! ```text
//! [name]
//! key = value
//! key = "quoted value"
//!
//! ```
//!
//! with the header omitted for the default section `""`. The final newline of
//! the document is dropped.

use crate::store::Store;

/// Append the text form of `store` to `out`.
pub fn write_to_string(store: &Store, out: &mut String) {
    let start = out.len();
    for (section_name, section) in store {
        if !section_name.is_empty() {
            out.push('[');
            out.push_str(section_name);
            out.push_str("]\n");
        }
        for (name, value) in section {
            out.push_str(name);
            out.push_str(" = ");
            out.push_str(&value.to_string_quoted());
            out.push('\n');
        }
        out.push('\n');
    }
    if out.len() > start && out.ends_with('\n') {
        out.pop();
    }
}

/// Serialize `store` into a new string.
///
/// ```
/// let store = cfgfile_core::parse("[General]\nname = \"Alice\"\ncount = 5\n");
/// assert_eq!(
///     cfgfile_core::serialize(&store),
///     "[General]\nname = \"Alice\"\ncount = 5\n"
/// );
/// ```
pub fn serialize(store: &Store) -> String {
    let mut out = String::new();
    write_to_string(store, &mut out);
    out
}

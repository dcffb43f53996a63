//! # cfgfile-core
//!
//! Reader and writer for INI-style configuration files.
//!
//! Files consist of `[section]` headers and `name = value` lines. Values may be
//! wrapped in `"` or `'`. Comments start a line with `//`, `#`, `::` or `;`, or
//! span several lines as `/* ... */`. Each option is stored as a [`Value`] that
//! holds its text, integer, float and boolean readings at once and can enforce
//! a numeric range.
//!
//! ## Quick start
//!
//! ```rust
//! use cfgfile_core::{parse, serialize};
//!
//! let mut store = parse("[General]\nname = \"Alice\"\ncount = 5\n");
//! assert_eq!(store.option("name", "General").unwrap().as_str(), "Alice");
//!
//! store.option_mut("count", "General").assign("6").unwrap();
//! assert_eq!(serialize(&store), "[General]\nname = \"Alice\"\ncount = 6\n");
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the typed, range-checked option cell with optional child array
//! - [`store`] — ordered sections of options
//! - [`classify`] — comment / section / option line classification
//! - [`parser`] — config text → [`Store`]
//! - [`serializer`] — [`Store`] → config text
//! - [`array`] — flat `{a, b, c}` array strings
//! - [`json`] — JSON export of a store
//! - [`file`] — [`ConfigFile`], a store bound to a file on disk
//! - [`strutil`] — string helpers
//! - [`error`] — error types

pub mod array;
pub mod classify;
pub mod error;
pub mod file;
pub mod json;
pub mod parser;
pub mod serializer;
pub mod store;
pub mod strutil;
pub mod value;

pub use array::{join_array, split_array};
pub use error::CfgError;
pub use file::{ConfigFile, Flags};
pub use json::{describe, to_json, OptionInfo};
pub use parser::{parse, Parser};
pub use serializer::serialize;
pub use store::{Section, Store};
pub use value::{Range, Value, ValueKind};

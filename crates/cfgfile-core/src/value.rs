//! The option cell: one configuration value held as text, integer, float and
//! boolean at the same time.
//!
//! A [`Value`] is parsed once, when it is assigned, and every typed read after
//! that is a plain field access. The cell can also carry:
//!
//! - **A range constraint** ([`Range`]): assignments whose numeric reading falls
//!   outside the range are rejected and leave the cell untouched.
//! - **A child array**: an ordered sequence of nested `Value`s, created on the
//!   first [`Value::push`]. The array is independent of the scalar facets; pushing
//!   or popping elements never changes the cell's own text or cached numbers.
//!
//! # Example
//! ```
//! use cfgfile_core::Value;
//!
//! let mut v = Value::with_range("5", 0.0, 10.0);
//! assert_eq!(v.to_int(), 5);
//! assert!(v.assign("20").is_err());
//! assert_eq!(v.to_int(), 5);
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::Serialize;

use crate::error::{CfgError, Result};
use crate::strutil;

/// Numeric acceptance bound checked on every assignment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Range {
    /// Every value is accepted.
    #[default]
    None,
    /// Values must be `>= min`.
    Min { min: f64 },
    /// Values must satisfy `min <= value <= max`.
    MinMax { min: f64, max: f64 },
}

impl Range {
    /// Whether `value` satisfies this constraint.
    pub fn contains(&self, value: f64) -> bool {
        match *self {
            Range::None => true,
            Range::Min { min } => value >= min,
            Range::MinMax { min, max } => value >= min && value <= max,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Range::None => write!(f, "(unbounded)"),
            Range::Min { min } => write!(f, "[{min}, inf)"),
            Range::MinMax { min, max } => write!(f, "[{min}, {max}]"),
        }
    }
}

/// How the text of the last successful assignment was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// The whole text parsed as a number.
    Number,
    /// The text was "true" or "false" (any casing).
    Boolean,
    /// Anything else.
    #[default]
    Text,
}

/// A single configuration option.
///
/// All scalar facets (`text`, `integer`, `decimal`, `boolean`) are recomputed
/// together on every successful assignment and are never updated on their own.
/// After any assignment `integer == decimal as i64` holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Value {
    text: String,
    integer: i64,
    decimal: f64,
    boolean: bool,
    quotes: bool,
    kind: ValueKind,
    range: Range,
    /// `None` until the first element is pushed.
    children: Option<Vec<Value>>,
}

/// Strict full-string numeric parse. Non-finite results (`inf`, `nan`,
/// overflowing exponents) are not numbers here.
fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl Value {
    /// Create a value from text. No range is set, so this always succeeds.
    pub fn new(text: &str) -> Self {
        let mut value = Value::default();
        value.commit_text(text, parse_number(text));
        value
    }

    /// Create a value and then restrict it to `>= min`.
    ///
    /// The initial text is assigned before the range is installed, so it is
    /// kept even if it lies outside the range.
    pub fn with_min(text: &str, min: f64) -> Self {
        let mut value = Value::new(text);
        value.set_min(min);
        value
    }

    /// Create a value and then restrict it to `min..=max`.
    pub fn with_range(text: &str, min: f64, max: f64) -> Self {
        let mut value = Value::new(text);
        value.set_range(min, max);
        value
    }

    // ------------------------------------------------------------------
    // Assignment
    // ------------------------------------------------------------------

    /// Assign new text, recomputing every facet.
    ///
    /// | text                     | decimal / integer | boolean        | quotes |
    /// |--------------------------|-------------------|----------------|--------|
    /// | parses fully as a number | N / trunc(N)      | `N != 0`       | no     |
    /// | `true` / `false` (any case) | 0 / 0          | literal value  | yes    |
    /// | anything else            | 0 / 0             | `false`        | yes    |
    ///
    /// The numeric reading (0 for non-numeric text) is checked against the
    /// range first. On violation [`CfgError::OutOfRange`] is returned and no
    /// field changes.
    pub fn assign(&mut self, text: &str) -> Result<()> {
        let parsed = parse_number(text);
        self.check_range(parsed.unwrap_or(0.0))?;
        self.commit_text(text, parsed);
        Ok(())
    }

    /// Assign an integer. The text becomes its decimal representation.
    pub fn set_int(&mut self, number: i64) -> Result<()> {
        self.check_range(number as f64)?;
        self.commit_number(number as f64, number, number.to_string());
        Ok(())
    }

    /// Assign a float. The integer facet is the truncated value.
    ///
    /// `NaN` and infinities are not numbers here: they are assigned as their
    /// text (`"NaN"`, `"inf"`, `"-inf"`) exactly like [`Value::assign`] would.
    pub fn set_float(&mut self, number: f64) -> Result<()> {
        if !number.is_finite() {
            return self.assign(&number.to_string());
        }
        self.check_range(number)?;
        self.commit_number(number, number as i64, number.to_string());
        Ok(())
    }

    /// Assign a bool as the number `1` or `0`.
    pub fn set_bool(&mut self, flag: bool) -> Result<()> {
        self.set_int(i64::from(flag))
    }

    /// Clear quotes, range and children, and set the value to `0`.
    pub fn reset(&mut self) {
        self.quotes = false;
        self.range = Range::None;
        self.children = None;
        self.commit_number(0.0, 0, "0".to_string());
    }

    fn check_range(&self, candidate: f64) -> Result<()> {
        if self.range.contains(candidate) {
            Ok(())
        } else {
            Err(CfgError::OutOfRange {
                value: candidate,
                range: self.range,
            })
        }
    }

    fn commit_text(&mut self, text: &str, parsed: Option<f64>) {
        match parsed {
            Some(number) => {
                self.decimal = number;
                self.integer = number as i64;
                self.boolean = number != 0.0;
                self.quotes = false;
                self.kind = ValueKind::Number;
            }
            None => {
                self.decimal = 0.0;
                self.integer = 0;
                self.quotes = true;
                if strutil::is_bool(text) {
                    self.boolean = strutil::str_to_bool(text);
                    self.kind = ValueKind::Boolean;
                } else {
                    self.boolean = false;
                    self.kind = ValueKind::Text;
                }
            }
        }
        self.text.clear();
        self.text.push_str(text);
    }

    fn commit_number(&mut self, decimal: f64, integer: i64, text: String) {
        self.decimal = decimal;
        self.integer = integer;
        self.boolean = decimal != 0.0;
        self.quotes = false;
        self.kind = ValueKind::Number;
        self.text = text;
    }

    // ------------------------------------------------------------------
    // Typed reads (no re-parsing)
    // ------------------------------------------------------------------

    /// The text as last assigned, without quotes.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The text wrapped in double quotes if the value is quoted.
    pub fn to_string_quoted(&self) -> String {
        if self.quotes {
            format!("\"{}\"", self.text)
        } else {
            self.text.clone()
        }
    }

    pub fn to_int(&self) -> i32 {
        self.integer as i32
    }

    pub fn to_long(&self) -> i64 {
        self.integer
    }

    pub fn to_float(&self) -> f32 {
        self.decimal as f32
    }

    pub fn to_double(&self) -> f64 {
        self.decimal
    }

    pub fn to_bool(&self) -> bool {
        self.boolean
    }

    /// The low byte of the integer facet as a character.
    pub fn to_char(&self) -> char {
        char::from(self.integer as u8)
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    // ------------------------------------------------------------------
    // Quotes and range
    // ------------------------------------------------------------------

    /// Force the quote flag, which only affects serialization.
    pub fn set_quotes(&mut self, quotes: bool) {
        self.quotes = quotes;
    }

    pub fn has_quotes(&self) -> bool {
        self.quotes
    }

    /// Only accept values `>= min` from now on. The current value is not re-checked.
    pub fn set_min(&mut self, min: f64) {
        self.range = Range::Min { min };
    }

    /// Only accept values in `min..=max` from now on. The current value is not re-checked.
    pub fn set_range(&mut self, min: f64, max: f64) {
        self.range = Range::MinMax { min, max };
    }

    pub fn clear_range(&mut self) {
        self.range = Range::None;
    }

    pub fn range(&self) -> Range {
        self.range
    }

    // ------------------------------------------------------------------
    // Child array
    // ------------------------------------------------------------------

    /// Append an element and return a reference to it.
    ///
    /// The first push turns this value into an array.
    pub fn push(&mut self, element: Value) -> &mut Value {
        let children = self.children.get_or_insert_with(Vec::new);
        let index = children.len();
        children.push(element);
        &mut children[index]
    }

    /// Append an element built from text and return `self`, so calls chain:
    /// `v.push_text("a").push_text("b")`.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        self.push(Value::new(text));
        self
    }

    /// Remove the last element, if any. The value stays an array even when emptied.
    pub fn pop(&mut self) -> Option<Value> {
        self.children.as_mut().and_then(Vec::pop)
    }

    pub fn element(&self, index: usize) -> Option<&Value> {
        self.children.as_ref().and_then(|c| c.get(index))
    }

    pub fn element_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.children.as_mut().and_then(|c| c.get_mut(index))
    }

    pub fn last_mut(&mut self) -> Option<&mut Value> {
        self.children.as_mut().and_then(|c| c.last_mut())
    }

    /// Number of array elements (0 when this is not an array).
    pub fn len(&self) -> usize {
        self.children.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once an element has been pushed, until [`Value::clear_array`].
    pub fn is_array(&self) -> bool {
        self.children.is_some()
    }

    /// Drop the child array entirely.
    pub fn clear_array(&mut self) {
        self.children = None;
    }

    /// Iterate over array elements. Empty when this is not an array.
    pub fn elements(&self) -> std::slice::Iter<'_, Value> {
        self.children.as_deref().unwrap_or(&[]).iter()
    }

    pub fn elements_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.children.as_deref_mut().unwrap_or(&mut []).iter_mut()
    }

    /// Render this value in the nested array text form.
    ///
    /// An array becomes a brace block with one element per line, each indented
    /// by one more tab than `indent` and separated by commas; nested arrays
    /// recurse. A non-array value renders as [`Value::to_string_quoted`].
    ///
    /// ```
    /// use cfgfile_core::Value;
    ///
    /// let mut v = Value::default();
    /// v.push_text("1").push_text("two");
    /// assert_eq!(v.build_array_string(""), "{\n\t1,\n\t\"two\"\n}");
    /// ```
    pub fn build_array_string(&self, indent: &str) -> String {
        let Some(children) = &self.children else {
            return self.to_string_quoted();
        };
        let next_indent = format!("{indent}\t");
        let mut out = String::from("{\n");
        for (i, child) in children.iter().enumerate() {
            out.push_str(&next_indent);
            out.push_str(&child.build_array_string(&next_indent));
            if i + 1 < children.len() {
                out.push_str(",\n");
            }
        }
        out.push('\n');
        out.push_str(indent);
        out.push('}');
        out
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    /// Panics if this is not an array or `index` is out of bounds.
    fn index(&self, index: usize) -> &Value {
        &self.children.as_deref().unwrap_or(&[])[index]
    }
}

impl IndexMut<usize> for Value {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.children.as_deref_mut().unwrap_or(&mut [])[index]
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::new(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::new(&text)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        let mut value = Value::default();
        value.commit_number(number as f64, number, number.to_string());
        value
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        let mut value = Value::default();
        value.commit_number(number, number as i64, number.to_string());
        value
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        let number = i64::from(flag);
        let mut value = Value::default();
        value.commit_number(number as f64, number, number.to_string());
        value
    }
}

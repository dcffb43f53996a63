//! Config text → [`Store`].
//!
//! The parser is a small state machine driven one line at a time. State that
//! carries over between lines:
//!
//! - **inside_block**: a `/* ... */` comment is open. Set by a line that starts
//!   a block, cleared *after* the line containing `*/` has been handled, so
//!   neither the opening nor the closing line contributes anything.
//! - **current_section**: the name from the last `[section]` header, starting
//!   as the default section `""`.
//!
//! Per line: trim whitespace, classify the comment form, blank out single-line
//! comments, then (outside a block comment) open a section or assign an option.
//! Malformed lines are skipped silently.
//!
//! A rejected assignment (range violation) keeps the option's previous value.
//! When warnings are enabled this is reported through `tracing`; it never makes
//! the parse as a whole fail.

use tracing::warn;

use crate::classify::{self, CommentKind, Line};
use crate::store::Store;
use crate::strutil;

/// Line-by-line parser. One instance should be used per input document.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    inside_block: bool,
    current_section: String,
    warnings: bool,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable out-of-range warnings.
    pub fn with_warnings(mut self, warnings: bool) -> Self {
        self.warnings = warnings;
        self
    }

    /// Section that options are currently assigned into.
    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    pub fn inside_block_comment(&self) -> bool {
        self.inside_block
    }

    /// Split `text` into lines and parse each of them into `store`.
    pub fn parse_str(&mut self, text: &str, store: &mut Store) {
        self.parse_lines(strutil::lines(text), store);
    }

    pub fn parse_lines<'a, I>(&mut self, lines: I, store: &mut Store)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            self.parse_line(line, store);
        }
    }

    /// Process one raw line.
    pub fn parse_line(&mut self, raw: &str, store: &mut Store) {
        let mut line = raw.trim();
        let kind = classify::comment_kind(line, self.inside_block);

        match kind {
            CommentKind::SingleLine => line = "",
            CommentKind::BlockStart => self.inside_block = true,
            CommentKind::None | CommentKind::BlockEnd => {}
        }

        if !self.inside_block {
            match classify::classify(line) {
                Line::Section(name) => {
                    store.section_mut(name);
                    self.current_section = name.to_string();
                }
                Line::Option {
                    name,
                    value,
                    quoted,
                } => self.assign(store, name, value, quoted),
                Line::Blank | Line::Malformed => {}
            }
        }

        if kind == CommentKind::BlockEnd {
            self.inside_block = false;
        }
    }

    fn assign(&self, store: &mut Store, name: &str, value: &str, quoted: bool) {
        let option = store.option_mut(name, &self.current_section);
        let result = option.assign(value);
        if quoted {
            option.set_quotes(true);
        }
        if let Err(err) = result {
            if self.warnings {
                warn!(
                    section = %self.current_section,
                    "option \"{name}\" was out of range ({err}); using default value: {}",
                    option.to_string_quoted()
                );
            }
        }
    }
}

/// Parse text into a fresh [`Store`] with warnings disabled.
///
/// ```
/// let store = cfgfile_core::parse("[General]\nname = \"Alice\"\ncount = 5\n");
/// let count = store.option("count", "General").unwrap();
/// assert_eq!(count.to_int(), 5);
/// ```
pub fn parse(text: &str) -> Store {
    let mut store = Store::new();
    Parser::new().parse_str(text, &mut store);
    store
}

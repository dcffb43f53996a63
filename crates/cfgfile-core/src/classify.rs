//! Line classification: comments, section headers and option assignments.
//!
//! Classification works on a single line that has already been trimmed of
//! surrounding whitespace. It is split in two steps because comment handling
//! depends on parser state (whether a block comment is open) while the rest
//! does not:
//!
//! 1. [`comment_kind`] looks at line prefixes and the block terminator.
//! 2. [`classify`] turns the remaining, non-comment text into a [`Line`].
//!
//! Comments are only recognized at the start of a line. `key = value # note`
//! is an option whose value is `value # note`.

use crate::strutil;

const BLOCK_START: &str = "/*";
const BLOCK_END: &str = "*/";

/// Prefixes checked in order against the start of a line.
const COMMENT_PREFIXES: [(&str, CommentKind); 5] = [
    (BLOCK_START, CommentKind::BlockStart),
    ("//", CommentKind::SingleLine),
    ("#", CommentKind::SingleLine),
    ("::", CommentKind::SingleLine),
    (";", CommentKind::SingleLine),
];

/// What kind of comment a line is, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    None,
    /// The whole line is a comment.
    SingleLine,
    /// The line opens a block comment that continues on following lines.
    BlockStart,
    /// A block comment is open and this line contains its terminator.
    BlockEnd,
}

/// True if the line contains the block comment terminator `*/` anywhere.
pub fn is_block_end(line: &str) -> bool {
    line.contains(BLOCK_END)
}

/// Classify the comment form of a trimmed line.
///
/// `inside_block` must be true while a block comment is open. In that case a
/// line containing `*/` is [`CommentKind::BlockEnd`] whatever its prefix.
/// Outside a block, a `/*` line that also contains `*/` is a one-line comment
/// and reported as [`CommentKind::SingleLine`].
pub fn comment_kind(line: &str, inside_block: bool) -> CommentKind {
    if inside_block && is_block_end(line) {
        return CommentKind::BlockEnd;
    }

    let kind = COMMENT_PREFIXES
        .iter()
        .find(|(prefix, _)| line.starts_with(*prefix))
        .map_or(CommentKind::None, |&(_, kind)| kind);

    if !inside_block && kind == CommentKind::BlockStart && is_block_end(line) {
        CommentKind::SingleLine
    } else {
        kind
    }
}

/// True when the line is `[` ... `]` with at least those two characters.
pub fn is_section_header(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('[') && line.ends_with(']')
}

/// The meaning of a trimmed, non-comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Nothing left to process.
    Blank,
    /// `[name]`. The name is taken verbatim between the brackets.
    Section(&'a str),
    /// `name = value`, split on the first `=`.
    Option {
        name: &'a str,
        /// Value with surrounding whitespace and one layer of quotes removed.
        value: &'a str,
        /// Whether quotes were removed from the value.
        quoted: bool,
    },
    /// Anything else (no `=`, or `=` as first character). Skipped by the parser.
    Malformed,
}

/// Classify a trimmed line that is not a comment.
pub fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::Blank;
    }
    if is_section_header(line) {
        return Line::Section(&line[1..line.len() - 1]);
    }
    match line.find('=') {
        Some(pos) if pos >= 1 => {
            let name = line[..pos].trim();
            let (value, quoted) = strutil::trim_quotes(line[pos + 1..].trim());
            Line::Option {
                name,
                value,
                quoted,
            }
        }
        _ => Line::Malformed,
    }
}

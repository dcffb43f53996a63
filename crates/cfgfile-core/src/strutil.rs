//! Small string helpers shared by the parser, the value cell and the array codec.

/// Returns true when both characters are the same quote character (`"` or `'`).
fn are_quotes(first: u8, last: u8) -> bool {
    first == last && (first == b'"' || first == b'\'')
}

/// Strip one layer of matching surrounding quotes.
///
/// Returns the inner text and whether quotes were removed. Mismatched quotes
/// (`"abc'`) and strings shorter than two bytes are returned unchanged.
pub fn trim_quotes(s: &str) -> (&str, bool) {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && are_quotes(bytes[0], bytes[bytes.len() - 1]) {
        (&s[1..s.len() - 1], true)
    } else {
        (s, false)
    }
}

/// True if the string is "true" or "false", ignoring ASCII case.
pub fn is_bool(s: &str) -> bool {
    s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false")
}

/// True only for "true", ignoring ASCII case. Everything else is false.
pub fn str_to_bool(s: &str) -> bool {
    s.eq_ignore_ascii_case("true")
}

/// Split text into lines. `\r\n`, a lone `\r` and `\n` all count as line breaks.
pub fn lines(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                out.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                out.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

/// Split on a delimiter.
///
/// Empty pieces between two delimiters are kept, but a trailing empty piece
/// (text ending with the delimiter, or empty input) is not.
pub fn split<'a>(text: &'a str, delim: &str) -> Vec<&'a str> {
    let mut out: Vec<&str> = text.split(delim).collect();
    if out.last().is_some_and(|last| last.is_empty()) {
        out.pop();
    }
    out
}

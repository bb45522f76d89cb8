//! Hand-written recursive-descent parser for the configuration language.
//!
//! The language is line-oriented and deliberately tiny:
//!
//! ```text
//! # comment to end of line
//! project  = "name"
//! requires = [ "dep-a", "dep-b"
//!              "dep-c" ]          # commas between list items are optional
//! ```
//!
//! Values are either quoted strings or bracketed lists; lists may nest.
//! Inside a string a backslash takes the following character literally and
//! an unescaped newline is kept as part of the value. Keys are ASCII
//! letters, and spaces *inside* a key are skipped rather than ending it:
//! `p r o j` parses as the key `proj`. That quirk is part of the format
//! and is pinned by a test.
//!
//! Each grammar rule is a plain function returning the parsed value, the
//! remaining input, and the number of newlines it consumed. Failures bubble
//! up as [`Fail`] values whose newline count is accumulated on the way out,
//! so the [`SyntaxError`] surfaced to the caller carries an exact 1-based
//! line number. Parsing is single-pass and never backtracks except for the
//! string-or-list alternation at `value`.

use super::value::{Entries, Value};

/// A parser failure with a 1-based line number and a human-readable cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Line on which the failure occurred (1-based, newline-counted).
    pub line: usize,
    /// What went wrong.
    pub message: String,
}

/// Internal failure carrying the number of newlines consumed before the
/// error within the rule that produced it.
struct Fail {
    lines: usize,
    message: String,
}

impl Fail {
    fn new(lines: usize, message: impl Into<String>) -> Self {
        Self {
            lines,
            message: message.into(),
        }
    }

    /// Shift the failure by the newlines the caller had already consumed.
    fn offset(mut self, lines: usize) -> Self {
        self.lines += lines;
        self
    }

    fn into_syntax(self) -> SyntaxError {
        SyntaxError {
            line: self.lines + 1,
            message: self.message,
        }
    }
}

/// Parse a whole configuration file into ordered key-value entries.
///
/// # Errors
///
/// Returns a [`SyntaxError`] on the first malformed construct: an empty
/// key, a missing `=`, an unterminated string or list, an unexpected
/// character, or a truncated input.
pub fn parse_entries(input: &str) -> Result<Entries, SyntaxError> {
    let mut entries = Entries::new();
    let mut rest = input;
    let mut lines = 0usize;

    loop {
        let (r, n) = skip_trivia(rest, false);
        rest = r;
        lines += n;
        if rest.is_empty() {
            return Ok(entries);
        }

        let (key, r) = parse_key(rest).map_err(|f| f.offset(lines).into_syntax())?;
        rest = r;

        rest = match rest.strip_prefix('=') {
            Some(r) => r,
            None => {
                let fail = match rest.chars().next() {
                    None => Fail::new(
                        0,
                        format!("unexpected end of input: expected '=' after key \"{key}\""),
                    ),
                    Some(c) => Fail::new(
                        0,
                        format!("unexpected character {c:?}: expected '=' after key \"{key}\""),
                    ),
                };
                return Err(fail.offset(lines).into_syntax());
            }
        };

        let (r, n) = skip_whitespace(rest);
        rest = r;
        lines += n;

        let (value, r, n) = parse_value(rest).map_err(|f| f.offset(lines).into_syntax())?;
        rest = r;
        lines += n;

        entries.push((key, value));
    }
}

/// Parse a key: ASCII letters, with interior spaces and tabs skipped.
///
/// Consumes no newlines. The returned rest begins at the first character
/// that is neither a letter nor a blank.
fn parse_key(input: &str) -> Result<(String, &str), Fail> {
    let mut key = String::new();
    let mut rest = input;

    loop {
        match rest.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => {
                key.push(c);
                rest = advance(rest, c.len_utf8());
            }
            Some(' ' | '\t') => rest = advance(rest, 1),
            _ => break,
        }
    }

    if key.is_empty() {
        return Err(match input.chars().next() {
            None => Fail::new(0, "unexpected end of input: expected a key"),
            Some('=') => Fail::new(0, "empty key before '='"),
            Some(c) => Fail::new(0, format!("unexpected character {c:?}: expected a key")),
        });
    }
    Ok((key, rest))
}

/// Parse a value: a quoted string or a bracketed list.
fn parse_value(input: &str) -> Result<(Value, &str, usize), Fail> {
    match input.chars().next() {
        Some('"') => parse_string(input),
        Some('[') => parse_list(input),
        None => Err(Fail::new(0, "unexpected end of input: expected a value")),
        Some(c) => Err(Fail::new(
            0,
            format!("unexpected character {c:?}: expected a value"),
        )),
    }
}

/// Parse a quoted string. `input` starts at the opening `"`.
///
/// A backslash takes the next character literally; there are no named
/// escape codes. Unescaped newlines are preserved in the value.
fn parse_string(input: &str) -> Result<(Value, &str, usize), Fail> {
    let mut rest = advance(input, 1);
    let mut text = String::new();
    let mut lines = 0usize;

    loop {
        let Some(c) = rest.chars().next() else {
            return Err(Fail::new(
                lines,
                "unterminated string: end of input before closing '\"'",
            ));
        };
        rest = advance(rest, c.len_utf8());
        match c {
            '"' => return Ok((Value::Str(text), rest, lines)),
            '\\' => {
                let Some(escaped) = rest.chars().next() else {
                    return Err(Fail::new(
                        lines,
                        "unterminated string: end of input after '\\'",
                    ));
                };
                rest = advance(rest, escaped.len_utf8());
                if escaped == '\n' {
                    lines += 1;
                }
                text.push(escaped);
            }
            '\n' => {
                lines += 1;
                text.push('\n');
            }
            other => text.push(other),
        }
    }
}

/// Parse a list. `input` starts at the opening `[`.
///
/// Items are separated by commas or by bare whitespace; `#` comments are
/// allowed inside and run to end of line.
fn parse_list(input: &str) -> Result<(Value, &str, usize), Fail> {
    let mut rest = advance(input, 1);
    let mut items = Vec::new();
    let mut lines = 0usize;

    loop {
        let (r, n) = skip_trivia(rest, true);
        rest = r;
        lines += n;

        match rest.chars().next() {
            None => {
                return Err(Fail::new(
                    lines,
                    "unterminated list: end of input before ']'",
                ));
            }
            Some(']') => return Ok((Value::List(items), advance(rest, 1), lines)),
            Some(_) => {
                let (item, r, n) = parse_value(rest).map_err(|f| f.offset(lines))?;
                rest = r;
                lines += n;
                items.push(item);
            }
        }
    }
}

/// Skip blanks, newlines, and `#` comments; inside a list, commas too.
fn skip_trivia(input: &str, in_list: bool) -> (&str, usize) {
    let mut rest = input;
    let mut lines = 0usize;

    loop {
        match rest.chars().next() {
            Some(' ' | '\t' | '\r') => rest = advance(rest, 1),
            Some(',') if in_list => rest = advance(rest, 1),
            Some('\n') => {
                lines += 1;
                rest = advance(rest, 1);
            }
            Some('#') => {
                // Comment runs to end of line; the newline is handled above.
                rest = rest.find('\n').map_or("", |i| advance(rest, i));
            }
            _ => return (rest, lines),
        }
    }
}

/// Skip blanks and newlines but not comments (between `=` and a value).
fn skip_whitespace(input: &str) -> (&str, usize) {
    let mut rest = input;
    let mut lines = 0usize;

    loop {
        match rest.chars().next() {
            Some(' ' | '\t' | '\r') => rest = advance(rest, 1),
            Some('\n') => {
                lines += 1;
                rest = advance(rest, 1);
            }
            _ => return (rest, lines),
        }
    }
}

/// Advance past `bytes` bytes, saturating at end of input.
fn advance(s: &str, bytes: usize) -> &str {
    s.get(bytes..).unwrap_or("")
}

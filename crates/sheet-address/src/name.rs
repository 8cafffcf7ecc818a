//! Table and file name validation, quoting and unquoting
//!
//! Names that contain whitespace, `.` or the quote character are written
//! inside single quotes, with every inner quote doubled:
//!
//! ```
//! use sheet_address::name;
//!
//! assert_eq!(name::escape("Sheet1"), "Sheet1");
//! assert_eq!(name::escape("My Sheet"), "'My Sheet'");
//! assert_eq!(name::escape("Bob's"), "'Bob''s'");
//! assert_eq!(name::unescape_quotes("'Bob''s'").unwrap(), "Bob's");
//! ```
//!
//! The address parsers only quote and unquote. [`check`] and [`sanitize`]
//! are for callers that want to enforce the stricter rules a document
//! applies to table names.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::error::{NameError, NameErrorKind, NameResult, ParseError, ParseErrorKind, ParseResult};
use crate::QUOTE;

/// Characters a table name must not contain
pub const FORBIDDEN_CHARS: &[char] = &['[', ']', '*', '?', ':', '/', '\\'];

/// Replacement used by [`sanitize`]
const REPLACEMENT: char = '_';

/// Validate a table name
///
/// Fails if the name starts with the quote character or contains any of
/// [`FORBIDDEN_CHARS`].
pub fn check(name: &str) -> NameResult<()> {
    if name.starts_with(QUOTE) {
        return Err(NameError {
            name: name.to_string(),
            kind: NameErrorKind::LeadingQuote,
        });
    }

    if let Some((index, ch)) = name.char_indices().find(|(_, c)| FORBIDDEN_CHARS.contains(c)) {
        return Err(NameError {
            name: name.to_string(),
            kind: NameErrorKind::ForbiddenCharacter { ch, index },
        });
    }

    Ok(())
}

/// Make a name pass [`check`] by replacing offending characters with `_`
pub fn sanitize(name: &str) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| {
            if FORBIDDEN_CHARS.contains(&c) || (i == 0 && c == QUOTE) {
                REPLACEMENT
            } else {
                c
            }
        })
        .collect()
}

/// Whether a name has to be quoted when written into an address
pub fn needs_quoting(name: &str) -> bool {
    name.chars()
        .any(|c| c.is_whitespace() || c == '.' || c == QUOTE)
}

/// Quote a name if it contains whitespace, `.` or the quote character
///
/// Inner quotes are only doubled when the name is quoted, and a name with a
/// quote in it is always quoted.
pub fn escape(name: &str) -> Cow<'_, str> {
    if needs_quoting(name) {
        let mut out = String::with_capacity(name.len() + 2);
        push_quoted(&mut out, name);
        Cow::Owned(out)
    } else {
        Cow::Borrowed(name)
    }
}

/// Append `text` wrapped in quotes, doubling inner quotes
pub(crate) fn push_quoted(out: &mut String, text: &str) {
    out.push(QUOTE);
    for c in text.chars() {
        if c == QUOTE {
            out.push(QUOTE);
        }
        out.push(c);
    }
    out.push(QUOTE);
}

/// Reverse [`escape`]
///
/// Text that starts with a quote must end with the matching closing quote,
/// and every quote in between must be doubled. Text that does not start with
/// a quote must not contain one at all.
pub fn unescape_quotes(text: &str) -> ParseResult<Cow<'_, str>> {
    if !text.starts_with(QUOTE) {
        return match text.find(QUOTE) {
            Some(offset) => Err(ParseError::new(ParseErrorKind::StrayQuote, offset)),
            None => Ok(Cow::Borrowed(text)),
        };
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().skip(1).peekable();

    while let Some((offset, c)) = chars.next() {
        if c != QUOTE {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(&(_, next)) if next == QUOTE => {
                out.push(QUOTE);
                chars.next();
            }
            None => return Ok(Cow::Owned(out)),
            Some(_) => return Err(ParseError::new(ParseErrorKind::UnpairedQuote, offset)),
        }
    }

    Err(ParseError::new(
        ParseErrorKind::MissingClosingQuote,
        text.len(),
    ))
}

/// Reverse the quoting and percent-encoding of a filename
///
/// If the decoded bytes are not UTF-8, the error points at the escape (or
/// raw byte) where the invalid sequence starts.
pub fn unescape_filename(text: &str) -> ParseResult<String> {
    let unquoted = unescape_quotes(text)?;
    let decoded: Vec<u8> = percent_decode_str(&unquoted).collect();
    String::from_utf8(decoded).map_err(|e| {
        let at = encoded_offset(&unquoted, e.utf8_error().valid_up_to());
        let offset = if text.starts_with(QUOTE) {
            // opening quote plus one extra byte per doubled quote
            let doubled = unquoted[..at].matches(QUOTE).count();
            1 + at + doubled
        } else {
            at
        };
        ParseError::new(ParseErrorKind::InvalidPercentEncoding, offset)
    })
}

/// Byte offset in `encoded` of the source of decoded byte `decoded_at`
fn encoded_offset(encoded: &str, decoded_at: usize) -> usize {
    let bytes = encoded.as_bytes();
    let mut at = 0;
    for _ in 0..decoded_at {
        at += if is_escape(&bytes[at..]) { 3 } else { 1 };
    }
    at
}

/// Whether `bytes` starts with `%` and two hex digits
fn is_escape(bytes: &[u8]) -> bool {
    matches!(bytes, [b'%', hi, lo, ..] if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit())
}

/// Byte offset of the last `target` that is outside any quoted segment
///
/// Doubled quotes inside a quoted segment toggle twice, so they never end
/// the segment.
pub(crate) fn rfind_unquoted(text: &str, target: char) -> Option<usize> {
    let mut quoted = false;
    let mut found = None;
    for (offset, c) in text.char_indices() {
        if c == QUOTE {
            quoted = !quoted;
        } else if c == target && !quoted {
            found = Some(offset);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_accepts_plain_names() {
        assert!(check("ok name").is_ok());
        assert!(check("Sheet1").is_ok());
        assert!(check("a.b").is_ok());
        assert!(check("it's").is_ok());
    }

    #[test]
    fn test_check_rejects() {
        let err = check("'leading quote").unwrap_err();
        assert_eq!(err.kind, NameErrorKind::LeadingQuote);

        let err = check("name[").unwrap_err();
        assert_eq!(
            err.kind,
            NameErrorKind::ForbiddenCharacter { ch: '[', index: 4 }
        );

        for c in FORBIDDEN_CHARS {
            assert!(check(&format!("a{c}b")).is_err(), "{c} should be rejected");
        }
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("a/b:c"), "a_b_c");
        assert_eq!(sanitize("'quoted'"), "_quoted'");
        assert_eq!(sanitize("[*?\\]"), "_____");
        assert_eq!(sanitize("fine"), "fine");
        assert!(check(&sanitize("'x[y]'")).is_ok());
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("no_problem"), "no_problem");
        assert_eq!(escape("a space"), "'a space'");
        assert_eq!(escape("a ' quote"), "'a '' quote'");
        assert_eq!(escape("dotted.name"), "'dotted.name'");
        assert_eq!(escape("tab\there"), "'tab\there'");
        assert_eq!(escape("it's"), "'it''s'");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unescape_quotes() {
        assert_eq!(unescape_quotes("plain").unwrap(), "plain");
        assert_eq!(unescape_quotes("'a space'").unwrap(), "a space");
        assert_eq!(unescape_quotes("'a '' quote'").unwrap(), "a ' quote");
        assert_eq!(unescape_quotes("''").unwrap(), "");
        assert_eq!(unescape_quotes("''''").unwrap(), "'");
    }

    #[test]
    fn test_unescape_quotes_errors() {
        let err = unescape_quotes("'abc").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingClosingQuote);
        assert_eq!(err.offset, 4);

        let err = unescape_quotes("'").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingClosingQuote);

        let err = unescape_quotes("'a'b'").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnpairedQuote);
        assert_eq!(err.offset, 2);

        let err = unescape_quotes("ab'c").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::StrayQuote);
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn test_unescape_filename() {
        assert_eq!(unescape_filename("'My File.ods'").unwrap(), "My File.ods");
        assert_eq!(
            unescape_filename("'file%20name.ods'").unwrap(),
            "file name.ods"
        );
        assert_eq!(unescape_filename("'%C3%A9t%C3%A9'").unwrap(), "\u{e9}t\u{e9}");
        assert_eq!(
            unescape_filename("'%FF'").unwrap_err().kind,
            ParseErrorKind::InvalidPercentEncoding
        );
    }

    #[test]
    fn test_unescape_filename_error_offset() {
        let err = unescape_filename("'abc%FF'").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidPercentEncoding);
        assert_eq!(err.offset, 4);

        // valid escapes and doubled quotes before the bad one
        let err = unescape_filename("'%20it''s%C3'").unwrap_err();
        assert_eq!(err.offset, 9);

        let err = unescape_filename("a%41%E9").unwrap_err();
        assert_eq!(err.offset, 4);
    }

    #[test]
    fn test_rfind_unquoted() {
        assert_eq!(rfind_unquoted("a#b#c", '#'), Some(3));
        assert_eq!(rfind_unquoted("'a#b'#c", '#'), Some(5));
        assert_eq!(rfind_unquoted("'a#b'", '#'), None);
        assert_eq!(rfind_unquoted("'it''s#'", '#'), None);
        assert_eq!(rfind_unquoted("abc", '#'), None);
    }
}

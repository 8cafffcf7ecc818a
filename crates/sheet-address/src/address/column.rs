//! Column letters
//!
//! Columns are numbered in bijective base 26: the letters `A`..`Z` stand for
//! the digits 1..26 and there is no zero digit, so every column index has
//! exactly one spelling and no spelling has a leading zero.

use crate::error::{ParseError, ParseErrorKind, ParseResult};

const RADIX: u32 = 26;

/// Largest accumulated (1-based) value that still maps to a `u32` column
const MAX_ACCUMULATED: u64 = u32::MAX as u64 + 1;

/// Convert a 0-based column index to letters (0 = A, 25 = Z, 26 = AA, ...)
pub fn column_to_letters(col: u32) -> String {
    let mut letters = Vec::with_capacity(8);
    let mut n = col;

    while n >= RADIX {
        letters.push(letter(n % RADIX));
        n = n / RADIX - 1;
    }
    letters.push(letter(n));

    letters.iter().rev().collect()
}

/// Convert column letters to a 0-based index (A = 0, Z = 25, AA = 26, ...)
///
/// Only uppercase `A`-`Z` are accepted.
pub fn letters_to_column(letters: &str) -> ParseResult<u32> {
    if letters.is_empty() {
        return Err(ParseError::new(ParseErrorKind::ExpectedColumn, 0));
    }

    let mut acc: u64 = 0;
    for (offset, c) in letters.char_indices() {
        let digit = digit_value(c)
            .ok_or(ParseError::new(ParseErrorKind::UnexpectedCharacter(c), offset))?;
        acc = accumulate(acc, digit)
            .ok_or(ParseError::new(ParseErrorKind::ColumnOutOfRange, offset))?;
    }

    Ok(finish(acc))
}

/// Digit value (1-26) of an uppercase column letter
pub(crate) fn digit_value(c: char) -> Option<u64> {
    c.is_ascii_uppercase()
        .then(|| u64::from(c as u8 - b'A') + 1)
}

/// Append one digit to a running 1-based column value
pub(crate) fn accumulate(acc: u64, digit: u64) -> Option<u64> {
    let next = acc * u64::from(RADIX) + digit;
    (next <= MAX_ACCUMULATED).then_some(next)
}

/// Turn a non-zero running value into the 0-based column index
pub(crate) fn finish(acc: u64) -> u32 {
    (acc - 1) as u32
}

fn letter(digit: u32) -> char {
    char::from(b'A' + digit as u8)
}

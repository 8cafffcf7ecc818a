//! Row/column addresses within a single table (e.g. "A1", "$B$6")

use std::fmt::{self, Write};
use std::str::FromStr;

use super::column::{self, column_to_letters};
use super::LocalAddressBuilder;
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::flags::Flags;

/// Largest 1-based row number that still maps to a `u32` row index
const MAX_ROW_NUMBER: u64 = u32::MAX as u64 + 1;

/// A cell position inside one table, e.g. `A1`, `$B6`, `C$7`, `$D$8`
///
/// Rows and columns are 0-based internally and 1-based / lettered in text.
/// The column and row can each be absolute (`$`) independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawLocalAddress"))]
pub struct LocalAddress {
    row: u32,
    column: u32,
    flags: Flags,
}

/// Deserialized form, masked through [`LocalAddress::with_flags`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLocalAddress {
    row: u32,
    column: u32,
    flags: Flags,
}

#[cfg(feature = "serde")]
impl From<RawLocalAddress> for LocalAddress {
    fn from(raw: RawLocalAddress) -> Self {
        Self::with_flags(raw.row, raw.column, raw.flags)
    }
}

impl LocalAddress {
    /// Create a relative address
    pub fn new(row: u32, column: u32) -> Self {
        Self {
            row,
            column,
            flags: Flags::RELATIVE,
        }
    }

    /// Create an address with both row and column absolute (`$A$1` style)
    pub fn absolute(row: u32, column: u32) -> Self {
        Self::with_flags(row, column, Flags::LOCAL)
    }

    /// Create an address with the given flags
    ///
    /// Only [`Flags::ABSOLUTE_COLUMN`] and [`Flags::ABSOLUTE_ROW`] are kept;
    /// table flags belong on a [`TableAddress`](super::TableAddress).
    pub fn with_flags(row: u32, column: u32, flags: Flags) -> Self {
        Self {
            row,
            column,
            flags: flags & Flags::LOCAL,
        }
    }

    /// Start building a local address
    pub fn builder() -> LocalAddressBuilder {
        LocalAddressBuilder::default()
    }

    /// Row index (0-based)
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Column index (0-based, A = 0)
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Absolute flags of this address
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Whether the row is written with `$`
    pub fn is_row_absolute(&self) -> bool {
        self.flags.contains(Flags::ABSOLUTE_ROW)
    }

    /// Whether the column is written with `$`
    pub fn is_column_absolute(&self) -> bool {
        self.flags.contains(Flags::ABSOLUTE_COLUMN)
    }

    /// Parse a local address such as `A1` or `$AB$12`
    ///
    /// Column letters must be uppercase and the row must not have a leading
    /// zero. Nothing may follow the row digits.
    ///
    /// # Examples
    /// ```
    /// use sheet_address::{Flags, LocalAddress};
    ///
    /// let addr = LocalAddress::parse("A5").unwrap();
    /// assert_eq!((addr.row(), addr.column()), (4, 0));
    ///
    /// let addr = LocalAddress::parse("$B$6").unwrap();
    /// assert_eq!((addr.row(), addr.column()), (5, 1));
    /// assert_eq!(addr.flags(), Flags::ABSOLUTE_COLUMN | Flags::ABSOLUTE_ROW);
    ///
    /// assert!(LocalAddress::parse("$B$6$").is_err());
    /// ```
    pub fn parse(s: &str) -> ParseResult<Self> {
        let mut state = State::BeginColumn;
        let mut scan = Scan::default();
        let mut rest = s;

        while !rest.is_empty() {
            let at = s.len() - rest.len();
            (state, scan, rest) = state.step(scan, rest, at)?;
        }

        match state {
            State::OptionalDigit => Ok(scan.finish()),
            _ => Err(ParseError::new(ParseErrorKind::TooShort, s.len())),
        }
    }

    /// Format as `[$]letters[$]row`
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LocalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_column_absolute() {
            f.write_char('$')?;
        }
        f.write_str(&column_to_letters(self.column))?;
        if self.is_row_absolute() {
            f.write_char('$')?;
        }
        write!(f, "{}", u64::from(self.row) + 1)
    }
}

impl FromStr for LocalAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        Self::parse(s)
    }
}

/// Scanner states, in the order a well-formed address visits them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Optional `$`, then the first column letter
    BeginColumn,
    /// Further column letters
    OptionalLetter,
    /// Optional `$`, then the first row digit (1-9)
    BeginRow,
    /// Further row digits
    OptionalDigit,
}

/// Values accumulated so far; column and row are 1-based while scanning
#[derive(Debug, Clone, Copy, Default)]
struct Scan {
    column: u64,
    row: u64,
    flags: Flags,
}

impl Scan {
    fn finish(self) -> LocalAddress {
        LocalAddress {
            row: (self.row - 1) as u32,
            column: column::finish(self.column),
            flags: self.flags,
        }
    }
}

type Step<'a> = ParseResult<(State, Scan, &'a str)>;

impl State {
    /// Run one transition on non-empty `rest`, which starts at byte `at`
    fn step(self, scan: Scan, rest: &str, at: usize) -> Step<'_> {
        match self {
            State::BeginColumn => begin_column(scan, rest, at),
            State::OptionalLetter => optional_letter(scan, rest, at),
            State::BeginRow => begin_row(scan, rest, at),
            State::OptionalDigit => optional_digit(scan, rest, at),
        }
    }
}

/// Strip a leading `$`, recording `flag` if present
fn dollar<'a>(scan: &mut Scan, rest: &'a str, at: usize, flag: Flags) -> (usize, &'a str) {
    match rest.strip_prefix('$') {
        Some(stripped) => {
            scan.flags |= flag;
            (at + 1, stripped)
        }
        None => (at, rest),
    }
}

fn begin_column(mut scan: Scan, rest: &str, at: usize) -> Step<'_> {
    let (at, rest) = dollar(&mut scan, rest, at, Flags::ABSOLUTE_COLUMN);
    let mut chars = rest.chars();
    match chars.next() {
        None => Err(ParseError::new(ParseErrorKind::TooShort, at)),
        Some(c) => {
            let digit =
                column::digit_value(c).ok_or(ParseError::new(ParseErrorKind::ExpectedColumn, at))?;
            scan.column = digit;
            Ok((State::OptionalLetter, scan, chars.as_str()))
        }
    }
}

fn optional_letter(mut scan: Scan, rest: &str, at: usize) -> Step<'_> {
    let mut chars = rest.chars();
    match chars.next().and_then(column::digit_value) {
        Some(digit) => {
            scan.column = column::accumulate(scan.column, digit)
                .ok_or(ParseError::new(ParseErrorKind::ColumnOutOfRange, at))?;
            Ok((State::OptionalLetter, scan, chars.as_str()))
        }
        // leave the character for the row states
        None => Ok((State::BeginRow, scan, rest)),
    }
}

fn begin_row(mut scan: Scan, rest: &str, at: usize) -> Step<'_> {
    let (at, rest) = dollar(&mut scan, rest, at, Flags::ABSOLUTE_ROW);
    let mut chars = rest.chars();
    match chars.next() {
        None => Err(ParseError::new(ParseErrorKind::TooShort, at)),
        Some(c @ '1'..='9') => {
            scan.row = row_digit(c);
            Ok((State::OptionalDigit, scan, chars.as_str()))
        }
        Some(_) => Err(ParseError::new(ParseErrorKind::ExpectedRow, at)),
    }
}

fn optional_digit(mut scan: Scan, rest: &str, at: usize) -> Step<'_> {
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => {
            scan.row = scan.row * 10 + row_digit(c);
            if scan.row > MAX_ROW_NUMBER {
                return Err(ParseError::new(ParseErrorKind::RowOutOfRange, at));
            }
            Ok((State::OptionalDigit, scan, chars.as_str()))
        }
        Some(c) => Err(ParseError::new(ParseErrorKind::UnexpectedCharacter(c), at)),
        None => Err(ParseError::new(ParseErrorKind::TooShort, at)),
    }
}

fn row_digit(c: char) -> u64 {
    u64::from(c as u8 - b'0')
}

//! Error types for sheet-address

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for parse operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type for name validation
pub type NameResult<T> = std::result::Result<T, NameError>;

/// Any error produced by sheet-address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed address text
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Name rejected by [`check`](crate::name::check)
    #[error(transparent)]
    Name(#[from] NameError),

    /// Table address constructed without a table name
    #[error("Table name must not be empty")]
    EmptyTableName,
}

/// The reason an address could not be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A column letter (A-Z) was required
    #[error("expected column letter")]
    ExpectedColumn,

    /// A row digit (1-9 for the first digit) was required
    #[error("expected row number")]
    ExpectedRow,

    /// A character that the grammar does not allow here
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// Input ended before a complete local address was read
    #[error("address too short")]
    TooShort,

    /// A range has no ':' between its two corners
    #[error("missing ':' in range address")]
    MissingRangeSeparator,

    /// A quote inside quoted text that is neither doubled nor closing
    #[error("unpaired quote character")]
    UnpairedQuote,

    /// Quoted text without its closing quote
    #[error("missing closing quote")]
    MissingClosingQuote,

    /// A quote inside unquoted text
    #[error("quote character in unquoted name")]
    StrayQuote,

    /// A filename whose percent-escapes do not decode to UTF-8
    #[error("invalid percent-encoding in filename")]
    InvalidPercentEncoding,

    /// A table reference with nothing after the optional `$`
    #[error("empty table name")]
    EmptyTableName,

    /// Row number does not fit in a `u32`
    #[error("row number out of range")]
    RowOutOfRange,

    /// Column letters do not fit in a `u32`
    #[error("column letters out of range")]
    ColumnOutOfRange,
}

/// Address parse failure
///
/// `offset` is a byte offset into the text handed to the outermost `parse`
/// call, so it can be used directly to point at the offending character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    /// What went wrong
    pub kind: ParseErrorKind,
    /// Byte offset of the failure
    pub offset: usize,
}

impl ParseError {
    /// Create a new parse error
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Human-readable message, without the offset
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Move the offset right by `by` bytes, for errors from a sub-parse of a
    /// slice that starts at `by`
    pub(crate) fn shifted(self, by: usize) -> Self {
        Self {
            kind: self.kind,
            offset: self.offset + by,
        }
    }
}

/// The reason a table or file name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameErrorKind {
    /// Name starts with the quote character
    #[error("name must not start with a quote")]
    LeadingQuote,

    /// Name contains one of `[ ] * ? : / \`
    #[error("forbidden character '{ch}' at index {index}")]
    ForbiddenCharacter { ch: char, index: usize },
}

/// Invalid table or file name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid name '{name}': {kind}")]
pub struct NameError {
    /// The rejected name
    pub name: String,
    /// Why it was rejected
    pub kind: NameErrorKind,
}

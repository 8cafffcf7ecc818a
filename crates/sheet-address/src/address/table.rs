//! Table references, optionally qualified by a file (e.g. "Sheet1", "$'My Sheet'",
//! "'data.ods'#$Sheet1")

use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::TableAddressBuilder;
use crate::error::{Error, ParseError, ParseErrorKind, ParseResult, Result};
use crate::flags::Flags;
use crate::name::{self, push_quoted};

/// Bytes escaped when writing a filename; `%` must be escaped so that
/// decoding gives back the original name
const FILENAME_ESCAPES: &AsciiSet = &CONTROLS.add(b'%');

/// A table, optionally inside another file
///
/// The table name is stored unescaped; quoting is applied when formatting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTableAddress"))]
pub struct TableAddress {
    filename: Option<String>,
    name: String,
    flags: Flags,
}

/// Deserialized form, checked through [`TableAddress::new`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTableAddress {
    filename: Option<String>,
    name: String,
    flags: Flags,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTableAddress> for TableAddress {
    type Error = Error;

    fn try_from(raw: RawTableAddress) -> Result<Self> {
        Self::new(raw.filename, raw.name, raw.flags)
    }
}

impl TableAddress {
    /// Create a table address
    ///
    /// Only [`Flags::ABSOLUTE_TABLE`] is kept from `flags`. Fails if `name`
    /// is empty.
    pub fn new(filename: Option<String>, name: impl Into<String>, flags: Flags) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyTableName);
        }
        Ok(Self {
            filename,
            name,
            flags: flags & Flags::ABSOLUTE_TABLE,
        })
    }

    /// Create a relative reference to a table in the current document
    pub fn named(name: impl Into<String>) -> Result<Self> {
        Self::new(None, name, Flags::RELATIVE)
    }

    /// Start building a table address
    pub fn builder() -> TableAddressBuilder {
        TableAddressBuilder::default()
    }

    /// Name of the file containing the table, if any
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Unescaped table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute flags of this address
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Whether the table is written with `$`
    pub fn is_absolute(&self) -> bool {
        self.flags.contains(Flags::ABSOLUTE_TABLE)
    }

    /// Parse a table reference: `['file'#][$]name`
    ///
    /// # Examples
    /// ```
    /// use sheet_address::TableAddress;
    ///
    /// let table = TableAddress::parse("'My File.ods'#$'My Sheet'").unwrap();
    /// assert_eq!(table.filename(), Some("My File.ods"));
    /// assert_eq!(table.name(), "My Sheet");
    /// assert!(table.is_absolute());
    /// ```
    pub fn parse(s: &str) -> ParseResult<Self> {
        Self::parse_unlogged(s).map_err(|e| {
            log::debug!("rejected table address {s:?}: {e}");
            e
        })
    }

    pub(crate) fn parse_unlogged(s: &str) -> ParseResult<Self> {
        let (filename, table, at) = match name::rfind_unquoted(s, '#') {
            Some(hash) => {
                let filename = name::unescape_filename(&s[..hash])?;
                (Some(filename), &s[hash + 1..], hash + 1)
            }
            None => (None, s, 0),
        };

        let (flags, table, at) = match table.strip_prefix('$') {
            Some(stripped) => (Flags::ABSOLUTE_TABLE, stripped, at + 1),
            None => (Flags::RELATIVE, table, at),
        };

        let unescaped = name::unescape_quotes(table).map_err(|e| e.shifted(at))?;
        if unescaped.is_empty() {
            return Err(ParseError::new(ParseErrorKind::EmptyTableName, at));
        }

        Ok(Self {
            filename,
            name: unescaped.into_owned(),
            flags,
        })
    }

    /// Format as `['file'#][$]name`, quoting where needed
    pub fn format(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 2);

        if let Some(filename) = &self.filename {
            let encoded = utf8_percent_encode(filename, FILENAME_ESCAPES).to_string();
            push_quoted(&mut out, &encoded);
            out.push('#');
        }

        if self.is_absolute() {
            out.push('$');
        }

        // '#' and a leading '$' would be read back as separators
        if self.name.contains('#') || self.name.starts_with('$') {
            push_quoted(&mut out, &self.name);
        } else {
            out.push_str(&name::escape(&self.name));
        }

        out
    }
}

impl fmt::Display for TableAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for TableAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        Self::parse(s)
    }
}

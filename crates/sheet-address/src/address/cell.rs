//! Single cell references (e.g. "A1", "Sheet1.$B$2", "'My File.ods'#$Sheet.B6")

use std::fmt;
use std::str::FromStr;

use super::{split_table, CellAddressBuilder, LocalAddress, RangeAddress, TableAddress};
use crate::error::{ParseError, ParseResult};

/// A cell, optionally qualified by a table
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    table: Option<TableAddress>,
    local: LocalAddress,
}

impl CellAddress {
    /// Create a cell address
    pub fn new(table: Option<TableAddress>, local: LocalAddress) -> Self {
        Self { table, local }
    }

    /// Start building a cell address from row/column/table parts
    pub fn builder() -> CellAddressBuilder {
        CellAddressBuilder::default()
    }

    /// The qualifying table, if any
    pub fn table(&self) -> Option<&TableAddress> {
        self.table.as_ref()
    }

    /// Position within the table
    pub fn local(&self) -> LocalAddress {
        self.local
    }

    /// Parse `[table.]local`
    ///
    /// # Examples
    /// ```
    /// use sheet_address::CellAddress;
    ///
    /// let cell = CellAddress::parse("n.AMJ1").unwrap();
    /// assert_eq!(cell.table().unwrap().name(), "n");
    /// assert_eq!(cell.local().column(), 1023);
    /// assert_eq!(cell.to_string(), "n.AMJ1");
    ///
    /// let cell = CellAddress::parse("'My File.ods'#$Sheet.B6").unwrap();
    /// assert_eq!(cell.table().unwrap().filename(), Some("My File.ods"));
    /// ```
    pub fn parse(s: &str) -> ParseResult<Self> {
        Self::parse_unlogged(s).map_err(|e| {
            log::debug!("rejected cell address {s:?}: {e}");
            e
        })
    }

    fn parse_unlogged(s: &str) -> ParseResult<Self> {
        let (table, local, at) = split_table(s)?;
        let local = LocalAddress::parse(local).map_err(|e| e.shifted(at))?;
        Ok(Self { table, local })
    }

    /// Format as `[table.]local`
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// The one-cell range covering this cell
    pub fn to_range(&self) -> RangeAddress {
        RangeAddress::new(self.table.clone(), self.local, self.local)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(table) = &self.table {
            write!(f, "{table}.")?;
        }
        write!(f, "{}", self.local)
    }
}

impl FromStr for CellAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        Self::parse(s)
    }
}

impl From<LocalAddress> for CellAddress {
    fn from(local: LocalAddress) -> Self {
        Self::new(None, local)
    }
}

//! Builders for assembling addresses from parts without going through text
//!
//! Setters come in pairs: `row(..)` sets a value, `abs_row(..)` sets the same
//! value and also marks it absolute. Setters never clear a flag, so a later
//! relative setter keeps an earlier `abs_` flag.
//!
//! ```
//! use sheet_address::CellAddress;
//!
//! let cell = CellAddress::builder()
//!     .file("My File.ods")
//!     .abs_table("Sheet")
//!     .column(1)
//!     .abs_row(5)
//!     .build()
//!     .unwrap();
//! assert_eq!(cell.to_string(), "'My File.ods'#$Sheet.B$6");
//!
//! // no table setter: no table component
//! let cell = CellAddress::builder().row(0).column(0).build().unwrap();
//! assert!(cell.table().is_none());
//! ```

use super::{CellAddress, LocalAddress, RangeAddress, TableAddress};
use crate::error::{Error, Result};
use crate::flags::Flags;

/// Builder for [`LocalAddress`]
#[derive(Debug, Clone, Default)]
pub struct LocalAddressBuilder {
    row: u32,
    column: u32,
    flags: Flags,
}

impl LocalAddressBuilder {
    /// Create a builder for `A1`
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row (0-based)
    pub fn row(mut self, row: u32) -> Self {
        self.row = row;
        self
    }

    /// Set the row (0-based) and make it absolute
    pub fn abs_row(mut self, row: u32) -> Self {
        self.flags |= Flags::ABSOLUTE_ROW;
        self.row(row)
    }

    /// Set the column (0-based)
    pub fn column(mut self, column: u32) -> Self {
        self.column = column;
        self
    }

    /// Set the column (0-based) and make it absolute
    pub fn abs_column(mut self, column: u32) -> Self {
        self.flags |= Flags::ABSOLUTE_COLUMN;
        self.column(column)
    }

    /// Build the address
    pub fn build(&self) -> LocalAddress {
        LocalAddress::with_flags(self.row, self.column, self.flags)
    }
}

/// Builder for [`TableAddress`]
#[derive(Debug, Clone, Default)]
pub struct TableAddressBuilder {
    file: Option<String>,
    table: Option<String>,
    flags: Flags,
}

impl TableAddressBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file containing the table
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Set the table name (unescaped)
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Set the table name (unescaped) and make it absolute
    pub fn abs_table(mut self, table: impl Into<String>) -> Self {
        self.flags |= Flags::ABSOLUTE_TABLE;
        self.table(table)
    }

    /// Build the table address
    ///
    /// Fails with [`Error::EmptyTableName`] if no table name was set or the
    /// name is empty.
    pub fn build(&self) -> Result<TableAddress> {
        self.build_if_set()?.ok_or(Error::EmptyTableName)
    }

    /// `None` when neither a table nor a file was ever set
    fn build_if_set(&self) -> Result<Option<TableAddress>> {
        match (&self.file, &self.table) {
            (None, None) => Ok(None),
            (_, None) => Err(Error::EmptyTableName),
            (file, Some(table)) => {
                TableAddress::new(file.clone(), table.clone(), self.flags).map(Some)
            }
        }
    }
}

/// Builder for [`CellAddress`]
#[derive(Debug, Clone, Default)]
pub struct CellAddressBuilder {
    table: TableAddressBuilder,
    local: LocalAddressBuilder,
}

impl CellAddressBuilder {
    /// Create a builder for an unqualified `A1`
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file containing the table
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.table = self.table.file(file);
        self
    }

    /// Set the table name
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = self.table.table(table);
        self
    }

    /// Set the table name and make it absolute
    pub fn abs_table(mut self, table: impl Into<String>) -> Self {
        self.table = self.table.abs_table(table);
        self
    }

    /// Set the row (0-based)
    pub fn row(mut self, row: u32) -> Self {
        self.local = self.local.row(row);
        self
    }

    /// Set the row (0-based) and make it absolute
    pub fn abs_row(mut self, row: u32) -> Self {
        self.local = self.local.abs_row(row);
        self
    }

    /// Set the column (0-based)
    pub fn column(mut self, column: u32) -> Self {
        self.local = self.local.column(column);
        self
    }

    /// Set the column (0-based) and make it absolute
    pub fn abs_column(mut self, column: u32) -> Self {
        self.local = self.local.abs_column(column);
        self
    }

    /// Build the cell address
    ///
    /// Fails if a file was set without a table name.
    pub fn build(&self) -> Result<CellAddress> {
        let cell = CellAddress::new(self.table.build_if_set()?, self.local.build());
        log::trace!("built cell address {cell}");
        Ok(cell)
    }
}

/// Builder for [`RangeAddress`]
#[derive(Debug, Clone, Default)]
pub struct RangeAddressBuilder {
    table: TableAddressBuilder,
    from: LocalAddressBuilder,
    to: LocalAddressBuilder,
}

#[allow(clippy::wrong_self_convention)]
impl RangeAddressBuilder {
    /// Create a builder for an unqualified `A1:A1`
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file containing the table
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.table = self.table.file(file);
        self
    }

    /// Set the table name
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = self.table.table(table);
        self
    }

    /// Set the table name and make it absolute
    pub fn abs_table(mut self, table: impl Into<String>) -> Self {
        self.table = self.table.abs_table(table);
        self
    }

    /// Set the first corner's row (0-based)
    pub fn from_row(mut self, row: u32) -> Self {
        self.from = self.from.row(row);
        self
    }

    /// Set the first corner's row (0-based) and make it absolute
    pub fn abs_from_row(mut self, row: u32) -> Self {
        self.from = self.from.abs_row(row);
        self
    }

    /// Set the first corner's column (0-based)
    pub fn from_column(mut self, column: u32) -> Self {
        self.from = self.from.column(column);
        self
    }

    /// Set the first corner's column (0-based) and make it absolute
    pub fn abs_from_column(mut self, column: u32) -> Self {
        self.from = self.from.abs_column(column);
        self
    }

    /// Set the second corner's row (0-based)
    pub fn to_row(mut self, row: u32) -> Self {
        self.to = self.to.row(row);
        self
    }

    /// Set the second corner's row (0-based) and make it absolute
    pub fn abs_to_row(mut self, row: u32) -> Self {
        self.to = self.to.abs_row(row);
        self
    }

    /// Set the second corner's column (0-based)
    pub fn to_column(mut self, column: u32) -> Self {
        self.to = self.to.column(column);
        self
    }

    /// Set the second corner's column (0-based) and make it absolute
    pub fn abs_to_column(mut self, column: u32) -> Self {
        self.to = self.to.abs_column(column);
        self
    }

    /// Build the range address
    ///
    /// Fails if a file was set without a table name.
    pub fn build(&self) -> Result<RangeAddress> {
        let range = RangeAddress::new(
            self.table.build_if_set()?,
            self.from.build(),
            self.to.build(),
        );
        log::trace!("built range address {range}");
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_local_builder() {
        let addr = LocalAddressBuilder::new().abs_column(1).row(5).build();
        assert_eq!(addr, LocalAddress::with_flags(5, 1, Flags::ABSOLUTE_COLUMN));
        assert_eq!(addr.to_string(), "$B6");
    }

    #[test]
    fn test_relative_setter_keeps_flag() {
        let addr = LocalAddressBuilder::new().abs_row(3).row(4).build();
        assert_eq!(addr.row(), 4);
        assert!(addr.is_row_absolute());
    }

    #[test]
    fn test_build_is_repeatable() {
        let builder = CellAddressBuilder::new().table("S").row(2).column(2);
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), "S.C3");
    }

    #[test]
    fn test_table_builder() {
        let table = TableAddressBuilder::new()
            .file("a.ods")
            .abs_table("My Sheet")
            .build()
            .unwrap();
        assert_eq!(table.to_string(), "'a.ods'#$'My Sheet'");

        assert_eq!(
            TableAddressBuilder::new().build().unwrap_err(),
            Error::EmptyTableName
        );
    }

    #[test]
    fn test_no_table_component() {
        let cell = CellAddressBuilder::new().abs_row(0).abs_column(0).build().unwrap();
        assert!(cell.table().is_none());
        assert_eq!(cell.to_string(), "$A$1");

        let range = RangeAddressBuilder::new().to_row(9).to_column(3).build().unwrap();
        assert!(range.table().is_none());
        assert_eq!(range.to_string(), "A1:D10");
    }

    #[test]
    fn test_file_without_table_rejected() {
        assert_eq!(
            CellAddressBuilder::new().file("a.ods").build().unwrap_err(),
            Error::EmptyTableName
        );
        assert_eq!(
            RangeAddressBuilder::new().file("a.ods").build().unwrap_err(),
            Error::EmptyTableName
        );
        assert!(CellAddressBuilder::new().table("").build().is_err());
    }

    #[test]
    fn test_range_builder() {
        let range = RangeAddress::builder()
            .abs_table("Data")
            .abs_from_row(0)
            .abs_from_column(0)
            .to_row(10)
            .abs_to_column(10)
            .build()
            .unwrap();
        assert_eq!(range.to_string(), "$Data.$A$1:$K11");
        assert_eq!(RangeAddress::parse(&range.to_string()).unwrap(), range);
    }
}

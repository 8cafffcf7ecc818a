//! # sheet-address
//!
//! Parsing and formatting of spreadsheet references to cells, ranges and
//! tables, in the dotted OpenDocument style:
//!
//! - [`LocalAddress`] - `A1`, `$B$6`
//! - [`TableAddress`] - `Sheet1`, `$'My Sheet'`, `'My File.ods'#$Sheet`
//! - [`CellAddress`] - `Sheet1.A1`, `'My File.ods'#$Sheet.B6`
//! - [`RangeAddress`] - `A1:K11`, `Sheet1.$A$1:$D$10`
//!
//! Every value formats to exactly one string, and parsing that string gives
//! the value back.
//!
//! ## Example
//!
//! ```rust
//! use sheet_address::{CellAddress, RangeAddress};
//!
//! let cell = CellAddress::parse("'My File.ods'#$Sheet.B6").unwrap();
//! assert_eq!(cell.table().unwrap().name(), "Sheet");
//! assert_eq!(cell.local().row(), 5);
//! assert_eq!(cell.to_string(), "'My File.ods'#$Sheet.B6");
//!
//! // Or assemble one from parts (0-based row/column)
//! let range = RangeAddress::builder()
//!     .table("Data")
//!     .to_row(9)
//!     .to_column(3)
//!     .build()
//!     .unwrap();
//! assert_eq!(range.to_string(), "Data.A1:D10");
//! ```
//!
//! Parsing is purely syntactic: nothing checks that a referenced table or
//! cell exists.

pub mod address;
pub mod error;
pub mod flags;
pub mod name;
pub mod prelude;

pub use address::{
    column_to_letters, letters_to_column, CellAddress, CellAddressBuilder, LocalAddress,
    LocalAddressBuilder, RangeAddress, RangeAddressBuilder, RangeCells, TableAddress,
    TableAddressBuilder,
};
pub use error::{
    Error, NameError, NameErrorKind, NameResult, ParseError, ParseErrorKind, ParseResult, Result,
};
pub use flags::Flags;

/// Quote character used around table and file names
pub const QUOTE: char = '\'';

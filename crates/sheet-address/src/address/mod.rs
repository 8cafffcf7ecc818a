//! Address value types and their parsers/formatters
//!
//! - [`LocalAddress`] - row/column within a table (e.g. "$B$6")
//! - [`TableAddress`] - a table, optionally in another file (e.g. "'a.ods'#Sheet1")
//! - [`CellAddress`] - a local address, optionally table-qualified (e.g. "Sheet1.A1")
//! - [`RangeAddress`] - two local addresses, optionally table-qualified (e.g. "Sheet1.A1:D10")

mod builder;
mod cell;
pub mod column;
mod local;
mod range;
mod table;

pub use builder::{
    CellAddressBuilder, LocalAddressBuilder, RangeAddressBuilder, TableAddressBuilder,
};
pub use cell::CellAddress;
pub use column::{column_to_letters, letters_to_column};
pub use local::LocalAddress;
pub use range::{RangeAddress, RangeCells};
pub use table::TableAddress;

use crate::error::ParseResult;

/// Split `table.local` on the last `.`
///
/// Local addresses never contain a `.`, so the last one always separates
/// the table part, even when the table or file name has quoted dots.
/// Returns the table, the local text and the byte offset of the local text.
fn split_table(s: &str) -> ParseResult<(Option<TableAddress>, &str, usize)> {
    match s.rfind('.') {
        Some(dot) => {
            let table = TableAddress::parse_unlogged(&s[..dot])?;
            Ok((Some(table), &s[dot + 1..], dot + 1))
        }
        None => Ok((None, s, 0)),
    }
}

//! Range references (e.g. "A1:K11", "Sheet1.$A$1:$D$10")

use std::fmt;
use std::str::FromStr;

use super::{split_table, LocalAddress, RangeAddressBuilder, TableAddress};
use crate::error::{ParseError, ParseErrorKind, ParseResult};

/// A rectangular block of cells, optionally qualified by a table
///
/// `from` and `to` are kept as written; they are not reordered into
/// top-left/bottom-right. The geometry helpers work on the normalized
/// bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeAddress {
    table: Option<TableAddress>,
    from: LocalAddress,
    to: LocalAddress,
}

impl RangeAddress {
    /// Create a range address
    pub fn new(table: Option<TableAddress>, from: LocalAddress, to: LocalAddress) -> Self {
        Self { table, from, to }
    }

    /// Start building a range address from row/column/table parts
    pub fn builder() -> RangeAddressBuilder {
        RangeAddressBuilder::default()
    }

    /// The qualifying table, if any
    pub fn table(&self) -> Option<&TableAddress> {
        self.table.as_ref()
    }

    /// First corner, as written
    pub fn from(&self) -> LocalAddress {
        self.from
    }

    /// Second corner, as written
    pub fn to(&self) -> LocalAddress {
        self.to
    }

    /// Parse `[table.]local:local`
    ///
    /// # Examples
    /// ```
    /// use sheet_address::RangeAddress;
    ///
    /// let range = RangeAddress::parse("A1:K11").unwrap();
    /// assert_eq!((range.from().row(), range.from().column()), (0, 0));
    /// assert_eq!((range.to().row(), range.to().column()), (10, 10));
    ///
    /// assert!(RangeAddress::parse("A1-K11").is_err());
    /// ```
    pub fn parse(s: &str) -> ParseResult<Self> {
        Self::parse_unlogged(s).map_err(|e| {
            log::debug!("rejected range address {s:?}: {e}");
            e
        })
    }

    fn parse_unlogged(s: &str) -> ParseResult<Self> {
        let (table, locals, at) = split_table(s)?;
        let colon = locals
            .find(':')
            .ok_or(ParseError::new(ParseErrorKind::MissingRangeSeparator, s.len()))?;

        let from = LocalAddress::parse(&locals[..colon]).map_err(|e| e.shifted(at))?;
        let to = LocalAddress::parse(&locals[colon + 1..]).map_err(|e| e.shifted(at + colon + 1))?;

        Ok(Self { table, from, to })
    }

    /// Format as `[table.]from:to`
    pub fn format(&self) -> String {
        self.to_string()
    }

    fn bounds(&self) -> (u32, u32, u32, u32) {
        (
            self.from.row().min(self.to.row()),
            self.from.column().min(self.to.column()),
            self.from.row().max(self.to.row()),
            self.from.column().max(self.to.column()),
        )
    }

    /// Check if a position lies within this range
    pub fn contains(&self, addr: &LocalAddress) -> bool {
        let (top, left, bottom, right) = self.bounds();
        (top..=bottom).contains(&addr.row()) && (left..=right).contains(&addr.column())
    }

    /// Number of rows in the range
    pub fn row_count(&self) -> u64 {
        let (top, _, bottom, _) = self.bounds();
        u64::from(bottom - top) + 1
    }

    /// Number of columns in the range
    pub fn column_count(&self) -> u64 {
        let (_, left, _, right) = self.bounds();
        u64::from(right - left) + 1
    }

    /// Total number of cells, saturating at `u64::MAX`
    pub fn cell_count(&self) -> u64 {
        self.row_count().saturating_mul(self.column_count())
    }

    /// Iterate over all positions in the range, row by row
    ///
    /// The yielded addresses are relative.
    pub fn cells(&self) -> RangeCells {
        let (top, left, bottom, right) = self.bounds();
        RangeCells {
            left,
            bottom,
            right,
            next: Some((top, left)),
        }
    }
}

impl fmt::Display for RangeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(table) = &self.table {
            write!(f, "{table}.")?;
        }
        write!(f, "{}:{}", self.from, self.to)
    }
}

impl FromStr for RangeAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        Self::parse(s)
    }
}

/// Iterator over the positions in a [`RangeAddress`]
#[derive(Debug, Clone)]
pub struct RangeCells {
    left: u32,
    bottom: u32,
    right: u32,
    next: Option<(u32, u32)>,
}

impl Iterator for RangeCells {
    type Item = LocalAddress;

    fn next(&mut self) -> Option<Self::Item> {
        let (row, col) = self.next?;

        self.next = if col < self.right {
            Some((row, col + 1))
        } else if row < self.bottom {
            Some((row + 1, self.left))
        } else {
            None
        };

        Some(LocalAddress::new(row, col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some((row, col)) = self.next else {
            return (0, Some(0));
        };
        let width = u64::from(self.right - self.left) + 1;
        let remaining = u64::from(self.bottom - row)
            .saturating_mul(width)
            .saturating_add(u64::from(self.right - col) + 1);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

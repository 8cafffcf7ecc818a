//! Absolute/relative reference flags

use bitflags::bitflags;

bitflags! {
    /// Which parts of a reference are absolute (written with a leading `$`)
    ///
    /// The flags are independent: a reference may be column-absolute and
    /// row-relative at the same time. Combine them with `|`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Flags: u8 {
        /// `$A1`
        const ABSOLUTE_COLUMN = 0b001;
        /// `A$1`
        const ABSOLUTE_ROW = 0b010;
        /// `$Sheet1.A1`
        const ABSOLUTE_TABLE = 0b100;
    }
}

impl Flags {
    /// No absolute parts
    pub const RELATIVE: Self = Self::empty();

    /// Flags that belong to a local (row/column) address
    pub const LOCAL: Self = Self::ABSOLUTE_COLUMN.union(Self::ABSOLUTE_ROW);
}

impl Default for Flags {
    fn default() -> Self {
        Self::RELATIVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_combine() {
        let flags = Flags::ABSOLUTE_COLUMN | Flags::ABSOLUTE_ROW;
        assert!(flags.contains(Flags::ABSOLUTE_COLUMN));
        assert!(flags.contains(Flags::ABSOLUTE_ROW));
        assert!(!flags.contains(Flags::ABSOLUTE_TABLE));
        assert_eq!(flags, Flags::LOCAL);
    }

    #[test]
    fn test_relative_is_empty() {
        assert!(Flags::RELATIVE.is_empty());
        assert_eq!(Flags::default(), Flags::RELATIVE);
        assert_eq!(Flags::RELATIVE | Flags::ABSOLUTE_TABLE, Flags::ABSOLUTE_TABLE);
    }
}

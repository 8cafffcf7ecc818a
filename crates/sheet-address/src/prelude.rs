//! Prelude module - common imports for sheet-address users
//!
//! ```rust
//! use sheet_address::prelude::*;
//! ```

pub use crate::{
    // Column letters
    column_to_letters,
    letters_to_column,
    // Name quoting and validation
    name,
    // Value types
    CellAddress,
    // Builders
    CellAddressBuilder,
    // Error types
    Error,
    Flags,
    LocalAddress,
    LocalAddressBuilder,
    NameError,
    ParseError,
    ParseErrorKind,
    RangeAddress,
    RangeAddressBuilder,
    Result,
    TableAddress,
    TableAddressBuilder,
};

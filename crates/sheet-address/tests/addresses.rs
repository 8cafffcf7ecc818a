//! Parsing and formatting of concrete references, as they appear in documents

use pretty_assertions::assert_eq;
use sheet_address::prelude::*;

#[test]
fn test_column_vectors() {
    let vectors = [
        (0, "A"),
        (25, "Z"),
        (26, "AA"),
        (27, "AB"),
        (52, "BA"),
        (1023, "AMJ"),
    ];
    for (col, letters) in vectors {
        assert_eq!(column_to_letters(col), letters);
        assert_eq!(letters_to_column(letters).unwrap(), col);
    }
}

#[test]
fn test_local_examples() {
    let addr = LocalAddress::parse("A5").unwrap();
    assert_eq!((addr.row(), addr.column()), (4, 0));
    assert_eq!(addr.flags(), Flags::RELATIVE);

    let addr = LocalAddress::parse("$B$6").unwrap();
    assert_eq!((addr.row(), addr.column()), (5, 1));
    assert_eq!(addr.flags(), Flags::ABSOLUTE_COLUMN | Flags::ABSOLUTE_ROW);

    assert!(LocalAddress::parse("$B$6$").is_err());
}

#[test]
fn test_cell_examples() {
    let cell = CellAddress::parse("n.AMJ1").unwrap();
    assert_eq!(cell.table().unwrap().name(), "n");
    assert!(!cell.table().unwrap().is_absolute());
    assert_eq!(cell.to_string(), "n.AMJ1");

    let cell = CellAddress::parse("'My File.ods'#$Sheet.B6").unwrap();
    let table = cell.table().unwrap();
    assert_eq!(table.filename(), Some("My File.ods"));
    assert_eq!(table.name(), "Sheet");
    assert!(table.is_absolute());
    assert_eq!(cell.local(), LocalAddress::new(5, 1));
}

#[test]
fn test_range_examples() {
    let range = RangeAddress::parse("A1:K11").unwrap();
    assert_eq!(range.from(), LocalAddress::new(0, 0));
    assert_eq!(range.to(), LocalAddress::new(10, 10));

    let range = RangeAddress::parse("Sheet1.A1:D10").unwrap();
    assert_eq!(range.table().unwrap().name(), "Sheet1");
    assert_eq!(range.cell_count(), 40);
}

#[test]
fn test_name_examples() {
    assert_eq!(name::escape("no_problem"), "no_problem");
    assert_eq!(name::escape("a space"), "'a space'");
    assert_eq!(name::escape("a ' quote"), "'a '' quote'");

    assert!(name::check("'leading quote").is_err());
    assert!(name::check("name[").is_err());
    assert!(name::check("ok name").is_ok());
}

#[test]
fn test_invalid_inputs() {
    let cases: [(&str, fn(&str) -> bool); 3] = [
        ("", |s| LocalAddress::parse(s).is_err()),
        ("6A", |s| LocalAddress::parse(s).is_err()),
        ("A1-K11", |s| RangeAddress::parse(s).is_err()),
    ];
    for (input, fails) in cases {
        assert!(fails(input), "{input:?} should be rejected");
    }

    assert_eq!(
        RangeAddress::parse("A1-K11").unwrap_err().kind,
        ParseErrorKind::MissingRangeSeparator
    );
}

#[test]
fn test_canonical_strings_roundtrip() {
    for text in [
        "A1",
        "$A$1",
        "Sheet1.B2",
        "$Sheet1.$B2",
        "'My Sheet'.C$3",
        "'My File.ods'#$Sheet.B6",
        "'it''s'.XFD1048576",
    ] {
        assert_eq!(CellAddress::parse(text).unwrap().to_string(), text);
    }

    for text in ["A1:B2", "'a.b'.$A$1:$Z$100", "'x.ods'#T.C3:A1"] {
        assert_eq!(RangeAddress::parse(text).unwrap().to_string(), text);
    }
}

#[test]
fn test_errors_convert_to_umbrella() {
    fn parse_both(cell: &str, table_name: &str) -> sheet_address::Result<CellAddress> {
        name::check(table_name)?;
        Ok(CellAddress::parse(cell)?)
    }

    assert!(matches!(parse_both("A1", "bad/name"), Err(Error::Name(_))));
    assert!(matches!(parse_both("A0", "good"), Err(Error::Parse(_))));
    assert!(parse_both("S.A1", "S").is_ok());
}

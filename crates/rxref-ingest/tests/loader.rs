//! Loader tests over synthetic CSV exports.

use std::io::Write;

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use rxref_ingest::{load_registry, IngestError};

const HEADER: &str = "Reference Product,Active Ingredient (INN),Trade Name,Dosage Form,\
Strength,MA Holder,Country,MA Number,MA Date,Patient Group Exclusions";

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file
}

#[test]
fn loads_rows_and_forward_fills_merged_cells() {
    let file = write_csv(&format!(
        "{HEADER}\n\
         Glucophage,Metformin,Glucophage,film-coated tablets,500 mg,Merck,France,LP-001,2011-03-01,none\n\
         ,,Glucophage 850,,850 mg,Merck,France,LP-002,01.04.2012,\n\
         ,,Glucophage 1000,,1000 mg,Merck,France,LP-003,,\n"
    ));

    let rows = load_registry(file.path()).expect("load registry");
    assert_eq!(rows.len(), 3);

    // Second row inherits the merged reference/ingredient/form cells.
    assert_eq!(rows[1].reference_product, "Glucophage");
    assert_eq!(rows[1].ingredient, "Metformin");
    assert_eq!(rows[1].form_text, "film-coated tablets");
    assert_eq!(rows[1].trade_name, "Glucophage 850");
    assert_eq!(
        rows[0].authorization_date,
        Some(NaiveDate::from_ymd_opt(2011, 3, 1).expect("valid date"))
    );
    assert_eq!(
        rows[1].authorization_date,
        Some(NaiveDate::from_ymd_opt(2012, 4, 1).expect("valid date"))
    );
    assert_eq!(rows[2].authorization_date, None);
    assert_eq!(rows[0].patient_exclusions.as_deref(), Some("none"));
    // Exclusions are merged too, so the blank cells inherit the value.
    assert_eq!(rows[2].patient_exclusions.as_deref(), Some("none"));
}

#[test]
fn rows_without_trade_name_are_dropped() {
    let file = write_csv(&format!(
        "{HEADER}\n\
         Glucophage,Metformin,Glucophage,tablets,500 mg,,,,,\n\
         ,,,tablets,850 mg,,,,,\n"
    ));

    let rows = load_registry(file.path()).expect("load registry");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].trade_name, "Glucophage");
}

#[test]
fn header_row_is_located_behind_a_title_preamble() {
    let file = write_csv(&format!(
        "State register of reference products,,,,,,,,,\n\
         {HEADER}\n\
         Glucophage,Metformin,Glucophage,tablets,500 mg,,,,,\n"
    ));

    let rows = load_registry(file.path()).expect("load registry");
    assert_eq!(rows.len(), 1);
}

#[test]
fn missing_columns_are_reported_by_name() {
    let file = write_csv(
        "Reference Product,Trade Name\n\
         Glucophage,Glucophage\n",
    );

    let error = load_registry(file.path()).expect_err("columns must be validated");
    match error {
        IngestError::MissingColumns { columns } => {
            assert!(columns.contains(&"Strength".to_string()));
            assert!(!columns.contains(&"Trade Name".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn sheet_without_registry_columns_is_rejected() {
    let file = write_csv("a,b,c\n1,2,3\n");

    let error = load_registry(file.path()).expect_err("header must be located");
    assert!(matches!(error, IngestError::HeaderNotFound { .. }));
}

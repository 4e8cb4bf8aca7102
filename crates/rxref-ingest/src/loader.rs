//! Registry loading: column resolution, merged-cell forward-fill and row
//! construction.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use rxref_model::RegistryRow;

use crate::csv_table::{normalize_header, read_csv_table, CsvTable};
use crate::error::{IngestError, Result};

pub const COL_REFERENCE: &str = "Reference Product";
pub const COL_INGREDIENT: &str = "Active Ingredient (INN)";
pub const COL_TRADE: &str = "Trade Name";
pub const COL_FORM: &str = "Dosage Form";
pub const COL_DOSAGE: &str = "Strength";
pub const COL_HOLDER: &str = "MA Holder";
pub const COL_COUNTRY: &str = "Country";
pub const COL_NUMBER: &str = "MA Number";
pub const COL_DATE: &str = "MA Date";
pub const COL_EXCLUSIONS: &str = "Patient Group Exclusions";

const REQUIRED_COLUMNS: &[&str] = &[
    COL_REFERENCE,
    COL_INGREDIENT,
    COL_TRADE,
    COL_FORM,
    COL_DOSAGE,
    COL_HOLDER,
    COL_COUNTRY,
    COL_NUMBER,
    COL_DATE,
    COL_EXCLUSIONS,
];

/// Date formats seen in registry exports, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

/// Column indices resolved against the sheet header.
struct Columns {
    reference: usize,
    ingredient: usize,
    trade: usize,
    form: usize,
    dosage: usize,
    holder: usize,
    country: usize,
    number: usize,
    date: usize,
    exclusions: usize,
}

impl Columns {
    fn resolve(table: &CsvTable) -> Result<Self> {
        let find = |name: &str| {
            table
                .headers
                .iter()
                .position(|header| normalize_header(header) == name)
        };
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| find(name).is_none())
            .map(|name| (*name).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(IngestError::MissingColumns { columns: missing });
        }
        // Lookups above guarantee presence.
        let index = |name: &str| find(name).unwrap_or_default();
        Ok(Self {
            reference: index(COL_REFERENCE),
            ingredient: index(COL_INGREDIENT),
            trade: index(COL_TRADE),
            form: index(COL_FORM),
            dosage: index(COL_DOSAGE),
            holder: index(COL_HOLDER),
            country: index(COL_COUNTRY),
            number: index(COL_NUMBER),
            date: index(COL_DATE),
            exclusions: index(COL_EXCLUSIONS),
        })
    }
}

/// Carries the last seen value of each merged-cell column down through the
/// rows that arrived blank underneath it.
#[derive(Default)]
struct ForwardFill {
    reference: String,
    ingredient: String,
    form: String,
    exclusions: String,
}

impl ForwardFill {
    fn apply(&mut self, field: Field, value: &str) -> String {
        let slot = match field {
            Field::Reference => &mut self.reference,
            Field::Ingredient => &mut self.ingredient,
            Field::Form => &mut self.form,
            Field::Exclusions => &mut self.exclusions,
        };
        if !value.is_empty() {
            *slot = value.to_string();
        }
        slot.clone()
    }
}

enum Field {
    Reference,
    Ingredient,
    Form,
    Exclusions,
}

/// Load the reference registry from a CSV export.
///
/// Merged cells in the source sheet surface as blank cells under the first
/// row of a run; the reference-product, ingredient, dosage-form and
/// exclusion columns are forward-filled accordingly. Rows still lacking a
/// trade name or reference product after the fill carry no product entry
/// and are dropped.
pub fn load_registry(path: &Path) -> Result<Vec<RegistryRow>> {
    let table = read_csv_table(path, &[COL_REFERENCE, COL_TRADE])?;
    let columns = Columns::resolve(&table)?;

    let mut fill = ForwardFill::default();
    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for record in &table.rows {
        let cell = |idx: usize| record.get(idx).map(String::as_str).unwrap_or("").trim();

        let reference = fill.apply(Field::Reference, cell(columns.reference));
        let ingredient = fill.apply(Field::Ingredient, cell(columns.ingredient));
        let form = fill.apply(Field::Form, cell(columns.form));
        let exclusions = fill.apply(Field::Exclusions, cell(columns.exclusions));

        let trade = cell(columns.trade);
        if trade.is_empty() || reference.is_empty() {
            dropped += 1;
            continue;
        }

        rows.push(RegistryRow {
            reference_product: reference,
            ingredient,
            trade_name: trade.to_string(),
            form_text: form,
            dosage_text: cell(columns.dosage).to_string(),
            holder: optional(cell(columns.holder)),
            country: optional(cell(columns.country)),
            authorization_number: optional(cell(columns.number)),
            authorization_date: parse_date(cell(columns.date)),
            patient_exclusions: optional(&exclusions),
        });
    }

    info!(
        path = %path.display(),
        rows = rows.len(),
        dropped,
        "registry loaded"
    );
    Ok(rows)
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    debug!(value, "unparseable authorization date");
    None
}

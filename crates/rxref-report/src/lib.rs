//! JSON result documents for reference searches.
//!
//! A [`SearchReport`] captures a completed search end to end: what was
//! asked, which reference was selected, the full accepted-row set for that
//! reference (with parsed classification axes) and every option that was
//! on the table. Callers serialize it wherever they need; [`write_report`]
//! covers the common write-to-file case.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use rxref_core::ClassifiedRow;
use rxref_model::{ParsedForm, ReferenceOption};

/// The user's answers exactly as entered, before normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryEcho {
    pub ingredient: String,
    pub routes: String,
    pub base_form: String,
    pub release_type: String,
    pub dosage: String,
}

/// One selected registry row with its classification attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub reference_product: String,
    pub ingredient: String,
    pub trade_name: String,
    pub form: String,
    pub dosage: String,
    pub holder: Option<String>,
    pub country: Option<String>,
    pub authorization_number: Option<String>,
    pub authorization_date: Option<NaiveDate>,
    pub patient_exclusions: Option<String>,
    pub parsed: ParsedForm,
}

impl From<&ClassifiedRow> for ReportRow {
    fn from(classified: &ClassifiedRow) -> Self {
        let row = &classified.row;
        Self {
            reference_product: row.reference_product.clone(),
            ingredient: row.ingredient.clone(),
            trade_name: row.trade_name.clone(),
            form: row.form_text.clone(),
            dosage: row.dosage_text.clone(),
            holder: row.holder.clone(),
            country: row.country.clone(),
            authorization_number: row.authorization_number.clone(),
            authorization_date: row.authorization_date,
            patient_exclusions: row.patient_exclusions.clone(),
            parsed: (*classified.parsed).clone(),
        }
    }
}

/// Complete record of one search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    /// Local generation timestamp, second precision.
    pub generated_at: String,
    /// Path of the registry sheet the search ran against.
    pub source_file: String,
    pub query: QueryEcho,
    pub selected_reference: String,
    pub selected_rows_count: usize,
    pub selected_rows: Vec<ReportRow>,
    pub options_count: usize,
    pub options: Vec<ReferenceOption>,
}

/// Assemble the report for a selected reference.
pub fn build_report(
    source_file: &Path,
    query: QueryEcho,
    selected_reference: &str,
    selected_rows: &[&ClassifiedRow],
    options: &[ReferenceOption],
) -> SearchReport {
    SearchReport {
        generated_at: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        source_file: source_file.display().to_string(),
        query,
        selected_reference: selected_reference.to_string(),
        selected_rows_count: selected_rows.len(),
        selected_rows: selected_rows.iter().map(|row| ReportRow::from(*row)).collect(),
        options_count: options.len(),
        options: options.to_vec(),
    }
}

/// Serialize the report as pretty-printed JSON to `path`.
pub fn write_report(path: &Path, report: &SearchReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    fs::write(path, json).with_context(|| format!("write report: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rxref_core::{build_query, find_matches, select_reference_options, Registry};
    use rxref_model::RegistryRow;

    fn sample_registry() -> Registry {
        Registry::classify(vec![RegistryRow {
            reference_product: "Glucophage".to_string(),
            ingredient: "Metformin".to_string(),
            trade_name: "Glucophage".to_string(),
            form_text: "film-coated tablets".to_string(),
            dosage_text: "500 mg".to_string(),
            holder: Some("Merck".to_string()),
            country: Some("France".to_string()),
            authorization_number: Some("LP-001".to_string()),
            authorization_date: None,
            patient_exclusions: None,
        }])
    }

    #[test]
    fn report_carries_rows_options_and_parsed_axes() {
        let registry = sample_registry();
        let query = build_query("Metformin", "oral", "", "", "");
        let matches = find_matches(&registry, &query);
        let options = select_reference_options(&matches);

        let report = build_report(
            Path::new("registry.csv"),
            QueryEcho {
                ingredient: "Metformin".to_string(),
                routes: "oral".to_string(),
                ..QueryEcho::default()
            },
            "Glucophage",
            &matches,
            &options,
        );

        assert_eq!(report.selected_rows_count, 1);
        assert_eq!(report.options_count, 1);
        assert_eq!(report.selected_rows[0].parsed.base_form, "tablet");

        let value = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(value["selected_reference"], "Glucophage");
        assert_eq!(value["selected_rows"][0]["parsed"]["routes"][0], "oral");
    }
}

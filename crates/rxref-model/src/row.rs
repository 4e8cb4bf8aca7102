//! Registry row as loaded from the reference-product sheet.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One marketed-product entry of the reference registry.
///
/// The loader guarantees that `reference_product` and `trade_name` are
/// non-empty for every retained row, and that the merged-cell columns
/// (`reference_product`, `ingredient`, `form_text`, `patient_exclusions`)
/// have already been forward-filled from the preceding row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryRow {
    /// Reference (originator) product name.
    pub reference_product: String,

    /// Active ingredient: INN, grouping or chemical name.
    pub ingredient: String,

    /// Trade name under which this entry is marketed.
    pub trade_name: String,

    /// Raw dosage-form description, e.g. "film-coated tablets, extended release".
    pub form_text: String,

    /// Raw strength field; may list several strengths in one cell.
    pub dosage_text: String,

    /// Marketing authorization holder.
    pub holder: Option<String>,

    /// Country of the authorization holder.
    pub country: Option<String>,

    /// Marketing authorization number.
    pub authorization_number: Option<String>,

    /// Marketing authorization date.
    pub authorization_date: Option<NaiveDate>,

    /// Notes on patient groups excluded from reference use.
    pub patient_exclusions: Option<String>,
}

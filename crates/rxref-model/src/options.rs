//! Grouped match results offered to the caller for reference selection.

use serde::{Deserialize, Serialize};

/// Maximum number of representative rows kept per reference option.
pub const SAMPLE_ROWS_PER_OPTION: usize = 3;

/// Abbreviated view of one matching row, for display during selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRow {
    pub trade_name: String,
    pub form: String,
    pub dosage: String,
}

/// One candidate reference product, aggregating all accepted rows that
/// share its name.
///
/// Options are always produced in a deterministic order (case-normalized
/// name, then exact name) so repeated searches over the same registry give
/// byte-identical listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceOption {
    /// Reference-product name exactly as it appears in the registry.
    pub reference_product: String,

    /// Number of accepted rows grouped under this name.
    pub rows_count: usize,

    /// Up to [`SAMPLE_ROWS_PER_OPTION`] representative rows, in registry
    /// order.
    pub sample_rows: Vec<SampleRow>,
}

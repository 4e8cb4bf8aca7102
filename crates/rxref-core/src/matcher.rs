//! Row-level acceptance and grouping of matches into reference options.

use std::collections::BTreeMap;

use rxref_model::{Query, ReferenceOption, RouteToken, SampleRow, SAMPLE_ROWS_PER_OPTION};

use crate::dosage::dosage_matches;
use crate::normalize::normalize_text;
use crate::registry::{ClassifiedRow, Registry};

/// Decide whether a classified row satisfies a query.
///
/// Every specified axis must hold; an empty query field is no constraint:
/// - the normalized ingredient must match exactly;
/// - base form and release type, when queried, must equal the classified
///   values;
/// - when the query names routes, the row's route set must be non-empty
///   and cover all of them; a row with no determinable route can never
///   satisfy a route-constrained query, while a query may under-specify
///   routes relative to a multi-route row;
/// - the dosage matcher must accept the pair.
pub fn row_matches(row: &ClassifiedRow, query: &Query) -> bool {
    if query.ingredient != row.ingredient_norm {
        return false;
    }

    if !query.base_form.is_empty() && query.base_form != row.parsed.base_form {
        return false;
    }

    if !query.release_type.is_empty() && query.release_type != row.parsed.release_type.as_str() {
        return false;
    }

    if !query.routes.is_empty() {
        if row.parsed.routes.is_empty() {
            return false;
        }
        let covered = query.routes.iter().all(|token| match token {
            RouteToken::Canonical(route) => row.parsed.routes.contains(route),
            // Freeform tokens name no canonical route, so no classified
            // row can cover them; the query degrades to zero matches.
            RouteToken::Freeform(_) => false,
        });
        if !covered {
            return false;
        }
    }

    dosage_matches(&query.dosage, &row.row.dosage_text)
}

/// Scan the registry and return every accepted row, in load order.
pub fn find_matches<'a>(registry: &'a Registry, query: &Query) -> Vec<&'a ClassifiedRow> {
    registry
        .rows()
        .iter()
        .filter(|row| row_matches(row, query))
        .collect()
}

/// Group accepted rows by reference-product name into selection options.
///
/// Options are sorted by case-normalized name (exact name as tie-breaker)
/// so repeated invocations over the same row set are byte-identical. Each
/// option keeps up to [`SAMPLE_ROWS_PER_OPTION`] rows for display.
pub fn select_reference_options(rows: &[&ClassifiedRow]) -> Vec<ReferenceOption> {
    let mut groups: BTreeMap<(String, String), Vec<&ClassifiedRow>> = BTreeMap::new();
    for &row in rows {
        let name = row.row.reference_product.clone();
        groups
            .entry((normalize_text(&name), name))
            .or_default()
            .push(row);
    }

    groups
        .into_iter()
        .map(|((_, name), group)| ReferenceOption {
            reference_product: name,
            rows_count: group.len(),
            sample_rows: group
                .iter()
                .take(SAMPLE_ROWS_PER_OPTION)
                .map(|row| SampleRow {
                    trade_name: row.row.trade_name.clone(),
                    form: row.row.form_text.clone(),
                    dosage: row.row.dosage_text.clone(),
                })
                .collect(),
        })
        .collect()
}

/// All accepted rows belonging to the chosen reference product, in load
/// order. The name is compared exactly, as listed in the options.
pub fn rows_for_reference<'a>(
    rows: &[&'a ClassifiedRow],
    reference_product: &str,
) -> Vec<&'a ClassifiedRow> {
    rows.iter()
        .filter(|row| row.row.reference_product == reference_product)
        .copied()
        .collect()
}

//! Normalization-and-matching engine for the reference-product registry.
//!
//! The engine is pure in-memory text processing: raw registry rows are
//! classified once at load time ([`Registry::classify`]), raw user answers
//! are normalized once per search ([`build_query`]), and matching scans
//! classified rows against the query. No function here performs I/O or
//! blocks.

pub mod dosage;
pub mod form;
pub mod matcher;
pub mod normalize;
pub mod query;
pub mod registry;

pub use dosage::dosage_matches;
pub use form::classify_form;
pub use matcher::{find_matches, row_matches, rows_for_reference, select_reference_options};
pub use normalize::{normalize_compact, normalize_text};
pub use query::{
    build_query, normalize_query_base_form, normalize_query_release_type, parse_query_routes,
};
pub use registry::{ClassifiedRow, Registry, RegistryCache};

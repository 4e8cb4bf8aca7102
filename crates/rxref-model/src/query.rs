//! Normalized user search request.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::form::RouteToken;

/// A user query after normalization.
///
/// Every field is already in the canonical vocabulary the form classifier
/// produces, so matching is plain equality and subset testing. An empty
/// field means "no constraint" on that axis; see `rxref-core` for the
/// constructors that derive a `Query` from raw user text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Query {
    /// Normalized active-ingredient name. Compared verbatim, no stemming.
    pub ingredient: String,

    /// Route constraints. Empty set = unconstrained.
    pub routes: BTreeSet<RouteToken>,

    /// Canonical base form, or normalized free text when no stem was
    /// recognized. Empty = unconstrained.
    pub base_form: String,

    /// Canonical release-type label, or normalized free text. Empty =
    /// unconstrained.
    pub release_type: String,

    /// Dosage strength as entered, compared via the dosage matcher.
    /// Empty = unconstrained.
    pub dosage: String,
}

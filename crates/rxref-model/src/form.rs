//! Structured classification of a raw dosage-form description.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Release kinetics of a dosage form.
///
/// Closed vocabulary: the classifier never produces a value outside this
/// enum. `Conventional` is the unmarked default when no modifier wording is
/// detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    /// Immediate release, no modifier wording present.
    #[default]
    Conventional,
    /// Enteric-coated / gastro-resistant.
    Enteric,
    /// Prolonged or extended release, retard forms.
    Prolonged,
    /// Modified, sustained, controlled or delayed release.
    Modified,
}

impl ReleaseType {
    /// Canonical lowercase label, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conventional => "conventional",
            Self::Enteric => "enteric",
            Self::Prolonged => "prolonged",
            Self::Modified => "modified",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical administration route.
///
/// The variant order is the evaluation order of the classifier's route
/// table and the sort order of route sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Intravenous,
    Intramuscular,
    Subcutaneous,
    Intradermal,
    Inhalation,
    Nasal,
    Ophthalmic,
    Otic,
    Rectal,
    Vaginal,
    Topical,
    Local,
    Oral,
    Transdermal,
    Intracavitary,
    Intravascular,
    Intravesical,
    Injection,
    Infusion,
}

impl Route {
    /// Canonical lowercase label, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intravenous => "intravenous",
            Self::Intramuscular => "intramuscular",
            Self::Subcutaneous => "subcutaneous",
            Self::Intradermal => "intradermal",
            Self::Inhalation => "inhalation",
            Self::Nasal => "nasal",
            Self::Ophthalmic => "ophthalmic",
            Self::Otic => "otic",
            Self::Rectal => "rectal",
            Self::Vaginal => "vaginal",
            Self::Topical => "topical",
            Self::Local => "local",
            Self::Oral => "oral",
            Self::Transdermal => "transdermal",
            Self::Intracavitary => "intracavitary",
            Self::Intravascular => "intravascular",
            Self::Intravesical => "intravesical",
            Self::Injection => "injection",
            Self::Infusion => "infusion",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A route constraint coming from user input.
///
/// User text that does not resolve to a canonical [`Route`] is kept as a
/// normalized free-text token instead of being discarded. A freeform token
/// can never be satisfied by a classified registry row, so such queries
/// degrade to zero matches rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteToken {
    Canonical(Route),
    Freeform(String),
}

impl fmt::Display for RouteToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canonical(route) => f.write_str(route.as_str()),
            Self::Freeform(text) => f.write_str(text),
        }
    }
}

/// Structured classification of one raw dosage-form string.
///
/// Computed once per distinct raw string at registry load time and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedForm {
    /// The source text exactly as it appeared in the registry.
    pub raw: String,

    /// Canonical base form keyword ("tablet", "cream", ...), or the leading
    /// token of the text when no keyword matched. Empty only for empty input.
    pub base_form: String,

    /// Release kinetics derived from modifier wording.
    pub release_type: ReleaseType,

    /// Administration routes named or implied by the form text. May be
    /// empty when the text gives no usable clue.
    pub routes: BTreeSet<Route>,
}

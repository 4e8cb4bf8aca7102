//! Normalization of free-text user answers into the classifier vocabulary.
//!
//! Registry rows are classified by `crate::form`; these functions map user
//! input for the same three axes (routes, base form, release type) into the
//! same canonical values so matching reduces to equality and subset tests.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use rxref_model::{Query, ReleaseType, RouteToken};

use crate::form::extract_routes;
use crate::normalize::normalize_text;

/// Separators accepted between route names in user input.
static ROUTE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;/]| and ").expect("invalid separator pattern"));

/// Wordings users enter for an unmarked release type.
const CONVENTIONAL_SYNONYMS: &[&str] = &[
    "conventional",
    "immediate",
    "immediate release",
    "unmodified",
    "standard",
    "normal",
];

/// Stem aliases for common base forms, checked before the full keyword
/// scan. Order matters: earlier stems win when several occur in the text.
const BASE_FORM_STEMS: &[(&str, &[&str])] = &[
    ("tablet", &["tab"]),
    ("capsule", &["caps"]),
    ("solution", &["solut"]),
    ("powder", &["powd"]),
    ("lyophilisate", &["lyophil"]),
    ("granules", &["granul"]),
    ("suspension", &["suspen"]),
    ("aerosol", &["aerosol"]),
    ("spray", &["spray"]),
    ("drops", &["drop"]),
    ("suppository", &["suppositor"]),
    ("gel", &["gel"]),
    ("cream", &["cream"]),
    ("ointment", &["ointment"]),
    ("patch", &["patch"]),
    ("concentrate", &["concentrat"]),
];

/// Canonical keywords for the containment fallback, mirroring the
/// classifier's base-form table.
const BASE_FORM_KEYWORDS: &[&str] = &[
    "implant",
    "tablet",
    "capsule",
    "lyophilisate",
    "powder",
    "granules",
    "concentrate",
    "solvent",
    "solution",
    "suspension",
    "emulsion",
    "syrup",
    "drops",
    "spray",
    "aerosol",
    "patch",
    "suppository",
    "ointment",
    "cream",
    "gel",
    "lotion",
    "foam",
    "shampoo",
    "paste",
    "liniment",
    "tincture",
    "extract",
];

/// Parse user route text into a set of route tokens.
///
/// The classifier's route-phrase table is tried first (with no base form to
/// anchor an inference fallback). When nothing canonical is recognized the
/// text is split on common separators and each normalized chunk is kept as
/// an opaque token, degrading gracefully instead of failing closed.
pub fn parse_query_routes(value: &str) -> BTreeSet<RouteToken> {
    let text = normalize_text(value);
    if text.is_empty() {
        return BTreeSet::new();
    }

    let canonical = extract_routes(&text, "");
    if !canonical.is_empty() {
        return canonical.into_iter().map(RouteToken::Canonical).collect();
    }

    ROUTE_SEPARATORS
        .split(&text)
        .map(normalize_text)
        .filter(|chunk| !chunk.is_empty())
        .map(RouteToken::Freeform)
        .collect()
}

/// Normalize user release-type text to the closed vocabulary, or pass it
/// through as normalized free text for literal-equality matching against
/// unusual registry values.
pub fn normalize_query_release_type(value: &str) -> String {
    let text = normalize_text(value);
    if text.is_empty() {
        return text;
    }
    if text.contains("enteric") || text.contains("gastro") {
        return ReleaseType::Enteric.as_str().to_string();
    }
    if text.contains("prolong") || text.contains("retard") || text.contains("extended") {
        return ReleaseType::Prolonged.as_str().to_string();
    }
    if text.contains("modif")
        || text.contains("controlled")
        || text.contains("sustained")
        || text.contains("delayed")
        || text.contains("slow")
    {
        return ReleaseType::Modified.as_str().to_string();
    }
    if CONVENTIONAL_SYNONYMS.contains(&text.as_str()) {
        return ReleaseType::Conventional.as_str().to_string();
    }
    text
}

/// Normalize user base-form text: stem aliases first, then containment of
/// any canonical keyword, then pass-through of the normalized text.
pub fn normalize_query_base_form(value: &str) -> String {
    let text = normalize_text(value);
    if text.is_empty() {
        return text;
    }
    for (canonical, stems) in BASE_FORM_STEMS {
        if stems.iter().any(|stem| text.contains(stem)) {
            return (*canonical).to_string();
        }
    }
    for keyword in BASE_FORM_KEYWORDS {
        if text.contains(keyword) {
            return (*keyword).to_string();
        }
    }
    text
}

/// Derive a [`Query`] from raw user answers. Empty answers become empty
/// fields, which the matcher treats as "no constraint".
pub fn build_query(
    ingredient: &str,
    routes: &str,
    base_form: &str,
    release_type: &str,
    dosage: &str,
) -> Query {
    Query {
        ingredient: normalize_text(ingredient),
        routes: parse_query_routes(routes),
        base_form: normalize_query_base_form(base_form),
        release_type: normalize_query_release_type(release_type),
        dosage: dosage.trim().to_string(),
    }
}

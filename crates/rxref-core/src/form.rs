//! Dosage-form classification.
//!
//! Turns a raw free-text form description ("film-coated tablets, extended
//! release") into a [`ParsedForm`]: canonical base form, release type and
//! administration routes. All rule tables are ordered: the first matching
//! rule wins, so priority is encoded in table order rather than in nested
//! conditionals.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use rxref_model::{ParsedForm, ReleaseType, Route};

use crate::normalize::normalize_text;

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("invalid rule pattern")
}

/// Base-form keywords in priority order. Each entry pairs the canonical
/// keyword with the whole-word pattern that detects it; plural spellings
/// map to the same canonical value.
static BASE_FORM_RULES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("implant", r"\bimplants?\b"),
        ("tablet", r"\btablets?\b"),
        ("capsule", r"\bcapsules?\b"),
        ("lyophilisate", r"\blyophili[sz]ates?\b"),
        ("powder", r"\bpowders?\b"),
        ("granules", r"\bgranules?\b"),
        ("concentrate", r"\bconcentrates?\b"),
        ("solvent", r"\bsolvents?\b"),
        ("solution", r"\bsolutions?\b"),
        ("suspension", r"\bsuspensions?\b"),
        ("emulsion", r"\bemulsions?\b"),
        ("syrup", r"\bsyrups?\b"),
        ("drops", r"\bdrops?\b"),
        ("spray", r"\bsprays?\b"),
        ("aerosol", r"\baerosols?\b"),
        ("patch", r"\bpatch(?:es)?\b"),
        ("suppository", r"\bsuppositor(?:y|ies)\b"),
        ("ointment", r"\bointments?\b"),
        ("cream", r"\bcreams?\b"),
        ("gel", r"\bgels?\b"),
        ("lotion", r"\blotions?\b"),
        ("foam", r"\bfoams?\b"),
        ("shampoo", r"\bshampoos?\b"),
        ("paste", r"\bpastes?\b"),
        ("liniment", r"\bliniments?\b"),
        ("tincture", r"\btinctures?\b"),
        ("extract", r"\bextracts?\b"),
    ]
    .into_iter()
    .map(|(keyword, source)| (keyword, pattern(source)))
    .collect()
});

/// Release-type rule groups, most specific first. Enteric coating outranks
/// prolonged-release wording even when both appear in one description.
static RELEASE_RULES: LazyLock<Vec<(ReleaseType, Vec<Regex>)>> = LazyLock::new(|| {
    vec![
        (
            ReleaseType::Enteric,
            vec![pattern(r"enteric"), pattern(r"gastro[- ]?resistant")],
        ),
        (
            ReleaseType::Prolonged,
            vec![
                pattern(r"prolonged[- ]release"),
                pattern(r"prolonged[- ]action"),
                pattern(r"extended[- ]release"),
                pattern(r"\bretard\b"),
            ],
        ),
        (
            ReleaseType::Modified,
            vec![
                pattern(r"modified[- ]release"),
                pattern(r"sustained[- ]release"),
                pattern(r"controlled[- ]release"),
                pattern(r"delayed[- ]release"),
                pattern(r"slow[- ]release"),
            ],
        ),
    ]
});

/// Route phrase table. Every route whose any alternative matches is added
/// to the result set; a form may legitimately name several routes.
static ROUTE_RULES: LazyLock<Vec<(Route, Vec<Regex>)>> = LazyLock::new(|| {
    vec![
        (
            Route::Intravenous,
            vec![pattern(r"intravenous\w*"), pattern(r"\bi\.?v\b")],
        ),
        (
            Route::Intramuscular,
            vec![pattern(r"intramuscular\w*"), pattern(r"\bi\.?m\b")],
        ),
        (
            Route::Subcutaneous,
            vec![pattern(r"subcutaneous\w*"), pattern(r"\bs\.?c\b")],
        ),
        (Route::Intradermal, vec![pattern(r"intradermal\w*")]),
        (
            Route::Inhalation,
            vec![pattern(r"for inhalation"), pattern(r"\binhalation\w*")],
        ),
        (
            Route::Nasal,
            vec![pattern(r"\bnasal\w*"), pattern(r"intranasal\w*")],
        ),
        (
            Route::Ophthalmic,
            vec![pattern(r"ophthalmic"), pattern(r"\beye\b")],
        ),
        (Route::Otic, vec![pattern(r"\botic\b"), pattern(r"\bear\b")]),
        (Route::Rectal, vec![pattern(r"rectal\w*")]),
        (Route::Vaginal, vec![pattern(r"vaginal\w*")]),
        (
            Route::Topical,
            vec![pattern(r"external use"), pattern(r"\bcutaneous\b")],
        ),
        (Route::Local, vec![pattern(r"local (?:use|application)")]),
        (
            Route::Oral,
            vec![
                pattern(r"\boral\b"),
                pattern(r"peroral\w*"),
                pattern(r"by mouth"),
            ],
        ),
        (Route::Transdermal, vec![pattern(r"transdermal\w*")]),
        (Route::Intracavitary, vec![pattern(r"intracavitary")]),
        (Route::Intravascular, vec![pattern(r"intravascular")]),
        (Route::Intravesical, vec![pattern(r"intravesical")]),
        (Route::Injection, vec![pattern(r"for injection\w*")]),
        (Route::Infusion, vec![pattern(r"for infusion\w*")]),
    ]
});

/// Base forms taken by mouth unless the text says otherwise.
const ORAL_IMPLIED_FORMS: &[&str] = &[
    "tablet",
    "capsule",
    "granules",
    "suspension",
    "syrup",
    "powder",
    "drops",
    "paste",
    "tincture",
    "extract",
];

/// Base forms applied to skin unless the text says otherwise.
const TOPICAL_IMPLIED_FORMS: &[&str] = &[
    "cream", "ointment", "gel", "lotion", "foam", "shampoo", "liniment",
];

/// Classify a raw dosage-form description.
///
/// Total over arbitrary text: malformed input degrades to the leading token
/// as base form, `Conventional` release and an empty route set.
pub fn classify_form(raw: &str) -> ParsedForm {
    let text = normalize_text(raw);
    let base_form = extract_base_form(&text);
    let release_type = extract_release_type(&text);
    let routes = extract_routes(&text, &base_form);
    ParsedForm {
        raw: raw.to_string(),
        base_form,
        release_type,
        routes,
    }
}

/// Pick the base form: first keyword match in table order, falling back to
/// the first comma-delimited, then space-delimited token. Only empty input
/// yields an empty base form.
pub fn extract_base_form(form_text: &str) -> String {
    if form_text.is_empty() {
        return String::new();
    }
    for (keyword, rule) in BASE_FORM_RULES.iter() {
        if rule.is_match(form_text) {
            return (*keyword).to_string();
        }
    }
    let first_clause = form_text.split(',').next().unwrap_or(form_text);
    first_clause
        .split(' ')
        .next()
        .unwrap_or(first_clause)
        .to_string()
}

/// Derive the release type from modifier wording. Groups are evaluated in
/// table order and the first group with any matching alternative wins.
pub fn extract_release_type(form_text: &str) -> ReleaseType {
    for (canonical, alternatives) in RELEASE_RULES.iter() {
        if alternatives.iter().any(|rule| rule.is_match(form_text)) {
            return *canonical;
        }
    }
    ReleaseType::Conventional
}

/// Collect every administration route named in the text. When no route
/// phrase is present the base form may imply one: oral-typical forms mean
/// oral, topical-typical forms mean topical, a patch means transdermal.
/// A suppository without an explicit phrase stays routeless: rectal and
/// vaginal use cannot be told apart from the form alone.
pub fn extract_routes(form_text: &str, base_form: &str) -> BTreeSet<Route> {
    let mut routes = BTreeSet::new();
    for (canonical, alternatives) in ROUTE_RULES.iter() {
        if alternatives.iter().any(|rule| rule.is_match(form_text)) {
            routes.insert(*canonical);
        }
    }

    if routes.is_empty() {
        if ORAL_IMPLIED_FORMS.contains(&base_form) {
            routes.insert(Route::Oral);
        } else if TOPICAL_IMPLIED_FORMS.contains(&base_form) {
            routes.insert(Route::Topical);
        } else if base_form == "patch" {
            routes.insert(Route::Transdermal);
        }
    }

    routes
}

//! Strength compatibility between user input and registry cells.
//!
//! Registries frequently list several strengths for one form in a single
//! cell ("500 mg, 850 mg, 1000 mg") while users type one strength with
//! arbitrary spacing and unit punctuation.

use crate::normalize::{normalize_compact, normalize_text};

/// Decide whether a user-entered strength is compatible with a registry
/// strength field. Checks are ordered and short-circuit on first success:
///
/// 1. an empty user strength is unconstrained and always matches;
/// 2. an empty registry field never matches a non-empty user strength;
/// 3. exact equality after normalization;
/// 4. equality against any delimiter-split part of the registry field;
/// 5. compact (whitespace- and separator-free) equality of the whole
///    strings or against any split part.
pub fn dosage_matches(user_dosage: &str, registry_dosage: &str) -> bool {
    let user_norm = normalize_text(user_dosage);
    if user_norm.is_empty() {
        return true;
    }
    let registry_norm = normalize_text(registry_dosage);
    if registry_norm.is_empty() {
        return false;
    }
    if user_norm == registry_norm {
        return true;
    }

    let parts: Vec<String> = registry_norm
        .split([',', ';'])
        .map(normalize_text)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.iter().any(|part| *part == user_norm) {
        return true;
    }

    let user_compact = normalize_compact(user_dosage);
    if user_compact == normalize_compact(registry_dosage) {
        return true;
    }
    parts
        .iter()
        .any(|part| normalize_compact(part) == user_compact)
}

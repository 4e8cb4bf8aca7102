//! Text canonicalization applied to both registry text and user input.
//!
//! Every comparison in the matching engine goes through these functions on
//! both sides; normalizing one side with a different routine is a
//! correctness bug.

/// Canonicalize text for comparison.
///
/// Trims, collapses whitespace runs (including non-breaking space) to a
/// single ASCII space, lowercases, and folds the Cyrillic variant pair
/// `ё`/`Ё` to `е`, the one letter pair the source registry uses
/// interchangeably. Empty or whitespace-only input yields an empty string.
pub fn normalize_text(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace('ё', "е")
}

/// Compact normalization used for strength comparison only: additionally
/// strips all whitespace and the list separators comma and semicolon.
pub fn normalize_compact(value: &str) -> String {
    normalize_text(value)
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != ',' && *ch != ';')
        .collect()
}

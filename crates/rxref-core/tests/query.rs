//! Tests for user-input normalization.

use std::collections::BTreeSet;

use rxref_core::{
    build_query, normalize_query_base_form, normalize_query_release_type, parse_query_routes,
};
use rxref_model::{Route, RouteToken};

fn canonical(routes: &[Route]) -> BTreeSet<RouteToken> {
    routes.iter().copied().map(RouteToken::Canonical).collect()
}

#[test]
fn recognized_route_phrases_become_canonical() {
    assert_eq!(parse_query_routes("oral"), canonical(&[Route::Oral]));
    assert_eq!(parse_query_routes("By Mouth"), canonical(&[Route::Oral]));
    assert_eq!(
        parse_query_routes("intravenous and intramuscular"),
        canonical(&[Route::Intravenous, Route::Intramuscular])
    );
}

#[test]
fn unrecognized_routes_degrade_to_freeform_tokens() {
    assert_eq!(
        parse_query_routes("sublingual"),
        BTreeSet::from([RouteToken::Freeform("sublingual".to_string())])
    );
    assert_eq!(
        parse_query_routes("foo / bar"),
        BTreeSet::from([
            RouteToken::Freeform("bar".to_string()),
            RouteToken::Freeform("foo".to_string()),
        ])
    );
}

#[test]
fn empty_route_text_means_no_constraint() {
    assert!(parse_query_routes("").is_empty());
    assert!(parse_query_routes("   ").is_empty());
}

#[test]
fn release_type_synonyms_normalize_to_the_closed_vocabulary() {
    assert_eq!(normalize_query_release_type("Enteric coated"), "enteric");
    assert_eq!(normalize_query_release_type("retard"), "prolonged");
    assert_eq!(normalize_query_release_type("prolonged release"), "prolonged");
    assert_eq!(normalize_query_release_type("controlled release"), "modified");
    assert_eq!(normalize_query_release_type("Immediate"), "conventional");
    assert_eq!(normalize_query_release_type("unmodified"), "conventional");
}

#[test]
fn unknown_release_text_passes_through_normalized() {
    assert_eq!(normalize_query_release_type("Depot  Form"), "depot form");
    assert_eq!(normalize_query_release_type(""), "");
}

#[test]
fn base_form_stems_resolve_to_canonical_keywords() {
    assert_eq!(normalize_query_base_form("tabs"), "tablet");
    assert_eq!(normalize_query_base_form("Capsules"), "capsule");
    assert_eq!(normalize_query_base_form("oral solution"), "solution");
    assert_eq!(normalize_query_base_form("suppositories"), "suppository");
    assert_eq!(normalize_query_base_form("ointment"), "ointment");
}

#[test]
fn unknown_base_form_passes_through_normalized() {
    assert_eq!(normalize_query_base_form("Lozenge"), "lozenge");
    assert_eq!(normalize_query_base_form(""), "");
}

#[test]
fn build_query_normalizes_every_axis() {
    let query = build_query(
        "  Metformin ",
        "oral",
        "tabs",
        "immediate",
        " 500 mg ",
    );
    assert_eq!(query.ingredient, "metformin");
    assert_eq!(query.routes, canonical(&[Route::Oral]));
    assert_eq!(query.base_form, "tablet");
    assert_eq!(query.release_type, "conventional");
    assert_eq!(query.dosage, "500 mg");
}

#[test]
fn empty_answers_leave_axes_unconstrained() {
    let query = build_query("Metformin", "", "", "", "");
    assert!(query.routes.is_empty());
    assert!(query.base_form.is_empty());
    assert!(query.release_type.is_empty());
    assert!(query.dosage.is_empty());
}

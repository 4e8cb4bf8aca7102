//! Classification tests for the dosage-form parser.

use rxref_core::classify_form;
use rxref_model::{ReleaseType, Route};

#[test]
fn plain_tablets_are_conventional_oral() {
    let parsed = classify_form("film-coated tablets");
    assert_eq!(parsed.base_form, "tablet");
    assert_eq!(parsed.release_type, ReleaseType::Conventional);
    assert!(parsed.routes.contains(&Route::Oral));
    assert_eq!(parsed.routes.len(), 1);
}

#[test]
fn enteric_coating_outranks_prolonged_wording() {
    let parsed = classify_form("enteric-coated prolonged-release tablets");
    assert_eq!(parsed.release_type, ReleaseType::Enteric);
}

#[test]
fn gastro_resistant_counts_as_enteric() {
    let parsed = classify_form("gastro-resistant capsules");
    assert_eq!(parsed.release_type, ReleaseType::Enteric);
}

#[test]
fn release_modifiers_map_to_their_groups() {
    assert_eq!(
        classify_form("extended-release capsules").release_type,
        ReleaseType::Prolonged
    );
    assert_eq!(
        classify_form("tablets, retard").release_type,
        ReleaseType::Prolonged
    );
    assert_eq!(
        classify_form("sustained-release tablets").release_type,
        ReleaseType::Modified
    );
    assert_eq!(
        classify_form("controlled-release suspension").release_type,
        ReleaseType::Modified
    );
}

#[test]
fn unrecognized_text_defaults_to_conventional() {
    assert_eq!(
        classify_form("some entirely unknown description").release_type,
        ReleaseType::Conventional
    );
    assert_eq!(classify_form("").release_type, ReleaseType::Conventional);
}

#[test]
fn explicit_oral_phrase_wins_regardless_of_base_form() {
    let parsed = classify_form("cream for oral use");
    assert_eq!(parsed.base_form, "cream");
    assert!(parsed.routes.contains(&Route::Oral));
    assert!(!parsed.routes.contains(&Route::Topical));
}

#[test]
fn multiple_routes_accumulate() {
    let parsed = classify_form("solution for intravenous and intramuscular administration");
    assert!(parsed.routes.contains(&Route::Intravenous));
    assert!(parsed.routes.contains(&Route::Intramuscular));
}

#[test]
fn subcutaneous_does_not_imply_topical() {
    let parsed = classify_form("solution for subcutaneous injection");
    assert!(parsed.routes.contains(&Route::Subcutaneous));
    assert!(!parsed.routes.contains(&Route::Topical));
}

#[test]
fn suppository_without_route_phrase_stays_routeless() {
    let parsed = classify_form("suppositories");
    assert_eq!(parsed.base_form, "suppository");
    assert!(parsed.routes.is_empty());
}

#[test]
fn suppository_with_explicit_phrase_gets_the_route() {
    let parsed = classify_form("rectal suppositories");
    assert_eq!(parsed.routes.iter().copied().collect::<Vec<_>>(), vec![
        Route::Rectal
    ]);
}

#[test]
fn patch_implies_transdermal() {
    let parsed = classify_form("patch");
    assert_eq!(parsed.base_form, "patch");
    assert!(parsed.routes.contains(&Route::Transdermal));
}

#[test]
fn topical_forms_imply_topical_route() {
    let parsed = classify_form("ointment");
    assert_eq!(parsed.base_form, "ointment");
    assert!(parsed.routes.contains(&Route::Topical));
}

#[test]
fn keyword_priority_follows_table_order() {
    // Both "powder" and "solution" occur; "powder" is earlier in the table.
    let parsed = classify_form("powder for solution for injection");
    assert_eq!(parsed.base_form, "powder");
    assert!(parsed.routes.contains(&Route::Injection));
}

#[test]
fn unknown_form_falls_back_to_leading_token() {
    let parsed = classify_form("ovules, vaginal use");
    assert_eq!(parsed.base_form, "ovules");
    assert!(parsed.routes.contains(&Route::Vaginal));
}

#[test]
fn eye_drops_resolve_to_ophthalmic() {
    let parsed = classify_form("eye drops");
    assert_eq!(parsed.base_form, "drops");
    assert!(parsed.routes.contains(&Route::Ophthalmic));
    assert!(!parsed.routes.contains(&Route::Oral));
}

#[test]
fn raw_text_is_preserved_verbatim() {
    let raw = "  Film-Coated  Tablets ";
    let parsed = classify_form(raw);
    assert_eq!(parsed.raw, raw);
    assert_eq!(parsed.base_form, "tablet");
}

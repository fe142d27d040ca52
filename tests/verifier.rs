//! Verifier behaviour on hand-built and reloaded colorings

use ancestral_coloring::export::{load_coloring, read_coloring, render_coloring, save_coloring};
use ancestral_coloring::verify::{is_descendant_of, verify};
use ancestral_coloring::*;
use test_case::test_case;

fn load(text: &str) -> Coloring {
    read_coloring(text.as_bytes()).expect("well-formed coloring text")
}

#[test_case(2, 1 ; "left child of root")]
#[test_case(7, 3 ; "right grandchild")]
#[test_case(13, 1 ; "leaf to root")]
#[test_case(12, 3 ; "leaf to right child")]
fn descendant_pairs(descendant: u64, ancestor: u64) {
    assert!(is_descendant_of(descendant, ancestor));
    assert!(!is_descendant_of(ancestor, descendant));
}

#[test]
fn siblings_and_self_are_not_descendants() {
    assert!(!is_descendant_of(2, 3));
    assert!(!is_descendant_of(6, 2));
    assert!(!is_descendant_of(5, 5));
    assert!(!is_descendant_of(8, 3));
}

#[test]
fn ancestral_violation_names_the_pair() {
    let coloring = load("2\n2 5 6\n3 4 7\n");
    let report = verify(&coloring, true);
    assert!(!report.passed());
    assert_eq!(
        report.first_failure(),
        Some(&VerificationError::AncestorPair {
            color: ColorId::new(0),
            ancestor: 2,
            descendant: 5,
        })
    );
    assert!(report.to_string().contains("ancestral: FAILED"));
}

#[test]
fn unbalanced_coloring_fails_only_when_requested() {
    let coloring = load("2\n2 3\n4 5 6 7\n");
    assert!(verify(&coloring, false).passed());

    let report = verify(&coloring, true);
    assert!(matches!(
        report.first_failure(),
        Some(VerificationError::Unbalanced { size: 2, floor: 3, ceil: 3, .. })
    ));
}

#[test]
fn coverage_errors_are_reported() {
    let missing = verify(&load("2\n2 6\n3 4 5\n"), false);
    assert!(matches!(
        missing.first_failure(),
        Some(VerificationError::TotalMismatch { assigned: 5, expected: 6 })
    ));

    let foreign = verify(&load("2\n2 6 9\n3 4 5\n"), false);
    assert!(matches!(
        foreign.first_failure(),
        Some(VerificationError::OutOfRange { node: 9, max: 7, .. })
    ));

    let twice = verify(&load("2\n2 6 6\n3 4 5\n"), false);
    assert_eq!(
        twice.first_failure(),
        Some(&VerificationError::Duplicate { node: 6 })
    );
}

#[test]
fn huge_ids_do_not_blow_up_the_ancestral_check() {
    let coloring = load("2\n2 6 18446744073709551615\n3 4 5\n");
    let report = verify(&coloring, false);
    assert!(!report.passed());
    assert!(verify::check_ancestral(&coloring).is_ok());
}

#[test]
fn exported_file_verifies_after_reload() {
    let run = AncestralColorer::new(ColoringConfig::manual(vec![5, 9, 6, 10]))
        .run()
        .expect("feasible sequence colors");

    let path = std::env::temp_dir().join(format!(
        "ancestral-coloring-{}-export.txt",
        std::process::id()
    ));
    save_coloring(&path, &run.coloring).expect("export succeeds");
    let loaded = load_coloring(&path).expect("reload succeeds");
    std::fs::remove_file(&path).ok();

    assert_eq!(
        render_coloring(&loaded).unwrap(),
        render_coloring(&run.coloring).unwrap()
    );
    assert!(verify(&loaded, false).passed());
}

#[test]
fn tampered_file_fails_verification() {
    let run = AncestralColorer::new(ColoringConfig::balanced(3))
        .run()
        .expect("balanced coloring succeeds");
    let text = render_coloring(&run.coloring).unwrap();
    // Swap the children of the root: 3 joins the class holding its child 6.
    let tampered = text.replacen("2 6", "3 6", 1).replacen("\n3 8", "\n2 8", 1);

    let report = verify(&load(&tampered), false);
    assert!(!report.passed(), "{}", report);
}

//! End-to-end coloring scenarios for small trees

use ancestral_coloring::export::render_coloring;
use ancestral_coloring::verify::verify;
use ancestral_coloring::*;
use test_case::test_case;

mod common;
use common::{assert_snapshot, node_lists};

#[test]
fn balanced_h2_matches_reference() {
    let coloring = color_splitting(&balanced_sequence(2)).expect("balanced h=2 is feasible");
    // 2 and 6/7 are unrelated: 6 and 7 descend from 3.
    assert_eq!(node_lists(&coloring), vec![vec![2, 6, 7], vec![3, 4, 5]]);
    assert_eq!(render_coloring(&coloring).unwrap(), "2\n2 6 7\n3 4 5\n");
}

#[test]
fn shared_first_color_takes_both_children() {
    let sequence: ColorSequence = "2 4".parse().unwrap();
    let coloring = color_splitting(&sequence).unwrap();
    assert_eq!(node_lists(&coloring), vec![vec![2, 3], vec![4, 5, 6, 7]]);
}

#[test]
fn manual_order_does_not_matter_for_sizes() {
    let sequence: ColorSequence = "6 4 4".parse().unwrap();
    let coloring = color_splitting(&sequence).unwrap();
    let sizes: Vec<usize> = coloring.classes().iter().map(ColorClass::len).collect();
    assert_eq!(sizes, vec![4, 4, 6]);
    // Labels follow input position: the size-6 color was typed first.
    assert_eq!(coloring.classes()[2].color().to_string(), "A");
    assert!(verify(&coloring, false).passed());
}

#[test]
fn sum_mismatch_cites_c2() {
    let err = sequence::check_feasible(3, &[4, 5, 6]).unwrap_err();
    assert_eq!(err.condition(), Some("C2"));
    assert!(err.to_string().contains("C2"));
}

#[test]
fn caller_rejects_infeasible_before_coloring() {
    let colorer = AncestralColorer::new(ColoringConfig::manual(vec![2, 2, 10]));
    match colorer.run() {
        Err(ColoringError::Infeasible(err)) => assert_eq!(err.condition(), Some("C1")),
        other => panic!("expected C1 rejection, got {:?}", other),
    }

    let colorer = AncestralColorer::new(ColoringConfig::manual(vec![3, 4, 8]));
    assert!(matches!(
        colorer.run(),
        Err(ColoringError::Infeasible(FeasibilityError::TotalMismatch { .. }))
    ));
}

#[test]
fn malformed_manual_input_is_rejected() {
    assert!(matches!(
        "3 three".parse::<ColorSequence>(),
        Err(SequenceError::InvalidSize { position: 2, .. })
    ));
    assert!(matches!(
        "   ".parse::<ColorSequence>(),
        Err(SequenceError::Empty)
    ));
}

#[test_case("balanced_h3.txt", ColoringConfig::balanced(3) ; "balanced h3")]
#[test_case("balanced_h4.txt", ColoringConfig::balanced(4) ; "balanced h4")]
#[test_case("balanced_h5.txt", ColoringConfig::balanced(5) ; "balanced h5")]
#[test_case("manual_2_4_8.txt", ColoringConfig::manual(vec![8, 4, 2]) ; "manual 2 4 8")]
fn export_matches_snapshot(name: &str, config: ColoringConfig) {
    let run = AncestralColorer::new(config.with_verification(true))
        .run()
        .expect("coloring succeeds");
    assert!(run.report.as_ref().map_or(false, VerificationReport::passed));
    assert_snapshot(name, &render_coloring(&run.coloring).unwrap());
}

#[test_case(2 ; "h2")]
#[test_case(5 ; "h5")]
#[test_case(10 ; "h10")]
#[test_case(14 ; "h14")]
fn balanced_colorings_verify(height: u32) {
    let sequence = balanced_sequence(height);
    assert!(sequence.is_feasible());

    let coloring = color_splitting(&sequence).unwrap();
    let report = verify(&coloring, true);
    assert!(report.passed(), "{}", report);
    assert_eq!(coloring.assigned(), (1u64 << (height + 1)) - 2);
}

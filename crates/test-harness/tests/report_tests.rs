use test_harness::{SessionDriver, SessionReport};

#[test]
fn report_lists_vectors_and_marks() {
    let mut s = SessionDriver::new();
    s.add("u", "(1,2,3)").unwrap();
    s.add_unnamed("(0,0,1)").unwrap();
    s.mark(1).unwrap();

    let report = SessionReport::from_driver(&s);
    let text = report.to_text();
    assert!(text.contains("Vectors (2, 1 marked, sequential=false)"));
    assert!(text.contains("[0] u = 1.0î + 2.0ĵ + 3.0k̂"));
    assert!(text.contains("[1] V2 = 0.0î + 0.0ĵ + 1.0k̂ [DELETE]"));
    assert_eq!(report.resultant, Some([1.0, 2.0, 4.0]));
}

#[test]
fn report_flags_clipped_vectors() {
    let mut s = SessionDriver::new();
    s.add("short", "(1,1,1)").unwrap();
    s.add("long", "(0,0,25)").unwrap();

    let report = SessionReport::from_driver(&s);
    assert_eq!(report.clipped, vec![1]);
    assert!(report.to_string().contains("Outside viewing volume: [1]"));
}

#[test]
fn chained_vectors_can_leave_view_together() {
    let mut s = SessionDriver::new();
    s.add("a", "(6,0,0)").unwrap();
    s.add("b", "(6,0,0)").unwrap();
    assert!(SessionReport::from_driver(&s).clipped.is_empty());

    s.sequential(true).unwrap();
    assert_eq!(SessionReport::from_driver(&s).clipped, vec![1]);
    assert_eq!(SessionReport::tips(&s), vec![[6.0, 0.0, 0.0], [12.0, 0.0, 0.0]]);
}

#[test]
fn empty_report_has_no_resultant() {
    let report = SessionReport::from_driver(&SessionDriver::new());
    assert!(report.resultant.is_none());
    assert!(report.to_text().contains("Vectors (0, 0 marked"));
}

#[test]
fn steps_are_recorded() {
    let mut s = SessionDriver::new();
    s.add("a", "(1,0,0)").unwrap();
    s.sequential(true).unwrap();
    let text = SessionReport::from_driver(&s).to_text();
    assert!(text.contains("AddVector(a, (1,0,0)) -> SceneUpdated"));
    assert!(text.contains("SetSequential(true) -> SceneUpdated"));
}

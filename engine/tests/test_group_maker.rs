//! Session tests
//!
//! Generate / reshuffle / undo / redo as driven by a shell.

use group_maker_core::{GroupMaker, GroupOptions, GroupSet, GroupingError, RandomSource};

const CLASS: &str = "Ann\nBob\nCam\nDee\nEve";

/// Deterministic stand-in for the entropy source
struct Sequence {
    values: Vec<f64>,
    next: usize,
}

impl Sequence {
    fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for Sequence {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

#[test]
fn test_seeded_generation_matches_reference() {
    let mut maker = GroupMaker::new();
    let options = GroupOptions::by_count(2).with_seed("x");

    let groups = maker.generate(CLASS, &options).unwrap().clone();
    assert_eq!(groups.groups(), &[vec!["Eve", "Cam", "Bob"], vec!["Dee", "Ann"]]);
}

#[test]
fn test_seeded_generation_repeatable() {
    let options = GroupOptions::by_size(2).with_seed("kelas-7a");

    let first = GroupMaker::new().generate(CLASS, &options).unwrap().clone();
    for _ in 0..5 {
        let again = GroupMaker::new().generate(CLASS, &options).unwrap().clone();
        assert_eq!(first, again);
    }
}

#[test]
fn test_seeded_reshuffle_repeats_result_as_new_entry() {
    let mut maker = GroupMaker::new();
    let options = GroupOptions::by_count(2).with_seed("x");

    let first = maker.generate(CLASS, &options).unwrap().clone();
    let second = maker.reshuffle().unwrap().clone();

    assert_eq!(first, second);
    assert_eq!(maker.history().len(), 2);
    assert!(maker.can_undo());
}

#[test]
fn test_unseeded_generation_follows_entropy_stream() {
    let mut maker = GroupMaker::with_entropy(Sequence::new(&[0.0, 0.999_999]));
    let options = GroupOptions::by_count(2);

    // Five names consume four draws: 0.0, 0.999999, 0.0, 0.999999
    let first = maker.generate("A\nB\nC\nD\nE", &options).unwrap().clone();
    // The cycle is back at 0.0, so the same draws repeat
    let second = maker.reshuffle().unwrap().clone();
    assert_eq!(first, second);
    assert_eq!(first.groups(), &[vec!["C", "E", "A"], vec!["B", "D"]]);

    // Four names consume three draws, shifting the cycle by one
    maker.generate("A\nB\nC\nD", &options).unwrap();
    let shifted = maker.generate("A\nB\nC\nD\nE", &options).unwrap().clone();
    assert_eq!(shifted.groups(), &[vec!["B", "C", "E"], vec!["D", "A"]]);
}

#[test]
fn test_undo_redo_through_session() {
    let mut maker = GroupMaker::new();
    let a = maker
        .generate(CLASS, &GroupOptions::by_count(2).with_seed("a"))
        .unwrap()
        .clone();
    let b = maker
        .generate(CLASS, &GroupOptions::by_count(3).with_seed("b"))
        .unwrap()
        .clone();

    assert_eq!(maker.undo(), Some(&a));
    assert!(maker.can_redo());
    assert_eq!(maker.redo(), Some(&b));
    assert!(!maker.can_redo());
    assert_eq!(maker.current(), Some(&b));
}

#[test]
fn test_generate_after_undo_discards_redo() {
    let mut maker = GroupMaker::new();
    maker.generate(CLASS, &GroupOptions::by_count(2).with_seed("a")).unwrap();
    maker.generate(CLASS, &GroupOptions::by_count(2).with_seed("b")).unwrap();
    maker.undo();

    maker.generate(CLASS, &GroupOptions::by_count(5).with_seed("c")).unwrap();

    assert!(!maker.can_redo());
    assert_eq!(maker.history().len(), 2);
    assert_eq!(maker.current().map(GroupSet::len), Some(5));
}

#[test]
fn test_reshuffle_uses_last_successful_input() {
    let mut maker = GroupMaker::new();
    maker
        .generate(CLASS, &GroupOptions::by_count(2).with_seed("x"))
        .unwrap();

    let err = maker.generate(CLASS, &GroupOptions::by_count(9)).unwrap_err();
    assert_eq!(err, GroupingError::InvalidGroupCount { count: 9, names: 5 });
    assert_eq!(maker.history().len(), 1);

    let groups = maker.reshuffle().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(maker.last_options().map(|o| o.group_count), Some(2));
}

#[test]
fn test_normalization_applies_before_validation() {
    let mut maker = GroupMaker::new();
    let options = GroupOptions::by_count(3)
        .with_trim_empty(true)
        .with_remove_duplicates(true)
        .with_seed("dup");

    // Only two distinct names survive
    let err = maker.generate("Ann\n Ann \n\nBob\n", &options).unwrap_err();
    assert_eq!(err, GroupingError::InvalidGroupCount { count: 3, names: 2 });

    let groups = maker
        .generate("Ann\n Ann \n\nBob\nCam", &options)
        .unwrap();
    assert_eq!(groups.member_count(), 3);
}

#[test]
fn test_blank_text_is_empty_input() {
    let mut maker = GroupMaker::new();

    let err = maker.generate("\n", &GroupOptions::by_count(1)).unwrap_err();
    assert_eq!(err, GroupingError::EmptyInput);

    let err = maker.generate("   \n\t", &GroupOptions::by_size(2)).unwrap_err();
    assert_eq!(err, GroupingError::EmptyInput);

    assert!(maker.current().is_none());
}

#[test]
fn test_final_newline_kept_as_blank_name_without_trim() {
    // Blank lines are names unless trimming is on; shells strip the file's
    // final newline before calling in
    let mut maker = GroupMaker::new();
    let groups = maker
        .generate("Ann\nBob\n", &GroupOptions::by_count(2).with_seed("x"))
        .unwrap();
    assert_eq!(groups.member_count(), 3);

    let groups = maker
        .generate("Ann\nBob", &GroupOptions::by_count(2).with_seed("x"))
        .unwrap();
    assert_eq!(groups.member_count(), 2);
}

//! History tests
//!
//! Critical invariants tested:
//! - Undo/redo only move the cursor
//! - Push after undo discards the future branch
//! - Cursor is None iff the store is empty

use group_maker_core::{GroupSet, HistoryStore};
use proptest::prelude::*;

fn set(tag: &str) -> GroupSet {
    GroupSet::new(vec![vec![tag.to_string()]])
}

fn current_tag(history: &HistoryStore) -> Option<String> {
    history
        .current()
        .and_then(|entry| entry.groups().get(0))
        .and_then(|group| group.first().cloned())
}

#[test]
fn test_undo_then_push_discards_branch() {
    let mut history = HistoryStore::new();
    history.push(set("A"));
    history.push(set("B"));

    let undone = history.undo().expect("undo should succeed");
    assert_eq!(undone.groups(), &set("A"));
    assert!(history.can_redo());

    history.push(set("C"));
    assert!(!history.can_redo());
    assert_eq!(history.len(), 2);
    assert_eq!(current_tag(&history).as_deref(), Some("C"));

    let tags: Vec<&GroupSet> = history.entries().iter().map(|e| e.groups()).collect();
    assert!(!tags.contains(&&set("B")), "B must be unreachable");

    history.undo();
    assert_eq!(current_tag(&history).as_deref(), Some("A"));
}

#[test]
fn test_redo_walks_forward() {
    let mut history = HistoryStore::new();
    for tag in ["A", "B", "C"] {
        history.push(set(tag));
    }

    history.undo();
    history.undo();
    assert_eq!(current_tag(&history).as_deref(), Some("A"));
    assert!(!history.can_undo());

    assert_eq!(history.redo().map(|e| e.groups().clone()), Some(set("B")));
    assert_eq!(history.redo().map(|e| e.groups().clone()), Some(set("C")));
    assert!(history.redo().is_none(), "nothing to redo at newest entry");
    assert_eq!(history.cursor(), Some(2));
}

#[test]
fn test_undo_at_oldest_is_noop() {
    let mut history = HistoryStore::new();
    history.push(set("A"));
    history.push(set("B"));
    history.undo();

    assert!(history.undo().is_none());
    assert_eq!(history.cursor(), Some(0));
    assert_eq!(history.len(), 2);
}

#[derive(Debug, Clone)]
enum Op {
    Push,
    Undo,
    Redo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Push), Just(Op::Undo), Just(Op::Redo)]
}

proptest! {
    #[test]
    fn prop_cursor_invariant(ops in proptest::collection::vec(op_strategy(), 0..60)) {
        let mut history = HistoryStore::new();
        for (i, op) in ops.iter().enumerate() {
            match op {
                Op::Push => { history.push(set(&i.to_string())); }
                Op::Undo => { history.undo(); }
                Op::Redo => { history.redo(); }
            }

            match history.cursor() {
                None => prop_assert!(history.is_empty()),
                Some(cursor) => prop_assert!(cursor < history.len()),
            }
            prop_assert_eq!(history.can_undo(), history.cursor().map_or(false, |c| c > 0));
            prop_assert_eq!(
                history.can_redo(),
                history.cursor().map_or(false, |c| c + 1 < history.len())
            );
        }
    }

    #[test]
    fn prop_push_makes_newest_current(pushes in 1usize..20, undos in 0usize..20) {
        let mut history = HistoryStore::new();
        for i in 0..pushes {
            history.push(set(&i.to_string()));
        }
        for _ in 0..undos {
            history.undo();
        }
        history.push(set("new"));

        prop_assert!(!history.can_redo());
        prop_assert_eq!(current_tag(&history), Some("new".to_string()));
        prop_assert_eq!(history.len(), pushes.saturating_sub(undos).max(1) + 1);
    }
}

//! Property-based tests for task list transitions and saved-state restore.
//!
//! Uses proptest to verify:
//! 1. Adding any non-blank text appends exactly one open task with the prior
//!    counter value as its id.
//! 2. Blank text never changes the list.
//! 3. Toggling on and then off restores the task.
//! 4. Deleting removes exactly one task and keeps the rest in order.
//! 5. Active and completed partitions are disjoint and cover the list for
//!    every reachable state.
//! 6. Any reachable state survives a save/restore cycle, and random bytes
//!    never cause a panic in `decode`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashSet;

use proptest::prelude::*;
use todolist_core::codec;
use todolist_core::task::{TaskId, TaskList};
use todolist_core::view;

/// A user intent applied to the list.
#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(u32, bool),
    Delete(u32),
}

/// Strategy for text that is non-empty after trimming.
fn arb_text() -> impl Strategy<Value = String> {
    "[ \t]{0,3}[a-zA-Z0-9][a-zA-Z0-9 .!-]{0,40}"
}

/// Strategy for whitespace-only text.
fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n\r]{0,8}"
}

/// Strategy for an intent. Ids range a little past what the ops can create
/// so unknown ids get exercised too.
fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_text().prop_map(Op::Add),
        1 => arb_blank().prop_map(Op::Add),
        2 => (1u32..40, any::<bool>()).prop_map(|(id, on)| Op::Toggle(id, on)),
        1 => (1u32..40).prop_map(Op::Delete),
    ]
}

fn apply(list: &mut TaskList, op: &Op) {
    match op {
        Op::Add(text) => {
            let _ = list.add(text);
        }
        Op::Toggle(id, on) => {
            list.toggle(TaskId::new(*id), *on);
        }
        Op::Delete(id) => {
            list.remove(TaskId::new(*id));
        }
    }
}

/// Strategy for a state reachable through the list's own operations.
fn arb_list() -> impl Strategy<Value = TaskList> {
    prop::collection::vec(arb_op(), 0..30).prop_map(|ops| {
        let mut list = TaskList::new();
        for op in &ops {
            apply(&mut list, op);
        }
        list
    })
}

proptest! {
    #[test]
    fn add_appends_one_open_task(mut list in arb_list(), text in arb_text()) {
        let before = list.clone();
        let prior_next = list.next_id();

        let task = list.add(&text).unwrap().clone();

        prop_assert_eq!(list.len(), before.len() + 1);
        prop_assert_eq!(task.id(), prior_next);
        prop_assert_eq!(task.text(), text.trim());
        prop_assert!(!task.is_completed());
        prop_assert_eq!(list.tasks().last(), Some(&task));
        prop_assert_eq!(&list.tasks()[..before.len()], before.tasks());
        prop_assert_eq!(list.next_id(), TaskId::new(prior_next.get() + 1));
    }

    #[test]
    fn blank_add_changes_nothing(mut list in arb_list(), text in arb_blank()) {
        let before = list.clone();
        prop_assert!(list.add(&text).is_err());
        prop_assert_eq!(list, before);
    }

    #[test]
    fn toggle_on_then_off_restores_task(mut list in arb_list(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!list.is_empty());
        let id = list.tasks()[pick.index(list.len())].id();
        let mut expected = list.clone();
        expected.toggle(id, false);

        list.toggle(id, true);
        prop_assert!(list.get(id).unwrap().is_completed());
        list.toggle(id, false);
        prop_assert_eq!(list, expected);
    }

    #[test]
    fn delete_removes_exactly_one(mut list in arb_list(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!list.is_empty());
        let id = list.tasks()[pick.index(list.len())].id();
        let expected: Vec<_> = list.iter().filter(|t| t.id() != id).cloned().collect();
        let next_id = list.next_id();

        prop_assert!(list.remove(id).is_some());
        prop_assert_eq!(list.tasks(), expected.as_slice());
        prop_assert_eq!(list.next_id(), next_id);

        let again = list.clone();
        prop_assert!(list.remove(id).is_none());
        prop_assert_eq!(list, again);
    }

    #[test]
    fn partition_is_disjoint_and_complete(list in arb_list()) {
        let (active, completed) = list.partition();
        prop_assert_eq!(active.len() + completed.len(), list.len());
        prop_assert!(active.iter().all(|t| !t.is_completed()));
        prop_assert!(completed.iter().all(|t| t.is_completed()));

        let active_ids: HashSet<_> = active.iter().map(|t| t.id()).collect();
        let completed_ids: HashSet<_> = completed.iter().map(|t| t.id()).collect();
        let all_ids: HashSet<_> = list.iter().map(|t| t.id()).collect();
        prop_assert!(active_ids.is_disjoint(&completed_ids));
        prop_assert_eq!(&active_ids | &completed_ids, all_ids);

        let view = view::render(&list, view::DEFAULT_EMPTY_MESSAGE);
        prop_assert_eq!(view.row_count(), list.len());
    }

    #[test]
    fn ids_stay_unique_and_below_counter(list in arb_list()) {
        let mut seen = HashSet::new();
        for task in &list {
            prop_assert!(task.id() < list.next_id());
            prop_assert!(seen.insert(task.id()));
        }
    }

    #[test]
    fn reachable_state_survives_restore(list in arb_list()) {
        let bytes = codec::encode(&list).unwrap();
        let restored = codec::decode(&bytes).unwrap();
        prop_assert_eq!(restored, list);
    }

    #[test]
    fn decode_random_bytes_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = codec::decode(&bytes);
    }
}

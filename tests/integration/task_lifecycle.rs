//! Integration tests for the add / toggle / delete lifecycle.
//!
//! Drives the root screen through key events the way the event loop does
//! and checks the resulting task list and rendered sections.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todolist::app::{App, Focus, Intent};
use todolist::notice::{BLANK_TASK_NOTICE, Notice};
use todolist_core::task::TaskId;
use todolist_core::view::{COMPLETED_HEADING, DEFAULT_EMPTY_MESSAGE, ITEMS_HEADING, Node};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Types `text` into the input and presses Enter.
fn submit(app: &mut App, text: &str) {
    if app.focus != Focus::Input {
        press(app, KeyCode::Tab);
    }
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
}

fn texts_of<'a>(rows: impl Iterator<Item = todolist_core::view::RowView<'a>>) -> Vec<&'a str> {
    rows.map(|row| row.text).collect()
}

// ===========================================================================
// Scenarios
// ===========================================================================

#[test]
fn add_first_task() {
    let mut app = App::new();
    submit(&mut app, "Buy milk");

    let tasks = app.tasks().tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id(), TaskId::new(1));
    assert_eq!(tasks[0].text(), "Buy milk");
    assert!(!tasks[0].is_completed());
    assert_eq!(app.tasks().next_id(), TaskId::new(2));
    assert_eq!(app.input.text(), "");
}

#[test]
fn completing_a_task_moves_it_to_completed_section() {
    let mut app = App::new();
    submit(&mut app, "A");
    submit(&mut app, "B");
    app.apply(Intent::Toggle {
        id: TaskId::new(1),
        completed: true,
    });

    let (active, completed) = app.tasks().partition();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id(), TaskId::new(2));
    assert_eq!(active[0].text(), "B");
    assert!(!active[0].is_completed());
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id(), TaskId::new(1));
    assert_eq!(completed[0].text(), "A");
    assert!(completed[0].is_completed());

    let view = app.view();
    assert_eq!(view.nodes()[0], Node::Heading(ITEMS_HEADING));
    assert!(view.nodes().contains(&Node::Heading(COMPLETED_HEADING)));
    assert_eq!(texts_of(view.rows()), ["B", "A"]);
}

#[test]
fn deleted_ids_are_never_reused() {
    let mut app = App::new();
    submit(&mut app, "X");
    app.apply(Intent::Delete(TaskId::new(1)));
    assert!(app.tasks().is_empty());

    submit(&mut app, "Y");
    assert_eq!(app.tasks().tasks()[0].id(), TaskId::new(2));
}

#[test]
fn blank_submission_is_rejected_with_notice() {
    let mut app = App::new();
    submit(&mut app, "   ");

    assert!(app.tasks().is_empty());
    assert_eq!(app.tasks().next_id(), TaskId::FIRST);
    assert_eq!(app.notice().map(Notice::message), Some(BLANK_TASK_NOTICE));
    // The user can retry straight away.
    press(&mut app, KeyCode::Home);
    for c in "Retry".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.tasks().tasks()[0].text(), "Retry");
}

#[test]
fn duplicate_and_long_text_are_kept_as_is() {
    let long = "x".repeat(2_000);
    let mut app = App::new();
    submit(&mut app, "same");
    submit(&mut app, "same");
    submit(&mut app, &long);

    let tasks = app.tasks().tasks();
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0].text(), tasks[1].text());
    assert_eq!(tasks[2].text().len(), 2_000);
}

#[test]
fn uncompleting_returns_task_to_its_original_place() {
    let mut app = App::new();
    submit(&mut app, "A");
    submit(&mut app, "B");
    submit(&mut app, "C");
    let before = app.tasks().clone();

    app.toggle_task(TaskId::new(2), true);
    assert_eq!(texts_of(app.view().rows()), ["A", "C", "B"]);
    app.toggle_task(TaskId::new(2), false);

    assert_eq!(app.tasks(), &before);
    assert_eq!(texts_of(app.view().rows()), ["A", "B", "C"]);
}

#[test]
fn keyboard_only_session() {
    let mut app = App::new();
    submit(&mut app, "write report");
    submit(&mut app, "call mom");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::List);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('x'));
    assert!(app.tasks().get(TaskId::new(2)).unwrap().is_completed());

    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Delete);
    assert!(app.tasks().get(TaskId::new(1)).is_none());

    // Only the completed task is left, so the active section is empty.
    let view = app.view();
    assert_eq!(view.nodes()[0], Node::Empty(DEFAULT_EMPTY_MESSAGE));
    assert_eq!(texts_of(view.rows()), ["call mom"]);

    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit);
}

//! End-to-end flows through the board API.

use syllabus_core::{CollectionKind, DragState, Entry, ItemContent};

use crate::common::{START_MILLIS, add, board, labels, names};

#[test]
fn add_delete_and_reorder_modules() {
    let mut board = board();
    for name in ["A", "B", "C"] {
        assert!(add(&mut board, CollectionKind::Modules, &[name]));
    }

    assert!(add(&mut board, CollectionKind::Modules, &["D"]));
    assert_eq!(names(&board, CollectionKind::Modules), ["A", "B", "C", "D"]);

    assert!(board.delete(CollectionKind::Modules, 1));
    assert_eq!(names(&board, CollectionKind::Modules), ["A", "C", "D"]);

    // Items sit on rows 0, 1 and 2; row 0 is above A's midpoint.
    assert!(board.drag_start(CollectionKind::Modules, 2));
    assert!(board.drag_over(CollectionKind::Modules, 0.0));
    assert_eq!(labels(&board, CollectionKind::Modules), ["D", "A", "C"]);
    assert_eq!(names(&board, CollectionKind::Modules), ["A", "C", "D"]);

    assert!(board.drop_on(CollectionKind::Modules, 0.0));
    board.drag_end();

    assert_eq!(names(&board, CollectionKind::Modules), ["D", "A", "C"]);
    assert_eq!(labels(&board, CollectionKind::Modules), ["D", "A", "C"]);
    assert_eq!(board.drag_state(), DragState::Idle);
}

#[test]
fn link_entry_renders_as_hyperlink() {
    let mut board = board();
    assert!(add(
        &mut board,
        CollectionKind::Links,
        &["Docs", "https://example.com"]
    ));

    let link = board.store().links().get(0).expect("link appended");
    assert_eq!(link.name(), "Docs");
    assert_eq!(link.url(), "https://example.com");
    assert_eq!(link.id().value(), START_MILLIS);

    let item = &board.view(CollectionKind::Links).items()[0];
    assert_eq!(item.class(), "link-item");
    assert_eq!(
        item.content(),
        &ItemContent::Link {
            label: "Docs".into(),
            url: "https://example.com".into()
        }
    );
}

#[test]
fn values_are_trimmed_and_form_is_cleared() {
    let mut board = board();
    assert!(add(&mut board, CollectionKind::Resources, &["  The Rust Book  "]));

    assert_eq!(names(&board, CollectionKind::Resources), ["The Rust Book"]);
    assert_eq!(board.form(CollectionKind::Resources).fields()[0].text(), "");
}

#[test]
fn blank_submission_is_a_noop() {
    let mut board = board();
    assert!(!add(&mut board, CollectionKind::Modules, &["   "]));
    assert_eq!(board.store().len(CollectionKind::Modules), 0);
    assert_eq!(board.form(CollectionKind::Modules).fields()[0].text(), "   ");

    // A link needs both fields.
    assert!(!add(&mut board, CollectionKind::Links, &["Docs", " "]));
    assert_eq!(board.store().len(CollectionKind::Links), 0);
    let fields = board.form(CollectionKind::Links).fields();
    assert_eq!(fields[0].text(), "Docs");
    assert_eq!(fields[1].text(), " ");
}

#[test]
fn collections_stay_independent() {
    let mut board = board();
    add(&mut board, CollectionKind::Modules, &["Intro"]);
    add(&mut board, CollectionKind::Resources, &["Slides"]);
    add(&mut board, CollectionKind::Links, &["Docs", "https://example.com"]);
    add(&mut board, CollectionKind::Modules, &["Ownership"]);

    board.delete(CollectionKind::Resources, 0);

    assert_eq!(names(&board, CollectionKind::Modules), ["Intro", "Ownership"]);
    assert!(names(&board, CollectionKind::Resources).is_empty());
    assert_eq!(names(&board, CollectionKind::Links), ["Docs"]);
}

#[test]
fn deleting_keeps_relative_order_of_the_rest() {
    let mut board = board();
    for name in ["a", "b", "c", "d", "e"] {
        add(&mut board, CollectionKind::Modules, &[name]);
    }
    board.delete(CollectionKind::Modules, 2);
    assert_eq!(names(&board, CollectionKind::Modules), ["a", "b", "d", "e"]);

    let indices: Vec<_> = board
        .view(CollectionKind::Modules)
        .items()
        .iter()
        .map(|item| item.index())
        .collect();
    assert_eq!(indices, [0, 1, 2, 3]);
}

#[test]
fn drop_at_original_position_keeps_order() {
    let mut board = board();
    for name in ["A", "B", "C"] {
        add(&mut board, CollectionKind::Modules, &[name]);
    }

    board.drag_start(CollectionKind::Modules, 1);
    board.drag_over(CollectionKind::Modules, 1.0);
    assert!(!board.drop_on(CollectionKind::Modules, 1.0));
    board.drag_end();

    assert_eq!(names(&board, CollectionKind::Modules), ["A", "B", "C"]);
    assert!(
        board
            .view(CollectionKind::Modules)
            .items()
            .iter()
            .all(|item| !item.is_dragging())
    );
}

#[test]
fn drag_end_without_drop_commits_nothing() {
    let mut board = board();
    for name in ["A", "B"] {
        add(&mut board, CollectionKind::Modules, &[name]);
    }

    board.drag_start(CollectionKind::Modules, 0);
    board.drag_over(CollectionKind::Modules, 5.0);
    board.drag_end();

    assert_eq!(names(&board, CollectionKind::Modules), ["A", "B"]);
    assert!(!board.drop_on(CollectionKind::Modules, 5.0));
    assert_eq!(board.drag_state(), DragState::Idle);
}

#[test]
fn stale_index_after_delete_is_ignored() {
    let mut board = board();
    add(&mut board, CollectionKind::Modules, &["A"]);
    assert!(board.delete(CollectionKind::Modules, 0));
    assert!(!board.delete(CollectionKind::Modules, 0));
    assert!(!board.drag_start(CollectionKind::Modules, 0));
}

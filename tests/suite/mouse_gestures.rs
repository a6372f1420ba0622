//! Mouse gestures resolved against a drawn frame.

use syllabus_core::{CollectionKind, DragState};

use crate::common::{Harness, add, drag, labels, names, press, release};

fn harness_with_modules(items: &[&str]) -> Harness {
    let mut h = Harness::new(90, 20);
    for item in items {
        add(&mut h.board, CollectionKind::Modules, &[item]);
    }
    h.draw();
    h
}

#[test]
fn drag_last_module_to_the_top() {
    let mut h = harness_with_modules(&["A", "B", "C", "D"]);
    let area = h.list_area(CollectionKind::Modules);

    // Delete "B" through its delete cell.
    let delete_column = area.right() - 1;
    h.apply(press(delete_column, area.y + 1));
    h.apply(release(delete_column, area.y + 1));
    assert_eq!(names(&h.board, CollectionKind::Modules), ["A", "C", "D"]);
    h.draw();

    // Grab "D" by its grip and drop it on "A"'s row.
    h.apply(press(area.x, area.y + 2));
    h.apply(drag(area.x, area.y + 1));
    assert!(matches!(h.board.drag_state(), DragState::Dragging(_)));
    h.apply(drag(area.x, area.y));
    assert_eq!(labels(&h.board, CollectionKind::Modules), ["D", "A", "C"]);
    assert_eq!(names(&h.board, CollectionKind::Modules), ["A", "C", "D"]);

    h.apply(release(area.x, area.y));
    assert_eq!(names(&h.board, CollectionKind::Modules), ["D", "A", "C"]);
    assert_eq!(h.board.drag_state(), DragState::Idle);
}

#[test]
fn drop_below_the_last_item_moves_to_end() {
    let mut h = harness_with_modules(&["A", "B", "C"]);
    let area = h.list_area(CollectionKind::Modules);

    h.apply(press(area.x + 2, area.y));
    h.apply(drag(area.x + 2, area.y + 5));
    h.apply(release(area.x + 2, area.y + 5));

    assert_eq!(names(&h.board, CollectionKind::Modules), ["B", "C", "A"]);
}

#[test]
fn release_on_own_row_changes_nothing() {
    let mut h = harness_with_modules(&["A", "B", "C"]);
    let area = h.list_area(CollectionKind::Modules);

    h.apply(press(area.x, area.y + 1));
    h.apply(drag(area.x + 1, area.y + 1));
    h.apply(release(area.x + 1, area.y + 1));

    assert_eq!(names(&h.board, CollectionKind::Modules), ["A", "B", "C"]);
    assert_eq!(h.board.drag_state(), DragState::Idle);
    assert!(
        h.board
            .view(CollectionKind::Modules)
            .items()
            .iter()
            .all(|item| !item.is_dragging())
    );
}

#[test]
fn dropping_on_another_list_is_ignored() {
    let mut h = harness_with_modules(&["A", "B"]);
    add(&mut h.board, CollectionKind::Resources, &["Slides"]);
    h.draw();
    let modules = h.list_area(CollectionKind::Modules);
    let resources = h.list_area(CollectionKind::Resources);

    h.apply(press(modules.x, modules.y));
    h.apply(drag(resources.x, resources.y));
    h.apply(release(resources.x, resources.y));

    assert_eq!(names(&h.board, CollectionKind::Modules), ["A", "B"]);
    assert_eq!(names(&h.board, CollectionKind::Resources), ["Slides"]);
    assert_eq!(h.board.drag_state(), DragState::Idle);
}

#[test]
fn releasing_outside_any_list_ends_the_drag() {
    let mut h = harness_with_modules(&["A", "B"]);
    let area = h.list_area(CollectionKind::Modules);

    h.apply(press(area.x, area.y));
    h.apply(drag(area.x, area.y + 4));
    h.apply(release(0, 0));

    assert_eq!(names(&h.board, CollectionKind::Modules), ["A", "B"]);
    assert_eq!(h.board.drag_state(), DragState::Idle);
}

#[test]
fn click_after_lost_release_does_not_reorder() {
    let mut h = harness_with_modules(&["A", "B", "C"]);
    let area = h.list_area(CollectionKind::Modules);

    // The release of this drag never arrives.
    h.apply(press(area.x, area.y));
    h.apply(drag(area.x, area.y + 2));
    h.draw();

    h.apply(press(area.x, area.y + 2));
    h.apply(release(area.x, area.y + 2));

    assert_eq!(names(&h.board, CollectionKind::Modules), ["A", "B", "C"]);
    assert_eq!(labels(&h.board, CollectionKind::Modules), ["A", "B", "C"]);
    assert_eq!(h.board.drag_state(), DragState::Idle);
}

#[test]
fn clicking_a_link_label_opens_it() {
    let mut h = Harness::new(90, 20);
    add(
        &mut h.board,
        CollectionKind::Links,
        &["Docs", "https://example.com"],
    );
    h.draw();
    let area = h.list_area(CollectionKind::Links);

    // grip, space, marker, space, then the label.
    let label_column = area.x + 4;
    h.apply(press(label_column, area.y));
    h.apply(release(label_column, area.y));
    assert_eq!(h.opener.opened(), ["https://example.com"]);

    // Clicking the grip does not open it.
    h.apply(press(area.x, area.y));
    h.apply(release(area.x, area.y));
    assert_eq!(h.opener.opened().len(), 1);

    // Neither does dragging from the label.
    h.apply(press(label_column, area.y));
    h.apply(drag(label_column, area.y + 3));
    h.apply(release(label_column, area.y + 3));
    assert_eq!(h.opener.opened().len(), 1);
}

#[test]
fn clicking_a_field_focuses_it() {
    let mut h = Harness::new(90, 20);
    h.draw();
    let area = h.list_area(CollectionKind::Links);

    // The link form's URL field is two rows above the list's top border.
    h.apply(press(area.x + 6, area.y - 3));
    let focus = h.ui.focus();
    assert_eq!(focus.kind, CollectionKind::Links);
    assert_eq!(focus.field, 1);
}

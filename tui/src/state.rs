//! Host-side UI state: keyboard focus, the last frame's hit map, and the
//! mouse press waiting to become a click or a drag.

use ratatui::layout::{Position, Rect};

use syllabus_core::{Board, CollectionKind};
use syllabus_types::ui::UiOptions;

use crate::opener::{LinkOpener, SystemOpener};

/// Columns at the right edge of an item row that act as its delete button.
pub(crate) const DELETE_CELL_WIDTH: u16 = 2;

/// A form field that can receive typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFocus {
    pub kind: CollectionKind,
    pub field: usize,
}

impl FieldFocus {
    #[must_use]
    pub const fn new(kind: CollectionKind, field: usize) -> Self {
        Self { kind, field }
    }
}

/// Every focusable field in tab order.
pub(crate) fn tab_order(board: &Board) -> Vec<FieldFocus> {
    CollectionKind::ALL
        .into_iter()
        .flat_map(|kind| {
            (0..board.form(kind).fields().len()).map(move |field| FieldFocus::new(kind, field))
        })
        .collect()
}

/// Screen regions recorded during the last draw.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    fields: Vec<(Rect, FieldFocus)>,
    lists: Vec<ListRegion>,
}

/// A list container's interior and the label extents of its drawn rows.
#[derive(Debug, Clone)]
pub(crate) struct ListRegion {
    pub(crate) kind: CollectionKind,
    pub(crate) area: Rect,
    /// `[start, end)` columns of each drawn row's label, by live slot.
    pub(crate) labels: Vec<(u16, u16)>,
}

impl HitMap {
    pub(crate) fn clear(&mut self) {
        self.fields.clear();
        self.lists.clear();
    }

    pub(crate) fn push_field(&mut self, area: Rect, focus: FieldFocus) {
        self.fields.push((area, focus));
    }

    pub(crate) fn push_list(&mut self, region: ListRegion) {
        self.lists.push(region);
    }

    #[must_use]
    pub fn field_at(&self, column: u16, row: u16) -> Option<FieldFocus> {
        let position = Position::new(column, row);
        self.fields
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, focus)| *focus)
    }

    /// The list container under the pointer, if any.
    #[must_use]
    pub fn list_at(&self, column: u16, row: u16) -> Option<CollectionKind> {
        self.region_at(column, row).map(|region| region.kind)
    }

    /// Interior of `kind`'s list container as last drawn.
    #[must_use]
    pub fn list_area(&self, kind: CollectionKind) -> Option<Rect> {
        self.lists
            .iter()
            .find(|region| region.kind == kind)
            .map(|region| region.area)
    }

    pub(crate) fn region_at(&self, column: u16, row: u16) -> Option<&ListRegion> {
        let position = Position::new(column, row);
        self.lists
            .iter()
            .find(|region| region.area.contains(position))
    }
}

impl ListRegion {
    pub(crate) fn on_delete_cell(&self, column: u16) -> bool {
        column >= self.area.right().saturating_sub(DELETE_CELL_WIDTH)
    }

    pub(crate) fn on_label(&self, slot: usize, column: u16) -> bool {
        self.labels
            .get(slot)
            .is_some_and(|(start, end)| (*start..*end).contains(&column))
    }
}

/// A left press on a list item that has not moved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingPress {
    pub(crate) kind: CollectionKind,
    pub(crate) slot: usize,
    pub(crate) on_label: bool,
    /// Set once the press turned into a drag gesture.
    pub(crate) dragged: bool,
}

pub struct UiState {
    options: UiOptions,
    focus: FieldFocus,
    pub(crate) hits: HitMap,
    pub(crate) press: Option<PendingPress>,
    pub(crate) opener: Box<dyn LinkOpener>,
    should_quit: bool,
}

impl std::fmt::Debug for UiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiState")
            .field("options", &self.options)
            .field("focus", &self.focus)
            .field("press", &self.press)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

impl UiState {
    #[must_use]
    pub fn new(options: UiOptions) -> Self {
        Self::with_opener(options, Box::new(SystemOpener))
    }

    #[must_use]
    pub fn with_opener(options: UiOptions, opener: Box<dyn LinkOpener>) -> Self {
        Self {
            options,
            focus: FieldFocus::new(CollectionKind::Modules, 0),
            hits: HitMap::default(),
            press: None,
            opener,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn focus(&self) -> FieldFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FieldFocus) {
        self.focus = focus;
    }

    #[must_use]
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub(crate) fn focus_next(&mut self, board: &Board) {
        self.cycle_focus(board, 1);
    }

    pub(crate) fn focus_prev(&mut self, board: &Board) {
        self.cycle_focus(board, -1);
    }

    fn cycle_focus(&mut self, board: &Board, step: isize) {
        let order = tab_order(board);
        if order.is_empty() {
            return;
        }
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = (current as isize + step).rem_euclid(order.len() as isize) as usize;
        self.focus = order[next];
    }
}

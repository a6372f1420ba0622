//! Drag-and-drop state machine.
//!
//! ```text
//! Idle --start--> Dragging --over--> Dragging (live preview, store untouched)
//!                    |  \--drop--> Idle        (order changed: commit)
//!                    |  \--drop--> Dragging    (same position: preview kept)
//!                    \--end--> Idle            (marker cleared, nothing committed)
//! ```
//!
//! At most one item is dragged at a time across all lists.

use syllabus_types::{CollectionKind, EntryId};

use crate::errors::DragError;
use crate::view::ListView;

/// The item being relocated, as recorded when the drag started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraggedItem {
    pub kind: CollectionKind,
    /// Render-time index of the item in its collection.
    pub index: usize,
    pub id: EntryId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DraggedItem),
}

/// A reorder to apply to the owning collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub kind: CollectionKind,
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Committed(Commit),
    /// The drop resolved to the item's own index; nothing to apply.
    Unchanged { index: usize },
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn dragged(&self) -> Option<DraggedItem> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(item) => Some(item),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Begin dragging the child at live `slot` of `view` and mark it.
    ///
    /// The caller ends any previous drag first so only one marker exists.
    pub fn start(&mut self, view: &mut ListView, slot: usize) -> Result<DraggedItem, DragError> {
        let item = view.items().get(slot).ok_or(DragError::NoSuchItem {
            kind: view.kind(),
            position: slot,
        })?;
        let dragged = DraggedItem {
            kind: item.kind(),
            index: item.index(),
            id: item.id(),
        };
        view.set_dragging(dragged.index, true);
        self.state = DragState::Dragging(dragged);
        Ok(dragged)
    }

    /// Reposition the dragged child in `view` as a preview of where it would land.
    pub fn over(&self, view: &mut ListView, pointer_y: f64) -> Result<(), DragError> {
        let dragged = self.owned_by(view)?;
        let slot = Self::dragged_slot(view, dragged)?;
        view.preview_insert(slot, pointer_y);
        Ok(())
    }

    /// Resolve the drop position.
    ///
    /// The old index is the render-time index; the new index is the position of the
    /// after element among the non-dragged children, or their count when there is none.
    /// A commit ends the drag; an unchanged drop leaves the preview and the drag in place.
    pub fn drop(&mut self, view: &ListView, pointer_y: f64) -> Result<DropOutcome, DragError> {
        let dragged = self.owned_by(view)?;
        Self::dragged_slot(view, dragged)?;

        let from = dragged.index;
        let to = view
            .after_position(pointer_y)
            .unwrap_or_else(|| view.undragged_len());

        if from == to {
            return Ok(DropOutcome::Unchanged { index: from });
        }
        self.state = DragState::Idle;
        Ok(DropOutcome::Committed(Commit {
            kind: dragged.kind,
            from,
            to,
        }))
    }

    /// Finish the gesture: clear the marker in the owning view and forget the item.
    pub fn end(&mut self, view: &mut ListView) -> Option<DraggedItem> {
        let dragged = self.dragged()?;
        if view.kind() == dragged.kind
            && let Some(slot) = view.slot_of(dragged.index)
            && view.items()[slot].id() == dragged.id
        {
            view.set_dragging(dragged.index, false);
        }
        self.state = DragState::Idle;
        Some(dragged)
    }

    fn owned_by(&self, view: &ListView) -> Result<DraggedItem, DragError> {
        let dragged = self.dragged().ok_or(DragError::NotDragging)?;
        if view.kind() == dragged.kind {
            Ok(dragged)
        } else {
            Err(DragError::ForeignContainer {
                container: view.kind(),
                owner: dragged.kind,
            })
        }
    }

    fn dragged_slot(view: &ListView, dragged: DraggedItem) -> Result<usize, DragError> {
        view.slot_of(dragged.index)
            .filter(|slot| {
                let item = &view.items()[*slot];
                item.is_dragging() && item.id() == dragged.id
            })
            .ok_or(DragError::StaleItem {
                kind: dragged.kind,
                index: dragged.index,
            })
    }
}

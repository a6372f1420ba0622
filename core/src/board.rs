//! The board: store, forms, rendered lists and drag controller behind one API.
//!
//! Every mutation goes store first, then a full rebuild of the affected list.
//! Rejected actions are logged at debug and leave all state untouched.

use tracing::debug;

use syllabus_types::{CollectionKind, EntryId};

use crate::clock::{Clock, SystemClock};
use crate::drag::{DragController, DragState, DropOutcome};
use crate::form::Form;
use crate::geometry::ListGeometry;
use crate::store::CollectionStore;
use crate::view::ListView;

pub struct Board {
    store: CollectionStore,
    forms: [Form; 3],
    /// Drop targets. Created once; rebuilding only replaces their children.
    views: [ListView; 3],
    drag: DragController,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("store", &self.store)
            .field("drag", &self.drag.state())
            .finish_non_exhaustive()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Box::new(SystemClock))
    }
}

impl Board {
    #[must_use]
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            store: CollectionStore::new(),
            forms: CollectionKind::ALL.map(Form::new),
            views: CollectionKind::ALL.map(ListView::new),
            drag: DragController::new(),
            clock,
        }
    }

    #[must_use]
    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    #[must_use]
    pub fn view(&self, kind: CollectionKind) -> &ListView {
        &self.views[kind.position()]
    }

    #[must_use]
    pub fn form(&self, kind: CollectionKind) -> &Form {
        &self.forms[kind.position()]
    }

    pub fn form_mut(&mut self, kind: CollectionKind) -> &mut Form {
        &mut self.forms[kind.position()]
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Record where the host laid out a list's items.
    pub fn set_geometry(&mut self, kind: CollectionKind, geometry: ListGeometry) {
        self.views[kind.position()].set_geometry(geometry);
    }

    /// Submit the form of `kind`. Returns the new entry's id when one was appended.
    pub fn submit(&mut self, kind: CollectionKind) -> Option<EntryId> {
        let form = &mut self.forms[kind.position()];
        match form.submit(self.clock.as_ref()) {
            Ok(entry) => {
                let id = entry.id();
                let kind = entry.kind();
                self.store.append(entry);
                self.render(kind);
                debug!(%kind, %id, "entry added");
                Some(id)
            }
            Err(err) => {
                debug!(error = %err, "submission ignored");
                None
            }
        }
    }

    /// Delete the entry rendered at `index` (its render-time index).
    pub fn delete(&mut self, kind: CollectionKind, index: usize) -> bool {
        if self.store.remove_at(kind, index) {
            self.render(kind);
            debug!(%kind, index, "entry deleted");
            true
        } else {
            debug!(%kind, index, "delete ignored: index out of range");
            false
        }
    }

    /// Start dragging the item at live `slot` of `kind`'s list.
    pub fn drag_start(&mut self, kind: CollectionKind, slot: usize) -> bool {
        self.drag_end();
        match self.drag.start(&mut self.views[kind.position()], slot) {
            Ok(dragged) => {
                debug!(%kind, index = dragged.index, "drag started");
                true
            }
            Err(err) => {
                debug!(error = %err, "drag start ignored");
                false
            }
        }
    }

    /// Pointer moved over `kind`'s list during a drag.
    pub fn drag_over(&mut self, kind: CollectionKind, pointer_y: f64) -> bool {
        match self.drag.over(&mut self.views[kind.position()], pointer_y) {
            Ok(()) => true,
            Err(err) => {
                debug!(error = %err, "drag over ignored");
                false
            }
        }
    }

    /// Drop on `kind`'s list. Returns whether the collection order changed.
    pub fn drop_on(&mut self, kind: CollectionKind, pointer_y: f64) -> bool {
        match self.drag.drop(&self.views[kind.position()], pointer_y) {
            Ok(DropOutcome::Committed(commit)) => {
                let moved = self.store.move_within(commit.kind, commit.from, commit.to);
                self.render(commit.kind);
                debug!(kind = %commit.kind, from = commit.from, to = commit.to, "reorder committed");
                moved
            }
            Ok(DropOutcome::Unchanged { index }) => {
                debug!(%kind, index, "drop at original position");
                false
            }
            Err(err) => {
                debug!(error = %err, "drop ignored");
                false
            }
        }
    }

    /// Gesture finished. Clears the dragging marker; never commits.
    pub fn drag_end(&mut self) {
        if let Some(dragged) = self.drag.dragged() {
            self.drag.end(&mut self.views[dragged.kind.position()]);
        }
    }

    fn render(&mut self, kind: CollectionKind) {
        self.views[kind.position()].rebuild(&self.store);
    }
}

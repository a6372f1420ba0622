//! Rendered list model.
//!
//! A [`ListView`] is the container a collection is projected into. The container
//! itself lives as long as the board; [`ListView::rebuild`] replaces its children
//! from the authoritative collection order. Between rebuilds the children may be
//! reordered as a drag preview without touching the store.

use syllabus_types::{CollectionKind, Entry, EntryId, Link, Module, Resource};

use crate::geometry::{ItemBox, ListGeometry, after_element};
use crate::store::CollectionStore;

/// What a rendered item shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemContent {
    Text(String),
    /// Hyperlink labeled with the link's name, drawn before the delete affordance.
    Link { label: String, url: String },
}

impl ItemContent {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            ItemContent::Text(text) => text,
            ItemContent::Link { label, .. } => label,
        }
    }
}

/// One rendered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualItem {
    kind: CollectionKind,
    /// Position in the collection when this item was rendered.
    index: usize,
    id: EntryId,
    content: ItemContent,
    dragging: bool,
}

impl VisualItem {
    #[must_use]
    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    /// Render-time index, used to resolve delete and drag sources.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &ItemContent {
        &self.content
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        self.kind.item_class()
    }
}

/// The container of one collection's rendered items.
#[derive(Debug, Clone)]
pub struct ListView {
    kind: CollectionKind,
    items: Vec<VisualItem>,
    geometry: ListGeometry,
}

impl ListView {
    #[must_use]
    pub fn new(kind: CollectionKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            geometry: ListGeometry::default(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        self.kind.heading()
    }

    /// Children in live order (including any drag preview).
    #[must_use]
    pub fn items(&self) -> &[VisualItem] {
        &self.items
    }

    #[must_use]
    pub fn geometry(&self) -> ListGeometry {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: ListGeometry) {
        self.geometry = geometry;
    }

    /// Replace every child with a fresh projection of the collection.
    pub fn rebuild(&mut self, store: &CollectionStore) {
        self.items = match self.kind {
            CollectionKind::Modules => project(store.modules(), |m: &Module| {
                ItemContent::Text(m.name().into())
            }),
            CollectionKind::Resources => project(store.resources(), |r: &Resource| {
                ItemContent::Text(r.name().into())
            }),
            CollectionKind::Links => project(store.links(), |l: &Link| ItemContent::Link {
                label: l.name().into(),
                url: l.url().into(),
            }),
        };
    }

    /// Live slot of the item rendered at collection index `index`.
    #[must_use]
    pub fn slot_of(&self, index: usize) -> Option<usize> {
        self.items.iter().position(|item| item.index == index)
    }

    /// Live slot under `pointer_y`.
    #[must_use]
    pub fn slot_at(&self, pointer_y: f64) -> Option<usize> {
        self.geometry.slot_at(pointer_y, self.items.len())
    }

    pub(crate) fn set_dragging(&mut self, index: usize, dragging: bool) -> bool {
        match self.items.iter_mut().find(|item| item.index == index) {
            Some(item) => {
                item.dragging = dragging;
                true
            }
            None => false,
        }
    }

    /// Position of the after element among the non-dragged children, in live order.
    ///
    /// `None` means the insertion point is the end of the list.
    #[must_use]
    pub fn after_position(&self, pointer_y: f64) -> Option<usize> {
        after_element(self.candidates(), pointer_y)
    }

    /// Number of non-dragged children.
    #[must_use]
    pub fn undragged_len(&self) -> usize {
        self.items.iter().filter(|item| !item.dragging).count()
    }

    /// Move the dragged child directly before the after element, or to the end.
    pub(crate) fn preview_insert(&mut self, dragged_slot: usize, pointer_y: f64) {
        let after = self.after_position(pointer_y);
        let item = self.items.remove(dragged_slot);
        // Positions among non-dragged children equal live slots once the dragged one is out.
        let target = after.unwrap_or(self.items.len());
        self.items.insert(target, item);
    }

    /// `(position among non-dragged children, box)` for each non-dragged child.
    fn candidates(&self) -> impl Iterator<Item = (usize, ItemBox)> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.dragging)
            .enumerate()
            .map(|(position, (slot, _))| (position, self.geometry.slot(slot)))
    }
}

fn project<'a, T, I, F>(entries: I, content: F) -> Vec<VisualItem>
where
    T: Entry + 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> ItemContent,
{
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| VisualItem {
            kind: T::KIND,
            index,
            id: entry.id(),
            content: content(entry),
            dragging: false,
        })
        .collect()
}

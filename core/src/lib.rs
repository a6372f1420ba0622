//! Core domain logic for Syllabus.
//!
//! Three ordered collections (modules, resources, links), the forms that feed
//! them, the rendered list model, and the drag-and-drop state machine that
//! reorders them. No IO and no terminal types: the host reports layout and
//! input, the board answers with state.

mod board;
mod clock;
mod drag;
pub mod errors;
mod field;
mod form;
mod geometry;
mod store;
mod view;

pub use board::Board;
pub use clock::{Clock, ManualClock, SystemClock};
pub use drag::{Commit, DragController, DragState, DraggedItem, DropOutcome};
pub use errors::{DragError, FormError};
pub use field::TextField;
pub use form::{Form, NAME_FIELD, URL_FIELD};
pub use geometry::{ItemBox, ListGeometry, after_element};
pub use store::{Collection, CollectionStore};
pub use view::{ItemContent, ListView, VisualItem};

pub use syllabus_types::{CollectionKind, Entry, EntryId, Link, Module, NewEntry, Resource};

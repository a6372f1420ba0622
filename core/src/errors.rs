//! Rejection reasons for user actions.
//!
//! None of these reach the screen. The board logs them and leaves state untouched.

use thiserror::Error;

use syllabus_types::CollectionKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{kind} form: field `{field}` is empty")]
    EmptyField {
        kind: CollectionKind,
        field: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    #[error("no drag in progress")]
    NotDragging,
    #[error("no item at position {position} in {kind}")]
    NoSuchItem {
        kind: CollectionKind,
        position: usize,
    },
    #[error("{container} does not own the dragged {owner}")]
    ForeignContainer {
        container: CollectionKind,
        owner: CollectionKind,
    },
    #[error("dragged item {index} of {kind} is no longer rendered")]
    StaleItem { kind: CollectionKind, index: usize },
}

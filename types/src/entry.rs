//! Entries and the collections they belong to.

use crate::{EntryId, NonEmptyString};

/// The three independent collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Modules,
    Resources,
    Links,
}

impl CollectionKind {
    pub const ALL: [Self; 3] = [Self::Modules, Self::Resources, Self::Links];

    /// Static heading drawn at the top of the collection's list.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Modules => "Modules",
            Self::Resources => "Resources",
            Self::Links => "Links",
        }
    }

    /// Class carried by every visual item of this collection.
    #[must_use]
    pub const fn item_class(self) -> &'static str {
        match self {
            Self::Modules => "module-item",
            Self::Resources => "resource-item",
            Self::Links => "link-item",
        }
    }

    #[must_use]
    pub const fn form_title(self) -> &'static str {
        match self {
            Self::Modules => "New module",
            Self::Resources => "New resource",
            Self::Links => "New link",
        }
    }

    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Modules => 0,
            Self::Resources => 1,
            Self::Links => 2,
        }
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.item_class())
    }
}

/// Common read access over the three entry shapes.
pub trait Entry {
    const KIND: CollectionKind;

    fn id(&self) -> EntryId;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    id: EntryId,
    name: NonEmptyString,
}

impl Module {
    #[must_use]
    pub fn new(id: EntryId, name: NonEmptyString) -> Self {
        Self { id, name }
    }
}

impl Entry for Module {
    const KIND: CollectionKind = CollectionKind::Modules;

    fn id(&self) -> EntryId {
        self.id
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    id: EntryId,
    name: NonEmptyString,
}

impl Resource {
    #[must_use]
    pub fn new(id: EntryId, name: NonEmptyString) -> Self {
        Self { id, name }
    }
}

impl Entry for Resource {
    const KIND: CollectionKind = CollectionKind::Resources;

    fn id(&self) -> EntryId {
        self.id
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// A named hyperlink. Both fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    id: EntryId,
    name: NonEmptyString,
    url: NonEmptyString,
}

impl Link {
    #[must_use]
    pub fn new(id: EntryId, name: NonEmptyString, url: NonEmptyString) -> Self {
        Self { id, name, url }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

impl Entry for Link {
    const KIND: CollectionKind = CollectionKind::Links;

    fn id(&self) -> EntryId {
        self.id
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// A freshly validated entry on its way into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewEntry {
    Module(Module),
    Resource(Resource),
    Link(Link),
}

impl NewEntry {
    #[must_use]
    pub fn kind(&self) -> CollectionKind {
        match self {
            NewEntry::Module(_) => CollectionKind::Modules,
            NewEntry::Resource(_) => CollectionKind::Resources,
            NewEntry::Link(_) => CollectionKind::Links,
        }
    }

    #[must_use]
    pub fn id(&self) -> EntryId {
        match self {
            NewEntry::Module(m) => m.id(),
            NewEntry::Resource(r) => r.id(),
            NewEntry::Link(l) => l.id(),
        }
    }
}

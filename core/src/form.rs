//! Entry forms: one per collection.

use syllabus_types::{CollectionKind, Link, Module, NewEntry, NonEmptyString, Resource};

use crate::clock::Clock;
use crate::errors::FormError;
use crate::field::TextField;

pub const NAME_FIELD: &str = "Name";
pub const URL_FIELD: &str = "URL";

/// The input fields of one collection's form.
#[derive(Debug, Clone)]
pub struct Form {
    kind: CollectionKind,
    fields: Vec<TextField>,
}

impl Form {
    #[must_use]
    pub fn new(kind: CollectionKind) -> Self {
        let fields = match kind {
            CollectionKind::Modules | CollectionKind::Resources => {
                vec![TextField::new(NAME_FIELD)]
            }
            CollectionKind::Links => vec![TextField::new(NAME_FIELD), TextField::new(URL_FIELD)],
        };
        Self { kind, fields }
    }

    #[must_use]
    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    #[must_use]
    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut TextField> {
        self.fields.get_mut(index)
    }

    /// Validate the trimmed field values and build the entry.
    ///
    /// On success every field is cleared. On rejection nothing changes.
    pub fn submit(&mut self, clock: &dyn Clock) -> Result<NewEntry, FormError> {
        let entry = match self.kind {
            CollectionKind::Modules => {
                let name = self.required(0)?;
                NewEntry::Module(Module::new(clock.next_id(), name))
            }
            CollectionKind::Resources => {
                let name = self.required(0)?;
                NewEntry::Resource(Resource::new(clock.next_id(), name))
            }
            CollectionKind::Links => {
                let name = self.required(0)?;
                let url = self.required(1)?;
                NewEntry::Link(Link::new(clock.next_id(), name, url))
            }
        };

        for field in &mut self.fields {
            field.clear();
        }
        Ok(entry)
    }

    fn required(&self, index: usize) -> Result<NonEmptyString, FormError> {
        let field = self.fields.get(index);
        field
            .and_then(|f| NonEmptyString::new(f.text()).ok())
            .ok_or(FormError::EmptyField {
                kind: self.kind,
                field: field.map_or(NAME_FIELD, TextField::label),
            })
    }
}

//! The collection store: three independent ordered sequences.
//!
//! Order is the only ranking signal. Storage order is visual order.
//! Every mutation is total: indices that do not resolve are no-ops.

use syllabus_types::{CollectionKind, Entry, Link, Module, NewEntry, Resource};

/// One ordered collection of entries.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    entries: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Collection<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Remove the entry at `index`. Out of range is a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Remove the entry at `from` and reinsert it at `to`.
    ///
    /// `to` indexes the sequence after removal and is clamped to its length.
    /// Returns whether the order changed.
    pub fn move_within(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.entries.len() {
            return false;
        }
        let entry = self.entries.remove(from);
        let to = to.min(self.entries.len());
        self.entries.insert(to, entry);
        from != to
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The three collections, owned for the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub struct CollectionStore {
    modules: Collection<Module>,
    resources: Collection<Resource>,
    links: Collection<Link>,
}

impl CollectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the tail of the entry's own collection.
    pub fn append(&mut self, entry: NewEntry) {
        match entry {
            NewEntry::Module(m) => self.modules.append(m),
            NewEntry::Resource(r) => self.resources.append(r),
            NewEntry::Link(l) => self.links.append(l),
        }
    }

    /// Returns whether an entry was removed.
    pub fn remove_at(&mut self, kind: CollectionKind, index: usize) -> bool {
        match kind {
            CollectionKind::Modules => self.modules.remove_at(index).is_some(),
            CollectionKind::Resources => self.resources.remove_at(index).is_some(),
            CollectionKind::Links => self.links.remove_at(index).is_some(),
        }
    }

    pub fn move_within(&mut self, kind: CollectionKind, from: usize, to: usize) -> bool {
        match kind {
            CollectionKind::Modules => self.modules.move_within(from, to),
            CollectionKind::Resources => self.resources.move_within(from, to),
            CollectionKind::Links => self.links.move_within(from, to),
        }
    }

    #[must_use]
    pub fn len(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::Modules => self.modules.len(),
            CollectionKind::Resources => self.resources.len(),
            CollectionKind::Links => self.links.len(),
        }
    }

    /// Names in order, for any collection.
    #[must_use]
    pub fn names(&self, kind: CollectionKind) -> Vec<&str> {
        fn collect<T: Entry>(c: &Collection<T>) -> Vec<&str> {
            c.iter().map(Entry::name).collect()
        }
        match kind {
            CollectionKind::Modules => collect(&self.modules),
            CollectionKind::Resources => collect(&self.resources),
            CollectionKind::Links => collect(&self.links),
        }
    }

    #[must_use]
    pub fn modules(&self) -> &Collection<Module> {
        &self.modules
    }

    #[must_use]
    pub fn resources(&self) -> &Collection<Resource> {
        &self.resources
    }

    #[must_use]
    pub fn links(&self) -> &Collection<Link> {
        &self.links
    }
}

#[cfg(test)]
mod tests {
    use super::{Collection, CollectionStore};
    use syllabus_types::{CollectionKind, EntryId, Module, NewEntry, NonEmptyString, Resource};

    fn letters(items: &[&'static str]) -> Collection<&'static str> {
        let mut c = Collection::new();
        for item in items {
            c.append(*item);
        }
        c
    }

    fn order(c: &Collection<&'static str>) -> Vec<&'static str> {
        c.iter().copied().collect()
    }

    fn module(id: i64, name: &str) -> NewEntry {
        NewEntry::Module(Module::new(
            EntryId::new(id),
            NonEmptyString::new(name).unwrap(),
        ))
    }

    #[test]
    fn remove_at_keeps_relative_order() {
        let mut c = letters(&["A", "B", "C", "D"]);
        assert_eq!(c.remove_at(1), Some("B"));
        assert_eq!(order(&c), ["A", "C", "D"]);
    }

    #[test]
    fn remove_at_out_of_range_is_noop() {
        let mut c = letters(&["A", "B"]);
        assert_eq!(c.remove_at(2), None);
        assert_eq!(order(&c), ["A", "B"]);
    }

    #[test]
    fn move_within_is_remove_then_insert() {
        let mut c = letters(&["A", "B", "C", "D"]);
        assert!(c.move_within(0, 2));
        // After removing A the sequence is [B, C, D]; index 2 is before D.
        assert_eq!(order(&c), ["B", "C", "A", "D"]);
    }

    #[test]
    fn move_within_to_front() {
        let mut c = letters(&["A", "C", "D"]);
        assert!(c.move_within(2, 0));
        assert_eq!(order(&c), ["D", "A", "C"]);
    }

    #[test]
    fn move_within_same_index_is_noop() {
        let mut c = letters(&["A", "B", "C"]);
        assert!(!c.move_within(1, 1));
        assert_eq!(order(&c), ["A", "B", "C"]);
    }

    #[test]
    fn move_within_clamps_destination() {
        let mut c = letters(&["A", "B", "C"]);
        assert!(c.move_within(0, 99));
        assert_eq!(order(&c), ["B", "C", "A"]);
    }

    #[test]
    fn move_within_bad_source_is_noop() {
        let mut c = letters(&["A", "B"]);
        assert!(!c.move_within(5, 0));
        assert_eq!(order(&c), ["A", "B"]);
    }

    #[test]
    fn move_is_its_own_inverse() {
        let original = ["A", "B", "C", "D", "E"];
        for i in 0..original.len() {
            for j in 0..original.len() {
                let mut c = letters(&original);
                c.move_within(i, j);
                // The moved entry now sits at j; moving it back to i restores the order.
                c.move_within(j, i);
                assert_eq!(order(&c), original, "move {i} -> {j} -> {i}");
            }
        }
    }

    #[test]
    fn store_routes_by_kind_without_cross_contamination() {
        let mut store = CollectionStore::new();
        store.append(module(1, "Ownership"));
        store.append(NewEntry::Resource(Resource::new(
            EntryId::new(2),
            NonEmptyString::new("The Book").unwrap(),
        )));

        assert_eq!(store.len(CollectionKind::Modules), 1);
        assert_eq!(store.len(CollectionKind::Resources), 1);
        assert_eq!(store.len(CollectionKind::Links), 0);

        assert!(!store.remove_at(CollectionKind::Links, 0));
        assert!(store.remove_at(CollectionKind::Modules, 0));
        assert_eq!(store.len(CollectionKind::Resources), 1);
        assert_eq!(store.names(CollectionKind::Resources), ["The Book"]);
    }
}

//! Keyed, insertion-ordered protein collection with snapshot diffing.
//!
//! The collection keeps two structures in step on every mutation:
//! - `entries`: insertion sequence number -> record (iteration order)
//! - `index`: project number -> insertion sequence number
//!
//! Replacing a key removes its old entry and appends the new one, so a
//! replaced protein moves to the end of iteration order.

use crate::change::ProteinChange;
use crate::protein::Protein;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A collection of valid proteins keyed by project number.
#[derive(Debug, Clone, Default)]
pub struct ProteinCollection {
    entries: BTreeMap<u64, Arc<Protein>>,
    index: FxHashMap<i32, u64>,
    next_seq: u64,
}

impl ProteinCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from the valid proteins in `proteins`.
    /// Invalid proteins are dropped.
    pub fn from_proteins<I>(proteins: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arc<Protein>>,
    {
        let mut collection = Self::new();
        for protein in proteins {
            collection.add(protein);
        }
        collection
    }

    /// Number of stored proteins.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains(&self, project_number: i32) -> bool {
        self.index.contains_key(&project_number)
    }

    /// Look up a protein by project number.
    pub fn get(&self, project_number: i32) -> Option<&Protein> {
        self.get_shared(project_number).map(Arc::as_ref)
    }

    /// Look up the shared handle of a protein by project number.
    pub fn get_shared(&self, project_number: i32) -> Option<&Arc<Protein>> {
        let seq = self.index.get(&project_number)?;
        self.entries.get(seq)
    }

    /// Iterate over stored proteins in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Protein> + '_ {
        self.entries.values().map(Arc::as_ref)
    }

    /// Clone the stored proteins sorted by project number.
    pub fn to_sorted_vec(&self) -> Vec<Protein> {
        let mut proteins: Vec<Protein> = self.iter().cloned().collect();
        proteins.sort_by_key(|p| p.project_number);
        proteins
    }

    /// Insert a protein, replacing any protein with the same project number.
    ///
    /// Returns `false` (and stores nothing) when the protein is not valid.
    pub fn add(&mut self, protein: impl Into<Arc<Protein>>) -> bool {
        let protein = protein.into();
        if !protein.is_valid() {
            return false;
        }
        self.remove(protein.project_number);
        self.push(protein);
        true
    }

    /// Remove and return the protein stored under `project_number`.
    pub fn remove(&mut self, project_number: i32) -> Option<Arc<Protein>> {
        let seq = self.index.remove(&project_number)?;
        self.entries.remove(&seq)
    }

    /// Apply a snapshot of proteins to this collection.
    ///
    /// Every valid incoming protein replaces the stored one with the same
    /// project number (even when nothing differs) and yields exactly one
    /// [`ProteinChange`], in input order. Invalid proteins are ignored.
    /// Stored proteins missing from the snapshot are left untouched.
    pub fn update<I>(&mut self, proteins: I) -> Vec<ProteinChange>
    where
        I: IntoIterator,
        I::Item: Into<Arc<Protein>>,
    {
        let mut changes = Vec::new();
        for protein in proteins {
            let protein = protein.into();
            if !protein.is_valid() {
                log::debug!(
                    "ignoring invalid protein {} during update",
                    protein.project_number
                );
                continue;
            }

            let project_number = protein.project_number;
            let change = match self.remove(project_number) {
                Some(previous) => {
                    let property_changes = protein.changes_from(&previous);
                    if property_changes.is_empty() {
                        ProteinChange::unchanged(project_number)
                    } else {
                        ProteinChange::changed(project_number, property_changes)
                    }
                }
                None => ProteinChange::added(project_number),
            };
            changes.push(change);
            self.push(protein);
        }

        log::debug!(
            "update applied {} changes, collection holds {} proteins",
            changes.len(),
            self.len()
        );
        changes
    }

    fn push(&mut self, protein: Arc<Protein>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(protein.project_number, seq);
        self.entries.insert(seq, protein);
    }
}

impl<T: Into<Arc<Protein>>> FromIterator<T> for ProteinCollection {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_proteins(iter)
    }
}

impl<T: Into<Arc<Protein>>> Extend<T> for ProteinCollection {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for protein in iter {
            self.add(protein);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::ChangeAction;

    fn valid(project_number: i32) -> Protein {
        Protein {
            project_number,
            preferred_days: 1.0,
            maximum_days: 1.0,
            credit: 1.0,
            frames: 100,
            ..Protein::default()
        }
    }

    fn collection_for_update() -> ProteinCollection {
        ProteinCollection::from_proteins([valid(1), valid(2), valid(3)])
    }

    fn proteins_to_update() -> Vec<Arc<Protein>> {
        let mut p1 = valid(1);
        p1.credit = 100.0;
        let mut p2 = valid(2);
        p2.maximum_days = 3.0;
        p2.k_factor = 26.4;
        vec![
            Arc::new(p1),
            Arc::new(p2),
            Arc::new(valid(3)),
            Arc::new(valid(4)),
        ]
    }

    #[test]
    fn test_contains_empty() {
        let collection = ProteinCollection::new();
        assert!(!collection.contains(1));
        assert!(collection.get(1).is_none());
        assert!(collection.is_empty());
    }

    #[test]
    fn test_contains_and_get() {
        let collection = ProteinCollection::from_proteins([valid(1)]);
        assert!(collection.contains(1));
        assert_eq!(collection.get(1).unwrap().project_number, 1);
    }

    #[test]
    fn test_from_proteins_drops_invalid() {
        let collection: ProteinCollection = vec![valid(1), valid(2), Protein::new(3)]
            .into_iter()
            .collect();
        assert_eq!(collection.len(), 2);
        assert!(collection.contains(1));
        assert!(collection.contains(2));
        assert!(!collection.contains(3));
    }

    #[test]
    fn test_add_replaces_and_moves_to_end() {
        let mut collection = ProteinCollection::from_proteins([valid(1), valid(2)]);
        let mut p1 = valid(1);
        p1.credit = 9.0;
        assert!(collection.add(p1));
        assert!(!collection.add(Protein::new(5)));

        let order: Vec<i32> = collection.iter().map(|p| p.project_number).collect();
        assert_eq!(order, vec![2, 1]);
        assert_eq!(collection.get(1).unwrap().credit, 9.0);
    }

    #[test]
    fn test_update_adds_valid_proteins() {
        let mut collection = ProteinCollection::new();
        let changes = collection.update([valid(1), valid(2), Protein::new(3)]);

        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].project_number, 1);
        assert_eq!(changes[0].action(), ChangeAction::Added);
        assert!(changes[0].property_changes().is_empty());
        assert_eq!(changes[1].project_number, 2);
        assert_eq!(changes[1].action(), ChangeAction::Added);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_update_returns_changes() {
        let mut collection = collection_for_update();
        let changes = collection.update(proteins_to_update());

        assert_eq!(changes.len(), 4);

        assert_eq!(changes[0].project_number, 1);
        assert_eq!(changes[0].action(), ChangeAction::Changed);
        let property_changes = changes[0].property_changes();
        assert_eq!(property_changes.len(), 1);
        assert_eq!(property_changes[0].property_name, "credit");
        assert_eq!(property_changes[0].previous, "1");
        assert_eq!(property_changes[0].current, "100");

        assert_eq!(changes[1].project_number, 2);
        assert_eq!(changes[1].action(), ChangeAction::Changed);
        let property_changes = changes[1].property_changes();
        assert_eq!(property_changes.len(), 2);
        assert_eq!(property_changes[0].property_name, "maximum_days");
        assert_eq!(property_changes[0].previous, "1");
        assert_eq!(property_changes[0].current, "3");
        assert_eq!(property_changes[1].property_name, "k_factor");
        assert_eq!(property_changes[1].previous, "0");
        assert_eq!(property_changes[1].current, "26.4");

        assert_eq!(changes[2].project_number, 3);
        assert_eq!(changes[2].action(), ChangeAction::Unchanged);
        assert!(changes[2].property_changes().is_empty());

        assert_eq!(changes[3].project_number, 4);
        assert_eq!(changes[3].action(), ChangeAction::Added);
    }

    #[test]
    fn test_update_alters_contents() {
        let mut collection = collection_for_update();
        collection.update(proteins_to_update());

        assert_eq!(collection.len(), 4);
        assert_eq!(collection.get(1).unwrap().credit, 100.0);
        assert_eq!(collection.get(2).unwrap().maximum_days, 3.0);
        assert_eq!(collection.get(2).unwrap().k_factor, 26.4);
        assert!(collection.contains(3));
        assert!(collection.contains(4));
    }

    #[test]
    fn test_update_replaces_shared_handles() {
        let mut collection = collection_for_update();
        let incoming = proteins_to_update();
        collection.update(incoming.iter().cloned());

        let stored: Vec<&Arc<Protein>> = collection.entries.values().collect();
        assert_eq!(stored.len(), incoming.len());
        for (stored, incoming) in stored.iter().zip(incoming.iter()) {
            assert!(Arc::ptr_eq(stored, incoming));
        }
    }

    #[test]
    fn test_update_leaves_absent_keys() {
        let mut collection = collection_for_update();
        let before = Arc::clone(collection.get_shared(3).unwrap());

        let changes = collection.update([valid(1)]);
        assert_eq!(changes.len(), 1);
        assert_eq!(collection.len(), 3);
        assert!(Arc::ptr_eq(collection.get_shared(3).unwrap(), &before));
    }

    #[test]
    fn test_update_ignores_invalid() {
        let mut collection = collection_for_update();
        let mut broken = valid(2);
        broken.frames = 0;

        let changes = collection.update([broken, Protein::new(-1)]);
        assert!(changes.is_empty());
        assert_eq!(collection.get(2).unwrap().frames, 100);
    }

    #[test]
    fn test_to_sorted_vec() {
        let collection = ProteinCollection::from_proteins([valid(9), valid(2), valid(5)]);
        let keys: Vec<i32> = collection
            .to_sorted_vec()
            .iter()
            .map(|p| p.project_number)
            .collect();
        assert_eq!(keys, vec![2, 5, 9]);
    }
}

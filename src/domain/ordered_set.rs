// ============================================================
// Layer 3 — OrderedSet
// ============================================================
// A sequence of DISTINCT elements with O(1) index lookup.
//
// Vocabulary and LabelSet are both OrderedSets. Position i of
// every indicator vector refers to element i of the set, so:
//   - elements are unique (enforced on construction)
//   - order never changes after the set is handed out
//
// Growth is crate-private: only the corpus organizer builds sets
// incrementally, and it freezes them before any vector is encoded.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::error::{PipelineError, PipelineResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedSet<T: Eq + Hash + Clone> {
    items:     Vec<T>,
    positions: HashMap<T, usize>,
}

/// Distinct normalised words; fixes the feature vector layout
pub type Vocabulary = OrderedSet<String>;

/// Distinct labels in first-occurrence order; fixes the label vector layout
pub type LabelSet = OrderedSet<String>;

impl<T: Eq + Hash + Clone> OrderedSet<T> {
    pub fn new() -> Self {
        Self {
            items:     Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Take ownership of a sequence that must already be duplicate-free.
    ///
    /// # Errors
    /// `PipelineError::Precondition` naming the first repeated position.
    pub fn try_from_vec(items: Vec<T>) -> PipelineResult<Self> {
        let mut positions = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if let Some(first) = positions.insert(item.clone(), i) {
                return Err(PipelineError::Precondition(format!(
                    "superset must have distinct elements: position {i} repeats position {first}"
                )));
            }
        }
        Ok(Self { items, positions })
    }

    /// Append `item` unless already present. Returns true if it was new.
    pub(crate) fn push_if_absent(&mut self, item: T) -> bool {
        if self.positions.contains_key(&item) {
            return false;
        }
        self.positions.insert(item.clone(), self.items.len());
        self.items.push(item);
        true
    }

    /// Index of `item`, if present
    pub fn position<Q>(&self, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(item).copied()
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(item)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Eq + Hash + Clone> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collecting keeps the first occurrence of each element and drops repeats.
impl<T: Eq + Hash + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.push_if_absent(item);
        }
        set
    }
}

impl<'a, T: Eq + Hash + Clone> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

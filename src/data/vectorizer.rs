// ============================================================
// Layer 4 — Vectorizer
// ============================================================
// Encodes a subset against a fixed, ordered superset as a binary
// indicator vector:
//
//   superset: [are, hi, there, you]
//   subset:   {hi, there}
//   vector:   [0,   1,  1,     0]
//
// result.len() == superset.len(), always. Position i is 1 iff
// superset[i] is in the subset.
//
// The subset is copied into a HashSet once per call, so each
// encode is O(|superset| + |subset|) instead of scanning the
// subset for every superset position.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

use crate::domain::error::{PipelineError, PipelineResult};
use crate::domain::ordered_set::OrderedSet;

/// Fixed-length 0/1 vector aligned to a superset's order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorVector(Vec<u8>);

impl IndicatorVector {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of positions set to 1
    pub fn ones(&self) -> usize {
        self.0.iter().filter(|&&b| b == 1).count()
    }

    pub fn is_set(&self, index: usize) -> bool {
        self.0.get(index) == Some(&1)
    }

    /// Positions set to 1, ascending
    pub fn set_positions(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, b)| **b == 1)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

/// Encode `subset` against a superset whose elements are known to be distinct.
pub fn encode<'a, T, I>(superset: &OrderedSet<T>, subset: I) -> IndicatorVector
where
    T: Eq + Hash + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    indicate(superset.as_slice(), subset)
}

/// Encode a single element as a one-element subset (e.g. one label → one-hot row).
pub fn encode_one<T>(superset: &OrderedSet<T>, item: &T) -> IndicatorVector
where
    T: Eq + Hash + Clone,
{
    encode(superset, std::iter::once(item))
}

/// Encode against a raw slice, checking that the slice really is a set.
///
/// # Errors
/// `PipelineError::Precondition` if `superset` contains a duplicate.
pub fn encode_slice<'a, T, I>(superset: &'a [T], subset: I) -> PipelineResult<IndicatorVector>
where
    T: Eq + Hash,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::with_capacity(superset.len());
    for (i, item) in superset.iter().enumerate() {
        if !seen.insert(item) {
            return Err(PipelineError::Precondition(format!(
                "superset must have distinct elements: duplicate at position {i}"
            )));
        }
    }
    Ok(indicate(superset, subset))
}

fn indicate<'a, T, I>(superset: &[T], subset: I) -> IndicatorVector
where
    T: Eq + Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let members: HashSet<&T> = subset.into_iter().collect();
    IndicatorVector(
        superset
            .iter()
            .map(|item| u8::from(members.contains(item)))
            .collect(),
    )
}

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Owned vertex sets used for the candidate, excluded and clique sets of the
//! search.
//!
//! Sets iterate in insertion order, so two enumerations over graphs built the
//! same way visit candidates in the same order.

use std::fmt;
use std::hash::Hash;

use foldhash::fast::RandomState;
use indexmap::IndexSet;

/// Identifier of a graph vertex.
///
/// Anything hashable, comparable and printable qualifies; the blanket impl
/// covers integers, strings and petgraph's `NodeIndex`.
pub trait Vertex: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> Vertex for T {}

/// Insertion-ordered hash set of vertices.
#[derive(Clone)]
pub struct VertexSet<V> {
    inner: IndexSet<V, RandomState>,
}

impl<V: Vertex> VertexSet<V> {
    pub fn new() -> Self {
        VertexSet {
            inner: IndexSet::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        VertexSet {
            inner: IndexSet::with_capacity_and_hasher(capacity, RandomState::default()),
        }
    }

    /// Insert `vertex`, returning `true` if it was not already present.
    pub fn insert(&mut self, vertex: V) -> bool {
        self.inner.insert(vertex)
    }

    /// Remove `vertex`, keeping the relative order of the remaining members.
    ///
    /// Linear in the size of the set: later members shift down one slot.
    /// The search relies on candidate order staying stable so every variant
    /// visits vertices in the same order.
    pub fn remove(&mut self, vertex: &V) -> bool {
        self.inner.shift_remove(vertex)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.inner.contains(vertex)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, V> {
        self.inner.iter()
    }

    /// Members of `self` that are also in `other`, in `self`'s order.
    pub fn intersection(&self, other: &VertexSet<V>) -> VertexSet<V> {
        self.inner.intersection(&other.inner).cloned().collect()
    }

    pub fn union(&self, other: &VertexSet<V>) -> VertexSet<V> {
        self.inner.union(&other.inner).cloned().collect()
    }

    pub fn difference(&self, other: &VertexSet<V>) -> VertexSet<V> {
        self.inner.difference(&other.inner).cloned().collect()
    }

    /// A copy of `self` extended by `vertex`.
    pub fn with(&self, vertex: V) -> VertexSet<V> {
        let mut extended = VertexSet::with_capacity(self.len() + 1);
        extended.inner.extend(self.inner.iter().cloned());
        extended.insert(vertex);
        extended
    }

    /// `true` if every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &VertexSet<V>) -> bool {
        self.inner.is_subset(&other.inner)
    }

    /// Frozen copy of the members, in iteration order.
    pub fn snapshot(&self) -> Vec<V> {
        self.inner.iter().cloned().collect()
    }

    /// Members in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<V> {
        let mut members = self.snapshot();
        members.sort_unstable();
        members
    }
}

impl<V: Vertex> Default for VertexSet<V> {
    fn default() -> Self {
        VertexSet::new()
    }
}

/// Set equality: membership only, order is ignored.
impl<V: Vertex> PartialEq for VertexSet<V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<V: Vertex> Eq for VertexSet<V> {}

impl<V: Vertex> fmt::Debug for VertexSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.iter()).finish()
    }
}

impl<V: Vertex> FromIterator<V> for VertexSet<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        VertexSet {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<V: Vertex> Extend<V> for VertexSet<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<V: Vertex> IntoIterator for VertexSet<V> {
    type Item = V;
    type IntoIter = indexmap::set::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, V: Vertex> IntoIterator for &'a VertexSet<V> {
    type Item = &'a V;
    type IntoIter = indexmap::set::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<V: Vertex, const N: usize> From<[V; N]> for VertexSet<V> {
    fn from(members: [V; N]) -> Self {
        members.into_iter().collect()
    }
}

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

use std::borrow::Cow;

use foldhash::fast::RandomState;
use indexmap::IndexMap;

use super::GraphAdapter;
use crate::error::{CliqueError, Result};
use crate::vertex_set::{Vertex, VertexSet};

/// Undirected simple graph stored as an adjacency list.
///
/// Vertices are kept in the order they were first seen, which fixes the order
/// in which the clique search visits them.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<V: Vertex> {
    adjacency: IndexMap<V, VertexSet<V>, RandomState>,
}

impl<V: Vertex> AdjacencyGraph<V> {
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: IndexMap::default(),
        }
    }

    /// Build a graph from an edge list, adding endpoints as they appear.
    ///
    /// Self-loops are dropped and repeated edges collapse into one.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = AdjacencyGraph::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Build a graph from adjacency lists keyed by vertex.
    ///
    /// Lists may be one-sided; an edge named from either end is added in both
    /// directions. Self-references are dropped. Fails with
    /// [`CliqueError::InvalidVertex`] if a list names a vertex that has no
    /// list of its own.
    pub fn from_adjacency<I, N>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let lists: Vec<(V, Vec<V>)> = adjacency
            .into_iter()
            .map(|(vertex, neighbors)| (vertex, neighbors.into_iter().collect()))
            .collect();

        let mut graph = AdjacencyGraph::new();
        for (vertex, _) in &lists {
            graph.add_vertex(vertex.clone());
        }
        for (vertex, neighbors) in lists {
            for neighbor in neighbors {
                if !graph.contains_vertex(&neighbor) {
                    return Err(CliqueError::invalid_vertex(&neighbor));
                }
                graph.add_edge(vertex.clone(), neighbor);
            }
        }
        Ok(graph)
    }

    /// Add an isolated vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, VertexSet::new());
        true
    }

    /// Add the undirected edge `{u, v}`, inserting missing endpoints.
    ///
    /// A self-loop only registers the vertex. Returns `true` if the edge is new.
    pub fn add_edge(&mut self, u: V, v: V) -> bool {
        if u == v {
            self.add_vertex(u);
            return false;
        }
        let inserted = self
            .adjacency
            .entry(u.clone())
            .or_default()
            .insert(v.clone());
        self.adjacency.entry(v).or_default().insert(u);
        inserted
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(VertexSet::len).sum::<usize>() / 2
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbors| neighbors.contains(v))
    }
}

impl<V: Vertex> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        AdjacencyGraph::new()
    }
}

impl<V: Vertex> FromIterator<(V, V)> for AdjacencyGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        AdjacencyGraph::from_edges(edges)
    }
}

impl<V: Vertex> GraphAdapter for AdjacencyGraph<V> {
    type Vertex = V;

    fn vertices(&self) -> VertexSet<V> {
        self.adjacency.keys().cloned().collect()
    }

    fn neighbors(&self, vertex: &V) -> Result<Cow<'_, VertexSet<V>>> {
        self.adjacency
            .get(vertex)
            .map(Cow::Borrowed)
            .ok_or_else(|| CliqueError::invalid_vertex(vertex))
    }
}

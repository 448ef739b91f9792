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

//! [`GraphAdapter`] for petgraph's undirected graph types.
//!
//! petgraph allows self-loops and parallel edges; both are hidden here so the
//! search only ever sees a simple graph.

use std::borrow::Cow;

use petgraph::graph::{Graph, IndexType, NodeIndex};
use petgraph::graphmap::{GraphMap, NodeTrait};
use petgraph::stable_graph::StableGraph;
use petgraph::Undirected;

use super::GraphAdapter;
use crate::error::{CliqueError, Result};
use crate::vertex_set::{Vertex, VertexSet};

fn simple_neighbors<V, I>(vertex: &V, neighbors: I) -> VertexSet<V>
where
    V: Vertex,
    I: Iterator<Item = V>,
{
    neighbors.filter(|neighbor| neighbor != vertex).collect()
}

impl<N, E, Ix: IndexType> GraphAdapter for Graph<N, E, Undirected, Ix> {
    type Vertex = NodeIndex<Ix>;

    fn vertices(&self) -> VertexSet<NodeIndex<Ix>> {
        self.node_indices().collect()
    }

    fn neighbors(&self, vertex: &NodeIndex<Ix>) -> Result<Cow<'_, VertexSet<NodeIndex<Ix>>>> {
        if self.node_weight(*vertex).is_none() {
            return Err(CliqueError::invalid_vertex(vertex));
        }
        Ok(Cow::Owned(simple_neighbors(
            vertex,
            Graph::neighbors(self, *vertex),
        )))
    }
}

impl<N, E, Ix: IndexType> GraphAdapter for StableGraph<N, E, Undirected, Ix> {
    type Vertex = NodeIndex<Ix>;

    fn vertices(&self) -> VertexSet<NodeIndex<Ix>> {
        self.node_indices().collect()
    }

    fn neighbors(&self, vertex: &NodeIndex<Ix>) -> Result<Cow<'_, VertexSet<NodeIndex<Ix>>>> {
        if !self.contains_node(*vertex) {
            return Err(CliqueError::invalid_vertex(vertex));
        }
        Ok(Cow::Owned(simple_neighbors(
            vertex,
            StableGraph::neighbors(self, *vertex),
        )))
    }
}

impl<N, E> GraphAdapter for GraphMap<N, E, Undirected>
where
    N: NodeTrait + Vertex,
{
    type Vertex = N;

    fn vertices(&self) -> VertexSet<N> {
        self.nodes().collect()
    }

    fn neighbors(&self, vertex: &N) -> Result<Cow<'_, VertexSet<N>>> {
        if !self.contains_node(*vertex) {
            return Err(CliqueError::invalid_vertex(vertex));
        }
        Ok(Cow::Owned(simple_neighbors(
            vertex,
            GraphMap::neighbors(self, *vertex),
        )))
    }
}

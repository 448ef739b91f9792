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

//! Read-only graph access needed by the clique search.

mod adjacency;
mod petgraph_impls;

pub use adjacency::AdjacencyGraph;

use std::borrow::Cow;

use crate::error::Result;
use crate::vertex_set::{Vertex, VertexSet};

/// Vertex enumeration and neighbor lookup over an undirected simple graph.
///
/// Implementations must answer symmetrically (`u` in `neighbors(v)` iff `v`
/// in `neighbors(u)`) and must never report a vertex as its own neighbor.
/// The search borrows the graph for its whole duration, so answers stay
/// consistent while it runs.
pub trait GraphAdapter {
    type Vertex: Vertex;

    /// All vertices of the graph.
    fn vertices(&self) -> VertexSet<Self::Vertex>;

    /// All vertices adjacent to `vertex`.
    ///
    /// Fails with [`crate::CliqueError::InvalidVertex`] if `vertex` is not in
    /// the graph.
    fn neighbors(&self, vertex: &Self::Vertex) -> Result<Cow<'_, VertexSet<Self::Vertex>>>;
}

impl<G: GraphAdapter + ?Sized> GraphAdapter for &G {
    type Vertex = G::Vertex;

    fn vertices(&self) -> VertexSet<Self::Vertex> {
        (**self).vertices()
    }

    fn neighbors(&self, vertex: &Self::Vertex) -> Result<Cow<'_, VertexSet<Self::Vertex>>> {
        (**self).neighbors(vertex)
    }
}

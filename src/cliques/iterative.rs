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

use std::vec;

use tracing::{debug, trace};

use super::Clique;
use crate::error::Result;
use crate::graph::GraphAdapter;
use crate::vertex_set::{Vertex, VertexSet};

/// One suspended level of the search.
struct Frame<V: Vertex> {
    clique: Clique<V>,
    candidates: VertexSet<V>,
    excluded: VertexSet<V>,
    /// Candidates still to expand, frozen when the frame was created.
    pending: vec::IntoIter<V>,
    /// Vertex whose branch is currently being explored.
    expanding: Option<V>,
}

impl<V: Vertex> Frame<V> {
    fn new(clique: Clique<V>, candidates: VertexSet<V>, excluded: VertexSet<V>) -> Self {
        let pending = candidates.snapshot().into_iter();
        Frame {
            clique,
            candidates,
            excluded,
            pending,
            expanding: None,
        }
    }
}

/// Find all maximal cliques using an explicit stack instead of recursion.
///
/// Produces the same cliques in the same order as
/// [`crate::find_maximal_cliques`]. Suspended levels are kept as frames on a
/// heap-allocated stack rather than as native call frames. This does not make
/// deep searches cheaper: without pivoting, growing a clique of size `k`
/// still explores on the order of `2^k` branches.
pub fn find_maximal_cliques_iterative<G: GraphAdapter>(
    graph: &G,
) -> Result<Vec<Clique<G::Vertex>>> {
    let vertices = graph.vertices();
    debug!(vertices = vertices.len(), "enumerating maximal cliques iteratively");

    let mut cliques = Vec::new();
    if vertices.is_empty() {
        cliques.push(VertexSet::new());
        return Ok(cliques);
    }

    let mut stack = vec![Frame::new(VertexSet::new(), vertices, VertexSet::new())];
    let mut max_depth = 1;
    while let Some(frame) = stack.last_mut() {
        // The previous branch of this frame is done; retire its vertex.
        if let Some(done) = frame.expanding.take() {
            frame.candidates.remove(&done);
            frame.excluded.insert(done);
        }

        let Some(vertex) = frame.pending.next() else {
            stack.pop();
            continue;
        };

        let neighbors = graph.neighbors(&vertex)?;
        let clique = frame.clique.with(vertex.clone());
        let candidates = frame.candidates.intersection(&neighbors);
        let excluded = frame.excluded.intersection(&neighbors);
        frame.expanding = Some(vertex);

        if candidates.is_empty() && excluded.is_empty() {
            trace!(size = clique.len(), "found maximal clique");
            cliques.push(clique);
        } else {
            stack.push(Frame::new(clique, candidates, excluded));
            max_depth = max_depth.max(stack.len());
        }
    }

    debug!(
        cliques = cliques.len(),
        max_depth, "maximal clique enumeration finished"
    );
    Ok(cliques)
}

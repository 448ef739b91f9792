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
// Bron, C.; Kerbosch, J. (1973). "Algorithm 457: finding all cliques of an undirected graph". Communications of the ACM. 16 (9): 575–577. doi:10.1145/362342.362367.

mod bitset;
mod iterative;
pub mod limits;

pub use bitset::find_maximal_cliques_bitset;
pub use iterative::find_maximal_cliques_iterative;
pub use limits::{find_maximal_cliques_with_limits, SearchLimits};

use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::GraphAdapter;
use crate::vertex_set::VertexSet;

/// A maximal clique, as a set of vertices.
pub type Clique<V> = VertexSet<V>;

/// Find all maximal cliques in a graph.
///
/// These are the complete subgraphs that cannot be extended by any other
/// vertex. This is the plain Bron-Kerbosch search without pivoting: every
/// candidate is expanded, so dense graphs pay for the exponential number of
/// branches.
///
/// The returned cliques are in discovery order, which depends on the
/// graph's vertex order. A graph with no vertices has exactly one maximal
/// clique, the empty one.
///
/// Fails with [`crate::CliqueError::InvalidVertex`] if the graph reports a
/// neighbor it cannot look up. Nothing found before the failure is returned.
pub fn find_maximal_cliques<G: GraphAdapter>(graph: &G) -> Result<Vec<Clique<G::Vertex>>> {
    enumerate(graph, &mut Unbounded)
}

/// Hooks the bounded entry point uses to stop a search early.
pub(crate) trait SearchGuard {
    /// Called on entry to every search call, `depth` being the size of the
    /// clique under construction.
    fn enter(&mut self, depth: usize) -> Result<()>;

    /// Called before a maximal clique is recorded, with the number already
    /// recorded.
    fn record(&mut self, found: usize) -> Result<()>;
}

struct Unbounded;

impl SearchGuard for Unbounded {
    #[inline]
    fn enter(&mut self, _depth: usize) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn record(&mut self, _found: usize) -> Result<()> {
        Ok(())
    }
}

pub(crate) fn enumerate<G, P>(graph: &G, guard: &mut P) -> Result<Vec<Clique<G::Vertex>>>
where
    G: GraphAdapter,
    P: SearchGuard,
{
    let candidates = graph.vertices();
    debug!(vertices = candidates.len(), "enumerating maximal cliques");

    let mut cliques = Vec::new();
    bron_kerbosch(
        graph,
        VertexSet::new(),
        candidates,
        VertexSet::new(),
        &mut cliques,
        guard,
    )?;

    debug!(cliques = cliques.len(), "maximal clique enumeration finished");
    Ok(cliques)
}

/// One level of the search.
///
/// `candidates` and `excluded` belong to this call: after each branch
/// returns, the vertex it expanded moves from `candidates` to `excluded` so
/// later siblings cannot rebuild the same clique. `clique` is never touched;
/// every branch gets its own extended copy.
fn bron_kerbosch<G, P>(
    graph: &G,
    clique: Clique<G::Vertex>,
    mut candidates: VertexSet<G::Vertex>,
    mut excluded: VertexSet<G::Vertex>,
    cliques: &mut Vec<Clique<G::Vertex>>,
    guard: &mut P,
) -> Result<()>
where
    G: GraphAdapter,
    P: SearchGuard,
{
    guard.enter(clique.len())?;

    if candidates.is_empty() && excluded.is_empty() {
        guard.record(cliques.len())?;
        trace!(size = clique.len(), "found maximal clique");
        cliques.push(clique);
        return Ok(());
    }

    // The loop removes from `candidates`, so walk a copy taken up front.
    for vertex in candidates.snapshot() {
        let neighbors = graph.neighbors(&vertex)?;
        bron_kerbosch(
            graph,
            clique.with(vertex.clone()),
            candidates.intersection(&neighbors),
            excluded.intersection(&neighbors),
            cliques,
            guard,
        )?;

        candidates.remove(&vertex);
        excluded.insert(vertex);
    }
    Ok(())
}

/// `true` if `found` and `expected` hold the same cliques, ignoring order.
#[cfg(test)]
pub(crate) fn same_cliques<V: crate::vertex_set::Vertex>(
    found: &[Clique<V>],
    expected: &[&[V]],
) -> bool {
    let mut found: Vec<Vec<V>> = found.iter().map(VertexSet::to_sorted_vec).collect();
    let mut expected: Vec<Vec<V>> = expected
        .iter()
        .map(|clique| {
            let mut clique = clique.to_vec();
            clique.sort_unstable();
            clique
        })
        .collect();
    found.sort();
    expected.sort();
    found == expected
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{find_maximal_cliques, same_cliques};
    use crate::error::{CliqueError, Result};
    use crate::graph::{AdjacencyGraph, GraphAdapter};
    use crate::vertex_set::VertexSet;

    #[test]
    fn empty_graph_has_one_empty_clique() {
        let graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
        let cliques = find_maximal_cliques(&graph).unwrap();
        assert_eq!(cliques.len(), 1);
        assert!(cliques[0].is_empty());
    }

    #[test]
    fn isolated_vertex_is_its_own_clique() {
        let mut graph = AdjacencyGraph::new();
        graph.add_vertex('v');
        let cliques = find_maximal_cliques(&graph).unwrap();
        assert!(same_cliques(&cliques, &[&['v']]));
    }

    #[test]
    fn triangle_plus_isolated_vertex() {
        let mut graph = AdjacencyGraph::from_edges([(1, 2), (1, 3), (2, 3)]);
        graph.add_vertex(4);
        let cliques = find_maximal_cliques(&graph).unwrap();
        assert!(same_cliques(&cliques, &[&[1, 2, 3], &[4]]));
    }

    #[test]
    fn triangle_with_pendant_edge() {
        let graph = AdjacencyGraph::from_edges([(1, 2), (1, 3), (2, 3), (3, 4)]);
        let cliques = find_maximal_cliques(&graph).unwrap();
        assert!(same_cliques(&cliques, &[&[1, 2, 3], &[3, 4]]));
    }

    #[test]
    fn six_vertex_graph() {
        let graph = AdjacencyGraph::from_edges([
            (1, 5),
            (1, 2),
            (2, 5),
            (2, 3),
            (5, 4),
            (3, 4),
            (4, 6),
        ]);
        let cliques = find_maximal_cliques(&graph).unwrap();
        assert_eq!(cliques.len(), 5);
        assert!(same_cliques(
            &cliques,
            &[&[1, 2, 5], &[2, 3], &[3, 4], &[4, 5], &[4, 6]]
        ));
    }

    #[test]
    fn discovery_order_follows_vertex_order() {
        let graph = AdjacencyGraph::from_edges([(1, 2), (1, 3), (2, 3), (3, 4)]);
        let cliques = find_maximal_cliques(&graph).unwrap();
        let sorted: Vec<Vec<i32>> = cliques.iter().map(|c| c.to_sorted_vec()).collect();
        assert_eq!(sorted, vec![vec![1, 2, 3], vec![3, 4]]);
    }

    #[test]
    fn complete_graph_is_one_clique() {
        let edges = (0..6u8).flat_map(|u| (u + 1..6).map(move |v| (u, v)));
        let graph = AdjacencyGraph::from_edges(edges);
        let cliques = find_maximal_cliques(&graph).unwrap();
        assert!(same_cliques(&cliques, &[&[0, 1, 2, 3, 4, 5]]));
    }

    #[test]
    fn string_vertices() {
        let graph = AdjacencyGraph::from_edges([("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]);
        let cliques = find_maximal_cliques(&graph).unwrap();
        assert!(same_cliques(&cliques, &[&["a", "b", "c"], &["c", "d"]]));
    }

    /// Lists a vertex it cannot answer neighbor queries for.
    struct Inconsistent;

    impl GraphAdapter for Inconsistent {
        type Vertex = u32;

        fn vertices(&self) -> VertexSet<u32> {
            VertexSet::from([1, 2, 3])
        }

        fn neighbors(&self, vertex: &u32) -> Result<Cow<'_, VertexSet<u32>>> {
            match vertex {
                1 => Ok(Cow::Owned(VertexSet::from([2]))),
                2 => Ok(Cow::Owned(VertexSet::from([1]))),
                _ => Err(CliqueError::invalid_vertex(vertex)),
            }
        }
    }

    #[test]
    fn invalid_vertex_aborts_search() {
        assert_eq!(
            find_maximal_cliques(&Inconsistent).unwrap_err(),
            CliqueError::InvalidVertex("3".to_string())
        );
    }
}

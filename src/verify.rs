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

//! Checks that a vertex set is a (maximal) clique of a graph.

use crate::error::Result;
use crate::graph::GraphAdapter;
use crate::vertex_set::VertexSet;

/// `true` if every two members of `clique` are adjacent.
///
/// The empty set and single vertices are cliques. Fails with
/// [`crate::CliqueError::InvalidVertex`] if a member is not in the graph.
pub fn is_clique<G: GraphAdapter>(graph: &G, clique: &VertexSet<G::Vertex>) -> Result<bool> {
    for member in clique {
        let neighbors = graph.neighbors(member)?;
        if !clique
            .iter()
            .all(|other| other == member || neighbors.contains(other))
        {
            return Ok(false);
        }
    }
    Ok(true)
}

/// `true` if `clique` is a clique that no other vertex of the graph can extend.
pub fn is_maximal_clique<G: GraphAdapter>(
    graph: &G,
    clique: &VertexSet<G::Vertex>,
) -> Result<bool> {
    if !is_clique(graph, clique)? {
        return Ok(false);
    }
    for candidate in graph.vertices() {
        if clique.contains(&candidate) {
            continue;
        }
        let neighbors = graph.neighbors(&candidate)?;
        if clique.is_subset(&neighbors) {
            // Adjacent to every member, so the clique can grow.
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use petgraph::graph::{NodeIndex, UnGraph};

    use super::{is_clique, is_maximal_clique};
    use crate::error::CliqueError;
    use crate::graph::AdjacencyGraph;
    use crate::vertex_set::VertexSet;

    fn triangle_with_tail() -> AdjacencyGraph<u32> {
        AdjacencyGraph::from_edges([(1, 2), (1, 3), (2, 3), (3, 4)])
    }

    #[test]
    fn detects_cliques() {
        let graph = triangle_with_tail();
        assert!(is_clique(&graph, &VertexSet::from([1, 2, 3])).unwrap());
        assert!(is_clique(&graph, &VertexSet::from([3, 4])).unwrap());
        assert!(is_clique(&graph, &VertexSet::from([4])).unwrap());
        assert!(is_clique(&graph, &VertexSet::new()).unwrap());
        assert!(!is_clique(&graph, &VertexSet::from([1, 2, 4])).unwrap());
    }

    #[test]
    fn detects_maximality() {
        let graph = triangle_with_tail();
        assert!(is_maximal_clique(&graph, &VertexSet::from([1, 2, 3])).unwrap());
        assert!(is_maximal_clique(&graph, &VertexSet::from([3, 4])).unwrap());
        assert!(!is_maximal_clique(&graph, &VertexSet::from([1, 2])).unwrap());
        assert!(!is_maximal_clique(&graph, &VertexSet::from([4])).unwrap());
        assert!(!is_maximal_clique(&graph, &VertexSet::new()).unwrap());
    }

    #[test]
    fn empty_set_is_maximal_only_in_empty_graph() {
        let graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
        assert!(is_maximal_clique(&graph, &VertexSet::new()).unwrap());
    }

    #[test]
    fn maximality_over_owned_neighbor_sets() {
        // petgraph adapters hand out owned neighbor sets.
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (0, 2), (1, 2), (2, 3)]);
        let [a, b, c, d] = [0, 1, 2, 3].map(NodeIndex::new);
        assert!(is_maximal_clique(&graph, &VertexSet::from([a, b, c])).unwrap());
        assert!(is_maximal_clique(&graph, &VertexSet::from([c, d])).unwrap());
        assert!(!is_maximal_clique(&graph, &VertexSet::from([a, b])).unwrap());
        assert!(!is_maximal_clique(&graph, &VertexSet::from([d])).unwrap());
    }

    #[test]
    fn unknown_member_is_an_error() {
        let graph = triangle_with_tail();
        assert_eq!(
            is_clique(&graph, &VertexSet::from([9, 1])).unwrap_err(),
            CliqueError::InvalidVertex("9".to_string())
        );
    }
}

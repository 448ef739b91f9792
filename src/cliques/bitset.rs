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

use fixedbitset::FixedBitSet;
use petgraph::graph::{IndexType, NodeIndex, UnGraph};
use tracing::debug;

/// Find all maximal cliques of a petgraph [`UnGraph`] using bitsets.
///
/// `UnGraph` node indices are dense, so every vertex set of the search is a
/// [`FixedBitSet`] over `0..node_count` and intersections are word-wise ANDs.
/// The search itself is the same pivot-free Bron-Kerbosch as
/// [`crate::find_maximal_cliques`] and finds the same cliques in the same
/// order. Each clique is returned with its nodes in ascending index order.
///
/// Self-loops and parallel edges are ignored.
pub fn find_maximal_cliques_bitset<N, E, Ix: IndexType>(
    graph: &UnGraph<N, E, Ix>,
) -> Vec<Vec<NodeIndex<Ix>>> {
    let node_count = graph.node_count();
    debug!(vertices = node_count, "enumerating maximal cliques over bitsets");

    let adjacency: Vec<FixedBitSet> = graph
        .node_indices()
        .map(|node| {
            let mut row = FixedBitSet::with_capacity(node_count);
            for neighbor in graph.neighbors(node) {
                if neighbor != node {
                    row.insert(neighbor.index());
                }
            }
            row
        })
        .collect();

    let mut candidates = FixedBitSet::with_capacity(node_count);
    candidates.insert_range(..);

    let mut cliques = Vec::new();
    bron_kerbosch_bitset_recursive(
        &adjacency,
        &mut cliques,
        FixedBitSet::with_capacity(node_count),
        candidates,
        FixedBitSet::with_capacity(node_count),
    );

    debug!(cliques = cliques.len(), "maximal clique enumeration finished");
    cliques
        .into_iter()
        .map(|clique| clique.ones().map(NodeIndex::new).collect())
        .collect()
}

fn bron_kerbosch_bitset_recursive(
    adjacency: &[FixedBitSet],
    cliques: &mut Vec<FixedBitSet>,
    clique: FixedBitSet,
    mut candidates: FixedBitSet,
    mut excluded: FixedBitSet,
) {
    if candidates.is_clear() && excluded.is_clear() {
        cliques.push(clique);
        return;
    }

    let snapshot: Vec<usize> = candidates.ones().collect();
    for v in snapshot {
        let neighbors_v = &adjacency[v];

        let mut extended = clique.clone();
        extended.insert(v);
        let mut new_candidates = candidates.clone();
        new_candidates.intersect_with(neighbors_v);
        let mut new_excluded = excluded.clone();
        new_excluded.intersect_with(neighbors_v);

        bron_kerbosch_bitset_recursive(adjacency, cliques, extended, new_candidates, new_excluded);

        candidates.set(v, false);
        excluded.insert(v);
    }
}

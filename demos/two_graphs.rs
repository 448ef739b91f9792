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

//! Enumerate and print the maximal cliques of two small graphs.
//!
//! Run with `cargo run --example two_graphs`.

use maxclique::{cliques_to_json, find_maximal_cliques, render_cliques, AdjacencyGraph};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let graphs = [
        vec![(1, 2), (1, 3), (2, 3), (3, 4)],
        vec![(1, 5), (1, 2), (2, 5), (2, 3), (5, 4), (3, 4), (4, 6)],
    ];

    for edges in graphs {
        let graph = AdjacencyGraph::from_edges(edges);
        let cliques = find_maximal_cliques(&graph)?;
        println!("Maximal cliques: {}", render_cliques(&cliques));
        println!("As JSON: {}", cliques_to_json(&cliques)?);
    }
    Ok(())
}

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

//! Maximal clique enumeration for undirected simple graphs.
//!
//! The search is the Bron-Kerbosch algorithm without pivoting. Graphs are
//! read through the [`GraphAdapter`] trait, implemented here for an
//! edge-list built [`AdjacencyGraph`] and for petgraph's undirected graphs.
//!
//! ```
//! use maxclique::{find_maximal_cliques, render_cliques, AdjacencyGraph};
//!
//! let graph = AdjacencyGraph::from_edges([(1, 2), (1, 3), (2, 3), (3, 4)]);
//! let cliques = find_maximal_cliques(&graph)?;
//! assert_eq!(render_cliques(&cliques), "[{1, 2, 3}, {3, 4}]");
//! # Ok::<(), maxclique::CliqueError>(())
//! ```

pub mod cliques;
mod error;
pub mod graph;
pub mod render;
pub mod verify;
mod vertex_set;

pub use cliques::{
    find_maximal_cliques, find_maximal_cliques_bitset, find_maximal_cliques_iterative,
    find_maximal_cliques_with_limits, Clique, SearchLimits,
};
pub use error::{CliqueError, Result};
pub use graph::{AdjacencyGraph, GraphAdapter};
pub use render::{canonicalize, cliques_to_json, render_cliques};
pub use verify::{is_clique, is_maximal_clique};
pub use vertex_set::{Vertex, VertexSet};

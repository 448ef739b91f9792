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

//! Canonical ordering and text/JSON output for clique lists.

use std::fmt::Write;

use serde::Serialize;

use crate::cliques::Clique;
use crate::vertex_set::Vertex;

/// Sort the members of every clique, then the cliques themselves.
///
/// Cliques are ordered by smallest member, then size, then lexicographically,
/// so equal clique collections always canonicalize to the same list.
pub fn canonicalize<V: Vertex>(cliques: &[Clique<V>]) -> Vec<Vec<V>> {
    let mut sorted: Vec<Vec<V>> = cliques.iter().map(|clique| clique.to_sorted_vec()).collect();
    sorted.sort_by(|a, b| {
        a.first()
            .cmp(&b.first())
            .then_with(|| a.len().cmp(&b.len()))
            .then_with(|| a.cmp(b))
    });
    sorted
}

/// Render cliques as text, e.g. `[{1, 2, 3}, {3, 4}]`.
pub fn render_cliques<V: Vertex>(cliques: &[Clique<V>]) -> String {
    let mut out = String::from("[");
    for (i, clique) in canonicalize(cliques).iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('{');
        for (j, vertex) in clique.iter().enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{vertex:?}");
        }
        out.push('}');
    }
    out.push(']');
    out
}

/// Serialize cliques as a JSON array of arrays in canonical order.
pub fn cliques_to_json<V: Vertex + Serialize>(cliques: &[Clique<V>]) -> serde_json::Result<String> {
    serde_json::to_string(&canonicalize(cliques))
}

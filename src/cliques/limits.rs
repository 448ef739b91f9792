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

//! Bounded clique enumeration.
//!
//! Dense graphs have exponentially many maximal cliques and the plain search
//! has no way to stop. The entry point here runs the same search but checks a
//! deadline on entry to every search call and a cap on the number of
//! recorded cliques.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{enumerate, Clique, SearchGuard};
use crate::error::{CliqueError, Result};
use crate::graph::GraphAdapter;

/// Limits applied by [`find_maximal_cliques_with_limits`].
///
/// The default has no limits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchLimits {
    /// Wall-clock budget for the whole search.
    pub deadline: Option<Duration>,
    /// Largest number of maximal cliques the search may record.
    pub max_cliques: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        SearchLimits::default()
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_max_cliques(mut self, max_cliques: usize) -> Self {
        self.max_cliques = Some(max_cliques);
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.deadline.is_none() && self.max_cliques.is_none()
    }
}

struct LimitGuard {
    limits: SearchLimits,
    started: Instant,
}

impl SearchGuard for LimitGuard {
    fn enter(&mut self, depth: usize) -> Result<()> {
        if let Some(deadline) = self.limits.deadline {
            if self.started.elapsed() >= deadline {
                debug!(?deadline, depth, "clique search deadline exceeded");
                return Err(CliqueError::DeadlineExceeded(deadline));
            }
        }
        Ok(())
    }

    fn record(&mut self, found: usize) -> Result<()> {
        match self.limits.max_cliques {
            Some(max_cliques) if found >= max_cliques => {
                debug!(max_cliques, "clique search limit reached");
                Err(CliqueError::CliqueLimitExceeded(max_cliques))
            }
            _ => Ok(()),
        }
    }
}

/// Find all maximal cliques, giving up once `limits` are exceeded.
///
/// With [`SearchLimits::unbounded`] this behaves exactly like
/// [`crate::find_maximal_cliques`]. Otherwise the search aborts with
/// [`CliqueError::DeadlineExceeded`] once the deadline is reached, or with
/// [`CliqueError::CliqueLimitExceeded`] when one more clique than
/// `max_cliques` would be recorded. Cliques found before the abort are
/// discarded.
pub fn find_maximal_cliques_with_limits<G: GraphAdapter>(
    graph: &G,
    limits: &SearchLimits,
) -> Result<Vec<Clique<G::Vertex>>> {
    let mut guard = LimitGuard {
        limits: *limits,
        started: Instant::now(),
    };
    enumerate(graph, &mut guard)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{find_maximal_cliques_with_limits, SearchLimits};
    use crate::cliques::find_maximal_cliques;
    use crate::error::CliqueError;
    use crate::graph::AdjacencyGraph;

    fn six_vertex_graph() -> AdjacencyGraph<u32> {
        AdjacencyGraph::from_edges([(1, 5), (1, 2), (2, 5), (2, 3), (5, 4), (3, 4), (4, 6)])
    }

    #[test]
    fn unbounded_matches_plain_search() {
        let graph = six_vertex_graph();
        let limits = SearchLimits::unbounded();
        assert!(limits.is_unbounded());
        assert_eq!(
            find_maximal_cliques_with_limits(&graph, &limits).unwrap(),
            find_maximal_cliques(&graph).unwrap()
        );
    }

    #[test]
    fn clique_cap_at_exact_count_succeeds() {
        let graph = six_vertex_graph();
        let limits = SearchLimits::unbounded().with_max_cliques(5);
        assert_eq!(find_maximal_cliques_with_limits(&graph, &limits).unwrap().len(), 5);
    }

    #[test]
    fn clique_cap_below_count_fails() {
        let graph = six_vertex_graph();
        let limits = SearchLimits::unbounded().with_max_cliques(4);
        assert_eq!(
            find_maximal_cliques_with_limits(&graph, &limits).unwrap_err(),
            CliqueError::CliqueLimitExceeded(4)
        );
    }

    #[test]
    fn zero_cap_rejects_empty_graph() {
        let graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
        let limits = SearchLimits::unbounded().with_max_cliques(0);
        assert_eq!(
            find_maximal_cliques_with_limits(&graph, &limits).unwrap_err(),
            CliqueError::CliqueLimitExceeded(0)
        );
    }

    #[test]
    fn elapsed_deadline_aborts_search() {
        // A zero budget is spent before the first call checks it.
        let graph = six_vertex_graph();
        let limits = SearchLimits::unbounded().with_deadline(Duration::ZERO);
        assert_eq!(
            find_maximal_cliques_with_limits(&graph, &limits).unwrap_err(),
            CliqueError::DeadlineExceeded(Duration::ZERO)
        );
    }

    #[test]
    fn generous_deadline_completes() {
        let graph = six_vertex_graph();
        let limits = SearchLimits::unbounded().with_deadline(Duration::from_secs(60));
        assert_eq!(find_maximal_cliques_with_limits(&graph, &limits).unwrap().len(), 5);
    }

    #[test]
    fn limits_load_from_json() {
        let limits: SearchLimits =
            serde_json::from_str(r#"{"deadline": {"secs": 2, "nanos": 0}, "max_cliques": 10}"#)
                .unwrap();
        assert_eq!(
            limits,
            SearchLimits::unbounded()
                .with_deadline(Duration::from_secs(2))
                .with_max_cliques(10)
        );
        let empty: SearchLimits = serde_json::from_str("{}").unwrap();
        assert!(empty.is_unbounded());
    }
}

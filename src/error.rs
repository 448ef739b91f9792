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

use std::fmt::Debug;
use std::time::Duration;

/// Errors raised while enumerating cliques.
///
/// The core search only ever produces [`CliqueError::InvalidVertex`]. The
/// remaining variants come from the bounded entry point in
/// [`crate::cliques::limits`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CliqueError {
    /// A neighbor lookup was made for a vertex the graph does not contain.
    #[error("invalid vertex: {0} is not in the graph")]
    InvalidVertex(String),

    #[error("search deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    #[error("search produced more than {0} maximal cliques")]
    CliqueLimitExceeded(usize),
}

impl CliqueError {
    pub(crate) fn invalid_vertex<V: Debug>(vertex: &V) -> Self {
        CliqueError::InvalidVertex(format!("{vertex:?}"))
    }
}

pub type Result<T, E = CliqueError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::CliqueError;

    #[test]
    fn invalid_vertex_message_names_vertex() {
        let err = CliqueError::invalid_vertex(&42u32);
        assert_eq!(err, CliqueError::InvalidVertex("42".to_string()));
        assert_eq!(err.to_string(), "invalid vertex: 42 is not in the graph");
    }

    #[test]
    fn invalid_vertex_uses_debug_form_for_strings() {
        let err = CliqueError::invalid_vertex(&"a");
        assert_eq!(err.to_string(), "invalid vertex: \"a\" is not in the graph");
    }
}

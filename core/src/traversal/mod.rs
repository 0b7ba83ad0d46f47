mod bfs;
mod dfs;
mod exclusion;
mod render;

use crate::graph::{CollabGraph, VertexId};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

pub use render::write_outcome;

/// One collaboration along a reported path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub from: String,
    pub to: String,
    pub song: String,
}

/// What a query produced. None of these are failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// Path from source to destination; empty when they are the same artist.
    Found { steps: Vec<PathStep> },
    NoPath { from: String, to: String },
    /// Names from the query that are not in the graph, in query order.
    NotFound { missing: Vec<String> },
}

impl QueryOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, QueryOutcome::Found { .. })
    }
}

#[derive(Debug, Clone)]
pub struct QueryResult {
    pub outcome: QueryOutcome,
    pub artists_visited: usize,
    pub search_duration: f64,
}

/// Runs path queries against a collaboration graph.
///
/// Only one query runs at a time; each one resets the graph's traversal
/// metadata before it starts.
pub struct CollabSearch {
    graph: CollabGraph,
}

impl CollabSearch {
    pub fn new(graph: CollabGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &CollabGraph {
        &self.graph
    }

    pub fn into_graph(self) -> CollabGraph {
        self.graph
    }

    fn resolve_endpoints(&self, from: &str, to: &str) -> Result<(VertexId, VertexId), Vec<String>> {
        let from_id = self.graph.vertex_id(from);
        let to_id = self.graph.vertex_id(to);

        match (from_id, to_id) {
            (Some(from_id), Some(to_id)) => Ok((from_id, to_id)),
            _ => {
                let mut missing = Vec::new();
                if from_id.is_none() {
                    missing.push(from.to_string());
                }
                if to_id.is_none() {
                    missing.push(to.to_string());
                }
                Err(missing)
            }
        }
    }

    fn collect_outcome(&self, found: bool, from: VertexId, to: VertexId) -> QueryOutcome {
        let path = if found { self.graph.path_ids(from, to) } else { None };

        match path {
            Some(path) => QueryOutcome::Found {
                steps: path
                    .windows(2)
                    .map(|pair| PathStep {
                        from: self.graph.artist_at(pair[0]).name().to_string(),
                        to: self.graph.artist_at(pair[1]).name().to_string(),
                        song: self
                            .graph
                            .edge_label(pair[0], pair[1])
                            .unwrap_or_default()
                            .to_string(),
                    })
                    .collect(),
            },
            None => QueryOutcome::NoPath {
                from: self.graph.artist_at(from).name().to_string(),
                to: self.graph.artist_at(to).name().to_string(),
            },
        }
    }
}

fn not_found(missing: Vec<String>, search_timer: Instant) -> QueryResult {
    debug!(?missing, "query aborted during validation");
    QueryResult {
        outcome: QueryOutcome::NotFound { missing },
        artists_visited: 0,
        search_duration: search_timer.elapsed().as_secs_f64(),
    }
}

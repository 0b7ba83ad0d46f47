use super::bfs::BfsState;
use super::{CollabSearch, QueryResult, not_found};
use std::time::Instant;
use tracing::debug;

impl CollabSearch {
    /// Shortest path from `from` to `to` that avoids every artist in `excluded`.
    ///
    /// Excluded artists are marked as visited before the breadth-first search
    /// starts, so they stay in the graph but are never entered. Any unknown
    /// name (endpoint or exclusion) aborts the query.
    pub fn exclusion<S: AsRef<str>>(&mut self, from: &str, to: &str, excluded: &[S]) -> QueryResult {
        let search_timer = Instant::now();
        self.graph.clear_metadata();

        let endpoints = self.resolve_endpoints(from, to);
        let mut missing = match &endpoints {
            Ok(_) => Vec::new(),
            Err(missing) => missing.clone(),
        };

        let mut excluded_ids = Vec::with_capacity(excluded.len());
        for name in excluded {
            match self.graph.vertex_id(name.as_ref()) {
                Some(id) => excluded_ids.push(id),
                None => missing.push(name.as_ref().to_string()),
            }
        }

        let (from_id, to_id) = match endpoints {
            Ok(endpoints) if missing.is_empty() => endpoints,
            _ => return not_found(missing, search_timer),
        };

        for &id in &excluded_ids {
            self.graph.mark(id);
        }
        let premarked = self.graph.marked_count();

        debug!(from, to, excluded = excluded_ids.len(), "starting exclusion search");
        let found = BfsState::new(from_id).find_target(&mut self.graph, to_id);

        QueryResult {
            outcome: self.collect_outcome(found, from_id, to_id),
            artists_visited: self.graph.marked_count() - premarked,
            search_duration: search_timer.elapsed().as_secs_f64(),
        }
    }
}

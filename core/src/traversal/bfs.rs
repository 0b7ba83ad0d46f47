use super::{CollabSearch, QueryResult, not_found};
use crate::graph::{CollabGraph, VertexId};
use std::{collections::VecDeque, time::Instant};
use tracing::debug;

pub(super) struct BfsState {
    queue: VecDeque<VertexId>,
}

impl BfsState {
    pub(super) fn new(start: VertexId) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(start);
        Self { queue }
    }

    fn visit_neighbor(&mut self, graph: &mut CollabGraph, neighbor: VertexId, current: VertexId) {
        if !graph.is_marked_at(neighbor) {
            // first writer wins, so the predecessor is always one level closer to the start
            graph.set_predecessor_at(neighbor, current);
            self.queue.push_back(neighbor);
        }
    }

    /// Level-order search; vertices already marked (visited or excluded) are skipped.
    pub(super) fn find_target(&mut self, graph: &mut CollabGraph, target: VertexId) -> bool {
        while let Some(current) = self.queue.pop_front() {
            if graph.is_marked_at(current) {
                continue;
            }
            graph.mark(current);

            if current == target {
                return true;
            }

            let mut position = 0;
            while let Some(neighbor) = graph.neighbor_at(current, position) {
                self.visit_neighbor(graph, neighbor, current);
                position += 1;
            }
        }

        false
    }
}

impl CollabSearch {
    /// Shortest path (fewest collaborations) from `from` to `to`.
    pub fn bfs(&mut self, from: &str, to: &str) -> QueryResult {
        let search_timer = Instant::now();
        self.graph.clear_metadata();

        let (from_id, to_id) = match self.resolve_endpoints(from, to) {
            Ok(endpoints) => endpoints,
            Err(missing) => return not_found(missing, search_timer),
        };

        debug!(from, to, "starting breadth-first search");
        let found = BfsState::new(from_id).find_target(&mut self.graph, to_id);

        QueryResult {
            outcome: self.collect_outcome(found, from_id, to_id),
            artists_visited: self.graph.marked_count(),
            search_duration: search_timer.elapsed().as_secs_f64(),
        }
    }
}

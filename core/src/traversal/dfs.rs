use super::{CollabSearch, QueryResult, not_found};
use crate::graph::{CollabGraph, VertexId};
use std::time::Instant;
use tracing::debug;

struct Frame {
    vertex: VertexId,
    next_neighbor: usize,
}

/// Depth-first search driven by an explicit stack.
///
/// Visits vertices in the same order as the recursive form: a vertex is marked
/// and given its predecessor when it is entered, and neighbors are tried in
/// insertion order. The search stops at the first path found.
fn find_target(graph: &mut CollabGraph, start: VertexId, target: VertexId) -> bool {
    graph.mark(start);
    if start == target {
        return true;
    }

    let mut stack = vec![Frame {
        vertex: start,
        next_neighbor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let current = frame.vertex;
        let Some(neighbor) = graph.neighbor_at(current, frame.next_neighbor) else {
            stack.pop();
            continue;
        };
        frame.next_neighbor += 1;

        if graph.is_marked_at(neighbor) {
            continue;
        }

        graph.mark(neighbor);
        graph.set_predecessor_at(neighbor, current);
        if neighbor == target {
            return true;
        }

        stack.push(Frame {
            vertex: neighbor,
            next_neighbor: 0,
        });
    }

    false
}

impl CollabSearch {
    /// First path found by depth-first search, not necessarily the shortest.
    pub fn dfs(&mut self, from: &str, to: &str) -> QueryResult {
        let search_timer = Instant::now();
        self.graph.clear_metadata();

        let (from_id, to_id) = match self.resolve_endpoints(from, to) {
            Ok(endpoints) => endpoints,
            Err(missing) => return not_found(missing, search_timer),
        };

        debug!(from, to, "starting depth-first search");
        let found = find_target(&mut self.graph, from_id, to_id);

        QueryResult {
            outcome: self.collect_outcome(found, from_id, to_id),
            artists_visited: self.graph.marked_count(),
            search_duration: search_timer.elapsed().as_secs_f64(),
        }
    }
}

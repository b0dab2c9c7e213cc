use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{EdgeId, Graph, VertexId};

/// Edges traversed by a minimum-weight path and their summed weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

/// Run Dijkstra's algorithm from `start` and stop as soon as `goal` is settled.
///
/// Returns `None` when `goal` is unreachable or either vertex is outside the
/// graph. `start == goal` yields an empty zero-weight result.
pub fn find_route(graph: &Graph, start: VertexId, goal: VertexId) -> Option<RouteResult> {
    if start >= graph.vertex_count() || goal >= graph.vertex_count() {
        return None;
    }
    let search = dijkstra(graph, start, Some(goal));
    search.route_to(graph, goal)
}

/// Run a full single-source search so many targets can be answered from one
/// pass over the graph.
pub fn shortest_path_tree(graph: &Graph, start: VertexId) -> ShortestPathTree {
    if start >= graph.vertex_count() {
        return ShortestPathTree {
            start,
            distances: vec![None; graph.vertex_count()],
            parents: vec![None; graph.vertex_count()],
        };
    }
    dijkstra(graph, start, None)
}

/// Settled distances and parent edges of a single-source search.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    start: VertexId,
    distances: Vec<Option<f64>>,
    parents: Vec<Option<EdgeId>>,
}

impl ShortestPathTree {
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Minimum total weight from the start vertex, `None` if unreachable.
    pub fn distance_to(&self, goal: VertexId) -> Option<f64> {
        self.distances.get(goal).copied().flatten()
    }

    /// Reconstruct the edge sequence from the start vertex to `goal`.
    pub fn route_to(&self, graph: &Graph, goal: VertexId) -> Option<RouteResult> {
        let weight = self.distance_to(goal)?;
        let mut edges = Vec::new();
        let mut current = goal;
        while current != self.start {
            let edge_id = self.parents[current]?;
            edges.push(edge_id);
            current = graph.edge(edge_id)?.from;
        }
        edges.reverse();
        Some(RouteResult { weight, edges })
    }
}

fn dijkstra(graph: &Graph, start: VertexId, goal: Option<VertexId>) -> ShortestPathTree {
    let vertex_count = graph.vertex_count();
    let mut distances: Vec<Option<f64>> = vec![None; vertex_count];
    let mut parents: Vec<Option<EdgeId>> = vec![None; vertex_count];
    let mut settled = vec![false; vertex_count];
    let mut queue = BinaryHeap::new();

    distances[start] = Some(0.0);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if settled[entry.node] {
            continue;
        }
        settled[entry.node] = true;

        if Some(entry.node) == goal {
            break;
        }

        let current_distance = entry.cost.0;
        for &edge_id in graph.outgoing(entry.node) {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };
            let next = edge.to;
            if settled[next] {
                continue;
            }

            let next_cost = current_distance + edge.weight;
            if distances[next].map_or(true, |known| next_cost < known) {
                distances[next] = Some(next_cost);
                parents[next] = Some(edge_id);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    // Tentative distances of unsettled vertices are not minimal yet.
    for (distance, done) in distances.iter_mut().zip(&settled) {
        if !done {
            *distance = None;
        }
    }

    ShortestPathTree {
        start,
        distances,
        parents,
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: VertexId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: VertexId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_pops_cheapest_entry_first() {
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new(1, 7.5));
        queue.push(QueueEntry::new(2, 0.5));
        queue.push(QueueEntry::new(3, 3.0));

        let order: Vec<_> = std::iter::from_fn(|| queue.pop().map(|entry| entry.node)).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }
}

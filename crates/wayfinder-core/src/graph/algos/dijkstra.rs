use std::time::Instant;

use crate::association::Association;
use crate::error::{Result, WayfinderError};
use crate::graph::algos::shared::{build_result_graph, init_bookkeeping, new_frontier, RunStats};
use crate::graph::{Graph, VertexId};

/// A single shortest path extracted from a shortest-path tree
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Vertices of the input graph from source to target, inclusive
    pub vertices: Vec<VertexId>,
    /// Sum of edge weights along the path
    pub total_weight: f64,
}

impl PathResult {
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Single-source shortest paths (Dijkstra).
///
/// Returns a new graph with one vertex per input vertex (same insertion
/// order, payload cloned) whose weight is the shortest distance from
/// `source`, or `f64::INFINITY` when unreachable. Its edges form the
/// shortest-path tree: each reachable non-source vertex has exactly one
/// incoming edge carrying the weight of the input edge that reached it.
///
/// Decrease-key is lazy: an improved distance pushes a fresh heap entry and
/// superseded entries are skipped when popped for an already finalised
/// vertex. Edge weights must be non-negative.
#[tracing::instrument(skip(graph, source), fields(source = %source, vertices = graph.vertex_count(), edges = graph.edge_count(), directed = graph.is_directed()))]
pub fn find_shortest_paths<T: Clone>(graph: &Graph<T>, source: VertexId) -> Result<Graph<T>> {
    crate::ensure_vertex!(graph, source);
    let start = Instant::now();

    let mut infos = init_bookkeeping(graph, source);
    let mut frontier = new_frontier(graph.vertex_count());
    let mut stats = RunStats::default();

    frontier.add(Association::new(0.0, source));
    stats.pushes += 1;

    while let Ok(entry) = frontier.remove_root() {
        let current = entry.value;
        if infos[current.index()].is_finalised {
            stats.stale_skipped += 1;
            continue;
        }
        infos[current.index()].is_finalised = true;
        stats.finalised += 1;

        let current_distance = infos[current.index()].distance;
        for &edge_index in graph.emanating_indices(current) {
            let edge = graph.edge_at(edge_index);
            let partner = edge.partner_vertex(current)?;
            let candidate = current_distance + edge.weight();

            if candidate < infos[partner.index()].distance {
                tracing::trace!(
                    from = %current,
                    to = %partner,
                    previous = infos[partner.index()].distance,
                    candidate,
                    "relax"
                );
                let info = &mut infos[partner.index()];
                info.distance = candidate;
                info.edge_followed = Some(edge_index);
                frontier.add(Association::new(candidate, partner));
                stats.pushes += 1;
                stats.relaxations += 1;
            }
        }
    }

    tracing::debug!(
        finalised = stats.finalised,
        stale_skipped = stats.stale_skipped,
        pushes = stats.pushes,
        relaxations = stats.relaxations,
        "shortest_paths_complete"
    );

    let result = build_result_graph(graph, &infos, source, graph.is_directed(), |edge, _| {
        edge.weight()
    })?;
    crate::trace_time!(start, "find_shortest_paths");
    Ok(result)
}

/// Shortest path from `from` to `to`, or `None` when `to` is unreachable.
pub fn shortest_path<T: Clone>(
    graph: &Graph<T>,
    from: VertexId,
    to: VertexId,
) -> Result<Option<PathResult>> {
    if !graph.contains_vertex(to) {
        return Err(WayfinderError::vertex_not_found(to));
    }

    let tree = find_shortest_paths(graph, from)?;
    let target = tree.vertex_id_at(to.index());
    let total_weight = tree.vertex(target)?.weight();
    if total_weight.is_infinite() {
        return Ok(None);
    }

    let mut parent: Vec<Option<usize>> = vec![None; tree.vertex_count()];
    for edge in tree.edges() {
        parent[edge.to_vertex().index()] = Some(edge.from_vertex().index());
    }

    let mut indices = vec![to.index()];
    let mut current = to.index();
    while current != from.index() {
        match parent[current] {
            Some(previous) if indices.len() <= tree.vertex_count() => {
                indices.push(previous);
                current = previous;
            }
            _ => {
                return Err(WayfinderError::Other(format!(
                    "shortest-path tree has no route back from {to} to {from}"
                )))
            }
        }
    }
    indices.reverse();

    Ok(Some(PathResult {
        vertices: indices
            .into_iter()
            .map(|index| graph.vertex_id_at(index))
            .collect(),
        total_weight,
    }))
}

#[cfg(test)]
mod tests;

use std::time::Instant;

use crate::association::Association;
use crate::error::Result;
use crate::graph::algos::shared::{build_result_graph, init_bookkeeping, new_frontier, RunStats};
use crate::graph::{Graph, VertexId};

/// Minimum spanning tree (Prim) grown from `source`.
///
/// Edges are followed through the incident view, so direction is ignored.
/// The returned graph is undirected, has one vertex per input vertex (same
/// insertion order, payload cloned) and holds the tree edges; each vertex
/// weight is the weight of the edge that connected it to the tree (0 for the
/// source, `f64::INFINITY` for vertices not reachable from `source`).
#[tracing::instrument(skip(graph, source), fields(source = %source, vertices = graph.vertex_count(), edges = graph.edge_count(), directed = graph.is_directed()))]
pub fn find_minimal_spanning_tree<T: Clone>(
    graph: &Graph<T>,
    source: VertexId,
) -> Result<Graph<T>> {
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

        for &edge_index in graph.incident_indices(current) {
            let edge = graph.edge_at(edge_index);
            let partner = edge.partner_vertex(current)?;
            let info = &mut infos[partner.index()];
            if info.is_finalised {
                continue;
            }

            if edge.weight() < info.distance {
                tracing::trace!(
                    from = %current,
                    to = %partner,
                    weight = edge.weight(),
                    "connect"
                );
                info.distance = edge.weight();
                info.edge_followed = Some(edge_index);
                frontier.add(Association::new(edge.weight(), partner));
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
        "spanning_tree_complete"
    );

    let result = build_result_graph(graph, &infos, source, false, |_, info| info.distance)?;
    crate::trace_time!(start, "find_minimal_spanning_tree");
    Ok(result)
}

#[cfg(test)]
mod tests;

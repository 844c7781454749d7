use crate::association::Association;
use crate::error::Result;
use crate::graph::{Edge, Graph, VertexId};
use crate::heap::{Heap, HeapType, NaturalComparer};

/// Per-vertex scratch record for a single algorithm run
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct VertexInfo {
    /// Tentative distance (Dijkstra) or cheapest connecting edge (Prim)
    pub(crate) distance: f64,
    /// Index of the input-graph edge that produced `distance`
    pub(crate) edge_followed: Option<usize>,
    pub(crate) is_finalised: bool,
}

impl VertexInfo {
    fn unvisited() -> Self {
        Self {
            distance: f64::INFINITY,
            edge_followed: None,
            is_finalised: false,
        }
    }
}

/// Min-heap of `(distance, vertex)` entries driving the greedy expansion
pub(crate) type Frontier = Heap<Association<f64, VertexId>>;

pub(crate) fn new_frontier(capacity: usize) -> Frontier {
    Heap::with_capacity(
        HeapType::Min,
        capacity,
        Association::compare_keys as NaturalComparer<_>,
    )
}

/// Fresh bookkeeping with every vertex at infinity except `source`
pub(crate) fn init_bookkeeping<T>(graph: &Graph<T>, source: VertexId) -> Vec<VertexInfo> {
    let mut infos = vec![VertexInfo::unvisited(); graph.vertex_count()];
    infos[source.index()].distance = 0.0;
    infos
}

/// Counters reported at debug level when a run finishes
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct RunStats {
    pub(crate) pushes: usize,
    pub(crate) finalised: usize,
    pub(crate) stale_skipped: usize,
    pub(crate) relaxations: usize,
}

/// Build the result graph: one new vertex per input vertex (same order,
/// payload cloned, weight = final distance), then one edge per recorded
/// `edge_followed`, running from the recorded edge's far end to the vertex.
pub(crate) fn build_result_graph<T, W>(
    graph: &Graph<T>,
    infos: &[VertexInfo],
    source: VertexId,
    directed: bool,
    edge_weight: W,
) -> Result<Graph<T>>
where
    T: Clone,
    W: Fn(&Edge, &VertexInfo) -> f64,
{
    let mut result = Graph::new(directed);
    let ids: Vec<VertexId> = graph
        .vertices()
        .zip(infos)
        .map(|(vertex, info)| result.add_vertex_with_weight(vertex.data().clone(), info.distance))
        .collect();

    for (index, info) in infos.iter().enumerate() {
        if index == source.index() {
            continue;
        }
        let Some(edge_index) = info.edge_followed else {
            continue;
        };

        let edge = graph.edge_at(edge_index);
        let partner = edge.partner_vertex(graph.vertex_id_at(index))?;
        result.add_edge(ids[partner.index()], ids[index], edge_weight(edge, info))?;
    }

    Ok(result)
}

use super::types::VertexId;

/// A vertex: payload plus a mutable weight.
///
/// Algorithms store their per-vertex result (distance, connecting cost) in
/// `weight` on the vertices of the graph they return. Edge incidence is
/// served by the owning graph (`Graph::emanating_edges`,
/// `Graph::incident_edges`).
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<T> {
    id: VertexId,
    data: T,
    weight: f64,
}

impl<T> Vertex<T> {
    pub(crate) fn new(id: VertexId, data: T, weight: f64) -> Self {
        Self { id, data, weight }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// True when the weight holds the unreachable marker
    pub fn is_unreachable(&self) -> bool {
        self.weight.is_infinite()
    }
}

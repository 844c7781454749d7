use super::types::{EdgeId, VertexId};
use crate::error::{Result, WayfinderError};

/// A weighted edge between two vertices of the same graph
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: EdgeId,
    from: VertexId,
    to: VertexId,
    weight: f64,
    directed: bool,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, from: VertexId, to: VertexId, weight: f64, directed: bool) -> Self {
        Self {
            id,
            from,
            to,
            weight,
            directed,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn from_vertex(&self) -> VertexId {
        self.from
    }

    pub fn to_vertex(&self) -> VertexId {
        self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The endpoint on the other side of `vertex`.
    ///
    /// For a self-loop the partner of its only endpoint is itself.
    pub fn partner_vertex(&self, vertex: VertexId) -> Result<VertexId> {
        if vertex == self.from {
            Ok(self.to)
        } else if vertex == self.to {
            Ok(self.from)
        } else {
            Err(WayfinderError::NotAnEndpoint {
                vertex: vertex.to_string(),
                edge: self.id.to_string(),
            })
        }
    }

    /// Whether this edge joins `a` and `b`, honouring direction
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.from == a && self.to == b) || (!self.directed && self.from == b && self.to == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::GraphId;

    fn fixture(directed: bool) -> (Edge, VertexId, VertexId) {
        let graph = GraphId::next();
        let a = VertexId::new(graph, 0);
        let b = VertexId::new(graph, 1);
        (Edge::new(EdgeId::new(graph, 0), a, b, 2.5, directed), a, b)
    }

    #[test]
    fn test_partner_vertex_both_ends() {
        let (edge, a, b) = fixture(true);
        assert_eq!(edge.partner_vertex(a).unwrap(), b);
        assert_eq!(edge.partner_vertex(b).unwrap(), a);
    }

    #[test]
    fn test_partner_vertex_rejects_stranger() {
        let (edge, a, _) = fixture(false);
        let stranger = VertexId::new(a.graph(), 9);

        let err = edge.partner_vertex(stranger).unwrap_err();
        assert!(matches!(err, WayfinderError::NotAnEndpoint { .. }));
    }

    #[test]
    fn test_partner_vertex_self_loop() {
        let graph = GraphId::next();
        let a = VertexId::new(graph, 0);
        let edge = Edge::new(EdgeId::new(graph, 0), a, a, 1.0, true);
        assert_eq!(edge.partner_vertex(a).unwrap(), a);
    }

    #[test]
    fn test_connects_honours_direction() {
        let (directed, a, b) = fixture(true);
        assert!(directed.connects(a, b));
        assert!(!directed.connects(b, a));

        let (undirected, c, d) = fixture(false);
        assert!(undirected.connects(c, d));
        assert!(undirected.connects(d, c));
        assert_eq!(undirected.weight(), 2.5);
    }
}

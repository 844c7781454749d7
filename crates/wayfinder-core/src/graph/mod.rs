//! Weighted graph model and algorithms
//!
//! Vertices and edges live in per-graph arenas and are addressed by
//! [`VertexId`] / [`EdgeId`] handles stamped with the owning graph's
//! [`GraphId`]. Two vertices with equal payloads are always distinct.
//!
//! - [`algos`]: Dijkstra shortest paths and Prim spanning trees
//! - [`traversal`]: depth-first / breadth-first iterators and connectivity

pub mod algos;
pub mod edge;
pub mod traversal;
pub mod types;
pub mod vertex;

pub use algos::{find_minimal_spanning_tree, find_shortest_paths, shortest_path, PathResult};
pub use edge::Edge;
pub use traversal::{BreadthFirst, DepthFirst};
pub use types::{EdgeId, GraphId, VertexId};
pub use vertex::Vertex;

use crate::error::{Result, WayfinderError};

/// A directed or undirected weighted graph
#[derive(Debug)]
pub struct Graph<T> {
    id: GraphId,
    directed: bool,
    vertices: Vec<Vertex<T>>,
    edges: Vec<Edge>,
    /// Edge indices leaving each vertex (both endpoints when undirected)
    emanating: Vec<Vec<usize>>,
    /// Edge indices touching each vertex
    incident: Vec<Vec<usize>>,
}

impl<T> Graph<T> {
    pub fn new(directed: bool) -> Self {
        Self {
            id: GraphId::next(),
            directed,
            vertices: Vec::new(),
            edges: Vec::new(),
            emanating: Vec::new(),
            incident: Vec::new(),
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Register a vertex with weight 0
    pub fn add_vertex(&mut self, data: T) -> VertexId {
        self.add_vertex_with_weight(data, 0.0)
    }

    pub fn add_vertex_with_weight(&mut self, data: T, weight: f64) -> VertexId {
        let id = VertexId::new(self.id, self.vertices.len());
        self.vertices.push(Vertex::new(id, data, weight));
        self.emanating.push(Vec::new());
        self.incident.push(Vec::new());
        id
    }

    /// Connect two vertices of this graph.
    ///
    /// In an undirected graph the edge emanates from both endpoints.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> Result<EdgeId> {
        crate::ensure_vertex!(self, from);
        crate::ensure_vertex!(self, to);

        let index = self.edges.len();
        let id = EdgeId::new(self.id, index);
        self.edges.push(Edge::new(id, from, to, weight, self.directed));

        self.emanating[from.index()].push(index);
        self.incident[from.index()].push(index);
        if to != from {
            if !self.directed {
                self.emanating[to.index()].push(index);
            }
            self.incident[to.index()].push(index);
        }

        Ok(id)
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.graph() == self.id && vertex.index() < self.vertices.len()
    }

    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        edge.graph() == self.id && edge.index() < self.edges.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> std::slice::Iter<'_, Vertex<T>> {
        self.vertices.iter()
    }

    /// Edges in insertion order
    pub fn edges(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(Vertex::id)
    }

    pub fn vertex(&self, vertex: VertexId) -> Result<&Vertex<T>> {
        crate::ensure_vertex!(self, vertex);
        Ok(&self.vertices[vertex.index()])
    }

    pub fn vertex_mut(&mut self, vertex: VertexId) -> Result<&mut Vertex<T>> {
        crate::ensure_vertex!(self, vertex);
        Ok(&mut self.vertices[vertex.index()])
    }

    pub fn edge(&self, edge: EdgeId) -> Result<&Edge> {
        if !self.contains_edge(edge) {
            return Err(WayfinderError::edge_not_found(edge));
        }
        Ok(&self.edges[edge.index()])
    }

    /// Edges leaving `vertex`. Every edge of an undirected graph leaves both
    /// of its endpoints.
    pub fn emanating_edges(&self, vertex: VertexId) -> Result<impl Iterator<Item = &Edge> + '_> {
        crate::ensure_vertex!(self, vertex);
        Ok(self.edges_at(&self.emanating[vertex.index()]))
    }

    /// Every edge touching `vertex`, regardless of direction
    pub fn incident_edges(&self, vertex: VertexId) -> Result<impl Iterator<Item = &Edge> + '_> {
        crate::ensure_vertex!(self, vertex);
        Ok(self.edges_at(&self.incident[vertex.index()]))
    }

    /// Number of edges touching `vertex`
    pub fn degree(&self, vertex: VertexId) -> Result<usize> {
        crate::ensure_vertex!(self, vertex);
        Ok(self.incident[vertex.index()].len())
    }

    /// Number of edges leaving `vertex`
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        crate::ensure_vertex!(self, vertex);
        Ok(self.emanating[vertex.index()].len())
    }

    /// First edge (in insertion order) running from `from` to `to`; in an
    /// undirected graph either orientation matches.
    pub fn edge_between(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        if !self.contains_vertex(from) || !self.contains_vertex(to) {
            return None;
        }
        self.edges_at(&self.emanating[from.index()])
            .find(|edge| edge.connects(from, to))
            .map(Edge::id)
    }

    pub fn is_adjacent(&self, from: VertexId, to: VertexId) -> bool {
        self.edge_between(from, to).is_some()
    }

    /// First vertex whose payload satisfies `predicate`
    pub fn find_vertex<P>(&self, mut predicate: P) -> Option<VertexId>
    where
        P: FnMut(&T) -> bool,
    {
        self.vertices
            .iter()
            .find(|vertex| predicate(vertex.data()))
            .map(Vertex::id)
    }

    /// Sum of all edge weights
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }

    /// Handle of the vertex at insertion position `index`
    pub(crate) fn vertex_id_at(&self, index: usize) -> VertexId {
        VertexId::new(self.id, index)
    }

    pub(crate) fn emanating_indices(&self, vertex: VertexId) -> &[usize] {
        &self.emanating[vertex.index()]
    }

    pub(crate) fn incident_indices(&self, vertex: VertexId) -> &[usize] {
        &self.incident[vertex.index()]
    }

    pub(crate) fn edge_at(&self, index: usize) -> &Edge {
        &self.edges[index]
    }

    fn edges_at<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = &'a Edge> + 'a {
        indices.iter().map(move |&index| &self.edges[index])
    }
}

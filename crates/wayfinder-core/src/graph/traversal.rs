//! Depth-first and breadth-first traversal
//!
//! Both walks follow emanating edges, so they respect direction in a
//! directed graph and treat every edge as two-way in an undirected one.
//! Each vertex is yielded once, in pre-order, starting with `start`.

use std::collections::VecDeque;

use super::{Graph, VertexId};
use crate::error::Result;

/// Pre-order depth-first walk over emanating edges
pub struct DepthFirst<'g, T> {
    graph: &'g Graph<T>,
    stack: Vec<VertexId>,
    discovered: Vec<bool>,
}

impl<T> Iterator for DepthFirst<'_, T> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        while let Some(current) = self.stack.pop() {
            if self.discovered[current.index()] {
                continue;
            }
            self.discovered[current.index()] = true;

            // Reverse so the first emanating edge is explored first
            for &edge_index in self.graph.emanating_indices(current).iter().rev() {
                let edge = self.graph.edge_at(edge_index);
                if let Ok(partner) = edge.partner_vertex(current) {
                    if !self.discovered[partner.index()] {
                        self.stack.push(partner);
                    }
                }
            }
            return Some(current);
        }
        None
    }
}

/// Level-order breadth-first walk over emanating edges
pub struct BreadthFirst<'g, T> {
    graph: &'g Graph<T>,
    queue: VecDeque<VertexId>,
    discovered: Vec<bool>,
}

impl<T> Iterator for BreadthFirst<'_, T> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        let current = self.queue.pop_front()?;

        for &edge_index in self.graph.emanating_indices(current) {
            let edge = self.graph.edge_at(edge_index);
            if let Ok(partner) = edge.partner_vertex(current) {
                if !self.discovered[partner.index()] {
                    self.discovered[partner.index()] = true;
                    self.queue.push_back(partner);
                }
            }
        }
        Some(current)
    }
}

impl<T> Graph<T> {
    pub fn depth_first(&self, start: VertexId) -> Result<DepthFirst<'_, T>> {
        crate::ensure_vertex!(self, start);
        Ok(DepthFirst {
            graph: self,
            stack: vec![start],
            discovered: vec![false; self.vertex_count()],
        })
    }

    pub fn breadth_first(&self, start: VertexId) -> Result<BreadthFirst<'_, T>> {
        crate::ensure_vertex!(self, start);
        let mut discovered = vec![false; self.vertex_count()];
        discovered[start.index()] = true;
        Ok(BreadthFirst {
            graph: self,
            queue: VecDeque::from([start]),
            discovered,
        })
    }

    /// Vertices reachable from `start` along emanating edges, `start` first
    pub fn reachable_from(&self, start: VertexId) -> Result<Vec<VertexId>> {
        Ok(self.breadth_first(start)?.collect())
    }

    /// True when every vertex can be reached from every other once edge
    /// direction is ignored. The empty graph counts as connected.
    pub fn is_weakly_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }

        let mut seen = vec![false; self.vertex_count()];
        let mut stack = vec![self.vertex_id_at(0)];
        seen[0] = true;
        let mut count = 1;

        while let Some(current) = stack.pop() {
            for &edge_index in self.incident_indices(current) {
                let edge = self.edge_at(edge_index);
                if let Ok(partner) = edge.partner_vertex(current) {
                    if !seen[partner.index()] {
                        seen[partner.index()] = true;
                        count += 1;
                        stack.push(partner);
                    }
                }
            }
        }

        count == self.vertex_count()
    }
}

use super::*;
use crate::error::WayfinderError;

const TREE_EDGES: [(u32, u32, f64); 13] = [
    (1, 2, 5.0),
    (1, 5, 4.0),
    (5, 6, 3.0),
    (6, 7, 6.0),
    (6, 8, 2.0),
    (7, 3, 5.0),
    (3, 4, 4.0),
    (7, 9, 7.0),
    (7, 10, 3.0),
    (9, 12, 4.0),
    (12, 11, 5.0),
    (11, 13, 6.0),
    (13, 14, 4.0),
];

const EXTRA_EDGES: [(u32, u32, f64); 7] = [
    (2, 3, 9.0),
    (2, 5, 8.0),
    (4, 10, 8.0),
    (8, 9, 10.0),
    (10, 12, 9.0),
    (11, 14, 12.0),
    (8, 13, 15.0),
];

/// 14 vertices labelled 1..=14 with a unique spanning tree of weight 58
fn fourteen(directed: bool) -> (Graph<u32>, Vec<VertexId>) {
    let mut graph = Graph::new(directed);
    let ids: Vec<VertexId> = (1..=14).map(|n| graph.add_vertex(n)).collect();
    for (a, b, weight) in TREE_EDGES.iter().chain(EXTRA_EDGES.iter()) {
        graph
            .add_edge(ids[*a as usize - 1], ids[*b as usize - 1], *weight)
            .unwrap();
    }
    (graph, ids)
}

/// Tree edges as `(low label, high label, weight)`, sorted
fn labelled_edges(tree: &Graph<u32>) -> Vec<(u32, u32, f64)> {
    let mut edges: Vec<(u32, u32, f64)> = tree
        .edges()
        .map(|edge| {
            let a = *tree.vertex(edge.from_vertex()).unwrap().data();
            let b = *tree.vertex(edge.to_vertex()).unwrap().data();
            (a.min(b), a.max(b), edge.weight())
        })
        .collect();
    edges.sort_by(|x, y| (x.0, x.1).cmp(&(y.0, y.1)));
    edges
}

fn expected_edges() -> Vec<(u32, u32, f64)> {
    let mut edges: Vec<(u32, u32, f64)> = TREE_EDGES
        .iter()
        .map(|&(a, b, w)| (a.min(b), a.max(b), w))
        .collect();
    edges.sort_by(|x, y| (x.0, x.1).cmp(&(y.0, y.1)));
    edges
}

#[test]
fn test_fourteen_vertex_tree() {
    let (graph, ids) = fourteen(false);
    let tree = find_minimal_spanning_tree(&graph, ids[0]).unwrap();

    assert!(!tree.is_directed());
    assert_eq!(tree.vertex_count(), 14);
    assert_eq!(tree.edge_count(), 13);
    assert_eq!(tree.total_weight(), 58.0);
    assert_eq!(labelled_edges(&tree), expected_edges());
    assert!(tree.is_weakly_connected());
}

#[test]
fn test_vertex_weights_are_connecting_costs() {
    let (graph, ids) = fourteen(false);
    let tree = find_minimal_spanning_tree(&graph, ids[0]).unwrap();

    let weights: Vec<f64> = tree.vertices().map(|vertex| vertex.weight()).collect();
    assert_eq!(
        weights,
        vec![0.0, 5.0, 5.0, 4.0, 4.0, 3.0, 6.0, 2.0, 7.0, 3.0, 5.0, 4.0, 6.0, 4.0]
    );
    let vertex_sum: f64 = weights.iter().sum();
    assert_eq!(vertex_sum, tree.total_weight());
}

#[test]
fn test_same_tree_from_any_source() {
    let (graph, ids) = fourteen(false);
    for &source in &[ids[6], ids[13]] {
        let tree = find_minimal_spanning_tree(&graph, source).unwrap();
        assert_eq!(tree.total_weight(), 58.0);
        assert_eq!(labelled_edges(&tree), expected_edges());
    }
}

#[test]
fn test_direction_is_ignored() {
    let (graph, ids) = fourteen(true);
    let tree = find_minimal_spanning_tree(&graph, ids[0]).unwrap();

    assert!(!tree.is_directed());
    assert_eq!(tree.total_weight(), 58.0);
    assert_eq!(labelled_edges(&tree), expected_edges());
}

#[test]
fn test_input_graph_is_unchanged() {
    let (graph, ids) = fourteen(false);
    let _ = find_minimal_spanning_tree(&graph, ids[3]).unwrap();

    assert_eq!(graph.edge_count(), 20);
    assert!(graph.vertices().all(|vertex| vertex.weight() == 0.0));
}

#[test]
fn test_disconnected_component_stays_unreached() {
    let mut graph = Graph::new(false);
    let a = graph.add_vertex(1u32);
    let b = graph.add_vertex(2u32);
    let c = graph.add_vertex(3u32);
    let d = graph.add_vertex(4u32);
    graph.add_edge(a, b, 1.0).unwrap();
    graph.add_edge(c, d, 1.0).unwrap();

    let tree = find_minimal_spanning_tree(&graph, a).unwrap();
    assert_eq!(tree.vertex_count(), 4);
    assert_eq!(tree.edge_count(), 1);
    assert!(!tree.is_weakly_connected());

    let weights: Vec<f64> = tree.vertices().map(|vertex| vertex.weight()).collect();
    assert_eq!(weights[0], 0.0);
    assert_eq!(weights[1], 1.0);
    assert!(weights[2].is_infinite());
    assert!(weights[3].is_infinite());
}

#[test]
fn test_parallel_edges_keep_cheapest() {
    let mut graph = Graph::new(false);
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    graph.add_edge(a, b, 9.0).unwrap();
    graph.add_edge(b, a, 2.0).unwrap();
    graph.add_edge(a, a, 0.5).unwrap();

    let tree = find_minimal_spanning_tree(&graph, a).unwrap();
    assert_eq!(tree.edge_count(), 1);
    assert_eq!(tree.total_weight(), 2.0);
}

#[test]
fn test_foreign_source_fails_fast() {
    let (graph, _) = fourteen(false);
    let mut other = Graph::new(false);
    let stranger = other.add_vertex(0u32);

    let err = find_minimal_spanning_tree(&graph, stranger).unwrap_err();
    assert!(matches!(err, WayfinderError::VertexNotFound { .. }));
}

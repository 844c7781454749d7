use super::*;
use crate::error::WayfinderError;

/// Directed fixture: 1→2 (3), 1→3 (5), 2→3 (4), 3→1 (3)
fn triangle() -> (Graph<u32>, Vec<VertexId>) {
    let mut graph = Graph::new(true);
    let ids: Vec<VertexId> = (1..=3).map(|n| graph.add_vertex(n)).collect();
    graph.add_edge(ids[0], ids[1], 3.0).unwrap();
    graph.add_edge(ids[0], ids[2], 5.0).unwrap();
    graph.add_edge(ids[1], ids[2], 4.0).unwrap();
    graph.add_edge(ids[2], ids[0], 3.0).unwrap();
    (graph, ids)
}

fn distances<T>(graph: &Graph<T>) -> Vec<f64> {
    graph.vertices().map(|vertex| vertex.weight()).collect()
}

#[test]
fn test_triangle_tree_and_distances() {
    let (graph, ids) = triangle();
    let tree = find_shortest_paths(&graph, ids[0]).unwrap();

    assert!(tree.is_directed());
    assert_eq!(tree.vertex_count(), 3);
    assert_eq!(distances(&tree), vec![0.0, 3.0, 5.0]);
    assert_eq!(
        tree.vertices().map(|v| *v.data()).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    let edges: Vec<(u32, u32, f64)> = tree
        .edges()
        .map(|edge| {
            (
                *tree.vertex(edge.from_vertex()).unwrap().data(),
                *tree.vertex(edge.to_vertex()).unwrap().data(),
                edge.weight(),
            )
        })
        .collect();
    assert_eq!(edges, vec![(1, 2, 3.0), (1, 3, 5.0)]);
}

#[test]
fn test_result_vertices_are_new_handles() {
    let (graph, ids) = triangle();
    let tree = find_shortest_paths(&graph, ids[0]).unwrap();

    assert_ne!(tree.id(), graph.id());
    assert!(!tree.contains_vertex(ids[0]));
    assert!(tree.vertex_ids().all(|id| id.graph() == tree.id()));
}

#[test]
fn test_input_graph_is_unchanged() {
    let (graph, ids) = triangle();
    let _ = find_shortest_paths(&graph, ids[1]).unwrap();

    assert_eq!(distances(&graph), vec![0.0, 0.0, 0.0]);
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_unreachable_vertex_is_infinite_without_edge() {
    let mut graph = Graph::new(true);
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let island = graph.add_vertex("island");
    graph.add_edge(a, b, 2.0).unwrap();
    // Only leaves the island, never enters it
    graph.add_edge(island, a, 1.0).unwrap();

    let tree = find_shortest_paths(&graph, a).unwrap();
    assert_eq!(tree.vertex_count(), 3);
    assert_eq!(tree.edge_count(), 1);

    let island_weight = tree.vertex(tree.vertex_id_at(island.index())).unwrap().weight();
    assert!(island_weight.is_infinite());
    let island_in_tree = tree.vertex_id_at(island.index());
    assert_eq!(tree.degree(island_in_tree).unwrap(), 0);
}

#[test]
fn test_foreign_source_fails_fast() {
    let (graph, _) = triangle();
    let mut other = Graph::new(true);
    let stranger = other.add_vertex(99u32);

    let err = find_shortest_paths(&graph, stranger).unwrap_err();
    assert!(matches!(err, WayfinderError::VertexNotFound { .. }));
}

#[test]
fn test_undirected_edges_run_both_ways() {
    let mut graph = Graph::new(false);
    let a = graph.add_vertex('a');
    let b = graph.add_vertex('b');
    let c = graph.add_vertex('c');
    graph.add_edge(b, a, 4.0).unwrap();
    graph.add_edge(c, b, 1.0).unwrap();

    let tree = find_shortest_paths(&graph, a).unwrap();
    assert!(!tree.is_directed());
    assert_eq!(distances(&tree), vec![0.0, 4.0, 5.0]);
    assert_eq!(tree.edge_count(), 2);
}

#[test]
fn test_later_improvement_wins_over_first_discovery() {
    // s→far is discovered first at 10, then improved through mid to 3
    let mut graph = Graph::new(true);
    let s = graph.add_vertex("s");
    let mid = graph.add_vertex("mid");
    let far = graph.add_vertex("far");
    graph.add_edge(s, far, 10.0).unwrap();
    graph.add_edge(s, mid, 1.0).unwrap();
    graph.add_edge(mid, far, 2.0).unwrap();

    let tree = find_shortest_paths(&graph, s).unwrap();
    assert_eq!(distances(&tree), vec![0.0, 1.0, 3.0]);

    let into_far: Vec<f64> = tree
        .edges()
        .filter(|edge| edge.to_vertex().index() == far.index())
        .map(|edge| edge.weight())
        .collect();
    assert_eq!(into_far, vec![2.0]);
}

#[test]
fn test_single_vertex_graph() {
    let mut graph = Graph::new(true);
    let only = graph.add_vertex(());
    let tree = find_shortest_paths(&graph, only).unwrap();

    assert_eq!(tree.vertex_count(), 1);
    assert_eq!(tree.edge_count(), 0);
    assert_eq!(distances(&tree), vec![0.0]);
}

#[test]
fn test_zero_weight_edges() {
    let mut graph = Graph::new(true);
    let a = graph.add_vertex(0);
    let b = graph.add_vertex(1);
    graph.add_edge(a, b, 0.0).unwrap();

    let tree = find_shortest_paths(&graph, a).unwrap();
    assert_eq!(distances(&tree), vec![0.0, 0.0]);
    assert_eq!(tree.edge_count(), 1);
}

#[test]
fn test_shortest_path_walks_the_tree() {
    let (graph, ids) = triangle();
    let path = shortest_path(&graph, ids[1], ids[0]).unwrap().unwrap();

    // 2→3 (4) then 3→1 (3)
    assert_eq!(path.vertices, vec![ids[1], ids[2], ids[0]]);
    assert_eq!(path.total_weight, 7.0);
    assert_eq!(path.hops(), 2);
}

#[test]
fn test_shortest_path_to_self_and_unreachable() {
    let mut graph = Graph::new(true);
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");

    let to_self = shortest_path(&graph, a, a).unwrap().unwrap();
    assert_eq!(to_self.vertices, vec![a]);
    assert_eq!(to_self.hops(), 0);
    assert_eq!(to_self.total_weight, 0.0);

    assert!(shortest_path(&graph, a, b).unwrap().is_none());
}

#[test]
fn test_shortest_path_rejects_foreign_target() {
    let (graph, ids) = triangle();
    let other = Graph::<u32>::new(true);
    let stranger = VertexId::new(other.id(), 0);

    let err = shortest_path(&graph, ids[0], stranger).unwrap_err();
    assert!(matches!(err, WayfinderError::VertexNotFound { .. }));
}

//! Output helpers shared by the graph commands

use wayfinder_core::error::Result;
use wayfinder_core::graph::Graph;
use wayfinder_core::records::{format_edge_record, format_vertex_record};

use crate::commands::dispatch::CommandContext;

pub fn arrow(directed: bool) -> &'static str {
    if directed {
        "->"
    } else {
        "--"
    }
}

/// `(from, to, weight)` labels for every edge, in insertion order
pub fn labelled_edges(graph: &Graph<String>) -> Result<Vec<(&str, &str, f64)>> {
    graph
        .edges()
        .map(|edge| {
            Ok((
                graph.vertex(edge.from_vertex())?.data().as_str(),
                graph.vertex(edge.to_vertex())?.data().as_str(),
                edge.weight(),
            ))
        })
        .collect()
}

/// Labels of vertices whose weight marks them unreachable
pub fn unreached(graph: &Graph<String>) -> Vec<&str> {
    graph
        .vertices()
        .filter(|vertex| vertex.is_unreachable())
        .map(|vertex| vertex.data().as_str())
        .collect()
}

/// JSON number, or `null` for an unreachable distance
pub fn json_distance(value: f64) -> serde_json::Value {
    if value.is_finite() {
        serde_json::json!(value)
    } else {
        serde_json::Value::Null
    }
}

pub fn print_edges_human(ctx: &CommandContext, graph: &Graph<String>) -> Result<()> {
    let arrow = arrow(graph.is_directed());
    for (from, to, weight) in labelled_edges(graph)? {
        println!("  {} {} {}  {}", from, arrow, to, ctx.distance(weight));
    }
    Ok(())
}

pub fn print_vertex_records(ctx: &CommandContext, graph: &Graph<String>) {
    for vertex in graph.vertices() {
        println!(
            "{}",
            format_vertex_record(vertex.data(), &ctx.distance(vertex.weight()))
        );
    }
}

pub fn print_edge_records(ctx: &CommandContext, graph: &Graph<String>) -> Result<()> {
    for (from, to, weight) in labelled_edges(graph)? {
        println!("{}", format_edge_record(from, to, &ctx.distance(weight)));
    }
    Ok(())
}

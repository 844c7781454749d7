//! `wayfinder info` - summary of a graph document

use wayfinder_core::error::Result;
use wayfinder_core::records::{format_header, path_relative_to_cwd, quote};

use crate::cli::{InfoArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, args: &InfoArgs) -> Result<()> {
    let labeled = ctx.load_graph(&args.file)?;
    let graph = &labeled.graph;
    let connected = graph.is_weakly_connected();

    match ctx.format() {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "file": path_relative_to_cwd(&args.file),
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
                "directed": graph.is_directed(),
                "weakly_connected": connected,
                "total_weight": graph.total_weight(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Vertices: {}", graph.vertex_count());
            println!("Edges: {}", graph.edge_count());
            println!("Directed: {}", if graph.is_directed() { "yes" } else { "no" });
            println!("Weakly connected: {}", if connected { "yes" } else { "no" });
            println!("Total weight: {}", ctx.distance(graph.total_weight()));
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "info",
                    &[
                        ("file", quote(&path_relative_to_cwd(&args.file))),
                        ("vertices", graph.vertex_count().to_string()),
                        ("edges", graph.edge_count().to_string()),
                        ("directed", graph.is_directed().to_string()),
                        ("connected", connected.to_string()),
                        ("total", ctx.distance(graph.total_weight())),
                    ],
                )
            );
        }
    }
    Ok(())
}

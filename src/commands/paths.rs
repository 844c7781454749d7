//! `wayfinder paths` - shortest distances from one vertex (Dijkstra)

use wayfinder_core::error::Result;
use wayfinder_core::graph::{find_shortest_paths, Graph};
use wayfinder_core::loader::GraphDocument;
use wayfinder_core::records::{format_header, path_relative_to_cwd, quote};

use crate::cli::{OutputFormat, PathsArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::shared;

pub fn execute(ctx: &CommandContext, args: &PathsArgs) -> Result<()> {
    let labeled = ctx.load_graph(&args.file)?;
    let source = labeled.resolve(args.from.as_deref())?;
    let source_label = labeled.label(source)?;

    let tree = find_shortest_paths(&labeled.graph, source)?;
    tracing::debug!(
        source = source_label,
        reached = tree.vertex_count() - shared::unreached(&tree).len(),
        "paths_computed"
    );

    match ctx.format() {
        OutputFormat::Json => output_json(source_label, &tree)?,
        OutputFormat::Human => output_human(ctx, source_label, &tree)?,
        OutputFormat::Records => output_records(ctx, args, source_label, &tree)?,
    }
    Ok(())
}

fn output_human(ctx: &CommandContext, source: &str, tree: &Graph<String>) -> Result<()> {
    if !ctx.cli.quiet {
        println!(
            "Shortest paths from {} ({}, {} vertices)",
            source,
            if tree.is_directed() {
                "directed"
            } else {
                "undirected"
            },
            tree.vertex_count()
        );
    }

    for vertex in tree.vertices() {
        println!("  {}  {}", vertex.data(), ctx.distance(vertex.weight()));
    }

    if tree.edge_count() > 0 {
        if !ctx.cli.quiet {
            println!("Tree edges:");
        }
        shared::print_edges_human(ctx, tree)?;
    }
    Ok(())
}

fn output_json(source: &str, tree: &Graph<String>) -> Result<()> {
    let distances: Vec<_> = tree
        .vertices()
        .map(|vertex| {
            serde_json::json!({
                "label": vertex.data(),
                "distance": shared::json_distance(vertex.weight()),
                "reachable": !vertex.is_unreachable(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "source": source,
        "distances": distances,
        "tree": GraphDocument::from_graph(tree)?,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(
    ctx: &CommandContext,
    args: &PathsArgs,
    source: &str,
    tree: &Graph<String>,
) -> Result<()> {
    println!(
        "{}",
        format_header(
            "paths",
            &[
                ("file", quote(&path_relative_to_cwd(&args.file))),
                ("source", quote(source)),
                ("vertices", tree.vertex_count().to_string()),
                ("edges", tree.edge_count().to_string()),
            ],
        )
    );
    shared::print_vertex_records(ctx, tree);
    shared::print_edge_records(ctx, tree)
}

//! `wayfinder mst` - minimum spanning tree grown from one vertex (Prim)

use wayfinder_core::error::Result;
use wayfinder_core::graph::{find_minimal_spanning_tree, Graph};
use wayfinder_core::loader::GraphDocument;
use wayfinder_core::records::{format_header, path_relative_to_cwd, quote};

use crate::cli::{MstArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::shared;

pub fn execute(ctx: &CommandContext, args: &MstArgs) -> Result<()> {
    let labeled = ctx.load_graph(&args.file)?;
    let source = labeled.resolve(args.from.as_deref())?;
    let source_label = labeled.label(source)?;

    let tree = find_minimal_spanning_tree(&labeled.graph, source)?;
    let unreached = shared::unreached(&tree);
    if !unreached.is_empty() {
        tracing::warn!(
            source = source_label,
            unreached = unreached.len(),
            "graph_not_connected_from_source"
        );
    }

    match ctx.format() {
        OutputFormat::Json => output_json(source_label, &tree, &unreached)?,
        OutputFormat::Human => output_human(ctx, source_label, &tree, &unreached)?,
        OutputFormat::Records => output_records(ctx, args, source_label, &tree)?,
    }
    Ok(())
}

fn output_human(
    ctx: &CommandContext,
    source: &str,
    tree: &Graph<String>,
    unreached: &[&str],
) -> Result<()> {
    if !ctx.cli.quiet {
        println!(
            "Minimum spanning tree from {} ({} edges, total weight {})",
            source,
            tree.edge_count(),
            ctx.distance(tree.total_weight())
        );
    }
    shared::print_edges_human(ctx, tree)?;

    if !unreached.is_empty() && !ctx.cli.quiet {
        println!("Unreached: {}", unreached.join(", "));
    }
    Ok(())
}

fn output_json(source: &str, tree: &Graph<String>, unreached: &[&str]) -> Result<()> {
    let output = serde_json::json!({
        "source": source,
        "total_weight": tree.total_weight(),
        "unreached": unreached,
        "tree": GraphDocument::from_graph(tree)?,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(
    ctx: &CommandContext,
    args: &MstArgs,
    source: &str,
    tree: &Graph<String>,
) -> Result<()> {
    println!(
        "{}",
        format_header(
            "mst",
            &[
                ("file", quote(&path_relative_to_cwd(&args.file))),
                ("source", quote(source)),
                ("edges", tree.edge_count().to_string()),
                ("total", ctx.distance(tree.total_weight())),
            ],
        )
    );
    shared::print_vertex_records(ctx, tree);
    shared::print_edge_records(ctx, tree)
}

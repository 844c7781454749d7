//! `wayfinder path` - one shortest path between two vertices

use wayfinder_core::error::Result;
use wayfinder_core::graph::{shortest_path, PathResult};
use wayfinder_core::loader::LabeledGraph;
use wayfinder_core::records::{format_header, format_path_record, quote};

use crate::cli::{OutputFormat, PathArgs};
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let labeled = ctx.load_graph(&args.file)?;
    let from = labeled.resolve(args.from.as_deref())?;
    let to = labeled.resolve_as(args.to.as_deref(), "target")?;

    let found = shortest_path(&labeled.graph, from, to)?;
    let labels = match &found {
        Some(path) => path_labels(&labeled, path)?,
        None => Vec::new(),
    };
    let from_label = labeled.label(from)?;
    let to_label = labeled.label(to)?;

    match ctx.format() {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from_label,
                "to": to_label,
                "reachable": found.is_some(),
                "vertices": labels,
                "hops": found.as_ref().map(PathResult::hops),
                "total_weight": found.as_ref().map(|path| path.total_weight),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match &found {
            Some(path) => println!(
                "{} (total {}, {} hops)",
                labels.join(" -> "),
                ctx.distance(path.total_weight),
                path.hops()
            ),
            None => {
                if !ctx.cli.quiet {
                    println!("No path from {} to {}", from_label, to_label);
                }
            }
        },
        OutputFormat::Records => {
            let total = found
                .as_ref()
                .map_or(f64::INFINITY, |path| path.total_weight);
            println!(
                "{}",
                format_header(
                    "path",
                    &[
                        ("from", quote(from_label)),
                        ("to", quote(to_label)),
                        ("reachable", found.is_some().to_string()),
                        ("total", ctx.distance(total)),
                    ],
                )
            );
            for (hop, label) in labels.iter().enumerate() {
                println!("{}", format_path_record(hop, label));
            }
        }
    }
    Ok(())
}

fn path_labels<'a>(labeled: &'a LabeledGraph, path: &PathResult) -> Result<Vec<&'a str>> {
    path.vertices
        .iter()
        .map(|&vertex| labeled.label(vertex))
        .collect()
}

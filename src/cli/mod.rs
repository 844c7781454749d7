//! CLI argument parsing for wayfinder
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{InfoArgs, MstArgs, PathArgs, PathsArgs};
pub use wayfinder_core::format::OutputFormat;
use parse::parse_format;

/// Wayfinder - shortest paths and spanning trees over weighted graphs
#[derive(Parser, Debug)]
#[command(name = "wayfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records [default: from config, else human]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, wayfinder_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file to use instead of the user config
    #[arg(long, global = true, env = "WAYFINDER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest distances from one vertex to every other (Dijkstra)
    Paths(PathsArgs),

    /// Shortest path between two vertices
    Path(PathArgs),

    /// Minimum spanning tree grown from one vertex (Prim)
    Mst(MstArgs),

    /// Vertex and edge counts, direction and connectivity
    Info(InfoArgs),
}

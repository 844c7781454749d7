//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use wayfinder_core::config::WayfinderConfig;
use wayfinder_core::error::Result;
use wayfinder_core::format::format_distance;
use wayfinder_core::loader::{GraphDocument, LabeledGraph};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a WayfinderConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a WayfinderConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--format` when given, else the configured format
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.format)
    }

    /// Load a graph document and build its graph
    pub fn load_graph(&self, path: &Path) -> Result<LabeledGraph> {
        let document = GraphDocument::load(path)?;
        super::trace_command!(self.cli, self.start, "load_document");
        let labeled = document.build(self.config.default_directed)?;
        super::trace_command!(self.cli, self.start, "build_graph");
        Ok(labeled)
    }

    /// Render a distance or weight per the configured precision
    pub fn distance(&self, value: f64) -> String {
        format_distance(value, self.config.precision, &self.config.infinity_label)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("wayfinder {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths and spanning trees over weighted graph documents.");
        println!();
        println!("Run `wayfinder --help` for usage information.");
        Ok(())
    }
}

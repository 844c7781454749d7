//! Command implementations for all wayfinder commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use wayfinder_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Paths(args) => crate::commands::paths::execute(ctx, args),
            Commands::Path(args) => crate::commands::path::execute(ctx, args),
            Commands::Mst(args) => crate::commands::mst::execute(ctx, args),
            Commands::Info(args) => crate::commands::info::execute(ctx, args),
        };
        super::trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}

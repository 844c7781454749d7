//! Command dispatch logic for wayfinder

use std::time::Instant;

use crate::cli::Cli;
use wayfinder_core::config::WayfinderConfig;
use wayfinder_core::error::Result;

mod command;
mod commands;
mod macros;

pub(crate) use command::CommandContext;
use command::{Command, NoCommand};
pub(crate) use macros::trace_command;

/// Load the config named by `--config`, or the user config
pub fn load_config(cli: &Cli) -> Result<WayfinderConfig> {
    match &cli.config {
        Some(path) => WayfinderConfig::load_from(path),
        None => WayfinderConfig::load(),
    }
}

pub fn run(cli: &Cli, config: &WayfinderConfig, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

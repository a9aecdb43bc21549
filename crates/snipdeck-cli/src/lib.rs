mod cli;
mod commands;

use clap::Parser;
use snipdeck_core::Result;

pub use cli::{Command, GroupCommand, ItemCommand, Snipdeck};

/// Parse the command line and run the selected command.
pub fn run() -> Result<()> {
    let args = Snipdeck::parse();
    commands::handle_command(args.command)
}

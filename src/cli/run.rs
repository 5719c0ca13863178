use std::path::Path;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, extract::extract, init::init},
};
use anyhow::Result;

/// Dispatch to the command handler for the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => init(Path::new(".")),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

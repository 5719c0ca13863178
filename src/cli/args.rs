//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Build the init resource table from fluxbox(1) and the source tree
//! - `init`: Initialize fbinit configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::TableFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Generated fluxbox(1) man page (overrides config file)
    #[arg(long, env = "FBINIT_MANPAGE")]
    pub manpage: Option<PathBuf>,

    /// Source tree root to scan (overrides config file)
    #[arg(long, env = "FBINIT_SRC_ROOT")]
    pub src_root: Option<PathBuf>,

    /// Output path, '-' for stdout (overrides config file)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = TableFormat::Tsv)]
    pub format: TableFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract init resources into a key/type/scope/source table
    Extract(ExtractCommand),
    /// Initialize a new .fbinitrc.json configuration file
    Init,
}

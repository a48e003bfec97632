//! textkit command-line entry point

use anyhow::Result;
use clap::Parser;
use textkit_cli::commands::{Commands, GlobalArgs};

/// Prepare Chinese text corpora: split, merge, cut, normalize and partition files
#[derive(Debug, Parser)]
#[command(name = "textkit", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.global.init_logging();

    let ctx = cli.global.context()?;
    cli.command.execute(&ctx)
}

//! Split a file into a fixed number of equal chunks
//!
//! Shorthand for `textkit split <INPUT> <CHUNKS>`; leftover lines are dropped.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use textkit_cli::commands::split::run_split;
use textkit_core::{LoadOptions, SplitMethod};

/// Split a file into CHUNKS files named <stem>_<n>.txt
#[derive(Debug, Parser)]
#[command(name = "textkit-split", version, about, long_about = None)]
struct Args {
    /// File to split
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Number of chunks
    #[arg(value_name = "CHUNKS")]
    chunks: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let method = SplitMethod::parse("num", &args.chunks, "1", "1")?;
    let outputs = run_split(&args.input, method, LoadOptions::default(), true)?;
    println!("Wrote {} files from {}", outputs.len(), args.input.display());
    Ok(())
}

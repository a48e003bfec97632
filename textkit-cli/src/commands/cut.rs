//! Cut command implementation

use super::Context;
use crate::error::CliError;
use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;
use textkit_core::paragraph::split_file_by_max_length;

/// Arguments for the cut command
#[derive(Debug, Args)]
pub struct CutArgs {
    /// File with one long text per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file, one piece per line
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Maximum characters per piece
    #[arg(long = "max", value_name = "N")]
    pub max_length: Option<usize>,

    /// Minimum characters for a piece to be kept
    #[arg(long = "min", value_name = "N")]
    pub min_length: Option<usize>,
}

impl CutArgs {
    /// Resolve `(max, min)` from flags and configuration
    pub fn lengths(&self, ctx: &Context) -> Result<(usize, usize)> {
        let settings = &ctx.config.paragraph;
        let max = self.max_length.or(settings.max_length).ok_or_else(|| {
            CliError::ConfigError("--max or paragraph.max_length is required".to_string())
        })?;
        let min = self.min_length.unwrap_or(settings.min_length);
        Ok((max, min))
    }

    /// Execute the cut command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let (max, min) = self.lengths(ctx)?;
        log::info!("cutting {} into pieces of {}..={} chars", self.input.display(), min, max);

        let written = split_file_by_max_length(&self.input, &self.output, max, min, ctx.load)
            .with_context(|| format!("Failed to cut {}", self.input.display()))?;
        println!("Wrote {} lines to {}", written, self.output.display());
        Ok(())
    }
}

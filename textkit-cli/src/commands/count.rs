//! Count command implementation

use super::Context;
use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;
use textkit_core::files::count_lines;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// File whose lines are counted
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self, _ctx: &Context) -> Result<()> {
        let lines = count_lines(&self.input)
            .with_context(|| format!("Failed to count lines of {}", self.input.display()))?;
        println!("{lines}");
        Ok(())
    }
}

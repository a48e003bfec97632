//! Sentences command implementation

use super::Context;
use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;
use textkit_core::paragraph::extract_sentence_file;

/// Arguments for the sentences command
#[derive(Debug, Args)]
pub struct SentencesArgs {
    /// Text file to scan
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file, one sentence per line
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Keep sentences longer than this many characters
    #[arg(long, value_name = "N")]
    pub min_chars: Option<usize>,
}

impl SentencesArgs {
    /// Execute the sentences command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let min_chars = self
            .min_chars
            .unwrap_or(ctx.config.paragraph.min_sentence_chars);

        let written = extract_sentence_file(&self.input, &self.output, min_chars, ctx.load)
            .with_context(|| format!("Failed to extract sentences from {}", self.input.display()))?;
        println!("Wrote {} sentences to {}", written, self.output.display());
        Ok(())
    }
}

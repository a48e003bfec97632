//! Split command implementation

use super::Context;
use crate::progress::ProgressReporter;
use anyhow::{Context as _, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use textkit_core::files::split_file;
use textkit_core::{LoadOptions, SplitMethod};

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// File to split; outputs are written next to it
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of chunks (count method)
    #[arg(value_name = "CHUNKS", default_value = "10")]
    pub chunks: String,

    /// How to split
    #[arg(short, long, value_enum, default_value = "num")]
    pub method: Method,

    /// Lines per file (line-num method)
    #[arg(short, long, value_name = "N")]
    pub lines: Option<String>,

    /// Size per file such as 5k or 10M (mem method)
    #[arg(short, long, value_name = "SIZE")]
    pub size: Option<String>,

    /// Write leftover lines as an extra chunk (count method)
    #[arg(short, long)]
    pub keep_remainder: bool,
}

/// Supported split methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Method {
    /// Into CHUNKS files of equal line count
    Num,
    /// A new file every N lines
    LineNum,
    /// A new file every SIZE bytes
    Mem,
}

impl Method {
    /// Name understood by [`SplitMethod::parse`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Num => "num",
            Method::LineNum => "line_num",
            Method::Mem => "mem",
        }
    }
}

impl SplitArgs {
    /// Resolve the split method from flags and configuration
    pub fn method(&self, ctx: &Context) -> Result<SplitMethod> {
        let settings = &ctx.config.split;
        let lines = self
            .lines
            .clone()
            .unwrap_or_else(|| settings.lines_per_file.to_string());
        let size = self.size.as_deref().unwrap_or(&settings.size);

        let method = match SplitMethod::parse(self.method.as_str(), &self.chunks, &lines, size)? {
            SplitMethod::Count { chunks, .. } => SplitMethod::Count {
                chunks,
                keep_remainder: self.keep_remainder || settings.keep_remainder,
            },
            other => other,
        };
        Ok(method)
    }

    /// Execute the split command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let method = self.method(ctx)?;
        log::debug!("split method: {:?}", method);

        let outputs = run_split(&self.input, method, ctx.load, ctx.quiet)?;
        println!(
            "Wrote {} files from {}",
            outputs.len(),
            self.input.display()
        );
        Ok(())
    }
}

/// Split `input` and report each created file
pub fn run_split(
    input: &Path,
    method: SplitMethod,
    load: LoadOptions,
    quiet: bool,
) -> Result<Vec<PathBuf>> {
    let mut progress = ProgressReporter::new(quiet);
    progress.init_spinner(&format!("Splitting {}", input.display()));

    let outputs = split_file(input, method, load)
        .with_context(|| format!("Failed to split {}", input.display()))?;

    for output in &outputs {
        progress.item_completed(&output.display().to_string());
    }
    progress.finish();
    Ok(outputs)
}

//! Prep command implementation

use super::Context;
use crate::input::resolve_patterns;
use crate::progress::ProgressReporter;
use anyhow::{Context as _, Result};
use clap::Args;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use textkit_core::files::{load_to_list, LineWriter};
use textkit_core::text::{preprocess, Collaborators};
use textkit_core::{PreprocessConfig, PreprocessSteps};

/// Arguments for the prep command
#[derive(Debug, Args)]
pub struct PrepArgs {
    /// Input files or glob patterns, one sentence per line
    #[arg(value_name = "FILES", required = true)]
    pub inputs: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Stopword file, one word per line
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Segment sentences and drop stopwords
    #[arg(long)]
    pub remove_stopwords: bool,

    /// Leave digit runs unmasked
    #[arg(long)]
    pub keep_digits: bool,

    /// Leave full-width characters as they are
    #[arg(long)]
    pub keep_fullwidth: bool,

    /// Leave punctuation in place
    #[arg(long)]
    pub keep_punctuation: bool,

    /// Skip traditional to simplified conversion
    #[arg(long)]
    pub keep_traditional: bool,

    /// Skip lowercasing
    #[arg(long)]
    pub keep_case: bool,

    /// Leave whitespace in place
    #[arg(long)]
    pub keep_whitespace: bool,
}

impl PrepArgs {
    /// Combine configured steps with the command-line toggles
    pub fn steps(&self, ctx: &Context) -> PreprocessSteps {
        let mut steps = ctx.config.preprocess.steps;
        steps.mask_digits &= !self.keep_digits;
        steps.to_halfwidth &= !self.keep_fullwidth;
        steps.strip_punctuation &= !self.keep_punctuation;
        steps.to_simplified &= !self.keep_traditional;
        steps.lowercase &= !self.keep_case;
        steps.strip_whitespace &= !self.keep_whitespace;
        steps.remove_stopwords |= self.remove_stopwords;
        steps
    }

    /// Build the preprocessing configuration, loading stopwords if needed
    pub fn build_config(&self, ctx: &Context) -> Result<PreprocessConfig> {
        let steps = self.steps(ctx);
        let mut builder = PreprocessConfig::builder().steps(steps);

        if steps.remove_stopwords {
            match self
                .stopwords
                .as_ref()
                .or(ctx.config.preprocess.stopwords.as_ref())
            {
                Some(path) => {
                    builder = builder.stopwords_file(path, ctx.load).with_context(|| {
                        format!("Failed to load stopwords from {}", path.display())
                    })?;
                }
                None => log::warn!(
                    "stopword removal requested without --stopwords or preprocess.stopwords; \
                     leaving stopwords in place"
                ),
            }
        }
        Ok(builder.build())
    }

    /// Execute the prep command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let files = resolve_patterns(&self.inputs)?;
        let config = self.build_config(ctx)?;

        let collaborators = if config.steps().to_simplified || config.filters_stopwords() {
            Collaborators::chinese()
        } else {
            Collaborators::identity()
        };

        let mut progress = ProgressReporter::new(ctx.quiet || self.output.is_none());
        progress.init(files.len() as u64, "files");

        let mut sink = Sink::open(self.output.as_ref())?;
        let mut total = 0usize;
        for file in &files {
            let sentences = load_to_list(file, ctx.load)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            for sentence in &sentences {
                sink.write_line(&preprocess(sentence, &config, &collaborators))?;
            }
            total += sentences.len();
            progress.item_completed(&file.display().to_string());
        }
        sink.finish()?;
        progress.finish();

        log::info!("preprocessed {} sentences from {} files", total, files.len());
        Ok(())
    }
}

enum Sink {
    File(LineWriter),
    Stdout(BufWriter<io::Stdout>),
}

impl Sink {
    fn open(output: Option<&PathBuf>) -> Result<Self> {
        Ok(match output {
            Some(path) => Sink::File(LineWriter::create(path)?),
            None => Sink::Stdout(BufWriter::new(io::stdout())),
        })
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        match self {
            Sink::File(writer) => writer.write_line(line)?,
            Sink::Stdout(out) => writeln!(out, "{line}")?,
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        match self {
            Sink::File(writer) => {
                writer.finish()?;
            }
            Sink::Stdout(mut out) => out.flush()?,
        }
        Ok(())
    }
}

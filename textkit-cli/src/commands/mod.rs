//! CLI command implementations

use crate::config::CliConfig;
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use textkit_core::LoadOptions;

pub mod count;
pub mod cut;
pub mod merge;
pub mod partition;
pub mod prep;
pub mod sentences;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a file into several smaller files
    Split(split::SplitArgs),

    /// Concatenate every file under a directory into one file
    Merge(merge::MergeArgs),

    /// Cut long lines into pieces of bounded length
    Cut(cut::CutArgs),

    /// Extract distinct sentences split on Chinese sentence-ending marks
    Sentences(sentences::SentencesArgs),

    /// Normalize sentences (digits, width, punctuation, script, case, stopwords)
    Prep(prep::PrepArgs),

    /// Partition a file into train, test and dev sets
    Partition(partition::PartitionArgs),

    /// Count the lines of a file
    Count(count::CountArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(ctx),
            Commands::Merge(args) => args.execute(ctx),
            Commands::Cut(args) => args.execute(ctx),
            Commands::Sentences(args) => args.execute(ctx),
            Commands::Prep(args) => args.execute(ctx),
            Commands::Partition(args) => args.execute(ctx),
            Commands::Count(args) => args.execute(ctx),
        }
    }
}

/// Flags shared by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", global = true, env = "TEXTKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Fail on invalid UTF-8 and malformed records instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a logger may already be installed when running under tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Build the execution context from flags and the configuration file
    pub fn context(&self) -> Result<Context> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let load = if self.strict {
            LoadOptions::strict()
        } else {
            config.load
        };
        Ok(Context {
            config,
            load,
            quiet: self.quiet,
        })
    }
}

/// Settings resolved once and handed to every command
#[derive(Debug)]
pub struct Context {
    /// Values from the configuration file
    pub config: CliConfig,
    /// Effective load options
    pub load: LoadOptions,
    /// Whether progress output is suppressed
    pub quiet: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            config: CliConfig::default(),
            load: LoadOptions::default(),
            quiet: true,
        }
    }
}

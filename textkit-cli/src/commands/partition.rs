//! Partition command implementation

use super::Context;
use anyhow::{Context as _, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use textkit_core::files::write_lines;
use textkit_core::{partition, DatasetInput, Partition, PartitionConfig};

/// Arguments for the partition command
#[derive(Debug, Args)]
pub struct PartitionArgs {
    /// File with one record per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory receiving train.txt, test.txt and dev.txt
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Fraction of records for the test set
    #[arg(long, value_name = "FRACTION")]
    pub test_size: Option<f64>,

    /// Fraction of the remaining records for the dev set
    #[arg(long, value_name = "FRACTION")]
    pub dev_size: Option<f64>,

    /// Shuffle records before splitting
    #[arg(long)]
    pub shuffle: bool,

    /// Seed for shuffling (implies --shuffle)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

impl PartitionArgs {
    /// Combine configured parameters with the command-line flags
    pub fn config(&self, ctx: &Context) -> PartitionConfig {
        let base = ctx.config.partition;
        PartitionConfig {
            test_size: self.test_size.unwrap_or(base.test_size),
            dev_size: self.dev_size.unwrap_or(base.dev_size),
            shuffle: self.shuffle || self.seed.is_some() || base.shuffle,
            seed: self.seed.or(base.seed),
        }
    }

    /// Execute the partition command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let config = self.config(ctx);
        let parts = partition(DatasetInput::from_file(&self.input), &config, ctx.load)
            .with_context(|| format!("Failed to partition {}", self.input.display()))?;

        write_partition(&parts, &self.out_dir)?;
        println!(
            "train: {}, test: {}, dev: {}",
            parts.train.len(),
            parts.test.len(),
            parts.dev.len()
        );
        Ok(())
    }
}

/// Write each subset to `<dir>/<name>.txt`
pub fn write_partition(parts: &Partition, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    for (name, records) in [("train", &parts.train), ("test", &parts.test), ("dev", &parts.dev)] {
        let path = dir.join(format!("{name}.txt"));
        write_lines(records, &path)?;
        log::debug!("wrote {} records to {}", records.len(), path.display());
    }
    Ok(())
}

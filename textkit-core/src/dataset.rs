//! Train/test/dev partitioning
//!
//! The test set is carved from the full data first; the dev set is then
//! carved from what remains of the training set.

use crate::config::LoadOptions;
use crate::error::{Error, Result};
use crate::files::reader::load_to_list;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Data to partition
#[derive(Debug, Clone)]
pub enum DatasetInput {
    /// Records already in memory
    Lines(Vec<String>),
    /// A file with one record per line
    File(PathBuf),
}

impl DatasetInput {
    /// Create input from records
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DatasetInput::Lines(lines.into_iter().map(Into::into).collect())
    }

    /// Create input from a file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        DatasetInput::File(path.as_ref().to_path_buf())
    }

    fn into_lines(self, options: LoadOptions) -> Result<Vec<String>> {
        match self {
            DatasetInput::Lines(lines) => Ok(lines),
            DatasetInput::File(path) if path.is_file() => load_to_list(&path, options),
            DatasetInput::File(path) => Err(Error::validation(format!(
                "{} is not an existing file",
                path.display()
            ))),
        }
    }
}

/// Partition parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PartitionConfig {
    /// Fraction of all records that go to the test set
    pub test_size: f64,
    /// Fraction of the remaining training records that go to the dev set
    pub dev_size: f64,
    /// Shuffle before carving out the test set; the dev set is always drawn at random
    pub shuffle: bool,
    /// Seed for the random draws; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            test_size: 0.2,
            dev_size: 0.1,
            shuffle: false,
            seed: None,
        }
    }
}

impl PartitionConfig {
    fn validate(&self) -> Result<()> {
        for (name, value) in [("test_size", self.test_size), ("dev_size", self.dev_size)] {
            if !(value > 0.0 && value < 1.0) {
                return Err(Error::validation(format!(
                    "{name} must be between 0 and 1 exclusive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// The three subsets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Training records
    pub train: Vec<String>,
    /// Test records
    pub test: Vec<String>,
    /// Dev (validation) records
    pub dev: Vec<String>,
}

impl Partition {
    /// Total number of records across all subsets
    pub fn len(&self) -> usize {
        self.train.len() + self.test.len() + self.dev.len()
    }

    /// Whether all subsets are empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split `records` in two, the second part holding `ceil(fraction * n)` records
///
/// Without shuffling the first part is the leading slice.
pub fn split_two<T>(
    mut records: Vec<T>,
    fraction: f64,
    rng: Option<&mut ChaCha8Rng>,
) -> Result<(Vec<T>, Vec<T>)> {
    let n = records.len();
    let n_second = (fraction * n as f64).ceil() as usize;
    if n_second == 0 || n_second >= n {
        return Err(Error::validation(format!(
            "splitting {n} records with fraction {fraction} leaves an empty side"
        )));
    }

    if let Some(rng) = rng {
        records.shuffle(rng);
    }
    let second = records.split_off(n - n_second);
    Ok((records, second))
}

/// Partition records into train, test and dev sets
pub fn partition(
    input: DatasetInput,
    config: &PartitionConfig,
    options: LoadOptions,
) -> Result<Partition> {
    config.validate()?;
    let records = input.into_lines(options)?;
    let total = records.len();

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let (train, test) = split_two(records, config.test_size, config.shuffle.then_some(&mut rng))?;
    // dev is always a random draw from train
    let (train, dev) = split_two(train, config.dev_size, Some(&mut rng))?;

    log::info!(
        "partitioned {} records into train={} test={} dev={}",
        total,
        train.len(),
        test.len(),
        dev.len()
    );
    Ok(Partition { train, test, dev })
}

//! Configuration file support
//!
//! Every section is optional; missing keys fall back to the defaults below.
//! Command-line flags override values read from the file.
//!
//! ```toml
//! [load]
//! decode = "strict"
//! malformed = "fail"
//!
//! [preprocess]
//! mask_digits = true
//! remove_stopwords = true
//! stopwords = "dicts/stopwords.txt"
//!
//! [split]
//! keep_remainder = true
//!
//! [paragraph]
//! max_length = 256
//! min_length = 20
//!
//! [partition]
//! test_size = 0.2
//! dev_size = 0.1
//! shuffle = true
//! seed = 42
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use textkit_core::paragraph::{DEFAULT_MIN_LENGTH, DEFAULT_MIN_SENTENCE_CHARS};
use textkit_core::{LoadOptions, PartitionConfig, PreprocessSteps};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CliConfig {
    /// File reading configuration
    pub load: LoadOptions,

    /// Sentence preprocessing configuration
    pub preprocess: PreprocessSettings,

    /// File splitting configuration
    pub split: SplitSettings,

    /// Paragraph cutting configuration
    pub paragraph: ParagraphSettings,

    /// Dataset partitioning configuration
    pub partition: PartitionConfig,
}

impl CliConfig {
    /// Read a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Preprocessing-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PreprocessSettings {
    /// Step toggles
    #[serde(flatten)]
    pub steps: PreprocessSteps,

    /// Stopword file, one word per line
    pub stopwords: Option<PathBuf>,
}

/// Splitting-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SplitSettings {
    /// Write leftover lines as an extra chunk
    pub keep_remainder: bool,

    /// Lines per file for line-count mode
    pub lines_per_file: usize,

    /// Size per file for byte mode, e.g. `5k`
    pub size: String,
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            keep_remainder: false,
            lines_per_file: 100,
            size: "5k".to_string(),
        }
    }
}

/// Paragraph cutting configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ParagraphSettings {
    /// Maximum characters per piece
    pub max_length: Option<usize>,

    /// Minimum characters for a piece to be kept
    pub min_length: usize,

    /// Sentences must be longer than this many characters to be extracted
    pub min_sentence_chars: usize,
}

impl Default for ParagraphSettings {
    fn default() -> Self {
        Self {
            max_length: None,
            min_length: DEFAULT_MIN_LENGTH,
            min_sentence_chars: DEFAULT_MIN_SENTENCE_CHARS,
        }
    }
}

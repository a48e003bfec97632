//! Configuration values shared across operations

use crate::error::Result;
use crate::files::reader;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// How invalid UTF-8 in input files is handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Drop invalid byte sequences and keep going
    #[default]
    Lossy,
    /// Fail on the first invalid byte sequence
    Strict,
}

/// How malformed records in structured files are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLines {
    /// Log a warning and skip the record
    #[default]
    Skip,
    /// Abort the load with a parse error
    Fail,
}

/// Options controlling how files are read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Decoding policy
    pub decode: DecodeMode,
    /// Malformed-record policy
    pub malformed: MalformedLines,
}

impl LoadOptions {
    /// Lossy decoding, malformed records skipped
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Strict decoding, malformed records are errors
    pub fn strict() -> Self {
        Self {
            decode: DecodeMode::Strict,
            malformed: MalformedLines::Fail,
        }
    }
}

/// Toggles for each preprocessing step, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PreprocessSteps {
    /// Replace digit runs with `<num>`
    pub mask_digits: bool,
    /// Map full-width forms to ASCII
    pub to_halfwidth: bool,
    /// Remove punctuation characters
    pub strip_punctuation: bool,
    /// Convert traditional script to simplified
    pub to_simplified: bool,
    /// Lowercase the text
    pub lowercase: bool,
    /// Remove whitespace characters
    pub strip_whitespace: bool,
    /// Segment and drop stopwords
    pub remove_stopwords: bool,
}

impl Default for PreprocessSteps {
    fn default() -> Self {
        Self {
            mask_digits: true,
            to_halfwidth: true,
            strip_punctuation: true,
            to_simplified: true,
            lowercase: true,
            strip_whitespace: true,
            remove_stopwords: false,
        }
    }
}

impl PreprocessSteps {
    /// Every step disabled
    pub fn none() -> Self {
        Self {
            mask_digits: false,
            to_halfwidth: false,
            strip_punctuation: false,
            to_simplified: false,
            lowercase: false,
            strip_whitespace: false,
            remove_stopwords: false,
        }
    }
}

/// Immutable preprocessing configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreprocessConfig {
    pub(crate) steps: PreprocessSteps,
    pub(crate) stopwords: HashSet<String>,
}

impl PreprocessConfig {
    /// Create a configuration builder
    pub fn builder() -> PreprocessConfigBuilder {
        PreprocessConfigBuilder::default()
    }

    /// Step toggles
    pub fn steps(&self) -> &PreprocessSteps {
        &self.steps
    }

    /// Loaded stopwords, possibly empty
    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    /// Whether stopword removal will actually run
    pub fn filters_stopwords(&self) -> bool {
        self.steps.remove_stopwords && !self.stopwords.is_empty()
    }
}

/// Fluent builder for [`PreprocessConfig`]
#[derive(Debug, Default)]
pub struct PreprocessConfigBuilder {
    steps: Option<PreprocessSteps>,
    stopwords: HashSet<String>,
}

impl PreprocessConfigBuilder {
    /// Create a new builder with default steps and no stopwords
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all step toggles at once
    pub fn steps(mut self, steps: PreprocessSteps) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Add stopwords from memory
    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Load stopwords from a file, one per line
    ///
    /// An empty path leaves the stopword set untouched.
    pub fn stopwords_file(mut self, path: impl AsRef<Path>, options: LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Ok(self);
        }
        let words = reader::load_to_set(path, options)?;
        log::debug!("loaded {} stopwords from {}", words.len(), path.display());
        self.stopwords.extend(words.into_iter().filter(|w| !w.is_empty()));
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> PreprocessConfig {
        PreprocessConfig {
            steps: self.steps.unwrap_or_default(),
            stopwords: self.stopwords,
        }
    }
}

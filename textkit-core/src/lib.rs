//! Helpers for preparing Chinese text corpora
//!
//! The crate groups small, single-pass operations:
//! - **files**: load lines, sets, weight tables and word vectors; count,
//!   split and merge files; write line collections
//! - **text**: character classes, full-width to half-width mapping and a
//!   configurable sentence normalization pipeline
//! - **paragraph**: cut long lines into bounded pieces and extract sentences
//! - **dataset**: train/test/dev partitioning
//!
//! # Example
//!
//! ```rust
//! use textkit_core::paragraph::split_by_max;
//! use textkit_core::text::{preprocess, Collaborators};
//! use textkit_core::PreprocessConfig;
//!
//! let config = PreprocessConfig::default();
//! let clean = preprocess("ＡＢＣ，第1章", &config, &Collaborators::identity());
//! assert_eq!(clean, "abc第num章");
//!
//! let pieces = split_by_max("一二三四五六七八", 3, 2).unwrap();
//! assert_eq!(pieces, vec!["一二三", "四五六", "七八"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod files;
pub mod paragraph;
pub mod text;

pub use config::{
    DecodeMode, LoadOptions, MalformedLines, PreprocessConfig, PreprocessConfigBuilder,
    PreprocessSteps,
};
pub use dataset::{partition, DatasetInput, Partition, PartitionConfig};
pub use error::{Error, Result};
pub use files::SplitMethod;

//! File utilities: loading, lexicons, chunking, merging and writing

pub mod chunk;
pub mod lexicon;
pub mod merge;
pub mod reader;
pub mod writer;

pub use chunk::{parse_size, split_file, SplitMethod};
pub use lexicon::{load_idf, load_word2vec, TermVectors, TermWeights};
pub use merge::{merge_directory, merge_directory_with, MergeStats};
pub use reader::{count_lines, load_to_list, load_to_set, LineReader};
pub use writer::{write_lines, LineWriter};

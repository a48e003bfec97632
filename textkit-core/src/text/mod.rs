//! Chinese text normalization

pub mod backend;
pub mod chars;
pub mod preprocess;

pub use backend::{
    Collaborators, Identity, JiebaSegmenter, OpenccConverter, ScriptConverter, Segmenter,
};
pub use chars::{
    is_punctuation, is_whitespace, mask_digits, strip_punctuation, strip_whitespace, to_halfwidth,
    to_halfwidth_char,
};
pub use preprocess::{preprocess, preprocess_all};
